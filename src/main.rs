//! Client-side entry point. Mounts [`fresh_pantry::app::App`] into `<body>`.

fn main() {
    #[cfg(feature = "csr")]
    {
        console_error_panic_hook::set_once();
        let _ = console_log::init_with_level(log::Level::Debug);
        log::info!("fresh pantry starting");
        leptos::mount::mount_to_body(fresh_pantry::app::App);
    }
}
