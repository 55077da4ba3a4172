//! Clock-time formatting for chat timestamps.

/// Format epoch milliseconds as `HH:MM`: browser local time under `csr`,
/// UTC otherwise.
pub fn format_clock_time(timestamp_ms: f64) -> String {
    #[cfg(feature = "csr")]
    {
        let date = js_sys::Date::new(&wasm_bindgen::JsValue::from_f64(timestamp_ms));
        format_hh_mm(i64::from(date.get_hours()), i64::from(date.get_minutes()))
    }
    #[cfg(not(feature = "csr"))]
    {
        #[allow(clippy::cast_possible_truncation)]
        let total_minutes = (timestamp_ms / 60_000.0).floor() as i64;
        format_hh_mm(total_minutes.div_euclid(60).rem_euclid(24), total_minutes.rem_euclid(60))
    }
}

fn format_hh_mm(hours: i64, minutes: i64) -> String {
    format!("{hours:02}:{minutes:02}")
}
