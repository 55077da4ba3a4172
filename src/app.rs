//! Root application component.
//!
//! SYSTEM CONTEXT
//! ==============
//! Builds the services for the current target, loads startup state (honoring
//! the persisted welcome flag), and provides both the state signal and the
//! controller as context. Screens are swapped on `current_view`; there is no
//! URL routing.

use leptos::prelude::*;
use leptos_meta::{Meta, Title, provide_meta_context};

use crate::components::{nav_bar::NavBar, tips_banner::TipsBanner};
use crate::config::AppConfig;
use crate::controller::{AppController, Services};
use crate::pages::{
    camera::CameraPage, chat::ChatPage, inventory::InventoryPage, planner::PlannerPage, recipes::RecipesPage,
    welcome::WelcomePage,
};
use crate::state::app::ViewType;

/// Root application component.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = AppConfig::from_build_env().unwrap_or_else(|err| {
        log::warn!("falling back to default config: {err}");
        AppConfig::default()
    });
    let services = Services::platform();
    let state = RwSignal::new(services.initial_state());
    let controller = AppController::new(state, services, config);

    provide_context(state);
    provide_context(controller.clone());
    controller.start_tip_rotation();

    let current_view = Memo::new(move |_| state.with(|s| s.current_view));

    view! {
        <Title text="Fresh Pantry"/>
        <Meta name="viewport" content="width=device-width, initial-scale=1"/>

        <main class="app">
            {move || match current_view.get() {
                ViewType::Welcome => view! { <WelcomePage/> }.into_any(),
                ViewType::Camera => view! { <CameraPage/> }.into_any(),
                ViewType::Chat => view! { <ChatPage/> }.into_any(),
                ViewType::Inventory => view! { <InventoryPage/> }.into_any(),
                ViewType::Recipes => view! { <RecipesPage/> }.into_any(),
                ViewType::Planner => view! { <PlannerPage/> }.into_any(),
            }}
            <Show when=move || current_view.get() != ViewType::Welcome>
                <TipsBanner/>
                <NavBar/>
            </Show>
        </main>
    }
}
