//! Bottom navigation bar.

#[cfg(test)]
#[path = "nav_bar_test.rs"]
mod nav_bar_test;

use leptos::prelude::*;

use crate::controller::AppController;
use crate::state::app::{AppState, ViewType};

/// Icon and label for a navigation entry.
pub fn nav_entry(view: ViewType) -> (&'static str, &'static str) {
    match view {
        ViewType::Camera => ("📸", "Scan"),
        ViewType::Chat => ("💬", "VeggieAI"),
        ViewType::Inventory => ("📦", "Pantry"),
        ViewType::Recipes => ("👨‍🍳", "Recipes"),
        ViewType::Planner => ("📅", "Planner"),
        ViewType::Welcome => ("🥬", "Welcome"),
    }
}

#[component]
pub fn NavBar() -> impl IntoView {
    let state = expect_context::<RwSignal<AppState>>();
    let controller = expect_context::<AppController>();

    let current = Memo::new(move |_| state.with(|s| s.current_view));
    let go_to = Callback::new(move |target: ViewType| controller.switch_view(target));

    view! {
        <nav class="nav-bar">
            {ViewType::NAVIGABLE
                .into_iter()
                .map(|target| {
                    let (icon, label) = nav_entry(target);
                    view! {
                        <button
                            class="nav-bar__item"
                            class:nav-bar__item--active=move || current.get() == target
                            on:click=move |_| go_to.run(target)
                        >
                            <span class="nav-bar__icon">{icon}</span>
                            <span class="nav-bar__label">{label}</span>
                        </button>
                    }
                })
                .collect::<Vec<_>>()}
        </nav>
    }
}
