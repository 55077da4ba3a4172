//! Pantry screen listing scanned items with their freshness.

#[cfg(test)]
#[path = "inventory_test.rs"]
mod inventory_test;

use leptos::prelude::*;

use crate::components::quantity_stepper::QuantityStepper;
use crate::controller::AppController;
use crate::state::app::{AppState, ViewType};
use crate::state::inventory::InventoryItem;

/// Emoji shown on an item card, picked by name.
pub fn item_emoji(name: &str) -> &'static str {
    let name = name.to_lowercase();
    if name.contains("tomato") {
        "🍅"
    } else if name.contains("carrot") {
        "🥕"
    } else if name.contains("lettuce") {
        "🥬"
    } else {
        "🥒"
    }
}

/// Header line under the pantry title.
pub fn pantry_summary(count: usize) -> String {
    if count == 0 {
        "Your pantry is empty. Start scanning ingredients!".to_owned()
    } else {
        format!("{count} fresh ingredients ready to cook")
    }
}

/// Pantry page. Freshness is recomputed against the clock on every render.
#[component]
pub fn InventoryPage() -> impl IntoView {
    let state = expect_context::<RwSignal<AppState>>();
    let controller = expect_context::<AppController>();

    let count = Memo::new(move |_| state.with(|s| s.inventory.len()));
    let has_items = move || count.get() > 0;

    let go_to = {
        let controller = controller.clone();
        Callback::new(move |target: ViewType| controller.switch_view(target))
    };
    let now_ms = Callback::new(move |()| controller.now_ms());

    view! {
        <div class="pantry-page">
            <header class="pantry-page__header">
                <span class="pantry-page__icon">"🥬"</span>
                <h1>"Fresh Pantry"</h1>
                <p>{move || pantry_summary(count.get())}</p>
            </header>
            <Show
                when=has_items
                fallback=move || {
                    view! {
                        <div class="pantry-page__empty">
                            <div class="pantry-page__empty-art">"🥕 🍅 🥬"</div>
                            <h3>"Start Your Fresh Journey"</h3>
                            <p>
                                "Scan your vegetables and fruits to track freshness, get recipe suggestions, and reduce food waste!"
                            </p>
                            <button class="btn btn--primary" on:click=move |_| go_to.run(ViewType::Camera)>
                                "📸 Scan First Ingredients"
                            </button>
                        </div>
                    }
                }
            >
                <div class="pantry-page__grid">
                    {move || {
                        let now = now_ms.run(());
                        state
                            .with(|s| s.inventory.clone())
                            .into_iter()
                            .map(|item| view! { <ItemCard item=item now=now/> })
                            .collect::<Vec<_>>()
                    }}
                </div>
                <div class="pantry-page__actions">
                    <button class="btn btn--primary" on:click=move |_| go_to.run(ViewType::Recipes)>
                        "👨‍🍳 Find Recipes with These Ingredients"
                    </button>
                </div>
            </Show>
        </div>
    }
}

#[component]
fn ItemCard(item: InventoryItem, now: f64) -> impl IntoView {
    let freshness = item.freshness(now);
    let days_left = format!("{}d left", item.days_left(now));
    let class = format!("pantry-item pantry-item--{}", freshness.css_modifier());
    let quantity = item.quantity;

    view! {
        <div class=class>
            <div class="pantry-item__top">
                <span class="pantry-item__emoji">{item_emoji(&item.name)}</span>
                <div class="pantry-item__freshness">
                    <span class="pantry-item__badge">{freshness.badge()}</span>
                    <span class="pantry-item__days">{days_left}</span>
                </div>
            </div>
            <h3 class="pantry-item__name">{item.name}</h3>
            <QuantityStepper quantity=quantity/>
        </div>
    }
}
