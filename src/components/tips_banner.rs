//! Floating banner cycling through kitchen tips.
//!
//! Rotation is driven by [`AppController::start_tip_rotation`]; the banner only
//! renders the current tip and forwards clicks.

use leptos::prelude::*;

use crate::controller::AppController;
use crate::state::app::AppState;
use crate::state::tips::tip;

#[component]
pub fn TipsBanner() -> impl IntoView {
    let state = expect_context::<RwSignal<AppState>>();
    let controller = expect_context::<AppController>();

    let visible = Memo::new(move |_| state.with(|s| s.tips_visible));
    let current_tip = move || tip(state.with(|s| s.tip_index));

    let open_chat = {
        let controller = controller.clone();
        Callback::new(move |()| controller.open_chat())
    };
    let hide = Callback::new(move |()| controller.hide_tips());

    view! {
        <Show when=move || visible.get()>
            <aside class="tips-banner">
                <button class="tips-banner__logo" title="Chat with VeggieAI" on:click=move |_| open_chat.run(())>
                    "🥬"
                </button>
                <p class="tips-banner__text">{current_tip}</p>
                <button class="tips-banner__close" title="Hide tips" on:click=move |_| hide.run(())>
                    "×"
                </button>
            </aside>
        </Show>
    }
}
