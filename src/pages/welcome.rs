//! First-run welcome screen.

use leptos::prelude::*;

use crate::controller::AppController;

const FEATURES: [(&str, &str); 3] = [
    ("📸", "Scan ingredients instantly"),
    ("🤖", "Get AI-powered recipe suggestions"),
    ("📅", "Plan meals and reduce waste"),
];

/// Welcome screen. Both buttons dismiss it permanently.
#[component]
pub fn WelcomePage() -> impl IntoView {
    let controller = expect_context::<AppController>();

    let on_start = {
        let controller = controller.clone();
        move |_| controller.dismiss_welcome()
    };
    let on_skip = move |_| controller.dismiss_welcome();

    view! {
        <div class="welcome-page">
            <div class="welcome-page__character">"🥬"</div>
            <h1 class="welcome-page__title">"Fresh Pantry 🥬"</h1>
            <p class="welcome-page__subtitle">"Your Smart Kitchen Companion powered by VeggieAI"</p>
            <ul class="welcome-page__features">
                {FEATURES
                    .iter()
                    .map(|(icon, text)| {
                        view! {
                            <li class="welcome-page__feature">
                                <span class="welcome-page__feature-icon">{*icon}</span>
                                <span>{*text}</span>
                            </li>
                        }
                    })
                    .collect::<Vec<_>>()}
            </ul>
            <div class="welcome-page__actions">
                <button class="btn btn--primary" on:click=on_start>
                    "Start Cooking! ✨"
                </button>
                <button class="btn btn--ghost" on:click=on_skip>
                    "Skip Animation"
                </button>
            </div>
        </div>
    }
}
