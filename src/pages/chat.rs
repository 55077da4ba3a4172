//! VeggieAI chat screen.
//!
//! SYSTEM CONTEXT
//! ==============
//! Sends prompts through [`AppController::send_message`]; the reply arrives
//! after the configured delay and is appended by the controller. While any
//! reply is outstanding the typing indicator shows.

use leptos::prelude::*;

use crate::controller::AppController;
use crate::state::app::AppState;
use crate::state::chat::{QUICK_ACTIONS, SUGGESTIONS, quick_action_prompt};
use crate::util::time::format_clock_time;

/// Chat page with message history, suggestion pills, and the prompt input.
#[component]
pub fn ChatPage() -> impl IntoView {
    let state = expect_context::<RwSignal<AppState>>();
    let controller = expect_context::<AppController>();

    let input = RwSignal::new(String::new());

    let send = Callback::new(move |text: String| {
        if controller.send_message(&text) {
            input.set(String::new());
        }
    });

    let on_click = move |_| send.run(input.get_untracked());
    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter" && !ev.shift_key() {
            ev.prevent_default();
            send.run(input.get_untracked());
        }
    };

    let typing = move || state.with(|s| s.pending_replies > 0);
    let can_send = move || !input.get().trim().is_empty();

    view! {
        <div class="chat-page">
            <header class="chat-page__header">
                <span class="chat-page__avatar">"🥬"</span>
                <div>
                    <h1 class="chat-page__title">"VeggieAI"</h1>
                    <p class="chat-page__status">"Your kitchen assistant"</p>
                </div>
            </header>
            <div class="chat-page__messages">
                {move || {
                    let messages = state.with(|s| s.chat_messages.clone());
                    if messages.is_empty() {
                        return view! { <EmptyChat send=send/> }.into_any();
                    }

                    messages
                        .into_iter()
                        .map(|msg| {
                            let time = format_clock_time(msg.timestamp);
                            let is_user = msg.is_user;
                            view! {
                                <div
                                    class="chat-page__message"
                                    class:chat-page__message--user=is_user
                                    class:chat-page__message--assistant=move || !is_user
                                >
                                    <div class="chat-page__bubble">{msg.text}</div>
                                    <span class="chat-page__time">{time}</span>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()
                        .into_any()
                }}
                {move || typing().then(|| view! {
                    <div class="chat-page__message chat-page__message--assistant chat-page__typing">
                        <span class="chat-page__dot"></span>
                        <span class="chat-page__dot"></span>
                        <span class="chat-page__dot"></span>
                    </div>
                })}
            </div>
            <div class="chat-page__composer">
                <input
                    class="chat-page__input"
                    type="text"
                    placeholder="Ask VeggieAI anything..."
                    prop:value=move || input.get()
                    on:input=move |ev| input.set(event_target_value(&ev))
                    on:keydown=on_keydown
                />
                <button class="btn btn--primary chat-page__send" on:click=on_click disabled=move || !can_send()>
                    "Send"
                </button>
            </div>
            <div class="chat-page__quick-actions">
                {QUICK_ACTIONS
                    .iter()
                    .map(|label| {
                        let prompt = quick_action_prompt(label).to_owned();
                        view! {
                            <button class="chat-page__quick-action" on:click=move |_| send.run(prompt.clone())>
                                {*label}
                            </button>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </div>
    }
}

#[component]
fn EmptyChat(send: Callback<String>) -> impl IntoView {
    view! {
        <div class="chat-page__empty">
            <span class="chat-page__empty-icon">"🥬"</span>
            <h2>"Hi! I'm VeggieAI"</h2>
            <p>"Ask me about your ingredients, recipes, or what's about to expire."</p>
            <div class="chat-page__suggestions">
                {SUGGESTIONS
                    .iter()
                    .map(|suggestion| {
                        let text = (*suggestion).to_owned();
                        view! {
                            <button class="chat-page__suggestion" on:click=move |_| send.run(text.clone())>
                                {*suggestion}
                            </button>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </div>
    }
}
