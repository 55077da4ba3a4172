#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

use serde::{Deserialize, Serialize};

use crate::runtime::new_id;

/// A single chat message. Never mutated after creation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessage {
    pub id: String,
    pub text: String,
    pub is_user: bool,
    /// Creation time as epoch milliseconds.
    pub timestamp: f64,
}

impl ChatMessage {
    pub fn user(text: impl Into<String>, timestamp: f64) -> Self {
        Self { id: new_id(), text: text.into(), is_user: true, timestamp }
    }

    pub fn assistant(text: impl Into<String>, timestamp: f64) -> Self {
        Self { id: new_id(), text: text.into(), is_user: false, timestamp }
    }
}

/// Starter prompts offered while the conversation is empty.
pub const SUGGESTIONS: [&str; 6] = [
    "I bought 2 carrots and 3 potatoes",
    "Add 1 bunch of lettuce",
    "What can I cook tonight?",
    "Show me recipes with tomatoes",
    "My onions are expiring soon",
    "I need a quick dinner idea",
];

/// One-tap shortcuts shown under the chat input.
pub const QUICK_ACTIONS: [&str; 3] = ["🥕 Add Carrots", "🍅 Add Tomatoes", "🥬 Add Lettuce"];

/// Message sent for a quick action: the label without its leading icon.
#[must_use]
pub fn quick_action_prompt(label: &str) -> &str {
    let label = label.trim();
    match label.split_once(char::is_whitespace) {
        Some((_, rest)) => rest.trim_start(),
        None => label,
    }
}
