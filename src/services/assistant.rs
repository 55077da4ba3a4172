//! Scripted assistant replies chosen by keyword.
//!
//! Rules are checked in order against the lowercased message and the first
//! match wins. No context carries over between messages.

#[cfg(test)]
#[path = "assistant_test.rs"]
mod assistant_test;

pub const PRODUCE_REPLY: &str = "Great! I've added those vegetables to your pantry. 🥕🥔 They'll stay fresh for about a week. Would you like some recipe suggestions using these ingredients?";
pub const RECIPE_REPLY: &str = "I'd love to help you find the perfect recipe! 👨‍🍳 Based on your pantry, I can suggest some delicious options. What type of cuisine are you in the mood for?";
pub const EXPIRY_REPLY: &str = "Don't worry! I'll help you use those ingredients before they go bad. 🕒 Let me suggest some quick recipes that will make the most of what you have!";
pub const FALLBACK_REPLY: &str = "That sounds delicious! 🌟 I'm here to help you make the most of your kitchen ingredients. Feel free to tell me what you have, and I'll suggest some amazing recipes!";

const RULES: &[(&[&str], &str)] = &[
    (&["carrot", "potato"], PRODUCE_REPLY),
    (&["recipe", "cook"], RECIPE_REPLY),
    (&["expiring", "expire"], EXPIRY_REPLY),
];

/// Produces the assistant's answer to a user message.
pub trait Responder: Send + Sync {
    fn respond(&self, text: &str) -> String;
}

/// Responder backed by [`keyword_reply`].
#[derive(Clone, Copy, Debug, Default)]
pub struct KeywordResponder;

impl Responder for KeywordResponder {
    fn respond(&self, text: &str) -> String {
        keyword_reply(text).to_owned()
    }
}

/// Pick the canned reply for `text`.
pub fn keyword_reply(text: &str) -> &'static str {
    let lower = text.to_lowercase();
    RULES
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|keyword| lower.contains(keyword)))
        .map_or(FALLBACK_REPLY, |(_, reply)| *reply)
}
