use super::*;

#[test]
fn user_message_is_flagged_as_user() {
    let msg = ChatMessage::user("hi", 5.0);
    assert!(msg.is_user);
    assert_eq!(msg.text, "hi");
    assert_eq!(msg.timestamp, 5.0);
}

#[test]
fn assistant_message_is_not_user() {
    let msg = ChatMessage::assistant("hello", 6.0);
    assert!(!msg.is_user);
}

#[test]
fn messages_get_distinct_ids() {
    assert_ne!(ChatMessage::user("a", 0.0).id, ChatMessage::user("a", 0.0).id);
}

#[test]
fn message_serializes_is_user_in_camel_case() {
    let json = serde_json::to_value(ChatMessage::user("a", 0.0)).unwrap();
    assert_eq!(json["isUser"], true);
}

#[test]
fn quick_action_prompt_drops_leading_icon() {
    assert_eq!(quick_action_prompt("🥕 Add Carrots"), "Add Carrots");
    assert_eq!(quick_action_prompt("🍅 Add Tomatoes"), "Add Tomatoes");
    assert_eq!(quick_action_prompt("Lettuce"), "Lettuce");
}

#[test]
fn every_quick_action_sends_a_non_empty_prompt() {
    for label in QUICK_ACTIONS {
        let prompt = quick_action_prompt(label);
        assert!(!prompt.is_empty());
        assert!(label.ends_with(prompt));
    }
}

#[test]
fn carrot_quick_action_gets_produce_reply() {
    use crate::services::assistant::{PRODUCE_REPLY, keyword_reply};

    assert_eq!(keyword_reply(quick_action_prompt(QUICK_ACTIONS[0])), PRODUCE_REPLY);
}

#[test]
fn suggestions_cover_produce_recipe_and_expiry_prompts() {
    use crate::services::assistant::{EXPIRY_REPLY, PRODUCE_REPLY, RECIPE_REPLY, keyword_reply};

    let replies: Vec<&str> = SUGGESTIONS.iter().map(|s| keyword_reply(s)).collect();
    assert!(replies.contains(&PRODUCE_REPLY));
    assert!(replies.contains(&RECIPE_REPLY));
    assert!(replies.contains(&EXPIRY_REPLY));
}
