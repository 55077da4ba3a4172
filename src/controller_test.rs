use std::sync::Mutex;
use std::time::Duration;

use super::*;
use crate::runtime::clock::{MS_PER_DAY, ManualClock};
use crate::runtime::scheduler::ManualScheduler;
use crate::services::assistant::{EXPIRY_REPLY, FALLBACK_REPLY, PRODUCE_REPLY, RECIPE_REPLY};
use crate::state::SharedState;
use crate::util::storage::{MemoryStore, StorageError};

const START: f64 = 1_736_294_400_000.0;

struct Harness {
    controller: Controller<SharedState>,
    clock: Arc<ManualClock>,
    scheduler: Arc<ManualScheduler>,
    storage: Arc<dyn KeyValueStore>,
}

impl Harness {
    fn new() -> Self {
        Self::with_storage(Arc::new(MemoryStore::new()))
    }

    fn with_storage(storage: Arc<dyn KeyValueStore>) -> Self {
        let clock = Arc::new(ManualClock::new(START));
        let scheduler = Arc::new(ManualScheduler::new());
        let services = Services {
            clock: clock.clone(),
            scheduler: scheduler.clone(),
            storage: Arc::clone(&storage),
            responder: Arc::new(KeywordResponder),
            detector: Arc::new(MockDetector),
        };
        let state: SharedState = Arc::new(Mutex::new(services.initial_state()));
        let controller = Controller::new(state, services, AppConfig::default());
        Self { controller, clock, scheduler, storage }
    }

    fn state(&self) -> AppState {
        self.controller.state().snapshot()
    }

    /// Advance both virtual clocks together.
    fn advance(&self, millis: u64) -> usize {
        let delta = Duration::from_millis(millis);
        self.clock.advance(delta);
        self.scheduler.advance(delta)
    }
}

struct BrokenStore;

impl KeyValueStore for BrokenStore {
    fn get(&self, _key: &str) -> Option<String> {
        None
    }

    fn set(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::Unavailable)
    }
}

fn detection(name: &str, quantity: u32) -> Detection {
    Detection::new(name, quantity, 0.9)
}

// =============================================================
// Welcome flag
// =============================================================

#[test]
fn first_launch_shows_welcome() {
    let h = Harness::new();
    assert_eq!(h.state().current_view, ViewType::Welcome);
}

#[test]
fn dismissed_welcome_does_not_reappear_after_reload() {
    let h = Harness::new();
    h.controller.dismiss_welcome();
    assert_eq!(h.state().current_view, ViewType::Camera);

    let reloaded = Harness::with_storage(Arc::clone(&h.storage));
    assert_eq!(reloaded.state().current_view, ViewType::Camera);
}

#[test]
fn dismiss_welcome_survives_storage_failure() {
    let h = Harness::with_storage(Arc::new(BrokenStore));
    h.controller.dismiss_welcome();
    assert_eq!(h.state().current_view, ViewType::Camera);

    let reloaded = Harness::with_storage(Arc::new(BrokenStore));
    assert_eq!(reloaded.state().current_view, ViewType::Welcome);
}

// =============================================================
// switch_view
// =============================================================

#[test]
fn switch_view_reaches_any_view_from_any_view() {
    let h = Harness::new();
    for target in [ViewType::Planner, ViewType::Chat, ViewType::Welcome, ViewType::Recipes, ViewType::Inventory] {
        h.controller.switch_view(target);
        assert_eq!(h.state().current_view, target);
    }
    assert_eq!(h.state().previous_view, Some(ViewType::Recipes));
}

// =============================================================
// detect_items
// =============================================================

#[test]
fn detect_items_accumulates_across_calls_in_order() {
    let h = Harness::new();
    h.controller.detect_items(&[detection("Tomato", 3), detection("Carrot", 2)]);
    let first = h.state().inventory;
    h.controller.detect_items(&[detection("Lettuce", 1)]);

    let inventory = h.state().inventory;
    assert_eq!(inventory.len(), 3);
    assert_eq!(inventory[..2], first[..]);
    let names: Vec<&str> = inventory.iter().map(|i| i.name.as_str()).collect();
    assert_eq!(names, vec!["Tomato", "Carrot", "Lettuce"]);
    assert_eq!(h.state().current_view, ViewType::Inventory);
}

#[test]
fn detect_items_stamps_expiry_from_clock() {
    let h = Harness::new();
    h.controller.detect_items(&[detection("Tomato", 3)]);
    let item = &h.state().inventory[0];
    assert_eq!(item.expiry_date, START + 7.0 * MS_PER_DAY);
}

#[test]
fn detect_items_with_empty_input_only_switches_view() {
    let h = Harness::new();
    h.controller.switch_view(ViewType::Chat);
    h.controller.detect_items(&[]);
    let state = h.state();
    assert!(state.inventory.is_empty());
    assert_eq!(state.current_view, ViewType::Inventory);
}

// =============================================================
// send_message
// =============================================================

#[test]
fn blank_messages_change_nothing() {
    let h = Harness::new();
    assert!(!h.controller.send_message(""));
    assert!(!h.controller.send_message("   "));
    assert!(h.state().chat_messages.is_empty());
    assert_eq!(h.scheduler.pending(), 0);
}

#[test]
fn message_appends_user_entry_then_reply_after_delay() {
    let h = Harness::new();
    assert!(h.controller.send_message("I have carrots"));

    let state = h.state();
    assert_eq!(state.chat_messages.len(), 1);
    assert!(state.chat_messages[0].is_user);
    assert_eq!(state.chat_messages[0].text, "I have carrots");
    assert_eq!(state.chat_messages[0].timestamp, START);
    assert_eq!(state.pending_replies, 1);

    assert_eq!(h.advance(1499), 0);
    assert_eq!(h.state().chat_messages.len(), 1);

    assert_eq!(h.advance(1), 1);
    let state = h.state();
    assert_eq!(state.chat_messages.len(), 2);
    assert!(!state.chat_messages[1].is_user);
    assert_eq!(state.chat_messages[1].text, PRODUCE_REPLY);
    assert_eq!(state.chat_messages[1].timestamp, START + 1500.0);
    assert_eq!(state.pending_replies, 0);
}

#[test]
fn message_text_is_trimmed() {
    let h = Harness::new();
    h.controller.send_message("  hello  ");
    assert_eq!(h.state().chat_messages[0].text, "hello");
}

#[test]
fn rapid_messages_each_get_their_own_reply() {
    let h = Harness::new();
    h.controller.send_message("any recipe?");
    h.advance(500);
    h.controller.send_message("milk will expire");
    h.advance(500);
    h.controller.send_message("hi");
    assert_eq!(h.state().pending_replies, 3);

    h.advance(5000);
    let texts: Vec<String> = h.state().chat_messages.into_iter().map(|m| m.text).collect();
    assert_eq!(
        texts,
        vec!["any recipe?", "milk will expire", "hi", RECIPE_REPLY, EXPIRY_REPLY, FALLBACK_REPLY]
    );
    assert_eq!(h.state().pending_replies, 0);
}

#[test]
fn delayed_reply_composes_with_updates_made_while_pending() {
    let h = Harness::new();
    h.controller.send_message("carrot");
    h.controller.detect_items(&[detection("Tomato", 1)]);
    h.controller.switch_view(ViewType::Planner);

    h.advance(1500);
    let state = h.state();
    assert_eq!(state.inventory.len(), 1);
    assert_eq!(state.current_view, ViewType::Planner);
    assert_eq!(state.chat_messages.len(), 2);
}

#[test]
fn message_and_reply_ids_are_unique() {
    let h = Harness::new();
    h.controller.send_message("a");
    h.controller.send_message("b");
    h.advance(1500);
    let mut ids: Vec<String> = h.state().chat_messages.into_iter().map(|m| m.id).collect();
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), 4);
}

// =============================================================
// Camera flow
// =============================================================

#[test]
fn camera_permission_resolves_to_tagged_state() {
    let h = Harness::new();
    assert_eq!(h.state().camera.permission, CameraPermission::Unknown);
    h.controller.resolve_camera_permission(false);
    assert_eq!(h.state().camera.permission, CameraPermission::Denied);
    h.controller.resolve_camera_permission(true);
    assert_eq!(h.state().camera.permission, CameraPermission::Granted);
}

#[test]
fn scan_produces_review_list_after_delay() {
    let h = Harness::new();
    assert!(h.controller.scan());
    assert!(h.state().camera.processing);
    assert!(!h.controller.scan());

    h.advance(1999);
    assert!(h.state().camera.pending.is_empty());
    h.advance(1);

    let camera = h.state().camera;
    assert!(!camera.processing);
    assert_eq!(camera.pending, MockDetector.detect());
    assert_eq!(h.scheduler.pending(), 0);
}

#[test]
fn confirm_scan_moves_detections_into_inventory() {
    let h = Harness::new();
    h.controller.scan();
    h.advance(2000);

    assert_eq!(h.controller.confirm_scan(), 3);
    let state = h.state();
    assert!(state.camera.pending.is_empty());
    assert_eq!(state.inventory.len(), 3);
    assert_eq!(state.inventory[0].name, "Fresh Tomatoes");
    assert_eq!(state.current_view, ViewType::Inventory);
}

#[test]
fn confirm_without_results_is_a_no_op() {
    let h = Harness::new();
    h.controller.switch_view(ViewType::Camera);
    assert_eq!(h.controller.confirm_scan(), 0);
    assert_eq!(h.state().current_view, ViewType::Camera);
}

#[test]
fn discard_scan_drops_results() {
    let h = Harness::new();
    h.controller.scan();
    h.advance(2000);
    h.controller.discard_scan();
    assert!(h.state().camera.pending.is_empty());
    assert!(h.state().inventory.is_empty());
}

#[test]
fn upload_fallback_works_after_denial() {
    let h = Harness::new();
    h.controller.resolve_camera_permission(false);
    assert!(h.controller.upload_photo());
    h.advance(2000);
    assert_eq!(h.state().camera.pending.len(), 3);
}

// =============================================================
// Tips banner
// =============================================================

#[test]
fn open_chat_switches_to_chat() {
    let h = Harness::new();
    h.controller.open_chat();
    assert_eq!(h.state().current_view, ViewType::Chat);
}

#[test]
fn tips_rotate_then_hide() {
    let h = Harness::new();
    h.controller.advance_tip();
    h.controller.advance_tip();
    assert_eq!(h.state().tip_index, 2);
    h.controller.hide_tips();
    assert!(!h.state().tips_visible);
}

#[test]
fn tip_rotation_ticks_until_banner_is_hidden() {
    let h = Harness::new();
    h.controller.start_tip_rotation();

    h.advance(4999);
    assert_eq!(h.state().tip_index, 0);
    h.advance(1);
    assert_eq!(h.state().tip_index, 1);
    h.advance(5000);
    assert_eq!(h.state().tip_index, 2);

    h.controller.hide_tips();
    h.advance(5000);
    assert_eq!(h.state().tip_index, 2);
    assert_eq!(h.scheduler.pending(), 0);
}

#[test]
fn losing_the_stream_after_grant_shows_upload_fallback() {
    let h = Harness::new();
    h.controller.resolve_camera_permission(true);
    h.controller.resolve_camera_permission(false);
    assert_eq!(h.state().camera.permission, CameraPermission::Denied);
    assert!(h.controller.upload_photo());
}
