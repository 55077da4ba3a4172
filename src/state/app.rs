//! Application state and its transition function.
//!
//! DESIGN
//! ======
//! All mutation flows through [`reduce`]: a pure `(state, action) -> state`
//! function. Side effects (ids, timestamps, timers, storage) happen in the
//! controller before an [`Action`] is built, so replaying the same actions
//! always yields the same state.

#[cfg(test)]
#[path = "app_test.rs"]
mod app_test;

use std::fmt;

use crate::services::detection::Detection;
use crate::state::camera::{CameraPermission, CameraState};
use crate::state::chat::ChatMessage;
use crate::state::inventory::InventoryItem;
use crate::state::recipes::{Recipe, catalog};
use crate::state::tips::next_tip_index;

/// The screen currently on display.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ViewType {
    Welcome,
    #[default]
    Camera,
    Chat,
    Inventory,
    Recipes,
    Planner,
}

impl ViewType {
    /// Views reachable from the bottom navigation, in display order.
    pub const NAVIGABLE: [ViewType; 5] = [Self::Camera, Self::Chat, Self::Inventory, Self::Recipes, Self::Planner];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Welcome => "welcome",
            Self::Camera => "camera",
            Self::Chat => "chat",
            Self::Inventory => "inventory",
            Self::Recipes => "recipes",
            Self::Planner => "planner",
        }
    }
}

impl fmt::Display for ViewType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Everything the screens render from.
#[derive(Clone, Debug, PartialEq)]
pub struct AppState {
    pub inventory: Vec<InventoryItem>,
    pub recipes: Vec<Recipe>,
    pub chat_messages: Vec<ChatMessage>,
    pub current_view: ViewType,
    /// View shown before the last switch.
    pub previous_view: Option<ViewType>,
    /// Carried for forward compatibility; nothing sets it yet.
    pub is_loading: bool,
    /// Assistant replies scheduled but not yet delivered.
    pub pending_replies: usize,
    pub camera: CameraState,
    pub tip_index: usize,
    pub tips_visible: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            inventory: Vec::new(),
            recipes: Vec::new(),
            chat_messages: Vec::new(),
            current_view: ViewType::default(),
            previous_view: None,
            is_loading: false,
            pending_replies: 0,
            camera: CameraState::default(),
            tip_index: 0,
            tips_visible: true,
        }
    }
}

impl AppState {
    /// Startup state: the recipe catalog loaded, welcome screen shown unless
    /// it was dismissed in an earlier session.
    #[must_use]
    pub fn new(welcome_seen: bool) -> Self {
        Self {
            recipes: catalog(),
            current_view: if welcome_seen { ViewType::Camera } else { ViewType::Welcome },
            ..Self::default()
        }
    }

    fn enter(&mut self, target: ViewType) {
        self.previous_view = Some(self.current_view);
        self.current_view = target;
    }
}

/// A state transition request.
#[derive(Clone, Debug, PartialEq)]
pub enum Action {
    SwitchView(ViewType),
    DismissWelcome,
    /// Append synthesized items and show the inventory.
    AddItems(Vec<InventoryItem>),
    UserMessage(ChatMessage),
    AssistantReply(ChatMessage),
    CameraPermission(CameraPermission),
    ScanStarted,
    ScanCompleted(Vec<Detection>),
    ScanCleared,
    AdvanceTip,
    HideTips,
}

/// Apply `action` to `state`.
#[must_use]
pub fn reduce(mut state: AppState, action: Action) -> AppState {
    match action {
        Action::SwitchView(target) => state.enter(target),
        Action::DismissWelcome => state.enter(ViewType::Camera),
        Action::AddItems(items) => {
            state.inventory.extend(items);
            state.enter(ViewType::Inventory);
        }
        Action::UserMessage(message) => {
            state.chat_messages.push(message);
            state.pending_replies += 1;
        }
        Action::AssistantReply(message) => {
            state.chat_messages.push(message);
            state.pending_replies = state.pending_replies.saturating_sub(1);
        }
        Action::CameraPermission(permission) => state.camera.permission = permission,
        Action::ScanStarted => {
            state.camera.processing = true;
            state.camera.pending.clear();
        }
        Action::ScanCompleted(detections) => {
            state.camera.processing = false;
            state.camera.pending = detections;
        }
        Action::ScanCleared => state.camera.pending.clear(),
        Action::AdvanceTip => state.tip_index = next_tip_index(state.tip_index),
        Action::HideTips => state.tips_visible = false,
    }
    state
}
