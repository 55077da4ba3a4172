//! Intent dispatcher wiring the state machine to its side effects.
//!
//! SYSTEM CONTEXT
//! ==============
//! Screens call controller methods; the controller stamps ids and timestamps,
//! calls the mock services, touches storage, and turns the result into
//! [`Action`]s for [`reduce`](crate::state::app::reduce). Delayed work is
//! handed to the [`Scheduler`] and, when it fires, dispatches against the
//! state current at that moment.

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

use std::sync::Arc;

use leptos::prelude::RwSignal;

use crate::config::AppConfig;
use crate::runtime::clock::{Clock, SystemClock};
use crate::runtime::scheduler::Scheduler;
use crate::services::assistant::{KeywordResponder, Responder};
use crate::services::detection::{Detection, Detector, MockDetector};
use crate::state::StateCell;
use crate::state::app::{Action, AppState, ViewType};
use crate::state::camera::CameraPermission;
use crate::state::chat::ChatMessage;
use crate::state::inventory::items_from_detections;
use crate::util::storage::KeyValueStore;
use crate::util::welcome;

/// Everything the controller needs from its environment.
#[derive(Clone)]
pub struct Services {
    pub clock: Arc<dyn Clock>,
    pub scheduler: Arc<dyn Scheduler>,
    pub storage: Arc<dyn KeyValueStore>,
    pub responder: Arc<dyn Responder>,
    pub detector: Arc<dyn Detector>,
}

impl Services {
    /// Services for the current build target.
    ///
    /// The browser gets `Date.now()`, `setTimeout`, and `localStorage`. Native
    /// builds get the system clock, a [`ManualScheduler`] whose timers only
    /// fire when advanced, and an in-memory store.
    ///
    /// [`ManualScheduler`]: crate::runtime::scheduler::ManualScheduler
    #[must_use]
    pub fn platform() -> Self {
        #[cfg(feature = "csr")]
        let (scheduler, storage): (Arc<dyn Scheduler>, Arc<dyn KeyValueStore>) = (
            Arc::new(crate::runtime::scheduler::TimeoutScheduler::default()),
            Arc::new(crate::util::storage::LocalStorage),
        );
        #[cfg(not(feature = "csr"))]
        let (scheduler, storage): (Arc<dyn Scheduler>, Arc<dyn KeyValueStore>) = (
            Arc::new(crate::runtime::scheduler::ManualScheduler::new()),
            Arc::new(crate::util::storage::MemoryStore::new()),
        );

        Self {
            clock: Arc::new(SystemClock),
            scheduler,
            storage,
            responder: Arc::new(KeywordResponder),
            detector: Arc::new(MockDetector),
        }
    }

    /// Startup state, honoring the persisted welcome flag.
    #[must_use]
    pub fn initial_state(&self) -> AppState {
        AppState::new(welcome::has_seen(self.storage.as_ref()))
    }
}

/// Controller bound to the UI's reactive state.
pub type AppController = Controller<RwSignal<AppState>>;

#[derive(Clone)]
pub struct Controller<C: StateCell> {
    state: C,
    services: Services,
    config: AppConfig,
}

impl<C: StateCell> Controller<C> {
    pub fn new(state: C, services: Services, config: AppConfig) -> Self {
        Self { state, services, config }
    }

    pub fn state(&self) -> &C {
        &self.state
    }

    /// Current wall-clock time from the configured clock.
    pub fn now_ms(&self) -> f64 {
        self.services.clock.now_ms()
    }

    pub fn switch_view(&self, target: ViewType) {
        log::debug!("switch view -> {target}");
        self.state.dispatch(Action::SwitchView(target));
    }

    /// Leave the welcome screen for good.
    ///
    /// A failed write is logged and otherwise ignored; the welcome screen will
    /// simply show again next session.
    pub fn dismiss_welcome(&self) {
        if let Err(err) = welcome::mark_seen(self.services.storage.as_ref()) {
            log::warn!("failed to persist welcome flag: {err}");
        }
        self.state.dispatch(Action::DismissWelcome);
    }

    /// Add one inventory item per detection and show the inventory.
    pub fn detect_items(&self, raw: &[Detection]) {
        let items = items_from_detections(raw, self.now_ms(), self.config.shelf_life_days);
        log::debug!("adding {} detected items", items.len());
        self.state.dispatch(Action::AddItems(items));
    }

    /// Post a user message and schedule the assistant's reply.
    ///
    /// Blank input is ignored and returns `false`. Each call schedules its own
    /// reply; nothing coalesces or cancels them.
    pub fn send_message(&self, text: &str) -> bool {
        let text = text.trim();
        if text.is_empty() {
            return false;
        }

        self.state.dispatch(Action::UserMessage(ChatMessage::user(text, self.now_ms())));

        let state = self.state.clone();
        let clock = Arc::clone(&self.services.clock);
        let responder = Arc::clone(&self.services.responder);
        let prompt = text.to_owned();
        self.services.scheduler.schedule(
            self.config.reply_delay,
            Box::new(move || {
                let reply = ChatMessage::assistant(responder.respond(&prompt), clock.now_ms());
                state.dispatch(Action::AssistantReply(reply));
            }),
        );
        true
    }

    pub fn resolve_camera_permission(&self, granted: bool) {
        let permission = CameraPermission::from_grant(granted);
        log::debug!("camera permission: {permission:?}");
        self.state.dispatch(Action::CameraPermission(permission));
    }

    /// Start a simulated scan. Results land in the review list after the scan
    /// delay. Returns `false` if a scan is already running.
    pub fn scan(&self) -> bool {
        if self.state.inspect(|s| s.camera.processing) {
            return false;
        }

        self.state.dispatch(Action::ScanStarted);

        let state = self.state.clone();
        let detector = Arc::clone(&self.services.detector);
        self.services.scheduler.schedule(
            self.config.scan_delay,
            Box::new(move || state.dispatch(Action::ScanCompleted(detector.detect()))),
        );
        true
    }

    /// Fallback when live capture is unavailable: the "uploaded" photo goes
    /// through the same simulated detection.
    pub fn upload_photo(&self) -> bool {
        log::debug!("scanning uploaded photo");
        self.scan()
    }

    /// Move reviewed detections into the inventory. Returns how many were added.
    pub fn confirm_scan(&self) -> usize {
        let pending = self.state.inspect(|s| s.camera.pending.clone());
        if pending.is_empty() {
            return 0;
        }
        self.state.dispatch(Action::ScanCleared);
        self.detect_items(&pending);
        pending.len()
    }

    pub fn discard_scan(&self) {
        self.state.dispatch(Action::ScanCleared);
    }

    pub fn open_chat(&self) {
        self.switch_view(ViewType::Chat);
    }

    pub fn advance_tip(&self) {
        self.state.dispatch(Action::AdvanceTip);
    }

    /// Rotate the tips banner every tip interval until it is hidden.
    pub fn start_tip_rotation(&self) {
        let this = self.clone();
        self.services.scheduler.schedule(
            self.config.tip_interval,
            Box::new(move || {
                if !this.state.inspect(|s| s.tips_visible) {
                    return;
                }
                this.advance_tip();
                this.start_tip_rotation();
            }),
        );
    }

    pub fn hide_tips(&self) {
        self.state.dispatch(Action::HideTips);
    }
}
