//! One module per screen.
//!
//! Screens read `RwSignal<AppState>` and the [`AppController`] from context and
//! own no state beyond transient input drafts.
//!
//! [`AppController`]: crate::controller::AppController

pub mod camera;
pub mod chat;
pub mod inventory;
pub mod planner;
pub mod recipes;
pub mod welcome;
