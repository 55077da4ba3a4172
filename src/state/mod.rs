//! Client-side application state.
//!
//! DESIGN
//! ======
//! State is split by domain (`inventory`, `chat`, `camera`, etc.) and
//! assembled in [`app::AppState`]. The [`StateCell`] trait is the only way to
//! reach the live value: the UI keeps it in an `RwSignal`, native tests in an
//! `Arc<Mutex<_>>`. Every write is a transformation of whatever value is
//! current at the moment it runs, never a write-back of an earlier snapshot.

pub mod app;
pub mod camera;
pub mod chat;
pub mod inventory;
pub mod recipes;
pub mod tips;

use std::sync::{Arc, Mutex, PoisonError};

use leptos::prelude::{RwSignal, Update, WithUntracked};

use self::app::{Action, AppState, reduce};

/// Owner of the single live [`AppState`].
pub trait StateCell: Clone + Send + Sync + 'static {
    /// Read the current state without subscribing to changes.
    fn inspect<R>(&self, f: impl FnOnce(&AppState) -> R) -> R;

    /// Replace the current state with `f(current)`.
    fn transform(&self, f: impl FnOnce(AppState) -> AppState);

    fn snapshot(&self) -> AppState {
        self.inspect(Clone::clone)
    }

    fn dispatch(&self, action: Action) {
        self.transform(|state| reduce(state, action));
    }
}

impl StateCell for RwSignal<AppState> {
    fn inspect<R>(&self, f: impl FnOnce(&AppState) -> R) -> R {
        self.with_untracked(f)
    }

    fn transform(&self, f: impl FnOnce(AppState) -> AppState) {
        self.update(|state| {
            let current = std::mem::take(state);
            *state = f(current);
        });
    }
}

/// Plain shared state for non-reactive callers.
pub type SharedState = Arc<Mutex<AppState>>;

impl StateCell for SharedState {
    fn inspect<R>(&self, f: impl FnOnce(&AppState) -> R) -> R {
        let guard = self.lock().unwrap_or_else(PoisonError::into_inner);
        f(&guard)
    }

    fn transform(&self, f: impl FnOnce(AppState) -> AppState) {
        let mut guard = self.lock().unwrap_or_else(PoisonError::into_inner);
        let current = std::mem::take(&mut *guard);
        *guard = f(current);
    }
}
