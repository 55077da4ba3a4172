//! Persisted "welcome screen dismissed" flag.
//!
//! Read once at startup and written once when the user leaves the welcome
//! screen. Any non-empty stored value counts as seen.

#[cfg(test)]
#[path = "welcome_test.rs"]
mod welcome_test;

use crate::util::storage::{KeyValueStore, StorageError, save_json};

pub const STORAGE_KEY: &str = "kitchenai-welcome-seen";

/// Whether the welcome screen was dismissed in an earlier session.
pub fn has_seen(store: &dyn KeyValueStore) -> bool {
    store.get(STORAGE_KEY).is_some_and(|value| !value.is_empty())
}

/// Remember that the welcome screen has been dismissed.
///
/// # Errors
///
/// Returns [`StorageError`] if the flag could not be written.
pub fn mark_seen(store: &dyn KeyValueStore) -> Result<(), StorageError> {
    save_json(store, STORAGE_KEY, &true)
}
