#[cfg(test)]
#[path = "camera_test.rs"]
mod camera_test;

use crate::services::detection::Detection;

/// Outcome of asking the browser for camera access.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CameraPermission {
    /// Not asked yet.
    #[default]
    Unknown,
    Granted,
    Denied,
}

impl CameraPermission {
    #[must_use]
    pub fn from_grant(granted: bool) -> Self {
        if granted { Self::Granted } else { Self::Denied }
    }
}

/// Scanner screen state.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CameraState {
    pub permission: CameraPermission,
    /// A simulated detection is in flight.
    pub processing: bool,
    /// Results awaiting confirmation before they join the inventory.
    pub pending: Vec<Detection>,
}
