//! Simulated ingredient detection.

#[cfg(test)]
#[path = "detection_test.rs"]
mod detection_test;

use serde::{Deserialize, Serialize};

/// One item recognized in a scan, before it becomes an inventory record.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Detection {
    pub name: String,
    pub quantity: u32,
    /// Recognition confidence in `0.0..=1.0`. Display only.
    pub confidence: f32,
}

impl Detection {
    pub fn new(name: impl Into<String>, quantity: u32, confidence: f32) -> Self {
        Self { name: name.into(), quantity, confidence }
    }

    /// Confidence as a rounded whole percentage.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn confidence_percent(&self) -> u32 {
        (self.confidence.clamp(0.0, 1.0) * 100.0).round() as u32
    }
}

/// Produces detections for a captured frame.
pub trait Detector: Send + Sync {
    fn detect(&self) -> Vec<Detection>;
}

/// Detector that always "sees" the same three pantry items.
#[derive(Clone, Copy, Debug, Default)]
pub struct MockDetector;

impl Detector for MockDetector {
    fn detect(&self) -> Vec<Detection> {
        vec![
            Detection::new("Fresh Tomatoes", 3, 0.95),
            Detection::new("Organic Carrots", 2, 0.88),
            Detection::new("Green Lettuce", 1, 0.92),
        ]
    }
}
