//! Pantry records and their freshness classification.

#[cfg(test)]
#[path = "inventory_test.rs"]
mod inventory_test;

use serde::{Deserialize, Serialize};

use crate::runtime::clock::MS_PER_DAY;
use crate::runtime::new_id;
use crate::services::detection::Detection;

pub const DEFAULT_UNIT: &str = "pieces";
pub const ESTIMATED_PRICE_SOURCE: &str = "estimated";
pub const DEFAULT_CALORIES: u32 = 25;

/// Days-left threshold above which an item counts as fresh.
pub const FRESH_AFTER_DAYS: i64 = 5;
/// Days-left threshold above which an item is still only a warning.
pub const WARNING_AFTER_DAYS: i64 = 2;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FoodCategory {
    #[default]
    Vegetables,
    Fruits,
    Dairy,
    Meat,
    Grains,
    Spices,
}

/// A single pantry entry.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryItem {
    pub id: String,
    pub name: String,
    pub quantity: u32,
    pub unit: String,
    /// Expiry as epoch milliseconds.
    pub expiry_date: f64,
    #[serde(default)]
    pub image_url: Option<String>,
    pub category: FoodCategory,
    #[serde(default)]
    pub current_price: Option<f64>,
    pub price_source: String,
    pub calories: u32,
}

impl InventoryItem {
    /// Whole days until expiry, rounded up. Negative once expired.
    #[must_use]
    pub fn days_left(&self, now_ms: f64) -> i64 {
        days_left(self.expiry_date, now_ms)
    }

    #[must_use]
    pub fn freshness(&self, now_ms: f64) -> Freshness {
        Freshness::from_days_left(self.days_left(now_ms))
    }
}

/// Turn confirmed detections into inventory records stamped at `now_ms`.
pub fn items_from_detections(detections: &[Detection], now_ms: f64, shelf_life_days: u32) -> Vec<InventoryItem> {
    let expiry_date = now_ms + f64::from(shelf_life_days) * MS_PER_DAY;
    detections
        .iter()
        .map(|detection| InventoryItem {
            id: new_id(),
            name: detection.name.clone(),
            quantity: detection.quantity,
            unit: DEFAULT_UNIT.to_owned(),
            expiry_date,
            image_url: None,
            category: FoodCategory::Vegetables,
            current_price: Some(0.0),
            price_source: ESTIMATED_PRICE_SOURCE.to_owned(),
            calories: DEFAULT_CALORIES,
        })
        .collect()
}

/// `ceil((expiry - now) / 1 day)`.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn days_left(expiry_ms: f64, now_ms: f64) -> i64 {
    ((expiry_ms - now_ms) / MS_PER_DAY).ceil() as i64
}

/// Display-only freshness bucket derived from days left.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Freshness {
    Fresh,
    Warning,
    Expired,
}

impl Freshness {
    #[must_use]
    pub fn from_days_left(days_left: i64) -> Self {
        if days_left > FRESH_AFTER_DAYS {
            Self::Fresh
        } else if days_left > WARNING_AFTER_DAYS {
            Self::Warning
        } else {
            Self::Expired
        }
    }

    /// BEM modifier used by the item card.
    #[must_use]
    pub fn css_modifier(self) -> &'static str {
        match self {
            Self::Fresh => "fresh",
            Self::Warning => "warning",
            Self::Expired => "expired",
        }
    }

    #[must_use]
    pub fn badge(self) -> &'static str {
        match self {
            Self::Fresh => "\u{2728}",
            Self::Warning => "\u{23F0}",
            Self::Expired => "\u{1F6A8}",
        }
    }
}
