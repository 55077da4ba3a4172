use super::*;

const NOW: f64 = 1_736_294_400_000.0;
const SECOND: f64 = 1000.0;

fn detection(name: &str, quantity: u32) -> Detection {
    Detection::new(name, quantity, 0.9)
}

fn item_expiring_at(expiry_date: f64) -> InventoryItem {
    let mut item = items_from_detections(&[detection("Carrot", 1)], NOW, 7).remove(0);
    item.expiry_date = expiry_date;
    item
}

// =============================================================
// items_from_detections
// =============================================================

#[test]
fn items_copy_name_and_quantity_verbatim() {
    let items = items_from_detections(&[detection("  Odd Name ", 4), detection("Lettuce", 1)], NOW, 7);
    assert_eq!(items.len(), 2);
    assert_eq!(items[0].name, "  Odd Name ");
    assert_eq!(items[0].quantity, 4);
    assert_eq!(items[1].name, "Lettuce");
    assert_eq!(items[1].quantity, 1);
}

#[test]
fn items_get_fixed_defaults() {
    let item = items_from_detections(&[detection("Tomato", 3)], NOW, 7).remove(0);
    assert_eq!(item.unit, "pieces");
    assert_eq!(item.category, FoodCategory::Vegetables);
    assert_eq!(item.current_price, Some(0.0));
    assert_eq!(item.price_source, "estimated");
    assert_eq!(item.calories, 25);
    assert!(item.image_url.is_none());
}

#[test]
fn items_expire_after_shelf_life() {
    let item = items_from_detections(&[detection("Tomato", 3)], NOW, 7).remove(0);
    assert_eq!(item.expiry_date, NOW + 7.0 * MS_PER_DAY);
    assert_eq!(item.days_left(NOW), 7);
    assert_eq!(item.freshness(NOW), Freshness::Fresh);
}

#[test]
fn items_get_distinct_ids() {
    let items = items_from_detections(&[detection("A", 1), detection("B", 1), detection("C", 1)], NOW, 7);
    assert_ne!(items[0].id, items[1].id);
    assert_ne!(items[1].id, items[2].id);
    assert_ne!(items[0].id, items[2].id);
}

#[test]
fn empty_detections_yield_no_items() {
    assert!(items_from_detections(&[], NOW, 7).is_empty());
}

// =============================================================
// Freshness boundaries
// =============================================================

#[test]
fn five_days_and_one_second_is_fresh() {
    let item = item_expiring_at(NOW + 5.0 * MS_PER_DAY + SECOND);
    assert_eq!(item.days_left(NOW), 6);
    assert_eq!(item.freshness(NOW), Freshness::Fresh);
}

#[test]
fn exactly_five_days_is_warning() {
    let item = item_expiring_at(NOW + 5.0 * MS_PER_DAY);
    assert_eq!(item.days_left(NOW), 5);
    assert_eq!(item.freshness(NOW), Freshness::Warning);
}

#[test]
fn two_days_and_one_second_is_warning() {
    let item = item_expiring_at(NOW + 2.0 * MS_PER_DAY + SECOND);
    assert_eq!(item.days_left(NOW), 3);
    assert_eq!(item.freshness(NOW), Freshness::Warning);
}

#[test]
fn exactly_two_days_is_expired() {
    let item = item_expiring_at(NOW + 2.0 * MS_PER_DAY);
    assert_eq!(item.days_left(NOW), 2);
    assert_eq!(item.freshness(NOW), Freshness::Expired);
}

#[test]
fn past_expiry_is_expired_with_non_positive_days() {
    let item = item_expiring_at(NOW - 1.5 * MS_PER_DAY);
    assert_eq!(item.days_left(NOW), -1);
    assert_eq!(item.freshness(NOW), Freshness::Expired);
}

#[test]
fn freshness_css_modifiers_are_distinct() {
    assert_eq!(Freshness::Fresh.css_modifier(), "fresh");
    assert_eq!(Freshness::Warning.css_modifier(), "warning");
    assert_eq!(Freshness::Expired.css_modifier(), "expired");
}

// =============================================================
// Serialization
// =============================================================

#[test]
fn inventory_item_serializes_camel_case_with_lowercase_category() {
    let item = items_from_detections(&[detection("Tomato", 3)], NOW, 7).remove(0);
    let json = serde_json::to_value(&item).unwrap();
    assert_eq!(json["category"], "vegetables");
    assert_eq!(json["priceSource"], "estimated");
    assert!(json.get("expiryDate").is_some());
}
