use super::*;

#[test]
fn quantity_label_shows_count() {
    assert_eq!(quantity_label(3), "Qty: 3");
    assert_eq!(quantity_label(0), "Qty: 0");
}
