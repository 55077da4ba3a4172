use super::*;

#[test]
fn manual_clock_starts_where_told() {
    let clock = ManualClock::new(1_000.0);
    assert_eq!(clock.now_ms(), 1_000.0);
}

#[test]
fn manual_clock_advance_adds_milliseconds() {
    let clock = ManualClock::new(0.0);
    clock.advance(Duration::from_millis(1500));
    assert_eq!(clock.now_ms(), 1500.0);
    clock.advance(Duration::from_secs(1));
    assert_eq!(clock.now_ms(), 2500.0);
}

#[test]
fn manual_clock_set_overrides_current_time() {
    let clock = ManualClock::new(10.0);
    clock.set(MS_PER_DAY);
    assert_eq!(clock.now_ms(), 86_400_000.0);
}

#[test]
fn system_clock_is_after_2020() {
    // 2020-01-01T00:00:00Z
    assert!(SystemClock.now_ms() > 1_577_836_800_000.0);
}
