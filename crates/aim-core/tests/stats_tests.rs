// Host-side tests for the accuracy tracker.

use aim_core::*;

fn tracker_with(store: &SensitivityStore, clicks: u32, hits: u32) -> AccuracyTracker {
    let mut t = AccuracyTracker::new(&store.snapshot());
    for _ in 0..clicks {
        t.record_click();
    }
    for _ in 0..hits {
        t.record_hit();
    }
    t
}

#[test]
fn accuracy_is_zero_before_first_shot() {
    let store = SensitivityStore::new();
    assert_eq!(tracker_with(&store, 0, 0).accuracy_percent(), 0);
}

#[test]
fn accuracy_rounds_to_whole_percent() {
    let store = SensitivityStore::new();
    assert_eq!(tracker_with(&store, 3, 2).accuracy_percent(), 67);
    assert_eq!(tracker_with(&store, 8, 1).accuracy_percent(), 13);
    assert_eq!(tracker_with(&store, 4, 4).accuracy_percent(), 100);
}

#[test]
fn unchanged_settings_keep_counters() {
    let store = SensitivityStore::new();
    let mut t = tracker_with(&store, 5, 3);
    assert!(!t.observe(&store.snapshot()));
    assert_eq!(t.total_clicks(), 5);
    assert_eq!(t.successful_hits(), 3);
}

#[test]
fn dpi_mode_and_manual_sensitivity_changes_reset() {
    let mut store = SensitivityStore::new();

    let mut t = tracker_with(&store, 5, 3);
    store.set_dpi(1600);
    assert!(t.observe(&store.snapshot()));
    assert_eq!((t.total_clicks(), t.successful_hits()), (0, 0));

    let mut t = tracker_with(&store, 5, 3);
    store.set_sensitivity(0.5);
    assert!(t.observe(&store.snapshot()));

    let mut t = tracker_with(&store, 5, 3);
    store.set_game_mode(GameMode::CounterStrike);
    assert!(t.observe(&store.snapshot()));

    let mut t = tracker_with(&store, 5, 3);
    store.toggle_auto_adjustment();
    assert!(t.observe(&store.snapshot()));
}

#[test]
fn auto_adjusted_sensitivity_does_not_reset() {
    let mut store = SensitivityStore::new();
    store.toggle_auto_adjustment();
    let mut t = tracker_with(&store, 10, 6);
    store.adjust_by_hit_offset(0.2, 0.1);
    store.adjust_by_hit_offset(0.1, 0.1);
    assert!(!t.observe(&store.snapshot()));
    assert_eq!(t.accuracy_percent(), 60);
}

#[test]
fn hit_counted_before_adjustment_survives_observe() {
    let mut store = SensitivityStore::new();
    store.toggle_auto_adjustment();
    let mut t = AccuracyTracker::new(&store.snapshot());

    // Shot order: click, hit, then the store reacts to the offset
    t.record_click();
    t.record_hit();
    assert!(store.adjust_by_hit_offset(10.0, 0.0));
    assert!(!t.observe(&store.snapshot()));
    assert_eq!((t.total_clicks(), t.successful_hits()), (1, 1));
    assert_eq!(t.accuracy_percent(), 100);
}
