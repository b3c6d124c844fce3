// Host-side tests for hold-to-repeat sensitivity keys.

use aim_core::*;

/// Press `key` at t=0, poll every `poll_every` ms until `hold_ms`, release.
/// Returns the number of steps applied.
fn hold(store: &mut SensitivityStore, key: &str, hold_ms: u64, poll_every: usize) -> u32 {
    let key = RepeatKey::from_key(key).expect("repeat key");
    let mut repeat = KeyRepeat::default();
    let mut steps = 0;
    if repeat.key_down(key, 0) {
        store.nudge_sensitivity(key.step());
        steps += 1;
    }
    for now in (0..hold_ms).step_by(poll_every) {
        for _ in 0..repeat.poll(now) {
            store.nudge_sensitivity(key.step());
            steps += 1;
        }
    }
    assert!(repeat.key_up(key));
    steps
}

#[test]
fn holding_up_for_600ms_steps_three_times() {
    let mut store = SensitivityStore::new();
    let steps = hold(&mut store, "ArrowUp", 600, 50);
    assert_eq!(steps, 3);
    assert!((store.sensitivity() - 0.43).abs() < 1e-9);
    assert!((store.edpi() - 800.0 * 0.43).abs() < 1e-6);
}

#[test]
fn poll_granularity_does_not_change_step_count() {
    for every in [1, 10, 125, 250, 599] {
        let mut store = SensitivityStore::new();
        assert_eq!(hold(&mut store, "ArrowDown", 600, every), 3, "poll every {every}");
        assert!((store.sensitivity() - 0.37).abs() < 1e-9);
    }
}

#[test]
fn holding_up_stops_at_maximum() {
    let mut store = SensitivityStore::new();
    store.set_sensitivity(1.99);
    hold(&mut store, "ArrowUp", 600, 50);
    assert!((store.sensitivity() - 2.0).abs() < 1e-12);
}

#[test]
fn second_key_is_ignored_while_one_repeats() {
    let mut repeat = KeyRepeat::default();
    assert!(repeat.key_down(RepeatKey::Up, 0));
    assert!(!repeat.key_down(RepeatKey::Down, 10));
    assert!(!repeat.key_down(RepeatKey::Up, 20));
    assert_eq!(repeat.active_key(), Some(RepeatKey::Up));

    assert!(!repeat.key_up(RepeatKey::Down));
    assert_eq!(repeat.active_key(), Some(RepeatKey::Up));
    assert!(repeat.key_up(RepeatKey::Up));
    assert!(repeat.key_down(RepeatKey::Down, 30));
}

#[test]
fn blur_cancels_pending_repeats() {
    let mut repeat = KeyRepeat::default();
    repeat.key_down(RepeatKey::Up, 0);
    assert_eq!(repeat.poll(260), 1);
    repeat.blur();
    assert_eq!(repeat, KeyRepeat::Idle);
    assert_eq!(repeat.poll(10_000), 0);
}

#[test]
fn poll_catches_up_after_a_stall() {
    let mut repeat = KeyRepeat::default();
    repeat.key_down(RepeatKey::Up, 1_000);
    assert_eq!(repeat.poll(1_100), 0);
    assert_eq!(repeat.poll(2_000), 4);
    assert_eq!(repeat.poll(2_000), 0);
    assert_eq!(repeat.poll(2_250), 1);
}

#[test]
fn only_arrow_keys_repeat() {
    assert_eq!(RepeatKey::from_key("ArrowUp"), Some(RepeatKey::Up));
    assert_eq!(RepeatKey::from_key("ArrowDown"), Some(RepeatKey::Down));
    assert_eq!(RepeatKey::from_key("ArrowLeft"), None);
    assert_eq!(RepeatKey::from_key("w"), None);
    assert!(RepeatKey::Up.step() > 0.0);
    assert!(RepeatKey::Down.step() < 0.0);
}
