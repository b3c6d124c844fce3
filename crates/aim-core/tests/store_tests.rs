// Host-side tests for the sensitivity store and its eDPI invariant.

use aim_core::constants::{self, CS_PER_VALORANT_RATIO};
use aim_core::*;

fn assert_close(a: f64, b: f64) {
    assert!((a - b).abs() < 1e-9, "{a} != {b}");
}

#[test]
fn defaults() {
    let store = SensitivityStore::new();
    let s = store.snapshot();
    assert_eq!(s.dpi, 800);
    assert_close(s.sensitivity, 0.4);
    assert_close(s.edpi, 320.0);
    assert!(!s.auto_adjustment);
    assert_eq!(s.game_mode, GameMode::Valorant);
}

#[test]
fn edpi_tracks_dpi_and_sensitivity_in_either_order() {
    let dpis = [100, 450, 800, 1600, 3200, 10_000];
    let sens = [0.1, 0.25, 0.4, 0.987, 1.5, 2.0];
    for &dpi in &dpis {
        for &s in &sens {
            let mut a = SensitivityStore::new();
            a.set_dpi(dpi);
            a.set_sensitivity(s);
            assert!((a.edpi() - dpi as f64 * s).abs() < 1e-9);

            let mut b = SensitivityStore::new();
            b.set_sensitivity(s);
            b.set_dpi(dpi);
            assert!((b.edpi() - dpi as f64 * s).abs() < 1e-9);
        }
    }
}

#[test]
fn snapshot_is_a_copy() {
    let mut store = SensitivityStore::new();
    let mut copy = store.snapshot();
    copy.dpi = 5000;
    assert_eq!(store.dpi(), 800);
    store.set_dpi(1600);
    assert_eq!(copy.dpi, 5000);
}

#[test]
fn toggle_auto_adjustment_only_flips_flag() {
    let mut store = SensitivityStore::new();
    let before = store.snapshot();
    store.toggle_auto_adjustment();
    let after = store.snapshot();
    assert!(after.auto_adjustment);
    assert_eq!(after.dpi, before.dpi);
    assert_eq!(after.sensitivity, before.sensitivity);
    assert_eq!(after.edpi, before.edpi);
    store.toggle_auto_adjustment();
    assert_eq!(store.snapshot(), before);
}

#[test]
fn same_game_mode_is_noop() {
    let mut store = SensitivityStore::new();
    let before = store.snapshot();
    store.set_game_mode(GameMode::Valorant);
    assert_eq!(store.snapshot(), before);
}

#[test]
fn switching_to_cs_scales_and_rounds() {
    let mut store = SensitivityStore::new();
    store.set_game_mode(GameMode::CounterStrike);
    assert_eq!(store.game_mode(), GameMode::CounterStrike);
    assert_close(store.sensitivity(), 1.273);
    // eDPI comes from the unrounded conversion
    assert_close(store.edpi(), 800.0 * 0.4 * CS_PER_VALORANT_RATIO);
    assert!((store.edpi() - 800.0 * 1.273).abs() > 0.1);
}

#[test]
fn game_mode_round_trip_matches_rounding_rule() {
    let r = CS_PER_VALORANT_RATIO;
    let mut store = SensitivityStore::new();
    store.set_game_mode(GameMode::CounterStrike);
    store.set_game_mode(GameMode::Valorant);
    let expected = round_to_thousandths(round_to_thousandths(0.4 * r) / r);
    assert_close(store.sensitivity(), expected);
    assert_eq!(store.game_mode(), GameMode::Valorant);
}

#[test]
fn game_mode_round_trip_loses_precision_off_grid() {
    let r = CS_PER_VALORANT_RATIO;
    let mut store = SensitivityStore::new();
    store.set_sensitivity(0.4004);
    store.set_game_mode(GameMode::CounterStrike);
    assert_close(store.sensitivity(), 1.274);
    store.set_game_mode(GameMode::Valorant);
    let expected = round_to_thousandths(round_to_thousandths(0.4004 * r) / r);
    assert_close(store.sensitivity(), expected);
    assert_close(store.sensitivity(), 0.4);
    assert!((store.sensitivity() - 0.4004).abs() > 1e-4);
}

#[test]
fn hit_offset_ignored_without_auto_adjustment() {
    let mut store = SensitivityStore::new();
    let before = store.snapshot();
    for (x, y) in [(0.0, 0.0), (0.1, -0.2), (100.0, 100.0), (-5.0, 3.0)] {
        assert!(!store.adjust_by_hit_offset(x, y));
        assert_eq!(store.snapshot(), before);
    }
}

#[test]
fn large_hit_offset_caps_adjustment() {
    let mut store = SensitivityStore::new();
    store.toggle_auto_adjustment();
    store.set_sensitivity(1.0);
    assert!(store.adjust_by_hit_offset(60.0, 80.0));
    assert_close(store.sensitivity(), 0.95);
    assert_close(store.edpi(), 800.0 * 0.95);
}

#[test]
fn small_hit_offset_scales_adjustment() {
    let mut store = SensitivityStore::new();
    store.toggle_auto_adjustment();
    store.adjust_by_hit_offset(0.03, 0.04);
    assert_close(store.sensitivity(), 0.4 - 0.05 * 0.001);
}

#[test]
fn hit_offset_never_drops_below_minimum() {
    let mut store = SensitivityStore::new();
    store.toggle_auto_adjustment();
    store.set_sensitivity(0.12);
    store.adjust_by_hit_offset(100.0, 0.0);
    assert_close(store.sensitivity(), 0.1);
    store.adjust_by_hit_offset(100.0, 0.0);
    assert_close(store.sensitivity(), 0.1);
}

#[test]
fn nudge_stays_on_grid_and_in_bounds() {
    let mut store = SensitivityStore::new();
    store.nudge_sensitivity(0.01);
    assert_eq!(store.sensitivity(), 0.41);
    store.set_sensitivity(1.995);
    store.nudge_sensitivity(0.01);
    assert_close(store.sensitivity(), 2.0);
    store.set_sensitivity(0.105);
    store.nudge_sensitivity(-0.01);
    assert_close(store.sensitivity(), 0.1);
    assert_close(store.edpi(), 80.0);
}

#[test]
fn conversion_to_cs_can_exceed_maximum() {
    let mut store = SensitivityStore::new();
    store.set_sensitivity(0.7);
    store.set_game_mode(GameMode::CounterStrike);
    assert_close(store.sensitivity(), 2.227);
    assert!(store.sensitivity() > constants::MAX_SENSITIVITY);
}

#[test]
fn nudge_up_never_lowers_out_of_range_sensitivity() {
    let mut store = SensitivityStore::new();
    store.set_sensitivity(0.7);
    store.set_game_mode(GameMode::CounterStrike);
    let before = store.sensitivity();
    store.nudge_sensitivity(RepeatKey::Up.step());
    assert_eq!(store.sensitivity(), before);

    // Stepping down moves back inside the bounds
    store.nudge_sensitivity(RepeatKey::Down.step());
    assert_close(store.sensitivity(), 2.0);
    assert_close(store.edpi(), 1600.0);
}

#[test]
fn nudge_down_never_raises_out_of_range_sensitivity() {
    let mut store = SensitivityStore::new();
    store.set_game_mode(GameMode::CounterStrike);
    store.set_sensitivity(0.2);
    store.set_game_mode(GameMode::Valorant);
    let before = store.sensitivity();
    assert!(before < constants::MIN_SENSITIVITY);
    store.nudge_sensitivity(RepeatKey::Down.step());
    assert_eq!(store.sensitivity(), before);
}
