// Host-side tests for front-end constants.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;
use std::collections::HashSet;

fn element_ids() -> Vec<&'static str> {
    let mut ids = vec![
        CANVAS_ID,
        HUD_CLICKS_ID,
        HUD_HITS_ID,
        HUD_ACCURACY_ID,
        DPI_INPUT_ID,
        SENSITIVITY_INPUT_ID,
        SENSITIVITY_SLIDER_ID,
        SENSITIVITY_VALUE_ID,
        GAME_MODE_SELECT_ID,
        AUTO_ADJUST_ID,
        EDPI_VALUE_ID,
        EDPI_CATEGORY_ID,
        PRO_AVERAGE_ID,
        PRO_RANGE_ID,
        YOUR_SETTING_ID,
        CALIBRATE_BUTTON_ID,
        CALIBRATION_MODAL_ID,
        CALIBRATION_CLOSE_ID,
        CALIBRATION_START_ID,
        CALIBRATION_STOP_ID,
        CALIBRATION_CALCULATE_ID,
        CALIBRATION_BACK_ID,
        CALIBRATION_AGAIN_ID,
        CALIBRATION_ACCEPT_ID,
        CALIBRATION_DISTANCE_ID,
        CALIBRATION_RESULT_ID,
        CALIBRATION_SAMPLES_ID,
    ];
    ids.extend(CALIBRATION_STEP_IDS);
    ids
}

#[test]
fn element_ids_are_unique() {
    let ids = element_ids();
    let unique: HashSet<_> = ids.iter().collect();
    assert_eq!(unique.len(), ids.len());
}

#[test]
fn element_ids_exist_in_index_html() {
    let html = include_str!("../index.html");
    for id in element_ids() {
        assert!(
            html.contains(&format!("id=\"{}\"", id)),
            "index.html is missing #{}",
            id
        );
    }
}

#[test]
fn colours_are_hex_rgb() {
    for c in [
        BACKGROUND_COLOR,
        TARGET_COLOR,
        TARGET_HOVER_COLOR,
        TARGET_CORE_COLOR,
        CROSSHAIR_COLOR,
    ] {
        assert_eq!(c.len(), 7, "{}", c);
        assert!(c.starts_with('#'));
        assert!(c[1..].chars().all(|ch| ch.is_ascii_hexdigit()), "{}", c);
    }
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn visual_sizes_are_positive() {
    assert!(CROSSHAIR_RADIUS_PX > 0.0);
    assert!(HIT_FLASH_MS > 0.0);
    assert!(HIT_RING_WIDTH_PX > 0.0);
    assert!(CORE_ALPHA > 0.0 && CORE_ALPHA <= 1.0);
}
