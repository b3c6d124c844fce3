use aim_core::{
    format_edpi, format_sensitivity, sensitivity_category, AccuracyTracker, SensitivityState,
};

/// "Your Setting" line, e.g. `320 eDPI (0.400 @ 800 DPI)`.
pub fn your_setting(state: &SensitivityState) -> String {
    format!(
        "{} eDPI ({} @ {} DPI)",
        format_edpi(state.edpi),
        format_sensitivity(state.sensitivity),
        state.dpi
    )
}

pub fn pro_range(state: &SensitivityState) -> String {
    let (lo, hi) = state.game_mode.pro_edpi_range();
    format!("{}-{} eDPI", lo, hi)
}

pub fn edpi_category(state: &SensitivityState) -> &'static str {
    sensitivity_category(state.edpi, state.game_mode).label()
}

/// HUD lines: clicks, hits, accuracy.
pub fn accuracy_lines(tracker: &AccuracyTracker) -> [String; 3] {
    [
        format!("Clicks: {}", tracker.total_clicks()),
        format!("Hits: {}", tracker.successful_hits()),
        format!("Accuracy: {}%", tracker.accuracy_percent()),
    ]
}

pub fn sample_count(samples: usize) -> String {
    match samples {
        1 => "1 movement recorded".to_string(),
        n => format!("{} movements recorded", n),
    }
}
