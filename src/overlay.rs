use crate::constants::*;
use crate::dom;
use crate::labels;
use aim_core::{format_edpi, format_sensitivity, AccuracyTracker, SensitivityState};
use web_sys as web;

/// Refresh the Clicks / Hits / Accuracy readout.
pub fn update_accuracy(document: &web::Document, tracker: &AccuracyTracker) {
    let [clicks, hits, accuracy] = labels::accuracy_lines(tracker);
    dom::set_text(document, HUD_CLICKS_ID, &clicks);
    dom::set_text(document, HUD_HITS_ID, &hits);
    dom::set_text(document, HUD_ACCURACY_ID, &accuracy);
}

/// Bring every panel readout and control in line with the store.
pub fn sync_panel(document: &web::Document, state: &SensitivityState) {
    let sens = format_sensitivity(state.sensitivity);

    dom::set_text(document, EDPI_VALUE_ID, &format_edpi(state.edpi));
    dom::set_text(document, EDPI_CATEGORY_ID, labels::edpi_category(state));
    dom::set_text(document, SENSITIVITY_VALUE_ID, &sens);
    dom::set_text(document, PRO_AVERAGE_ID, state.game_mode.pro_average());
    dom::set_text(document, PRO_RANGE_ID, &labels::pro_range(state));
    dom::set_text(document, YOUR_SETTING_ID, &labels::your_setting(state));

    dom::set_input_value(document, DPI_INPUT_ID, &state.dpi.to_string());
    dom::set_input_value(document, SENSITIVITY_INPUT_ID, &sens);
    dom::set_input_value(document, SENSITIVITY_SLIDER_ID, &sens);
    dom::set_select_value(document, GAME_MODE_SELECT_ID, state.game_mode.key());
    dom::set_checked(document, AUTO_ADJUST_ID, state.auto_adjustment);
}
