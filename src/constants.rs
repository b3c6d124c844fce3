// Element ids, colours and sizing for the web front-end.

// Scene
pub const CANVAS_ID: &str = "app-canvas";

// Heads-up accuracy display
pub const HUD_CLICKS_ID: &str = "hud-clicks";
pub const HUD_HITS_ID: &str = "hud-hits";
pub const HUD_ACCURACY_ID: &str = "hud-accuracy";

// Sensitivity panel
pub const DPI_INPUT_ID: &str = "dpi-input";
pub const SENSITIVITY_INPUT_ID: &str = "sensitivity-input";
pub const SENSITIVITY_SLIDER_ID: &str = "sensitivity-slider";
pub const SENSITIVITY_VALUE_ID: &str = "sensitivity-value";
pub const GAME_MODE_SELECT_ID: &str = "game-mode";
pub const AUTO_ADJUST_ID: &str = "auto-adjust";
pub const EDPI_VALUE_ID: &str = "edpi-value";
pub const EDPI_CATEGORY_ID: &str = "sensitivity-category";
pub const PRO_AVERAGE_ID: &str = "pro-average";
pub const PRO_RANGE_ID: &str = "pro-range";
pub const YOUR_SETTING_ID: &str = "your-setting";
pub const CALIBRATE_BUTTON_ID: &str = "calibrate-btn";

// Calibration modal
pub const CALIBRATION_MODAL_ID: &str = "dpi-calibration";
pub const CALIBRATION_CLOSE_ID: &str = "calibration-close";
pub const CALIBRATION_START_ID: &str = "calibration-start";
pub const CALIBRATION_STOP_ID: &str = "calibration-stop";
pub const CALIBRATION_CALCULATE_ID: &str = "calibration-calculate";
pub const CALIBRATION_BACK_ID: &str = "calibration-back";
pub const CALIBRATION_AGAIN_ID: &str = "calibration-again";
pub const CALIBRATION_ACCEPT_ID: &str = "calibration-accept";
pub const CALIBRATION_DISTANCE_ID: &str = "calibration-distance";
pub const CALIBRATION_RESULT_ID: &str = "calibration-result";
pub const CALIBRATION_SAMPLES_ID: &str = "calibration-samples";
pub const CALIBRATION_STEP_IDS: [&str; 4] = [
    "calibration-step-instructions",
    "calibration-step-measuring",
    "calibration-step-input",
    "calibration-step-result",
];

// Colours
pub const BACKGROUND_COLOR: &str = "#0d0f14";
pub const TARGET_COLOR: &str = "#ff6b6b";
pub const TARGET_HOVER_COLOR: &str = "#ff8888";
pub const TARGET_CORE_COLOR: &str = "#ffffff";
pub const CROSSHAIR_COLOR: &str = "#00ff88";

// Visual sizing
pub const CROSSHAIR_RADIUS_PX: f64 = 3.0;
pub const CORE_ALPHA: f64 = 0.9; // centre dot when not hovered
pub const HIT_FLASH_MS: f64 = 300.0; // fade of the burst ring after a hit
pub const HIT_RING_WIDTH_PX: f64 = 2.0;
