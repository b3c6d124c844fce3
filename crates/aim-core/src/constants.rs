use glam::Vec3;

// Shared tuning constants for the sensitivity model and the training scene.

// Sensitivity model defaults
pub const DEFAULT_DPI: u32 = 800;
pub const DEFAULT_SENSITIVITY: f64 = 0.4;

// Input bounds (mirrors the panel's field limits)
pub const MIN_DPI: u32 = 100;
pub const MAX_DPI: u32 = 10_000;
pub const MIN_SENSITIVITY: f64 = 0.1;
pub const MAX_SENSITIVITY: f64 = 2.0;

// Recommendation baseline
pub const RECOMMENDED_EDPI: f64 = 320.0;

// Cross-game conversion: CS sensitivity = Valorant sensitivity * ratio
pub const CS_PER_VALORANT_RATIO: f64 = 3.181818;

// Hit-offset auto adjustment
pub const HIT_OFFSET_GAIN: f64 = 0.001; // sensitivity per world unit of miss
pub const MAX_HIT_ADJUSTMENT: f64 = 0.05; // cap per hit

// DPI calibration
pub const CM_PER_INCH: f64 = 2.54;
pub const CALIBRATION_FALLBACK_DPI: u32 = 800; // used when nothing was recorded
pub const DEFAULT_CALIBRATION_DISTANCE_CM: f64 = 10.0;
pub const MIN_CALIBRATION_DISTANCE_CM: f64 = 1.0;
pub const MAX_CALIBRATION_DISTANCE_CM: f64 = 50.0;

// Key repeat
pub const KEY_REPEAT_INTERVAL_MS: u64 = 250;
pub const KEY_SENSITIVITY_STEP: f64 = 0.01;

// Camera
pub const CAMERA_START: Vec3 = Vec3::new(0.0, 0.0, 5.0);
pub const LOOK_SCALE: f32 = 0.0015; // radians per raw count at sensitivity 1.0
pub const MAX_RAW_DELTA: f32 = 10.0; // per-event movement clamp
pub const PITCH_MARGIN: f32 = 0.1; // keeps pitch short of straight up/down
pub const CAMERA_ZNEAR: f32 = 0.1;
pub const CAMERA_ZFAR: f32 = 1000.0;

// Targets
pub const TARGET_RADIUS: f32 = 0.3;
pub const TARGET_CORE_RADIUS: f32 = 0.15; // white centre dot
pub const TARGET_RESPAWN_DELAY_MS: u64 = 300;
pub const SPAWN_HALF_WIDTH: f32 = 4.0; // x in [-4, 4)
pub const SPAWN_HALF_HEIGHT: f32 = 3.0; // y in [-3, 3)
pub const SPAWN_NEAR_Z: f32 = -3.0;
pub const SPAWN_DEPTH: f32 = 4.0; // z in (-7, -3]

pub const DEFAULT_TARGET_POSITIONS: [[f32; 3]; 5] = [
    [-2.0, 1.0, -5.0],
    [2.0, 1.0, -5.0],
    [0.0, 2.0, -6.0],
    [-1.0, -1.0, -4.0],
    [1.0, -1.0, -4.0],
];
