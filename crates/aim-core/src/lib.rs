pub mod calibration;
pub mod camera;
pub mod constants;
pub mod error;
pub mod game_mode;
pub mod key_repeat;
pub mod stats;
pub mod store;
pub mod targets;
pub mod units;

pub use calibration::*;
pub use camera::*;
pub use error::*;
pub use game_mode::*;
pub use key_repeat::*;
pub use stats::*;
pub use store::*;
pub use targets::*;
pub use units::*;
