//! Error types for the aim-trainer core.

use crate::calibration::CalibrationStep;
use thiserror::Error;

/// Rejected text from one of the settings fields.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InputError {
    /// Field text did not parse as a number
    #[error("{field} is not a number: {text:?}")]
    NotANumber { field: &'static str, text: String },

    /// Parsed value lies outside the field bounds
    #[error("{field} {value} outside [{min}, {max}]")]
    OutOfRange {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    /// Game mode select value not recognised
    #[error("unknown game mode: {0:?}")]
    UnknownGameMode(String),
}

/// Wizard action invoked from a step that does not allow it.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum CalibrationError {
    #[error("cannot {action} during the {step} step")]
    InvalidTransition {
        step: CalibrationStep,
        action: &'static str,
    },
}
