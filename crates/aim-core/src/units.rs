//! Conversions between DPI, in-game sensitivity and eDPI.
//!
//! Everything here is a pure function. Inputs are assumed to come from bounded
//! UI fields; the `parse_*` helpers are how the front-end enforces those bounds.

use crate::constants::{
    MAX_CALIBRATION_DISTANCE_CM, MAX_DPI, MAX_SENSITIVITY, MIN_CALIBRATION_DISTANCE_CM, MIN_DPI,
    MIN_SENSITIVITY, RECOMMENDED_EDPI,
};
use crate::error::InputError;
use crate::game_mode::GameMode;
use std::fmt;

/// Sensitivity that yields `edpi` at the given DPI. `dpi` must be non-zero.
#[inline]
pub fn sensitivity_from_edpi(dpi: u32, edpi: f64) -> f64 {
    debug_assert!(dpi > 0, "sensitivity_from_edpi called with dpi == 0");
    edpi / dpi as f64
}

#[inline]
pub fn edpi_from(dpi: u32, sensitivity: f64) -> f64 {
    dpi as f64 * sensitivity
}

#[inline]
pub fn clamp_sensitivity(sensitivity: f64) -> f64 {
    sensitivity.clamp(MIN_SENSITIVITY, MAX_SENSITIVITY)
}

#[inline]
pub fn clamp_dpi(dpi: u32) -> u32 {
    dpi.clamp(MIN_DPI, MAX_DPI)
}

/// Round to the 0.001 grid the sensitivity field uses.
#[inline]
pub fn round_to_thousandths(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}

pub fn format_sensitivity(sensitivity: f64) -> String {
    format!("{:.3}", sensitivity)
}

pub fn format_edpi(edpi: f64) -> String {
    format!("{}", edpi.round() as i64)
}

/// Sensitivity that lands on the 320 eDPI baseline. `dpi` must be non-zero.
pub fn recommended_sensitivity(dpi: u32) -> f64 {
    sensitivity_from_edpi(dpi, RECOMMENDED_EDPI)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SensitivityCategory {
    VeryLow,
    Low,
    Medium,
    High,
    VeryHigh,
}

impl SensitivityCategory {
    pub fn label(self) -> &'static str {
        match self {
            SensitivityCategory::VeryLow => "Very Low",
            SensitivityCategory::Low => "Low",
            SensitivityCategory::Medium => "Medium",
            SensitivityCategory::High => "High",
            SensitivityCategory::VeryHigh => "Very High",
        }
    }
}

impl fmt::Display for SensitivityCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Bucket an eDPI against the mode's pro range. Each bound starts the next
/// category.
pub fn sensitivity_category(edpi: f64, mode: GameMode) -> SensitivityCategory {
    let bounds: [f64; 4] = match mode {
        GameMode::Valorant => [200.0, 300.0, 400.0, 600.0],
        GameMode::CounterStrike => [600.0, 750.0, 950.0, 1200.0],
    };
    if edpi < bounds[0] {
        SensitivityCategory::VeryLow
    } else if edpi < bounds[1] {
        SensitivityCategory::Low
    } else if edpi < bounds[2] {
        SensitivityCategory::Medium
    } else if edpi < bounds[3] {
        SensitivityCategory::High
    } else {
        SensitivityCategory::VeryHigh
    }
}

// ---------------- Field parsing ----------------

fn parse_number(field: &'static str, text: &str) -> Result<f64, InputError> {
    let value: f64 = text.trim().parse().map_err(|_| InputError::NotANumber {
        field,
        text: text.to_string(),
    })?;
    if !value.is_finite() {
        return Err(InputError::NotANumber {
            field,
            text: text.to_string(),
        });
    }
    Ok(value)
}

fn check_range(field: &'static str, value: f64, min: f64, max: f64) -> Result<f64, InputError> {
    if value < min || value > max {
        return Err(InputError::OutOfRange {
            field,
            value,
            min,
            max,
        });
    }
    Ok(value)
}

/// Parse the DPI field. Fractional input is truncated the way an integer
/// field parse would.
pub fn parse_dpi(text: &str) -> Result<u32, InputError> {
    let value = parse_number("dpi", text)?.trunc();
    let value = check_range("dpi", value, MIN_DPI as f64, MAX_DPI as f64)?;
    Ok(value as u32)
}

pub fn parse_sensitivity(text: &str) -> Result<f64, InputError> {
    let value = parse_number("sensitivity", text)?;
    check_range("sensitivity", value, MIN_SENSITIVITY, MAX_SENSITIVITY)
}

pub fn parse_distance_cm(text: &str) -> Result<f64, InputError> {
    let value = parse_number("distance", text)?;
    check_range(
        "distance",
        value,
        MIN_CALIBRATION_DISTANCE_CM,
        MAX_CALIBRATION_DISTANCE_CM,
    )
}
