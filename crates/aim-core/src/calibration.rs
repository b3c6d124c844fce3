//! Ruler-based DPI calibration.
//!
//! The user drags the mouse along a ruler while raw movement deltas are
//! recorded, then types in the distance covered. DPI is the pixel path length
//! divided by that distance in inches. This is an estimate; it is not a
//! hardware property read from the device.

use crate::constants::{
    CALIBRATION_FALLBACK_DPI, CM_PER_INCH, DEFAULT_CALIBRATION_DISTANCE_CM,
};
use crate::error::CalibrationError;
use crate::store::SensitivityStore;
use crate::units::clamp_dpi;
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MouseMovementSample {
    pub delta_x: f64,
    pub delta_y: f64,
    pub timestamp_ms: u64,
}

impl MouseMovementSample {
    #[inline]
    pub fn length(&self) -> f64 {
        (self.delta_x * self.delta_x + self.delta_y * self.delta_y).sqrt()
    }
}

/// DPI for a pixel path of `pixels` covering `physical_cm` centimetres.
pub fn dpi_from_distance(pixels: f64, physical_cm: f64) -> u32 {
    debug_assert!(physical_cm > 0.0, "physical distance must be positive");
    let inches = physical_cm / CM_PER_INCH;
    (pixels / inches).round() as u32
}

/// Samples recorded during one tracking window.
#[derive(Clone, Debug, Default)]
pub struct CalibrationSession {
    samples: Vec<MouseMovementSample>,
    tracking: bool,
    start_ms: u64,
}

impl CalibrationSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop earlier samples and begin recording.
    pub fn start(&mut self, now_ms: u64) {
        self.samples.clear();
        self.tracking = true;
        self.start_ms = now_ms;
    }

    /// Stop recording; recorded samples are kept.
    pub fn stop(&mut self) {
        self.tracking = false;
    }

    /// Append a sample if tracking is active. Returns whether it was kept.
    pub fn record(&mut self, delta_x: f64, delta_y: f64, now_ms: u64) -> bool {
        if !self.tracking {
            return false;
        }
        self.samples.push(MouseMovementSample {
            delta_x,
            delta_y,
            timestamp_ms: now_ms,
        });
        true
    }

    pub fn reset(&mut self) {
        self.samples.clear();
        self.tracking = false;
        self.start_ms = 0;
    }

    pub fn samples(&self) -> &[MouseMovementSample] {
        &self.samples
    }

    pub fn is_tracking(&self) -> bool {
        self.tracking
    }

    pub fn start_ms(&self) -> u64 {
        self.start_ms
    }

    pub fn total_pixel_distance(&self) -> f64 {
        self.samples.iter().map(MouseMovementSample::length).sum()
    }

    /// Estimated DPI, or the fixed fallback when nothing was recorded.
    pub fn calculate_dpi(&self, physical_cm: f64) -> u32 {
        if self.samples.is_empty() {
            return CALIBRATION_FALLBACK_DPI;
        }
        dpi_from_distance(self.total_pixel_distance(), physical_cm)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CalibrationStep {
    Instructions,
    Measuring,
    Input,
    Result { dpi: u32 },
}

impl fmt::Display for CalibrationStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CalibrationStep::Instructions => "instructions",
            CalibrationStep::Measuring => "measuring",
            CalibrationStep::Input => "input",
            CalibrationStep::Result { .. } => "result",
        };
        f.write_str(name)
    }
}

/// Instructions -> Measuring -> Input -> Result, with reset back to
/// Instructions from anywhere and accept leaving from Result.
#[derive(Clone, Debug)]
pub struct CalibrationWizard {
    step: CalibrationStep,
    session: CalibrationSession,
    physical_distance_cm: f64,
}

impl Default for CalibrationWizard {
    fn default() -> Self {
        Self {
            step: CalibrationStep::Instructions,
            session: CalibrationSession::new(),
            physical_distance_cm: DEFAULT_CALIBRATION_DISTANCE_CM,
        }
    }
}

impl CalibrationWizard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn step(&self) -> CalibrationStep {
        self.step
    }

    pub fn session(&self) -> &CalibrationSession {
        &self.session
    }

    pub fn physical_distance_cm(&self) -> f64 {
        self.physical_distance_cm
    }

    fn invalid(&self, action: &'static str) -> CalibrationError {
        log::warn!("[calibration] {} ignored in {} step", action, self.step);
        CalibrationError::InvalidTransition {
            step: self.step,
            action,
        }
    }

    pub fn start_measurement(&mut self, now_ms: u64) -> Result<(), CalibrationError> {
        if self.step != CalibrationStep::Instructions {
            return Err(self.invalid("start measuring"));
        }
        self.session.start(now_ms);
        self.step = CalibrationStep::Measuring;
        Ok(())
    }

    /// Feed a raw movement delta. Only recorded while measuring.
    pub fn record_movement(&mut self, delta_x: f64, delta_y: f64, now_ms: u64) -> bool {
        self.step == CalibrationStep::Measuring && self.session.record(delta_x, delta_y, now_ms)
    }

    pub fn stop_measurement(&mut self) -> Result<(), CalibrationError> {
        if self.step != CalibrationStep::Measuring {
            return Err(self.invalid("stop measuring"));
        }
        self.session.stop();
        self.step = CalibrationStep::Input;
        log::info!(
            "[calibration] recorded {} samples, {:.0}px",
            self.session.samples().len(),
            self.session.total_pixel_distance()
        );
        Ok(())
    }

    /// Distance the mouse travelled along the ruler, in centimetres.
    pub fn set_physical_distance_cm(&mut self, cm: f64) -> Result<(), CalibrationError> {
        if self.step != CalibrationStep::Input {
            return Err(self.invalid("set distance"));
        }
        self.physical_distance_cm = cm;
        Ok(())
    }

    pub fn calculate(&mut self) -> Result<u32, CalibrationError> {
        if self.step != CalibrationStep::Input {
            return Err(self.invalid("calculate"));
        }
        let dpi = self.session.calculate_dpi(self.physical_distance_cm);
        self.step = CalibrationStep::Result { dpi };
        log::info!(
            "[calibration] {:.1}cm -> {} DPI",
            self.physical_distance_cm,
            dpi
        );
        Ok(dpi)
    }

    /// Back to Instructions, discarding samples and any computed DPI.
    pub fn reset(&mut self) {
        self.session.reset();
        self.step = CalibrationStep::Instructions;
    }

    /// Push the computed DPI into the store and return the applied value.
    /// Sensitivity is left alone; eDPI follows through the store.
    pub fn accept(&mut self, store: &mut SensitivityStore) -> Result<u32, CalibrationError> {
        let CalibrationStep::Result { dpi } = self.step else {
            return Err(self.invalid("accept"));
        };
        let applied = clamp_dpi(dpi);
        if applied != dpi {
            log::warn!("[calibration] {} DPI clamped to {}", dpi, applied);
        }
        store.set_dpi(applied);
        Ok(applied)
    }
}
