//! The session's sensitivity settings.
//!
//! `SensitivityStore` is the only owner of the settings. Consumers read a
//! copied `SensitivityState` and change it through the store's operations,
//! which recompute eDPI whenever DPI or sensitivity changes.

use crate::constants::{
    CS_PER_VALORANT_RATIO, DEFAULT_DPI, DEFAULT_SENSITIVITY, HIT_OFFSET_GAIN, MAX_HIT_ADJUSTMENT,
    MAX_SENSITIVITY, MIN_SENSITIVITY,
};
use crate::game_mode::GameMode;
use crate::units::{clamp_sensitivity, edpi_from, round_to_thousandths};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SensitivityState {
    pub dpi: u32,
    pub sensitivity: f64,
    pub edpi: f64,
    pub auto_adjustment: bool,
    pub game_mode: GameMode,
}

impl Default for SensitivityState {
    fn default() -> Self {
        Self {
            dpi: DEFAULT_DPI,
            sensitivity: DEFAULT_SENSITIVITY,
            edpi: edpi_from(DEFAULT_DPI, DEFAULT_SENSITIVITY),
            auto_adjustment: false,
            game_mode: GameMode::Valorant,
        }
    }
}

#[derive(Debug, Default)]
pub struct SensitivityStore {
    state: SensitivityState,
}

impl SensitivityStore {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn snapshot(&self) -> SensitivityState {
        self.state
    }

    #[inline]
    pub fn dpi(&self) -> u32 {
        self.state.dpi
    }

    #[inline]
    pub fn sensitivity(&self) -> f64 {
        self.state.sensitivity
    }

    #[inline]
    pub fn edpi(&self) -> f64 {
        self.state.edpi
    }

    #[inline]
    pub fn auto_adjustment(&self) -> bool {
        self.state.auto_adjustment
    }

    #[inline]
    pub fn game_mode(&self) -> GameMode {
        self.state.game_mode
    }

    /// Set DPI without clamping; callers validate against [100, 10000].
    pub fn set_dpi(&mut self, dpi: u32) {
        self.state.dpi = dpi;
        self.state.edpi = edpi_from(dpi, self.state.sensitivity);
        log::debug!("[store] dpi={} edpi={:.1}", dpi, self.state.edpi);
    }

    /// Set sensitivity without clamping; callers validate against [0.1, 2.0].
    pub fn set_sensitivity(&mut self, sensitivity: f64) {
        self.state.sensitivity = sensitivity;
        self.state.edpi = edpi_from(self.state.dpi, sensitivity);
        log::debug!(
            "[store] sensitivity={:.3} edpi={:.1}",
            sensitivity,
            self.state.edpi
        );
    }

    pub fn toggle_auto_adjustment(&mut self) {
        self.state.auto_adjustment = !self.state.auto_adjustment;
        log::debug!("[store] auto_adjustment={}", self.state.auto_adjustment);
    }

    /// Switch game mode, carrying the aim speed over to the new game's scale.
    ///
    /// The stored sensitivity is rounded to three decimals, while eDPI is
    /// computed from the unrounded converted value, so the two can disagree
    /// in the last digits until the next DPI or sensitivity change.
    pub fn set_game_mode(&mut self, mode: GameMode) {
        let from = self.state.game_mode;
        if mode == from {
            return;
        }
        let converted = match (from, mode) {
            (GameMode::Valorant, GameMode::CounterStrike) => {
                self.state.sensitivity * CS_PER_VALORANT_RATIO
            }
            (GameMode::CounterStrike, GameMode::Valorant) => {
                self.state.sensitivity / CS_PER_VALORANT_RATIO
            }
            _ => self.state.sensitivity,
        };
        self.state.game_mode = mode;
        self.state.sensitivity = round_to_thousandths(converted);
        self.state.edpi = edpi_from(self.state.dpi, converted);
        log::info!(
            "[store] game mode {:?} -> {:?}: sensitivity={:.3}",
            from,
            mode,
            self.state.sensitivity
        );
    }

    /// Damp sensitivity after a hit, in proportion to how far from the
    /// target centre it landed. Heuristic, capped at 0.05 per hit.
    ///
    /// Returns whether the store changed; nothing happens while
    /// auto-adjustment is off.
    pub fn adjust_by_hit_offset(&mut self, offset_x: f64, offset_y: f64) -> bool {
        if !self.state.auto_adjustment {
            return false;
        }
        let magnitude = (offset_x * offset_x + offset_y * offset_y).sqrt();
        let delta = (magnitude * HIT_OFFSET_GAIN).clamp(-MAX_HIT_ADJUSTMENT, MAX_HIT_ADJUSTMENT);
        let next = clamp_sensitivity(self.state.sensitivity - delta);
        self.set_sensitivity(next);
        true
    }

    /// Step sensitivity by `step`, staying on the 0.001 grid and inside the
    /// sensitivity bounds.
    ///
    /// A game-mode switch can leave sensitivity outside the bounds. Stepping
    /// further out from there is a no-op, so a step never moves the value
    /// against its own direction.
    pub fn nudge_sensitivity(&mut self, step: f64) {
        let current = self.state.sensitivity;
        let past_bound = (step > 0.0 && current >= MAX_SENSITIVITY)
            || (step < 0.0 && current <= MIN_SENSITIVITY);
        if past_bound {
            return;
        }
        let next = clamp_sensitivity(round_to_thousandths(current + step));
        self.set_sensitivity(next);
    }
}
