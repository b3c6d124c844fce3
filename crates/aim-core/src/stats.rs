use crate::game_mode::GameMode;
use crate::store::SensitivityState;

/// Settings that invalidate the running accuracy figure when they change.
#[derive(Clone, Copy, Debug, PartialEq)]
struct SettingsKey {
    dpi: u32,
    sensitivity: f64,
    auto_adjustment: bool,
    game_mode: GameMode,
}

impl From<&SensitivityState> for SettingsKey {
    fn from(s: &SensitivityState) -> Self {
        Self {
            dpi: s.dpi,
            sensitivity: s.sensitivity,
            auto_adjustment: s.auto_adjustment,
            game_mode: s.game_mode,
        }
    }
}

/// Shots fired versus targets hit since the settings last changed.
#[derive(Clone, Debug)]
pub struct AccuracyTracker {
    total_clicks: u32,
    successful_hits: u32,
    last: SettingsKey,
}

impl AccuracyTracker {
    pub fn new(state: &SensitivityState) -> Self {
        Self {
            total_clicks: 0,
            successful_hits: 0,
            last: state.into(),
        }
    }

    pub fn record_click(&mut self) {
        self.total_clicks += 1;
    }

    pub fn record_hit(&mut self) {
        self.successful_hits += 1;
    }

    pub fn total_clicks(&self) -> u32 {
        self.total_clicks
    }

    pub fn successful_hits(&self) -> u32 {
        self.successful_hits
    }

    /// Whole-number percentage; 0 before the first shot.
    pub fn accuracy_percent(&self) -> u32 {
        if self.total_clicks == 0 {
            return 0;
        }
        (self.successful_hits as f64 / self.total_clicks as f64 * 100.0).round() as u32
    }

    /// Compare against the settings seen last time and reset the counters if
    /// they changed. Sensitivity drift from auto-adjustment does not count.
    /// Returns whether a reset happened.
    pub fn observe(&mut self, state: &SensitivityState) -> bool {
        let next = SettingsKey::from(state);
        let changed = self.last.dpi != next.dpi
            || (!next.auto_adjustment && self.last.sensitivity != next.sensitivity)
            || self.last.auto_adjustment != next.auto_adjustment
            || self.last.game_mode != next.game_mode;
        if changed {
            self.total_clicks = 0;
            self.successful_hits = 0;
            self.last = next;
        }
        changed
    }
}
