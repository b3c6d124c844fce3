use crate::error::InputError;
use std::fmt;
use std::str::FromStr;

/// Which game's sensitivity convention the trainer currently follows.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum GameMode {
    #[default]
    Valorant,
    CounterStrike,
}

impl GameMode {
    pub const ALL: [GameMode; 2] = [GameMode::Valorant, GameMode::CounterStrike];

    /// Value used by the panel's `<select>`.
    pub fn key(self) -> &'static str {
        match self {
            GameMode::Valorant => "valorant",
            GameMode::CounterStrike => "cs",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            GameMode::Valorant => "Valorant (FOV: 103°)",
            GameMode::CounterStrike => "Counter-Strike (FOV: 90°)",
        }
    }

    /// Reference vertical field of view in degrees.
    pub fn fov_degrees(self) -> f32 {
        match self {
            GameMode::Valorant => 103.0,
            GameMode::CounterStrike => 90.0,
        }
    }

    /// eDPI span most professional players sit in.
    pub fn pro_edpi_range(self) -> (f64, f64) {
        match self {
            GameMode::Valorant => (200.0, 400.0),
            GameMode::CounterStrike => (600.0, 1200.0),
        }
    }

    pub fn pro_average(self) -> &'static str {
        match self {
            GameMode::Valorant => "320 eDPI (0.4 @ 800 DPI)",
            GameMode::CounterStrike => "850 eDPI (1.06 @ 800 DPI)",
        }
    }
}

impl fmt::Display for GameMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for GameMode {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "valorant" => Ok(GameMode::Valorant),
            "cs" => Ok(GameMode::CounterStrike),
            other => Err(InputError::UnknownGameMode(other.to_string())),
        }
    }
}
