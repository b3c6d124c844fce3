//! Hold-to-repeat sensitivity keys.
//!
//! One key at a time: the first accepted keydown applies a step immediately,
//! then one step is due every interval until keyup or focus loss. Time is
//! passed in by the caller so the schedule can be driven by any clock.

use crate::constants::{KEY_REPEAT_INTERVAL_MS, KEY_SENSITIVITY_STEP};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RepeatKey {
    Up,
    Down,
}

impl RepeatKey {
    #[inline]
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowUp" => Some(RepeatKey::Up),
            "ArrowDown" => Some(RepeatKey::Down),
            _ => None,
        }
    }

    /// Signed sensitivity change applied per step.
    #[inline]
    pub fn step(self) -> f64 {
        match self {
            RepeatKey::Up => KEY_SENSITIVITY_STEP,
            RepeatKey::Down => -KEY_SENSITIVITY_STEP,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum KeyRepeat {
    #[default]
    Idle,
    Repeating { key: RepeatKey, next_due_ms: u64 },
}

impl KeyRepeat {
    pub fn active_key(&self) -> Option<RepeatKey> {
        match *self {
            KeyRepeat::Idle => None,
            KeyRepeat::Repeating { key, .. } => Some(key),
        }
    }

    /// Returns true when the press is accepted and one step should be
    /// applied right away. Ignored while any key is already repeating.
    pub fn key_down(&mut self, key: RepeatKey, now_ms: u64) -> bool {
        if self.active_key().is_some() {
            return false;
        }
        *self = KeyRepeat::Repeating {
            key,
            next_due_ms: now_ms + KEY_REPEAT_INTERVAL_MS,
        };
        true
    }

    /// Release `key`. Returns true if it was the repeating key.
    pub fn key_up(&mut self, key: RepeatKey) -> bool {
        if self.active_key() == Some(key) {
            *self = KeyRepeat::Idle;
            return true;
        }
        false
    }

    pub fn blur(&mut self) {
        *self = KeyRepeat::Idle;
    }

    /// Number of repeat steps that fell due up to `now_ms`.
    pub fn poll(&mut self, now_ms: u64) -> u32 {
        let KeyRepeat::Repeating { key, mut next_due_ms } = *self else {
            return 0;
        };
        let mut due = 0;
        while next_due_ms <= now_ms {
            due += 1;
            next_due_ms += KEY_REPEAT_INTERVAL_MS;
        }
        *self = KeyRepeat::Repeating { key, next_due_ms };
        due
    }
}
