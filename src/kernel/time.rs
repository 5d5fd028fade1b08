use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Media playback position in seconds, as reported by the video element.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Position(f64);

impl Position {
    pub const ZERO: Position = Position(0.0);

    /// Media elements may report NaN before metadata loads; those collapse to zero.
    pub fn new(seconds: f64) -> Self {
        if seconds.is_finite() && seconds > 0.0 {
            Position(seconds)
        } else {
            Position(0.0)
        }
    }

    pub fn seconds(&self) -> f64 {
        self.0
    }

    /// Signed distance from an earlier mark. The mark may be negative before the first pause.
    pub fn since(&self, mark: f64) -> f64 {
        self.0 - mark
    }
}

impl From<f64> for Position {
    fn from(seconds: f64) -> Self {
        Position::new(seconds)
    }
}

/// Fixed delay before a too-early pause is undone.
pub const TOO_EARLY_RESUME_SECS: f64 = 1.5;

pub fn secs(seconds: f64) -> Duration {
    if seconds.is_finite() && seconds > 0.0 {
        Duration::from_secs_f64(seconds)
    } else {
        Duration::ZERO
    }
}
