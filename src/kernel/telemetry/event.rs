use serde::{Deserialize, Serialize};

use crate::kernel::annotation::TrialOutcome;
use crate::kernel::pending::WordRejection;

// Allowed: positions, durations, counts, enums
// Forbidden: words, media URLs

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TelemetryEvent {
    PauseAccepted {
        position: f64,
        /// None for the first pause of a trial.
        elapsed: Option<f64>,
    },

    PauseRejected {
        position: f64,
        elapsed: f64,
    },

    AutoResumed,

    UnpauseBlocked,

    WordStaged,

    WordRemoved,

    WordRejected {
        reason: WordRejection,
    },

    EmptySubmitRejected,

    BatchSubmitted {
        words: usize,
        timestamp: f64,
    },

    MediaFailed {
        discarded: usize,
    },

    TrialResolved {
        outcome: TrialOutcome,
        annotations: usize,
    },
}
