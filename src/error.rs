use std::path::PathBuf;
use thiserror::Error;

/// Failures outside the trial's own semantics. Media errors, rejected words
/// and pacing violations are trial outcomes, not errors.
#[derive(Debug, Error)]
pub enum AnnotatorError {
    #[error("failed to read config {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config json: {0}")]
    ConfigParse(#[from] serde_json::Error),

    #[error("{field} must be a finite, non-negative number of seconds (got {value})")]
    InvalidInterval { field: &'static str, value: f64 },

    #[error("unknown command: {0}")]
    UnknownCommand(String),

    #[error("expected a playback position in seconds, got {0:?}")]
    InvalidPosition(String),

    #[error("trial stopped before producing a result")]
    TrialDropped,
}

pub type Result<T> = std::result::Result<T, AnnotatorError>;
