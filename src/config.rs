use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

use crate::error::{AnnotatorError, Result};
use crate::kernel::capability::InteractionMode;
use crate::kernel::time::{secs, TOO_EARLY_RESUME_SECS};

/// Per-trial configuration. Every field has a default, so a JSON document may
/// supply any subset of them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    /// Expose native scrub/seek controls instead of click-to-pause.
    pub show_native_controls: bool,
    /// Pauses at or under this distance from the last accepted pause are undone.
    pub min_pause_interval_seconds: f64,
    pub too_early_resume_delay_seconds: f64,
    /// Time the error notice stays up before the trial resolves.
    pub error_grace_period_seconds: f64,
    pub text: NoticeText,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            show_native_controls: false,
            min_pause_interval_seconds: 2.0,
            too_early_resume_delay_seconds: TOO_EARLY_RESUME_SECS,
            error_grace_period_seconds: 3.0,
            text: NoticeText::default(),
        }
    }
}

/// Display strings. No behavioural effect.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NoticeText {
    pub instruction: String,
    pub pause_hint: String,
    pub too_early: String,
    pub cannot_unpause: String,
    pub duplicate_word: String,
    pub video_error: String,
    pub entry_placeholder: String,
    pub submit_label: String,
}

impl Default for NoticeText {
    fn default() -> Self {
        Self {
            instruction: "Enter one word at a time, using as many words as would be helpful...".to_string(),
            pause_hint: "Click anywhere on the video to pause and make an entry.".to_string(),
            too_early: "Please wait slightly longer before pausing again.".to_string(),
            cannot_unpause: "You cannot unpause until you submit your list of words.".to_string(),
            duplicate_word: "You cannot add a word already in the list.".to_string(),
            video_error: "Error: Could not load video. Please inform the experimenter.".to_string(),
            entry_placeholder: "e.g. 'happy', 'trustworthy'".to_string(),
            submit_label: "Submit Word List".to_string(),
        }
    }
}

impl PlayerConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: PlayerConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| AnnotatorError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&raw)
    }

    pub fn validate(&self) -> Result<()> {
        let intervals = [
            ("min_pause_interval_seconds", self.min_pause_interval_seconds),
            ("too_early_resume_delay_seconds", self.too_early_resume_delay_seconds),
            ("error_grace_period_seconds", self.error_grace_period_seconds),
        ];
        for (field, value) in intervals {
            if !value.is_finite() || value < 0.0 {
                return Err(AnnotatorError::InvalidInterval { field, value });
            }
        }
        Ok(())
    }

    pub fn interaction_mode(&self) -> InteractionMode {
        InteractionMode::from_native_controls(self.show_native_controls)
    }

    pub fn too_early_resume_delay(&self) -> Duration {
        secs(self.too_early_resume_delay_seconds)
    }

    pub fn error_grace_period(&self) -> Duration {
        secs(self.error_grace_period_seconds)
    }
}
