use serde::{Deserialize, Serialize};
use std::fmt;

use super::time::Position;

/// Opaque stimulus reference (URL or identifier). Echoed back unchanged in the result.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VideoRef(String);

impl VideoRef {
    pub fn new(reference: impl Into<String>) -> Self {
        VideoRef(reference.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for VideoRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One committed word, stamped with the playback position of its batch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Annotation {
    pub word: String,
    pub timestamp: f64,
}

/// Append-only log of committed annotations. Insertion order is submission order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AnnotationLog {
    entries: Vec<Annotation>,
}

impl AnnotationLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stamps every word of a batch with the same timestamp, keeping entry order.
    pub fn commit_batch<I>(&mut self, words: I, timestamp: Position) -> usize
    where
        I: IntoIterator<Item = String>,
    {
        let before = self.entries.len();
        self.entries.extend(words.into_iter().map(|word| Annotation {
            word,
            timestamp: timestamp.seconds(),
        }));
        self.entries.len() - before
    }

    pub fn entries(&self) -> &[Annotation] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrialOutcome {
    /// Video played to its natural end.
    Completed,
    /// Media failed to load or decode; descriptors are always empty.
    MediaError,
    /// Host tore the trial down before the video ended.
    Aborted,
}

/// The single value a trial hands back to its host.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrialResult {
    pub video: VideoRef,
    pub descriptors: Vec<Annotation>,
    pub outcome: TrialOutcome,
}

impl TrialResult {
    pub fn completed(video: VideoRef, log: &AnnotationLog) -> Self {
        Self {
            video,
            descriptors: log.entries().to_vec(),
            outcome: TrialOutcome::Completed,
        }
    }

    pub fn media_error(video: VideoRef) -> Self {
        Self {
            video,
            descriptors: Vec::new(),
            outcome: TrialOutcome::MediaError,
        }
    }

    pub fn aborted(video: VideoRef, log: &AnnotationLog) -> Self {
        Self {
            video,
            descriptors: log.entries().to_vec(),
            outcome: TrialOutcome::Aborted,
        }
    }

    pub fn is_degraded(&self) -> bool {
        self.outcome != TrialOutcome::Completed
    }
}
