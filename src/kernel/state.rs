use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use super::annotation::{AnnotationLog, VideoRef};
use super::pending::PendingWords;
use super::time::Position;

/// Lifecycle of one trial.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerState {
    Playing,
    /// Paused inside the minimum interval. Entry stays locked until the forced resume.
    PausedTooEarly,
    /// Accepted pause. Words may be staged; playback is held until submit.
    PausedEditable,
    Ended,
    /// Media failed. Waiting out the grace period before resolving.
    Errored,
    Aborted,
}

impl PlayerState {
    pub fn is_terminal(&self) -> bool {
        matches!(self, PlayerState::Ended | PlayerState::Errored | PlayerState::Aborted)
    }
}

impl Default for PlayerState {
    fn default() -> Self {
        Self::Playing
    }
}

/// Inline notices the component can display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Notice {
    PauseHint,
    TooEarly,
    CannotUnpause,
    DuplicateWord,
    VideoError,
}

/// Strict state delta. This is the ONLY way trial state mutates.
#[derive(Debug, Clone, PartialEq)]
pub enum StateDelta {
    Transition(PlayerState),
    ShowNotice(Notice),
    HideNotice(Notice),
    ClearNotices,
    WordStaged(String),
    WordRemoved(String),
    BatchCommitted { timestamp: Position },
    TimerArmed,
    /// Drops both staged and committed words.
    Discarded,
    Resolved,
}

/// Everything one trial owns. Created per trial, dropped when it resolves.
#[derive(Debug, Clone)]
pub struct TrialState {
    video: VideoRef,
    player: PlayerState,
    pending: PendingWords,
    log: AnnotationLog,
    notices: BTreeSet<Notice>,
    // None until the first batch is submitted; any pause is accepted before that
    last_accepted_pause: Option<f64>,
    timer_generation: u64,
    resolved: bool,
    // Monotonic version, bumped on every reduction; drivers re-render when it moves
    pub version: u64,
}

impl TrialState {
    pub fn new(video: VideoRef) -> Self {
        let mut notices = BTreeSet::new();
        notices.insert(Notice::PauseHint);
        Self {
            video,
            player: PlayerState::Playing,
            pending: PendingWords::new(),
            log: AnnotationLog::new(),
            notices,
            last_accepted_pause: None,
            timer_generation: 0,
            resolved: false,
            version: 0,
        }
    }

    /// Pure reduction: State + Delta -> Mutated State
    pub fn reduce(&mut self, delta: StateDelta) {
        self.version += 1;

        match delta {
            StateDelta::Transition(next) => {
                self.player = next;
            }
            StateDelta::ShowNotice(notice) => {
                self.notices.insert(notice);
            }
            StateDelta::HideNotice(notice) => {
                self.notices.remove(&notice);
            }
            StateDelta::ClearNotices => {
                self.notices.clear();
            }
            StateDelta::WordStaged(word) => {
                self.pending.push(word);
            }
            StateDelta::WordRemoved(word) => {
                self.pending.remove(&word);
            }
            StateDelta::BatchCommitted { timestamp } => {
                let words = self.pending.take();
                self.log.commit_batch(words, timestamp);
                self.last_accepted_pause = Some(timestamp.seconds());
            }
            StateDelta::TimerArmed => {
                self.timer_generation += 1;
            }
            StateDelta::Discarded => {
                self.pending.clear();
                self.log.clear();
            }
            StateDelta::Resolved => {
                self.resolved = true;
            }
        }
    }

    pub fn video(&self) -> &VideoRef {
        &self.video
    }

    pub fn player(&self) -> PlayerState {
        self.player
    }

    pub fn pending(&self) -> &PendingWords {
        &self.pending
    }

    pub fn log(&self) -> &AnnotationLog {
        &self.log
    }

    pub fn notices(&self) -> &BTreeSet<Notice> {
        &self.notices
    }

    pub fn shows(&self, notice: Notice) -> bool {
        self.notices.contains(&notice)
    }

    /// Position of the last submitted batch, the reference point for pacing.
    pub fn last_accepted_pause(&self) -> Option<f64> {
        self.last_accepted_pause
    }

    pub fn timer_generation(&self) -> u64 {
        self.timer_generation
    }

    pub fn is_resolved(&self) -> bool {
        self.resolved
    }
}
