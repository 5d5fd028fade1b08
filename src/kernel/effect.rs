use std::time::Duration;

use super::annotation::{TrialResult, VideoRef};

/// Commands for the host's video element.
#[derive(Debug, Clone, PartialEq)]
pub enum MediaCommand {
    Load(VideoRef),
    Play,
    Pause,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimerKind {
    TooEarlyResume,
    ErrorGrace,
}

/// A timer identity. The generation lets the kernel ignore fires from timers it has superseded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Timer {
    pub kind: TimerKind,
    pub generation: u64,
}

/// Work the kernel asks its driver to perform. The kernel never performs I/O itself.
#[derive(Debug, Clone, PartialEq)]
pub enum SideEffect {
    Media(MediaCommand),
    Schedule { timer: Timer, after: Duration },
    CancelTimers,
    /// Reset the word entry field after a word is staged.
    ClearEntry,
    Complete(TrialResult),
}
