use serde::Serialize;

use super::capability::InteractionMode;
use super::state::{Notice, PlayerState, TrialState};
use crate::config::NoticeText;

/// What the surface should show. A pure projection of trial state: the same
/// state always projects to the same view.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct View {
    pub instruction: String,
    pub video_visible: bool,
    pub native_controls: bool,
    pub entry_enabled: bool,
    pub entry_placeholder: String,
    pub add_enabled: bool,
    pub submit_enabled: bool,
    pub submit_label: String,
    pub pending: Vec<PendingEntry>,
    pub notices: Vec<NoticeLine>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PendingEntry {
    pub word: String,
    pub removable: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NoticeLine {
    pub notice: Notice,
    pub text: String,
    pub is_error: bool,
}

impl View {
    pub fn project(state: &TrialState, mode: InteractionMode, text: &NoticeText) -> Self {
        let editable = state.player() == PlayerState::PausedEditable;

        let pending = state
            .pending()
            .words()
            .iter()
            .map(|word| PendingEntry {
                word: word.clone(),
                removable: editable,
            })
            .collect();

        let notices = state
            .notices()
            .iter()
            .map(|notice| NoticeLine {
                notice: *notice,
                text: notice_text(*notice, text).to_string(),
                is_error: *notice != Notice::PauseHint,
            })
            .collect();

        Self {
            instruction: text.instruction.clone(),
            video_visible: state.player() != PlayerState::Errored,
            native_controls: mode.shows_native_controls(),
            entry_enabled: editable,
            entry_placeholder: text.entry_placeholder.clone(),
            add_enabled: editable,
            submit_enabled: editable && !state.pending().is_empty(),
            submit_label: text.submit_label.clone(),
            pending,
            notices,
        }
    }

    pub fn shows(&self, notice: Notice) -> bool {
        self.notices.iter().any(|line| line.notice == notice)
    }

    pub fn pending_words(&self) -> Vec<&str> {
        self.pending.iter().map(|entry| entry.word.as_str()).collect()
    }
}

fn notice_text(notice: Notice, text: &NoticeText) -> &str {
    match notice {
        Notice::PauseHint => &text.pause_hint,
        Notice::TooEarly => &text.too_early,
        Notice::CannotUnpause => &text.cannot_unpause,
        Notice::DuplicateWord => &text.duplicate_word,
        Notice::VideoError => &text.video_error,
    }
}
