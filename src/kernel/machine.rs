use std::time::Duration;
use tracing::{debug, info, warn};

use super::annotation::{TrialOutcome, TrialResult, VideoRef};
use super::capability::InteractionMode;
use super::effect::{MediaCommand, SideEffect, Timer, TimerKind};
use super::event::{Event, MediaEvent, UserAction};
use super::pending::WordRejection;
use super::state::{Notice, PlayerState, StateDelta, TrialState};
use super::telemetry::event::TelemetryEvent;
use super::telemetry::recorder::TelemetryRecorder;
use super::time::Position;
use crate::config::PlayerConfig;

/// Timing rules lifted out of the config once at construction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pacing {
    pub min_pause_interval: f64,
    pub too_early_resume_delay: Duration,
    pub error_grace_period: Duration,
}

impl From<&PlayerConfig> for Pacing {
    fn from(config: &PlayerConfig) -> Self {
        Self {
            min_pause_interval: config.min_pause_interval_seconds,
            too_early_resume_delay: config.too_early_resume_delay(),
            error_grace_period: config.error_grace_period(),
        }
    }
}

/// The paced annotation state machine.
///
/// `step` is the only entry point: it takes one event, reduces the trial state
/// and returns the side effects the driver must carry out. It never awaits,
/// never touches a clock and never renders, so every rule here can be
/// exercised without a UI.
pub struct TrialMachine {
    state: TrialState,
    mode: InteractionMode,
    pacing: Pacing,
    pub telemetry: TelemetryRecorder,
}

impl TrialMachine {
    pub fn new(video: VideoRef, config: &PlayerConfig) -> Self {
        let pacing = Pacing::from(config);
        Self {
            state: TrialState::new(video),
            mode: config.interaction_mode(),
            pacing,
            telemetry: TelemetryRecorder::new(),
        }
    }

    /// Effects that put the media into its initial `Playing` state.
    pub fn start(&self) -> Vec<SideEffect> {
        info!(video = %self.state.video(), mode = ?self.mode, "Trial started");
        vec![
            SideEffect::Media(MediaCommand::Load(self.state.video().clone())),
            SideEffect::Media(MediaCommand::Play),
        ]
    }

    pub fn state(&self) -> &TrialState {
        &self.state
    }

    pub fn mode(&self) -> InteractionMode {
        self.mode
    }

    pub fn pacing(&self) -> Pacing {
        self.pacing
    }

    /// (Current State, Event) -> Side Effects
    pub fn step(&mut self, event: Event) -> Vec<SideEffect> {
        let mut effects = Vec::new();

        // Resolution is final: nothing mutates after the result is out
        if self.state.is_resolved() {
            debug!(?event, "Ignoring event after resolution");
            return effects;
        }

        match event {
            Event::Abort => self.abort(&mut effects),
            Event::TimerFired(timer) => self.on_timer(timer, &mut effects),
            Event::Media(MediaEvent::Error { message }) => self.on_media_error(&message, &mut effects),
            Event::Media(MediaEvent::Ended) => self.on_ended(&mut effects),
            other => match self.state.player() {
                PlayerState::Playing => self.on_playing(other, &mut effects),
                PlayerState::PausedTooEarly => self.on_too_early(other),
                PlayerState::PausedEditable => self.on_editable(other, &mut effects),
                PlayerState::Ended | PlayerState::Errored | PlayerState::Aborted => {
                    debug!(?other, "Ignoring event in terminal state");
                }
            },
        }

        effects
    }

    fn on_playing(&mut self, event: Event, effects: &mut Vec<SideEffect>) {
        match event {
            Event::Media(MediaEvent::Played) => self.reset_play_notices(),
            Event::Media(MediaEvent::Paused { ended: true, .. }) => {
                // The end event follows; nothing to pace
            }
            Event::Media(MediaEvent::Paused { position, .. }) => self.on_pause(position, effects),
            Event::User(UserAction::ClickVideo) => {
                if self.mode.intercepts_clicks() {
                    effects.push(SideEffect::Media(MediaCommand::Pause));
                }
            }
            other => debug!(?other, "Entry is locked while playing"),
        }
    }

    fn on_pause(&mut self, position: Position, effects: &mut Vec<SideEffect>) {
        // The first pause is always accepted, whatever the interval
        let elapsed = self.state.last_accepted_pause().map(|mark| position.since(mark));

        if let Some(elapsed) = elapsed.filter(|elapsed| *elapsed <= self.pacing.min_pause_interval) {
            info!(position = position.seconds(), elapsed, "Pause too early, forcing resume");
            self.telemetry.record(TelemetryEvent::PauseRejected {
                position: position.seconds(),
                elapsed,
            });
            self.state.reduce(StateDelta::Transition(PlayerState::PausedTooEarly));
            self.state.reduce(StateDelta::ShowNotice(Notice::TooEarly));
            let timer = self.arm(TimerKind::TooEarlyResume);
            effects.push(SideEffect::Schedule {
                timer,
                after: self.pacing.too_early_resume_delay,
            });
        } else {
            info!(position = position.seconds(), ?elapsed, "Pause accepted");
            self.telemetry.record(TelemetryEvent::PauseAccepted {
                position: position.seconds(),
                elapsed,
            });
            self.state.reduce(StateDelta::Transition(PlayerState::PausedEditable));
            self.state.reduce(StateDelta::HideNotice(Notice::PauseHint));
            self.state.reduce(StateDelta::HideNotice(Notice::TooEarly));
            self.state.reduce(StateDelta::ShowNotice(Notice::CannotUnpause));
        }
    }

    fn on_too_early(&mut self, event: Event) {
        match event {
            // Native controls can restart playback before the forced resume lands.
            // The pending timer then finds the state moved on and does nothing.
            Event::Media(MediaEvent::Played) => {
                self.state.reduce(StateDelta::Transition(PlayerState::Playing));
                self.reset_play_notices();
            }
            other => debug!(?other, "Ignoring event while waiting to auto-resume"),
        }
    }

    fn on_editable(&mut self, event: Event, effects: &mut Vec<SideEffect>) {
        match event {
            Event::Media(MediaEvent::Played) => {
                // Resume is blocked unconditionally until the batch is submitted
                warn!("Playback resumed before submit, pausing again");
                self.block_unpause();
                effects.push(SideEffect::Media(MediaCommand::Pause));
            }
            Event::Media(MediaEvent::Paused { .. }) => {}
            Event::User(UserAction::ClickVideo) => {
                if self.mode.intercepts_clicks() {
                    self.block_unpause();
                }
            }
            Event::User(UserAction::AddWord(raw)) => self.add_word(&raw, effects),
            Event::User(UserAction::RemoveWord(word)) => {
                if self.state.pending().contains(&word) {
                    self.state.reduce(StateDelta::WordRemoved(word));
                    self.telemetry.record(TelemetryEvent::WordRemoved);
                }
            }
            Event::User(UserAction::Submit { position }) => self.submit(position, effects),
            other => debug!(?other, "Unhandled event while editable"),
        }
    }

    fn add_word(&mut self, raw: &str, effects: &mut Vec<SideEffect>) {
        match self.state.pending().check(raw) {
            Ok(word) => {
                debug!(staged = self.state.pending().len() + 1, "Word staged");
                self.state.reduce(StateDelta::HideNotice(Notice::DuplicateWord));
                self.state.reduce(StateDelta::WordStaged(word));
                self.telemetry.record(TelemetryEvent::WordStaged);
                effects.push(SideEffect::ClearEntry);
            }
            Err(reason) => {
                debug!(?reason, "Word rejected");
                if reason == WordRejection::Duplicate {
                    self.state.reduce(StateDelta::ShowNotice(Notice::DuplicateWord));
                }
                self.telemetry.record(TelemetryEvent::WordRejected { reason });
            }
        }
    }

    fn submit(&mut self, position: Position, effects: &mut Vec<SideEffect>) {
        if self.state.pending().is_empty() {
            debug!("Submit with no pending words ignored");
            self.telemetry.record(TelemetryEvent::EmptySubmitRejected);
            return;
        }

        let words = self.state.pending().len();
        info!(words, timestamp = position.seconds(), "Batch submitted");
        self.telemetry.record(TelemetryEvent::BatchSubmitted {
            words,
            timestamp: position.seconds(),
        });

        self.state.reduce(StateDelta::BatchCommitted { timestamp: position });
        self.state.reduce(StateDelta::HideNotice(Notice::DuplicateWord));
        self.state.reduce(StateDelta::Transition(PlayerState::Playing));
        self.reset_play_notices();
        effects.push(SideEffect::Media(MediaCommand::Play));
    }

    fn on_timer(&mut self, timer: Timer, effects: &mut Vec<SideEffect>) {
        if timer.generation != self.state.timer_generation() {
            debug!(?timer, "Stale timer");
            return;
        }

        match (timer.kind, self.state.player()) {
            (TimerKind::TooEarlyResume, PlayerState::PausedTooEarly) => {
                debug!("Auto-resuming after early pause");
                self.telemetry.record(TelemetryEvent::AutoResumed);
                self.state.reduce(StateDelta::Transition(PlayerState::Playing));
                self.state.reduce(StateDelta::HideNotice(Notice::TooEarly));
                effects.push(SideEffect::Media(MediaCommand::Play));
            }
            (TimerKind::ErrorGrace, PlayerState::Errored) => {
                let result = TrialResult::media_error(self.state.video().clone());
                self.resolve(result, effects);
            }
            (kind, player) => debug!(?kind, ?player, "Timer no longer applies"),
        }
    }

    fn on_ended(&mut self, effects: &mut Vec<SideEffect>) {
        if self.state.player().is_terminal() {
            return;
        }
        if !self.state.pending().is_empty() {
            warn!(dropped = self.state.pending().len(), "Video ended with unsubmitted words");
        }
        self.state.reduce(StateDelta::Transition(PlayerState::Ended));
        let result = TrialResult::completed(self.state.video().clone(), self.state.log());
        self.resolve(result, effects);
    }

    fn on_media_error(&mut self, message: &str, effects: &mut Vec<SideEffect>) {
        if self.state.player().is_terminal() {
            return;
        }
        warn!(video = %self.state.video(), error = message, "Media failed to load or play");

        let discarded = self.state.log().len() + self.state.pending().len();
        self.telemetry.record(TelemetryEvent::MediaFailed { discarded });

        self.state.reduce(StateDelta::Transition(PlayerState::Errored));
        self.state.reduce(StateDelta::Discarded);
        self.state.reduce(StateDelta::ClearNotices);
        self.state.reduce(StateDelta::ShowNotice(Notice::VideoError));

        let timer = self.arm(TimerKind::ErrorGrace);
        effects.push(SideEffect::Schedule {
            timer,
            after: self.pacing.error_grace_period,
        });
    }

    fn abort(&mut self, effects: &mut Vec<SideEffect>) {
        info!(committed = self.state.log().len(), "Trial aborted by host");
        self.state.reduce(StateDelta::Transition(PlayerState::Aborted));
        effects.push(SideEffect::CancelTimers);
        let result = TrialResult::aborted(self.state.video().clone(), self.state.log());
        self.resolve(result, effects);
    }

    fn resolve(&mut self, result: TrialResult, effects: &mut Vec<SideEffect>) {
        info!(outcome = ?result.outcome, annotations = result.descriptors.len(), "Trial resolved");
        self.telemetry.record(TelemetryEvent::TrialResolved {
            outcome: result.outcome,
            annotations: result.descriptors.len(),
        });
        self.state.reduce(StateDelta::Resolved);
        effects.push(SideEffect::Complete(result));
    }

    fn arm(&mut self, kind: TimerKind) -> Timer {
        self.state.reduce(StateDelta::TimerArmed);
        Timer {
            kind,
            generation: self.state.timer_generation(),
        }
    }

    fn block_unpause(&mut self) {
        self.telemetry.record(TelemetryEvent::UnpauseBlocked);
        self.state.reduce(StateDelta::ShowNotice(Notice::CannotUnpause));
    }

    fn reset_play_notices(&mut self) {
        self.state.reduce(StateDelta::ShowNotice(Notice::PauseHint));
        self.state.reduce(StateDelta::HideNotice(Notice::CannotUnpause));
        self.state.reduce(StateDelta::HideNotice(Notice::TooEarly));
    }
}

/// Outcome shorthand for drivers that only keep the last result around.
pub fn outcome_of(effects: &[SideEffect]) -> Option<TrialOutcome> {
    effects.iter().find_map(|effect| match effect {
        SideEffect::Complete(result) => Some(result.outcome),
        _ => None,
    })
}
