use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, Instrument};
use uuid::Uuid;

use super::annotation::{TrialResult, VideoRef};
use super::effect::{MediaCommand, SideEffect};
use super::event::Event;
use super::machine::TrialMachine;
use super::view::View;
use crate::config::{NoticeText, PlayerConfig};
use crate::error::{AnnotatorError, Result};

const EVENT_BUFFER: usize = 100;

pub type EventSender = mpsc::Sender<Event>;

/// The host-provided mount point. Owns the real video element and markup.
pub trait Surface: Send + 'static {
    /// Redraw from a fresh projection. Called whenever trial state changed.
    fn render(&mut self, view: &View);

    fn command(&mut self, command: MediaCommand);

    fn clear_entry(&mut self) {}
}

/// Host side of a running trial.
pub struct TrialHandle {
    trial_id: Uuid,
    events: EventSender,
    result: oneshot::Receiver<TrialResult>,
    cancel: CancellationToken,
}

impl TrialHandle {
    pub fn trial_id(&self) -> Uuid {
        self.trial_id
    }

    /// Channel for forwarding media and participant events into the trial.
    pub fn sender(&self) -> EventSender {
        self.events.clone()
    }

    /// Tears the trial down. The result resolves promptly with the aborted outcome.
    pub fn abort(&self) {
        self.cancel.cancel();
    }

    /// Resolves once with the trial's result.
    pub async fn wait(self) -> Result<TrialResult> {
        self.result.await.map_err(|_| AnnotatorError::TrialDropped)
    }
}

/// Renders into `surface`, starts playback of `video` and returns the handle
/// the host awaits. Must be called from within a tokio runtime.
pub fn start<S: Surface>(surface: S, video: VideoRef, config: PlayerConfig) -> Result<TrialHandle> {
    config.validate()?;

    let (tx, rx) = mpsc::channel(EVENT_BUFFER);
    let (result_tx, result_rx) = oneshot::channel();
    let cancel = CancellationToken::new();
    let trial_id = Uuid::new_v4();

    let reactor = Reactor::new(rx, tx.clone(), surface, video, config, result_tx, cancel.clone());
    let span = tracing::info_span!("trial", id = %trial_id);
    tokio::spawn(reactor.run().instrument(span));

    Ok(TrialHandle {
        trial_id,
        events: tx,
        result: result_rx,
        cancel,
    })
}

/// Async driver around a `TrialMachine`. Feeds events in one at a time,
/// re-renders after state changes and executes side effects.
pub struct Reactor<S: Surface> {
    receiver: mpsc::Receiver<Event>,
    // Timers post back through this
    tx_clone: mpsc::Sender<Event>,
    machine: TrialMachine,
    surface: S,
    text: NoticeText,
    timers: Vec<JoinHandle<()>>,
    completion: Option<oneshot::Sender<TrialResult>>,
    cancel: CancellationToken,
}

impl<S: Surface> Reactor<S> {
    pub fn new(
        receiver: mpsc::Receiver<Event>,
        tx: mpsc::Sender<Event>,
        surface: S,
        video: VideoRef,
        config: PlayerConfig,
        completion: oneshot::Sender<TrialResult>,
        cancel: CancellationToken,
    ) -> Self {
        Self {
            receiver,
            tx_clone: tx,
            machine: TrialMachine::new(video, &config),
            surface,
            text: config.text,
            timers: Vec::new(),
            completion: Some(completion),
            cancel,
        }
    }

    pub async fn run(mut self) {
        let effects = self.machine.start();
        self.render();
        self.execute(effects);

        loop {
            let Some(completion) = self.completion.as_mut() else {
                break;
            };

            tokio::select! {
                _ = self.cancel.cancelled() => {
                    self.dispatch(Event::Abort);
                }
                _ = completion.closed() => {
                    debug!("Host dropped the trial handle");
                    self.dispatch(Event::Abort);
                }
                // tx_clone keeps the channel open, so recv never yields None here
                Some(event) = self.receiver.recv() => self.dispatch(event),
            }
        }

        self.cancel_timers();
        info!("Trial reactor stopped");
    }

    /// One kernel step: reduce, re-render if anything changed, then act.
    pub fn dispatch(&mut self, event: Event) {
        let version = self.machine.state().version;
        let effects = self.machine.step(event);
        if self.machine.state().version != version {
            self.render();
        }
        self.execute(effects);
    }

    fn render(&mut self) {
        let view = View::project(self.machine.state(), self.machine.mode(), &self.text);
        self.surface.render(&view);
    }

    fn execute(&mut self, effects: Vec<SideEffect>) {
        for effect in effects {
            match effect {
                SideEffect::Media(command) => {
                    debug!(?command, "Media command");
                    self.surface.command(command);
                }
                SideEffect::ClearEntry => self.surface.clear_entry(),
                SideEffect::Schedule { timer, after } => {
                    self.timers.retain(|handle| !handle.is_finished());
                    let tx = self.tx_clone.clone();
                    self.timers.push(tokio::spawn(async move {
                        tokio::time::sleep(after).await;
                        let _ = tx.send(Event::TimerFired(timer)).await;
                    }));
                }
                SideEffect::CancelTimers => self.cancel_timers(),
                SideEffect::Complete(result) => {
                    if let Some(completion) = self.completion.take() {
                        if completion.send(result).is_err() {
                            debug!("Result dropped, host no longer listening");
                        }
                    }
                }
            }
        }
    }

    fn cancel_timers(&mut self) {
        for timer in self.timers.drain(..) {
            timer.abort();
        }
    }

    pub fn machine(&self) -> &TrialMachine {
        &self.machine
    }
}
