use super::effect::Timer;
use super::time::Position;

/// Everything that can drive a trial forward.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// Signals raised by the video element.
    Media(MediaEvent),
    /// Participant interactions with the component's own controls.
    User(UserAction),
    /// A timer armed by the kernel has elapsed.
    TimerFired(Timer),
    /// Host-driven teardown.
    Abort,
}

#[derive(Debug, Clone, PartialEq)]
pub enum MediaEvent {
    Played,
    /// `ended` is true when the pause was raised because playback reached the end.
    Paused { position: Position, ended: bool },
    Ended,
    Error { message: String },
}

#[derive(Debug, Clone, PartialEq)]
pub enum UserAction {
    /// Click on the video surface. Only meaningful when clicks are intercepted.
    ClickVideo,
    AddWord(String),
    RemoveWord(String),
    /// Submit the pending batch. `position` is the media's current time at the moment of submission.
    Submit { position: Position },
}

// Shorthands for hosts and tests
impl Event {
    pub fn played() -> Self {
        Event::Media(MediaEvent::Played)
    }

    pub fn paused_at(seconds: f64) -> Self {
        Event::Media(MediaEvent::Paused {
            position: Position::new(seconds),
            ended: false,
        })
    }

    pub fn ended() -> Self {
        Event::Media(MediaEvent::Ended)
    }

    pub fn media_error(message: &str) -> Self {
        Event::Media(MediaEvent::Error {
            message: message.to_string(),
        })
    }

    pub fn click() -> Self {
        Event::User(UserAction::ClickVideo)
    }

    pub fn add(word: &str) -> Self {
        Event::User(UserAction::AddWord(word.to_string()))
    }

    pub fn remove(word: &str) -> Self {
        Event::User(UserAction::RemoveWord(word.to_string()))
    }

    pub fn submit_at(seconds: f64) -> Self {
        Event::User(UserAction::Submit {
            position: Position::new(seconds),
        })
    }
}
