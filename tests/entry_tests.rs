use annotator::kernel::effect::{MediaCommand, SideEffect};
use annotator::kernel::event::Event;
use annotator::kernel::machine::TrialMachine;
use annotator::kernel::pending::{PendingWords, WordRejection};
use annotator::kernel::state::{Notice, PlayerState};
use annotator::kernel::telemetry::event::TelemetryEvent;
use annotator::{Annotation, PlayerConfig, VideoRef};

fn editable() -> TrialMachine {
    let mut m = TrialMachine::new(VideoRef::new("clip.mp4"), &PlayerConfig::default());
    m.step(Event::paused_at(3.0));
    assert_eq!(m.state().player(), PlayerState::PausedEditable);
    m
}

fn pending(m: &TrialMachine) -> Vec<&str> {
    m.state().pending().words().iter().map(String::as_str).collect()
}

#[test]
fn test_pending_words_keep_insertion_order() {
    let mut words = PendingWords::new();
    words.stage("warm").unwrap();
    words.stage("direct").unwrap();
    words.stage("tired").unwrap();
    assert!(words.remove("direct"));
    words.stage("calm").unwrap();

    assert_eq!(words.words(), &["warm", "tired", "calm"]);
    assert!(!words.remove("direct"), "Already removed");
}

#[test]
fn test_pending_words_trim_and_reject() {
    let mut words = PendingWords::new();
    assert_eq!(words.stage("   "), Err(WordRejection::Empty));
    assert_eq!(words.stage(""), Err(WordRejection::Empty));
    words.stage("  calm ").unwrap();
    assert_eq!(words.stage("calm"), Err(WordRejection::Duplicate));
    // Case-sensitive exact match
    words.stage("Calm").unwrap();
    assert_eq!(words.words(), &["calm", "Calm"]);
}

#[test]
fn test_add_word_clears_entry() {
    let mut m = editable();
    let effects = m.step(Event::add(" calm "));
    assert_eq!(effects, vec![SideEffect::ClearEntry]);
    assert_eq!(pending(&m), vec!["calm"]);
}

#[test]
fn test_duplicate_rejected_with_notice() {
    let mut m = editable();
    m.step(Event::add("calm"));
    m.step(Event::add("direct"));

    let effects = m.step(Event::add("calm"));
    assert!(effects.is_empty(), "Duplicate must not clear the entry");
    assert_eq!(pending(&m), vec!["calm", "direct"]);
    assert!(m.state().shows(Notice::DuplicateWord));

    // Next accepted word hides it again
    m.step(Event::add("warm"));
    assert!(!m.state().shows(Notice::DuplicateWord));
}

#[test]
fn test_empty_word_is_silent_noop() {
    let mut m = editable();
    let version = m.state().version;
    assert!(m.step(Event::add("   ")).is_empty());
    assert_eq!(m.state().version, version);
    assert!(!m.state().shows(Notice::DuplicateWord));
}

#[test]
fn test_remove_then_readd() {
    let mut m = editable();
    m.step(Event::add("calm"));
    m.step(Event::add("direct"));
    m.step(Event::remove("calm"));
    m.step(Event::add("calm"));
    assert_eq!(pending(&m), vec!["direct", "calm"]);

    // Unknown removal leaves the set alone
    m.step(Event::remove("nervous"));
    assert_eq!(pending(&m), vec!["direct", "calm"]);
}

#[test]
fn test_submit_stamps_batch_in_order() {
    let mut m = editable();
    m.step(Event::add("calm"));
    m.step(Event::add("direct"));
    m.step(Event::add("warm"));

    let effects = m.step(Event::submit_at(3.25));
    assert_eq!(effects, vec![SideEffect::Media(MediaCommand::Play)]);
    assert_eq!(m.state().player(), PlayerState::Playing);
    assert!(m.state().pending().is_empty());

    let expected: Vec<Annotation> = ["calm", "direct", "warm"]
        .iter()
        .map(|word| Annotation {
            word: word.to_string(),
            timestamp: 3.25,
        })
        .collect();
    assert_eq!(m.state().log().entries(), expected.as_slice());
}

#[test]
fn test_submit_requires_pending_words() {
    let mut m = editable();
    m.step(Event::add("calm"));
    m.step(Event::remove("calm"));

    assert!(m.step(Event::submit_at(3.0)).is_empty());
    assert_eq!(m.state().player(), PlayerState::PausedEditable, "Still held");
    assert!(m.state().log().is_empty());
    assert!(m.telemetry.events().any(|e| *e == TelemetryEvent::EmptySubmitRejected));
}

#[test]
fn test_batches_never_deduplicated_across_submits() {
    let mut m = editable();
    m.step(Event::add("calm"));
    m.step(Event::submit_at(3.0));

    m.step(Event::paused_at(6.0));
    m.step(Event::add("calm"));
    m.step(Event::submit_at(6.0));

    let words: Vec<(&str, f64)> = m
        .state()
        .log()
        .entries()
        .iter()
        .map(|a| (a.word.as_str(), a.timestamp))
        .collect();
    assert_eq!(words, vec![("calm", 3.0), ("calm", 6.0)]);
}

#[test]
fn test_entry_locked_while_playing() {
    let mut m = TrialMachine::new(VideoRef::new("clip.mp4"), &PlayerConfig::default());
    m.step(Event::add("calm"));
    m.step(Event::submit_at(1.0));
    assert!(m.state().pending().is_empty());
    assert!(m.state().log().is_empty());
}

#[test]
fn test_resume_blocked_until_submit() {
    let mut m = editable();

    // Click while paused
    assert!(m.step(Event::click()).is_empty());
    assert_eq!(m.state().player(), PlayerState::PausedEditable);
    assert!(m.state().shows(Notice::CannotUnpause));

    // Media restarted anyway: pause it again, even with nothing staged
    let effects = m.step(Event::played());
    assert_eq!(effects, vec![SideEffect::Media(MediaCommand::Pause)]);
    assert_eq!(m.state().player(), PlayerState::PausedEditable);

    m.step(Event::add("calm"));
    let effects = m.step(Event::played());
    assert_eq!(effects, vec![SideEffect::Media(MediaCommand::Pause)]);
    assert_eq!(m.telemetry.snapshot().pause_stats.unpause_blocked, 3);
}
