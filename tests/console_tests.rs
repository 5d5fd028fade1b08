use annotator::console::parse_command;
use annotator::{AnnotatorError, Event};

#[test]
fn test_parse_commands() {
    assert_eq!(parse_command("pause 3.5").unwrap(), Some(Event::paused_at(3.5)));
    assert_eq!(parse_command("  submit 3 ").unwrap(), Some(Event::submit_at(3.0)));
    assert_eq!(parse_command("add  very calm").unwrap(), Some(Event::add("very calm")));
    assert_eq!(parse_command("REMOVE calm").unwrap(), Some(Event::remove("calm")));
    assert_eq!(parse_command("play").unwrap(), Some(Event::played()));
    assert_eq!(parse_command("click").unwrap(), Some(Event::click()));
    assert_eq!(parse_command("end").unwrap(), Some(Event::ended()));
    assert_eq!(parse_command("error").unwrap(), Some(Event::media_error("media error")));
    assert_eq!(parse_command("abort").unwrap(), Some(Event::Abort));
    assert_eq!(parse_command("   ").unwrap(), None);
}

#[test]
fn test_parse_rejects_bad_input() {
    assert!(matches!(parse_command("rewind"), Err(AnnotatorError::UnknownCommand(_))));
    assert!(matches!(parse_command("pause soon"), Err(AnnotatorError::InvalidPosition(_))));
    assert!(matches!(parse_command("submit"), Err(AnnotatorError::InvalidPosition(_))));
    assert!(matches!(parse_command("pause NaN"), Err(AnnotatorError::InvalidPosition(_))));
}
