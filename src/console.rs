//! Line commands for driving a trial from a terminal.
//!
//! ```text
//! pause 3.0     media paused at 3.0s
//! play          media started playing
//! click         click on the video
//! add calm      stage a word
//! remove calm   unstage a word
//! submit 3.0    submit the batch at 3.0s
//! end           media reached its end
//! error         media failed to load
//! abort         tear the trial down
//! ```

use crate::error::{AnnotatorError, Result};
use crate::kernel::event::Event;

/// Parses one console line. Blank lines yield `Ok(None)`.
pub fn parse_command(line: &str) -> Result<Option<Event>> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }

    let (verb, rest) = match line.split_once(char::is_whitespace) {
        Some((verb, rest)) => (verb, rest.trim()),
        None => (line, ""),
    };

    let event = match verb.to_ascii_lowercase().as_str() {
        "pause" => Event::paused_at(parse_position(rest)?),
        "play" => Event::played(),
        "click" => Event::click(),
        "add" => Event::add(rest),
        "remove" => Event::remove(rest),
        "submit" => Event::submit_at(parse_position(rest)?),
        "end" => Event::ended(),
        "error" => {
            let message = if rest.is_empty() { "media error" } else { rest };
            Event::media_error(message)
        }
        "abort" => Event::Abort,
        _ => return Err(AnnotatorError::UnknownCommand(line.to_string())),
    };

    Ok(Some(event))
}

fn parse_position(raw: &str) -> Result<f64> {
    raw.parse::<f64>()
        .ok()
        .filter(|seconds| seconds.is_finite())
        .ok_or_else(|| AnnotatorError::InvalidPosition(raw.to_string()))
}
