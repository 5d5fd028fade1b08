use std::fmt::Write as _;
use std::io::Write;

use crate::kernel::effect::MediaCommand;
use crate::kernel::reactor::Surface;
use crate::kernel::view::View;

/// Plain-text rendering of a view, one line per element.
pub fn render_text(view: &View) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "== {}", view.instruction);

    if view.video_visible {
        let controls = if view.native_controls { "native controls" } else { "click to pause" };
        let _ = writeln!(out, "[video: {}]", controls);
    } else {
        let _ = writeln!(out, "[video hidden]");
    }

    for line in &view.notices {
        let marker = if line.is_error { "!" } else { "i" };
        let _ = writeln!(out, "({}) {}", marker, line.text);
    }

    if !view.pending.is_empty() {
        let words: Vec<String> = view
            .pending
            .iter()
            .map(|entry| {
                if entry.removable {
                    format!("{} [x]", entry.word)
                } else {
                    entry.word.clone()
                }
            })
            .collect();
        let _ = writeln!(out, "words: {}", words.join(", "));
    }

    let entry = if view.entry_enabled { "enabled" } else { "disabled" };
    let submit = if view.submit_enabled { "enabled" } else { "disabled" };
    let _ = writeln!(
        out,
        "entry ({}): {} | {}: {}",
        view.entry_placeholder, entry, view.submit_label, submit
    );
    out
}

/// Surface that prints each projected view and media command to a writer.
pub struct TextSurface<W: Write + Send + 'static> {
    out: W,
}

impl TextSurface<std::io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

impl<W: Write + Send + 'static> TextSurface<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write + Send + 'static> Surface for TextSurface<W> {
    fn render(&mut self, view: &View) {
        if let Err(e) = self.out.write_all(render_text(view).as_bytes()) {
            tracing::warn!("Failed to render view: {}", e);
        }
    }

    fn command(&mut self, command: MediaCommand) {
        let line = match command {
            MediaCommand::Load(video) => format!("[MEDIA] load {}\n", video),
            MediaCommand::Play => "[MEDIA] play\n".to_string(),
            MediaCommand::Pause => "[MEDIA] pause\n".to_string(),
        };
        if let Err(e) = self.out.write_all(line.as_bytes()) {
            tracing::warn!("Failed to write media command: {}", e);
        }
    }
}
