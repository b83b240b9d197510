//! Terminal feedback: prints renders, cues and completed addresses

use std::io::Write;

use gesture_oui::{Cue, Feedback};
use tracing::warn;

/// Writes every feedback request as a line of text
pub struct ConsoleFeedback<W: Write> {
    out: W,
    cue_volume: f32,
    completed: Vec<String>,
}

impl<W: Write> ConsoleFeedback<W> {
    pub fn new(out: W, cue_volume: f32) -> Self {
        Self {
            out,
            cue_volume,
            completed: Vec::new(),
        }
    }

    /// Addresses completed so far
    pub fn completed(&self) -> &[String] {
        &self.completed
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn emit(&mut self, line: &str) {
        if let Err(e) = writeln!(self.out, "{}", line) {
            warn!("Failed to write feedback: {}", e);
        }
    }
}

impl<W: Write> Feedback for ConsoleFeedback<W> {
    fn render(&mut self, text: &str) {
        self.emit(&format!("> {}", text.replace('\n', " ")));
    }

    fn play_cue(&mut self, cue: Cue) {
        self.emit(&format!("cue: {} @ {:.2}", cue.as_str(), self.cue_volume));
    }

    fn input_completed(&mut self, address: &str) {
        self.completed.push(address.to_string());
        self.emit(&format!("completed: {}", address));
    }
}
