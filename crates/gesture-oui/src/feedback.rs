//! Feedback channel for gesture-driven entry
//!
//! The engine never draws or plays sound itself. It hands rendered text,
//! logical audio cues and finished addresses to a [`Feedback`]
//! implementation supplied by the application.

use crate::input::Direction;

/// Logical audio cue, one per swipe direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cue {
    Up,
    Down,
    Left,
    Right,
}

/// Cue signature played when an address is complete
pub const COMPLETION_CUES: [Cue; 4] = [Cue::Up, Cue::Right, Cue::Left, Cue::Down];

impl Cue {
    pub fn for_direction(direction: Direction) -> Option<Self> {
        match direction {
            Direction::Up => Some(Cue::Up),
            Direction::Down => Some(Cue::Down),
            Direction::Left => Some(Cue::Left),
            Direction::Right => Some(Cue::Right),
            Direction::Neutral => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Cue::Up => "up",
            Cue::Down => "down",
            Cue::Left => "left",
            Cue::Right => "right",
        }
    }
}

/// Sink for everything the entry state machine wants the user to see or hear
pub trait Feedback {
    /// Replace the displayed text
    fn render(&mut self, text: &str);

    /// Play a short audio cue
    fn play_cue(&mut self, cue: Cue);

    /// A full address was entered
    fn input_completed(&mut self, address: &str);
}

/// Feedback that discards everything
#[derive(Debug, Default, Clone, Copy)]
pub struct NullFeedback;

impl Feedback for NullFeedback {
    fn render(&mut self, _text: &str) {}
    fn play_cue(&mut self, _cue: Cue) {}
    fn input_completed(&mut self, _address: &str) {}
}

/// Feedback that keeps everything it receives, for tests and replays
#[derive(Debug, Default, Clone, PartialEq)]
pub struct RecordingFeedback {
    pub renders: Vec<String>,
    pub cues: Vec<Cue>,
    pub completed: Vec<String>,
}

impl RecordingFeedback {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last_render(&self) -> Option<&str> {
        self.renders.last().map(String::as_str)
    }

    pub fn clear(&mut self) {
        self.renders.clear();
        self.cues.clear();
        self.completed.clear();
    }
}

impl Feedback for RecordingFeedback {
    fn render(&mut self, text: &str) {
        self.renders.push(text.to_string());
    }

    fn play_cue(&mut self, cue: Cue) {
        self.cues.push(cue);
    }

    fn input_completed(&mut self, address: &str) {
        self.completed.push(address.to_string());
    }
}
