//! IPv4 address entry driven by gesture events
//!
//! While a gesture is in progress the symbol it would produce is previewed
//! in brackets after the text. When the gesture finishes the symbol is
//! validated and applied:
//! - Digits append, and a third digit closes the block automatically
//! - A separator closes a block, or completes the address after four blocks
//! - Delete removes the last character, or a separator together with the
//!   digit before it

use tracing::{debug, info};

use crate::feedback::{Cue, Feedback, COMPLETION_CUES};
use crate::input::{GestureEvent, GestureEventType};
use crate::keymap::Symbol;

/// Default text shown above the address
pub const DEFAULT_PROMPT: &str = "SharingServer IP:\n";

const SEPARATOR: char = '.';
const MAX_BLOCKS: usize = 4;
const BLOCK_DIGITS: usize = 3;

/// What a gesture event did to the entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryOutcome {
    /// Pending symbol shown
    Previewed(Symbol),
    /// Symbol not allowed at this point; text unchanged
    Rejected(Symbol),
    /// Symbol applied to the text
    Applied(Symbol),
    /// Address finished
    Completed(String),
}

/// Validating editor for an IPv4 address typed one symbol at a time
#[derive(Debug, Clone)]
pub struct IpEntry {
    prompt: String,
    buffer: String,
    reset_on_complete: bool,
}

impl Default for IpEntry {
    fn default() -> Self {
        Self {
            prompt: DEFAULT_PROMPT.to_string(),
            buffer: String::new(),
            reset_on_complete: true,
        }
    }
}

impl IpEntry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    /// Keep the finished address on screen instead of starting over
    pub fn with_reset_on_complete(mut self, reset: bool) -> Self {
        self.reset_on_complete = reset;
        self
    }

    /// Address typed so far
    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    /// Start a new address
    pub fn reset(&mut self) {
        self.buffer.clear();
    }

    /// Text currently displayed, without any pending symbol
    pub fn rendered(&self) -> String {
        format!("{}{}", self.prompt, self.buffer)
    }

    pub fn handle(&mut self, event: &GestureEvent, feedback: &mut dyn Feedback) -> EntryOutcome {
        let symbol = Symbol::from_pattern(&event.pattern);
        match event.kind {
            GestureEventType::Detecting => self.preview(event, symbol, feedback),
            GestureEventType::Detected => self.commit(symbol, feedback),
        }
    }

    fn preview(
        &self,
        event: &GestureEvent,
        symbol: Symbol,
        feedback: &mut dyn Feedback,
    ) -> EntryOutcome {
        if !is_valid_input(&self.buffer, symbol) {
            feedback.render(&self.rendered());
            return EntryOutcome::Rejected(symbol);
        }

        feedback.render(&format!("{}[{}]", self.rendered(), symbol.glyph()));
        if let Some(cue) = Cue::for_direction(event.direction) {
            feedback.play_cue(cue);
        }
        EntryOutcome::Previewed(symbol)
    }

    /// Validate and apply a finished symbol
    pub fn commit(&mut self, symbol: Symbol, feedback: &mut dyn Feedback) -> EntryOutcome {
        if !is_valid_input(&self.buffer, symbol) {
            debug!(%symbol, buffer = %self.buffer, "Rejected gesture input");
            feedback.render(&self.rendered());
            return EntryOutcome::Rejected(symbol);
        }

        let mut outcome = EntryOutcome::Applied(symbol);
        match symbol {
            Symbol::Delete => self.delete(),
            Symbol::Separator => {
                if self.block_count() == MAX_BLOCKS {
                    outcome = self.complete(feedback);
                } else {
                    self.buffer.push(SEPARATOR);
                }
            }
            Symbol::Digit(_) => {
                self.buffer.extend(symbol.as_char());
                if self.editing_block().len() == BLOCK_DIGITS {
                    if self.block_count() < MAX_BLOCKS {
                        self.buffer.push(SEPARATOR);
                    } else {
                        outcome = self.complete(feedback);
                    }
                }
            }
            Symbol::Invalid => {}
        }

        feedback.render(&self.rendered());
        outcome
    }

    fn delete(&mut self) {
        if self.buffer.ends_with(SEPARATOR) && self.buffer.len() > 1 {
            self.buffer.truncate(self.buffer.len() - 2);
        } else {
            self.buffer.pop();
        }
    }

    fn complete(&mut self, feedback: &mut dyn Feedback) -> EntryOutcome {
        let address = self.buffer.clone();
        info!(%address, "IP address entry completed");
        feedback.input_completed(&address);
        for cue in COMPLETION_CUES {
            feedback.play_cue(cue);
        }
        if self.reset_on_complete {
            self.buffer.clear();
        }
        EntryOutcome::Completed(address)
    }

    fn block_count(&self) -> usize {
        self.buffer.split(SEPARATOR).count()
    }

    fn editing_block(&self) -> &str {
        editing_block(&self.buffer)
    }
}

fn editing_block(buffer: &str) -> &str {
    buffer.rsplit(SEPARATOR).next().unwrap_or_default()
}

/// Whether `symbol` may be applied to `buffer`
pub fn is_valid_input(buffer: &str, symbol: Symbol) -> bool {
    let block = editing_block(buffer);
    match symbol {
        Symbol::Invalid => false,
        Symbol::Delete => !buffer.is_empty(),
        Symbol::Separator => !block.is_empty(),
        Symbol::Digit(d) => {
            d <= 9
                && format!("{block}{d}")
                    .parse::<u32>()
                    .is_ok_and(|value| value <= 255)
        }
    }
}
