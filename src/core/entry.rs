use std::fmt;

use itertools::Itertools;

use super::timestamp::Timestamp;

pub const LINE_ENDING: &str = "\r\n";

/// One subtitle cue.
///
/// The sequence number is kept as the text found in the source and is never
/// renumbered. Message lines are stored without their line endings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    sequence: String,
    start: Timestamp,
    end: Timestamp,
    message: Vec<String>,
}

impl Entry {
    pub fn new(
        sequence: impl Into<String>,
        start: Timestamp,
        end: Timestamp,
        message: Vec<String>,
    ) -> Self {
        Entry {
            sequence: sequence.into(),
            start,
            end,
            message,
        }
    }

    pub fn sequence(&self) -> &str {
        &self.sequence
    }

    pub fn set_sequence(&mut self, sequence: impl Into<String>) {
        self.sequence = sequence.into();
    }

    pub fn start(&self) -> Timestamp {
        self.start
    }

    pub fn set_start(&mut self, start: Timestamp) {
        self.start = start;
    }

    pub fn end(&self) -> Timestamp {
        self.end
    }

    pub fn set_end(&mut self, end: Timestamp) {
        self.end = end;
    }

    pub fn message_lines(&self) -> &[String] {
        &self.message
    }

    /// Message body with lines joined by `\n`
    pub fn message(&self) -> String {
        self.message.join("\n")
    }

    /// Moves both ends of the cue by `delta_millis`, clamping at zero
    pub fn shift(&mut self, delta_millis: i64) {
        self.start = self.start.shift(delta_millis);
        self.end = self.end.shift(delta_millis);
    }

    /// Renders the cue as an SRT block, trailing blank line included
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{seq}{nl}{start} --> {end}{nl}{message}{nl}{nl}",
            seq = self.sequence,
            start = self.start,
            end = self.end,
            message = self.message.iter().join(LINE_ENDING),
            nl = LINE_ENDING,
        )
    }
}
