// this file contains the SRT document model: parsing, bulk shifting and rendering

use std::{fmt, path::Path};

use itertools::Itertools;
use once_cell::sync::Lazy;
use regex::Regex;

use super::{
    data,
    entry::Entry,
    error::Result,
    modify::Offset,
    timestamp::Timestamp,
};

// `start --> end`, timestamps are validated separately so bad ones can be reported
static TIMING_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*(\S+?)\s*-->\s*(\S+)\s*$").unwrap());

const BOM: char = '\u{feff}';

/// An ordered list of subtitle cues, kept in source order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    entries: Vec<Entry>,
}

enum ParseState {
    ExpectSequence,
    ExpectTiming {
        sequence: String,
    },
    Message {
        sequence: String,
        start: Timestamp,
        end: Timestamp,
        lines: Vec<String>,
    },
}

impl Document {
    pub fn new() -> Self {
        Document::default()
    }

    /// Parses SRT text. Never fails: blocks that do not match are skipped.
    pub fn parse(text: &str) -> Self {
        let mut document = Document::new();
        document.parse_into(text);
        document
    }

    /// Parses SRT text and appends the cues found, returning how many were added
    pub fn parse_into(&mut self, text: &str) -> usize {
        let before = self.entries.len();
        let text = text.strip_prefix(BOM).unwrap_or(text);

        let mut state = ParseState::ExpectSequence;
        for (index, line) in text.lines().enumerate() {
            state = self.step(state, line, index + 1);
        }
        match state {
            ParseState::Message {
                sequence,
                start,
                end,
                lines,
            } if !lines.is_empty() => {
                self.entries.push(Entry::new(sequence, start, end, lines));
            }
            ParseState::ExpectSequence => {}
            _ => log::debug!("dropping incomplete cue at end of input"),
        }

        let added = self.entries.len() - before;
        log::debug!("parsed {added} subtitle entries");
        added
    }

    fn step(&mut self, state: ParseState, line: &str, line_number: usize) -> ParseState {
        let blank = line.trim().is_empty();

        match state {
            ParseState::ExpectSequence => {
                if blank {
                    ParseState::ExpectSequence
                } else if is_sequence_number(line) {
                    ParseState::ExpectTiming {
                        sequence: line.trim().to_string(),
                    }
                } else {
                    log::debug!("skipping line {line_number}: {line:?}");
                    ParseState::ExpectSequence
                }
            }
            ParseState::ExpectTiming { sequence } => {
                if blank {
                    return ParseState::ExpectTiming { sequence };
                }
                if let Some(captures) = TIMING_REGEX.captures(line) {
                    let start = Timestamp::parse(&captures[1]);
                    let end = Timestamp::parse(&captures[2]);
                    return match (start, end) {
                        (Ok(start), Ok(end)) => ParseState::Message {
                            sequence,
                            start,
                            end,
                            lines: vec![],
                        },
                        (Err(e), _) | (_, Err(e)) => {
                            log::warn!("skipping cue {sequence} at line {line_number}: {e}");
                            ParseState::ExpectSequence
                        }
                    };
                }
                if is_sequence_number(line) {
                    log::debug!("cue {sequence} has no timing line, restarting at line {line_number}");
                    ParseState::ExpectTiming {
                        sequence: line.trim().to_string(),
                    }
                } else {
                    log::debug!("skipping cue {sequence}: line {line_number} is not a timing line");
                    ParseState::ExpectSequence
                }
            }
            ParseState::Message {
                sequence,
                start,
                end,
                mut lines,
            } => {
                if !blank {
                    lines.push(line.to_string());
                    ParseState::Message {
                        sequence,
                        start,
                        end,
                        lines,
                    }
                } else {
                    if lines.is_empty() {
                        log::debug!("skipping cue {sequence}: no text before line {line_number}");
                    } else {
                        self.entries.push(Entry::new(sequence, start, end, lines));
                    }
                    ParseState::ExpectSequence
                }
            }
        }
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = data::load(path)?;
        Ok(Document::parse(&text))
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        data::save(path, &self.render())
    }

    /// Shifts every cue by a signed number of milliseconds
    pub fn shift(&mut self, delta_millis: i64) {
        for entry in self.entries.iter_mut() {
            entry.shift(delta_millis);
        }
    }

    pub fn shift_by(&mut self, offset: Offset) {
        self.shift(offset.as_millis());
    }

    /// Renders every cue back to SRT text, in document order
    pub fn render(&self) -> String {
        self.entries.iter().map(Entry::render).join("")
    }

    pub fn push(&mut self, entry: Entry) {
        self.entries.push(entry);
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Entry> {
        self.entries.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, Entry> {
        self.entries.iter_mut()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Earliest start and latest end across all cues
    pub fn span(&self) -> Option<(Timestamp, Timestamp)> {
        let start = self.entries.iter().map(Entry::start).min()?;
        let end = self.entries.iter().map(Entry::end).max()?;
        Some((start, end))
    }
}

fn is_sequence_number(line: &str) -> bool {
    let line = line.trim();
    !line.is_empty() && line.chars().all(|c| c.is_ascii_digit())
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for entry in &self.entries {
            write!(f, "{entry}")?;
        }
        Ok(())
    }
}

impl From<Vec<Entry>> for Document {
    fn from(entries: Vec<Entry>) -> Self {
        Document { entries }
    }
}

impl IntoIterator for Document {
    type Item = Entry;
    type IntoIter = std::vec::IntoIter<Entry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a Document {
    type Item = &'a Entry;
    type IntoIter = std::slice::Iter<'a, Entry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl<'a> IntoIterator for &'a mut Document {
    type Item = &'a mut Entry;
    type IntoIter = std::slice::IterMut<'a, Entry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter_mut()
    }
}
