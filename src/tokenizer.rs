//! Whitespace tokenizer over a single reusable line buffer.
//!
//! Summary-statistic tables are read one line at a time. A [`LineTokenizer`]
//! owns one byte buffer and one span table that are reused for every line
//! of every file in a run, so streaming a table of any length performs no
//! per-line allocation once the buffer has grown to the longest line seen.
//!
//! Lines are raw bytes: a field need not be UTF-8, and it is re-emitted
//! exactly as read. Fields are separated by the six C `isspace` bytes only.

use std::borrow::Cow;
use std::io::{self, BufRead};
use std::ops::Range;

/// Reusable line buffer plus the field spans of the most recently read line.
#[derive(Debug)]
pub struct LineTokenizer {
    buffer: Vec<u8>,
    spans: Vec<Range<usize>>,
}

impl Default for LineTokenizer {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_LINE_CAPACITY)
    }
}

/// Initial capacity of the line buffer in bytes.
pub const DEFAULT_LINE_CAPACITY: usize = 1024;

/// Space, tab, newline, vertical tab, form feed and carriage return.
pub fn is_field_separator(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\n' | b'\x0B' | b'\x0C' | b'\r')
}

impl LineTokenizer {
    /// Create a tokenizer with the default buffer capacity
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a tokenizer whose line buffer starts at `capacity` bytes.
    ///
    /// The buffer grows on demand and is never shrunk.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buffer: Vec::with_capacity(capacity),
            spans: Vec::new(),
        }
    }

    /// Current capacity of the line buffer in bytes
    pub fn capacity(&self) -> usize {
        self.buffer.capacity()
    }

    /// Read the next line from `reader` and split it into fields.
    ///
    /// Returns `Ok(None)` at end of input. A blank line yields `Some` with
    /// zero fields; skipping it is the caller's decision.
    pub fn read_line<R: BufRead>(&mut self, reader: &mut R) -> io::Result<Option<Fields<'_>>> {
        self.buffer.clear();
        if reader.read_until(b'\n', &mut self.buffer)? == 0 {
            return Ok(None);
        }
        Ok(Some(self.split()))
    }

    /// Fields of the line currently held in the buffer
    pub fn fields(&self) -> Fields<'_> {
        Fields {
            line: &self.buffer,
            spans: &self.spans,
        }
    }

    /// Tokenize `line` in place of whatever the buffer held before.
    pub fn tokenize(&mut self, line: impl AsRef<[u8]>) -> Fields<'_> {
        self.buffer.clear();
        self.buffer.extend_from_slice(line.as_ref());
        self.split()
    }

    fn split(&mut self) -> Fields<'_> {
        self.spans.clear();
        let mut start = None;
        for (idx, &byte) in self.buffer.iter().enumerate() {
            if is_field_separator(byte) {
                if let Some(s) = start.take() {
                    self.spans.push(s..idx);
                }
            } else if start.is_none() {
                start = Some(idx);
            }
        }
        if let Some(s) = start {
            self.spans.push(s..self.buffer.len());
        }
        Fields {
            line: &self.buffer,
            spans: &self.spans,
        }
    }
}

/// Borrowed view of the fields of one tokenized line.
#[derive(Debug, Clone, Copy)]
pub struct Fields<'a> {
    line: &'a [u8],
    spans: &'a [Range<usize>],
}

impl<'a> Fields<'a> {
    /// Number of fields on the line
    pub fn len(&self) -> usize {
        self.spans.len()
    }

    /// True for a blank (whitespace-only) line
    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }

    /// Field at `index`, if present
    pub fn get(&self, index: usize) -> Option<&'a [u8]> {
        let line = self.line;
        self.spans.get(index).map(|span| &line[span.clone()])
    }

    /// Iterate over the fields in order
    pub fn iter(&self) -> impl Iterator<Item = &'a [u8]> + 'a {
        let line = self.line;
        let spans = self.spans;
        spans.iter().map(move |span| &line[span.clone()])
    }

    /// Copy the raw field bytes out of the shared buffer.
    pub fn to_owned_fields(&self) -> Vec<Box<[u8]>> {
        self.iter().map(Box::from).collect()
    }

    /// Fields as text, with invalid UTF-8 replaced by U+FFFD.
    pub fn to_strings(&self) -> Vec<String> {
        self.iter().map(|f| lossy(f).into_owned()).collect()
    }
}

/// Field bytes as text for names and messages.
pub fn lossy(field: &[u8]) -> Cow<'_, str> {
    String::from_utf8_lossy(field)
}
