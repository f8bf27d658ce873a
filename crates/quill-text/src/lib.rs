//! Codepoint-vector text buffer: raw mutation by linear offset plus the
//! line-shape queries the caret layer navigates by.

use std::fmt;

use thiserror::Error;

/// Errors surfaced by buffer-level operations.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum TextError {
    /// A linear index outside `[0, len]`.
    #[error("index {index} not in range [0:{len}]")]
    IndexOutOfRange { index: usize, len: usize },
    /// A line index beyond the last line of the buffer.
    #[error("line {line} exceeds last line {last}")]
    InvalidLine { line: usize, last: usize },
}

/// Read-only line-shape queries handed to the caret/selection layer.
///
/// Supplied per call, never captured at construction, so answers always
/// reflect the buffer as it stands after any interleaved mutation.
pub trait LineMetrics {
    /// Codepoint length of `line`, excluding its newline marker.
    fn line_length(&self, line: usize) -> Result<usize, TextError>;

    /// Index of the final line, equal to the number of newline markers. A
    /// buffer without newlines is a single line with index 0.
    fn last_line(&self) -> usize;
}

/// An ordered sequence of Unicode codepoints. Indices are codepoint indices,
/// not bytes; valid insertion points are `[0, len]` inclusive.
///
/// Mutation rebuilds the backing vector wholesale. That is an explicit
/// simplicity-over-asymptotics trade-off for interactive documents of
/// moderate size; a representation upgrade (rope, piece table) must keep
/// this public contract.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextBuffer {
    data: Vec<char>,
}

impl TextBuffer {
    pub fn new() -> Self {
        Self { data: Vec::new() }
    }

    /// Construct a buffer from an in-memory string slice.
    pub fn from_text(text: &str) -> Self {
        Self {
            data: text.chars().collect(),
        }
    }

    /// Total length in codepoints.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Full content as an owned `String`.
    pub fn content(&self) -> String {
        self.data.iter().collect()
    }

    /// Insert `text` so its first codepoint lands at `index`; content at and
    /// after `index` shifts right. Empty `text` is a no-op (after the bounds
    /// check).
    pub fn insert(&mut self, index: usize, text: &str) -> Result<(), TextError> {
        self.check_index(index)?;
        if text.is_empty() {
            return Ok(());
        }
        let mut data = Vec::with_capacity(self.data.len() + text.chars().count());
        data.extend_from_slice(&self.data[..index]);
        data.extend(text.chars());
        data.extend_from_slice(&self.data[index..]);
        self.data = data;
        Ok(())
    }

    /// Remove `count` codepoints starting at `index`.
    pub fn delete(&mut self, index: usize, count: usize) -> Result<(), TextError> {
        let end = self.check_range(index, count)?;
        if count == 0 {
            return Ok(());
        }
        let mut data = Vec::with_capacity(self.data.len() - count);
        data.extend_from_slice(&self.data[..index]);
        data.extend_from_slice(&self.data[end..]);
        self.data = data;
        Ok(())
    }

    /// The `count` codepoints starting at `index`, without mutating state.
    pub fn get_range(&self, index: usize, count: usize) -> Result<String, TextError> {
        let end = self.check_range(index, count)?;
        Ok(self.data[index..end].iter().collect())
    }

    /// Number of lines; never zero.
    pub fn line_count(&self) -> usize {
        self.newline_count() + 1
    }

    fn newline_count(&self) -> usize {
        self.data.iter().filter(|&&c| c == '\n').count()
    }

    fn check_index(&self, index: usize) -> Result<(), TextError> {
        if index > self.data.len() {
            return Err(TextError::IndexOutOfRange {
                index,
                len: self.data.len(),
            });
        }
        Ok(())
    }

    fn check_range(&self, index: usize, count: usize) -> Result<usize, TextError> {
        self.check_index(index)?;
        match index.checked_add(count) {
            Some(end) if end <= self.data.len() => Ok(end),
            _ => Err(TextError::IndexOutOfRange {
                index: index.saturating_add(count),
                len: self.data.len(),
            }),
        }
    }
}

impl LineMetrics for TextBuffer {
    fn line_length(&self, line: usize) -> Result<usize, TextError> {
        let last = self.last_line();
        if line > last {
            return Err(TextError::InvalidLine { line, last });
        }
        Ok(self
            .data
            .split(|&c| c == '\n')
            .nth(line)
            .map(<[char]>::len)
            .unwrap_or(0))
    }

    fn last_line(&self) -> usize {
        self.newline_count()
    }
}

impl fmt::Display for TextBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in &self.data {
            write!(f, "{c}")?;
        }
        Ok(())
    }
}
