//! Rope-based document buffer.
//!
//! All document offsets are absolute `char` indices into the content. Line
//! boundaries are a derived view: the rope maintains them incrementally, so
//! every query below answers without rescanning the content, while keeping
//! the same observable results as a split-on-newline model:
//! * `line_count()` is 1 + the number of `\n` characters.
//! * `line(i)` is the text between the i-th and (i+1)-th newline, newline
//!   excluded.
//! * `line_start(i)` is non-decreasing and `line_start(0) == 0`.
//! * Joining all lines with `\n` reconstructs the content exactly.

use anyhow::Result;
use ropey::Rope;

pub mod word;

/// A position inside a buffer expressed as (line index, char column within
/// that line). `column` may equal the line length, denoting the slot after
/// the last character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
    pub fn origin() -> Self {
        Self { line: 0, column: 0 }
    }
}

/// A text buffer backed by a `ropey::Rope`.
#[derive(Debug, Clone)]
pub struct Buffer {
    rope: Rope,
}

impl Buffer {
    /// Construct a buffer from an in-memory string slice.
    pub fn from_str(content: &str) -> Result<Self> {
        Ok(Self {
            rope: Rope::from_str(content),
        })
    }

    /// Total char length of the content.
    pub fn len_chars(&self) -> usize {
        self.rope.len_chars()
    }

    pub fn is_empty(&self) -> bool {
        self.rope.len_chars() == 0
    }

    /// The full content as an owned string.
    pub fn text(&self) -> String {
        self.rope.to_string()
    }

    /// Total number of lines. An empty buffer still has one (empty) line.
    pub fn line_count(&self) -> usize {
        self.rope.len_lines()
    }

    /// The requested line without its trailing newline.
    pub fn line(&self, idx: usize) -> Option<String> {
        if idx >= self.rope.len_lines() {
            return None;
        }
        let mut s = self.rope.line(idx).to_string();
        if s.ends_with('\n') {
            s.pop();
        }
        Some(s)
    }

    /// Char length of a line, excluding its trailing newline.
    pub fn line_len(&self, idx: usize) -> usize {
        if idx >= self.rope.len_lines() {
            return 0;
        }
        let line = self.rope.line(idx);
        let len = line.len_chars();
        if len > 0 && line.char(len - 1) == '\n' {
            len - 1
        } else {
            len
        }
    }

    /// Absolute offset of the first character of a line. Lines past the end
    /// clamp to the end of the content.
    pub fn line_start(&self, idx: usize) -> usize {
        let idx = idx.min(self.rope.len_lines());
        self.rope.line_to_char(idx)
    }

    /// Map an absolute offset to a (line, column) position. Total over
    /// `[0, len_chars()]`; larger offsets clamp to the end of the last line.
    pub fn position_of(&self, offset: usize) -> Position {
        let offset = offset.min(self.rope.len_chars());
        let line = self.rope.char_to_line(offset);
        Position::new(line, offset - self.rope.line_to_char(line))
    }

    /// Map a (line, column) position back to an absolute offset, clamping
    /// the line to the last line and the column to that line's length.
    pub fn offset_of(&self, pos: Position) -> usize {
        let line = pos.line.min(self.rope.len_lines().saturating_sub(1));
        let column = pos.column.min(self.line_len(line));
        self.rope.line_to_char(line) + column
    }

    /// Insert `text` at the given offset. Offsets past the end clamp to the
    /// end of the content.
    pub fn insert(&mut self, offset: usize, text: &str) {
        if text.is_empty() {
            return;
        }
        let offset = offset.min(self.rope.len_chars());
        self.rope.insert(offset, text);
    }

    /// Remove the char range `[start, end)` (clamped) and return the removed
    /// text. An empty or inverted range is a no-op returning `""`.
    pub fn delete_range(&mut self, start: usize, end: usize) -> String {
        let total = self.rope.len_chars();
        let s = start.min(total);
        let e = end.min(total);
        if s >= e {
            return String::new();
        }
        let removed = self.rope.slice(s..e).to_string();
        self.rope.remove(s..e);
        removed
    }

    /// The content of the char range `[start, end)`, clamped.
    pub fn slice(&self, start: usize, end: usize) -> String {
        let total = self.rope.len_chars();
        let s = start.min(total);
        let e = end.min(total);
        if s >= e {
            return String::new();
        }
        self.rope.slice(s..e).to_string()
    }

    /// Case-sensitive first-occurrence substring search at or after `from`.
    /// Returns the absolute char offset of the match start.
    pub fn search(&self, needle: &str, from: usize) -> Option<usize> {
        if needle.is_empty() {
            return None;
        }
        let from = from.min(self.rope.len_chars());
        let byte_from = self.rope.char_to_byte(from);
        let text = self.text();
        text[byte_from..]
            .find(needle)
            .map(|b| self.rope.byte_to_char(byte_from + b))
    }
}
