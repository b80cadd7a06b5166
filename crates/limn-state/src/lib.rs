//! Editor state: document buffer, caret, selection, and file metadata.
//!
//! This crate owns every mutation of the document. The buffer itself is a
//! standalone value (`limn_text::Buffer`); presentation code borrows it
//! read-only and never mutates it except through the operations here.
//!
//! Selection model: a selection is a normalized absolute char range
//! `[start, end)` with `start <= end` enforced at construction. The
//! originating anchor (mouse press or selection origin) is stored
//! separately so drag selection works in both directions and a future
//! shift-select can stay directional without changing the range invariant.
//! Empty spans are treated as no selection.

use std::path::PathBuf;

use limn_clipboard::Clipboard;
use limn_text::{Buffer, Position, word};
use tracing::{debug, trace};

/// Normalized absolute char range `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionSpan {
    pub start: usize,
    pub end: usize,
}

impl SelectionSpan {
    /// Construct a span normalizing ordering so that `start <= end`.
    pub fn new(a: usize, b: usize) -> Self {
        if a <= b {
            Self { start: a, end: b }
        } else {
            Self { start: b, end: a }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }
}

#[derive(Debug, Default, Clone)]
struct SelectionModel {
    active: Option<SelectionSpan>,
    anchor: Option<usize>,
}

impl SelectionModel {
    fn clear(&mut self) {
        self.active = None;
        self.anchor = None;
    }
}

/// Single-document editor state. Created once at startup and mutated in
/// place for the lifetime of the window.
pub struct EditorState {
    pub buffer: Buffer,
    pub caret: Position,
    selection: SelectionModel,
    pub file_path: Option<PathBuf>,
    pub dirty: bool,
    status: Option<String>,
    sticky_column: Option<usize>,
}

impl EditorState {
    pub fn new(buffer: Buffer) -> Self {
        Self {
            buffer,
            caret: Position::origin(),
            selection: SelectionModel::default(),
            file_path: None,
            dirty: false,
            status: None,
            sticky_column: None,
        }
    }

    /// Swap in a new document (file open), resetting caret, selection, and
    /// scroll-relevant state. The caller owns `file_path` bookkeeping.
    pub fn replace_buffer(&mut self, buffer: Buffer) {
        self.buffer = buffer;
        self.caret = Position::origin();
        self.selection.clear();
        self.sticky_column = None;
        self.dirty = false;
    }

    // ------------------------------------------------------------------
    // Caret & selection
    // ------------------------------------------------------------------

    /// Absolute char offset of the caret.
    pub fn caret_offset(&self) -> usize {
        self.buffer.offset_of(self.caret)
    }

    /// Place the caret, clamped into the document, clearing any selection.
    pub fn set_caret(&mut self, pos: Position) {
        let offset = self.buffer.offset_of(pos);
        self.caret = self.buffer.position_of(offset);
        self.selection.clear();
        self.sticky_column = None;
    }

    /// Mouse-press placement: like `set_caret` but remembers the offset as
    /// the drag anchor.
    pub fn place_caret(&mut self, pos: Position) {
        self.set_caret(pos);
        self.selection.anchor = Some(self.caret_offset());
    }

    /// Extend a drag selection from the last anchor to `pos`. Without a
    /// prior `place_caret` the drag degenerates to placement.
    pub fn drag_to(&mut self, pos: Position) {
        let Some(anchor) = self.selection.anchor else {
            self.place_caret(pos);
            return;
        };
        let offset = self.buffer.offset_of(pos);
        self.caret = self.buffer.position_of(offset);
        self.selection.active = Some(SelectionSpan::new(anchor, offset));
        self.sticky_column = None;
    }

    /// The active selection, if non-empty.
    pub fn selection(&self) -> Option<SelectionSpan> {
        self.selection.active.filter(|s| !s.is_empty())
    }

    /// Select `[start, end)` (normalized) and move the caret to the end of
    /// the range. The selection survives the caret move.
    pub fn select_range(&mut self, start: usize, end: usize) {
        let span = SelectionSpan::new(start, end);
        self.caret = self.buffer.position_of(span.end);
        self.selection.anchor = Some(span.start);
        self.selection.active = Some(span);
        self.sticky_column = None;
    }

    /// Select the full document.
    pub fn select_all(&mut self) {
        self.select_range(0, self.buffer.len_chars());
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    // ------------------------------------------------------------------
    // Status message (user-visible notification channel)
    // ------------------------------------------------------------------

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status = Some(message.into());
    }

    pub fn clear_status(&mut self) {
        self.status = None;
    }

    // ------------------------------------------------------------------
    // Editing
    // ------------------------------------------------------------------

    /// Delete the active selection, if any, leaving the caret at its start.
    /// Returns true when something was removed.
    fn delete_selection(&mut self) -> bool {
        let Some(span) = self.selection() else {
            return false;
        };
        self.buffer.delete_range(span.start, span.end);
        self.caret = self.buffer.position_of(span.start);
        self.selection.clear();
        self.dirty = true;
        true
    }

    /// Insert text at the caret. An active selection is replaced; the caret
    /// advances past the inserted text.
    pub fn insert_at_caret(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        self.delete_selection();
        let offset = self.caret_offset();
        self.buffer.insert(offset, text);
        self.caret = self.buffer.position_of(offset + text.chars().count());
        self.sticky_column = None;
        self.dirty = true;
        trace!(target: "edit", offset, len = text.chars().count(), "insert");
    }

    /// Backspace: delete the selection, or the char before the caret.
    /// No-op at document start. Deleting at column 0 joins lines.
    pub fn delete_backward(&mut self) {
        if self.delete_selection() {
            return;
        }
        let offset = self.caret_offset();
        if offset == 0 {
            return;
        }
        self.buffer.delete_range(offset - 1, offset);
        self.caret = self.buffer.position_of(offset - 1);
        self.sticky_column = None;
        self.dirty = true;
        trace!(target: "edit", offset, "delete_backward");
    }

    /// Forward delete: delete the selection, or the char after the caret.
    /// No-op at document end.
    pub fn delete_forward(&mut self) {
        if self.delete_selection() {
            return;
        }
        let offset = self.caret_offset();
        if offset >= self.buffer.len_chars() {
            return;
        }
        self.buffer.delete_range(offset, offset + 1);
        self.sticky_column = None;
        self.dirty = true;
        trace!(target: "edit", offset, "delete_forward");
    }

    // ------------------------------------------------------------------
    // Clipboard
    // ------------------------------------------------------------------

    /// Copy the selection to the clipboard. No-op without a selection.
    pub fn copy(&mut self, clipboard: &mut dyn Clipboard) {
        let Some(span) = self.selection() else {
            return;
        };
        let text = self.buffer.slice(span.start, span.end);
        if let Err(e) = clipboard.set_text(&text) {
            debug!(target: "clipboard", error = %e, "copy_failed");
        }
    }

    /// Cut the selection: copy, then remove it from the document. The caret
    /// lands at the selection start and the selection clears.
    pub fn cut(&mut self, clipboard: &mut dyn Clipboard) {
        let Some(span) = self.selection() else {
            return;
        };
        let text = self.buffer.slice(span.start, span.end);
        if let Err(e) = clipboard.set_text(&text) {
            debug!(target: "clipboard", error = %e, "cut_copy_failed");
        }
        self.delete_selection();
    }

    /// Paste from the clipboard at the caret, replacing any selection.
    /// Clipboard retrieval failure (no text content) is swallowed and the
    /// document left unmodified.
    pub fn paste(&mut self, clipboard: &mut dyn Clipboard) {
        match clipboard.get_text() {
            Ok(text) => self.insert_at_caret(&text),
            Err(e) => debug!(target: "clipboard", error = %e, "paste_unavailable"),
        }
    }

    // ------------------------------------------------------------------
    // Caret motion
    // ------------------------------------------------------------------

    /// One column left, clamped at column 0 (no line wrap).
    pub fn move_left(&mut self) {
        if self.caret.column > 0 {
            self.caret.column -= 1;
        }
        self.sticky_column = None;
    }

    /// One column right, clamped at the line end (no line wrap).
    pub fn move_right(&mut self) {
        if self.caret.column < self.buffer.line_len(self.caret.line) {
            self.caret.column += 1;
        }
        self.sticky_column = None;
    }

    /// Skip to the start of the run left of the caret (whitespace or
    /// non-whitespace). Idempotent at column 0.
    pub fn move_word_left(&mut self) {
        let line = self.buffer.line(self.caret.line).unwrap_or_default();
        self.caret.column = word::prev_word_boundary(&line, self.caret.column);
        self.sticky_column = None;
    }

    /// Skip past the run at the caret. Idempotent at the line end.
    pub fn move_word_right(&mut self) {
        let line = self.buffer.line(self.caret.line).unwrap_or_default();
        self.caret.column = word::next_word_boundary(&line, self.caret.column);
        self.sticky_column = None;
    }

    /// One line up, preserving a sticky target column across successive
    /// vertical moves. No-op on the first line.
    pub fn move_up(&mut self) {
        if self.caret.line == 0 {
            return;
        }
        let sticky = *self.sticky_column.get_or_insert(self.caret.column);
        self.caret.line -= 1;
        self.caret.column = sticky.min(self.buffer.line_len(self.caret.line));
    }

    /// One line down, preserving the sticky column. No-op on the last line.
    pub fn move_down(&mut self) {
        if self.caret.line + 1 >= self.buffer.line_count() {
            return;
        }
        let sticky = *self.sticky_column.get_or_insert(self.caret.column);
        self.caret.line += 1;
        self.caret.column = sticky.min(self.buffer.line_len(self.caret.line));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use limn_clipboard::MemoryClipboard;
    use pretty_assertions::assert_eq;

    fn state(text: &str) -> EditorState {
        EditorState::new(Buffer::from_str(text).unwrap())
    }

    #[test]
    fn insert_advances_caret_past_insertion() {
        let mut st = state("abc");
        st.set_caret(Position::new(0, 1));
        st.insert_at_caret("X");
        assert_eq!(st.buffer.text(), "aXbc");
        assert_eq!(st.caret_offset(), 2);
        assert!(st.dirty);
    }

    #[test]
    fn insert_replaces_active_selection() {
        let mut st = state("hello world");
        st.select_range(0, 5);
        st.insert_at_caret("bye");
        assert_eq!(st.buffer.text(), "bye world");
        assert_eq!(st.caret_offset(), 3);
        assert_eq!(st.selection(), None);
    }

    #[test]
    fn delete_backward_at_document_start_is_noop() {
        let mut st = state("ab");
        st.delete_backward();
        assert_eq!(st.buffer.text(), "ab");
        assert!(!st.dirty);
    }

    #[test]
    fn delete_backward_joins_lines() {
        let mut st = state("ab\ncd");
        st.set_caret(Position::new(1, 0));
        st.delete_backward();
        assert_eq!(st.buffer.text(), "abcd");
        assert_eq!(st.caret, Position::new(0, 2));
    }

    #[test]
    fn delete_forward_at_document_end_is_noop() {
        let mut st = state("ab");
        st.set_caret(Position::new(0, 2));
        st.delete_forward();
        assert_eq!(st.buffer.text(), "ab");
        assert!(!st.dirty);
    }

    #[test]
    fn select_all_then_cut_empties_document() {
        let mut st = state("hello\nworld");
        let mut cb = MemoryClipboard::new();
        st.select_all();
        st.cut(&mut cb);
        assert_eq!(st.buffer.text(), "");
        assert_eq!(cb.get_text().unwrap(), "hello\nworld");
        assert_eq!(st.selection(), None);
        assert_eq!(st.caret_offset(), 0);
    }

    #[test]
    fn cut_leading_selection() {
        let mut st = state("hello world");
        let mut cb = MemoryClipboard::new();
        st.select_range(0, 5);
        st.cut(&mut cb);
        assert_eq!(st.buffer.text(), " world");
        assert_eq!(cb.get_text().unwrap(), "hello");
        assert_eq!(st.selection(), None);
    }

    #[test]
    fn paste_with_empty_clipboard_is_swallowed() {
        let mut st = state("abc");
        let mut cb = MemoryClipboard::new();
        st.paste(&mut cb);
        assert_eq!(st.buffer.text(), "abc");
        assert!(!st.dirty);
    }

    #[test]
    fn paste_replaces_selection_and_advances_caret() {
        let mut st = state("hello world");
        let mut cb = MemoryClipboard::new();
        cb.set_text("goodbye").unwrap();
        st.select_range(0, 5);
        st.paste(&mut cb);
        assert_eq!(st.buffer.text(), "goodbye world");
        assert_eq!(st.caret_offset(), 7);
    }

    #[test]
    fn selection_is_normalized_regardless_of_direction() {
        let mut st = state("abcdef");
        st.place_caret(Position::new(0, 4));
        st.drag_to(Position::new(0, 1));
        let span = st.selection().unwrap();
        assert_eq!((span.start, span.end), (1, 4));
        assert_eq!(st.caret_offset(), 1);
    }

    #[test]
    fn copy_without_selection_is_noop() {
        let mut st = state("abc");
        let mut cb = MemoryClipboard::new();
        st.copy(&mut cb);
        assert!(cb.get_text().is_err());
    }

    #[test]
    fn horizontal_motion_clamps_at_line_bounds() {
        let mut st = state("ab");
        st.move_left();
        assert_eq!(st.caret, Position::new(0, 0));
        st.move_right();
        st.move_right();
        st.move_right();
        assert_eq!(st.caret, Position::new(0, 2));
    }

    #[test]
    fn word_motion_idempotent_at_document_edges() {
        let mut st = state("foo bar");
        st.move_word_left();
        assert_eq!(st.caret, Position::new(0, 0));
        st.set_caret(Position::new(0, 7));
        st.move_word_right();
        assert_eq!(st.caret, Position::new(0, 7));
    }

    #[test]
    fn vertical_motion_keeps_sticky_column() {
        let mut st = state("a long line\nab\nanother long line");
        st.set_caret(Position::new(0, 8));
        st.move_down();
        assert_eq!(st.caret, Position::new(1, 2)); // clamped to short line
        st.move_down();
        assert_eq!(st.caret, Position::new(2, 8)); // sticky column restored
        st.move_up();
        st.move_up();
        assert_eq!(st.caret, Position::new(0, 8));
    }

    #[test]
    fn vertical_motion_clamps_at_first_and_last_line() {
        let mut st = state("a\nb");
        st.move_up();
        assert_eq!(st.caret.line, 0);
        st.move_down();
        st.move_down();
        assert_eq!(st.caret.line, 1);
    }

    #[test]
    fn replace_buffer_resets_cursor_state() {
        let mut st = state("abc");
        st.select_all();
        st.insert_at_caret("xyz");
        st.replace_buffer(Buffer::from_str("new\ncontent").unwrap());
        assert_eq!(st.caret, Position::origin());
        assert_eq!(st.selection(), None);
        assert!(!st.dirty);
    }
}
