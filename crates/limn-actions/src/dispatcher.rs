//! Dispatcher applying an `Action` to the editor.
//!
//! This is the single mutation path: every key binding, mouse gesture, and
//! host menu lands here. Each arm is a total function over the editor state;
//! out-of-bounds operations clamp to no-ops inside the state layer rather
//! than surfacing errors.

use limn_text::{Position, word};
use limn_view::FontMetrics;
use tracing::trace;

use crate::editor::Editor;
use crate::io_ops::{OpenFileResult, WriteFileResult};
use crate::{Action, MotionKind, io_ops, search_ops};

/// Result of dispatching a single `Action`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DispatchResult {
    /// A render is needed.
    pub dirty: bool,
    /// The editor should exit.
    pub quit: bool,
}

impl DispatchResult {
    pub fn dirty() -> Self {
        Self {
            dirty: true,
            quit: false,
        }
    }
    pub fn clean() -> Self {
        Self {
            dirty: false,
            quit: false,
        }
    }
    pub fn quit() -> Self {
        Self {
            dirty: true,
            quit: true,
        }
    }
}

/// Apply `action` to `editor`. `metrics` resolves mouse pixels; the same
/// metrics the renderer uses must be supplied so hit-testing agrees with
/// what is on screen.
pub fn dispatch(action: Action, editor: &mut Editor, metrics: &dyn FontMetrics) -> DispatchResult {
    trace!(target: "dispatch", ?action, "dispatch");
    let result = match action {
        Action::Motion(kind) => {
            match kind {
                MotionKind::Left => editor.state.move_left(),
                MotionKind::Right => editor.state.move_right(),
                MotionKind::WordLeft => editor.state.move_word_left(),
                MotionKind::WordRight => editor.state.move_word_right(),
                MotionKind::Up => editor.state.move_up(),
                MotionKind::Down => editor.state.move_down(),
            }
            DispatchResult::dirty()
        }
        Action::InsertChar(c) => {
            editor.state.clear_status();
            editor.state.insert_at_caret(&c.to_string());
            DispatchResult::dirty()
        }
        Action::InsertNewline => {
            editor.state.clear_status();
            editor.state.insert_at_caret("\n");
            DispatchResult::dirty()
        }
        Action::InsertTab => {
            editor.state.clear_status();
            editor.state.insert_at_caret("\t");
            DispatchResult::dirty()
        }
        Action::DeleteBackward => {
            editor.state.clear_status();
            editor.state.delete_backward();
            DispatchResult::dirty()
        }
        Action::DeleteForward => {
            editor.state.clear_status();
            editor.state.delete_forward();
            DispatchResult::dirty()
        }
        Action::SelectAll => {
            editor.state.select_all();
            DispatchResult::dirty()
        }
        Action::Cut => {
            editor.state.clear_status();
            editor.state.cut(editor.clipboard.as_mut());
            DispatchResult::dirty()
        }
        Action::Copy => {
            editor.state.copy(editor.clipboard.as_mut());
            DispatchResult::clean()
        }
        Action::Paste => {
            editor.state.clear_status();
            editor.state.paste(editor.clipboard.as_mut());
            DispatchResult::dirty()
        }
        Action::Search(needle) => {
            search_ops::search(&mut editor.state, &needle);
            DispatchResult::dirty()
        }
        Action::Open(path) => {
            match io_ops::open_file(&path) {
                OpenFileResult::Success(opened) => {
                    editor.state.replace_buffer(opened.buffer);
                    editor.state.file_path = Some(opened.path);
                    editor.viewport.first_line = 0;
                    editor.state.set_status(format!("opened {}", path.display()));
                }
                OpenFileResult::Error => {
                    editor
                        .state
                        .set_status(format!("error reading file: {}", path.display()));
                }
            }
            DispatchResult::dirty()
        }
        Action::Save => {
            let target = editor.state.file_path.clone();
            let result = io_ops::write_file(&mut editor.state, None);
            report_write(&mut editor.state, result, target.as_deref());
            DispatchResult::dirty()
        }
        Action::SaveAs(path) => {
            let result = io_ops::write_file(&mut editor.state, Some(&path));
            report_write(&mut editor.state, result, Some(&path));
            DispatchResult::dirty()
        }
        Action::PlaceCaret { x, y } => {
            let pos = editor
                .viewport
                .position_at_px(&editor.state.buffer, metrics, x, y);
            editor.state.place_caret(pos);
            DispatchResult::dirty()
        }
        Action::DragSelect { x, y } => {
            let pos = editor
                .viewport
                .position_at_px(&editor.state.buffer, metrics, x, y);
            editor.state.drag_to(pos);
            DispatchResult::dirty()
        }
        Action::SelectWordAt { x, y } => {
            select_word_at(editor, metrics, x, y);
            DispatchResult::dirty()
        }
        Action::SetFontFamily(family) => {
            editor.style.family = family;
            DispatchResult::dirty()
        }
        Action::SetFontSize(size) => {
            editor.style.size_pt = limn_config::StylePt::new(size);
            DispatchResult::dirty()
        }
        Action::SetFontColor(color) => {
            editor.style.color = color;
            DispatchResult::dirty()
        }
        Action::Quit => DispatchResult::quit(),
    };
    if result.dirty {
        editor
            .viewport
            .scroll_to_caret(editor.state.caret.line, editor.scroll_margin);
    }
    result
}

/// Expand the word under a pixel and select it, caret at the word start.
/// A non-word position degrades to caret placement.
fn select_word_at(editor: &mut Editor, metrics: &dyn FontMetrics, x: u32, y: u32) {
    let pos = editor
        .viewport
        .position_at_px(&editor.state.buffer, metrics, x, y);
    let line_text = editor.state.buffer.line(pos.line).unwrap_or_default();
    let (start_col, end_col) = word::word_span_at(&line_text, pos.column);
    if start_col == end_col {
        editor.state.place_caret(pos);
        return;
    }
    let start = editor
        .state
        .buffer
        .offset_of(Position::new(pos.line, start_col));
    let end = editor
        .state
        .buffer
        .offset_of(Position::new(pos.line, end_col));
    editor.state.select_range(start, end);
    editor.state.caret = editor.state.buffer.position_of(start);
}

fn report_write(
    state: &mut limn_state::EditorState,
    result: WriteFileResult,
    attempted: Option<&std::path::Path>,
) {
    match result {
        WriteFileResult::Success => {
            let saved = state
                .file_path
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_default();
            state.set_status(format!("saved {saved}"));
        }
        WriteFileResult::NoFilename => {
            state.set_status("no file name (open a file first)");
        }
        WriteFileResult::Error => {
            let path = attempted
                .map(|p| p.display().to_string())
                .unwrap_or_default();
            state.set_status(format!("error writing file: {path}"));
        }
    }
}
