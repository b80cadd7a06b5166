//! File IO helpers: synchronous, minimal. These isolate filesystem access
//! so the dispatcher focuses on command semantics; the user-visible surface
//! for failures is the editor's status message, set by the caller.

use std::path::{Path, PathBuf};

use limn_state::EditorState;
use limn_text::Buffer;

/// Result of attempting to open a file.
#[derive(Debug)]
pub enum OpenFileResult {
    Success(OpenSuccess),
    Error,
}

#[derive(Debug)]
pub struct OpenSuccess {
    pub buffer: Buffer,
    pub path: PathBuf,
}

/// Read a file into a new buffer. The caller swaps it into the editor
/// state; on error the current buffer is left untouched.
pub fn open_file(path: &Path) -> OpenFileResult {
    match std::fs::read_to_string(path) {
        Ok(content) => match Buffer::from_str(&content) {
            Ok(buffer) => OpenFileResult::Success(OpenSuccess {
                buffer,
                path: path.to_path_buf(),
            }),
            Err(e) => {
                tracing::error!(target: "io", ?e, "buffer_create_failed");
                OpenFileResult::Error
            }
        },
        Err(e) => {
            tracing::error!(target: "io", ?e, path = %path.display(), "file_open_error");
            OpenFileResult::Error
        }
    }
}

/// Result of a write attempt.
#[derive(Debug, PartialEq, Eq)]
pub enum WriteFileResult {
    Success,
    NoFilename,
    Error,
}

/// Write the document to `target`, or to the state's associated path when
/// no target is given. `file_path` is only updated after a successful
/// write.
pub fn write_file(state: &mut EditorState, target: Option<&Path>) -> WriteFileResult {
    let path = if let Some(p) = target {
        p.to_path_buf()
    } else if let Some(existing) = state.file_path.clone() {
        existing
    } else {
        return WriteFileResult::NoFilename;
    };
    match std::fs::write(&path, state.buffer.text()) {
        Ok(()) => {
            state.file_path = Some(path);
            state.dirty = false;
            WriteFileResult::Success
        }
        Err(e) => {
            tracing::error!(target: "io", ?e, path = %path.display(), "file_write_error");
            WriteFileResult::Error
        }
    }
}
