//! Editing intents and their dispatch.
//!
//! Input handling is split in two: `translate` maps raw key/mouse events to
//! an explicit `Action` (the command/intent enum), and `dispatch` applies an
//! `Action` to the editor through a single handler function. Key codes never
//! reach editing logic directly, so bindings and semantics evolve
//! independently.

use std::path::PathBuf;

use limn_config::{FontColor, FontFamily};

pub mod dispatcher;
pub mod editor;
pub mod input;
pub mod io_ops;
pub mod search_ops;
pub mod translate;

pub use dispatcher::{DispatchResult, dispatch};
pub use editor::Editor;
pub use input::{InputEvent, Key, KeyInput, Modifiers, MouseInput};
pub use translate::translate;

/// Caret movement variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MotionKind {
    Left,
    Right,
    WordLeft,
    WordRight,
    Up,
    Down,
}

/// Everything the editor can be asked to do. Produced by `translate` (key
/// bindings), the mouse path, or host chrome (menus, toolbar, CLI).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Motion(MotionKind),
    InsertChar(char),
    InsertNewline,
    InsertTab,
    DeleteBackward,
    DeleteForward,
    SelectAll,
    Cut,
    Copy,
    Paste,
    Search(String),
    Open(PathBuf),
    Save,
    SaveAs(PathBuf),
    /// Mouse press: place the caret at a viewport pixel.
    PlaceCaret { x: u32, y: u32 },
    /// Mouse drag: extend the selection to a viewport pixel.
    DragSelect { x: u32, y: u32 },
    /// Double click: select the word under a viewport pixel.
    SelectWordAt { x: u32, y: u32 },
    SetFontFamily(FontFamily),
    SetFontSize(u16),
    SetFontColor(FontColor),
    Quit,
}
