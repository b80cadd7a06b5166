//! The assembled editor: state, viewport, render style, clipboard.

use limn_clipboard::Clipboard;
use limn_config::Style;
use limn_state::EditorState;
use limn_view::Viewport;

pub struct Editor {
    pub state: EditorState,
    pub viewport: Viewport,
    pub style: Style,
    pub scroll_margin: usize,
    pub clipboard: Box<dyn Clipboard>,
}

impl Editor {
    pub fn new(
        state: EditorState,
        viewport: Viewport,
        style: Style,
        scroll_margin: usize,
        clipboard: Box<dyn Clipboard>,
    ) -> Self {
        Self {
            state,
            viewport,
            style,
            scroll_margin,
            clipboard,
        }
    }

    /// Window/document title: the active file path when one is set.
    pub fn title(&self) -> String {
        match &self.state.file_path {
            Some(path) => format!("limn — {}", path.display()),
            None => "limn".to_string(),
        }
    }
}
