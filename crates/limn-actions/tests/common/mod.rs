use limn_actions::Editor;
use limn_clipboard::MemoryClipboard;
use limn_config::Style;
use limn_state::EditorState;
use limn_text::Buffer;
use limn_view::{MonoMetrics, Viewport};

/// 8px-wide cells, 16px lines, 4 visible lines.
pub const METRICS: MonoMetrics = MonoMetrics { advance: 8 };

pub fn editor_with(text: &str) -> Editor {
    let state = EditorState::new(Buffer::from_str(text).unwrap());
    let viewport = Viewport::new(16, 640, 64);
    Editor::new(
        state,
        viewport,
        Style::default(),
        0,
        Box::new(MemoryClipboard::new()),
    )
}
