//! Crossterm event → host-neutral input mapping.

use std::time::{Duration, Instant};

use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use limn_actions::{Key, KeyInput, Modifiers, MouseInput};

const DOUBLE_CLICK_WINDOW: Duration = Duration::from_millis(400);

/// Distinguishes a double click from two distant presses. Terminals report
/// only raw presses, so the second press on the same cell within the window
/// is promoted.
pub struct ClickTracker {
    last: Option<(Instant, u16, u16)>,
}

impl ClickTracker {
    pub fn new() -> Self {
        Self { last: None }
    }

    fn classify(&mut self, col: u16, row: u16) -> MouseInput {
        let now = Instant::now();
        let double = matches!(
            self.last,
            Some((at, c, r)) if c == col && r == row && now.duration_since(at) <= DOUBLE_CLICK_WINDOW
        );
        if double {
            self.last = None;
            MouseInput::DoubleClick {
                x: col as u32,
                y: row as u32,
            }
        } else {
            self.last = Some((now, col, row));
            MouseInput::Press {
                x: col as u32,
                y: row as u32,
            }
        }
    }
}

pub fn map_key(event: &KeyEvent) -> Option<KeyInput> {
    if !matches!(event.kind, KeyEventKind::Press | KeyEventKind::Repeat) {
        return None;
    }
    let mut mods = Modifiers::empty();
    if event.modifiers.contains(KeyModifiers::CONTROL) {
        mods |= Modifiers::CTRL;
    }
    if event.modifiers.contains(KeyModifiers::SHIFT) {
        mods |= Modifiers::SHIFT;
    }
    if event.modifiers.contains(KeyModifiers::ALT) {
        mods |= Modifiers::ALT;
    }
    let key = match event.code {
        KeyCode::Char(c) => Key::Char(c),
        KeyCode::Left => Key::Left,
        KeyCode::Right => Key::Right,
        KeyCode::Up => Key::Up,
        KeyCode::Down => Key::Down,
        KeyCode::Backspace => Key::Backspace,
        KeyCode::Delete => Key::Delete,
        KeyCode::Enter => Key::Enter,
        KeyCode::Tab => Key::Tab,
        KeyCode::Esc => Key::Escape,
        _ => return None,
    };
    Some(KeyInput::new(key, mods))
}

/// Map a mouse event inside the text area (`row < text_rows`) to an input.
/// Status-bar clicks and non-left buttons are ignored.
pub fn map_mouse(
    event: &MouseEvent,
    tracker: &mut ClickTracker,
    text_rows: u16,
) -> Option<MouseInput> {
    if event.row >= text_rows {
        return None;
    }
    match event.kind {
        MouseEventKind::Down(MouseButton::Left) => Some(tracker.classify(event.column, event.row)),
        MouseEventKind::Drag(MouseButton::Left) => Some(MouseInput::Drag {
            x: event.column as u32,
            y: event.row as u32,
        }),
        _ => None,
    }
}
