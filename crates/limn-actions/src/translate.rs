//! Raw input → `Action` translation.
//!
//! The binding table: arrows move the caret (ctrl = word variant),
//! backspace/delete edit, enter/tab insert, ctrl+A/X/C/V are the edit-menu
//! shortcuts, ctrl+S saves, ctrl+Q quits. Printable characters insert
//! themselves. Anything else maps to no action.

use crate::input::{InputEvent, Key, KeyInput, Modifiers, MouseInput};
use crate::{Action, MotionKind};

pub fn translate(event: &InputEvent) -> Option<Action> {
    match event {
        InputEvent::Key(key) => translate_key(key),
        InputEvent::Mouse(mouse) => Some(translate_mouse(mouse)),
    }
}

fn translate_key(input: &KeyInput) -> Option<Action> {
    let ctrl = input.mods.contains(Modifiers::CTRL);
    match input.key {
        Key::Left if ctrl => Some(Action::Motion(MotionKind::WordLeft)),
        Key::Left => Some(Action::Motion(MotionKind::Left)),
        Key::Right if ctrl => Some(Action::Motion(MotionKind::WordRight)),
        Key::Right => Some(Action::Motion(MotionKind::Right)),
        Key::Up => Some(Action::Motion(MotionKind::Up)),
        Key::Down => Some(Action::Motion(MotionKind::Down)),
        Key::Backspace => Some(Action::DeleteBackward),
        Key::Delete => Some(Action::DeleteForward),
        Key::Enter => Some(Action::InsertNewline),
        Key::Tab => Some(Action::InsertTab),
        Key::Escape => None,
        Key::Char(c) if ctrl => match c.to_ascii_lowercase() {
            'a' => Some(Action::SelectAll),
            'x' => Some(Action::Cut),
            'c' => Some(Action::Copy),
            'v' => Some(Action::Paste),
            's' => Some(Action::Save),
            'q' => Some(Action::Quit),
            _ => None,
        },
        Key::Char(_) if input.mods.contains(Modifiers::ALT) => None,
        Key::Char(c) => Some(Action::InsertChar(c)),
    }
}

fn translate_mouse(input: &MouseInput) -> Action {
    match *input {
        MouseInput::Press { x, y } => Action::PlaceCaret { x, y },
        MouseInput::Drag { x, y } => Action::DragSelect { x, y },
        MouseInput::DoubleClick { x, y } => Action::SelectWordAt { x, y },
    }
}
