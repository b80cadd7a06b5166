//! Host-neutral input event model.
//!
//! Frontends map their native events (terminal, GUI) into these types; the
//! translator only ever sees this model.

use bitflags::bitflags;

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct Modifiers: u8 {
        const CTRL  = 1 << 0;
        const SHIFT = 1 << 1;
        const ALT   = 1 << 2;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Char(char),
    Left,
    Right,
    Up,
    Down,
    Backspace,
    Delete,
    Enter,
    Tab,
    Escape,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyInput {
    pub key: Key,
    pub mods: Modifiers,
}

impl KeyInput {
    pub fn new(key: Key, mods: Modifiers) -> Self {
        Self { key, mods }
    }
    pub fn plain(key: Key) -> Self {
        Self::new(key, Modifiers::empty())
    }
    pub fn ctrl(key: Key) -> Self {
        Self::new(key, Modifiers::CTRL)
    }
}

/// Mouse input in viewport pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseInput {
    Press { x: u32, y: u32 },
    Drag { x: u32, y: u32 },
    DoubleClick { x: u32, y: u32 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Key(KeyInput),
    Mouse(MouseInput),
}
