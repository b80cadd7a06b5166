//! Raw-mode terminal session guard.
//!
//! Entering switches to the alternate screen with mouse capture; leaving
//! restores the caller's terminal. `restore` is idempotent and also runs
//! from the panic hook, so a crash never strands the terminal in raw mode.

use std::io::stdout;

use anyhow::Result;
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, SetTitle, disable_raw_mode, enable_raw_mode,
};
use crossterm::{cursor, execute};

pub struct TerminalGuard;

pub fn enter() -> Result<TerminalGuard> {
    enable_raw_mode()?;
    execute!(stdout(), EnterAlternateScreen, EnableMouseCapture)?;
    Ok(TerminalGuard)
}

pub fn restore() -> Result<()> {
    execute!(
        stdout(),
        LeaveAlternateScreen,
        DisableMouseCapture,
        cursor::Show
    )?;
    disable_raw_mode()?;
    Ok(())
}

pub fn set_title(title: &str) -> Result<()> {
    execute!(stdout(), SetTitle(title))?;
    Ok(())
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if let Err(e) = restore() {
            tracing::warn!(target: "terminal", error = %e, "terminal_restore_failed");
        }
    }
}
