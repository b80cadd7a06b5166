//! System clipboard collaborator.
//!
//! The editor core only speaks to the `Clipboard` trait; concrete providers
//! live here. The OS provider shells out to the platform's clipboard tool
//! (pbcopy/pbpaste, wl-copy/wl-paste, xclip, win32yank), selected once by
//! probing the environment. Hosts without any tool fall back to the
//! process-local `MemoryClipboard`, which also backs tests.

use std::io::Write;
use std::process::{Command, Stdio};

use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("could not convert clipboard contents to UTF-8: {0}")]
    FromUtf8(#[from] std::string::FromUtf8Error),
    #[error("clipboard tool exited with failure")]
    CommandFailed,
    #[error("clipboard has no text content")]
    Unavailable,
}

pub type Result<T> = std::result::Result<T, ClipboardError>;

/// Get/set-string interface to the system clipboard. Retrieval may fail
/// (`Unavailable` when no text is present); callers decide whether that is
/// surfaced or swallowed.
pub trait Clipboard {
    fn set_text(&mut self, text: &str) -> Result<()>;
    fn get_text(&mut self) -> Result<String>;
}

/// Process-local clipboard. Used by tests and as the fallback when no OS
/// clipboard tool is found.
#[derive(Debug, Default)]
pub struct MemoryClipboard {
    contents: Option<String>,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Clipboard for MemoryClipboard {
    fn set_text(&mut self, text: &str) -> Result<()> {
        self.contents = Some(text.to_string());
        Ok(())
    }

    fn get_text(&mut self) -> Result<String> {
        self.contents.clone().ok_or(ClipboardError::Unavailable)
    }
}

#[derive(Debug, Clone)]
struct Tool {
    program: &'static str,
    args: &'static [&'static str],
}

/// OS clipboard driven by an external copy/paste command pair.
#[derive(Debug, Clone)]
pub struct CommandClipboard {
    name: &'static str,
    copy: Tool,
    paste: Tool,
}

fn binary_exists(name: &str) -> bool {
    which::which(name).is_ok()
}

fn env_var_is_set(name: &str) -> bool {
    std::env::var_os(name).is_some_and(|v| !v.is_empty())
}

impl CommandClipboard {
    /// Probe the environment for a usable clipboard tool. Returns `None` on
    /// hosts without one; callers fall back to `MemoryClipboard`.
    pub fn detect() -> Option<Self> {
        let provider = if binary_exists("pbcopy") && binary_exists("pbpaste") {
            Self {
                name: "pasteboard",
                copy: Tool { program: "pbcopy", args: &[] },
                paste: Tool { program: "pbpaste", args: &[] },
            }
        } else if env_var_is_set("WAYLAND_DISPLAY")
            && binary_exists("wl-copy")
            && binary_exists("wl-paste")
        {
            Self {
                name: "wayland",
                copy: Tool { program: "wl-copy", args: &["--type", "text/plain"] },
                paste: Tool { program: "wl-paste", args: &["--no-newline"] },
            }
        } else if env_var_is_set("DISPLAY") && binary_exists("xclip") {
            Self {
                name: "xclip",
                copy: Tool { program: "xclip", args: &["-i", "-selection", "clipboard"] },
                paste: Tool { program: "xclip", args: &["-o", "-selection", "clipboard"] },
            }
        } else if binary_exists("win32yank.exe") {
            Self {
                name: "win32yank",
                copy: Tool { program: "win32yank.exe", args: &["-i", "--crlf"] },
                paste: Tool { program: "win32yank.exe", args: &["-o", "--lf"] },
            }
        } else {
            return None;
        };
        debug!(target: "clipboard", provider = provider.name, "clipboard_provider_selected");
        Some(provider)
    }

    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl Clipboard for CommandClipboard {
    fn set_text(&mut self, text: &str) -> Result<()> {
        let mut child = Command::new(self.copy.program)
            .args(self.copy.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()?;
        if let Some(stdin) = child.stdin.as_mut() {
            stdin.write_all(text.as_bytes())?;
        }
        let status = child.wait()?;
        if status.success() {
            Ok(())
        } else {
            Err(ClipboardError::CommandFailed)
        }
    }

    fn get_text(&mut self) -> Result<String> {
        let output = Command::new(self.paste.program)
            .args(self.paste.args)
            .stderr(Stdio::null())
            .output()?;
        if !output.status.success() {
            return Err(ClipboardError::CommandFailed);
        }
        if output.stdout.is_empty() {
            return Err(ClipboardError::Unavailable);
        }
        Ok(String::from_utf8(output.stdout)?)
    }
}
