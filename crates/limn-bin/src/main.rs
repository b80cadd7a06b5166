//! limn entrypoint: terminal frontend wiring.

mod events;
mod render;
mod terminal;

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use limn_actions::{Action, Editor, InputEvent, dispatch, translate};
use limn_clipboard::{Clipboard, CommandClipboard, MemoryClipboard};
use limn_state::EditorState;
use limn_text::Buffer;
use limn_view::Viewport;
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;

use events::ClickTracker;
use render::CellMetrics;

const STATUS_ROWS: u16 = 1;
const DEFAULT_TEXT: &str = "this is a test";

/// CLI arguments.
#[derive(Parser, Debug)]
#[command(name = "limn", version, about = "limn text editor")]
struct Args {
    /// Optional path to open at startup. If omitted a placeholder buffer is used.
    pub path: Option<PathBuf>,
    /// Optional configuration file path (overrides discovery of `limn.toml`).
    #[arg(long = "config")]
    pub config: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let _log_guard = configure_logging();
    install_panic_hook();
    info!(target: "runtime", "startup");

    let config = limn_config::load_from(args.config.clone())?;
    let (cols, rows) = crossterm::terminal::size()?;
    let viewport = Viewport::new(
        1,
        cols as u32,
        rows.saturating_sub(STATUS_ROWS).max(1) as u32,
    );
    let state = EditorState::new(Buffer::from_str(DEFAULT_TEXT)?);
    let clipboard: Box<dyn Clipboard> = match CommandClipboard::detect() {
        Some(os) => Box::new(os),
        None => Box::new(MemoryClipboard::new()),
    };
    let mut editor = Editor::new(
        state,
        viewport,
        config.style(),
        config.scroll_margin(),
        clipboard,
    );

    let _guard = terminal::enter()?;
    if let Some(path) = args.path.clone() {
        dispatch(Action::Open(path), &mut editor, &CellMetrics);
    }
    run(&mut editor)?;
    info!(target: "runtime", "shutdown");
    Ok(())
}

fn run(editor: &mut Editor) -> Result<()> {
    let metrics = CellMetrics;
    let mut tracker = ClickTracker::new();
    let mut prompt: Option<String> = None;
    let mut title = String::new();

    sync_title(editor, &mut title)?;
    render::draw(editor, &metrics, prompt.as_deref())?;

    loop {
        let mut needs_render = false;
        let mut quit = false;
        match crossterm::event::read()? {
            Event::Resize(cols, rows) => {
                editor.viewport.width_px = cols as u32;
                editor.viewport.height_px = rows.saturating_sub(STATUS_ROWS).max(1) as u32;
                editor
                    .viewport
                    .scroll_to_caret(editor.state.caret.line, editor.scroll_margin);
                needs_render = true;
            }
            Event::Key(key) => {
                if let Some(action) = key_action(editor, &mut prompt, &key) {
                    let result = dispatch(action, editor, &metrics);
                    needs_render = result.dirty;
                    quit = result.quit;
                } else {
                    // prompt edits and unbound chords still refresh the bar
                    needs_render = true;
                }
            }
            Event::Mouse(mouse) => {
                let text_rows = editor.viewport.height_px as u16;
                if let Some(input) = events::map_mouse(&mouse, &mut tracker, text_rows)
                    && let Some(action) = translate(&InputEvent::Mouse(input))
                {
                    needs_render = dispatch(action, editor, &metrics).dirty;
                }
            }
            _ => {}
        }
        if quit {
            break;
        }
        if needs_render {
            sync_title(editor, &mut title)?;
            render::draw(editor, &metrics, prompt.as_deref())?;
        }
    }
    Ok(())
}

/// Resolve a key event to an `Action`, routing through the search prompt
/// when it is open and handling the host-chrome chords (ctrl+F search,
/// alt+F/C/+/- font cycling) that stand in for the toolbar.
fn key_action(editor: &Editor, prompt: &mut Option<String>, key: &KeyEvent) -> Option<Action> {
    if !matches!(key.kind, KeyEventKind::Press | KeyEventKind::Repeat) {
        return None;
    }
    if let Some(buf) = prompt.as_mut() {
        match key.code {
            KeyCode::Enter => {
                let needle = std::mem::take(buf);
                *prompt = None;
                if !needle.is_empty() {
                    return Some(Action::Search(needle));
                }
            }
            KeyCode::Esc => *prompt = None,
            KeyCode::Backspace => {
                buf.pop();
            }
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => buf.push(c),
            _ => {}
        }
        return None;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) && matches!(key.code, KeyCode::Char('f' | 'F'))
    {
        *prompt = Some(String::new());
        return None;
    }
    if key.modifiers.contains(KeyModifiers::ALT) {
        return match key.code {
            KeyCode::Char('f') => Some(Action::SetFontFamily(editor.style.family.next())),
            KeyCode::Char('c') => Some(Action::SetFontColor(editor.style.color.next())),
            KeyCode::Char('+' | '=') => Some(Action::SetFontSize(editor.style.size_pt.larger().get())),
            KeyCode::Char('-') => Some(Action::SetFontSize(editor.style.size_pt.smaller().get())),
            _ => None,
        };
    }
    events::map_key(key).and_then(|input| translate(&InputEvent::Key(input)))
}

fn sync_title(editor: &Editor, current: &mut String) -> Result<()> {
    let title = editor.title();
    if *current != title {
        terminal::set_title(&title)?;
        *current = title;
    }
    Ok(())
}

fn configure_logging() -> Option<WorkerGuard> {
    let file_appender = tracing_appender::rolling::never(".", "limn.log");
    let (writer, guard) = tracing_appender::non_blocking(file_appender);
    match tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(writer)
        .with_ansi(false)
        .try_init()
    {
        Ok(()) => Some(guard),
        Err(_) => None,
    }
}

fn install_panic_hook() {
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = terminal::restore();
        default_hook(info);
    }));
}
