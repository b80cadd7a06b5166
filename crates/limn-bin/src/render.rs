//! Cell-based renderer.
//!
//! The viewport works in abstract pixels; here a "pixel" is one terminal
//! cell (`line_height == 1`, advance == display width), so the geometry the
//! viewport computes maps directly onto rows and columns. Selection is
//! shown in reverse video; the caret is the hardware cursor; the last row
//! is a reverse-video status bar.

use std::io::{Write, stdout};

use anyhow::Result;
use crossterm::cursor::{self, MoveTo};
use crossterm::queue;
use crossterm::style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor};
use crossterm::terminal::{Clear, ClearType};
use limn_actions::Editor;
use limn_config::FontColor;
use limn_view::FontMetrics;
use unicode_width::UnicodeWidthChar;

const PROMPT_LABEL: &str = "search: ";

/// Terminal cell metrics: one cell per narrow char, two for wide chars.
/// Tabs are drawn as a single space and measure accordingly.
#[derive(Debug, Clone, Copy)]
pub struct CellMetrics;

impl FontMetrics for CellMetrics {
    fn advance(&self, ch: char) -> u32 {
        match ch {
            '\t' => 1,
            _ => UnicodeWidthChar::width(ch).unwrap_or(1) as u32,
        }
    }
}

fn sanitize(text: &str) -> String {
    text.replace('\t', " ")
}

fn terminal_color(color: FontColor) -> Color {
    match color {
        FontColor::Black => Color::Reset, // default foreground; black is unreadable on dark terms
        FontColor::Red => Color::Red,
        FontColor::Blue => Color::Blue,
        FontColor::Green => Color::Green,
    }
}

pub fn draw(editor: &Editor, metrics: &CellMetrics, prompt: Option<&str>) -> Result<()> {
    let mut out = stdout();
    let buffer = &editor.state.buffer;
    let vp = &editor.viewport;

    queue!(out, cursor::Hide, Clear(ClearType::All))?;
    queue!(out, SetForegroundColor(terminal_color(editor.style.color)))?;
    for layout in vp.visible_lines(buffer) {
        queue!(
            out,
            MoveTo(0, layout.y as u16),
            Print(sanitize(&layout.text))
        )?;
    }

    if let Some(span) = editor.state.selection() {
        queue!(out, SetAttribute(Attribute::Reverse))?;
        for rect in vp.selection_rects(buffer, metrics, span.start, span.end) {
            let start = vp.position_at_px(buffer, metrics, rect.x, rect.y);
            let end = vp.position_at_px(buffer, metrics, rect.x + rect.width, rect.y);
            let line = buffer.line(start.line).unwrap_or_default();
            let selected: String = line
                .chars()
                .skip(start.column)
                .take(end.column.saturating_sub(start.column))
                .collect();
            if !selected.is_empty() {
                queue!(
                    out,
                    MoveTo(rect.x as u16, rect.y as u16),
                    Print(sanitize(&selected))
                )?;
            }
        }
        queue!(out, SetAttribute(Attribute::NoReverse))?;
    }
    queue!(out, ResetColor)?;

    draw_status(&mut out, editor, prompt)?;
    place_cursor(&mut out, editor, metrics, prompt)?;
    out.flush()?;
    Ok(())
}

fn draw_status(out: &mut impl Write, editor: &Editor, prompt: Option<&str>) -> Result<()> {
    let row = editor.viewport.height_px as u16;
    let width = editor.viewport.width_px as usize;
    let content = match prompt {
        Some(p) => format!("{PROMPT_LABEL}{p}"),
        None => {
            let caret = editor.state.caret;
            let dirty = if editor.state.dirty { " *" } else { "" };
            let style = editor.style;
            let message = editor.state.status().unwrap_or("");
            format!(
                " {}{}  {}:{}  {} {}pt {}  {}",
                editor.title(),
                dirty,
                caret.line + 1,
                caret.column + 1,
                style.family.as_str(),
                style.size_pt.get(),
                style.color.as_str(),
                message,
            )
        }
    };
    let mut bar: String = content.chars().take(width).collect();
    let pad = width.saturating_sub(bar.chars().count());
    bar.extend(std::iter::repeat_n(' ', pad));
    queue!(
        out,
        MoveTo(0, row),
        SetAttribute(Attribute::Reverse),
        Print(bar),
        SetAttribute(Attribute::NoReverse)
    )?;
    Ok(())
}

fn place_cursor(
    out: &mut impl Write,
    editor: &Editor,
    metrics: &CellMetrics,
    prompt: Option<&str>,
) -> Result<()> {
    match prompt {
        Some(p) => {
            let x = (PROMPT_LABEL.chars().count() + p.chars().count()) as u16;
            queue!(
                out,
                MoveTo(x, editor.viewport.height_px as u16),
                cursor::Show
            )?;
        }
        None => {
            if let Some((x, y)) =
                editor
                    .viewport
                    .caret_px(&editor.state.buffer, metrics, editor.state.caret)
            {
                queue!(out, MoveTo(x as u16, y as u16), cursor::Show)?;
            }
        }
    }
    Ok(())
}
