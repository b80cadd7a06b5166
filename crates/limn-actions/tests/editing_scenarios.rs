//! End-to-end editing scenarios through translate + dispatch.

mod common;

use common::{METRICS, editor_with};
use limn_actions::{Action, InputEvent, Key, KeyInput, MotionKind, dispatch, translate};
use limn_text::Position;
use pretty_assertions::assert_eq;

fn key(editor: &mut limn_actions::Editor, input: KeyInput) {
    if let Some(action) = translate(&InputEvent::Key(input)) {
        dispatch(action, editor, &METRICS);
    }
}

#[test]
fn typing_advances_caret_past_insertion() {
    let mut ed = editor_with("abc");
    ed.state.set_caret(Position::new(0, 1));
    key(&mut ed, KeyInput::plain(Key::Char('X')));
    assert_eq!(ed.state.buffer.text(), "aXbc");
    assert_eq!(ed.state.caret_offset(), 2);
}

#[test]
fn select_all_then_cut_moves_document_to_clipboard() {
    let mut ed = editor_with("hello\nworld");
    key(&mut ed, KeyInput::ctrl(Key::Char('a')));
    key(&mut ed, KeyInput::ctrl(Key::Char('x')));
    assert_eq!(ed.state.buffer.text(), "");
    assert_eq!(ed.clipboard.get_text().unwrap(), "hello\nworld");
    assert_eq!(ed.state.selection(), None);
}

#[test]
fn cut_of_leading_selection() {
    let mut ed = editor_with("hello world");
    ed.state.select_range(0, 5);
    key(&mut ed, KeyInput::ctrl(Key::Char('x')));
    assert_eq!(ed.state.buffer.text(), " world");
    assert_eq!(ed.clipboard.get_text().unwrap(), "hello");
    assert_eq!(ed.state.selection(), None);
}

#[test]
fn copy_then_paste_duplicates_selection() {
    let mut ed = editor_with("abc");
    ed.state.select_range(0, 3);
    key(&mut ed, KeyInput::ctrl(Key::Char('c')));
    ed.state.set_caret(Position::new(0, 3));
    key(&mut ed, KeyInput::ctrl(Key::Char('v')));
    assert_eq!(ed.state.buffer.text(), "abcabc");
    assert_eq!(ed.state.caret_offset(), 6);
}

#[test]
fn paste_with_empty_clipboard_leaves_document() {
    let mut ed = editor_with("abc");
    key(&mut ed, KeyInput::ctrl(Key::Char('v')));
    assert_eq!(ed.state.buffer.text(), "abc");
}

#[test]
fn enter_and_tab_insert_literally() {
    let mut ed = editor_with("ab");
    ed.state.set_caret(Position::new(0, 1));
    key(&mut ed, KeyInput::plain(Key::Enter));
    key(&mut ed, KeyInput::plain(Key::Tab));
    assert_eq!(ed.state.buffer.text(), "a\n\tb");
    assert_eq!(ed.state.caret, Position::new(1, 1));
}

#[test]
fn backspace_deletes_selection_first() {
    let mut ed = editor_with("hello world");
    ed.state.select_range(5, 11);
    key(&mut ed, KeyInput::plain(Key::Backspace));
    assert_eq!(ed.state.buffer.text(), "hello");
}

#[test]
fn word_motion_idempotent_at_document_start() {
    let mut ed = editor_with("foo bar");
    key(&mut ed, KeyInput::ctrl(Key::Left));
    key(&mut ed, KeyInput::ctrl(Key::Left));
    assert_eq!(ed.state.caret, Position::new(0, 0));
}

#[test]
fn mouse_place_drag_and_word_select() {
    let mut ed = editor_with("hello world\nsecond line");
    dispatch(Action::PlaceCaret { x: 6 * 8, y: 0 }, &mut ed, &METRICS);
    assert_eq!(ed.state.caret, Position::new(0, 6));
    dispatch(Action::DragSelect { x: 11 * 8, y: 0 }, &mut ed, &METRICS);
    let span = ed.state.selection().unwrap();
    assert_eq!((span.start, span.end), (6, 11));

    dispatch(Action::SelectWordAt { x: 8, y: 16 }, &mut ed, &METRICS);
    let span = ed.state.selection().unwrap();
    assert_eq!((span.start, span.end), (12, 18)); // "second"
    assert_eq!(ed.state.caret, Position::new(1, 0));
}

#[test]
fn caret_motion_scrolls_the_viewport() {
    let mut ed = editor_with("0\n1\n2\n3\n4\n5\n6\n7\n8\n9");
    for _ in 0..6 {
        dispatch(Action::Motion(MotionKind::Down), &mut ed, &METRICS);
    }
    assert_eq!(ed.state.caret.line, 6);
    assert_eq!(ed.viewport.first_line, 3); // 4 lines fit

    for _ in 0..6 {
        dispatch(Action::Motion(MotionKind::Up), &mut ed, &METRICS);
    }
    assert_eq!(ed.viewport.first_line, 0);
}

#[test]
fn insert_then_delete_restores_content() {
    let mut ed = editor_with("hello world");
    ed.state.set_caret(Position::new(0, 5));
    for c in "XYZ".chars() {
        key(&mut ed, KeyInput::plain(Key::Char(c)));
    }
    assert_eq!(ed.state.buffer.text(), "helloXYZ world");
    for _ in 0..3 {
        key(&mut ed, KeyInput::plain(Key::Backspace));
    }
    assert_eq!(ed.state.buffer.text(), "hello world");
    assert_eq!(ed.state.caret, Position::new(0, 5));
}

#[test]
fn font_actions_change_style_not_content() {
    use limn_config::{FontColor, FontFamily};
    let mut ed = editor_with("abc");
    dispatch(
        Action::SetFontFamily(FontFamily::CourierNew),
        &mut ed,
        &METRICS,
    );
    dispatch(Action::SetFontSize(18), &mut ed, &METRICS);
    dispatch(Action::SetFontColor(FontColor::Red), &mut ed, &METRICS);
    assert_eq!(ed.style.family, FontFamily::CourierNew);
    assert_eq!(ed.style.size_pt.get(), 18);
    assert_eq!(ed.style.color, FontColor::Red);
    assert_eq!(ed.state.buffer.text(), "abc");
}

#[test]
fn quit_action_requests_exit() {
    let mut ed = editor_with("");
    let result = dispatch(Action::Quit, &mut ed, &METRICS);
    assert!(result.quit);
}
