//! First-occurrence substring search over the document.

use limn_state::EditorState;
use tracing::debug;

/// Search the whole document for `needle`. On a hit the match becomes the
/// selection and the caret moves to the end of the match; on a miss the
/// status message reports it and the rest of the state is untouched.
/// Returns whether a match was found.
pub fn search(state: &mut EditorState, needle: &str) -> bool {
    if needle.is_empty() {
        return false;
    }
    match state.buffer.search(needle, 0) {
        Some(offset) => {
            let end = offset + needle.chars().count();
            state.select_range(offset, end);
            state.set_status(format!("match at offset {offset}"));
            debug!(target: "search", needle, offset, "search_hit");
            true
        }
        None => {
            state.set_status(format!("not found: {needle}"));
            debug!(target: "search", needle, "search_miss");
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use limn_text::Buffer;

    fn state(text: &str) -> EditorState {
        EditorState::new(Buffer::from_str(text).unwrap())
    }

    #[test]
    fn hit_selects_match_and_moves_caret() {
        let mut st = state("hello\nworld");
        assert!(search(&mut st, "world"));
        let span = st.selection().unwrap();
        assert_eq!((span.start, span.end), (6, 11));
        assert_eq!(st.caret_offset(), 11);
    }

    #[test]
    fn miss_reports_and_leaves_state() {
        let mut st = state("hello");
        st.set_caret(limn_text::Position::new(0, 3));
        assert!(!search(&mut st, "absent"));
        assert_eq!(st.caret_offset(), 3);
        assert_eq!(st.selection(), None);
        assert_eq!(st.status(), Some("not found: absent"));
    }

    #[test]
    fn empty_needle_is_ignored() {
        let mut st = state("hello");
        assert!(!search(&mut st, ""));
        assert_eq!(st.status(), None);
    }
}
