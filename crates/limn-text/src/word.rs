//! Word boundary helpers operating on a single line.
//!
//! These are pure functions over a line's text and char columns; they carry
//! no buffer or caret state. Word motion treats a line as alternating runs
//! of whitespace and non-whitespace; word selection expands over
//! alphanumerics only.

/// Column after the end of the run containing (or starting at) `column`,
/// scanning forward. Returns the line length when the run reaches the end.
pub fn next_word_boundary(line: &str, column: usize) -> usize {
    let chars: Vec<char> = line.chars().collect();
    let len = chars.len();
    if column >= len {
        return len;
    }
    let in_whitespace = chars[column].is_whitespace();
    let mut col = column;
    while col < len && chars[col].is_whitespace() == in_whitespace {
        col += 1;
    }
    col
}

/// Column at the start of the run ending just before `column`, scanning
/// backward. Column 0 is a fixed point.
pub fn prev_word_boundary(line: &str, column: usize) -> usize {
    let chars: Vec<char> = line.chars().collect();
    let mut col = column.min(chars.len());
    if col == 0 {
        return 0;
    }
    let in_whitespace = chars[col - 1].is_whitespace();
    while col > 0 && chars[col - 1].is_whitespace() == in_whitespace {
        col -= 1;
    }
    col
}

/// The `[start, end)` column span of the alphanumeric word around `column`.
/// On a non-word character the span is empty at `column`.
pub fn word_span_at(line: &str, column: usize) -> (usize, usize) {
    let chars: Vec<char> = line.chars().collect();
    let len = chars.len();
    let mut start = column.min(len);
    let mut end = start;
    while start > 0 && chars[start - 1].is_alphanumeric() {
        start -= 1;
    }
    while end < len && chars[end].is_alphanumeric() {
        end += 1;
    }
    (start, end)
}
