//! Pure text wrapping utilities and dimensional constants for the text area.
//!
//! These are stateless helpers with no dependency on `BoundedTextArea` or `CursorState`.

use std::borrow::Cow;

/// Border (2) + horizontal padding (2) consumed by the bordered block
pub(super) const HORIZONTAL_OVERHEAD: u16 = 4;
/// Top + bottom borders consumed vertically
pub(super) const VERTICAL_OVERHEAD: u16 = 2;
/// Rows shown even when the box is empty
pub(super) const MIN_VISIBLE_LINES: u16 = 3;
/// Offset from area edge to the first text column (border + padding)
pub(super) const CONTENT_OFFSET_X: u16 = 2;
/// Offset from area edge to the first text row (border)
pub(super) const CONTENT_OFFSET_Y: u16 = 1;

/// Build textwrap options configured for the text area inner width.
pub(super) fn wrap_options(inner_width: u16) -> textwrap::Options<'static> {
    textwrap::Options::new(inner_width as usize)
        .break_words(true)
        .word_separator(textwrap::WordSeparator::AsciiSpace)
}

/// Calculate the inner content width after subtracting border/padding overhead.
/// Returns 0 if the area is too narrow.
pub(super) fn inner_width(content_width: u16) -> u16 {
    content_width.saturating_sub(HORIZONTAL_OVERHEAD)
}

/// Wrap `text` into display lines, always returning at least one line.
///
/// A trailing newline yields a trailing empty line even when textwrap
/// doesn't represent it, so the cursor has a row to sit on.
pub(super) fn wrapped_lines(text: &str, width: u16) -> Vec<String> {
    if width == 0 || text.is_empty() {
        return vec![String::new()];
    }

    let mut lines: Vec<String> = textwrap::wrap(text, wrap_options(width))
        .into_iter()
        .map(Cow::into_owned)
        .collect();

    if lines.is_empty() {
        lines.push(String::new());
    }
    if text.ends_with('\n') && !lines.last().is_some_and(|l| l.is_empty()) {
        lines.push(String::new());
    }

    lines
}

/// Count wrapped lines for the given text.
pub(super) fn wrap_line_count(text: &str, width: u16) -> u16 {
    u16::try_from(wrapped_lines(text, width).len()).unwrap_or(u16::MAX)
}

/// Find the byte offset of the previous character boundary before `pos` in `text`.
pub(crate) fn prev_char_boundary(text: &str, pos: usize) -> usize {
    text[..pos]
        .char_indices()
        .next_back()
        .map(|(i, _)| i)
        .unwrap_or(0)
}

/// Find the byte offset of the next character boundary after `pos` in `text`.
pub(crate) fn next_char_boundary(text: &str, pos: usize) -> usize {
    text[pos..]
        .char_indices()
        .nth(1)
        .map(|(i, _)| pos + i)
        .unwrap_or(text.len())
}

/// Whether a character is a "word" character (alphanumeric or underscore).
fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Find the byte offset of the previous word boundary before `pos` in `text`.
///
/// Moves backwards: first skips any non-word characters (spaces, punctuation),
/// then skips word characters until reaching a non-word character or the start.
/// This matches Emacs/readline `backward-word` behavior.
pub(crate) fn prev_word_boundary(text: &str, pos: usize) -> usize {
    let before = &text[..pos];
    let mut chars = before.char_indices().rev().peekable();

    // Phase 1: skip non-word characters
    while chars.peek().is_some_and(|&(_, c)| !is_word_char(c)) {
        chars.next();
    }

    // Phase 2: skip word characters
    let mut boundary = 0;
    while let Some(&(i, c)) = chars.peek() {
        if !is_word_char(c) {
            boundary = i + c.len_utf8();
            break;
        }
        boundary = i;
        chars.next();
    }

    boundary
}

/// Find the byte offset of the next word boundary after `pos` in `text`.
///
/// Moves forward: first skips any non-word characters, then skips word
/// characters until reaching a non-word character or the end.
/// This matches Emacs/readline `forward-word` behavior.
pub(crate) fn next_word_boundary(text: &str, pos: usize) -> usize {
    let after = &text[pos..];
    let mut chars = after.char_indices().peekable();

    // Phase 1: skip non-word characters
    while chars.peek().is_some_and(|&(_, c)| !is_word_char(c)) {
        chars.next();
    }

    // Phase 2: skip word characters
    while let Some(&(_, c)) = chars.peek() {
        if !is_word_char(c) {
            break;
        }
        chars.next();
    }

    // Return byte offset relative to the full string
    match chars.peek() {
        Some(&(i, _)) => pos + i,
        None => text.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // -- wrap_line_count -------------------------------------------------

    #[test]
    fn wrap_line_count_empty_string() {
        assert_eq!(wrap_line_count("", 80), 1);
    }

    #[test]
    fn wrap_line_count_zero_width() {
        assert_eq!(wrap_line_count("hello", 0), 1);
    }

    #[test]
    fn wrap_line_count_wraps_long_text() {
        // 10 chars into a 5-wide column -> 2 lines
        assert_eq!(wrap_line_count("aaaaaaaaaa", 5), 2);
    }

    #[test]
    fn wrap_line_count_trailing_newline_adds_line() {
        assert_eq!(wrap_line_count("hello\n", 80), 2);
    }

    #[test]
    fn wrap_line_count_explicit_newlines() {
        assert_eq!(wrap_line_count("a\nb\nc", 80), 3);
    }

    #[test]
    fn wrapped_lines_break_on_spaces() {
        assert_eq!(wrapped_lines("one two three", 7), vec!["one two", "three"]);
    }

    // -- char / word boundaries -------------------------------------------

    #[test]
    fn char_boundaries_step_over_multibyte() {
        // "naïve": 'ï' is two bytes starting at offset 2
        let s = "naïve";
        assert_eq!(next_char_boundary(s, 2), 4);
        assert_eq!(prev_char_boundary(s, 4), 2);
        assert_eq!(prev_char_boundary(s, 1), 0);
        assert_eq!(next_char_boundary(s, s.len() - 1), s.len());
    }

    #[test]
    fn word_left_skips_spacing_then_word() {
        assert_eq!(prev_word_boundary("dont like", 9), 5);
        assert_eq!(prev_word_boundary("dont   like", 7), 0);
        assert_eq!(prev_word_boundary("dont", 0), 0);
    }

    #[test]
    fn word_left_stops_at_punctuation() {
        assert_eq!(prev_word_boundary("it.works", 8), 3);
    }

    #[test]
    fn word_right_skips_spacing_then_word() {
        assert_eq!(next_word_boundary("dont like", 0), 4);
        assert_eq!(next_word_boundary("dont   like", 4), 11);
        assert_eq!(next_word_boundary("dont", 4), 4);
    }

    #[test]
    fn word_right_handles_unicode() {
        // "café" ends at byte 5
        assert_eq!(next_word_boundary("café au lait", 0), 5);
    }
}
