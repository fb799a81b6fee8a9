//! Word counting shared by every capped input.

/// Counts whitespace-delimited words.
///
/// Leading and trailing whitespace is ignored and runs of whitespace count
/// as a single separator, so `"a b  c"` is three words and `"   "` is zero.
pub fn count_words(text: &str) -> usize {
    text.split(is_separator).filter(|word| !word.is_empty()).count()
}

/// Unicode whitespace, plus U+FEFF (byte order mark) and minus U+0085 (NEL).
fn is_separator(c: char) -> bool {
    c == '\u{feff}' || (c.is_whitespace() && c != '\u{85}')
}
