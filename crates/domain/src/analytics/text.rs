// crates/domain/src/analytics/text.rs
use crate::value_objects::{LineCount, WordCount};

const BYTE_ORDER_MARK: char = '\u{feff}';

fn is_separator(c: char) -> bool {
    c.is_whitespace() || c == BYTE_ORDER_MARK
}

/// Tokens between runs of whitespace. A byte order mark separates too.
fn words(text: &str) -> impl Iterator<Item = &str> {
    text.split(is_separator).filter(|word| !word.is_empty())
}

/// Counts whitespace-delimited tokens. Punctuation stays attached to its token.
pub fn count_words(text: &str) -> WordCount {
    WordCount::new(words(text).count())
}

/// Returns the first token with the greatest length in `char`s.
///
/// Ties keep the earlier token. Text without tokens yields `""`.
pub fn find_longest_word(text: &str) -> &str {
    let mut longest = "";
    let mut longest_len = 0;
    for word in words(text) {
        let len = word.chars().count();
        if len > longest_len {
            longest = word;
            longest_len = len;
        }
    }
    longest
}

/// Number of `\n`-separated segments. A trailing newline opens one more
/// (empty) segment, so `"a\n"` has two lines; empty text has none.
pub fn count_lines(text: &str) -> LineCount {
    if text.is_empty() {
        return LineCount::ZERO;
    }
    LineCount::new(bytecount::count(text.as_bytes(), b'\n') + 1)
}
