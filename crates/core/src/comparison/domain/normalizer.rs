/// Word-level tokenization for script comparison.
///
/// Normalized tokens drive alignment; raw tokens are what the user actually
/// said and are only used when rendering.
pub struct Normalizer;

impl Normalizer {
    /// Strips everything except ASCII letters and whitespace, lowercases and
    /// splits on whitespace runs.
    ///
    /// Non-ASCII letters are dropped (`"café"` becomes `"caf"`).
    pub fn normalize(text: &str) -> Vec<String> {
        let cleaned: String = text
            .chars()
            .filter(|&c| c.is_ascii_alphabetic() || is_separator(c))
            .map(|c| c.to_ascii_lowercase())
            .collect();

        split_words(&cleaned).map(str::to_string).collect()
    }

    /// Splits on whitespace only, keeping casing and punctuation.
    pub fn raw_tokens(text: &str) -> Vec<&str> {
        split_words(text).collect()
    }
}

/// Unicode whitespace plus the ASCII file/group/record/unit separators
/// (U+001C..=U+001F), which transcripts and pasted scripts also treat as word
/// breaks.
fn is_separator(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}

fn split_words(text: &str) -> impl Iterator<Item = &str> {
    text.split(is_separator).filter(|word| !word.is_empty())
}
