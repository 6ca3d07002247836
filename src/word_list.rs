//! `word_list` — Module to load and preprocess the raw dictionary text.
//!
//! This module is responsible for turning arbitrary dictionary text (one
//! word per line, or any text at all) into the normalized word sequence
//! the index is built from. Words are split on non-letter boundaries, so
//! punctuation, digits, and whitespace all act as separators and never
//! reach the index.
//!
//! The processing logic:
//! - The input is tokenized on any non-alphabetic character.
//! - All words are normalized to lowercase.
//! - Words of length ≤ 1 are dropped (they aren't useful answers).
//! - The final list is deduplicated and sorted by length first, then
//!   alphabetically.
//!
//! This module is designed to be **WASM-friendly** — no `std::fs` calls
//! are made unless we're on a native build. The public API provides:
//! - `parse_from_str(...)` — works everywhere, including WASM.
//! - `load_from_path(...)` — **native-only** convenience method to read
//!   from a file path.

/// Struct representing a processed, ready-to-index word list.
///
/// The `words` vector contains all valid words (tokenized, normalized,
/// deduplicated), already sorted by (length, alphabetical).
#[derive(Debug, Clone)]
pub struct WordList {
    /// List of lowercase words.
    /// Example: `["able", "acid", "acorn", ...]`
    pub words: Vec<String>,
}

impl WordList {
    /// Tokenize and normalize a raw word list from an in-memory string.
    ///
    /// This is **WASM-safe** because it doesn't touch the filesystem —
    /// you can pass text fetched via JavaScript `fetch()` or read from the
    /// File API directly into this function.
    pub fn parse_from_str(contents: &str) -> WordList {
        let mut words: Vec<String> = contents
            .split(|c: char| !c.is_alphabetic())
            .filter(|token| token.chars().count() > 1)
            .map(str::to_lowercase)
            .collect();

        // Sort alphabetically first, because `dedup()` only removes
        // *adjacent* duplicates.
        words.sort();
        words.dedup();

        // Then sort by length, then alphabetically, matching the order the
        // index groups words in.
        words.sort_by(|a, b| a.len().cmp(&b.len()).then_with(|| a.cmp(b)));

        WordList { words }
    }

    /// Native-only convenience method: read from a file path and parse.
    ///
    /// Not available in WebAssembly builds, because browsers cannot read
    /// files from arbitrary paths.
    ///
    /// # Errors
    ///
    /// Will return an `Error` if unable to read a file at `path`.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_from_path<P: AsRef<std::path::Path>>(path: P) -> std::io::Result<WordList> {
        let path_ref = path.as_ref();

        let data = std::fs::read_to_string(path_ref).map_err(|e| {
            std::io::Error::new(
                e.kind(),
                format!("failed to read word list from '{}': {}", path_ref.display(), e),
            )
        })?;

        Ok(Self::parse_from_str(&data))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_basic() {
        let input = "cat\ndog\nbird";
        let word_list = WordList::parse_from_str(input);

        assert_eq!(word_list.words, vec!["cat", "dog", "bird"]);
    }

    #[test]
    fn test_parse_splits_on_non_letters() {
        let input = "cat,dog;bird 42fish";
        let word_list = WordList::parse_from_str(input);

        assert_eq!(word_list.words, vec!["cat", "dog", "bird", "fish"]);
    }

    #[test]
    fn test_parse_drops_short_words() {
        let input = "a I at it";
        let word_list = WordList::parse_from_str(input);

        assert_eq!(word_list.words, vec!["at", "it"]);
    }

    #[test]
    fn test_parse_normalizes_to_lowercase() {
        let input = "CAT Dog BIRD";
        let word_list = WordList::parse_from_str(input);

        assert_eq!(word_list.words, vec!["cat", "dog", "bird"]);
    }

    #[test]
    fn test_parse_deduplicates() {
        let input = "cat CAT cat dog";
        let word_list = WordList::parse_from_str(input);

        assert_eq!(word_list.words, vec!["cat", "dog"]);
    }

    #[test]
    fn test_parse_sorts_by_length_then_alpha() {
        let input = "zebra dog apple cat ab";
        let word_list = WordList::parse_from_str(input);

        assert_eq!(word_list.words, vec!["ab", "cat", "dog", "apple", "zebra"]);
    }

    #[test]
    fn test_parse_empty_input() {
        let word_list = WordList::parse_from_str("");
        assert!(word_list.words.is_empty());
    }

    #[test]
    fn test_parse_punctuation_only() {
        let word_list = WordList::parse_from_str("... 123 !!");
        assert!(word_list.words.is_empty());
    }
}
