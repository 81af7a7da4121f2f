//! Word lists for the puzzle
//!
//! Embedded default lists, the on-disk loader and the [`Dictionary`] store built
//! from them at startup.

mod dictionary;
mod embedded;
pub mod loader;

pub use dictionary::{Dictionary, DictionaryError};
pub use embedded::{ALL_WORDS, ALL_WORDS_COUNT, COMMON_WORDS, COMMON_WORDS_COUNT};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_words_count_matches_const() {
        assert_eq!(ALL_WORDS.len(), ALL_WORDS_COUNT);
    }

    #[test]
    fn common_words_count_matches_const() {
        assert_eq!(COMMON_WORDS.len(), COMMON_WORDS_COUNT);
    }

    #[test]
    fn embedded_words_are_valid() {
        for &word in ALL_WORDS.iter().chain(COMMON_WORDS) {
            assert_eq!(word.len(), 5, "Word '{word}' is not 5 letters");
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "Word '{word}' contains non-lowercase chars"
            );
        }
    }

    #[test]
    fn common_subset_of_all() {
        let all: std::collections::HashSet<_> = ALL_WORDS.iter().collect();

        for word in COMMON_WORDS {
            assert!(all.contains(word), "Common word '{word}' not in full list");
        }
    }
}
