//! The two immutable word sets a puzzle draws from

use super::loader::{load_from_file, words_from_slice};
use super::{ALL_WORDS, COMMON_WORDS};
use crate::core::Word;
use rustc_hash::FxHashSet;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

/// Startup failures of the dictionary store
///
/// Any of these means no puzzle can be served.
#[derive(Debug, Error)]
pub enum DictionaryError {
    #[error("cannot read word list {}", .path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("{list} word list has no five-letter words")]
    Empty { list: &'static str },
}

/// Every acceptable guess plus the pool decoy rows are drawn from
///
/// The common pool is meant to be a subset of the full set, but nothing
/// enforces it.
#[derive(Debug, Clone)]
pub struct Dictionary {
    all_words: Vec<Word>,
    all_index: FxHashSet<Word>,
    common_words: Vec<Word>,
}

impl Dictionary {
    /// Build a dictionary from already-parsed lists
    ///
    /// # Errors
    /// Returns [`DictionaryError::Empty`] if either list is empty.
    pub fn new(all_words: Vec<Word>, common_words: Vec<Word>) -> Result<Self, DictionaryError> {
        if all_words.is_empty() {
            return Err(DictionaryError::Empty { list: "all-words" });
        }
        if common_words.is_empty() {
            return Err(DictionaryError::Empty {
                list: "common-words",
            });
        }

        let all_index = all_words.iter().copied().collect();
        info!(
            all_words = all_words.len(),
            common_words = common_words.len(),
            "dictionary loaded"
        );

        Ok(Self {
            all_words,
            all_index,
            common_words,
        })
    }

    /// Dictionary built from the lists compiled into the binary
    ///
    /// # Errors
    /// Only fails if the embedded lists were built empty.
    pub fn embedded() -> Result<Self, DictionaryError> {
        Self::new(words_from_slice(ALL_WORDS), words_from_slice(COMMON_WORDS))
    }

    /// Load each list from a file, or from the embedded copy when no path is given
    ///
    /// # Errors
    /// Returns an error if a file is unreadable or either list ends up empty.
    pub fn load(all: Option<&Path>, common: Option<&Path>) -> Result<Self, DictionaryError> {
        let all_words = match all {
            Some(path) => load_from_file(path)?,
            None => words_from_slice(ALL_WORDS),
        };
        let common_words = match common {
            Some(path) => load_from_file(path)?,
            None => words_from_slice(COMMON_WORDS),
        };

        Self::new(all_words, common_words)
    }

    /// Every acceptable guess; solutions are drawn from here
    #[must_use]
    pub fn all_words(&self) -> &[Word] {
        &self.all_words
    }

    /// Candidate pool for decoy rows
    #[must_use]
    pub fn common_words(&self) -> &[Word] {
        &self.common_words
    }

    /// Membership test against the full word set
    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.all_index.contains(word)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(list: &[&str]) -> Vec<Word> {
        words_from_slice(list)
    }

    #[test]
    fn new_rejects_empty_lists() {
        let err = Dictionary::new(Vec::new(), words(&["crane"])).unwrap_err();
        assert!(matches!(err, DictionaryError::Empty { list: "all-words" }));

        let err = Dictionary::new(words(&["crane"]), Vec::new()).unwrap_err();
        assert!(matches!(
            err,
            DictionaryError::Empty {
                list: "common-words"
            }
        ));
    }

    #[test]
    fn contains_checks_full_set_only() {
        let dict = Dictionary::new(words(&["crane", "slate"]), words(&["apple"])).unwrap();
        assert!(dict.contains(&Word::new("crane").unwrap()));
        assert!(dict.contains(&Word::new("SLATE").unwrap()));
        assert!(!dict.contains(&Word::new("apple").unwrap()));
    }

    #[test]
    fn embedded_dictionary_loads() {
        let dict = Dictionary::embedded().unwrap();
        assert!(dict.all_words().len() >= dict.common_words().len());
        assert!(dict.common_words().len() > 5);
    }

    #[test]
    fn load_without_paths_matches_embedded() {
        let dict = Dictionary::load(None, None).unwrap();
        assert_eq!(dict.all_words().len(), ALL_WORDS.len());
        assert_eq!(dict.common_words().len(), COMMON_WORDS.len());
    }

    #[test]
    fn load_reports_missing_file() {
        let result = Dictionary::load(Some(Path::new("/no/such/allwords.txt")), None);
        assert!(matches!(result, Err(DictionaryError::Unreadable { .. })));
    }
}
