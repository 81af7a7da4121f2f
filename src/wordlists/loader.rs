//! Word list loading utilities
//!
//! Turns newline-separated text into `Word`s, either from files on disk or from the
//! embedded constants.

use super::DictionaryError;
use crate::core::Word;
use std::fs;
use std::path::Path;

/// Parse newline-separated word list text
///
/// Each line is trimmed and lowercased; anything that is not a five-letter ASCII
/// word is silently dropped.
///
/// # Examples
/// ```
/// use reverse_wordle::wordlists::loader::parse_words;
///
/// let words = parse_words("Crane\n  slate \nbanana\n\napple\n");
/// let texts: Vec<&str> = words.iter().map(|w| w.text()).collect();
/// assert_eq!(texts, ["crane", "slate", "apple"]);
/// ```
#[must_use]
pub fn parse_words(content: &str) -> Vec<Word> {
    content
        .lines()
        .filter_map(|line| Word::new(line.trim()).ok())
        .collect()
}

/// Load words from a file
///
/// # Errors
///
/// Returns [`DictionaryError::Unreadable`] if the file cannot be opened or is not
/// valid UTF-8.
///
/// # Examples
/// ```no_run
/// use reverse_wordle::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<Word>, DictionaryError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| DictionaryError::Unreadable {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(parse_words(&content))
}

/// Convert embedded string slice to Word vector
///
/// # Examples
/// ```
/// use reverse_wordle::wordlists::loader::words_from_slice;
/// use reverse_wordle::wordlists::COMMON_WORDS;
///
/// let words = words_from_slice(COMMON_WORDS);
/// assert_eq!(words.len(), COMMON_WORDS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice
        .iter()
        .filter_map(|&s| Word::new(s.trim()).ok())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn words_from_slice_converts_valid_words() {
        let input = &["crane", "slate", "irate"];
        let words = words_from_slice(input);

        assert_eq!(words.len(), 3);
        assert_eq!(words[0].text(), "crane");
        assert_eq!(words[1].text(), "slate");
        assert_eq!(words[2].text(), "irate");
    }

    #[test]
    fn words_from_slice_skips_invalid() {
        let input = &["crane", "toolong", "abc", "sl4te", "slate"];
        let words = words_from_slice(input);

        assert_eq!(words.len(), 2);
        assert_eq!(words[0].text(), "crane");
        assert_eq!(words[1].text(), "slate");
    }

    #[test]
    fn parse_words_trims_and_lowercases() {
        let words = parse_words("  CRANE\r\n\tSlate\t\n");
        assert_eq!(words.len(), 2);
        assert_eq!(words[0].text(), "crane");
        assert_eq!(words[1].text(), "slate");
    }

    #[test]
    fn parse_words_empty_input() {
        assert!(parse_words("").is_empty());
        assert!(parse_words("\n\n  \n").is_empty());
    }

    #[test]
    fn load_from_file_reads_words() {
        let path = std::env::temp_dir().join(format!(
            "reverse_wordle_loader_{}.txt",
            std::process::id()
        ));
        let mut file = fs::File::create(&path).unwrap();
        writeln!(file, "apple\nbananas\nGRAPE\nkiwi").unwrap();
        drop(file);

        let words = load_from_file(&path).unwrap();
        fs::remove_file(&path).unwrap();

        let texts: Vec<&str> = words.iter().map(Word::text).collect();
        assert_eq!(texts, ["apple", "grape"]);
    }

    #[test]
    fn load_from_missing_file_is_unreadable() {
        let result = load_from_file("/definitely/not/here/words.txt");
        assert!(matches!(result, Err(DictionaryError::Unreadable { .. })));
    }
}
