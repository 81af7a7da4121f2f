//! One generated puzzle
//!
//! A `Puzzle` is immutable apart from the one-time clue flag, which is atomic so a
//! shared snapshot can be handed to any number of readers.

use super::generator::DECOY_ROWS;
use crate::core::{Colors, Guess, Word};
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, Ordering};

/// Rows on the board: the decoys plus the solution
pub const ROWS: usize = DECOY_ROWS + 1;

/// Which letters A-Z appear anywhere on the board
pub type PhantomScan = BTreeMap<char, bool>;

/// Solution, six evaluated rows and the clue flag
#[derive(Debug)]
pub struct Puzzle {
    solution: Word,
    rows: [Guess; ROWS],
    reveal_used: AtomicBool,
}

impl Puzzle {
    /// Assemble a puzzle; the last row is the solution evaluated against itself
    #[must_use]
    pub fn new(solution: Word, decoys: [Guess; DECOY_ROWS]) -> Self {
        let solved = Guess::evaluate(&solution, &solution);
        let rows = std::array::from_fn(|i| decoys.get(i).copied().unwrap_or(solved));

        Self {
            solution,
            rows,
            reveal_used: AtomicBool::new(false),
        }
    }

    #[must_use]
    pub const fn solution(&self) -> &Word {
        &self.solution
    }

    #[must_use]
    pub const fn rows(&self) -> &[Guess; ROWS] {
        &self.rows
    }

    #[must_use]
    pub fn row(&self, idx: usize) -> Option<&Guess> {
        self.rows.get(idx)
    }

    /// The color grid without any letters
    #[must_use]
    pub fn board_colors(&self) -> [Colors; ROWS] {
        self.rows.map(|row| *row.colors())
    }

    /// Whole-row check; an out-of-range row is simply wrong
    #[must_use]
    pub fn validate_row(&self, idx: usize, guess: &str) -> bool {
        self.row(idx).is_some_and(|row| row.word().matches(guess))
    }

    /// Single-cell check; out-of-range cells and non-letters are wrong
    #[must_use]
    pub fn validate_letter(&self, row: usize, col: usize, letter: char) -> bool {
        let Some(letter) = ascii_letter(letter) else {
            return false;
        };
        self.row(row)
            .and_then(|r| r.word().char_at(col))
            .is_some_and(|c| c == letter)
    }

    /// Occurrences of `letter` summed over all six row words
    #[must_use]
    pub fn count_letter(&self, letter: char) -> usize {
        count_letter_in(self.words(), letter)
    }

    /// Spend the one-time clue
    ///
    /// The flag is consumed before the index is checked, so a bad index on the
    /// first attempt still uses up the clue.
    pub fn take_clue(&self, idx: usize) -> Option<Guess> {
        if self.reveal_used.swap(true, Ordering::AcqRel) {
            return None;
        }
        self.row(idx).copied()
    }

    #[must_use]
    pub fn reveal_used(&self) -> bool {
        self.reveal_used.load(Ordering::Acquire)
    }

    #[must_use]
    pub fn phantom_scan(&self) -> PhantomScan {
        phantom_scan_of(self.words())
    }

    fn words(&self) -> impl Iterator<Item = &Word> {
        self.rows.iter().map(Guess::word)
    }
}

fn ascii_letter(letter: char) -> Option<u8> {
    letter
        .is_ascii_alphabetic()
        .then(|| letter.to_ascii_lowercase() as u8)
}

/// Total occurrences of a letter (case-insensitive) across some words
pub fn count_letter_in<'a>(words: impl IntoIterator<Item = &'a Word>, letter: char) -> usize {
    let Some(letter) = ascii_letter(letter) else {
        return 0;
    };
    words.into_iter().map(|w| w.count_of(letter)).sum()
}

/// Letter presence map with all 26 uppercase letters as keys
pub fn phantom_scan_of<'a>(words: impl IntoIterator<Item = &'a Word>) -> PhantomScan {
    let mut scan: PhantomScan = ('A'..='Z').map(|c| (c, false)).collect();
    for word in words {
        for &c in word.chars() {
            scan.insert(char::from(c.to_ascii_uppercase()), true);
        }
    }
    scan
}
