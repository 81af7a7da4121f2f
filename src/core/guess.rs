//! Letter coloring and evaluated guess rows
//!
//! The coloring follows Wordle rules with this puzzle's palette:
//! - Blue: right letter, right position
//! - Orange: letter is in the solution somewhere else
//! - White: letter absent, or more copies guessed than the solution holds

use super::word::{WORD_LEN, Word};
use std::fmt;

/// Feedback color for a single letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Blue,
    Orange,
    White,
}

impl Color {
    /// Lowercase name, as shown to players and transports
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Blue => "blue",
            Self::Orange => "orange",
            Self::White => "white",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Colors for one five-letter row
pub type Colors = [Color; WORD_LEN];

/// A word paired with its feedback against the solution
///
/// Only produced by [`Guess::evaluate`], so the colors always agree with the word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Guess {
    word: Word,
    colors: Colors,
}

impl Guess {
    /// Color `guess` against `solution`
    ///
    /// # Algorithm
    /// 1. First pass: exact matches turn blue and claim their solution slot
    /// 2. Second pass: each still-white letter claims the leftmost unclaimed
    ///    solution slot holding the same letter and turns orange
    ///
    /// Claiming slots caps blue + orange credit for a letter at its count in the
    /// solution, which is how duplicate letters are handled.
    ///
    /// # Examples
    /// ```
    /// use reverse_wordle::core::{Color, Guess, Word};
    ///
    /// let guess = Word::new("speed").unwrap();
    /// let solution = Word::new("abide").unwrap();
    /// let row = Guess::evaluate(&guess, &solution);
    ///
    /// // S P E E D against A B I D E: one E is misplaced, the second is excess
    /// use Color::{Orange, White};
    /// assert_eq!(row.colors(), &[White, White, Orange, White, Orange]);
    /// ```
    #[must_use]
    pub fn evaluate(guess: &Word, solution: &Word) -> Self {
        let g = guess.chars();
        let s = solution.chars();
        let mut colors = [Color::White; WORD_LEN];
        let mut matched = [false; WORD_LEN];

        // Allow: index pairs guess[i] with solution[i] and result[i]
        #[allow(clippy::needless_range_loop)]
        for i in 0..WORD_LEN {
            if g[i] == s[i] {
                colors[i] = Color::Blue;
                matched[i] = true;
            }
        }

        for i in 0..WORD_LEN {
            if colors[i] != Color::White {
                continue;
            }
            if let Some(j) = (0..WORD_LEN).find(|&j| !matched[j] && g[i] == s[j]) {
                colors[i] = Color::Orange;
                matched[j] = true;
            }
        }

        Self {
            word: *guess,
            colors,
        }
    }

    /// The guessed word
    #[inline]
    #[must_use]
    pub const fn word(&self) -> &Word {
        &self.word
    }

    /// Per-letter colors, in word order
    #[inline]
    #[must_use]
    pub const fn colors(&self) -> &Colors {
        &self.colors
    }

    /// Number of letters with the given color
    #[must_use]
    pub fn count(&self, color: Color) -> usize {
        self.colors.iter().filter(|&&c| c == color).count()
    }

    /// Number of white letters
    #[must_use]
    pub fn whites(&self) -> usize {
        self.count(Color::White)
    }

    /// True when every letter is blue
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.colors.iter().all(|&c| c == Color::Blue)
    }
}
