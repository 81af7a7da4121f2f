//! Reconstruction progress for one player
//!
//! The engine only answers questions; the board remembers what the player has
//! already uncovered, how many tries each cell has left, and which one-time tools
//! are spent.

use crate::core::{Colors, Guess, WORD_LEN, Word};
use crate::puzzle::{PhantomScan, PuzzleError, ROWS, Session};
use std::collections::VecDeque;

/// Scratch rows kept for display
pub const SCRATCH_HISTORY: usize = 7;

/// How forgiving per-cell letter guessing is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Difficulty {
    #[default]
    Standard,
    Forgiving,
}

impl Difficulty {
    /// Letter attempts allowed per cell
    #[must_use]
    pub const fn max_tries(self) -> usize {
        match self {
            Self::Standard => 3,
            Self::Forgiving => 5,
        }
    }

    /// Parse a difficulty name, defaulting to standard
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name.to_lowercase().as_str() {
            "forgiving" | "easy" => Self::Forgiving,
            _ => Self::Standard,
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Forgiving => "forgiving",
        }
    }
}

/// What the player knows about one cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Hidden { tries_left: usize },
    Revealed(u8),
}

impl Cell {
    #[must_use]
    pub const fn letter(self) -> Option<u8> {
        match self {
            Self::Revealed(c) => Some(c),
            Self::Hidden { .. } => None,
        }
    }

    #[must_use]
    pub const fn is_locked(self) -> bool {
        matches!(self, Self::Hidden { tries_left: 0 })
    }
}

/// Result of guessing a single cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LetterOutcome {
    Correct,
    Wrong { tries_left: usize },
    Locked,
    AlreadyRevealed,
    OutOfRange,
}

/// Player board layered on a shared session
pub struct Board<'a> {
    session: &'a Session,
    difficulty: Difficulty,
    colors: [Colors; ROWS],
    cells: [[Cell; WORD_LEN]; ROWS],
    clue_used: bool,
    scan: Option<PhantomScan>,
    scratch: VecDeque<Guess>,
}

impl<'a> Board<'a> {
    /// Start a new puzzle on `session` and an empty board for it
    ///
    /// # Errors
    /// Returns an error if the puzzle cannot be generated.
    pub fn new(session: &'a Session, difficulty: Difficulty) -> Result<Self, PuzzleError> {
        session.new_game()?;
        let colors = session.board_colors()?;

        Ok(Self {
            session,
            difficulty,
            colors,
            cells: fresh_cells(difficulty),
            clue_used: false,
            scan: None,
            scratch: VecDeque::with_capacity(SCRATCH_HISTORY),
        })
    }

    /// Replace the puzzle and forget all progress
    ///
    /// # Errors
    /// Returns an error if the new puzzle cannot be generated; the board is left
    /// unchanged in that case.
    pub fn new_game(&mut self) -> Result<(), PuzzleError> {
        self.session.new_game()?;
        self.colors = self.session.board_colors()?;
        self.cells = fresh_cells(self.difficulty);
        self.clue_used = false;
        self.scan = None;
        self.scratch.clear();
        Ok(())
    }

    #[must_use]
    pub const fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    #[must_use]
    pub const fn colors(&self) -> &[Colors; ROWS] {
        &self.colors
    }

    #[must_use]
    pub fn cell(&self, row: usize, col: usize) -> Option<Cell> {
        self.cells.get(row)?.get(col).copied()
    }

    /// Guess the letter in one cell, spending a try when wrong
    ///
    /// # Errors
    /// Only fails if the session has to regenerate its puzzle and cannot.
    pub fn guess_letter(
        &mut self,
        row: usize,
        col: usize,
        letter: char,
    ) -> Result<LetterOutcome, PuzzleError> {
        let Some(cell) = self.cells.get_mut(row).and_then(|r| r.get_mut(col)) else {
            return Ok(LetterOutcome::OutOfRange);
        };
        let tries_left = match *cell {
            Cell::Revealed(_) => return Ok(LetterOutcome::AlreadyRevealed),
            Cell::Hidden { tries_left: 0 } => return Ok(LetterOutcome::Locked),
            Cell::Hidden { tries_left } => tries_left,
        };

        if self.session.validate_letter(row, col, letter)? {
            *cell = Cell::Revealed(letter.to_ascii_lowercase() as u8);
            Ok(LetterOutcome::Correct)
        } else {
            let tries_left = tries_left - 1;
            *cell = Cell::Hidden { tries_left };
            Ok(LetterOutcome::Wrong { tries_left })
        }
    }

    /// Guess a whole row; a correct guess uncovers every cell in it
    ///
    /// # Errors
    /// Only fails if the session has to regenerate its puzzle and cannot.
    pub fn guess_row(&mut self, row: usize, guess: &str) -> Result<bool, PuzzleError> {
        if !self.session.validate_row(row, guess)? {
            return Ok(false);
        }
        if let Ok(word) = Word::new(guess) {
            self.uncover_row(row, &word);
        }
        Ok(true)
    }

    /// Spend the one-time clue on `row`
    ///
    /// Returns `None` if the clue was already used or `row` is out of range.
    ///
    /// # Errors
    /// Only fails if the session has to regenerate its puzzle and cannot.
    pub fn use_clue(&mut self, row: usize) -> Result<Option<Guess>, PuzzleError> {
        if self.clue_used {
            return Ok(None);
        }
        self.clue_used = true;

        let clue = self.session.reveal_clue(row)?;
        if let Some(guess) = &clue {
            self.uncover_row(row, guess.word());
        }
        Ok(clue)
    }

    #[must_use]
    pub const fn clue_used(&self) -> bool {
        self.clue_used
    }

    /// Run the phantom scan once; later calls keep the first result
    ///
    /// Returns `false` if the scan had already been used.
    ///
    /// # Errors
    /// Only fails if the session has to regenerate its puzzle and cannot.
    pub fn phantom_scan(&mut self) -> Result<bool, PuzzleError> {
        if self.scan.is_some() {
            return Ok(false);
        }
        self.scan = Some(self.session.phantom_scan()?);
        Ok(true)
    }

    #[must_use]
    pub const fn scan(&self) -> Option<&PhantomScan> {
        self.scan.as_ref()
    }

    /// How many times a letter appears on the whole board
    ///
    /// # Errors
    /// Only fails if the session has to regenerate its puzzle and cannot.
    pub fn count_letter(&self, letter: char) -> Result<usize, PuzzleError> {
        self.session.count_letter(letter)
    }

    /// Try a word against the solution and keep it in the scratch history
    ///
    /// # Errors
    /// Returns [`PuzzleError::InvalidWord`] for words outside the dictionary.
    pub fn scratch(&mut self, guess: &str) -> Result<Guess, PuzzleError> {
        let row = self.session.scratch(guess)?;
        if self.scratch.len() == SCRATCH_HISTORY {
            self.scratch.pop_front();
        }
        self.scratch.push_back(row);
        Ok(row)
    }

    /// Scratch rows, oldest first
    pub fn scratch_rows(&self) -> impl Iterator<Item = &Guess> {
        self.scratch.iter()
    }

    /// Number of cells uncovered so far
    #[must_use]
    pub fn revealed(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|cell| cell.letter().is_some())
            .count()
    }

    /// True when every cell on the board is uncovered
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.revealed() == ROWS * WORD_LEN
    }

    fn uncover_row(&mut self, row: usize, word: &Word) {
        if let Some(cells) = self.cells.get_mut(row) {
            for (cell, &c) in cells.iter_mut().zip(word.chars()) {
                *cell = Cell::Revealed(c);
            }
        }
    }
}

fn fresh_cells(difficulty: Difficulty) -> [[Cell; WORD_LEN]; ROWS] {
    [[Cell::Hidden {
        tries_left: difficulty.max_tries(),
    }; WORD_LEN]; ROWS]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::puzzle::PuzzleConfig;
    use crate::wordlists::Dictionary;
    use crate::wordlists::loader::words_from_slice;

    fn session() -> Session {
        let all = words_from_slice(&[
            "crane", "slate", "plate", "stale", "least", "crate", "apple",
        ]);
        let common = words_from_slice(&["crane", "slate", "plate", "stale", "least", "crate"]);
        let dictionary = Dictionary::new(all, common).unwrap();
        Session::new(dictionary, PuzzleConfig::default().with_seed(17))
    }

    fn row_word(session: &Session, row: usize) -> Word {
        *session.snapshot().unwrap().rows()[row].word()
    }

    fn wrong_letter(word: &Word, col: usize) -> char {
        let actual = word.chars()[col];
        if actual == b'z' { 'q' } else { 'z' }
    }

    #[test]
    fn difficulty_tries() {
        assert_eq!(Difficulty::Standard.max_tries(), 3);
        assert_eq!(Difficulty::Forgiving.max_tries(), 5);
        assert_eq!(Difficulty::from_name("Forgiving"), Difficulty::Forgiving);
        assert_eq!(Difficulty::from_name("whatever"), Difficulty::Standard);
    }

    #[test]
    fn new_board_is_hidden() {
        let session = session();
        let board = Board::new(&session, Difficulty::Standard).unwrap();
        assert_eq!(board.revealed(), 0);
        assert!(!board.is_solved());
        assert_eq!(board.cell(0, 0), Some(Cell::Hidden { tries_left: 3 }));
        assert_eq!(board.cell(6, 0), None);
        assert_eq!(board.colors(), &session.board_colors().unwrap());
    }

    #[test]
    fn correct_letter_reveals_cell() {
        let session = session();
        let mut board = Board::new(&session, Difficulty::Standard).unwrap();
        let word = row_word(&session, 2);
        let letter = char::from(word.chars()[1]).to_ascii_uppercase();

        assert_eq!(board.guess_letter(2, 1, letter).unwrap(), LetterOutcome::Correct);
        assert_eq!(board.cell(2, 1), Some(Cell::Revealed(word.chars()[1])));
        assert_eq!(
            board.guess_letter(2, 1, letter).unwrap(),
            LetterOutcome::AlreadyRevealed
        );
    }

    #[test]
    fn wrong_letters_lock_cell() {
        let session = session();
        let mut board = Board::new(&session, Difficulty::Standard).unwrap();
        let word = row_word(&session, 0);
        let wrong = wrong_letter(&word, 3);

        assert_eq!(
            board.guess_letter(0, 3, wrong).unwrap(),
            LetterOutcome::Wrong { tries_left: 2 }
        );
        board.guess_letter(0, 3, wrong).unwrap();
        assert_eq!(
            board.guess_letter(0, 3, wrong).unwrap(),
            LetterOutcome::Wrong { tries_left: 0 }
        );
        assert!(board.cell(0, 3).unwrap().is_locked());

        let right = char::from(word.chars()[3]);
        assert_eq!(board.guess_letter(0, 3, right).unwrap(), LetterOutcome::Locked);
        assert_eq!(board.guess_letter(0, 5, right).unwrap(), LetterOutcome::OutOfRange);
    }

    #[test]
    fn row_guess_uncovers_row() {
        let session = session();
        let mut board = Board::new(&session, Difficulty::Forgiving).unwrap();
        let word = row_word(&session, 5);

        assert!(!board.guess_row(5, "zzzzz").unwrap());
        assert!(board.guess_row(5, &word.text().to_uppercase()).unwrap());
        assert_eq!(board.revealed(), WORD_LEN);
        assert!(!board.guess_row(6, word.text()).unwrap());
    }

    #[test]
    fn solving_every_row_solves_board() {
        let session = session();
        let mut board = Board::new(&session, Difficulty::Standard).unwrap();
        for row in 0..ROWS {
            let word = row_word(&session, row);
            assert!(board.guess_row(row, word.text()).unwrap());
        }
        assert!(board.is_solved());
    }

    #[test]
    fn clue_is_spent_once_per_board() {
        let session = session();
        let mut board = Board::new(&session, Difficulty::Standard).unwrap();

        let clue = board.use_clue(1).unwrap().unwrap();
        assert_eq!(clue.word(), &row_word(&session, 1));
        assert!(board.clue_used());
        assert_eq!(board.revealed(), WORD_LEN);
        assert!(board.use_clue(2).unwrap().is_none());

        board.new_game().unwrap();
        assert!(!board.clue_used());
        assert_eq!(board.revealed(), 0);
        assert!(board.use_clue(2).unwrap().is_some());
    }

    #[test]
    fn phantom_scan_runs_once() {
        let session = session();
        let mut board = Board::new(&session, Difficulty::Standard).unwrap();
        assert!(board.scan().is_none());
        assert!(board.phantom_scan().unwrap());
        assert_eq!(board.scan().map(PhantomScan::len), Some(26));
        assert!(!board.phantom_scan().unwrap());
    }

    #[test]
    fn scratch_history_is_bounded() {
        let session = session();
        let mut board = Board::new(&session, Difficulty::Standard).unwrap();

        assert!(board.scratch("zzzzz").is_err());
        for _ in 0..SCRATCH_HISTORY + 3 {
            board.scratch("apple").unwrap();
        }
        board.scratch("crane").unwrap();
        assert_eq!(board.scratch_rows().count(), SCRATCH_HISTORY);
        assert_eq!(
            board.scratch_rows().last().map(|g| g.word().text()),
            Some("crane")
        );
    }
}
