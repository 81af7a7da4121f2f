//! The single active puzzle and the operations players run against it
//!
//! A `Session` owns the dictionary and one current [`Puzzle`] snapshot. `new_game`
//! builds the replacement puzzle outside the lock and swaps it in whole, so a
//! concurrent reader sees either the old puzzle or the new one, never a mix.
//!
//! Every read operation starts a puzzle if none is active yet.

use super::config::PuzzleConfig;
use super::error::PuzzleError;
use super::generator::DecoyGenerator;
use super::state::{PhantomScan, Puzzle, ROWS};
use crate::core::{Colors, Guess, Word};
use crate::wordlists::Dictionary;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::{Arc, Mutex, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use tracing::debug;

/// Shared puzzle state for one player (or one process)
pub struct Session {
    dictionary: Dictionary,
    config: PuzzleConfig,
    current: RwLock<Option<Arc<Puzzle>>>,
    rng: Mutex<StdRng>,
}

impl Session {
    /// Create a session with no active puzzle
    ///
    /// Uses `config.seed` when set, otherwise seeds from the OS.
    #[must_use]
    pub fn new(dictionary: Dictionary, config: PuzzleConfig) -> Self {
        let rng = config
            .seed
            .map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);

        Self {
            dictionary,
            config,
            current: RwLock::new(None),
            rng: Mutex::new(rng),
        }
    }

    #[must_use]
    pub const fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    #[must_use]
    pub const fn config(&self) -> &PuzzleConfig {
        &self.config
    }

    /// Replace the current puzzle with a freshly generated one
    ///
    /// # Errors
    /// Returns [`PuzzleError::DecoyPoolExhausted`] if decoys cannot be built; the
    /// previous puzzle (if any) stays active in that case.
    pub fn new_game(&self) -> Result<(), PuzzleError> {
        let puzzle = Arc::new(self.generate()?);
        *self.write() = Some(puzzle);
        Ok(())
    }

    /// Color grid of the current puzzle, without letters
    ///
    /// # Errors
    /// Fails only if a puzzle has to be started and generation fails.
    pub fn board_colors(&self) -> Result<[Colors; ROWS], PuzzleError> {
        Ok(self.active()?.board_colors())
    }

    /// Check a whole-row reconstruction (case-insensitive)
    ///
    /// # Errors
    /// Fails only if a puzzle has to be started and generation fails.
    pub fn validate_row(&self, idx: usize, guess: &str) -> Result<bool, PuzzleError> {
        Ok(self.active()?.validate_row(idx, guess))
    }

    /// Check one letter at `(row, col)` (case-insensitive)
    ///
    /// # Errors
    /// Fails only if a puzzle has to be started and generation fails.
    pub fn validate_letter(
        &self,
        row: usize,
        col: usize,
        letter: char,
    ) -> Result<bool, PuzzleError> {
        Ok(self.active()?.validate_letter(row, col, letter))
    }

    /// Occurrences of `letter` across all six row words
    ///
    /// # Errors
    /// Fails only if a puzzle has to be started and generation fails.
    pub fn count_letter(&self, letter: char) -> Result<usize, PuzzleError> {
        Ok(self.active()?.count_letter(letter))
    }

    /// Reveal one row, once per puzzle
    ///
    /// # Errors
    /// Fails only if a puzzle has to be started and generation fails.
    pub fn reveal_clue(&self, idx: usize) -> Result<Option<Guess>, PuzzleError> {
        let puzzle = self.active()?;
        let clue = puzzle.take_clue(idx);
        debug!(idx, revealed = clue.is_some(), "clue requested");
        Ok(clue)
    }

    /// Feedback for any dictionary word against the solution
    ///
    /// # Errors
    /// Returns [`PuzzleError::InvalidWord`] if `guess` is not in the full word set.
    pub fn scratch(&self, guess: &str) -> Result<Guess, PuzzleError> {
        let word = Word::new(guess)
            .ok()
            .filter(|w| self.dictionary.contains(w))
            .ok_or_else(|| PuzzleError::InvalidWord(guess.to_string()))?;

        let puzzle = self.active()?;
        Ok(Guess::evaluate(&word, puzzle.solution()))
    }

    /// Which letters A-Z appear anywhere on the board
    ///
    /// # Errors
    /// Fails only if a puzzle has to be started and generation fails.
    pub fn phantom_scan(&self) -> Result<PhantomScan, PuzzleError> {
        Ok(self.active()?.phantom_scan())
    }

    /// The current puzzle, if one has been started
    #[must_use]
    pub fn snapshot(&self) -> Option<Arc<Puzzle>> {
        self.read().clone()
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.read().is_some()
    }

    fn active(&self) -> Result<Arc<Puzzle>, PuzzleError> {
        if let Some(puzzle) = self.snapshot() {
            return Ok(puzzle);
        }

        let fresh = Arc::new(self.generate()?);
        // Another caller may have started a puzzle while this one was generating
        let mut slot = self.write();
        Ok(Arc::clone(slot.get_or_insert(fresh)))
    }

    fn generate(&self) -> Result<Puzzle, PuzzleError> {
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);

        let all = self.dictionary.all_words();
        let solution = all[rng.random_range(0..all.len())];

        let decoys = DecoyGenerator::new(self.dictionary.common_words(), &self.config)
            .generate(&solution, &mut *rng)?;
        debug!(draws = decoys.draws, cap = decoys.cap, "puzzle generated");

        Ok(Puzzle::new(solution, decoys.rows))
    }

    // Snapshots are swapped whole, so a poisoned lock never guards a torn value
    fn read(&self) -> RwLockReadGuard<'_, Option<Arc<Puzzle>>> {
        self.current.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Option<Arc<Puzzle>>> {
        self.current.write().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Color;
    use crate::wordlists::loader::words_from_slice;

    fn small_session(seed: u64) -> Session {
        let all = words_from_slice(&[
            "crane", "slate", "plate", "stale", "least", "apple", "crate", "trace",
        ]);
        let common = words_from_slice(&["crane", "slate", "plate", "stale", "least", "crate"]);
        let dictionary = Dictionary::new(all, common).unwrap();
        Session::new(dictionary, PuzzleConfig::default().with_seed(seed))
    }

    #[test]
    fn session_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Session>();
    }

    #[test]
    fn starts_inactive_then_lazily_starts() {
        let session = small_session(1);
        assert!(!session.is_active());

        let colors = session.board_colors().unwrap();
        assert!(session.is_active());
        assert_eq!(colors[5], [Color::Blue; 5]);
    }

    #[test]
    fn new_game_replaces_snapshot() {
        let session = small_session(2);
        session.new_game().unwrap();
        let first = session.snapshot().unwrap();
        session.new_game().unwrap();
        let second = session.snapshot().unwrap();
        assert!(!Arc::ptr_eq(&first, &second));
    }

    #[test]
    fn lazy_start_keeps_existing_puzzle() {
        let session = small_session(3);
        session.new_game().unwrap();
        let before = session.snapshot().unwrap();
        session.count_letter('a').unwrap();
        assert!(Arc::ptr_eq(&before, &session.snapshot().unwrap()));
    }

    #[test]
    fn scratch_rejects_unknown_words() {
        let session = small_session(4);
        assert_eq!(
            session.scratch("zzzzz"),
            Err(PuzzleError::InvalidWord("zzzzz".to_string()))
        );
        assert_eq!(
            session.scratch("toolong"),
            Err(PuzzleError::InvalidWord("toolong".to_string()))
        );
        // Rejection does not start a puzzle
        assert!(!session.is_active());
    }

    #[test]
    fn scratch_solution_is_all_blue() {
        let session = small_session(5);
        session.new_game().unwrap();
        let solution = *session.snapshot().unwrap().solution();

        let row = session.scratch(&solution.text().to_uppercase()).unwrap();
        assert!(row.is_solved());
        assert_eq!(row.word(), &solution);
    }

    #[test]
    fn reveal_resets_with_new_game() {
        let session = small_session(6);
        session.new_game().unwrap();
        assert!(session.reveal_clue(0).unwrap().is_some());
        assert!(session.reveal_clue(0).unwrap().is_none());

        session.new_game().unwrap();
        assert!(session.reveal_clue(9).unwrap().is_none());
        assert!(session.reveal_clue(0).unwrap().is_none());

        session.new_game().unwrap();
        assert!(session.reveal_clue(5).unwrap().is_some());
    }

    #[test]
    fn exhausted_pool_keeps_previous_puzzle() {
        let all = words_from_slice(&["crane", "slate"]);
        let common = words_from_slice(&["crane"]);
        let dictionary = Dictionary::new(all, common).unwrap();
        let session = Session::new(
            dictionary,
            PuzzleConfig::default().with_seed(1).with_max_draws(10),
        );

        assert!(matches!(
            session.new_game(),
            Err(PuzzleError::DecoyPoolExhausted { .. })
        ));
        assert!(!session.is_active());
        assert!(session.phantom_scan().is_err());
    }
}
