//! Decoy row generation
//!
//! Decoys are drawn at random from the common pool and kept only if they give the
//! player something to work with: no more than `max_whites` white letters. The
//! sampling is bounded. When a cap level burns through its draw budget the cap is
//! relaxed by one, and once every word qualifies and the budget runs out again the
//! pool is declared exhausted.

use super::config::PuzzleConfig;
use super::error::PuzzleError;
use crate::core::{Guess, WORD_LEN, Word};
use rand::Rng;
use rand::prelude::IndexedRandom;
use rustc_hash::FxHashSet;
use tracing::warn;

/// Number of decoy rows in a puzzle
pub const DECOY_ROWS: usize = 5;

/// Result of a successful generation run
#[derive(Debug, Clone)]
pub struct Decoys {
    pub rows: [Guess; DECOY_ROWS],
    /// Candidates drawn in total, accepted or not
    pub draws: usize,
    /// White cap in force when the last row was accepted
    pub cap: usize,
}

/// Rejection sampler for decoy rows
pub struct DecoyGenerator<'a> {
    pool: &'a [Word],
    max_whites: usize,
    max_draws: usize,
}

impl<'a> DecoyGenerator<'a> {
    #[must_use]
    pub fn new(pool: &'a [Word], config: &PuzzleConfig) -> Self {
        Self {
            pool,
            max_whites: config.max_whites.min(WORD_LEN),
            max_draws: config.max_draws.max(1),
        }
    }

    /// Build five distinct decoy rows for `solution`
    ///
    /// # Errors
    /// Returns [`PuzzleError::DecoyPoolExhausted`] if the pool cannot supply five
    /// distinct words other than the solution within the draw budget.
    pub fn generate<R: Rng + ?Sized>(
        &self,
        solution: &Word,
        rng: &mut R,
    ) -> Result<Decoys, PuzzleError> {
        let mut rows: Vec<Guess> = Vec::with_capacity(DECOY_ROWS);
        let mut accepted: FxHashSet<Word> = FxHashSet::default();
        let mut cap = self.max_whites;
        let mut draws = 0;
        let mut draws_at_cap = 0;

        while rows.len() < DECOY_ROWS {
            if draws_at_cap >= self.max_draws {
                if cap >= WORD_LEN {
                    return Err(exhausted(rows.len()));
                }
                cap += 1;
                draws_at_cap = 0;
                warn!(cap, accepted = rows.len(), "relaxing white cap for decoy rows");
            }

            let Some(candidate) = self.pool.choose(rng) else {
                return Err(exhausted(0));
            };
            draws += 1;
            draws_at_cap += 1;

            if candidate == solution || accepted.contains(candidate) {
                continue;
            }

            let row = Guess::evaluate(candidate, solution);
            if row.whites() > cap {
                continue;
            }

            accepted.insert(*candidate);
            rows.push(row);
        }

        let rows: [Guess; DECOY_ROWS] = rows
            .try_into()
            .map_err(|rows: Vec<Guess>| exhausted(rows.len()))?;
        Ok(Decoys { rows, draws, cap })
    }
}

const fn exhausted(accepted: usize) -> PuzzleError {
    PuzzleError::DecoyPoolExhausted {
        accepted,
        required: DECOY_ROWS,
    }
}
