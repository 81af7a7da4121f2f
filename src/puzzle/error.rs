//! Errors surfaced by puzzle operations

use thiserror::Error;

/// Recoverable failures of puzzle operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PuzzleError {
    /// Scratch was given something outside the full word set
    #[error("'{0}' is not in the dictionary")]
    InvalidWord(String),

    /// The common pool could not supply enough decoys even with the cap fully relaxed
    #[error("decoy pool exhausted: only {accepted} of {required} decoy rows could be built")]
    DecoyPoolExhausted { accepted: usize, required: usize },
}
