//! Player-side game model shared by the TUI and line front ends

mod board;

pub use board::{Board, Cell, Difficulty, LetterOutcome, SCRATCH_HISTORY};
