//! Core domain types for the puzzle
//!
//! Words, letter colors and the evaluator. Everything here is pure and has no
//! knowledge of sessions or word lists.

mod guess;
mod word;

pub use guess::{Color, Colors, Guess};
pub use word::{WORD_LEN, Word, WordError};
