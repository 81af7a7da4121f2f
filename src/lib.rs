//! Reverse Wordle
//!
//! A puzzle where the six rows of a finished Wordle board are shown as colors only
//! and the player rebuilds the letters behind them.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use reverse_wordle::core::{Guess, Word};
//! use reverse_wordle::puzzle::{PuzzleConfig, Session};
//! use reverse_wordle::wordlists::Dictionary;
//!
//! // Score one guess
//! let guess = Word::new("crane").unwrap();
//! let solution = Word::new("slate").unwrap();
//! let row = Guess::evaluate(&guess, &solution);
//! println!("{} blue", row.count(reverse_wordle::core::Color::Blue));
//!
//! // Play against a generated puzzle
//! let session = Session::new(Dictionary::embedded().unwrap(), PuzzleConfig::default());
//! let colors = session.board_colors().unwrap();
//! assert_eq!(colors.len(), 6);
//! ```

// Core domain types
pub mod core;

// Word lists
pub mod wordlists;

// Puzzle generation and session operations
pub mod puzzle;

// Player progress on top of a session
pub mod play;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;

// Logging setup
pub mod telemetry;
