//! Terminal output formatting
//!
//! Display utilities for CLI results and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{print_board, print_scan, print_survey_result};
pub use formatters::{colors_to_emoji, guess_tiles};
