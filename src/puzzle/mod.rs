//! Puzzle engine
//!
//! Solution selection, decoy generation and the session operations built on the
//! evaluator. Front ends talk to [`Session`] only.

mod config;
mod error;
pub mod generator;
mod session;
mod state;

pub use config::PuzzleConfig;
pub use error::PuzzleError;
pub use generator::{DECOY_ROWS, DecoyGenerator, Decoys};
pub use session::Session;
pub use state::{PhantomScan, Puzzle, ROWS, count_letter_in, phantom_scan_of};
