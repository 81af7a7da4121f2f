//! Command implementations

pub mod simple;
pub mod survey;

pub use simple::{Command, parse_command, run_simple};
pub use survey::{SurveyResult, run_survey};
