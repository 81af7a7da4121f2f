//! Formatting utilities for terminal output

use crate::core::{Color, Colors, Guess};
use colored::{ColoredString, Colorize};

/// Emoji square for one color
#[must_use]
pub const fn color_to_emoji(color: Color) -> char {
    match color {
        Color::Blue => '🟦',
        Color::Orange => '🟧',
        Color::White => '⬜',
    }
}

/// Format a row of colors as emoji string
#[must_use]
pub fn colors_to_emoji(colors: &Colors) -> String {
    colors.iter().copied().map(color_to_emoji).collect()
}

/// One letter as a colored tile, e.g. ` A ` on blue
#[must_use]
pub fn tile(letter: Option<u8>, color: Color) -> ColoredString {
    let text = format!(
        " {} ",
        letter.map_or('·', |c| char::from(c.to_ascii_uppercase()))
    );
    match color {
        Color::Blue => text.white().bold().on_blue(),
        Color::Orange => text.black().bold().on_truecolor(255, 140, 0),
        Color::White => text.black().on_white(),
    }
}

/// A fully known row (scratch result or clue) as colored tiles
#[must_use]
pub fn guess_tiles(guess: &Guess) -> String {
    guess
        .word()
        .chars()
        .iter()
        .zip(guess.colors())
        .map(|(&c, &color)| tile(Some(c), color).to_string())
        .collect()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64).max(0.0) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
