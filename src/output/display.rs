//! Display functions for command results

use super::formatters::{create_progress_bar, guess_tiles, tile};
use crate::commands::SurveyResult;
use crate::core::WORD_LEN;
use crate::play::{Board, Cell};
use crate::puzzle::{PhantomScan, ROWS};
use colored::Colorize;

/// Print the board: colored tiles, uncovered letters and tries left per row
pub fn print_board(board: &Board<'_>) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        " {} {} ",
        "REVERSE WORDLE".bright_cyan().bold(),
        format!("({} mode)", board.difficulty().name()).bright_black()
    );
    println!("{}", "─".repeat(60).cyan());

    for (r, colors) in board.colors().iter().enumerate() {
        let mut line = String::new();
        let mut locked = 0;
        for (c, &color) in colors.iter().enumerate() {
            let cell = board.cell(r, c);
            if cell.is_some_and(Cell::is_locked) {
                locked += 1;
            }
            line.push_str(&tile(cell.and_then(Cell::letter), color).to_string());
        }

        let note = if locked > 0 {
            format!("  {locked} locked").red().to_string()
        } else {
            String::new()
        };
        println!("  {} {line}{note}", format!("{}", r + 1).bright_black());
    }

    println!(
        "\n  Uncovered: {}/{}   Clue: {}   Scan: {}",
        board.revealed(),
        ROWS * WORD_LEN,
        if board.clue_used() { "used" } else { "ready" },
        if board.scan().is_some() { "used" } else { "ready" }
    );

    let scratch: Vec<_> = board.scratch_rows().collect();
    if !scratch.is_empty() {
        println!("\n  {}", "Scratch:".bright_cyan().bold());
        for guess in scratch {
            println!("    {}", guess_tiles(guess));
        }
    }

    if let Some(scan) = board.scan() {
        print_scan(scan);
    }
}

/// Print the phantom scan as an alphabet strip
pub fn print_scan(scan: &PhantomScan) {
    let strip: String = scan
        .iter()
        .map(|(&letter, &hit)| {
            if hit {
                letter.to_string().green().bold().to_string()
            } else {
                letter.to_string().bright_black().to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(" ");
    println!("\n  {} {strip}", "Scan:".bright_cyan().bold());
}

/// Print the result of a generation survey
pub fn print_survey_result(result: &SurveyResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "GENERATION SURVEY".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Sampling:".bright_cyan().bold());
    println!("   Puzzles:          {}", result.puzzles);
    println!(
        "   Generated:        {}",
        format!("{}", result.generated).green()
    );
    if result.failed > 0 {
        println!(
            "   Failed:           {}",
            format!("{}", result.failed).red().bold()
        );
    }
    println!(
        "   Average draws:    {}",
        format!("{:.1}", result.average_draws)
            .bright_yellow()
            .bold()
    );
    println!("   Most draws:       {}", result.max_draws);
    println!(
        "   Cap relaxed:      {}",
        if result.relaxed > 0 {
            format!("{}", result.relaxed).yellow()
        } else {
            format!("{}", result.relaxed).green()
        }
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Puzzles/second:   {:.1}", result.puzzles_per_second);

    let rows = result.decoy_rows();
    if rows == 0 {
        return;
    }

    println!("\n📈 {}", "Whites per decoy row:".bright_cyan().bold());
    for (&whites, &count) in &result.white_distribution {
        let pct = (count as f64 / rows as f64) * 100.0;
        let bar = create_progress_bar(pct, 100.0, 40);
        println!("   {whites}: {} {count:5} ({pct:5.1}%)", bar.green());
    }
}
