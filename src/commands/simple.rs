//! Simple interactive CLI mode
//!
//! Line-based reconstruction game without the TUI. Rows and columns are typed
//! 1-based and converted here.

use crate::core::WORD_LEN;
use crate::output::{colors_to_emoji, guess_tiles, print_board, print_scan};
use crate::play::{Board, LetterOutcome};
use crate::puzzle::{PuzzleError, ROWS};
use anyhow::Result;
use colored::Colorize;
use std::io::{self, Write};

/// One parsed REPL line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    New,
    Board,
    Letter { row: usize, col: usize, letter: char },
    Guess { row: usize, word: String },
    Count(char),
    Reveal(usize),
    Scratch(String),
    Scan,
    Help,
    Quit,
}

/// Parse a REPL line into a [`Command`]
///
/// # Errors
///
/// Returns a message suitable for showing to the player when the line is not a
/// known command or its arguments are malformed.
pub fn parse_command(line: &str) -> Result<Command, String> {
    let mut parts = line.split_whitespace();
    let Some(head) = parts.next() else {
        return Err("Type 'help' for commands".to_string());
    };
    let args: Vec<&str> = parts.collect();

    let command = match (head.to_lowercase().as_str(), args.as_slice()) {
        ("new" | "n", []) => Command::New,
        ("board" | "b", []) => Command::Board,
        ("scan", []) => Command::Scan,
        ("help" | "h" | "?", []) => Command::Help,
        ("quit" | "q" | "exit", []) => Command::Quit,
        ("letter" | "l", [row, col, letter]) => Command::Letter {
            row: parse_index(row, ROWS, "row")?,
            col: parse_index(col, WORD_LEN, "column")?,
            letter: parse_letter(letter)?,
        },
        ("guess" | "g", [row, word]) => Command::Guess {
            row: parse_index(row, ROWS, "row")?,
            word: (*word).to_string(),
        },
        ("count" | "c", [letter]) => Command::Count(parse_letter(letter)?),
        ("reveal" | "r", [row]) => Command::Reveal(parse_index(row, ROWS, "row")?),
        ("scratch" | "s", [word]) => Command::Scratch((*word).to_string()),
        (other, _) => return Err(format!("Unknown command or arguments: '{other}'")),
    };
    Ok(command)
}

fn parse_index(text: &str, max: usize, what: &str) -> Result<usize, String> {
    match text.parse::<usize>() {
        Ok(n) if (1..=max).contains(&n) => Ok(n - 1),
        _ => Err(format!("{what} must be 1-{max}, got '{text}'")),
    }
}

fn parse_letter(text: &str) -> Result<char, String> {
    let mut chars = text.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_ascii_alphabetic() => Ok(c),
        _ => Err(format!("expected a single letter, got '{text}'")),
    }
}

fn print_help() {
    println!("Commands (rows 1-{ROWS}, columns 1-{WORD_LEN}):");
    println!("  letter R C L   guess the letter in one cell");
    println!("  guess R WORD   guess a whole row");
    println!("  count L        how often L appears on the board");
    println!("  reveal R       one-time clue: uncover row R");
    println!("  scratch WORD   try a word against the solution");
    println!("  scan           one-time scan of letters on the board");
    println!("  board          redraw the board");
    println!("  new            start a new puzzle");
    println!("  quit           exit\n");
}

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error on I/O failure or if a new puzzle cannot be generated.
pub fn run_simple(board: &mut Board<'_>) -> Result<()> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                 Reverse Wordle - Simple Mode                 ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Every row of the board below was guessed against a hidden word.");
    println!("Only the colors are shown: work out the letters behind them.\n");
    print_help();
    print_board(board);

    loop {
        let input = get_user_input("\n>")?;
        let command = match parse_command(&input) {
            Ok(command) => command,
            Err(msg) => {
                println!("❌ {msg}");
                continue;
            }
        };

        match command {
            Command::Quit => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            Command::Help => print_help(),
            Command::Board => print_board(board),
            Command::New => {
                board.new_game()?;
                println!("\n🔄 New puzzle started!");
                print_board(board);
            }
            Command::Letter { row, col, letter } => {
                match board.guess_letter(row, col, letter)? {
                    LetterOutcome::Correct => println!("{}", "✓ Correct".green()),
                    LetterOutcome::Wrong { tries_left: 0 } => {
                        println!("{}", "✗ Wrong, cell is now locked".red());
                    }
                    LetterOutcome::Wrong { tries_left } => {
                        println!("{}", format!("✗ Wrong, {tries_left} tries left").yellow());
                    }
                    LetterOutcome::Locked => println!("Cell is locked"),
                    LetterOutcome::AlreadyRevealed => println!("Cell is already uncovered"),
                    LetterOutcome::OutOfRange => println!("No such cell"),
                }
                report_progress(board);
            }
            Command::Guess { row, word } => {
                if board.guess_row(row, &word)? {
                    println!("{}", format!("✓ Row {} uncovered", row + 1).green());
                    report_progress(board);
                } else {
                    println!("{}", "✗ Not that row's word".red());
                }
            }
            Command::Count(letter) => {
                let count = board.count_letter(letter)?;
                println!(
                    "'{}' appears {count} time{} on the board",
                    letter.to_ascii_uppercase(),
                    if count == 1 { "" } else { "s" }
                );
            }
            Command::Reveal(row) => {
                if board.clue_used() {
                    println!("The clue has already been used");
                } else if let Some(clue) = board.use_clue(row)? {
                    println!("Row {}: {}", row + 1, guess_tiles(&clue));
                    report_progress(board);
                } else {
                    println!("No clue available");
                }
            }
            Command::Scratch(word) => match board.scratch(&word) {
                Ok(row) => println!("{}  {}", guess_tiles(&row), colors_to_emoji(row.colors())),
                Err(PuzzleError::InvalidWord(w)) => {
                    println!("❌ '{w}' is not in the word list");
                }
                Err(err) => return Err(err.into()),
            },
            Command::Scan => {
                if board.phantom_scan()? {
                    if let Some(scan) = board.scan() {
                        print_scan(scan);
                    }
                } else {
                    println!("The scan has already been used");
                }
            }
        }
    }
}

fn report_progress(board: &Board<'_>) {
    if board.is_solved() {
        println!("\n{}", "═".repeat(60).bright_cyan());
        println!(
            "{}",
            "    🎉  B O A R D   R E C O N S T R U C T E D !  🎉    "
                .bright_green()
                .bold()
        );
        println!("{}", "═".repeat(60).bright_cyan());
        print_board(board);
        println!("\nType 'new' for another puzzle or 'quit' to exit.");
    }
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> Result<String> {
    print!("{prompt} ");
    io::stdout().flush()?;

    let mut input = String::new();
    if io::stdin().read_line(&mut input)? == 0 {
        return Ok("quit".to_string());
    }

    Ok(input.trim().to_string())
}
