//! TUI application state and logic

use crate::core::WORD_LEN;
use crate::play::{Board, LetterOutcome};
use crate::puzzle::{PuzzleError, ROWS};
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Application state
pub struct App<'a> {
    pub board: Board<'a>,
    pub cursor: (usize, usize),
    pub input_mode: InputMode,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub last_count: Option<(char, usize)>,
    pub should_quit: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Typed letters are guessed into the cell under the cursor
    Letter,
    /// Typing a whole word for the cursor row
    RowGuess,
    /// Typing a word to try against the solution
    Scratch,
    /// Waiting for the letter to count
    Count,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl<'a> App<'a> {
    #[must_use]
    pub fn new(board: Board<'a>) -> Self {
        Self {
            board,
            cursor: (0, 0),
            input_mode: InputMode::Letter,
            input_buffer: String::new(),
            messages: vec![
                Message {
                    text: "Every row was guessed against the hidden word. Rebuild the letters!"
                        .to_string(),
                    style: MessageStyle::Info,
                },
                Message {
                    text: "Type a letter to guess the highlighted cell".to_string(),
                    style: MessageStyle::Info,
                },
            ],
            last_count: None,
            should_quit: false,
        }
    }

    /// Apply one key press
    ///
    /// # Errors
    ///
    /// Returns an error only if the session has to generate a puzzle and cannot.
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<(), PuzzleError> {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Char('c') if ctrl => self.should_quit = true,
            KeyCode::Char('n') if ctrl => self.new_game()?,
            _ => match self.input_mode {
                InputMode::Letter => self.handle_board_key(key.code)?,
                InputMode::Count => self.handle_count_key(key.code)?,
                InputMode::RowGuess | InputMode::Scratch => self.handle_entry_key(key.code)?,
            },
        }
        Ok(())
    }

    fn handle_board_key(&mut self, code: KeyCode) -> Result<(), PuzzleError> {
        match code {
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Up => self.cursor.0 = self.cursor.0.saturating_sub(1),
            KeyCode::Down => self.cursor.0 = (self.cursor.0 + 1).min(ROWS - 1),
            KeyCode::Left => self.cursor.1 = self.cursor.1.saturating_sub(1),
            KeyCode::Right => self.cursor.1 = (self.cursor.1 + 1).min(WORD_LEN - 1),
            KeyCode::Enter => self.begin_entry(InputMode::RowGuess),
            KeyCode::Tab => self.begin_entry(InputMode::Scratch),
            KeyCode::Char('?') => {
                self.input_mode = InputMode::Count;
                self.add_message("Which letter should be counted?", MessageStyle::Info);
            }
            KeyCode::F(2) | KeyCode::Char('!') => self.reveal_clue()?,
            KeyCode::F(3) | KeyCode::Char('#') => self.phantom_scan()?,
            KeyCode::Char(c) if c.is_ascii_alphabetic() => self.guess_letter(c)?,
            _ => {}
        }
        Ok(())
    }

    fn handle_count_key(&mut self, code: KeyCode) -> Result<(), PuzzleError> {
        match code {
            KeyCode::Esc => self.input_mode = InputMode::Letter,
            KeyCode::Char(c) if c.is_ascii_alphabetic() => {
                let count = self.board.count_letter(c)?;
                let letter = c.to_ascii_uppercase();
                self.last_count = Some((letter, count));
                self.add_message(
                    &format!("'{letter}' appears {count} time(s) on the board"),
                    MessageStyle::Info,
                );
                self.input_mode = InputMode::Letter;
            }
            _ => {}
        }
        Ok(())
    }

    fn handle_entry_key(&mut self, code: KeyCode) -> Result<(), PuzzleError> {
        match code {
            KeyCode::Esc => {
                self.input_mode = InputMode::Letter;
                self.input_buffer.clear();
            }
            KeyCode::Char(c) => {
                if self.input_buffer.len() < WORD_LEN && c.is_ascii_alphabetic() {
                    self.input_buffer.push(c.to_ascii_lowercase());
                }
            }
            KeyCode::Backspace => {
                self.input_buffer.pop();
            }
            KeyCode::Enter => {
                if self.input_buffer.len() == WORD_LEN {
                    self.submit_entry()?;
                } else {
                    self.add_message("Word must be exactly 5 letters!", MessageStyle::Error);
                }
            }
            _ => {}
        }
        Ok(())
    }

    fn begin_entry(&mut self, mode: InputMode) {
        self.input_mode = mode;
        self.input_buffer.clear();
    }

    fn submit_entry(&mut self) -> Result<(), PuzzleError> {
        let word = std::mem::take(&mut self.input_buffer);
        let mode = std::mem::replace(&mut self.input_mode, InputMode::Letter);
        let row = self.cursor.0;

        if mode == InputMode::RowGuess {
            if self.board.guess_row(row, &word)? {
                self.add_message(&format!("Row {} uncovered!", row + 1), MessageStyle::Success);
                self.check_solved();
            } else {
                self.add_message(
                    &format!("{} is not row {}", word.to_uppercase(), row + 1),
                    MessageStyle::Error,
                );
            }
            return Ok(());
        }

        match self.board.scratch(&word) {
            Ok(_) => {}
            Err(PuzzleError::InvalidWord(w)) => self.add_message(
                &format!("Word '{}' not in word list!", w.to_uppercase()),
                MessageStyle::Error,
            ),
            Err(err) => return Err(err),
        }
        Ok(())
    }

    fn guess_letter(&mut self, letter: char) -> Result<(), PuzzleError> {
        let (row, col) = self.cursor;
        match self.board.guess_letter(row, col, letter)? {
            LetterOutcome::Correct => {
                if col + 1 < WORD_LEN {
                    self.cursor.1 = col + 1;
                }
                self.check_solved();
            }
            LetterOutcome::Wrong { tries_left: 0 } => {
                self.add_message("Wrong! That cell is now locked", MessageStyle::Error);
            }
            LetterOutcome::Wrong { tries_left } => self.add_message(
                &format!(
                    "{} is wrong, {tries_left} tries left",
                    letter.to_ascii_uppercase()
                ),
                MessageStyle::Error,
            ),
            LetterOutcome::Locked => self.add_message("Cell is locked", MessageStyle::Error),
            LetterOutcome::AlreadyRevealed | LetterOutcome::OutOfRange => {}
        }
        Ok(())
    }

    fn reveal_clue(&mut self) -> Result<(), PuzzleError> {
        if self.board.clue_used() {
            self.add_message("The clue has already been used", MessageStyle::Error);
            return Ok(());
        }
        let row = self.cursor.0;
        if self.board.use_clue(row)?.is_some() {
            self.add_message(&format!("Clue: row {} revealed", row + 1), MessageStyle::Success);
            self.check_solved();
        } else {
            self.add_message("No clue available", MessageStyle::Error);
        }
        Ok(())
    }

    fn phantom_scan(&mut self) -> Result<(), PuzzleError> {
        if self.board.phantom_scan()? {
            self.add_message("Phantom scan complete", MessageStyle::Success);
        } else {
            self.add_message("The scan has already been used", MessageStyle::Error);
        }
        Ok(())
    }

    fn check_solved(&mut self) {
        if self.board.is_solved() {
            self.add_message(
                "🎉 BOARD RECONSTRUCTED! Ctrl-N for a new puzzle",
                MessageStyle::Success,
            );
        }
    }

    pub fn new_game(&mut self) -> Result<(), PuzzleError> {
        self.board.new_game()?;
        self.cursor = (0, 0);
        self.input_mode = InputMode::Letter;
        self.input_buffer.clear();
        self.last_count = None;
        self.messages.clear();
        self.add_message("New puzzle started!", MessageStyle::Info);
        Ok(())
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key(key)?;
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::play::{Cell, Difficulty};
    use crate::puzzle::{PuzzleConfig, Session};
    use crate::wordlists::Dictionary;
    use crate::wordlists::loader::words_from_slice;

    fn session() -> Session {
        let all = words_from_slice(&[
            "crane", "slate", "plate", "stale", "least", "crate", "apple",
        ]);
        let common = words_from_slice(&["crane", "slate", "plate", "stale", "least", "crate"]);
        Session::new(
            Dictionary::new(all, common).unwrap(),
            PuzzleConfig::default().with_seed(11),
        )
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE)).unwrap();
    }

    fn type_word(app: &mut App, word: &str) {
        for c in word.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    #[test]
    fn cursor_stays_on_board() {
        let session = session();
        let mut app = App::new(Board::new(&session, Difficulty::Standard).unwrap());
        press(&mut app, KeyCode::Up);
        press(&mut app, KeyCode::Left);
        assert_eq!(app.cursor, (0, 0));
        for _ in 0..10 {
            press(&mut app, KeyCode::Down);
            press(&mut app, KeyCode::Right);
        }
        assert_eq!(app.cursor, (ROWS - 1, WORD_LEN - 1));
    }

    #[test]
    fn correct_letter_advances_cursor() {
        let session = session();
        let mut app = App::new(Board::new(&session, Difficulty::Standard).unwrap());
        let word = *session.snapshot().unwrap().rows()[0].word();

        press(&mut app, KeyCode::Char(char::from(word.chars()[0])));
        assert_eq!(app.cursor, (0, 1));
        assert_eq!(app.board.cell(0, 0), Some(Cell::Revealed(word.chars()[0])));
    }

    #[test]
    fn enter_guesses_the_cursor_row() {
        let session = session();
        let mut app = App::new(Board::new(&session, Difficulty::Standard).unwrap());
        let solution = *session.snapshot().unwrap().solution();
        for _ in 0..ROWS {
            press(&mut app, KeyCode::Down);
        }

        press(&mut app, KeyCode::Enter);
        assert_eq!(app.input_mode, InputMode::RowGuess);
        type_word(&mut app, solution.text());
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.input_mode, InputMode::Letter);
        assert_eq!(app.board.revealed(), WORD_LEN);
    }

    #[test]
    fn scratch_entry_rejects_unknown_words() {
        let session = session();
        let mut app = App::new(Board::new(&session, Difficulty::Standard).unwrap());

        press(&mut app, KeyCode::Tab);
        type_word(&mut app, "zzzzz");
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.board.scratch_rows().count(), 0);
        assert_eq!(
            app.messages.last().map(|m| m.style),
            Some(MessageStyle::Error)
        );

        press(&mut app, KeyCode::Tab);
        type_word(&mut app, "apple");
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.board.scratch_rows().count(), 1);
    }

    #[test]
    fn count_mode_reports_letter() {
        let session = session();
        let mut app = App::new(Board::new(&session, Difficulty::Standard).unwrap());
        let expected = session.count_letter('e').unwrap();

        press(&mut app, KeyCode::Char('?'));
        assert_eq!(app.input_mode, InputMode::Count);
        press(&mut app, KeyCode::Char('e'));
        assert_eq!(app.last_count, Some(('E', expected)));
        assert_eq!(app.input_mode, InputMode::Letter);
    }

    #[test]
    fn one_time_tools_and_new_game() {
        let session = session();
        let mut app = App::new(Board::new(&session, Difficulty::Standard).unwrap());

        press(&mut app, KeyCode::F(2));
        assert!(app.board.clue_used());
        assert_eq!(app.board.revealed(), WORD_LEN);
        press(&mut app, KeyCode::Char('#'));
        assert!(app.board.scan().is_some());

        app.handle_key(KeyEvent::new(KeyCode::Char('n'), KeyModifiers::CONTROL))
            .unwrap();
        assert!(!app.board.clue_used());
        assert!(app.board.scan().is_none());
        assert!(!app.should_quit);

        press(&mut app, KeyCode::Esc);
        assert!(app.should_quit);
    }
}
