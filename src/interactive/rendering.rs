//! TUI rendering with ratatui
//!
//! Board grid, scratch rows, phantom scan and message panels.

use super::app::{App, InputMode, MessageStyle};
use crate::core::{Color as TileColor, Guess, WORD_LEN};
use crate::play::Cell;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph},
};

const ORANGE: Color = Color::Rgb(255, 140, 0);

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Input area
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(chunks[1]);

    render_board(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);
    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🔁 REVERSE WORDLE - Rebuild the Board")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn tile_style(color: TileColor) -> Style {
    let base = Style::new().add_modifier(Modifier::BOLD);
    match color {
        TileColor::Blue => base.fg(Color::White).bg(Color::Blue),
        TileColor::Orange => base.fg(Color::Black).bg(ORANGE),
        TileColor::White => base.fg(Color::Black).bg(Color::White),
    }
}

fn tile_span(letter: Option<u8>, color: TileColor, selected: bool) -> Span<'static> {
    let text = format!(
        " {} ",
        letter.map_or('·', |c| char::from(c.to_ascii_uppercase()))
    );
    let style = if selected {
        tile_style(color).add_modifier(Modifier::REVERSED | Modifier::UNDERLINED)
    } else {
        tile_style(color)
    };
    Span::styled(text, style)
}

fn guess_line(guess: &Guess) -> Line<'static> {
    let mut spans = vec![Span::raw("  ")];
    for (&c, &color) in guess.word().chars().iter().zip(guess.colors()) {
        spans.push(tile_span(Some(c), color, false));
        spans.push(Span::raw(" "));
    }
    Line::from(spans)
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let mut lines = vec![Line::from("")];

    for (r, colors) in app.board.colors().iter().enumerate() {
        let mut spans = vec![Span::styled(
            format!(" {} ", r + 1),
            Style::default().fg(Color::DarkGray),
        )];
        for (c, &color) in colors.iter().enumerate() {
            let cell = app.board.cell(r, c);
            spans.push(tile_span(
                cell.and_then(Cell::letter),
                color,
                app.cursor == (r, c),
            ));
            spans.push(Span::raw(" "));
        }

        let (row, col) = app.cursor;
        if r == row
            && let Some(Cell::Hidden { tries_left }) = app.board.cell(row, col)
        {
            let style = if tries_left == 0 {
                Style::default().fg(Color::Red)
            } else {
                Style::default().fg(Color::Yellow)
            };
            spans.push(Span::styled(format!(" tries: {tries_left}"), style));
        }

        lines.push(Line::from(spans));
        lines.push(Line::from(""));
    }

    let board = Paragraph::new(lines).block(
        Block::default()
            .title(format!(" Board ({}) ", app.board.difficulty().name()))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(board, area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Progress gauge
            Constraint::Min(5),    // Scratch rows
            Constraint::Length(4), // Phantom scan
            Constraint::Length(7), // Messages
        ])
        .split(area);

    render_progress(f, app, chunks[0]);
    render_scratch(f, app, chunks[1]);
    render_scan(f, app, chunks[2]);
    render_messages(f, app, chunks[3]);
}

fn render_progress(f: &mut Frame, app: &App, area: Rect) {
    let total = app.board.colors().len() * WORD_LEN;
    let revealed = app.board.revealed();
    let pct = u16::try_from(revealed * 100 / total).unwrap_or(100);

    let gauge = Gauge::default()
        .block(Block::default().title(" Uncovered ").borders(Borders::ALL))
        .gauge_style(Style::default().fg(Color::Cyan))
        .percent(pct)
        .label(format!("{revealed}/{total} cells"));
    f.render_widget(gauge, area);
}

fn render_scratch(f: &mut Frame, app: &App, area: Rect) {
    let lines: Vec<Line> = app.board.scratch_rows().map(guess_line).collect();
    let content = if lines.is_empty() {
        vec![Line::from("TAB to try a word against the hidden answer")]
    } else {
        lines
    };

    let scratch = Paragraph::new(content).block(
        Block::default()
            .title(" Scratch ")
            .borders(Borders::ALL)
            .style(Style::default().fg(Color::Green)),
    );
    f.render_widget(scratch, area);
}

fn render_scan(f: &mut Frame, app: &App, area: Rect) {
    let content = app.board.scan().map_or_else(
        || Line::from("# to scan which letters are on the board"),
        |scan| {
            let spans: Vec<Span> = scan
                .iter()
                .map(|(&letter, &hit)| {
                    let style = if hit {
                        Style::default()
                            .fg(Color::Green)
                            .add_modifier(Modifier::BOLD)
                    } else {
                        Style::default().fg(Color::DarkGray)
                    };
                    Span::styled(format!("{letter} "), style)
                })
                .collect();
            Line::from(spans)
        },
    );

    let scan = Paragraph::new(content).block(
        Block::default()
            .title(" Phantom Scan ")
            .borders(Borders::ALL),
    );
    f.render_widget(scan, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let row = app.cursor.0 + 1;
    let (title, content, color) = match app.input_mode {
        InputMode::Letter => (
            " Type a letter for the highlighted cell | ENTER guess row | TAB scratch ".to_string(),
            String::new(),
            Color::Yellow,
        ),
        InputMode::RowGuess => (
            format!(" Guess row {row} (5 letters) | ESC to cancel "),
            app.input_buffer.clone(),
            Color::Cyan,
        ),
        InputMode::Scratch => (
            " Scratch word (5 letters) | ESC to cancel ".to_string(),
            app.input_buffer.clone(),
            Color::Green,
        ),
        InputMode::Count => (
            " Letter to count | ESC to cancel ".to_string(),
            String::new(),
            Color::Magenta,
        ),
    };

    let input = Paragraph::new(content.to_uppercase())
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(20),
            Constraint::Percentage(20),
            Constraint::Percentage(20),
            Constraint::Percentage(40),
        ])
        .split(area);

    let clue_text = if app.board.clue_used() {
        "Clue: used"
    } else {
        "Clue: ready"
    };
    f.render_widget(
        Paragraph::new(clue_text).alignment(Alignment::Center),
        chunks[0],
    );

    let scan_text = if app.board.scan().is_some() {
        "Scan: used"
    } else {
        "Scan: ready"
    };
    f.render_widget(
        Paragraph::new(scan_text).alignment(Alignment::Center),
        chunks[1],
    );

    let count_text = app
        .last_count
        .map_or_else(|| "Count: -".to_string(), |(c, n)| format!("{c}: {n}"));
    f.render_widget(
        Paragraph::new(count_text).alignment(Alignment::Center),
        chunks[2],
    );

    let help = Paragraph::new("Esc: Quit | ^N: New | ?: Count | !: Clue | #: Scan")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[3]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::play::{Board, Difficulty};
    use crate::puzzle::{PuzzleConfig, Session};
    use crate::wordlists::Dictionary;
    use ratatui::{Terminal, backend::TestBackend};

    #[test]
    fn draws_board_without_panicking() {
        let session = Session::new(
            Dictionary::embedded().unwrap(),
            PuzzleConfig::default().with_seed(3),
        );
        let mut app = App::new(Board::new(&session, Difficulty::Standard).unwrap());
        app.board.phantom_scan().unwrap();
        app.board.scratch(session.snapshot().unwrap().solution().text()).unwrap();

        let mut terminal = Terminal::new(TestBackend::new(100, 40)).unwrap();
        terminal.draw(|f| ui(f, &app)).unwrap();

        let buffer = terminal.backend().buffer();
        let text: String = buffer.content().iter().map(|c| c.symbol()).collect();
        assert!(text.contains("REVERSE WORDLE"));
        assert!(text.contains("Phantom Scan"));
    }
}
