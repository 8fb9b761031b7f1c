//! TUI rendering with ratatui
//!
//! Board, keyboard, messages and status bar for the game screen.

use super::app::{App, MessageStyle};
use crate::core::{LetterFeedback, MAX_GUESSES, QWERTY_ROWS, WORD_LENGTH};
use crate::output::formatters::status_message;
use crate::session::{GameStatus, Session};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),  // Header
            Constraint::Length(15), // Board
            Constraint::Length(5),  // Keyboard
            Constraint::Min(4),     // Messages
            Constraint::Length(3),  // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);
    render_board(f, &app.session, chunks[1]);
    render_keyboard(f, &app.session, chunks[2]);
    render_messages(f, app, chunks[3]);
    render_status(f, app, chunks[4]);
}

/// Tile colors by feedback; unknown letters stay unstyled
fn feedback_style(feedback: Option<LetterFeedback>) -> Style {
    match feedback {
        Some(LetterFeedback::Correct) => Style::default()
            .fg(Color::Black)
            .bg(Color::Green)
            .add_modifier(Modifier::BOLD),
        Some(LetterFeedback::Misplaced) => Style::default()
            .fg(Color::Black)
            .bg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
        Some(LetterFeedback::Incorrect) => Style::default().fg(Color::White).bg(Color::DarkGray),
        None => Style::default().fg(Color::White),
    }
}

fn tile(letter: char, style: Style) -> [Span<'static>; 2] {
    [
        Span::styled(format!(" {} ", letter.to_ascii_uppercase()), style),
        Span::raw(" "),
    ]
}

/// One line per guess slot
///
/// Only submitted rows are colored. The active row shows the typed letters and
/// turns red while the last submission is rejected.
fn board_lines(session: &Session) -> Vec<Line<'static>> {
    let mut lines = Vec::with_capacity(MAX_GUESSES * 2 + 1);

    for (i, slot) in session.slots().iter().enumerate() {
        let spans: Vec<Span> = match slot {
            Some(row) => row
                .word
                .text()
                .chars()
                .zip(row.feedback.letters())
                .flat_map(|(letter, &feedback)| tile(letter, feedback_style(Some(feedback))))
                .collect(),
            None if session.current_slot() == Some(i) => {
                let style = if session.rejection().is_some() {
                    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
                };
                let mut letters = session.buffer().chars();
                (0..WORD_LENGTH)
                    .flat_map(|_| tile(letters.next().unwrap_or('_'), style))
                    .collect()
            }
            None => (0..WORD_LENGTH)
                .flat_map(|_| tile('·', Style::default().fg(Color::DarkGray)))
                .collect(),
        };

        lines.push(Line::from(spans));
        lines.push(Line::from(""));
    }

    if let Some(message) = status_message(session) {
        let color = if session.status() == GameStatus::Won {
            Color::Green
        } else {
            Color::Red
        };
        lines.push(Line::from(Span::styled(
            message,
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )));
    }

    lines
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("WORDLE")
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

fn render_board(f: &mut Frame, session: &Session, area: Rect) {
    let border = if session.rejection().is_some() {
        Color::Red
    } else {
        Color::White
    };

    let board = Paragraph::new(board_lines(session))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(" Board ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(border)),
        );

    f.render_widget(board, area);
}

fn render_keyboard(f: &mut Frame, session: &Session, area: Rect) {
    let keyboard = session.keyboard();
    let lines: Vec<Line> = QWERTY_ROWS
        .iter()
        .map(|row| {
            Line::from(
                row.chars()
                    .flat_map(|key| tile(key, feedback_style(keyboard.get(key))))
                    .collect::<Vec<_>>(),
            )
        })
        .collect();

    let widget = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().title(" Keyboard ").borders(Borders::ALL));

    f.render_widget(widget, area);
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

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(35),
            Constraint::Percentage(40),
        ])
        .split(area);

    let turn_text = match app.session.status() {
        GameStatus::InProgress => format!(
            "Guess {}/{MAX_GUESSES}",
            (app.session.turn() + 1).min(MAX_GUESSES)
        ),
        GameStatus::Won => "Solved".to_string(),
        GameStatus::Lost => "Out of guesses".to_string(),
    };
    f.render_widget(
        Paragraph::new(turn_text).alignment(Alignment::Center),
        chunks[0],
    );

    let stats_text = format!(
        "Games: {} | Win Rate: {:.0}%",
        app.stats.total_games,
        app.stats.win_rate()
    );
    f.render_widget(
        Paragraph::new(stats_text).alignment(Alignment::Center),
        chunks[1],
    );

    let help_text = if app.session.status().is_terminal() {
        "n/Enter: New Game | q: Quit"
    } else {
        "Enter: Submit | Esc: Quit"
    };
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;
    use crate::wordlists::{WordList, WordSource};
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use ratatui::{Terminal, backend::TestBackend};

    fn new_app() -> App {
        let source = WordSource::with_answer(
            WordList::from_words(["crane", "trace", "built"]),
            Word::new("crane").unwrap(),
        );
        App::new(source, StdRng::seed_from_u64(5))
    }

    fn play(app: &mut App, word: &str) {
        for c in word.chars() {
            app.handle_key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE));
        }
        app.handle_key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE));
    }

    fn screen(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 40)).unwrap();
        terminal.draw(|f| ui(f, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn draws_empty_game() {
        let text = screen(&new_app());
        assert!(text.contains("WORDLE"));
        assert!(text.contains("Guess 1/6"));
        assert!(text.contains(" Q   W   E "));
        assert!(!text.contains("The word was"));
    }

    #[test]
    fn draws_typed_letters_in_active_row() {
        let mut app = new_app();
        for c in ['t', 'r'] {
            app.handle_key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE));
        }
        assert!(screen(&app).contains(" T   R   _   _   _ "));
    }

    #[test]
    fn reveals_answer_after_loss() {
        let mut app = new_app();
        for _ in 0..MAX_GUESSES {
            play(&mut app, "built");
        }
        let text = screen(&app);
        assert!(text.contains("You lose! The word was CRANE."));
        assert!(text.contains("Out of guesses"));
    }

    #[test]
    fn board_lines_color_only_submitted_rows() {
        let mut app = new_app();
        play(&mut app, "trace");

        let lines = board_lines(&app.session);
        assert_eq!(lines.len(), MAX_GUESSES * 2);
        assert_eq!(
            lines[0].spans[0].style,
            feedback_style(Some(LetterFeedback::Incorrect))
        );
        assert_eq!(
            lines[0].spans[2].style,
            feedback_style(Some(LetterFeedback::Misplaced))
        );
        assert_eq!(lines[2].spans[0].style.bg, None);
    }

    #[test]
    fn rejected_row_is_red() {
        let mut app = new_app();
        play(&mut app, "zzzzz");

        let lines = board_lines(&app.session);
        assert_eq!(lines[0].spans[0].style.fg, Some(Color::Red));
    }
}
