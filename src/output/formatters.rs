//! Formatting utilities for terminal output

use crate::core::{KeyboardState, LetterFeedback, MAX_GUESSES, QWERTY_ROWS};
use crate::session::{GameStatus, GuessRow, Session};
use colored::{ColoredString, Colorize};

/// A letter as a colored block, or plain when there is no feedback yet
#[must_use]
pub fn colored_tile(letter: char, feedback: Option<LetterFeedback>) -> ColoredString {
    let text = format!(" {} ", letter.to_ascii_uppercase());
    match feedback {
        Some(LetterFeedback::Correct) => text.black().on_green().bold(),
        Some(LetterFeedback::Misplaced) => text.black().on_yellow().bold(),
        Some(LetterFeedback::Incorrect) => text.white().on_bright_black(),
        None => text.normal(),
    }
}

/// A submitted row as colored tiles
#[must_use]
pub fn colored_row(row: &GuessRow) -> String {
    row.word
        .text()
        .chars()
        .zip(row.feedback.letters())
        .map(|(letter, &feedback)| colored_tile(letter, Some(feedback)).to_string())
        .collect()
}

/// The keyboard as three indented lines of colored keys
#[must_use]
pub fn keyboard_lines(keyboard: &KeyboardState) -> Vec<String> {
    QWERTY_ROWS
        .iter()
        .enumerate()
        .map(|(indent, row)| {
            let keys: String = row
                .chars()
                .map(|key| colored_tile(key, keyboard.get(key)).to_string())
                .collect();
            format!("{}{keys}", " ".repeat(indent * 2))
        })
        .collect()
}

/// "You win!" / "You lose!" plus the answer, once the game is over
#[must_use]
pub fn status_message(session: &Session) -> Option<String> {
    let headline = match session.status() {
        GameStatus::InProgress => return None,
        GameStatus::Won => "You win!",
        GameStatus::Lost => "You lose!",
    };

    Some(match session.revealed_answer() {
        Some(answer) => format!("{headline} The word was {}.", answer.text().to_uppercase()),
        None => headline.to_string(),
    })
}

/// Spoiler-free emoji summary of a finished game
///
/// The header reads `n/6` for a win and `X/6` for a loss.
#[must_use]
pub fn share_grid(session: &Session) -> String {
    let score = match session.status() {
        GameStatus::Won => session.turn().to_string(),
        _ => "X".to_string(),
    };

    let mut grid = format!("Wordle {score}/{MAX_GUESSES}");
    for row in session.rows() {
        grid.push('\n');
        grid.push_str(&row.feedback.to_emoji());
    }
    grid
}
