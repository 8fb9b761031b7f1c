//! Display functions for game state and command results

use super::formatters::{colored_row, keyboard_lines, share_grid, status_message};
use crate::core::{Feedback, MAX_GUESSES, Word};
use crate::session::{GameStatus, Session, Statistics};
use crate::wordlists::WordSource;
use colored::Colorize;

/// Print every submitted row, then the keyboard
pub fn print_board(session: &Session) {
    println!();
    for (i, row) in session.rows().enumerate() {
        println!("  {} {}", (i + 1).to_string().bright_black(), colored_row(row));
    }
    println!();
    for line in keyboard_lines(session.keyboard()) {
        println!("  {line}");
    }
    println!();
}

/// Print the end-of-game banner, share grid and running statistics
pub fn print_game_over(session: &Session, stats: &Statistics) {
    let Some(message) = status_message(session) else {
        return;
    };

    println!("{}", "═".repeat(60).bright_cyan());
    match session.status() {
        GameStatus::Won => println!("  {}", message.bright_green().bold()),
        _ => println!("  {}", message.bright_red().bold()),
    }
    println!("{}", "═".repeat(60).bright_cyan());

    println!();
    for line in share_grid(session).lines() {
        println!("  {line}");
    }

    println!();
    print_statistics(stats);
}

/// Print games played, win rate and the guess distribution
pub fn print_statistics(stats: &Statistics) {
    println!(
        "  Games: {} | Win Rate: {:.0}%",
        stats.total_games,
        stats.win_rate()
    );

    let most = stats.guess_distribution.iter().copied().max().unwrap_or(0).max(1);
    for guesses in 1..=MAX_GUESSES {
        let count = stats.guess_distribution[guesses];
        let width = count * 30 / most;
        println!(
            "  {guesses}: {}{} {count}",
            "█".repeat(width).green(),
            "░".repeat(30 - width).bright_black()
        );
    }
    println!();
}

/// Print the feedback of one guess against one answer
pub fn print_check_result(guess: &Word, answer: &Word, feedback: &Feedback) {
    println!(
        "{} vs {}: {}",
        guess.text().to_uppercase().bright_white().bold(),
        answer.text().to_uppercase().bright_yellow().bold(),
        feedback.to_emoji()
    );
    for (letter, result) in guess.text().chars().zip(feedback.letters()) {
        println!("  {} {result}", letter.to_ascii_uppercase());
    }
}

/// Print a summary of the loaded word source
pub fn print_words_summary(source: &WordSource, location: &str) {
    let list = source.list();
    println!("Source:   {location}");
    println!("Words:    {}", list.len());
    println!("Playable: {}", list.playable().len());
    if source.is_available() {
        println!("Status:   {}", "ready".green().bold());
    } else {
        println!("Status:   {}", "unavailable".red().bold());
    }
}
