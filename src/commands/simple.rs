//! Simple line-based play mode
//!
//! Text-based game without the TUI: one guess per line on stdin.

use crate::core::WORD_LENGTH;
use crate::output::{print_board, print_game_over};
use crate::session::{InputEvent, Session, Statistics, Transition};
use crate::wordlists::WordSource;
use anyhow::Result;
use rand::Rng;
use std::io::{self, Write};
use tracing::info;

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input or writing output.
pub fn run_simple<R: Rng + ?Sized>(source: WordSource, rng: &mut R) -> Result<()> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                     Wordle - Simple Mode                     ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Guess the hidden five-letter word in six tries.");
    println!("Type a word and press Enter. Commands: 'new' for a new game, 'quit' to exit.\n");

    if !source.is_available() {
        println!("⚠ No word list loaded: guesses cannot be submitted.\n");
    }

    let mut session = Session::new(source);
    let mut stats = Statistics::default();

    loop {
        let prompt = format!("Guess {}/6", session.turn() + 1);
        let Some(input) = get_user_input(&prompt)? else {
            println!("\n👋 Thanks for playing!\n");
            return Ok(());
        };

        match input.to_lowercase().as_str() {
            "quit" | "q" | "exit" => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            "new" | "n" => {
                session = Session::new(session.source().reroll(rng));
                info!("new game started");
                println!("\n🔄 New game started!\n");
            }
            "" => {}
            guess if guess.chars().count() > WORD_LENGTH => {
                println!("❌ Guesses are {WORD_LENGTH} letters long\n");
            }
            guess => match play_line(&mut session, guess) {
                Transition::Rejected(rejection) => println!("❌ {rejection}\n"),
                Transition::Submitted { status, .. } => {
                    print_board(&session);

                    if status.is_terminal() {
                        stats.record(&session);
                        print_game_over(&session, &stats);

                        let again = get_user_input("Play again? (yes/no)")?.unwrap_or_default();
                        if !matches!(again.to_lowercase().as_str(), "yes" | "y") {
                            println!("\n👋 Thanks for playing!\n");
                            return Ok(());
                        }

                        session = Session::new(session.source().reroll(rng));
                        info!("new game started");
                        println!("\n🔄 New game started!\n");
                    }
                }
                _ => {}
            },
        }
    }
}

/// Replace the current buffer with `line` and submit it
///
/// Any letters left over from a rejected attempt are deleted first.
pub fn play_line(session: &mut Session, line: &str) -> Transition {
    while !session.buffer().is_empty() {
        session.handle(InputEvent::Delete);
    }

    for letter in line.chars() {
        session.handle(InputEvent::Letter(letter));
    }

    session.handle(InputEvent::Submit)
}

/// Get user input with a prompt; `None` at end of input
fn get_user_input(prompt: &str) -> Result<Option<String>> {
    print!("{prompt}: ");
    io::stdout().flush()?;

    let mut input = String::new();
    if io::stdin().read_line(&mut input)? == 0 {
        return Ok(None);
    }

    Ok(Some(input.trim().to_string()))
}
