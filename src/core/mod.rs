//! Core domain types for Wordle
//!
//! Words, per-letter feedback and the cumulative keyboard. Everything here is pure
//! and has no I/O.

mod feedback;
mod keyboard;
mod word;

pub use feedback::{Feedback, LetterFeedback, evaluate};
pub use keyboard::{KeyboardState, QWERTY_ROWS};
pub use word::{Word, WordError};

/// Letters per word
pub const WORD_LENGTH: usize = 5;

/// Guess slots per game
pub const MAX_GUESSES: usize = 6;
