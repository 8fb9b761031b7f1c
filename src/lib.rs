//! Wordle
//!
//! A terminal Wordle: a hidden five-letter answer, six guesses, per-letter feedback
//! and a keyboard that remembers the best feedback seen for every letter.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_game::core::Word;
//! use wordle_game::session::{GameStatus, InputEvent, Session};
//! use wordle_game::wordlists::{WordList, WordSource};
//!
//! let list = WordList::parse("crane\ntrace\n");
//! let source = WordSource::with_answer(list, Word::new("crane").unwrap());
//! let mut session = Session::new(source);
//!
//! for letter in "trace".chars() {
//!     session.handle(InputEvent::Letter(letter));
//! }
//! session.handle(InputEvent::Submit);
//!
//! assert_eq!(session.turn(), 1);
//! assert_eq!(session.status(), GameStatus::InProgress);
//! ```

// Core domain types
pub mod core;

// Guess session state machine
pub mod session;

// Word lists and answer selection
pub mod wordlists;

// Runtime configuration
pub mod config;

// Tracing setup
pub mod logging;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
