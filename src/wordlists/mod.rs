//! Word lists for Wordle
//!
//! The Word Source: where words come from, membership tests, and answer selection.

mod embedded;
pub mod loader;
mod source;

pub use embedded::{WORDS, WORDS_COUNT};
pub use loader::{DEFAULT_WORD_LIST_URL, LoadError, WordListLocation};
pub use source::{WordList, WordSource};
