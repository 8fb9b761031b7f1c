//! Terminal output formatting
//!
//! Display utilities for the line-based mode and one-shot commands.

pub mod display;
pub mod formatters;

pub use display::{
    print_board, print_check_result, print_game_over, print_statistics, print_words_summary,
};
