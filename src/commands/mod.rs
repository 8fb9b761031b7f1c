//! Command implementations

pub mod check;
pub mod simple;

pub use check::{CheckResult, check_guess, run_check};
pub use simple::{play_line, run_simple};
