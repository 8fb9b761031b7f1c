//! One-shot feedback check
//!
//! Evaluates a single guess against a chosen answer, outside of any game.

use crate::core::{Feedback, Word, WordError};
use crate::output::print_check_result;
use anyhow::{Context, Result};

/// Result of checking one guess
pub struct CheckResult {
    pub guess: Word,
    pub answer: Word,
    pub feedback: Feedback,
}

/// Evaluate `guess` against `answer`
///
/// # Errors
///
/// Returns `WordError` if either word is not five ASCII letters.
pub fn check_guess(guess: &str, answer: &str) -> Result<CheckResult, WordError> {
    let guess = Word::new(guess)?;
    let answer = Word::new(answer)?;
    let feedback = Feedback::calculate(&guess, &answer);

    Ok(CheckResult {
        guess,
        answer,
        feedback,
    })
}

/// Evaluate and print
///
/// # Errors
///
/// Returns an error if either word is malformed.
pub fn run_check(guess: &str, answer: &str) -> Result<()> {
    let result = check_guess(guess, answer)
        .with_context(|| format!("cannot check '{guess}' against '{answer}'"))?;

    print_check_result(&result.guess, &result.answer, &result.feedback);
    Ok(())
}
