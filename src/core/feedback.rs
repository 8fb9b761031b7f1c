//! Letter feedback calculation and representation
//!
//! Each position of a guess is classified against the answer:
//! - Incorrect (letter not in the answer)
//! - Misplaced (letter in the answer, wrong position)
//! - Correct (letter at this exact position)
//!
//! Classification uses plain containment. A repeated guess letter can be marked
//! misplaced at several positions even when the answer holds it once; there is no
//! accounting of remaining unmatched occurrences.

use super::{WORD_LENGTH, Word};
use std::fmt;

/// Feedback for a single letter position
///
/// Variants are declared in priority order, so `Ord` gives
/// `Incorrect < Misplaced < Correct`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LetterFeedback {
    Incorrect,
    Misplaced,
    Correct,
}

impl LetterFeedback {
    /// Classify one guess letter from its match at the position and its presence
    /// anywhere in the answer
    #[inline]
    #[must_use]
    const fn classify(in_position: bool, in_answer: bool) -> Self {
        if in_position {
            Self::Correct
        } else if in_answer {
            Self::Misplaced
        } else {
            Self::Incorrect
        }
    }

    /// Emoji square for this feedback
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Misplaced => '🟨',
            Self::Incorrect => '⬜',
        }
    }

    /// Lowercase name, as used in tile class names and logs
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Correct => "correct",
            Self::Misplaced => "misplaced",
            Self::Incorrect => "incorrect",
        }
    }
}

impl fmt::Display for LetterFeedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Evaluate an arbitrary guess string against an answer string
///
/// The result always has one entry per character of `guess`. Positions past the
/// end of `answer` can never be correct.
///
/// # Examples
/// ```
/// use wordle_game::core::{evaluate, LetterFeedback::*};
///
/// assert_eq!(
///     evaluate("trace", "crane"),
///     vec![Incorrect, Misplaced, Misplaced, Misplaced, Misplaced]
/// );
/// ```
#[must_use]
pub fn evaluate(guess: &str, answer: &str) -> Vec<LetterFeedback> {
    let answer: Vec<char> = answer.chars().collect();

    guess
        .chars()
        .enumerate()
        .map(|(i, letter)| {
            LetterFeedback::classify(answer.get(i) == Some(&letter), answer.contains(&letter))
        })
        .collect()
}

/// Feedback for a full five-letter guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Feedback([LetterFeedback; WORD_LENGTH]);

impl Feedback {
    /// All positions correct
    pub const PERFECT: Self = Self([LetterFeedback::Correct; WORD_LENGTH]);

    /// Build feedback from explicit per-position values
    #[inline]
    #[must_use]
    pub const fn new(letters: [LetterFeedback; WORD_LENGTH]) -> Self {
        Self(letters)
    }

    /// Calculate the feedback when `guess` is played against `answer`
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::{Feedback, Word};
    ///
    /// let guess = Word::new("crane").unwrap();
    /// let feedback = Feedback::calculate(&guess, &guess);
    /// assert!(feedback.is_perfect());
    /// ```
    #[must_use]
    pub fn calculate(guess: &Word, answer: &Word) -> Self {
        Self(std::array::from_fn(|i| {
            let letter = guess.char_at(i);
            LetterFeedback::classify(answer.char_at(i) == letter, answer.has_letter(letter))
        }))
    }

    /// Per-position feedback values
    #[inline]
    #[must_use]
    pub const fn letters(&self) -> &[LetterFeedback; WORD_LENGTH] {
        &self.0
    }

    /// Check if every position is correct
    #[inline]
    #[must_use]
    pub fn is_perfect(&self) -> bool {
        *self == Self::PERFECT
    }

    /// Count positions with the given feedback
    #[must_use]
    pub fn count(&self, kind: LetterFeedback) -> usize {
        self.0.iter().filter(|&&f| f == kind).count()
    }

    /// Convert to an emoji string like "🟩🟨⬜🟩🟨"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|f| f.emoji()).collect()
    }
}
