//! Cumulative keyboard state
//!
//! Tracks, for each of the 26 letters, the best feedback seen across all submitted
//! guesses. Entries only ever move up the priority order.

use super::{Feedback, LetterFeedback, Word};

/// Keyboard rows, top to bottom, as drawn by the presentation layer
pub const QWERTY_ROWS: [&str; 3] = ["qwertyuiop", "asdfghjkl", "zxcvbnm"];

/// Best-known feedback per alphabet letter
///
/// `None` means the letter has not been guessed yet.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyboardState {
    letters: [Option<LetterFeedback>; 26],
}

impl KeyboardState {
    /// All 26 letters unknown
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one submitted guess into the keyboard
    ///
    /// Each letter ends up at the maximum of its recorded state and the feedback of
    /// every occurrence in `guess`, so a letter that appears twice keeps its better
    /// result and nothing is ever downgraded.
    pub fn update(&mut self, guess: &Word, feedback: &Feedback) {
        for (&letter, &result) in guess.chars().iter().zip(feedback.letters()) {
            let slot = &mut self.letters[usize::from(letter - b'a')];
            *slot = (*slot).max(Some(result));
        }
    }

    /// Recorded state for a letter, case-insensitive
    ///
    /// Non-alphabetic input is always unknown.
    #[must_use]
    pub fn get(&self, letter: char) -> Option<LetterFeedback> {
        let letter = letter.to_ascii_lowercase();
        if letter.is_ascii_lowercase() {
            self.letters[letter as usize - 'a' as usize]
        } else {
            None
        }
    }

    /// Iterate over `('a', state) ..= ('z', state)` in alphabetical order
    pub fn iter(&self) -> impl Iterator<Item = (char, Option<LetterFeedback>)> + '_ {
        ('a'..='z').zip(self.letters.iter().copied())
    }

    /// Number of letters with any recorded feedback
    #[must_use]
    pub fn known_count(&self) -> usize {
        self.letters.iter().filter(|l| l.is_some()).count()
    }
}
