//! Input events and transition outcomes

use crate::core::{Feedback, WORD_LENGTH};
use thiserror::Error;

/// One player action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// Type a letter into the current guess
    Letter(char),
    /// Remove the last typed letter
    Delete,
    /// Submit the current guess
    Submit,
}

/// Game status; `Won` and `Lost` are terminal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GameStatus {
    #[default]
    InProgress,
    Won,
    Lost,
}

impl GameStatus {
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

/// Why a submission was refused
///
/// Rejections are transient: the next event clears them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Rejection {
    #[error("Not enough letters ({len}/{max})", max = WORD_LENGTH)]
    TooShort { len: usize },
    #[error("'{}' is not in the word list", .0.to_uppercase())]
    NotInWordList(String),
    #[error("No word list loaded")]
    WordsUnavailable,
}

/// What a single event did to the session
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    LetterAdded(char),
    LetterRemoved(char),
    /// A guess was accepted into slot `slot`
    Submitted {
        slot: usize,
        feedback: Feedback,
        status: GameStatus,
    },
    Rejected(Rejection),
    /// The event had no effect
    Ignored,
}

impl Transition {
    #[must_use]
    pub const fn is_ignored(&self) -> bool {
        matches!(self, Self::Ignored)
    }
}
