//! The guess session state machine

use super::event::{GameStatus, InputEvent, Rejection, Transition};
use crate::core::{Feedback, KeyboardState, MAX_GUESSES, WORD_LENGTH, Word};
use crate::wordlists::WordSource;
use tracing::{debug, info};

/// A submitted guess and its feedback
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessRow {
    pub word: Word,
    pub feedback: Feedback,
}

/// One game of Wordle
///
/// Owns everything a game needs: the word source, the six guess slots, the
/// in-progress buffer, the keyboard and the status. All mutation goes through
/// [`Session::handle`], one event at a time.
#[derive(Debug, Clone)]
pub struct Session {
    source: WordSource,
    slots: [Option<GuessRow>; MAX_GUESSES],
    buffer: String,
    turn: usize,
    status: GameStatus,
    keyboard: KeyboardState,
    rejection: Option<Rejection>,
}

impl Session {
    /// Start a game against the source's answer
    ///
    /// An unavailable source still yields a session; every submit is then rejected.
    #[must_use]
    pub fn new(source: WordSource) -> Self {
        debug!(
            available = source.is_available(),
            words = source.word_list().len(),
            "session created"
        );

        Self {
            source,
            slots: Default::default(),
            buffer: String::with_capacity(WORD_LENGTH),
            turn: 0,
            status: GameStatus::InProgress,
            keyboard: KeyboardState::new(),
            rejection: None,
        }
    }

    /// Apply one event, returning the next state
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::Word;
    /// use wordle_game::session::{GameStatus, InputEvent, Session};
    /// use wordle_game::wordlists::{WordList, WordSource};
    ///
    /// let source = WordSource::with_answer(
    ///     WordList::from_words(["crane", "trace"]),
    ///     Word::new("crane").unwrap(),
    /// );
    ///
    /// let session = "crane"
    ///     .chars()
    ///     .map(InputEvent::Letter)
    ///     .chain([InputEvent::Submit])
    ///     .fold(Session::new(source), Session::apply);
    ///
    /// assert_eq!(session.status(), GameStatus::Won);
    /// ```
    #[must_use]
    pub fn apply(mut self, event: InputEvent) -> Self {
        self.handle(event);
        self
    }

    /// Apply one event in place and report what it did
    pub fn handle(&mut self, event: InputEvent) -> Transition {
        self.rejection = None;

        if self.status.is_terminal() {
            return Transition::Ignored;
        }

        match event {
            InputEvent::Letter(letter) => self.push_letter(letter),
            InputEvent::Delete => self
                .buffer
                .pop()
                .map_or(Transition::Ignored, Transition::LetterRemoved),
            InputEvent::Submit => self.submit().unwrap_or_else(|rejection| {
                debug!(%rejection, guess = %self.buffer, "submission rejected");
                self.rejection = Some(rejection.clone());
                Transition::Rejected(rejection)
            }),
        }
    }

    fn push_letter(&mut self, letter: char) -> Transition {
        if !letter.is_ascii_alphabetic() || self.buffer.len() >= WORD_LENGTH {
            return Transition::Ignored;
        }

        let letter = letter.to_ascii_lowercase();
        self.buffer.push(letter);
        Transition::LetterAdded(letter)
    }

    fn submit(&mut self) -> Result<Transition, Rejection> {
        let answer = self.source.answer().ok_or(Rejection::WordsUnavailable)?;

        if self.buffer.len() < WORD_LENGTH {
            return Err(Rejection::TooShort {
                len: self.buffer.len(),
            });
        }

        if !self.source.is_valid_word(&self.buffer) {
            return Err(Rejection::NotInWordList(self.buffer.clone()));
        }

        // The buffer only ever holds ASCII letters
        let word = Word::new(self.buffer.as_str())
            .map_err(|_| Rejection::NotInWordList(self.buffer.clone()))?;
        let feedback = Feedback::calculate(&word, answer);
        let won = word == *answer;

        self.keyboard.update(&word, &feedback);

        let slot = self.turn;
        debug!(slot, guess = %word, feedback = %feedback.to_emoji(), "guess accepted");
        self.slots[slot] = Some(GuessRow { word, feedback });
        self.buffer.clear();
        self.turn += 1;

        self.status = if won {
            GameStatus::Won
        } else if self.turn == MAX_GUESSES {
            GameStatus::Lost
        } else {
            GameStatus::InProgress
        };

        if self.status.is_terminal() {
            info!(status = ?self.status, guesses = self.turn, answer = %answer, "game over");
        }

        Ok(Transition::Submitted {
            slot,
            feedback,
            status: self.status,
        })
    }

    #[must_use]
    pub const fn status(&self) -> GameStatus {
        self.status
    }

    /// All six slots, submitted rows first
    #[must_use]
    pub const fn slots(&self) -> &[Option<GuessRow>; MAX_GUESSES] {
        &self.slots
    }

    /// Submitted rows in order
    pub fn rows(&self) -> impl Iterator<Item = &GuessRow> + '_ {
        self.slots.iter().map_while(Option::as_ref)
    }

    /// The in-progress guess
    #[must_use]
    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    /// Number of guesses submitted so far
    #[must_use]
    pub const fn turn(&self) -> usize {
        self.turn
    }

    /// Index of the slot being typed into, if the game is still running
    #[must_use]
    pub const fn current_slot(&self) -> Option<usize> {
        if self.status.is_terminal() {
            None
        } else {
            Some(self.turn)
        }
    }

    #[must_use]
    pub const fn keyboard(&self) -> &KeyboardState {
        &self.keyboard
    }

    /// Why the most recent event was refused, if it was
    #[must_use]
    pub const fn rejection(&self) -> Option<&Rejection> {
        self.rejection.as_ref()
    }

    #[must_use]
    pub const fn answer(&self) -> Option<&Word> {
        self.source.answer()
    }

    /// The answer, but only once the game has ended
    #[must_use]
    pub fn revealed_answer(&self) -> Option<&Word> {
        self.answer().filter(|_| self.status.is_terminal())
    }

    #[must_use]
    pub const fn source(&self) -> &WordSource {
        &self.source
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LetterFeedback::{Correct, Incorrect, Misplaced};
    use crate::wordlists::WordList;
    use pretty_assertions::assert_eq;

    const LIST: [&str; 8] = [
        "crane", "trace", "slate", "built", "proud", "mouth", "shift", "crate",
    ];

    fn session(answer: &str) -> Session {
        Session::new(WordSource::with_answer(
            WordList::from_words(LIST),
            Word::new(answer).unwrap(),
        ))
    }

    fn type_word(session: &mut Session, word: &str) {
        for letter in word.chars() {
            session.handle(InputEvent::Letter(letter));
        }
    }

    fn guess(session: &mut Session, word: &str) -> Transition {
        type_word(session, word);
        session.handle(InputEvent::Submit)
    }

    #[test]
    fn starts_in_progress_and_empty() {
        let s = session("crane");
        assert_eq!(s.status(), GameStatus::InProgress);
        assert!(s.slots().iter().all(Option::is_none));
        assert_eq!(s.buffer(), "");
        assert_eq!(s.turn(), 0);
        assert_eq!(s.current_slot(), Some(0));
        assert!(s.rejection().is_none());
        assert!(s.revealed_answer().is_none());
    }

    #[test]
    fn letters_are_lowercased_and_capped() {
        let mut s = session("crane");
        assert_eq!(
            s.handle(InputEvent::Letter('C')),
            Transition::LetterAdded('c')
        );
        type_word(&mut s, "rane");
        assert_eq!(s.buffer(), "crane");

        assert!(s.handle(InputEvent::Letter('x')).is_ignored());
        assert_eq!(s.buffer(), "crane");
    }

    #[test]
    fn non_alphabetic_input_is_ignored() {
        let mut s = session("crane");
        for c in ['1', ' ', '!', 'é'] {
            assert!(s.handle(InputEvent::Letter(c)).is_ignored());
        }
        assert_eq!(s.buffer(), "");
    }

    #[test]
    fn delete_removes_last_letter() {
        let mut s = session("crane");
        type_word(&mut s, "cr");
        assert_eq!(s.handle(InputEvent::Delete), Transition::LetterRemoved('r'));
        assert_eq!(s.buffer(), "c");
        s.handle(InputEvent::Delete);
        assert!(s.handle(InputEvent::Delete).is_ignored());
        assert_eq!(s.buffer(), "");
    }

    #[test]
    fn trace_then_crane_wins() {
        let mut s = session("crane");

        let first = guess(&mut s, "trace");
        assert_eq!(
            first,
            Transition::Submitted {
                slot: 0,
                feedback: Feedback::new([Incorrect, Misplaced, Misplaced, Misplaced, Misplaced]),
                status: GameStatus::InProgress,
            }
        );
        assert_eq!(s.buffer(), "");
        assert_eq!(s.turn(), 1);

        let second = guess(&mut s, "crane");
        assert_eq!(
            second,
            Transition::Submitted {
                slot: 1,
                feedback: Feedback::PERFECT,
                status: GameStatus::Won,
            }
        );
        assert_eq!(s.status(), GameStatus::Won);
        assert_eq!(s.current_slot(), None);
        assert_eq!(s.revealed_answer().map(Word::text), Some("crane"));
    }

    #[test]
    fn input_after_win_is_ignored() {
        let mut s = session("crane");
        guess(&mut s, "crane");

        for event in [InputEvent::Letter('a'), InputEvent::Delete, InputEvent::Submit] {
            assert!(s.handle(event).is_ignored());
        }
        assert_eq!(s.buffer(), "");
        assert_eq!(s.turn(), 1);
    }

    #[test]
    fn unknown_word_is_rejected_then_cleared() {
        let mut s = session("crane");
        let before = s.slots().clone();

        let result = guess(&mut s, "zzzzz");
        assert_eq!(
            result,
            Transition::Rejected(Rejection::NotInWordList("zzzzz".into()))
        );
        assert_eq!(s.slots(), &before);
        assert_eq!(s.turn(), 0);
        assert_eq!(s.buffer(), "zzzzz");
        assert_eq!(
            s.rejection(),
            Some(&Rejection::NotInWordList("zzzzz".into()))
        );

        s.handle(InputEvent::Delete);
        assert!(s.rejection().is_none());
        assert_eq!(s.buffer(), "zzzz");
    }

    #[test]
    fn short_guess_is_rejected() {
        let mut s = session("crane");
        assert_eq!(
            guess(&mut s, "cra"),
            Transition::Rejected(Rejection::TooShort { len: 3 })
        );
        assert_eq!(s.turn(), 0);

        // Even an ignored event clears the signal
        s.handle(InputEvent::Letter('!'));
        assert!(s.rejection().is_none());
    }

    #[test]
    fn six_misses_lose() {
        let mut s = session("crane");
        for i in 0..MAX_GUESSES {
            assert_eq!(s.status(), GameStatus::InProgress);
            let result = guess(&mut s, "built");
            assert!(matches!(result, Transition::Submitted { slot, .. } if slot == i));
        }

        assert_eq!(s.status(), GameStatus::Lost);
        assert_eq!(s.rows().count(), MAX_GUESSES);
        assert_eq!(s.revealed_answer().map(Word::text), Some("crane"));
        assert!(s.handle(InputEvent::Letter('c')).is_ignored());
        assert_eq!(s.buffer(), "");
    }

    #[test]
    fn win_on_last_turn_is_a_win() {
        let mut s = session("crane");
        for _ in 0..MAX_GUESSES - 1 {
            guess(&mut s, "slate");
        }
        guess(&mut s, "crane");
        assert_eq!(s.status(), GameStatus::Won);
        assert_eq!(s.turn(), MAX_GUESSES);
    }

    #[test]
    fn unavailable_source_rejects_every_submit() {
        let mut s = Session::new(WordSource::unavailable());
        assert_eq!(
            guess(&mut s, "crane"),
            Transition::Rejected(Rejection::WordsUnavailable)
        );
        assert_eq!(s.status(), GameStatus::InProgress);
        assert_eq!(s.turn(), 0);
        assert!(s.answer().is_none());
    }

    #[test]
    fn submit_updates_keyboard() {
        let mut s = session("crane");
        guess(&mut s, "crate");

        let keyboard = s.keyboard();
        assert_eq!(keyboard.get('c'), Some(Correct));
        assert_eq!(keyboard.get('t'), Some(Incorrect));
        assert_eq!(keyboard.get('e'), Some(Correct));
        assert_eq!(keyboard.get('z'), None);
    }

    #[test]
    fn rows_follow_slot_order() {
        let mut s = session("crane");
        guess(&mut s, "slate");
        guess(&mut s, "mouth");

        let words: Vec<&str> = s.rows().map(|row| row.word.text()).collect();
        assert_eq!(words, ["slate", "mouth"]);
        assert!(s.slots()[2].is_none());
    }

    #[test]
    fn apply_leaves_original_untouched() {
        let start = session("crane");
        let next = start.clone().apply(InputEvent::Letter('c'));

        assert_eq!(start.buffer(), "");
        assert_eq!(next.buffer(), "c");
    }
}
