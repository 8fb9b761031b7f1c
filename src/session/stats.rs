//! In-memory play statistics for the current process

use super::{GameStatus, Session};
use crate::core::MAX_GUESSES;

/// Results across games played since launch
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    /// Wins indexed by guess count; index 0 is unused
    pub guess_distribution: [usize; MAX_GUESSES + 1],
}

impl Statistics {
    /// Record a finished game; sessions still in progress are ignored
    pub fn record(&mut self, session: &Session) {
        match session.status() {
            GameStatus::InProgress => {}
            GameStatus::Won => {
                self.total_games += 1;
                self.games_won += 1;
                self.guess_distribution[session.turn()] += 1;
            }
            GameStatus::Lost => self.total_games += 1,
        }
    }

    /// Percentage of games won, 0 when nothing has been played
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.total_games == 0 {
            0.0
        } else {
            self.games_won as f64 / self.total_games as f64 * 100.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;
    use crate::session::InputEvent;
    use crate::wordlists::{WordList, WordSource};

    fn finished(answer: &str, guesses: &[&str]) -> Session {
        let source = WordSource::with_answer(
            WordList::from_words(["crane", "slate", "trace"]),
            Word::new(answer).unwrap(),
        );
        guesses
            .iter()
            .flat_map(|g| g.chars().map(InputEvent::Letter).chain([InputEvent::Submit]))
            .fold(Session::new(source), Session::apply)
    }

    #[test]
    fn empty_statistics() {
        let stats = Statistics::default();
        assert_eq!(stats.total_games, 0);
        assert!(stats.win_rate().abs() < f64::EPSILON);
    }

    #[test]
    fn records_wins_and_losses() {
        let mut stats = Statistics::default();
        stats.record(&finished("crane", &["slate", "crane"]));
        stats.record(&finished("crane", &["slate"; 6]));

        assert_eq!(stats.total_games, 2);
        assert_eq!(stats.games_won, 1);
        assert_eq!(stats.guess_distribution[2], 1);
        assert!((stats.win_rate() - 50.0).abs() < f64::EPSILON);
    }

    #[test]
    fn ignores_unfinished_games() {
        let mut stats = Statistics::default();
        stats.record(&finished("crane", &["slate"]));
        assert_eq!(stats, Statistics::default());
    }
}
