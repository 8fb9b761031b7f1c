//! Resolved runtime configuration

use crate::wordlists::{WordListLocation, WordSource, loader};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::PathBuf;
use tracing::warn;

/// Settings gathered from CLI flags and their environment fallbacks
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub words: WordListLocation,
    /// Fixed seed for answer selection; random when absent
    pub seed: Option<u64>,
    pub log_file: Option<PathBuf>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            words: WordListLocation::Embedded,
            seed: None,
            log_file: None,
        }
    }
}

impl GameConfig {
    /// Random source for answer selection
    #[must_use]
    pub fn rng(&self) -> StdRng {
        self.seed
            .map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64)
    }

    /// Load the configured word list and draw the first answer
    ///
    /// A failed load is logged and yields an unavailable source rather than an
    /// error: the game still starts, it just cannot be won.
    pub fn load_source(&self, rng: &mut StdRng) -> WordSource {
        match loader::load(&self.words) {
            Ok(list) => WordSource::new(list, rng),
            Err(err) => {
                warn!(error = %err, "word list unavailable");
                WordSource::unavailable()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn seeded_config_picks_same_answer() {
        let config = GameConfig {
            seed: Some(2024),
            ..GameConfig::default()
        };

        let first = config.load_source(&mut config.rng());
        let second = config.load_source(&mut config.rng());
        assert_eq!(first.answer(), second.answer());
        assert!(first.is_available());
    }

    #[test]
    fn missing_file_degrades_to_unavailable() {
        let config = GameConfig {
            words: WordListLocation::File("/nonexistent/wordle/words.txt".into()),
            ..GameConfig::default()
        };

        let source = config.load_source(&mut config.rng());
        assert!(!source.is_available());
        assert!(source.word_list().is_empty());
    }
}
