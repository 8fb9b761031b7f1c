//! Word list and answer selection

use crate::core::Word;
use rand::Rng;
use rand::seq::IndexedRandom;
use rustc_hash::FxHashSet;
use std::sync::Arc;

/// An ordered list of accepted words
///
/// Entries are lowercase but otherwise unvalidated; any entry can be typed as a guess
/// as long as it is five letters. Only well-formed words are eligible as answers.
#[derive(Debug, Clone, Default)]
pub struct WordList {
    words: Vec<String>,
    lookup: FxHashSet<String>,
    playable: Vec<Word>,
}

impl WordList {
    /// Build a list from individual entries
    ///
    /// Entries are trimmed and lowercased; blank entries are dropped.
    pub fn from_words<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words: Vec<String> = entries
            .into_iter()
            .map(|entry| entry.as_ref().trim().to_lowercase())
            .filter(|entry| !entry.is_empty())
            .collect();

        let lookup = words.iter().cloned().collect();
        let playable = words
            .iter()
            .filter_map(|w| Word::new(w.as_str()).ok())
            .collect();

        Self {
            words,
            lookup,
            playable,
        }
    }

    /// Parse a newline-delimited resource, accepting both `\n` and `\r\n`
    ///
    /// # Examples
    /// ```
    /// use wordle_game::wordlists::WordList;
    ///
    /// let list = WordList::parse("crane\r\nslate\n\ntrace\n");
    /// assert_eq!(list.words(), ["crane", "slate", "trace"]);
    /// ```
    #[must_use]
    pub fn parse(text: &str) -> Self {
        Self::from_words(text.lines())
    }

    /// All entries in source order
    #[must_use]
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Membership test, case-insensitive
    #[must_use]
    pub fn is_valid_word(&self, word: &str) -> bool {
        self.lookup.contains(word.to_lowercase().as_str())
    }

    /// Entries that parse as five-letter words
    #[must_use]
    pub fn playable(&self) -> &[Word] {
        &self.playable
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Pick an answer uniformly from the playable entries
    pub fn choose_answer<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<Word> {
        self.playable.choose(rng).cloned()
    }
}

/// The word list together with the answer drawn from it
///
/// Cloning is cheap: the list is shared.
#[derive(Debug, Clone)]
pub struct WordSource {
    list: Arc<WordList>,
    answer: Option<Word>,
}

impl WordSource {
    /// Draw an answer from `list` using `rng`
    ///
    /// A list without any playable entry yields an unavailable source.
    pub fn new<R: Rng + ?Sized>(list: WordList, rng: &mut R) -> Self {
        let answer = list.choose_answer(rng);
        Self {
            list: Arc::new(list),
            answer,
        }
    }

    /// Use a fixed answer
    #[must_use]
    pub fn with_answer(list: WordList, answer: Word) -> Self {
        Self {
            list: Arc::new(list),
            answer: Some(answer),
        }
    }

    /// No words and no answer: every submission is rejected
    #[must_use]
    pub fn unavailable() -> Self {
        Self {
            list: Arc::default(),
            answer: None,
        }
    }

    /// A new source over the same list with a freshly drawn answer
    #[must_use]
    pub fn reroll<R: Rng + ?Sized>(&self, rng: &mut R) -> Self {
        Self {
            list: Arc::clone(&self.list),
            answer: self.list.choose_answer(rng),
        }
    }

    #[must_use]
    pub const fn answer(&self) -> Option<&Word> {
        self.answer.as_ref()
    }

    #[must_use]
    pub fn word_list(&self) -> &[String] {
        self.list.words()
    }

    #[must_use]
    pub fn list(&self) -> &WordList {
        &self.list
    }

    #[must_use]
    pub fn is_valid_word(&self, word: &str) -> bool {
        self.list.is_valid_word(word)
    }

    /// Whether a game can be played at all
    #[must_use]
    pub const fn is_available(&self) -> bool {
        self.answer.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    const WORDS: [&str; 5] = ["amber", "mummy", "opals", "sonar", "today"];

    #[test]
    fn parse_handles_crlf_and_blank_lines() {
        let list = WordList::parse("Amber\r\nmummy\n\n  opals  \r\n");
        assert_eq!(list.words(), ["amber", "mummy", "opals"]);
        assert_eq!(list.len(), 3);
    }

    #[test]
    fn parse_empty_text() {
        let list = WordList::parse("");
        assert!(list.is_empty());
        assert!(list.playable().is_empty());
    }

    #[test]
    fn membership_is_case_insensitive() {
        let list = WordList::from_words(WORDS);
        assert!(list.is_valid_word("sonar"));
        assert!(list.is_valid_word("SONAR"));
        assert!(!list.is_valid_word("zzzzz"));
    }

    #[test]
    fn unvalidated_entries_are_listed_but_not_playable() {
        let list = WordList::from_words(["crane", "toolong", "ab"]);
        assert_eq!(list.len(), 3);
        assert!(list.is_valid_word("toolong"));
        assert_eq!(list.playable().len(), 1);
    }

    #[test]
    fn answer_comes_from_list() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..20 {
            let source = WordSource::new(WordList::from_words(WORDS), &mut rng);
            let answer = source.answer().unwrap();
            assert!(WORDS.contains(&answer.text()));
        }
    }

    #[test]
    fn seeded_rng_is_deterministic() {
        let a = WordSource::new(WordList::from_words(WORDS), &mut StdRng::seed_from_u64(42));
        let b = WordSource::new(WordList::from_words(WORDS), &mut StdRng::seed_from_u64(42));
        assert_eq!(a.answer(), b.answer());
    }

    #[test]
    fn reroll_shares_list() {
        let mut rng = StdRng::seed_from_u64(1);
        let source = WordSource::new(WordList::from_words(WORDS), &mut rng);
        let next = source.reroll(&mut rng);

        assert_eq!(next.word_list(), source.word_list());
        assert!(next.is_available());
    }

    #[test]
    fn unavailable_source() {
        let source = WordSource::unavailable();
        assert!(!source.is_available());
        assert!(source.answer().is_none());
        assert!(source.word_list().is_empty());
        assert!(!source.is_valid_word("crane"));
    }

    #[test]
    fn list_without_playable_words_is_unavailable() {
        let mut rng = StdRng::seed_from_u64(3);
        let source = WordSource::new(WordList::from_words(["ab", "toolong"]), &mut rng);
        assert!(!source.is_available());
        assert_eq!(source.word_list().len(), 2);
    }
}
