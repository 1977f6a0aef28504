//! Word supply for new rounds
//!
//! [`WordSource`] is the seam the application service draws secret words
//! through. [`WordList`] implements it over the lists embedded at build time
//! or over a file loaded at runtime.

mod embedded;
pub mod loader;

pub use embedded::{WORDS_5, WORDS_6, WORDS_7};

use rand::SeedableRng;
use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rustc_hash::FxHashMap;

/// Supplies a random word of a requested length
pub trait WordSource {
    /// Pick a word with `length` letters, or `None` if there is none
    fn random_word_of_length(&mut self, length: usize) -> Option<String>;
}

/// Words grouped by length, with their own random generator
#[derive(Debug, Clone)]
pub struct WordList {
    by_length: FxHashMap<usize, Vec<String>>,
    rng: StdRng,
}

impl WordList {
    /// Group `words` by letter count; seeded from the thread generator
    #[must_use]
    pub fn new(words: impl IntoIterator<Item = String>) -> Self {
        Self::with_rng(words, StdRng::from_rng(&mut rand::rng()))
    }

    /// Same as [`WordList::new`] but with a reproducible word sequence
    #[must_use]
    pub fn with_seed(words: impl IntoIterator<Item = String>, seed: u64) -> Self {
        Self::with_rng(words, StdRng::seed_from_u64(seed))
    }

    fn with_rng(words: impl IntoIterator<Item = String>, rng: StdRng) -> Self {
        let mut by_length: FxHashMap<usize, Vec<String>> = FxHashMap::default();
        for word in words {
            by_length.entry(word.chars().count()).or_default().push(word);
        }
        Self { by_length, rng }
    }

    /// All words embedded at build time
    #[must_use]
    pub fn embedded() -> Self {
        Self::new(embedded_words())
    }

    /// Words with exactly `length` letters
    #[must_use]
    pub fn words_of_length(&self, length: usize) -> &[String] {
        self.by_length.get(&length).map_or(&[], Vec::as_slice)
    }

    /// Word lengths present, shortest first
    #[must_use]
    pub fn lengths(&self) -> Vec<usize> {
        let mut lengths: Vec<usize> = self.by_length.keys().copied().collect();
        lengths.sort_unstable();
        lengths
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.by_length.values().map(Vec::len).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Replace the random generator, keeping the words
    #[must_use]
    pub fn reseeded(&self, seed: u64) -> Self {
        Self {
            by_length: self.by_length.clone(),
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl WordSource for WordList {
    fn random_word_of_length(&mut self, length: usize) -> Option<String> {
        self.by_length
            .get(&length)
            .and_then(|words| words.choose(&mut self.rng))
            .cloned()
    }
}

/// Every embedded word, normalized
#[must_use]
pub fn embedded_words() -> Vec<String> {
    [WORDS_5, WORDS_6, WORDS_7]
        .into_iter()
        .flat_map(loader::words_from_slice)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{MAX_WORD_LENGTH, MIN_WORD_LENGTH};

    fn sample() -> Vec<String> {
        loader::words_from_slice(&["BAARD", "BLOEM", "BOEREN", "APEKOOL"])
    }

    #[test]
    fn embedded_lists_have_their_length() {
        for (length, list) in [(5, WORDS_5), (6, WORDS_6), (7, WORDS_7)] {
            assert!(!list.is_empty());
            for &word in list {
                assert_eq!(word.chars().count(), length, "Word '{word}' has wrong length");
                assert_eq!(word, word.to_uppercase(), "Word '{word}' is not upper case");
            }
        }
    }

    #[test]
    fn embedded_covers_every_round_length() {
        let words = WordList::embedded();
        for length in MIN_WORD_LENGTH..=MAX_WORD_LENGTH {
            assert!(!words.words_of_length(length).is_empty());
        }
        assert_eq!(words.len(), WORDS_5.len() + WORDS_6.len() + WORDS_7.len());
    }

    #[test]
    fn groups_by_length() {
        let words = WordList::new(sample());
        assert_eq!(words.words_of_length(5), ["BAARD", "BLOEM"]);
        assert_eq!(words.words_of_length(6), ["BOEREN"]);
        assert_eq!(words.words_of_length(7), ["APEKOOL"]);
        assert!(words.words_of_length(8).is_empty());
        assert_eq!(words.lengths(), [5, 6, 7]);
    }

    #[test]
    fn random_word_has_requested_length() {
        let mut words = WordList::with_seed(sample(), 42);
        for _ in 0..20 {
            let word = words.random_word_of_length(5).unwrap();
            assert!(word == "BAARD" || word == "BLOEM");
        }
        assert_eq!(words.random_word_of_length(6).as_deref(), Some("BOEREN"));
    }

    #[test]
    fn random_word_missing_length() {
        let mut words = WordList::new(sample());
        assert!(words.random_word_of_length(9).is_none());

        let mut empty = WordList::new(Vec::new());
        assert!(empty.is_empty());
        assert!(empty.random_word_of_length(5).is_none());
    }

    #[test]
    fn same_seed_same_words() {
        let mut a = WordList::with_seed(embedded_words(), 7);
        let mut b = a.reseeded(7);
        for length in [5, 6, 7, 5, 6, 7] {
            assert_eq!(a.random_word_of_length(length), b.random_word_of_length(length));
        }
    }
}
