//! Automated player used by the simulation command
//!
//! Picks a random dictionary word that agrees with the hint and would have
//! produced every feedback seen so far in the round.

use crate::config::HINT_PLACEHOLDER;
use crate::core::{Feedback, classify};
use rand::SeedableRng;
use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;

/// Candidate-filtering guesser over a fixed dictionary
pub struct Bot<'a> {
    dictionary: &'a [String],
    rng: StdRng,
}

impl<'a> Bot<'a> {
    #[must_use]
    pub fn new(dictionary: &'a [String], seed: u64) -> Self {
        Self {
            dictionary,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Words consistent with `hint` and with every valid feedback in `history`
    #[must_use]
    pub fn candidates(&self, hint: &str, history: &[Feedback]) -> Vec<&'a String> {
        let length = hint.chars().count();

        self.dictionary
            .iter()
            .filter(|word| word.chars().count() == length)
            .filter(|word| matches_hint(word, hint))
            .filter(|word| {
                history
                    .iter()
                    .filter(|feedback| feedback.is_attempt_valid())
                    .all(|feedback| classify(feedback.attempt(), word) == feedback.marks())
            })
            .collect()
    }

    /// Next attempt, or `None` when no dictionary word fits
    pub fn next_guess(&mut self, hint: &str, history: &[Feedback]) -> Option<&'a String> {
        let candidates = self.candidates(hint, history);
        candidates.choose(&mut self.rng).copied()
    }
}

fn matches_hint(word: &str, hint: &str) -> bool {
    word.chars()
        .zip(hint.chars())
        .all(|(letter, revealed)| revealed == HINT_PLACEHOLDER || letter == revealed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::base_hint;
    use crate::wordlists::loader::words_from_slice;

    fn dictionary() -> Vec<String> {
        words_from_slice(&["BAARD", "BAKEN", "BLOEM", "DRAAD", "BOEREN"])
    }

    #[test]
    fn candidates_follow_hint_length_and_letters() {
        let words = dictionary();
        let bot = Bot::new(&words, 1);

        let candidates = bot.candidates("B....", &[]);
        assert_eq!(candidates, ["BAARD", "BAKEN", "BLOEM"]);

        let six = bot.candidates("B.....", &[]);
        assert_eq!(six, ["BOEREN"]);
    }

    #[test]
    fn candidates_agree_with_feedback() {
        let words = dictionary();
        let bot = Bot::new(&words, 1);
        let history = vec![Feedback::calculate("BAKEN", "BAARD")];

        assert_eq!(bot.candidates("BA...", &history), ["BAARD"]);
    }

    #[test]
    fn invalid_feedback_is_ignored() {
        let words = dictionary();
        let bot = Bot::new(&words, 1);
        let history = vec![Feedback::calculate("BOEREN", "BAARD")];

        assert_eq!(bot.candidates("B....", &history).len(), 3);
    }

    #[test]
    fn secret_word_stays_a_candidate() {
        let words = dictionary();
        let mut bot = Bot::new(&words, 5);

        for secret in &words {
            let mut hint = base_hint(secret);
            let mut history = Vec::new();
            for attempt in ["BAKEN", "DRAAD", "BOEREN", "BLOEM"] {
                let feedback = Feedback::calculate(attempt, secret);
                hint = feedback.give_hint(&hint);
                history.push(feedback);
                assert!(bot.candidates(&hint, &history).contains(&secret));
                assert!(bot.next_guess(&hint, &history).is_some());
            }
        }
    }

    #[test]
    fn next_guess_none_without_candidates() {
        let words = dictionary();
        let mut bot = Bot::new(&words, 1);
        assert!(bot.next_guess("Z....", &[]).is_none());
    }

    #[test]
    fn next_guess_is_a_candidate() {
        let words = dictionary();
        let mut bot = Bot::new(&words, 9);
        let guess = bot.next_guess("B....", &[]).unwrap();
        assert!(["BAARD", "BAKEN", "BLOEM"].contains(&guess.as_str()));
    }
}
