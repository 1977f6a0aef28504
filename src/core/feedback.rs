//! Attempt feedback and hint derivation
//!
//! Feedback pairs an attempt with one [`Mark`] per letter of the word to guess.
//! It also knows how to fold itself into a running hint: positions marked
//! correct are revealed, everything revealed before stays revealed.

use super::Mark;
use crate::config::HINT_PLACEHOLDER;
use serde::{Deserialize, Serialize};

/// Classify every letter of `attempt` against `word_to_guess`
///
/// Comparison is per `char` and case-sensitive.
///
/// # Algorithm
/// 1. Length mismatch: every position of the word is marked invalid
/// 2. First pass: exact position matches are correct and consume their letter
/// 3. Second pass: remaining letters are present if an unconsumed copy exists
///    in the word (consuming it), absent otherwise
///
/// # Examples
/// ```
/// use lingo_trainer::core::{classify, Mark};
///
/// let marks = classify("DRAAD", "BAARD");
/// assert_eq!(
///     marks,
///     [Mark::Absent, Mark::Present, Mark::Correct, Mark::Present, Mark::Correct]
/// );
/// ```
#[must_use]
pub fn classify(attempt: &str, word_to_guess: &str) -> Vec<Mark> {
    let guess: Vec<char> = attempt.chars().collect();
    let mut remaining: Vec<Option<char>> = word_to_guess.chars().map(Some).collect();

    if guess.len() != remaining.len() {
        return vec![Mark::Invalid; remaining.len()];
    }

    let mut marks = vec![Mark::Absent; guess.len()];

    for (i, &letter) in guess.iter().enumerate() {
        if remaining[i] == Some(letter) {
            marks[i] = Mark::Correct;
            remaining[i] = None;
        }
    }

    for (i, &letter) in guess.iter().enumerate() {
        if marks[i] != Mark::Absent {
            continue;
        }
        if let Some(slot) = remaining.iter_mut().find(|slot| **slot == Some(letter)) {
            *slot = None;
            marks[i] = Mark::Present;
        }
    }

    marks
}

/// Hint given before any guess: first letter revealed, the rest hidden
///
/// ```
/// use lingo_trainer::core::base_hint;
///
/// assert_eq!(base_hint("BAARD"), "B....");
/// ```
#[must_use]
pub fn base_hint(word: &str) -> String {
    let mut chars = word.chars();
    chars.next().map_or_else(String::new, |first| {
        std::iter::once(first)
            .chain(chars.map(|_| HINT_PLACEHOLDER))
            .collect()
    })
}

/// Feedback for one attempt
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feedback {
    attempt: String,
    marks: Vec<Mark>,
}

impl Feedback {
    /// Wrap already computed marks
    pub fn new(attempt: impl Into<String>, marks: Vec<Mark>) -> Self {
        Self {
            attempt: attempt.into(),
            marks,
        }
    }

    /// Compute the feedback for `attempt` against `word_to_guess`
    #[must_use]
    pub fn calculate(attempt: &str, word_to_guess: &str) -> Self {
        Self::new(attempt, classify(attempt, word_to_guess))
    }

    #[inline]
    #[must_use]
    pub fn attempt(&self) -> &str {
        &self.attempt
    }

    #[inline]
    #[must_use]
    pub fn marks(&self) -> &[Mark] {
        &self.marks
    }

    /// True when every mark is correct
    #[must_use]
    pub fn is_word_guessed(&self) -> bool {
        !self.marks.is_empty() && self.marks.iter().all(|&m| m == Mark::Correct)
    }

    /// True when no mark is invalid
    #[must_use]
    pub fn is_attempt_valid(&self) -> bool {
        self.marks.iter().all(|&m| m != Mark::Invalid)
    }

    /// Fold this feedback into `previous_hint`
    ///
    /// The result has the length of `previous_hint`. A position is revealed
    /// when this attempt got it correct or when it was already revealed.
    #[must_use]
    pub fn give_hint(&self, previous_hint: &str) -> String {
        let attempt: Vec<char> = self.attempt.chars().collect();

        previous_hint
            .chars()
            .enumerate()
            .map(|(i, previous)| match (self.marks.get(i), attempt.get(i)) {
                (Some(Mark::Correct), Some(&letter)) => letter,
                _ => previous,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Mark::{Absent, Correct, Invalid, Present};

    #[test]
    fn classify_identical_words_all_correct() {
        for word in ["BAARD", "BOEREN", "APEKOOL", "AAAAA"] {
            let feedback = Feedback::calculate(word, word);
            assert!(feedback.marks().iter().all(|&m| m == Correct));
            assert!(feedback.is_word_guessed());
        }
    }

    #[test]
    fn classify_wrong_length_is_invalid_with_word_length() {
        let feedback = Feedback::calculate("BERGEN", "BAARD");
        assert_eq!(feedback.marks(), &[Invalid; 5]);
        assert!(!feedback.is_attempt_valid());

        let short = Feedback::calculate("BAR", "BAARD");
        assert_eq!(short.marks().len(), 5);
        assert!(!short.is_attempt_valid());
    }

    #[test]
    fn classify_known_rounds() {
        assert_eq!(
            classify("BONJE", "BAARD"),
            [Correct, Absent, Absent, Absent, Absent]
        );
        assert_eq!(
            classify("BARST", "BAARD"),
            [Correct, Correct, Present, Absent, Absent]
        );
        assert_eq!(
            classify("BAARS", "BAARD"),
            [Correct, Correct, Correct, Correct, Absent]
        );
    }

    #[test]
    fn classify_duplicate_letters_consumed_once() {
        // The word holds a single A, so only the first A of the attempt is present
        assert_eq!(
            classify("BAAAAA", "ABBBBB"),
            [Present, Present, Absent, Absent, Absent, Absent]
        );
        // Correct O at the end is claimed before the earlier O's look for copies
        assert_eq!(
            classify("ONONOMO", "WOLOLOO"),
            [Present, Absent, Present, Absent, Present, Absent, Correct]
        );
    }

    #[test]
    fn classify_is_case_sensitive() {
        assert_eq!(classify("baard", "BAARD"), [Absent; 5]);
    }

    #[test]
    fn word_not_guessed_with_one_absent() {
        let feedback = Feedback::new("PAARS", vec![Correct, Correct, Correct, Correct, Absent]);
        assert!(!feedback.is_word_guessed());
        assert!(feedback.is_attempt_valid());
    }

    #[test]
    fn empty_feedback_is_not_a_win() {
        let feedback = Feedback::calculate("", "");
        assert!(!feedback.is_word_guessed());
    }

    #[test]
    fn base_hint_reveals_first_letter() {
        assert_eq!(base_hint("BAARD"), "B....");
        assert_eq!(base_hint("APEKOOL"), "A......");
        assert_eq!(base_hint(""), "");
    }

    #[test]
    fn give_hint_sequence() {
        let invalid = Feedback::new("BERGEN", vec![Invalid; 6]);
        let present = Feedback::new("DRAAD", vec![Absent, Present, Correct, Present, Correct]);
        let correct = Feedback::new("BAARD", vec![Correct; 5]);

        assert_eq!(invalid.give_hint("B...."), "B....");
        assert_eq!(present.give_hint("B...."), "B.A.D");
        assert_eq!(correct.give_hint("B.A.D"), "BAARD");
    }

    #[test]
    fn give_hint_never_hides_revealed_letters() {
        let miss = Feedback::calculate("KOKEN", "BAARD");
        assert_eq!(miss.give_hint("BA.RD"), "BA.RD");
    }

    #[test]
    fn give_hint_reveals_correct_even_if_unrevealed_before() {
        let feedback = Feedback::calculate("PAARS", "BAARD");
        assert_eq!(feedback.give_hint("....."), ".AAR.");
    }
}
