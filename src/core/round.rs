//! A single round: one secret word, up to five attempts

use super::feedback::base_hint;
use super::{Feedback, GameError};
use crate::config::ATTEMPT_LIMIT;
use serde::{Deserialize, Serialize};

/// One word-guessing episode
///
/// The attempt count is the length of the feedback history, so the two can
/// never disagree. The hint is running state advanced once per guess.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Round {
    word_to_guess: String,
    feedback_history: Vec<Feedback>,
    last_hint: String,
}

impl Round {
    pub fn new(word_to_guess: impl Into<String>) -> Self {
        let word_to_guess = word_to_guess.into();
        let last_hint = base_hint(&word_to_guess);
        Self {
            word_to_guess,
            feedback_history: Vec::new(),
            last_hint,
        }
    }

    /// Record an attempt and return its feedback
    ///
    /// Attempts of the wrong length are recorded as invalid feedback and still
    /// use up an attempt.
    ///
    /// # Errors
    /// Returns [`GameError::AttemptLimitReached`] once five attempts were made.
    pub fn guess(&mut self, attempt: &str) -> Result<&Feedback, GameError> {
        if self.attempt_limit_reached() {
            return Err(GameError::AttemptLimitReached(self.attempts()));
        }

        let feedback = Feedback::calculate(attempt, &self.word_to_guess);
        self.last_hint = feedback.give_hint(&self.last_hint);
        self.feedback_history.push(feedback);

        self.last_feedback()
    }

    /// Current hint; first letter plus every letter guessed correctly so far
    #[must_use]
    pub fn hint(&self) -> &str {
        &self.last_hint
    }

    /// Most recent feedback
    ///
    /// # Errors
    /// Returns [`GameError::NoFeedbackFound`] before the first guess.
    pub fn last_feedback(&self) -> Result<&Feedback, GameError> {
        self.feedback_history.last().ok_or(GameError::NoFeedbackFound)
    }

    #[must_use]
    pub fn feedback_history(&self) -> &[Feedback] {
        &self.feedback_history
    }

    #[must_use]
    pub fn attempts(&self) -> usize {
        self.feedback_history.len()
    }

    #[must_use]
    pub fn attempts_left(&self) -> usize {
        ATTEMPT_LIMIT.saturating_sub(self.attempts())
    }

    #[must_use]
    pub fn attempt_limit_reached(&self) -> bool {
        self.attempts() >= ATTEMPT_LIMIT
    }

    /// True when the last attempt matched the word
    #[must_use]
    pub fn is_word_guessed(&self) -> bool {
        self.feedback_history
            .last()
            .is_some_and(Feedback::is_word_guessed)
    }

    #[must_use]
    pub fn current_word_length(&self) -> usize {
        self.word_to_guess.chars().count()
    }

    /// The secret word; kept out of every progress projection
    #[must_use]
    pub fn word_to_guess(&self) -> &str {
        &self.word_to_guess
    }
}
