//! Game aggregate: rounds, score and the status state machine

use super::{Feedback, GameError, Round};
use crate::config::{MAX_WORD_LENGTH, MIN_WORD_LENGTH, round_score};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier assigned by the repository
pub type GameId = u64;

/// Game lifecycle
///
/// ```text
/// WaitingForRound --start_new_round--> Playing
/// Playing --word guessed--> WaitingForRound
/// Playing --fifth miss--> Eliminated
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GameStatus {
    /// No round in progress; a new one may be started
    #[default]
    WaitingForRound,
    /// A round is in progress and accepts guesses
    Playing,
    /// Terminal: a round was lost
    Eliminated,
}

impl GameStatus {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::WaitingForRound => "WAITING_FOR_ROUND",
            Self::Playing => "PLAYING",
            Self::Eliminated => "ELIMINATED",
        }
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One player's game
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    id: GameId,
    status: GameStatus,
    rounds: Vec<Round>,
    score: u32,
}

impl Game {
    #[must_use]
    pub fn new(id: GameId) -> Self {
        Self {
            id,
            status: GameStatus::WaitingForRound,
            rounds: Vec::new(),
            score: 0,
        }
    }

    /// Start a round with `word_to_guess`
    ///
    /// # Errors
    /// - [`GameError::GameState`] unless the game is waiting for a round
    /// - [`GameError::EmptyWord`] for an empty word
    pub fn start_new_round(&mut self, word_to_guess: impl Into<String>) -> Result<(), GameError> {
        self.ensure_status(GameStatus::WaitingForRound)?;

        let word_to_guess = word_to_guess.into();
        if word_to_guess.is_empty() {
            return Err(GameError::EmptyWord);
        }

        self.rounds.push(Round::new(word_to_guess));
        self.status = GameStatus::Playing;
        Ok(())
    }

    /// Guess the word of the current round
    ///
    /// A win adds the round score and waits for the next round; the fifth
    /// attempt without a win eliminates the player.
    ///
    /// # Errors
    /// Returns [`GameError::GameState`] unless a round is being played.
    pub fn guess(&mut self, attempt: &str) -> Result<&Feedback, GameError> {
        self.ensure_status(GameStatus::Playing)?;

        let round = self.rounds.last_mut().ok_or(GameError::NoActiveRounds)?;
        let won = round.guess(attempt)?.is_word_guessed();

        if won {
            self.score = self.score.saturating_add(round_score(round.attempts()));
            self.status = GameStatus::WaitingForRound;
        } else if round.attempt_limit_reached() {
            self.status = GameStatus::Eliminated;
        }

        self.latest_round()?.last_feedback()
    }

    /// Length of the word for the next round
    ///
    /// Starts at five and grows by one each round, going back to five after
    /// a seven-letter round.
    #[must_use]
    pub fn provide_next_word_length(&self) -> usize {
        match self.rounds.last().map(Round::current_word_length) {
            Some(length) if (MIN_WORD_LENGTH..MAX_WORD_LENGTH).contains(&length) => length + 1,
            _ => MIN_WORD_LENGTH,
        }
    }

    /// The round started last
    ///
    /// # Errors
    /// Returns [`GameError::NoActiveRounds`] before the first round.
    pub fn latest_round(&self) -> Result<&Round, GameError> {
        self.rounds.last().ok_or(GameError::NoActiveRounds)
    }

    pub(crate) fn ensure_status(&self, expected: GameStatus) -> Result<(), GameError> {
        if self.status != expected {
            return Err(GameError::GameState(self.status));
        }
        Ok(())
    }

    #[inline]
    #[must_use]
    pub const fn id(&self) -> GameId {
        self.id
    }

    #[inline]
    #[must_use]
    pub const fn status(&self) -> GameStatus {
        self.status
    }

    #[inline]
    #[must_use]
    pub const fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn rounds(&self) -> &[Round] {
        &self.rounds
    }

    #[must_use]
    pub fn is_playing(&self) -> bool {
        self.status == GameStatus::Playing
    }

    #[must_use]
    pub fn rounds_won(&self) -> usize {
        self.rounds.iter().filter(|r| r.is_word_guessed()).count()
    }
}
