//! Errors raised by the game domain and the application service

use super::{GameId, GameStatus};
use thiserror::Error;

/// Everything that can go wrong while playing a game
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("current game state doesn't allow this action: {0}")]
    GameState(GameStatus),

    #[error("attempt limit reached: {0} attempts already made this round")]
    AttemptLimitReached(usize),

    #[error("there are no rounds yet, please start a round")]
    NoActiveRounds,

    #[error("no feedback yet, please play a guess first")]
    NoFeedbackFound,

    #[error("no word of length {0} is available")]
    WordLengthNotSupported(usize),

    #[error("a round needs a word of at least one letter")]
    EmptyWord,

    #[error("game with id {0} can not be found")]
    GameNotFound(GameId),

    #[error("no games found")]
    NoGamesFound,
}

impl GameError {
    /// HTTP status equivalent used when translating at a protocol boundary
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        match self {
            Self::GameState(_)
            | Self::AttemptLimitReached(_)
            | Self::NoActiveRounds
            | Self::NoFeedbackFound => 400,
            Self::GameNotFound(_) | Self::NoGamesFound => 404,
            Self::WordLengthNotSupported(_) | Self::EmptyWord => 500,
        }
    }

    /// True for errors caused by the caller rather than by configuration
    #[must_use]
    pub const fn is_client_error(&self) -> bool {
        self.status_code() < 500
    }
}
