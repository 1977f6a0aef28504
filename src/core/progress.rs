//! Read-only projections of a game for callers outside the domain

use super::{Feedback, Game, GameId, GameStatus};
use serde::{Deserialize, Serialize};

/// State of a game as shown to the player
///
/// Built on demand from the game; the secret word is never included.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Progress {
    pub id: GameId,
    pub status: GameStatus,
    pub score: u32,
    pub round_number: usize,
    pub attempts_left: usize,
    pub current_hint: String,
    pub feedback_history: Vec<Feedback>,
}

impl Progress {
    /// Project `game`; hint and history come from its latest round, if any
    #[must_use]
    pub fn from_game(game: &Game) -> Self {
        let round = game.latest_round().ok();

        Self {
            id: game.id(),
            status: game.status(),
            score: game.score(),
            round_number: game.rounds().len(),
            attempts_left: round.map_or(0, |r| r.attempts_left()),
            current_hint: round.map(|r| r.hint().to_string()).unwrap_or_default(),
            feedback_history: round.map(|r| r.feedback_history().to_vec()).unwrap_or_default(),
        }
    }

    #[must_use]
    pub fn last_feedback(&self) -> Option<&Feedback> {
        self.feedback_history.last()
    }
}

/// One line of a game listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSummary {
    pub id: GameId,
    pub status: GameStatus,
    pub score: u32,
    pub rounds_played: usize,
}

impl From<&Game> for GameSummary {
    fn from(game: &Game) -> Self {
        Self {
            id: game.id(),
            status: game.status(),
            score: game.score(),
            rounds_played: game.rounds().len(),
        }
    }
}
