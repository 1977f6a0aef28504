//! Core domain types for Lingo
//!
//! Letter marks, attempt feedback, rounds and the game state machine. These
//! types are plain owned data with no I/O; storage and word selection live in
//! [`crate::repository`] and [`crate::wordlists`].

mod error;
mod feedback;
mod game;
mod mark;
mod progress;
mod round;

pub use error::GameError;
pub use feedback::{Feedback, base_hint, classify};
pub use game::{Game, GameId, GameStatus};
pub use mark::Mark;
pub use progress::{GameSummary, Progress};
pub use round::Round;
