//! Game persistence
//!
//! The domain treats a [`Game`] as an opaque aggregate keyed by an id handed
//! out here. Storage format is up to the implementation.

mod memory;

pub use memory::InMemoryGameRepository;

use crate::core::{Game, GameId};

/// Storage of games by identifier
pub trait GameRepository {
    /// Reserve a fresh identifier for a new game
    fn next_id(&mut self) -> GameId;

    /// Insert or replace `game` under its id
    fn save(&mut self, game: &Game);

    fn find_by_id(&self, id: GameId) -> Option<Game>;

    /// Every stored game, ordered by id
    fn find_all(&self) -> Vec<Game>;
}
