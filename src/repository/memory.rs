//! In-process repository backed by a hash map

use super::GameRepository;
use crate::core::{Game, GameId};
use rustc_hash::FxHashMap;

/// Keeps games in memory for the lifetime of the process
#[derive(Debug, Default, Clone)]
pub struct InMemoryGameRepository {
    games: FxHashMap<GameId, Game>,
    last_id: GameId,
}

impl InMemoryGameRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.games.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }
}

impl GameRepository for InMemoryGameRepository {
    fn next_id(&mut self) -> GameId {
        self.last_id += 1;
        self.last_id
    }

    fn save(&mut self, game: &Game) {
        self.games.insert(game.id(), game.clone());
    }

    fn find_by_id(&self, id: GameId) -> Option<Game> {
        self.games.get(&id).cloned()
    }

    fn find_all(&self) -> Vec<Game> {
        let mut games: Vec<Game> = self.games.values().cloned().collect();
        games.sort_by_key(Game::id);
        games
    }
}
