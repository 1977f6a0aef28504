//! Application service
//!
//! Loads a game from the repository, applies one domain operation, saves it
//! back and returns a fresh projection. One service instance handles one
//! mutation at a time (`&mut self`).

use crate::core::{Game, GameError, GameId, GameStatus, GameSummary, Progress};
use crate::repository::GameRepository;
use crate::wordlists::WordSource;
use log::{debug, info};

/// Drives games through a repository and a word source
pub struct GameService<R, W> {
    repository: R,
    words: W,
}

impl<R: GameRepository, W: WordSource> GameService<R, W> {
    pub const fn new(repository: R, words: W) -> Self {
        Self { repository, words }
    }

    /// Create and store a new game waiting for its first round
    pub fn start_game(&mut self) -> GameSummary {
        let game = Game::new(self.repository.next_id());
        self.repository.save(&game);

        info!("game {}: created", game.id());
        GameSummary::from(&game)
    }

    /// Start the next round with a word of the length the game asks for
    ///
    /// # Errors
    /// - [`GameError::GameNotFound`] for an unknown id
    /// - [`GameError::GameState`] unless the game waits for a round
    /// - [`GameError::WordLengthNotSupported`] when no word of the length exists
    pub fn start_new_round(&mut self, id: GameId) -> Result<Progress, GameError> {
        let mut game = self.find_game(id)?;
        game.ensure_status(GameStatus::WaitingForRound)?;

        let length = game.provide_next_word_length();
        let word = self
            .words
            .random_word_of_length(length)
            .ok_or(GameError::WordLengthNotSupported(length))?;

        game.start_new_round(word)?;
        self.repository.save(&game);

        info!("game {id}: round {} started with {length} letters", game.rounds().len());
        Ok(Progress::from_game(&game))
    }

    /// Submit an attempt for the current round
    ///
    /// The attempt is trimmed and upper-cased to match the word lists.
    ///
    /// # Errors
    /// - [`GameError::GameNotFound`] for an unknown id
    /// - [`GameError::GameState`] unless a round is being played
    pub fn guess(&mut self, id: GameId, attempt: &str) -> Result<Progress, GameError> {
        let mut game = self.find_game(id)?;
        let attempt = attempt.trim().to_uppercase();

        let feedback = game.guess(&attempt)?;
        debug!("game {id}: {attempt} -> {:?}", feedback.marks());

        match game.status() {
            GameStatus::WaitingForRound => info!("game {id}: round won, score {}", game.score()),
            GameStatus::Eliminated => info!("game {id}: eliminated with score {}", game.score()),
            GameStatus::Playing => {}
        }

        self.repository.save(&game);
        Ok(Progress::from_game(&game))
    }

    /// Current progress of a game
    ///
    /// # Errors
    /// Returns [`GameError::GameNotFound`] for an unknown id.
    pub fn progress(&self, id: GameId) -> Result<Progress, GameError> {
        self.find_game(id).map(|game| Progress::from_game(&game))
    }

    /// Summaries of every stored game
    ///
    /// # Errors
    /// Returns [`GameError::NoGamesFound`] when nothing is stored.
    pub fn all_games(&self) -> Result<Vec<GameSummary>, GameError> {
        let games = self.repository.find_all();
        if games.is_empty() {
            return Err(GameError::NoGamesFound);
        }
        Ok(games.iter().map(GameSummary::from).collect())
    }

    #[must_use]
    pub const fn repository(&self) -> &R {
        &self.repository
    }

    fn find_game(&self, id: GameId) -> Result<Game, GameError> {
        self.repository
            .find_by_id(id)
            .ok_or(GameError::GameNotFound(id))
    }
}
