//! Simulation command
//!
//! Plays many complete games with the automated [`Bot`] and aggregates the
//! results. Games are independent, so each one gets its own service,
//! repository and seeded word list and they run in parallel.

use super::bot::Bot;
use crate::core::{GameError, GameStatus, Progress};
use crate::repository::{GameRepository, InMemoryGameRepository};
use crate::service::GameService;
use crate::wordlists::WordList;
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use std::collections::BTreeMap;
use std::time::{Duration, Instant};

/// Configuration for a simulation run
#[derive(Debug, Clone)]
pub struct SimulateConfig {
    pub games: usize,
    pub seed: u64,
    /// Games still alive after this many rounds are stopped
    pub max_rounds: usize,
    pub show_progress: bool,
}

impl SimulateConfig {
    #[must_use]
    pub const fn new(games: usize, seed: u64) -> Self {
        Self {
            games,
            seed,
            max_rounds: 30,
            show_progress: false,
        }
    }
}

/// Outcome of one simulated game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameOutcome {
    pub score: u32,
    pub rounds_won: usize,
    pub eliminated: bool,
}

/// Aggregated simulation statistics
#[derive(Debug)]
pub struct SimulationResult {
    pub total_games: usize,
    pub total_score: u64,
    pub average_score: f64,
    pub best_score: u32,
    pub average_rounds_won: f64,
    pub eliminated: usize,
    /// Games per number of rounds won
    pub rounds_distribution: BTreeMap<usize, usize>,
    pub duration: Duration,
}

/// Play one game to elimination (or the round cap)
///
/// # Errors
///
/// Propagates service errors; with a word list covering every round length
/// none are expected.
pub fn play_game(
    words: WordList,
    game_seed: u64,
    max_rounds: usize,
) -> Result<GameOutcome, GameError> {
    let dictionary: Vec<String> = words
        .lengths()
        .into_iter()
        .flat_map(|length| words.words_of_length(length).to_vec())
        .collect();
    let mut bot = Bot::new(&dictionary, game_seed);
    let mut service = GameService::new(InMemoryGameRepository::new(), words);

    let id = service.start_game().id;
    let mut final_progress = service.progress(id)?;

    for _ in 0..max_rounds {
        let mut progress: Progress = service.start_new_round(id)?;

        while progress.status == GameStatus::Playing {
            // The secret word is in the dictionary and agrees with its own
            // feedback, so a candidate always exists
            let Some(attempt) =
                bot.next_guess(&progress.current_hint, &progress.feedback_history)
            else {
                break;
            };
            progress = service.guess(id, attempt)?;
        }

        let finished = progress.status != GameStatus::WaitingForRound;
        final_progress = progress;
        if finished {
            break;
        }
    }

    let rounds_won = service
        .repository()
        .find_by_id(id)
        .ok_or(GameError::GameNotFound(id))?
        .rounds_won();

    Ok(GameOutcome {
        score: final_progress.score,
        rounds_won,
        eliminated: final_progress.status == GameStatus::Eliminated,
    })
}

/// Run `config.games` games in parallel and aggregate them
///
/// # Errors
///
/// Returns the first error any game produced.
pub fn run_simulation(
    words: &WordList,
    config: &SimulateConfig,
) -> Result<SimulationResult, GameError> {
    let start = Instant::now();

    let pb = if config.show_progress {
        let pb = ProgressBar::new(config.games as u64);
        if let Ok(style) = ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%)")
        {
            pb.set_style(style.progress_chars("█▓▒░"));
        }
        pb
    } else {
        ProgressBar::hidden()
    };

    let outcomes: Vec<GameOutcome> = (0..config.games)
        .into_par_iter()
        .map(|index| {
            let game_seed = config.seed.wrapping_add(index as u64);
            let outcome = play_game(words.reseeded(game_seed), game_seed, config.max_rounds);
            pb.inc(1);
            outcome
        })
        .collect::<Result<_, _>>()?;

    pb.finish_and_clear();

    Ok(summarize(&outcomes, start.elapsed()))
}

fn summarize(outcomes: &[GameOutcome], duration: Duration) -> SimulationResult {
    let total_games = outcomes.len();
    let total_score: u64 = outcomes.iter().map(|o| u64::from(o.score)).sum();
    let total_rounds_won: usize = outcomes.iter().map(|o| o.rounds_won).sum();

    let mut rounds_distribution = BTreeMap::new();
    for outcome in outcomes {
        *rounds_distribution.entry(outcome.rounds_won).or_insert(0) += 1;
    }

    let per_game = |total: f64| {
        if total_games == 0 {
            0.0
        } else {
            total / total_games as f64
        }
    };

    SimulationResult {
        total_games,
        total_score,
        average_score: per_game(total_score as f64),
        best_score: outcomes.iter().map(|o| o.score).max().unwrap_or(0),
        average_rounds_won: per_game(total_rounds_won as f64),
        eliminated: outcomes.iter().filter(|o| o.eliminated).count(),
        rounds_distribution,
        duration,
    }
}
