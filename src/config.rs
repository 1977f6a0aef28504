//! Game rules
//!
//! Fixed constants shared by the domain, the service and the CLI.

/// Guesses allowed per round
pub const ATTEMPT_LIMIT: usize = 5;

/// Word length of the first round, and of every round after a maximum-length one
pub const MIN_WORD_LENGTH: usize = 5;

/// Longest word a round can use
pub const MAX_WORD_LENGTH: usize = 7;

/// Character used for unrevealed hint positions
pub const HINT_PLACEHOLDER: char = '.';

/// Points for every attempt left unused when a round is won
pub const POINTS_PER_SPARE_ATTEMPT: u32 = 5;

/// Points awarded for winning a round regardless of attempts used
pub const WIN_BONUS: u32 = 5;

/// Environment variable holding the log level filter
pub const LOG_ENV_VAR: &str = "LINGO_LOG";

/// Score for a round won after `attempts` guesses.
///
/// Winning on the first attempt yields 25 points, on the last one 5.
#[must_use]
pub const fn round_score(attempts: usize) -> u32 {
    let spare = ATTEMPT_LIMIT.saturating_sub(attempts) as u32;
    POINTS_PER_SPARE_ATTEMPT * spare + WIN_BONUS
}
