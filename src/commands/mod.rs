//! Command implementations

pub mod bot;
pub mod play;
pub mod simulate;
pub mod words;

pub use bot::Bot;
pub use play::run_play;
pub use simulate::{GameOutcome, SimulateConfig, SimulationResult, play_game, run_simulation};
pub use words::{WordListStats, analyze_word_list};
