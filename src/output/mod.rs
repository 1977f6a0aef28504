//! Terminal output formatting
//!
//! Display utilities for the play loop and command results.

pub mod display;
pub mod formatters;

pub use display::{print_games, print_progress, print_simulation_result, print_word_stats};
