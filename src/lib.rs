//! Lingo Trainer
//!
//! A Lingo word-guessing trainer: guess a secret word of growing length,
//! round after round, with per-letter feedback and a hint that reveals
//! correctly guessed letters. Score accumulates until a round is lost.
//!
//! # Quick Start
//!
//! ```rust
//! use lingo_trainer::core::{Game, GameStatus};
//!
//! let mut game = Game::new(1);
//! game.start_new_round("BAARD").unwrap();
//!
//! game.guess("BAARS").unwrap();
//! assert_eq!(game.latest_round().unwrap().hint(), "BAAR.");
//!
//! game.guess("BAARD").unwrap();
//! assert_eq!(game.score(), 20);
//! assert_eq!(game.status(), GameStatus::WaitingForRound);
//! assert_eq!(game.provide_next_word_length(), 6);
//! ```

// Game rules
pub mod config;

// Core domain types
pub mod core;

// Logging setup
pub mod logging;

// Game storage
pub mod repository;

// Application service
pub mod service;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
