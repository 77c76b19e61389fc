//! Wordgame
//!
//! A five-letter word guessing game with a daily puzzle, unlimited play and a
//! multi-board growth mode, plus persistent statistics.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use wordgame::core::{Word, score};
//!
//! let guess = Word::new("sassy").unwrap();
//! let target = Word::new("abyss").unwrap();
//!
//! let pattern = score(&guess, &target);
//! println!("{}", pattern.to_emoji());
//! ```

// Core domain types
pub mod core;

// Word lists
pub mod wordlists;

// Date keys and the daily clock
pub mod clock;

// Configuration file
pub mod config;

// Rounds, modes, statistics
pub mod game;

// Saved state
pub mod storage;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
