//! Core domain types for the puzzle
//!
//! Words, scoring and keyboard hints. Everything here is pure and has no
//! knowledge of modes, persistence or rendering.

mod keyboard;
mod pattern;
mod word;

pub use keyboard::{KeyHints, KeyState, Keyboard};
pub use pattern::{Pattern, Tile, score};
pub use word::{Word, WordError};

/// Letters per word
pub const WORD_LENGTH: usize = 5;

/// Standard guess budget for a single-board round
pub const MAX_GUESSES: usize = 6;
