//! Keyboard hint tracking
//!
//! Each letter keeps the best classification seen so far, ranked
//! `Correct > Present > Absent > Unknown`. A key never downgrades.

use super::{Pattern, Tile, Word};

/// Best-known state of one keyboard letter
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum KeyState {
    #[default]
    Unknown,
    Absent,
    Present,
    Correct,
}

impl From<Tile> for KeyState {
    fn from(tile: Tile) -> Self {
        match tile {
            Tile::Absent => Self::Absent,
            Tile::Present => Self::Present,
            Tile::Correct => Self::Correct,
        }
    }
}

/// Per-letter hints for a single board (or several boards merged)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Keyboard {
    keys: [KeyState; 26],
}

impl Keyboard {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one scored guess into the hints
    pub fn record(&mut self, guess: &Word, pattern: Pattern) {
        for (&letter, &tile) in guess.chars().iter().zip(pattern.tiles()) {
            let slot = &mut self.keys[usize::from(letter - b'a')];
            *slot = (*slot).max(tile.into());
        }
    }

    /// Best-known state for a letter; non-letters are always `Unknown`
    #[must_use]
    pub fn state(&self, letter: char) -> KeyState {
        let lower = letter.to_ascii_lowercase();
        if lower.is_ascii_lowercase() {
            self.keys[(lower as u8 - b'a') as usize]
        } else {
            KeyState::Unknown
        }
    }

    /// Combine with another keyboard, keeping the higher rank per letter
    #[must_use]
    pub fn merged(mut self, other: &Self) -> Self {
        for (mine, theirs) in self.keys.iter_mut().zip(other.keys) {
            *mine = (*mine).max(theirs);
        }
        self
    }
}

/// Keyboard coloring handed to the renderer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyHints {
    /// One classification per letter
    Merged(Keyboard),
    /// One keyboard per board, in board order, for segmented keys
    PerBoard(Vec<Keyboard>),
}

impl KeyHints {
    /// Per-board segments for a letter (a single segment when merged)
    #[must_use]
    pub fn segments(&self, letter: char) -> Vec<KeyState> {
        match self {
            Self::Merged(keyboard) => vec![keyboard.state(letter)],
            Self::PerBoard(boards) => boards.iter().map(|b| b.state(letter)).collect(),
        }
    }
}
