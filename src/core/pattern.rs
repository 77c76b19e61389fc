//! Guess scoring and feedback patterns
//!
//! A pattern holds one [`Tile`] per letter position:
//! - `Absent` (gray): letter not in the target, or every occurrence already credited
//! - `Present` (yellow): letter in the target at another position
//! - `Correct` (green): letter in the correct position

use super::{WORD_LENGTH, Word};
use serde::{Deserialize, Serialize};

/// Classification of a single letter position
///
/// Ordered by rank, so `Correct > Present > Absent`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tile {
    Absent,
    Present,
    Correct,
}

impl Tile {
    /// Emoji used in share text
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }
}

/// Feedback pattern for one guess against one target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pattern([Tile; WORD_LENGTH]);

impl Pattern {
    /// All greens (perfect match)
    pub const PERFECT: Self = Self([Tile::Correct; WORD_LENGTH]);

    /// Create a pattern from explicit tiles
    #[inline]
    #[must_use]
    pub const fn new(tiles: [Tile; WORD_LENGTH]) -> Self {
        Self(tiles)
    }

    /// Get the tiles in position order
    #[inline]
    #[must_use]
    pub const fn tiles(&self) -> &[Tile; WORD_LENGTH] {
        &self.0
    }

    /// Check if this is a perfect match (all greens)
    #[inline]
    #[must_use]
    pub fn is_perfect(self) -> bool {
        self == Self::PERFECT
    }

    /// Calculate the pattern when `guess` is played against `target`
    ///
    /// Implements the exact tile-coloring rules, including repeated letters.
    ///
    /// # Algorithm
    /// 1. First pass: mark exact matches (greens) and remove them from the target pool
    /// 2. Second pass: mark present-but-wrong-position (yellows) from the remaining pool,
    ///    consuming one occurrence per yellow
    ///
    /// A letter is therefore never credited more times than it occurs in the target.
    ///
    /// # Examples
    /// ```
    /// use wordgame::core::{Pattern, Tile, Word};
    ///
    /// let guess = Word::new("crane").unwrap();
    /// let target = Word::new("slate").unwrap();
    /// let pattern = Pattern::calculate(&guess, &target);
    ///
    /// assert_eq!(pattern.tiles()[2], Tile::Correct);
    /// assert_eq!(pattern.tiles()[1], Tile::Absent);
    /// ```
    #[must_use]
    pub fn calculate(guess: &Word, target: &Word) -> Self {
        let mut result = [Tile::Absent; WORD_LENGTH];
        let mut target_available = target.char_counts();

        // Allow: Index needed to access guess[i], target[i], and set result[i]
        #[allow(clippy::needless_range_loop)]
        for i in 0..WORD_LENGTH {
            if guess.char_at(i) == target.char_at(i) {
                result[i] = Tile::Correct;
                if let Some(count) = target_available.get_mut(&guess.char_at(i)) {
                    *count = count.saturating_sub(1);
                }
            }
        }

        #[allow(clippy::needless_range_loop)]
        for i in 0..WORD_LENGTH {
            if result[i] == Tile::Correct {
                continue;
            }
            if let Some(count) = target_available.get_mut(&guess.char_at(i))
                && *count > 0
            {
                result[i] = Tile::Present;
                *count -= 1;
            }
        }

        Self(result)
    }

    /// Count the number of green tiles
    #[must_use]
    pub fn count_correct(self) -> usize {
        self.0.iter().filter(|&&t| t == Tile::Correct).count()
    }

    /// Count the number of yellow tiles
    #[must_use]
    pub fn count_present(self) -> usize {
        self.0.iter().filter(|&&t| t == Tile::Present).count()
    }

    /// Convert pattern to emoji string
    ///
    /// # Examples
    /// ```
    /// use wordgame::core::{Pattern, Word};
    ///
    /// let p = Pattern::calculate(&Word::new("about").unwrap(), &Word::new("about").unwrap());
    /// assert_eq!(p.to_emoji(), "🟩🟩🟩🟩🟩");
    /// ```
    #[must_use]
    pub fn to_emoji(self) -> String {
        self.0.iter().map(|t| t.emoji()).collect()
    }
}

/// Score `guess` against `target`
///
/// Shorthand for [`Pattern::calculate`].
#[inline]
#[must_use]
pub fn score(guess: &Word, target: &Word) -> Pattern {
    Pattern::calculate(guess, target)
}
