//! Score a single guess against a target

use crate::core::{Pattern, Word, score};
use anyhow::{Context, Result};

/// Result of scoring one guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreResult {
    pub guess: Word,
    pub target: Word,
    pub pattern: Pattern,
}

/// Validate both words and score them
///
/// # Errors
///
/// Returns an error if either word is not five ASCII letters.
pub fn score_words(guess: &str, target: &str) -> Result<ScoreResult> {
    let guess = Word::new(guess).with_context(|| format!("invalid guess '{guess}'"))?;
    let target = Word::new(target).with_context(|| format!("invalid target '{target}'"))?;
    let pattern = score(&guess, &target);
    Ok(ScoreResult {
        guess,
        target,
        pattern,
    })
}
