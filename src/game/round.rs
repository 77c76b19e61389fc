//! A single round: one or more boards sharing one guess history
//!
//! Every accepted guess is scored against each board that is still live.
//! A solved board is frozen: later guesses neither rescore it nor add rows to it.

use crate::core::{KeyHints, Keyboard, Pattern, WORD_LENGTH, Word, score};
use crate::wordlists::WordBank;
use thiserror::Error;

/// Why a submitted guess was not accepted
///
/// All of these are recoverable warnings; the round is left untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Rejection {
    #[error("Not enough letters. Keep typing.")]
    NotEnoughLetters,
    #[error("Word not in list. Try another one.")]
    NotInWordList,
    #[error("This round is already over.")]
    RoundOver,
}

/// Where a round stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundStatus {
    InProgress,
    Won,
    Lost,
}

/// Result of an accepted guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessOutcome {
    pub guess: Word,
    /// One entry per board; `None` for boards that were already solved
    pub boards: Vec<Option<Pattern>>,
    /// Boards solved by this guess
    pub newly_solved: Vec<usize>,
    pub all_solved: bool,
    pub out_of_guesses: bool,
}

/// State of one round
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Round {
    targets: Vec<Word>,
    guesses: Vec<Word>,
    solved: Vec<bool>,
    guess_limit: usize,
    is_over: bool,
    result_recorded: bool,
}

impl Round {
    /// Start a fresh round
    #[must_use]
    pub fn begin(targets: Vec<Word>, guess_limit: usize) -> Self {
        let solved = vec![false; targets.len()];
        Self {
            targets,
            guesses: Vec::new(),
            solved,
            guess_limit,
            is_over: false,
            result_recorded: false,
        }
    }

    /// Rebuild a round from persisted parts
    ///
    /// Solved flags and the terminal flag are recomputed from the history.
    /// Returns `None` for shapes no real round can have: no targets, a zero
    /// limit, a history longer than the limit, or guesses after the round ended.
    #[must_use]
    pub fn restore(
        targets: Vec<Word>,
        guesses: Vec<Word>,
        guess_limit: usize,
        result_recorded: bool,
    ) -> Option<Self> {
        if targets.is_empty() || guess_limit == 0 || guesses.len() > guess_limit {
            return None;
        }

        let mut round = Self::begin(targets, guess_limit);
        for guess in guesses {
            if round.is_over {
                return None;
            }
            round.apply(guess);
        }
        round.result_recorded = result_recorded && round.is_over;
        Some(round)
    }

    /// Submit a guess
    ///
    /// # Errors
    ///
    /// - `RoundOver` if the round already ended
    /// - `NotEnoughLetters` if the guess is not exactly five characters
    /// - `NotInWordList` if the guess is not an accepted word
    pub fn submit(&mut self, guess: &str, bank: &WordBank) -> Result<GuessOutcome, Rejection> {
        if self.is_over {
            return Err(Rejection::RoundOver);
        }
        if guess.chars().count() != WORD_LENGTH {
            return Err(Rejection::NotEnoughLetters);
        }

        let word = Word::new(guess).map_err(|_| Rejection::NotInWordList)?;
        if !bank.is_accepted(&word) {
            return Err(Rejection::NotInWordList);
        }

        Ok(self.apply(word))
    }

    fn apply(&mut self, guess: Word) -> GuessOutcome {
        let mut boards = Vec::with_capacity(self.targets.len());
        let mut newly_solved = Vec::new();

        for (index, target) in self.targets.iter().enumerate() {
            if self.solved[index] {
                boards.push(None);
                continue;
            }
            boards.push(Some(score(&guess, target)));
            if guess == *target {
                self.solved[index] = true;
                newly_solved.push(index);
            }
        }

        self.guesses.push(guess.clone());
        let all_solved = self.all_solved();
        let out_of_guesses = !all_solved && self.guesses.len() >= self.guess_limit;
        self.is_over = all_solved || out_of_guesses;

        GuessOutcome {
            guess,
            boards,
            newly_solved,
            all_solved,
            out_of_guesses,
        }
    }

    /// Mark the result as counted in statistics
    ///
    /// Returns `true` only the first time, and only once the round is over.
    pub fn mark_recorded(&mut self) -> bool {
        if !self.is_over || self.result_recorded {
            return false;
        }
        self.result_recorded = true;
        true
    }

    #[must_use]
    pub fn status(&self) -> RoundStatus {
        if self.all_solved() {
            RoundStatus::Won
        } else if self.is_over {
            RoundStatus::Lost
        } else {
            RoundStatus::InProgress
        }
    }

    #[must_use]
    pub fn targets(&self) -> &[Word] {
        &self.targets
    }

    #[must_use]
    pub fn guesses(&self) -> &[Word] {
        &self.guesses
    }

    #[must_use]
    pub fn solved(&self) -> &[bool] {
        &self.solved
    }

    #[must_use]
    pub fn all_solved(&self) -> bool {
        self.solved.iter().all(|&s| s)
    }

    #[must_use]
    pub const fn guess_limit(&self) -> usize {
        self.guess_limit
    }

    #[must_use]
    pub fn guesses_remaining(&self) -> usize {
        self.guess_limit.saturating_sub(self.guesses.len())
    }

    #[must_use]
    pub const fn is_over(&self) -> bool {
        self.is_over
    }

    #[must_use]
    pub const fn result_recorded(&self) -> bool {
        self.result_recorded
    }

    /// Rows shown on one board, ending with the guess that solved it
    ///
    /// # Panics
    /// Panics if `board` is out of range
    #[must_use]
    pub fn board_rows(&self, board: usize) -> Vec<(Word, Pattern)> {
        let target = &self.targets[board];
        let mut rows = Vec::new();
        for guess in &self.guesses {
            rows.push((guess.clone(), score(guess, target)));
            if guess == target {
                break;
            }
        }
        rows
    }

    /// Keyboard coloring for the renderer
    ///
    /// With more than one live board every board gets its own segment;
    /// otherwise the boards still in play are merged into one keyboard.
    #[must_use]
    pub fn key_hints(&self) -> KeyHints {
        let keyboards: Vec<Keyboard> = (0..self.targets.len())
            .map(|board| {
                let mut keyboard = Keyboard::new();
                for (guess, pattern) in self.board_rows(board) {
                    keyboard.record(&guess, pattern);
                }
                keyboard
            })
            .collect();

        let live: Vec<usize> = (0..self.targets.len())
            .filter(|&b| !self.solved[b])
            .collect();
        if live.len() > 1 {
            return KeyHints::PerBoard(keyboards);
        }

        let merge_from: Vec<usize> = if live.is_empty() {
            (0..keyboards.len()).collect()
        } else {
            live
        };
        let merged = merge_from
            .iter()
            .fold(Keyboard::new(), |acc, &b| acc.merged(&keyboards[b]));
        KeyHints::Merged(merged)
    }
}
