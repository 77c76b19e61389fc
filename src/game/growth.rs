//! Growth mode progression
//!
//! Stages ask for 1, 2, 4 and then 8 simultaneous words. A stage's guess
//! limit is `6 + carryover + stage_index`, where carryover is whatever the
//! previous stage left unused.

use super::round::{Round, RoundStatus};
use crate::core::MAX_GUESSES;
use crate::wordlists::WordBank;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Words per stage
pub const STAGE_WORD_COUNTS: [usize; 4] = [1, 2, 4, 8];

/// Index of the last stage
pub const FINAL_STAGE: usize = STAGE_WORD_COUNTS.len() - 1;

/// Guess limit for a stage given the carried-over bonus
#[must_use]
pub const fn stage_guess_limit(stage_index: usize, carryover: usize) -> usize {
    MAX_GUESSES + carryover + stage_index
}

/// Unused guesses that roll into the next stage
#[must_use]
pub const fn carryover_after(guess_limit: usize, guesses_used: usize) -> usize {
    guess_limit.saturating_sub(guesses_used)
}

/// One cleared stage on the scoreboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StageRecord {
    pub stage_index: usize,
    pub word_count: usize,
    pub guesses_used: usize,
}

/// Where a growth run stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GrowthPhase {
    Playing,
    /// Current stage solved, next stage not started yet
    StageCleared,
    /// Final stage solved
    Complete,
    /// A stage ran out of guesses
    Failed,
}

/// What the last guess did to the run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GrowthEvent {
    StageCleared { record: StageRecord, carryover: usize },
    Complete { record: StageRecord },
    Failed { stage_index: usize },
}

/// A growth run: current stage, carried bonus, scoreboard and the live round
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GrowthState {
    stage_index: usize,
    carryover: usize,
    scoreboard: Vec<StageRecord>,
    round: Round,
}

impl GrowthState {
    /// Start a new run at stage 0 with no bonus
    pub fn start<R: Rng + ?Sized>(bank: &WordBank, rng: &mut R) -> Self {
        Self {
            stage_index: 0,
            carryover: 0,
            scoreboard: Vec::new(),
            round: stage_round(0, 0, bank, rng),
        }
    }

    /// Rebuild a run from persisted parts
    ///
    /// Returns `None` if the stage is out of range or the round does not have
    /// the stage's word count.
    #[must_use]
    pub fn from_parts(
        stage_index: usize,
        carryover: usize,
        scoreboard: Vec<StageRecord>,
        round: Round,
    ) -> Option<Self> {
        let word_count = *STAGE_WORD_COUNTS.get(stage_index)?;
        if round.targets().len() != word_count || scoreboard.len() > STAGE_WORD_COUNTS.len() {
            return None;
        }
        Some(Self {
            stage_index,
            carryover,
            scoreboard,
            round,
        })
    }

    #[must_use]
    pub const fn stage_index(&self) -> usize {
        self.stage_index
    }

    #[must_use]
    pub const fn word_count(&self) -> usize {
        STAGE_WORD_COUNTS[self.stage_index]
    }

    /// Bonus earned by the most recently cleared stage
    #[must_use]
    pub const fn carryover(&self) -> usize {
        self.carryover
    }

    #[must_use]
    pub fn scoreboard(&self) -> &[StageRecord] {
        &self.scoreboard
    }

    #[must_use]
    pub const fn round(&self) -> &Round {
        &self.round
    }

    pub(crate) const fn round_mut(&mut self) -> &mut Round {
        &mut self.round
    }

    #[must_use]
    pub fn phase(&self) -> GrowthPhase {
        match self.round.status() {
            RoundStatus::InProgress => GrowthPhase::Playing,
            RoundStatus::Lost => GrowthPhase::Failed,
            RoundStatus::Won if self.stage_index == FINAL_STAGE => GrowthPhase::Complete,
            RoundStatus::Won => GrowthPhase::StageCleared,
        }
    }

    /// Settle the stage once its round has ended
    ///
    /// A cleared stage goes on the scoreboard and its unused guesses become
    /// the carryover. Returns `None` while the round is still going.
    pub(crate) fn finish_stage(&mut self) -> Option<GrowthEvent> {
        match self.round.status() {
            RoundStatus::InProgress => None,
            RoundStatus::Lost => Some(GrowthEvent::Failed {
                stage_index: self.stage_index,
            }),
            RoundStatus::Won => {
                let guesses_used = self.round.guesses().len();
                let record = StageRecord {
                    stage_index: self.stage_index,
                    word_count: self.word_count(),
                    guesses_used,
                };
                self.scoreboard.push(record);
                self.carryover = carryover_after(self.round.guess_limit(), guesses_used);

                if self.stage_index == FINAL_STAGE {
                    Some(GrowthEvent::Complete { record })
                } else {
                    Some(GrowthEvent::StageCleared {
                        record,
                        carryover: self.carryover,
                    })
                }
            }
        }
    }

    /// Move to the next stage after a clear
    ///
    /// Guesses and solved flags reset; the carryover and scoreboard stay.
    /// Returns `false` unless the run is in `StageCleared`.
    pub fn advance<R: Rng + ?Sized>(&mut self, bank: &WordBank, rng: &mut R) -> bool {
        if self.phase() != GrowthPhase::StageCleared {
            return false;
        }
        self.stage_index += 1;
        self.round = stage_round(self.stage_index, self.carryover, bank, rng);
        true
    }
}

fn stage_round<R: Rng + ?Sized>(
    stage_index: usize,
    carryover: usize,
    bank: &WordBank,
    rng: &mut R,
) -> Round {
    let targets = bank.pick_unique_set(STAGE_WORD_COUNTS[stage_index], rng);
    Round::begin(targets, stage_guess_limit(stage_index, carryover))
}
