//! Rounds, modes, statistics and the session that drives them

pub mod growth;
mod input;
mod mode;
mod round;
mod session;
mod stats;

pub use growth::{GrowthEvent, GrowthPhase, GrowthState, StageRecord};
pub use input::{KeyInput, Status, Tone};
pub use mode::{DailyState, InfiniteState, Mode, ModeKind};
pub use round::{GuessOutcome, Rejection, Round, RoundStatus};
pub use session::{KeyResponse, NextRound, Session, TurnReport};
pub use stats::{CombinedStats, ModeStats, Statistics};
