//! Versioned JSON records and migration of older shapes
//!
//! Statistics have gone through three layouts:
//!
//! - v0: one flat `{gamesPlayed, wins, distribution}` object, which was the
//!   unlimited mode's numbers
//! - v1: `{modes: {...}}` without a version, possibly carrying the retired
//!   two-word `duo` mode
//! - v2: `{version: 2, modes: {daily, infinite, growth}}`
//!
//! Decoders return `None` for anything they cannot make sense of; the caller
//! then starts from zero.

use crate::core::Word;
use crate::game::{
    DailyState, GrowthState, InfiniteState, Mode, ModeStats, Round, StageRecord, Statistics,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::debug;

/// Layout written by this version
pub const SCHEMA_VERSION: u32 = 2;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RoundRecord {
    targets: Vec<Word>,
    #[serde(default)]
    guesses: Vec<Word>,
    guess_limit: usize,
    #[serde(default)]
    result_recorded: bool,
}

impl From<&Round> for RoundRecord {
    fn from(round: &Round) -> Self {
        Self {
            targets: round.targets().to_vec(),
            guesses: round.guesses().to_vec(),
            guess_limit: round.guess_limit(),
            result_recorded: round.result_recorded(),
        }
    }
}

impl RoundRecord {
    fn into_round(self) -> Option<Round> {
        Round::restore(
            self.targets,
            self.guesses,
            self.guess_limit,
            self.result_recorded,
        )
    }
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StatsRecord {
    version: u32,
    modes: Statistics,
}

/// v1 statistics, which may still hold the two-word mode
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct LegacyModes {
    daily: Option<ModeStats>,
    infinite: Option<ModeStats>,
    growth: Option<ModeStats>,
    duo: Option<ModeStats>,
}

impl LegacyModes {
    fn migrate(self) -> Statistics {
        let growth = self.growth.or(self.duo).unwrap_or_default();
        Statistics::from_modes(
            self.daily.unwrap_or_default(),
            self.infinite.unwrap_or_default(),
            growth,
        )
    }
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct DailyRecord {
    version: u32,
    date_key: NaiveDate,
    round: RoundRecord,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct InfiniteRecord {
    version: u32,
    round: RoundRecord,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GrowthRecord {
    version: u32,
    stage_index: usize,
    #[serde(default)]
    carryover_guesses: usize,
    #[serde(default)]
    completed_rounds: Vec<StageRecord>,
    round: RoundRecord,
}

enum StatsShape {
    Current,
    Nested,
    Flat,
}

fn stats_shape(object: &Map<String, Value>) -> Option<StatsShape> {
    let versioned = object
        .get("version")
        .and_then(Value::as_u64)
        .is_some_and(|v| v >= 2);
    if versioned && object.contains_key("modes") {
        return Some(StatsShape::Current);
    }
    if object.get("modes").is_some_and(Value::is_object) {
        return Some(StatsShape::Nested);
    }
    let flat = object.get("gamesPlayed").is_some_and(Value::is_number)
        && object.get("wins").is_some_and(Value::is_number)
        && object.get("distribution").is_some_and(Value::is_array);
    flat.then_some(StatsShape::Flat)
}

/// Decode any known statistics layout into the current one
#[must_use]
pub fn decode_stats(raw: &str) -> Option<Statistics> {
    let value: Value = serde_json::from_str(raw).ok()?;
    let shape = stats_shape(value.as_object()?)?;

    let mut stats = match shape {
        StatsShape::Current => serde_json::from_value::<StatsRecord>(value).ok()?.modes,
        StatsShape::Nested => {
            debug!("migrating unversioned per-mode statistics");
            let modes = value.get("modes").cloned().unwrap_or_default();
            serde_json::from_value::<LegacyModes>(modes).ok()?.migrate()
        }
        StatsShape::Flat => {
            debug!("migrating flat statistics into infinite mode");
            let infinite = serde_json::from_value::<ModeStats>(value).ok()?;
            Statistics::from_modes(ModeStats::default(), infinite, ModeStats::default())
        }
    };
    stats.normalize();
    Some(stats)
}

/// Encode statistics in the current layout
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn encode_stats(stats: &Statistics) -> serde_json::Result<String> {
    serde_json::to_string(&StatsRecord {
        version: SCHEMA_VERSION,
        modes: stats.clone(),
    })
}

#[must_use]
pub fn decode_daily(raw: &str) -> Option<DailyState> {
    let record: DailyRecord = serde_json::from_str(raw).ok()?;
    DailyState::from_parts(record.date_key, record.round.into_round()?)
}

#[must_use]
pub fn decode_infinite(raw: &str) -> Option<InfiniteState> {
    let record: InfiniteRecord = serde_json::from_str(raw).ok()?;
    InfiniteState::from_parts(record.round.into_round()?)
}

/// Decode a growth run
///
/// A record left by the retired two-word mode decodes as `None`, so the
/// caller starts a fresh run at stage 0.
#[must_use]
pub fn decode_growth(raw: &str) -> Option<GrowthState> {
    let value: Value = serde_json::from_str(raw).ok()?;
    if value.get("mode").and_then(Value::as_str) == Some("duo") {
        debug!("legacy two-word state found, growth restarts at stage 0");
        return None;
    }
    let record: GrowthRecord = serde_json::from_value(value).ok()?;
    GrowthState::from_parts(
        record.stage_index,
        record.carryover_guesses,
        record.completed_rounds,
        record.round.into_round()?,
    )
}

/// Encode the state of any mode in the current layout
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn encode_mode(mode: &Mode) -> serde_json::Result<String> {
    match mode {
        Mode::Daily(state) => serde_json::to_string(&DailyRecord {
            version: SCHEMA_VERSION,
            date_key: state.date(),
            round: state.round().into(),
        }),
        Mode::Infinite(state) => serde_json::to_string(&InfiniteRecord {
            version: SCHEMA_VERSION,
            round: state.round().into(),
        }),
        Mode::Growth(state) => serde_json::to_string(&GrowthRecord {
            version: SCHEMA_VERSION,
            stage_index: state.stage_index(),
            carryover_guesses: state.carryover(),
            completed_rounds: state.scoreboard().to_vec(),
            round: state.round().into(),
        }),
    }
}
