//! Play modes and their mode-specific state

use super::growth::GrowthState;
use super::round::Round;
use crate::clock::daily_seed;
use crate::core::MAX_GUESSES;
use crate::wordlists::WordBank;
use chrono::NaiveDate;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which mode, without its state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModeKind {
    Daily,
    Infinite,
    Growth,
}

impl ModeKind {
    pub const ALL: [Self; 3] = [Self::Daily, Self::Infinite, Self::Growth];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Daily => "daily",
            Self::Infinite => "infinite",
            Self::Growth => "growth",
        }
    }
}

impl fmt::Display for ModeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ModeKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "daily" | "d" => Ok(Self::Daily),
            "infinite" | "inf" | "i" | "unlimited" => Ok(Self::Infinite),
            "growth" | "g" => Ok(Self::Growth),
            other => Err(format!("Unknown mode '{other}' (daily, infinite, growth)")),
        }
    }
}

/// The puzzle for one calendar day
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DailyState {
    date: NaiveDate,
    round: Round,
}

impl DailyState {
    /// Today's puzzle: the answer at `hash(date key) mod len`
    #[must_use]
    pub fn start(bank: &WordBank, date: NaiveDate) -> Self {
        let target = bank.pick_deterministic(daily_seed(date)).clone();
        Self {
            date,
            round: Round::begin(vec![target], MAX_GUESSES),
        }
    }

    #[must_use]
    pub fn from_parts(date: NaiveDate, round: Round) -> Option<Self> {
        (round.targets().len() == 1).then_some(Self { date, round })
    }

    #[must_use]
    pub const fn date(&self) -> NaiveDate {
        self.date
    }

    #[must_use]
    pub const fn round(&self) -> &Round {
        &self.round
    }
}

/// One unlimited-mode round
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InfiniteState {
    round: Round,
}

impl InfiniteState {
    pub fn start<R: Rng + ?Sized>(bank: &WordBank, rng: &mut R) -> Self {
        Self {
            round: Round::begin(vec![bank.pick_random(rng).clone()], MAX_GUESSES),
        }
    }

    #[must_use]
    pub fn from_parts(round: Round) -> Option<Self> {
        (round.targets().len() == 1).then_some(Self { round })
    }

    #[must_use]
    pub const fn round(&self) -> &Round {
        &self.round
    }
}

/// The active mode with its state
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    Daily(DailyState),
    Infinite(InfiniteState),
    Growth(GrowthState),
}

impl Mode {
    #[must_use]
    pub const fn kind(&self) -> ModeKind {
        match self {
            Self::Daily(_) => ModeKind::Daily,
            Self::Infinite(_) => ModeKind::Infinite,
            Self::Growth(_) => ModeKind::Growth,
        }
    }

    #[must_use]
    pub const fn round(&self) -> &Round {
        match self {
            Self::Daily(state) => &state.round,
            Self::Infinite(state) => &state.round,
            Self::Growth(state) => state.round(),
        }
    }

    pub(crate) const fn round_mut(&mut self) -> &mut Round {
        match self {
            Self::Daily(state) => &mut state.round,
            Self::Infinite(state) => &mut state.round,
            Self::Growth(state) => state.round_mut(),
        }
    }

    /// Fresh state for a mode
    pub fn start<R: Rng + ?Sized>(
        kind: ModeKind,
        bank: &WordBank,
        today: NaiveDate,
        rng: &mut R,
    ) -> Self {
        match kind {
            ModeKind::Daily => Self::Daily(DailyState::start(bank, today)),
            ModeKind::Infinite => Self::Infinite(InfiniteState::start(bank, rng)),
            ModeKind::Growth => Self::Growth(GrowthState::start(bank, rng)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, d).unwrap()
    }

    #[test]
    fn mode_kind_parses_names() {
        assert_eq!("daily".parse::<ModeKind>(), Ok(ModeKind::Daily));
        assert_eq!(" Infinite ".parse::<ModeKind>(), Ok(ModeKind::Infinite));
        assert_eq!("g".parse::<ModeKind>(), Ok(ModeKind::Growth));
        assert!("duo".parse::<ModeKind>().is_err());
        assert_eq!(ModeKind::Growth.to_string(), "growth");
    }

    #[test]
    fn daily_target_is_deterministic() {
        let bank = WordBank::builtin();
        let first = DailyState::start(&bank, day(14));
        let second = DailyState::start(&bank, day(14));
        assert_eq!(first.round().targets(), second.round().targets());
        assert_eq!(first.round().guess_limit(), MAX_GUESSES);

        let expected = bank.pick_deterministic(daily_seed(day(14)));
        assert_eq!(&first.round().targets()[0], expected);
    }

    #[test]
    fn daily_target_changes_with_date() {
        let bank = WordBank::builtin();
        let targets: Vec<_> = (1..=10)
            .map(|d| DailyState::start(&bank, day(d)).round().targets()[0].clone())
            .collect();
        assert!(targets.windows(2).any(|pair| pair[0] != pair[1]));
    }

    #[test]
    fn start_dispatches_by_kind() {
        let bank = WordBank::builtin();
        let mut rng = StdRng::seed_from_u64(4);
        for kind in ModeKind::ALL {
            let mode = Mode::start(kind, &bank, day(1), &mut rng);
            assert_eq!(mode.kind(), kind);
            assert!(!mode.round().is_over());
        }
    }

    #[test]
    fn from_parts_requires_single_target() {
        let bank = WordBank::builtin();
        let mut rng = StdRng::seed_from_u64(4);
        let two = Round::begin(bank.pick_unique_set(2, &mut rng), 6);
        assert!(DailyState::from_parts(day(1), two.clone()).is_none());
        assert!(InfiniteState::from_parts(two).is_none());
    }
}
