//! Per-mode statistics
//!
//! Each mode keeps played/won counts, a six-bucket guess distribution and
//! streaks. Daily streaks follow the calendar: a day without a result breaks
//! the streak. Infinite and growth streaks simply count consecutive wins.

use super::mode::ModeKind;
use super::round::Round;
use crate::clock::days_between;
use crate::core::MAX_GUESSES;
use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

/// Statistics for one mode
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ModeStats {
    games_played: u32,
    wins: u32,
    #[serde(deserialize_with = "lenient_distribution")]
    distribution: [u32; MAX_GUESSES],
    current_streak: u32,
    max_streak: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    last_result_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    last_result_win: Option<bool>,
}

impl ModeStats {
    #[must_use]
    pub const fn games_played(&self) -> u32 {
        self.games_played
    }

    #[must_use]
    pub const fn wins(&self) -> u32 {
        self.wins
    }

    /// Wins by guess count; index 0 is a first-guess win
    #[must_use]
    pub const fn distribution(&self) -> &[u32; MAX_GUESSES] {
        &self.distribution
    }

    #[must_use]
    pub const fn current_streak(&self) -> u32 {
        self.current_streak
    }

    #[must_use]
    pub const fn max_streak(&self) -> u32 {
        self.max_streak
    }

    /// Date of the last recorded daily result
    #[must_use]
    pub const fn last_result_date(&self) -> Option<NaiveDate> {
        self.last_result_date
    }

    #[must_use]
    pub const fn last_result_win(&self) -> Option<bool> {
        self.last_result_win
    }

    /// Rounded win percentage, 0 when nothing was played
    #[must_use]
    pub fn win_rate(&self) -> u32 {
        win_rate(self.wins, self.games_played)
    }

    fn count_result(&mut self, won: bool, guess_count: usize) {
        self.games_played += 1;
        if won {
            self.wins += 1;
            if (1..=MAX_GUESSES).contains(&guess_count) {
                self.distribution[guess_count - 1] += 1;
            }
        }
    }

    fn advance_streak(&mut self, won: bool) {
        if won {
            self.current_streak += 1;
            self.max_streak = self.max_streak.max(self.current_streak);
        } else {
            self.current_streak = 0;
        }
    }

    /// Infinite/growth result: increment on win, reset on loss
    pub(crate) fn record_consecutive(&mut self, won: bool, guess_count: usize) {
        self.count_result(won, guess_count);
        self.advance_streak(won);
    }

    /// Whether a daily result for `date` (or a later day) is already counted
    #[must_use]
    pub fn daily_done(&self, date: NaiveDate) -> bool {
        self.last_result_date.is_some_and(|last| last >= date)
    }

    /// Daily result: the streak only carries over from the previous calendar day
    ///
    /// Each date counts once; a date not after the last result is refused.
    pub(crate) fn record_daily(
        &mut self,
        date: NaiveDate,
        won: bool,
        guess_count: usize,
    ) -> bool {
        if self.daily_done(date) {
            return false;
        }
        self.count_result(won, guess_count);
        if let Some(last) = self.last_result_date
            && days_between(last, date) != 1
        {
            self.current_streak = 0;
        }
        self.advance_streak(won);
        self.last_result_date = Some(date);
        self.last_result_win = Some(won);
        true
    }

    /// Repair counters loaded from storage so that `wins <= games_played`
    pub(crate) fn normalize(&mut self) {
        self.wins = self.wins.min(self.games_played);
        self.max_streak = self.max_streak.max(self.current_streak);
    }
}

/// Accept any-length distribution arrays, truncating or zero-padding to six
fn lenient_distribution<'de, D>(deserializer: D) -> Result<[u32; MAX_GUESSES], D::Error>
where
    D: Deserializer<'de>,
{
    let values = Vec::<u32>::deserialize(deserializer)?;
    let mut distribution = [0; MAX_GUESSES];
    for (slot, value) in distribution.iter_mut().zip(values) {
        *slot = value;
    }
    Ok(distribution)
}

fn win_rate(wins: u32, played: u32) -> u32 {
    if played == 0 {
        0
    } else {
        (f64::from(wins) / f64::from(played) * 100.0).round() as u32
    }
}

/// Statistics for every mode
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Statistics {
    daily: ModeStats,
    infinite: ModeStats,
    growth: ModeStats,
}

/// Totals across all modes (streaks do not combine)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CombinedStats {
    pub games_played: u32,
    pub wins: u32,
    pub distribution: [u32; MAX_GUESSES],
}

impl CombinedStats {
    #[must_use]
    pub fn win_rate(&self) -> u32 {
        win_rate(self.wins, self.games_played)
    }
}

impl Statistics {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) const fn from_modes(
        daily: ModeStats,
        infinite: ModeStats,
        growth: ModeStats,
    ) -> Self {
        Self {
            daily,
            infinite,
            growth,
        }
    }

    #[must_use]
    pub const fn mode(&self, mode: ModeKind) -> &ModeStats {
        match mode {
            ModeKind::Daily => &self.daily,
            ModeKind::Infinite => &self.infinite,
            ModeKind::Growth => &self.growth,
        }
    }

    pub(crate) const fn mode_mut(&mut self, mode: ModeKind) -> &mut ModeStats {
        match mode {
            ModeKind::Daily => &mut self.daily,
            ModeKind::Infinite => &mut self.infinite,
            ModeKind::Growth => &mut self.growth,
        }
    }

    /// Record one finished game
    ///
    /// `on` is the daily date key the result belongs to; other modes ignore it.
    /// A win only lands in the distribution for 1 to 6 guesses. Returns
    /// `false` when a daily date was already counted.
    pub fn record_result(
        &mut self,
        mode: ModeKind,
        won: bool,
        guess_count: usize,
        on: NaiveDate,
    ) -> bool {
        match mode {
            ModeKind::Daily => self.daily.record_daily(on, won, guess_count),
            ModeKind::Infinite | ModeKind::Growth => {
                self.mode_mut(mode).record_consecutive(won, guess_count);
                true
            }
        }
    }

    /// Record a finished round exactly once
    ///
    /// Returns `false` (and changes nothing) if the round is still going, was
    /// already counted, or is a daily round for a date that already has a result.
    pub fn record_round(
        &mut self,
        mode: ModeKind,
        round: &mut Round,
        guess_count: usize,
        on: NaiveDate,
    ) -> bool {
        if !round.mark_recorded() {
            return false;
        }
        let won = round.all_solved();
        self.record_result(mode, won, guess_count, on)
    }

    /// Sum of played, wins and distribution across modes
    #[must_use]
    pub fn combined(&self) -> CombinedStats {
        let mut combined = CombinedStats::default();
        for mode in ModeKind::ALL {
            let stats = self.mode(mode);
            combined.games_played += stats.games_played;
            combined.wins += stats.wins;
            for (total, count) in combined.distribution.iter_mut().zip(stats.distribution) {
                *total += count;
            }
        }
        combined
    }

    pub(crate) fn normalize(&mut self) {
        for mode in ModeKind::ALL {
            self.mode_mut(mode).normalize();
        }
    }
}
