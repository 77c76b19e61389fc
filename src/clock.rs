//! Calendar dates for the daily puzzle
//!
//! A date key is the `YYYY-MM-DD` string of a calendar day. The daily target
//! is picked from a hash of that key, so every player sees the same word on
//! the same day. An authoritative date source (a [`DateFile`]) is preferred
//! over the local clock, which is only the fallback.

use chrono::{Local, NaiveDate};
use std::fs;
use std::path::PathBuf;
use thiserror::Error;
use tracing::warn;

/// Format of a date key
pub const DATE_KEY_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClockError {
    #[error("date source '{source_name}' unavailable: {reason}")]
    Unavailable { source_name: String, reason: String },
    #[error("invalid date key '{0}', expected YYYY-MM-DD")]
    InvalidKey(String),
}

/// A source for today's date
pub trait DateAuthority {
    /// Today's calendar date according to this source
    ///
    /// # Errors
    ///
    /// Returns `ClockError::Unavailable` when the source cannot answer.
    fn today(&self) -> Result<NaiveDate, ClockError>;

    /// Name used in logs
    fn name(&self) -> &str;
}

/// The machine's local clock
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalClock;

impl DateAuthority for LocalClock {
    fn today(&self) -> Result<NaiveDate, ClockError> {
        Ok(Local::now().date_naive())
    }

    fn name(&self) -> &str {
        "local clock"
    }
}

/// A pinned date, e.g. from `--date`; it never changes and never fails
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedDate(pub NaiveDate);

impl DateAuthority for FixedDate {
    fn today(&self) -> Result<NaiveDate, ClockError> {
        Ok(self.0)
    }

    fn name(&self) -> &str {
        "fixed date"
    }
}

/// Today's date key read from a file that something outside the game keeps
/// current (a time-sync job, a mounted server share)
///
/// Missing, unreadable or malformed files make the source unavailable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateFile {
    path: PathBuf,
    name: String,
}

impl DateFile {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let name = path.display().to_string();
        Self { path, name }
    }

    fn unavailable(&self, reason: impl std::fmt::Display) -> ClockError {
        ClockError::Unavailable {
            source_name: self.name.clone(),
            reason: reason.to_string(),
        }
    }
}

impl DateAuthority for DateFile {
    fn today(&self) -> Result<NaiveDate, ClockError> {
        let text = fs::read_to_string(&self.path).map_err(|e| self.unavailable(e))?;
        parse_date_key(&text).map_err(|e| self.unavailable(e))
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Outcome of asking for today's date
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateResolution {
    pub date: NaiveDate,
    /// True when the authority failed and the local clock answered instead
    pub fell_back: bool,
}

/// Resolve today's date, preferring `authority` and falling back to the local clock
#[must_use]
pub fn resolve_today(authority: Option<&dyn DateAuthority>) -> DateResolution {
    resolve_with_fallback(authority, &LocalClock)
}

fn resolve_with_fallback(
    authority: Option<&dyn DateAuthority>,
    fallback: &dyn DateAuthority,
) -> DateResolution {
    if let Some(authority) = authority {
        match authority.today() {
            Ok(date) => {
                return DateResolution {
                    date,
                    fell_back: false,
                };
            }
            Err(e) => warn!("{e}; using {}", fallback.name()),
        }
    }

    let date = fallback
        .today()
        .unwrap_or_else(|_| Local::now().date_naive());
    DateResolution {
        date,
        fell_back: authority.is_some(),
    }
}

/// Today's date for periodic checks: the source's answer, else the local date
///
/// Unlike [`resolve_today`] this does not log, so it can run on every tick.
#[must_use]
pub fn poll_today(source: &dyn DateAuthority) -> NaiveDate {
    source.today().unwrap_or_else(|_| Local::now().date_naive())
}

/// Format a date as its key
#[must_use]
pub fn date_key(date: NaiveDate) -> String {
    date.format(DATE_KEY_FORMAT).to_string()
}

/// Parse a `YYYY-MM-DD` key
///
/// # Errors
///
/// Returns `ClockError::InvalidKey` if the text is not a valid calendar date.
pub fn parse_date_key(key: &str) -> Result<NaiveDate, ClockError> {
    NaiveDate::parse_from_str(key.trim(), DATE_KEY_FORMAT)
        .map_err(|_| ClockError::InvalidKey(key.to_string()))
}

/// Seed for the daily pick: 32-bit rolling hash (`h = h * 31 + byte`) of the date key
///
/// # Examples
/// ```
/// use chrono::NaiveDate;
/// use wordgame::clock::daily_seed;
///
/// let day = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
/// assert_eq!(daily_seed(day), daily_seed(day));
/// ```
#[must_use]
pub fn daily_seed(date: NaiveDate) -> u64 {
    let hash = date_key(date)
        .bytes()
        .fold(0u32, |h, b| h.wrapping_mul(31).wrapping_add(u32::from(b)));
    u64::from(hash)
}

/// Whole days from `earlier` to `later` (negative if `later` comes first)
#[must_use]
pub fn days_between(earlier: NaiveDate, later: NaiveDate) -> i64 {
    (later - earlier).num_days()
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Offline;

    impl DateAuthority for Offline {
        fn today(&self) -> Result<NaiveDate, ClockError> {
            Err(ClockError::Unavailable {
                source_name: "offline".to_string(),
                reason: "no network".to_string(),
            })
        }

        fn name(&self) -> &str {
            "offline"
        }
    }

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn date_key_round_trips() {
        let date = day(2024, 3, 9);
        assert_eq!(date_key(date), "2024-03-09");
        assert_eq!(parse_date_key("2024-03-09").unwrap(), date);
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!(parse_date_key("2024-13-01").is_err());
        assert!(parse_date_key("yesterday").is_err());
        assert!(parse_date_key("").is_err());
    }

    #[test]
    fn seed_matches_rolling_hash() {
        // "2024-01-01" hashed byte by byte
        let mut expected: u32 = 0;
        for b in "2024-01-01".bytes() {
            expected = expected.wrapping_mul(31).wrapping_add(u32::from(b));
        }
        assert_eq!(daily_seed(day(2024, 1, 1)), u64::from(expected));
    }

    #[test]
    fn seed_differs_between_days() {
        assert_ne!(daily_seed(day(2024, 1, 1)), daily_seed(day(2024, 1, 2)));
    }

    #[test]
    fn authority_preferred() {
        let fixed = FixedDate(day(2030, 5, 17));
        let resolved = resolve_with_fallback(Some(&fixed), &FixedDate(day(2000, 1, 1)));
        assert_eq!(resolved.date, day(2030, 5, 17));
        assert!(!resolved.fell_back);
    }

    #[test]
    fn failing_authority_falls_back() {
        let fallback = FixedDate(day(2000, 1, 1));
        let resolved = resolve_with_fallback(Some(&Offline), &fallback);
        assert_eq!(resolved.date, day(2000, 1, 1));
        assert!(resolved.fell_back);
    }

    #[test]
    fn no_authority_uses_local_clock() {
        let resolved = resolve_today(None);
        assert!(!resolved.fell_back);
        assert!(days_between(resolved.date, Local::now().date_naive()) <= 1);
    }

    #[test]
    fn date_file_is_trusted_when_readable() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("today");
        fs::write(&path, "2031-08-02\n").unwrap();

        let source = DateFile::new(&path);
        let resolved = resolve_with_fallback(Some(&source), &FixedDate(day(2000, 1, 1)));
        assert_eq!(resolved.date, day(2031, 8, 2));
        assert!(!resolved.fell_back);
    }

    #[test]
    fn missing_or_garbled_date_file_falls_back() {
        let dir = tempfile::TempDir::new().unwrap();
        let fallback = FixedDate(day(2000, 1, 1));

        let missing = DateFile::new(dir.path().join("absent"));
        assert!(matches!(missing.today(), Err(ClockError::Unavailable { .. })));
        assert!(resolve_with_fallback(Some(&missing), &fallback).fell_back);

        let garbled = dir.path().join("garbled");
        fs::write(&garbled, "soon").unwrap();
        let resolved = resolve_with_fallback(Some(&DateFile::new(garbled)), &fallback);
        assert_eq!(resolved.date, day(2000, 1, 1));
        assert!(resolved.fell_back);
    }

    #[test]
    fn polling_failed_source_gives_local_date() {
        assert_eq!(poll_today(&FixedDate(day(2030, 5, 17))), day(2030, 5, 17));
        assert!(days_between(poll_today(&Offline), Local::now().date_naive()) <= 1);
    }

    #[test]
    fn days_between_counts_calendar_days() {
        assert_eq!(days_between(day(2024, 2, 28), day(2024, 3, 1)), 2);
        assert_eq!(days_between(day(2024, 1, 2), day(2024, 1, 1)), -1);
    }
}
