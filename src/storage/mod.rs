//! Persistence of statistics and in-progress rounds
//!
//! State lives in an opaque key-value string store, one slot per concern.
//! Statistics are kept for a year; mode snapshots for a week. Reading never
//! fails from the caller's point of view: missing, expired or corrupt slots
//! come back as fresh state, and write failures are only logged.

mod file;
pub mod records;

pub use file::FileStore;

use crate::game::{Mode, ModeKind, Statistics};
use chrono::{DateTime, TimeDelta, Utc};
use rustc_hash::FxHashMap;
use std::io;
use thiserror::Error;
use tracing::{debug, warn};

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage I/O failed: {0}")]
    Io(#[from] io::Error),
    #[error("could not encode record: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Key-value string storage with per-entry expiry
pub trait KeyValueStore {
    /// Read a value; expired entries read as `None`
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Write a value that expires after `ttl`
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend cannot be written.
    fn set(&mut self, key: &str, value: &str, ttl: TimeDelta) -> Result<(), StorageError>;

    /// Delete a value; deleting a missing key is not an error
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend cannot be written.
    fn remove(&mut self, key: &str) -> Result<(), StorageError>;
}

/// In-memory store, for tests and `--memory` sessions
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: FxHashMap<String, (String, DateTime<Utc>)>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self
            .entries
            .get(key)
            .filter(|(_, expires_at)| *expires_at > Utc::now())
            .map(|(value, _)| value.clone()))
    }

    fn set(&mut self, key: &str, value: &str, ttl: TimeDelta) -> Result<(), StorageError> {
        self.entries
            .insert(key.to_string(), (value.to_string(), Utc::now() + ttl));
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        self.entries.remove(key);
        Ok(())
    }
}

/// One storage slot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    Stats,
    Daily,
    Infinite,
    Growth,
}

impl Slot {
    pub const ALL: [Self; 4] = [Self::Stats, Self::Daily, Self::Infinite, Self::Growth];

    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Stats => "wordgameStats",
            Self::Daily => "wordgameDaily",
            Self::Infinite => "wordgameInfinite",
            Self::Growth => "wordgameGrowth",
        }
    }

    #[must_use]
    pub const fn ttl(self) -> TimeDelta {
        match self {
            Self::Stats => TimeDelta::days(365),
            Self::Daily | Self::Infinite | Self::Growth => TimeDelta::days(7),
        }
    }

    #[must_use]
    pub const fn for_mode(kind: ModeKind) -> Self {
        match kind {
            ModeKind::Daily => Self::Daily,
            ModeKind::Infinite => Self::Infinite,
            ModeKind::Growth => Self::Growth,
        }
    }
}

/// Typed access to the slots of a [`KeyValueStore`]
#[derive(Debug, Clone, Default)]
pub struct Storage<S> {
    store: S,
}

impl<S: KeyValueStore> Storage<S> {
    pub const fn new(store: S) -> Self {
        Self { store }
    }

    pub const fn store(&self) -> &S {
        &self.store
    }

    fn read(&self, slot: Slot) -> Option<String> {
        match self.store.get(slot.key()) {
            Ok(value) => value,
            Err(e) => {
                warn!(slot = slot.key(), "read failed, starting fresh: {e}");
                None
            }
        }
    }

    fn write(&mut self, slot: Slot, value: &str) {
        if let Err(e) = self.store.set(slot.key(), value, slot.ttl()) {
            warn!(slot = slot.key(), "write failed: {e}");
        }
    }

    /// Load statistics, migrating older shapes; zero-valued when absent or corrupt
    #[must_use]
    pub fn load_stats(&self) -> Statistics {
        let Some(raw) = self.read(Slot::Stats) else {
            return Statistics::default();
        };
        records::decode_stats(&raw).unwrap_or_else(|| {
            debug!("discarding unreadable statistics record");
            Statistics::default()
        })
    }

    pub fn save_stats(&mut self, stats: &Statistics) {
        match records::encode_stats(stats) {
            Ok(raw) => self.write(Slot::Stats, &raw),
            Err(e) => warn!("could not encode statistics: {e}"),
        }
    }

    /// Load the persisted state of a mode, if any
    #[must_use]
    pub fn load_mode(&self, kind: ModeKind) -> Option<Mode> {
        let slot = Slot::for_mode(kind);
        let raw = self.read(slot)?;
        let mode = match kind {
            ModeKind::Daily => records::decode_daily(&raw).map(Mode::Daily),
            ModeKind::Infinite => records::decode_infinite(&raw).map(Mode::Infinite),
            ModeKind::Growth => records::decode_growth(&raw).map(Mode::Growth),
        };
        if mode.is_none() {
            debug!(slot = slot.key(), "discarding unreadable mode record");
        }
        mode
    }

    pub fn save_mode(&mut self, mode: &Mode) {
        let slot = Slot::for_mode(mode.kind());
        match records::encode_mode(mode) {
            Ok(raw) => self.write(slot, &raw),
            Err(e) => warn!(slot = slot.key(), "could not encode mode state: {e}"),
        }
    }

    /// Remove every slot
    pub fn clear(&mut self) {
        for slot in Slot::ALL {
            if let Err(e) = self.store.remove(slot.key()) {
                warn!(slot = slot.key(), "remove failed: {e}");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::InfiniteState;
    use crate::wordlists::WordBank;
    use chrono::NaiveDate;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 1).unwrap()
    }

    #[test]
    fn memory_store_round_trip_and_expiry() {
        let mut store = MemoryStore::new();
        store.set("a", "1", TimeDelta::days(1)).unwrap();
        store.set("b", "2", TimeDelta::seconds(-1)).unwrap();

        assert_eq!(store.get("a").unwrap().as_deref(), Some("1"));
        assert_eq!(store.get("b").unwrap(), None);
        assert_eq!(store.get("c").unwrap(), None);

        store.remove("a").unwrap();
        assert_eq!(store.get("a").unwrap(), None);
    }

    #[test]
    fn slot_ttls() {
        assert_eq!(Slot::Stats.ttl(), TimeDelta::days(365));
        assert_eq!(Slot::Growth.ttl(), TimeDelta::days(7));
        assert_eq!(Slot::for_mode(ModeKind::Daily), Slot::Daily);
    }

    #[test]
    fn missing_stats_are_zero() {
        let storage = Storage::new(MemoryStore::new());
        assert_eq!(storage.load_stats(), Statistics::default());
    }

    #[test]
    fn corrupt_stats_are_discarded() {
        let mut store = MemoryStore::new();
        store
            .set(Slot::Stats.key(), "{not json", Slot::Stats.ttl())
            .unwrap();
        let storage = Storage::new(store);
        assert_eq!(storage.load_stats(), Statistics::default());
    }

    #[test]
    fn stats_persist() {
        let mut storage = Storage::new(MemoryStore::new());
        let mut stats = Statistics::default();
        stats.record_result(ModeKind::Daily, true, 3, day());
        storage.save_stats(&stats);

        assert_eq!(storage.load_stats(), stats);
    }

    #[test]
    fn mode_persists_in_its_own_slot() {
        let bank = WordBank::builtin();
        let mut rng = StdRng::seed_from_u64(8);
        let mut storage = Storage::new(MemoryStore::new());

        let mode = Mode::Infinite(InfiniteState::start(&bank, &mut rng));
        storage.save_mode(&mode);

        assert_eq!(storage.load_mode(ModeKind::Infinite), Some(mode));
        assert_eq!(storage.load_mode(ModeKind::Growth), None);
        assert!(storage.store().get(Slot::Infinite.key()).unwrap().is_some());
    }

    #[test]
    fn clear_removes_everything() {
        let mut storage = Storage::new(MemoryStore::new());
        storage.save_stats(&Statistics::default());
        storage.clear();
        assert!(storage.store().get(Slot::Stats.key()).unwrap().is_none());
    }
}
