//! Saved statistics and progress

use crate::game::{ModeKind, Statistics};
use crate::output::{print_mode_stats, print_stats};
use crate::storage::{KeyValueStore, Storage};
use tracing::info;

/// Print saved statistics, for one mode or for all of them
pub fn show_stats<S: KeyValueStore>(storage: &Storage<S>, mode: Option<ModeKind>) -> Statistics {
    let stats = storage.load_stats();
    match mode {
        Some(kind) => print_mode_stats(kind, stats.mode(kind)),
        None => print_stats(&stats),
    }
    stats
}

/// Remove saved statistics and every saved round
pub fn reset_progress<S: KeyValueStore>(storage: &mut Storage<S>) {
    storage.clear();
    info!("saved progress cleared");
}
