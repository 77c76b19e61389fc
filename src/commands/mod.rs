//! Command implementations

pub mod score;
pub mod simple;
pub mod stats;

pub use score::{ScoreResult, score_words};
pub use simple::run_simple;
pub use stats::{reset_progress, show_stats};
