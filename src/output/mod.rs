//! Terminal output formatting
//!
//! Colored boards, keyboards and statistics for the line-based commands.

pub mod display;
pub mod formatters;

pub use display::{
    KEYBOARD_ROWS, print_growth_scoreboard, print_keyboard, print_mode_stats, print_round,
    print_score, print_stats, print_status,
};
