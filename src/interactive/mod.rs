//! Interactive TUI interface

mod app;
mod rendering;

pub use app::{App, Message, run_tui};
