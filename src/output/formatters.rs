//! Formatting utilities for terminal output

use crate::core::{KeyState, MAX_GUESSES, Pattern, Tile, Word};
use crate::game::Tone;
use colored::{ColoredString, Colorize};

/// One letter on a colored tile
#[must_use]
pub fn tile(letter: char, tile: Tile) -> ColoredString {
    let text = format!(" {} ", letter.to_ascii_uppercase());
    match tile {
        Tile::Correct => text.black().on_green().bold(),
        Tile::Present => text.black().on_yellow().bold(),
        Tile::Absent => text.white().on_bright_black(),
    }
}

/// A scored guess as a row of tiles
#[must_use]
pub fn tile_row(word: &Word, tiles: &[Tile]) -> String {
    word.text()
        .chars()
        .zip(tiles)
        .map(|(c, &t)| tile(c, t).to_string())
        .collect()
}

/// Tile counts of a scored guess, e.g. "2 correct, 1 present"
#[must_use]
pub fn score_summary(pattern: Pattern) -> String {
    format!(
        "{} correct, {} present",
        pattern.count_correct(),
        pattern.count_present()
    )
}

/// A keyboard key colored by what is known about it
#[must_use]
pub fn key(letter: char, state: KeyState) -> ColoredString {
    let text = letter.to_ascii_uppercase().to_string();
    match state {
        KeyState::Correct => text.black().on_green(),
        KeyState::Present => text.black().on_yellow(),
        KeyState::Absent => text.bright_black(),
        KeyState::Unknown => text.white().bold(),
    }
}

#[must_use]
pub fn toned(text: &str, tone: Tone) -> ColoredString {
    match tone {
        Tone::Neutral => text.normal(),
        Tone::Warning => text.yellow().bold(),
        Tone::Success => text.green().bold(),
        Tone::Error => text.red().bold(),
    }
}

/// Label of a distribution bucket
///
/// The last bucket is open-ended where growth wins land, since those always
/// take more than six guesses.
#[must_use]
pub fn bucket_label(index: usize, open_ended: bool) -> String {
    if open_ended && index + 1 == MAX_GUESSES {
        format!("{}+", index + 1)
    } else {
        format!("{} ", index + 1)
    }
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(50.0, 100.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(3.0, 0.0, 4), "░░░░");
    }

    #[test]
    fn last_bucket_open_ended_only_when_asked() {
        assert_eq!(bucket_label(0, true), "1 ");
        assert_eq!(bucket_label(MAX_GUESSES - 1, true), "6+");
        assert_eq!(bucket_label(MAX_GUESSES - 1, false), "6 ");
    }

    #[test]
    fn summary_counts_tiles() {
        let guess = Word::new("speed").unwrap();
        let target = Word::new("erase").unwrap();
        let pattern = crate::core::score(&guess, &target);
        assert_eq!(score_summary(pattern), "0 correct, 3 present");
        assert_eq!(score_summary(Pattern::PERFECT), "5 correct, 0 present");
    }

    #[test]
    fn tile_row_keeps_letters() {
        colored::control::set_override(false);
        let word = Word::new("crane").unwrap();
        let row = tile_row(&word, &[Tile::Absent; 5]);
        assert_eq!(row, " C  R  A  N  E ");
    }
}
