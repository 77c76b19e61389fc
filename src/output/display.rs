//! Display functions for boards, keyboards and statistics

use super::formatters::{bucket_label, create_progress_bar, key, score_summary, tile_row, toned};
use crate::core::{KeyHints, KeyState, MAX_GUESSES, Pattern, Word};
use crate::game::{GrowthState, ModeKind, ModeStats, Round, Statistics, Status};
use colored::Colorize;

/// QWERTY rows used by both front-ends
pub const KEYBOARD_ROWS: [&str; 3] = ["qwertyuiop", "asdfghjkl", "zxcvbnm"];

/// Print every board of a round, one block per board
pub fn print_round(round: &Round) {
    let multi = round.targets().len() > 1;
    for board in 0..round.targets().len() {
        if multi {
            let label = format!("Board {}", board + 1);
            if round.solved()[board] {
                println!("  {} {}", label.bright_cyan().bold(), "✓".green().bold());
            } else {
                println!("  {}", label.bright_cyan().bold());
            }
        }
        for (guess, pattern) in round.board_rows(board) {
            println!("    {}", tile_row(&guess, pattern.tiles()));
        }
    }
    println!(
        "\n  {} of {} guesses used",
        round.guesses().len().to_string().bright_yellow(),
        round.guess_limit()
    );
}

/// Print the keyboard; several live boards show one colored mark per board
pub fn print_keyboard(hints: &KeyHints) {
    for (indent, row) in KEYBOARD_ROWS.iter().enumerate() {
        let keys: Vec<String> = row
            .chars()
            .map(|c| match hints {
                KeyHints::Merged(keyboard) => key(c, keyboard.state(c)).to_string(),
                KeyHints::PerBoard(_) => {
                    let marks: String = hints
                        .segments(c)
                        .into_iter()
                        .map(|state| segment_mark(state).to_string())
                        .collect();
                    format!("{}{marks}", c.to_ascii_uppercase())
                }
            })
            .collect();
        println!("  {}{}", " ".repeat(indent), keys.join(" "));
    }
}

fn segment_mark(state: KeyState) -> colored::ColoredString {
    match state {
        KeyState::Correct => "▪".green(),
        KeyState::Present => "▪".yellow(),
        KeyState::Absent => "▪".bright_black(),
        KeyState::Unknown => "▫".white(),
    }
}

pub fn print_status(status: &Status) {
    println!("\n  {}", toned(&status.text, status.tone));
}

/// Print the pattern of one guess against one target
pub fn print_score(guess: &Word, target: &Word, pattern: Pattern) {
    println!(
        "\n  {} → {}",
        guess.text().to_uppercase().bright_white().bold(),
        target.text().to_uppercase().bright_yellow().bold()
    );
    println!("    {}", tile_row(guess, pattern.tiles()));
    println!("    {}", pattern.to_emoji());
    println!("    {}", score_summary(pattern).dimmed());
}

/// Print the stages cleared so far in a growth run
pub fn print_growth_scoreboard(state: &GrowthState) {
    if state.scoreboard().is_empty() {
        return;
    }
    println!("\n  {}", "Stages cleared:".bright_cyan().bold());
    for record in state.scoreboard() {
        println!(
            "    Stage {}: {} word{} in {} guesses",
            record.stage_index + 1,
            record.word_count,
            if record.word_count == 1 { "" } else { "s" },
            record.guesses_used
        );
    }
}

/// Print one mode's statistics with its guess distribution
pub fn print_mode_stats(kind: ModeKind, stats: &ModeStats) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(" {} ", kind.name().to_uppercase().bright_cyan().bold());
    println!("{}", "─".repeat(60).cyan());

    println!("   Played:          {}", stats.games_played());
    println!(
        "   Win rate:        {}",
        format!("{}%", stats.win_rate()).bright_yellow().bold()
    );
    println!("   Current streak:  {}", stats.current_streak());
    println!("   Max streak:      {}", stats.max_streak());
    print_distribution(stats.distribution(), kind == ModeKind::Growth);
}

/// Print all modes, then the combined totals
pub fn print_stats(stats: &Statistics) {
    for kind in ModeKind::ALL {
        print_mode_stats(kind, stats.mode(kind));
    }

    let combined = stats.combined();
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "ALL MODES".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());
    println!("   Played:          {}", combined.games_played);
    println!(
        "   Win rate:        {}",
        format!("{}%", combined.win_rate()).bright_yellow().bold()
    );
    print_distribution(&combined.distribution, true);
}

/// `open_ended` when growth wins may be in the last bucket
fn print_distribution(distribution: &[u32; MAX_GUESSES], open_ended: bool) {
    let max = distribution.iter().copied().max().unwrap_or(0);
    for (i, &count) in distribution.iter().enumerate() {
        let label = bucket_label(i, open_ended);
        let bar = create_progress_bar(f64::from(count), f64::from(max), 30);
        println!("   {label} {} {count}", bar.green());
    }
}
