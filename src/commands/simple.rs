//! Simple interactive CLI mode
//!
//! Line-based play without the TUI: one guess or command per line.

use crate::clock::{DateAuthority, poll_today};
use crate::game::{GrowthEvent, Mode, ModeKind, NextRound, Session, TurnReport};
use crate::output::{
    print_growth_scoreboard, print_keyboard, print_mode_stats, print_round, print_status,
};
use crate::storage::KeyValueStore;
use anyhow::Result;
use colored::Colorize;
use rand::Rng;
use std::io::{self, Write};

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_simple<S: KeyValueStore, R: Rng>(
    session: &mut Session<S, R>,
    clock: &dyn DateAuthority,
) -> Result<()> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                    Wordgame - Simple Mode                    ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Type a 5-letter guess and press Enter.");
    println!("  🟩 right letter, right spot");
    println!("  🟨 right letter, wrong spot");
    println!("  ⬜ not in the word\n");
    println!("Commands: :next, :mode <daily|infinite|growth>, :restart, :stats, :quit\n");

    loop {
        session.refresh_date(poll_today(clock));
        render(session);

        let Some(input) = get_user_input(&prompt(session))? else {
            println!("\n👋 Thanks for playing!\n");
            return Ok(());
        };
        let input = input.to_lowercase();

        match input.as_str() {
            "" => {}
            ":q" | ":quit" | "quit" | "exit" => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            ":n" | ":next" | "new" => match session.next_round() {
                NextRound::Started => println!("\n🔄 New round started!"),
                NextRound::StageAdvanced { stage_index, .. } => {
                    println!("\n🌱 On to stage {}!", stage_index + 1);
                }
                NextRound::DailyLocked | NextRound::AlreadyPlaying => {}
            },
            ":r" | ":restart" => session.restart_growth(),
            ":s" | ":stats" => {
                let kind = session.kind();
                print_mode_stats(kind, session.stats().mode(kind));
            }
            cmd if cmd.starts_with(":mode") => {
                match cmd.trim_start_matches(":mode").parse::<ModeKind>() {
                    Ok(kind) => session.switch_mode(kind),
                    Err(e) => println!("❌ {e}"),
                }
            }
            cmd if cmd.starts_with(':') => println!("❌ Unknown command '{cmd}'"),
            guess => {
                if let Ok(report) = session.submit_guess(guess) {
                    celebrate(session, &report);
                }
            }
        }
    }
}

fn prompt<S, R>(session: &Session<S, R>) -> String
where
    S: KeyValueStore,
    R: Rng,
{
    let round = session.round();
    if round.is_over() {
        "Command".to_string()
    } else {
        format!("Guess {}/{}", round.guesses().len() + 1, round.guess_limit())
    }
}

fn render<S: KeyValueStore, R: Rng>(session: &Session<S, R>) {
    let title = match session.mode() {
        Mode::Daily(state) => format!("Daily puzzle for {}", state.date()),
        Mode::Infinite(_) => "Infinite".to_string(),
        Mode::Growth(state) => format!(
            "Growth stage {} ({} words)",
            state.stage_index() + 1,
            state.word_count()
        ),
    };
    println!("\n{}", "─".repeat(60).cyan());
    println!(" {}", title.bright_cyan().bold());
    println!("{}", "─".repeat(60).cyan());

    print_round(session.round());
    println!();
    print_keyboard(&session.key_hints());
    if let Mode::Growth(state) = session.mode() {
        print_growth_scoreboard(state);
    }
    print_status(session.status());
}

/// Banner for a solved daily or infinite word, and for a finished growth run
fn celebrate<S: KeyValueStore, R: Rng>(session: &Session<S, R>, report: &TurnReport) {
    let finished_run = matches!(report.growth, Some(GrowthEvent::Complete { .. }));
    let solved_single = report.growth.is_none() && report.outcome.all_solved;
    if !finished_run && !solved_single {
        return;
    }

    println!("\n{}", "═".repeat(60).bright_cyan());
    println!(
        "{}",
        "        🎉 🎊 ✨  S O L V E D !  ✨ 🎊 🎉".bright_green().bold()
    );
    println!("{}", "═".repeat(60).bright_cyan());

    let turn = session.round().guesses().len();
    let performance = match turn {
        1 => ("🏆 Perfect!", "Incredible hole-in-one!"),
        2 => ("⭐ Excellent!", "Outstanding performance!"),
        3 => ("💫 Great!", "Very well played!"),
        4 => ("✨ Good!", "Nice work!"),
        5 => ("👍 Solved!", "Got it!"),
        _ => ("✓ Complete!", "Success!"),
    };
    println!("\n  {}", performance.0.bright_yellow().bold());
    println!("  {}", performance.1.bright_white());

    if solved_single {
        println!("\n  Share:");
        for (_, pattern) in session.round().board_rows(0) {
            println!("    {}", pattern.to_emoji());
        }
    }
    println!("\n{}", "═".repeat(60).bright_cyan());
}

/// Get user input with a prompt; `None` at end of input
fn get_user_input(prompt: &str) -> io::Result<Option<String>> {
    print!("{prompt}: ");
    io::stdout().flush()?;

    let mut input = String::new();
    if io::stdin().read_line(&mut input)? == 0 {
        return Ok(None);
    }

    Ok(Some(input.trim().to_string()))
}
