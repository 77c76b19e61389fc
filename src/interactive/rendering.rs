//! TUI rendering with ratatui

use super::app::App;
use crate::core::{KeyHints, KeyState, Tile, WORD_LENGTH};
use crate::game::{Mode, ModeKind, Round, Tone};
use crate::output::KEYBOARD_ROWS;
use crate::output::formatters::{bucket_label, create_progress_bar};
use crate::storage::KeyValueStore;
use rand::Rng;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph, Wrap},
};

/// Boards per row in multi-board rounds
const BOARDS_PER_ROW: usize = 4;

/// Main UI rendering function
pub fn ui<S: KeyValueStore, R: Rng>(f: &mut Frame, app: &App<S, R>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Status line
            Constraint::Length(1), // Help
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(62), Constraint::Percentage(38)])
        .split(chunks[1]);

    render_boards(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);
    render_status(f, app, chunks[2]);
    render_help(f, chunks[3]);
}

fn render_header<S: KeyValueStore, R: Rng>(f: &mut Frame, app: &App<S, R>, area: Rect) {
    let title = match app.session.mode() {
        Mode::Daily(state) => format!("WORDGAME - Daily {}", state.date()),
        Mode::Infinite(_) => "WORDGAME - Infinite".to_string(),
        Mode::Growth(state) => format!(
            "WORDGAME - Growth stage {} ({} words, {} guesses)",
            state.stage_index() + 1,
            state.word_count(),
            state.round().guess_limit()
        ),
    };
    let header = Paragraph::new(title)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_boards<S: KeyValueStore, R: Rng>(f: &mut Frame, app: &App<S, R>, area: Rect) {
    let round = app.session.round();
    let count = round.targets().len();
    let columns = count.clamp(1, BOARDS_PER_ROW);
    let rows = count.div_ceil(columns);

    let row_areas = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![Constraint::Ratio(1, rows as u32); rows])
        .split(area);

    for (row_index, row_area) in row_areas.iter().enumerate() {
        let cells = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(vec![Constraint::Ratio(1, columns as u32); columns])
            .split(*row_area);
        for (column, cell) in cells.iter().enumerate() {
            let board = row_index * columns + column;
            if board < count {
                render_board(f, round, board, app.session.pending(), *cell);
            }
        }
    }
}

fn render_board(f: &mut Frame, round: &Round, board: usize, pending: &str, area: Rect) {
    let solved = round.solved()[board];
    let mut lines: Vec<Line> = round
        .board_rows(board)
        .into_iter()
        .map(|(guess, pattern)| {
            let spans: Vec<Span> = guess
                .text()
                .chars()
                .zip(pattern.tiles())
                .map(|(c, &tile)| tile_span(c, tile))
                .collect();
            Line::from(spans)
        })
        .collect();

    if !solved && !round.is_over() {
        let mut spans: Vec<Span> = pending
            .chars()
            .map(|c| {
                Span::styled(
                    format!(" {} ", c.to_ascii_uppercase()),
                    Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
                )
            })
            .collect();
        spans.extend((pending.len()..WORD_LENGTH).map(|_| Span::raw(" · ")));
        lines.push(Line::from(spans));

        let empty = round.guesses_remaining().saturating_sub(1);
        for _ in 0..empty {
            lines.push(
                Line::from(" · ".repeat(WORD_LENGTH)).style(Style::default().fg(Color::DarkGray)),
            );
        }
    }

    // Keep the newest rows when the board is taller than its cell
    let visible = usize::from(area.height.saturating_sub(2));
    if lines.len() > visible {
        lines.drain(..lines.len() - visible);
    }

    let (title, color) = if solved {
        (format!(" Board {} ✓ ", board + 1), Color::Green)
    } else if round.is_over() {
        (
            format!(" {} ", round.targets()[board].text().to_uppercase()),
            Color::Red,
        )
    } else {
        (format!(" Board {} ", board + 1), Color::White)
    };

    let paragraph = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .style(Style::default().fg(color)),
    );
    f.render_widget(paragraph, area);
}

fn tile_span(letter: char, tile: Tile) -> Span<'static> {
    let bg = match tile {
        Tile::Correct => Color::Green,
        Tile::Present => Color::Yellow,
        Tile::Absent => Color::DarkGray,
    };
    Span::styled(
        format!(" {} ", letter.to_ascii_uppercase()),
        Style::default()
            .fg(Color::Black)
            .bg(bg)
            .add_modifier(Modifier::BOLD),
    )
}

const fn key_color(state: KeyState) -> Color {
    match state {
        KeyState::Correct => Color::Green,
        KeyState::Present => Color::Yellow,
        KeyState::Absent => Color::DarkGray,
        KeyState::Unknown => Color::Gray,
    }
}

fn render_info_panel<S: KeyValueStore, R: Rng>(f: &mut Frame, app: &App<S, R>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5),  // Keyboard
            Constraint::Length(12), // Stats
            Constraint::Min(3),     // Messages
        ])
        .split(area);

    render_keyboard(f, &app.session.key_hints(), chunks[0]);
    render_stats(f, app, chunks[1]);
    render_messages(f, app, chunks[2]);
}

fn render_keyboard(f: &mut Frame, hints: &KeyHints, area: Rect) {
    let lines: Vec<Line> = KEYBOARD_ROWS
        .iter()
        .map(|row| {
            let mut spans = Vec::new();
            for c in row.chars() {
                match hints {
                    KeyHints::Merged(keyboard) => {
                        spans.push(Span::styled(
                            format!(" {} ", c.to_ascii_uppercase()),
                            Style::default()
                                .fg(Color::Black)
                                .bg(key_color(keyboard.state(c))),
                        ));
                    }
                    KeyHints::PerBoard(_) => {
                        spans.push(Span::raw(c.to_ascii_uppercase().to_string()));
                        for state in hints.segments(c) {
                            spans.push(Span::styled("▪", Style::default().fg(key_color(state))));
                        }
                        spans.push(Span::raw(" "));
                    }
                }
            }
            Line::from(spans)
        })
        .collect();

    let keyboard = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .title(" Keyboard ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
    f.render_widget(keyboard, area);
}

fn render_stats<S: KeyValueStore, R: Rng>(f: &mut Frame, app: &App<S, R>, area: Rect) {
    let kind = app.session.kind();
    let stats = app.session.stats().mode(kind);

    let mut lines = vec![
        Line::from(format!(
            "Played {} | Win {}% | Streak {} (max {})",
            stats.games_played(),
            stats.win_rate(),
            stats.current_streak(),
            stats.max_streak()
        )),
        Line::from(""),
    ];

    let max = stats.distribution().iter().copied().max().unwrap_or(0);
    for (i, &count) in stats.distribution().iter().enumerate() {
        let label = bucket_label(i, kind == ModeKind::Growth);
        let bar = create_progress_bar(f64::from(count), f64::from(max), 16);
        lines.push(Line::from(vec![
            Span::raw(format!("{label} ")),
            Span::styled(bar, Style::default().fg(Color::Green)),
            Span::raw(format!(" {count}")),
        ]));
    }

    if let Mode::Growth(state) = app.session.mode() {
        for record in state.scoreboard() {
            lines.push(Line::from(Span::styled(
                format!(
                    "Stage {}: {} in {}",
                    record.stage_index + 1,
                    record.word_count,
                    record.guesses_used
                ),
                Style::default().fg(Color::Cyan),
            )));
        }
    }

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .title(format!(" {} stats ", kind.name()))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(paragraph, area);
}

const fn tone_color(tone: Tone) -> Color {
    match tone {
        Tone::Neutral => Color::White,
        Tone::Warning => Color::Yellow,
        Tone::Success => Color::Green,
        Tone::Error => Color::Red,
    }
}

fn render_messages<S: KeyValueStore, R: Rng>(f: &mut Frame, app: &App<S, R>, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            ListItem::new(msg.text.clone()).style(Style::default().fg(tone_color(msg.tone)))
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_status<S: KeyValueStore, R: Rng>(f: &mut Frame, app: &App<S, R>, area: Rect) {
    let status = app.session.status();
    let color = tone_color(status.tone);

    let paragraph = Paragraph::new(status.text.as_str())
        .alignment(Alignment::Center)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );
    f.render_widget(paragraph, area);
}

fn render_help(f: &mut Frame, area: Rect) {
    let help = Paragraph::new(
        "Enter: Submit | Tab: Mode | Ctrl-N: Next round | Ctrl-R: Restart growth | Esc: Quit",
    )
    .alignment(Alignment::Center)
    .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, area);
}
