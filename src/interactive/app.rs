//! TUI application state and event loop

use crate::clock::{DateAuthority, poll_today};
use crate::game::{KeyInput, KeyResponse, ModeKind, NextRound, Session, Tone};
use crate::storage::KeyValueStore;
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::Rng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::Duration;

/// How often the clock is checked for a new day
const TICK: Duration = Duration::from_millis(500);

const MAX_MESSAGES: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub text: String,
    pub tone: Tone,
}

/// Application state
pub struct App<S, R> {
    pub session: Session<S, R>,
    clock: Box<dyn DateAuthority>,
    pub messages: Vec<Message>,
    pub should_quit: bool,
}

impl<S: KeyValueStore, R: Rng> App<S, R> {
    pub fn new(session: Session<S, R>, clock: Box<dyn DateAuthority>) -> Self {
        let mut app = Self {
            session,
            clock,
            messages: Vec::new(),
            should_quit: false,
        };
        app.sync_messages();
        app
    }

    /// Handle one key press
    pub fn on_key(&mut self, code: KeyCode, modifiers: KeyModifiers) {
        let ctrl = modifiers.contains(KeyModifiers::CONTROL);
        match code {
            KeyCode::Char('c') if ctrl => self.should_quit = true,
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('n') if ctrl => {
                if let NextRound::StageAdvanced { stage_index, .. } = self.session.next_round() {
                    self.add_message(&format!("On to stage {}!", stage_index + 1), Tone::Success);
                }
            }
            KeyCode::Char('r') if ctrl => self.session.restart_growth(),
            KeyCode::Tab => self.session.switch_mode(next_mode(self.session.kind())),
            KeyCode::BackTab => self.session.switch_mode(previous_mode(self.session.kind())),
            KeyCode::Char(c) => {
                self.session.handle_key(KeyInput::Letter(c));
            }
            KeyCode::Backspace => {
                self.session.handle_key(KeyInput::Backspace);
            }
            KeyCode::Enter => {
                if let KeyResponse::Submitted(report) = self.session.handle_key(KeyInput::Enter)
                    && report.outcome.newly_solved.len() > 1
                {
                    self.add_message(
                        &format!("{} boards solved at once!", report.outcome.newly_solved.len()),
                        Tone::Success,
                    );
                }
            }
            _ => {}
        }
        self.sync_messages();
    }

    /// Pick up a date change while the app is open
    pub fn tick(&mut self) {
        if self.session.refresh_date(poll_today(self.clock.as_ref())) {
            self.sync_messages();
        }
    }

    pub fn add_message(&mut self, text: &str, tone: Tone) {
        self.messages.push(Message {
            text: text.to_string(),
            tone,
        });

        // Keep only last 5 messages
        if self.messages.len() > MAX_MESSAGES {
            self.messages.remove(0);
        }
    }

    /// Log the session status when it changed
    fn sync_messages(&mut self) {
        let status = self.session.status();
        let changed = self
            .messages
            .last()
            .is_none_or(|last| last.text != status.text || last.tone != status.tone);
        if changed && !status.text.is_empty() {
            let (text, tone) = (status.text.clone(), status.tone);
            self.add_message(&text, tone);
        }
    }
}

const fn next_mode(kind: ModeKind) -> ModeKind {
    match kind {
        ModeKind::Daily => ModeKind::Infinite,
        ModeKind::Infinite => ModeKind::Growth,
        ModeKind::Growth => ModeKind::Daily,
    }
}

const fn previous_mode(kind: ModeKind) -> ModeKind {
    match kind {
        ModeKind::Daily => ModeKind::Growth,
        ModeKind::Infinite => ModeKind::Daily,
        ModeKind::Growth => ModeKind::Infinite,
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui<S: KeyValueStore, R: Rng>(app: App<S, R>) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B, S, R>(terminal: &mut Terminal<B>, mut app: App<S, R>) -> Result<()>
where
    B: ratatui::backend::Backend,
    S: KeyValueStore,
    R: Rng,
{
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if event::poll(TICK)? {
            if let Event::Key(key) = event::read()? {
                // Only process key press events (fixes Windows double-input bug)
                if key.kind == KeyEventKind::Press {
                    app.on_key(key.code, key.modifiers);
                }
            }
        } else {
            app.tick();
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
