//! The mode controller
//!
//! A [`Session`] owns the word bank, the active mode, statistics and storage.
//! Every accepted event mutates the state at most once and is followed by a
//! single persistence pass: the mode slot first, then statistics when a
//! result was recorded.

use super::growth::{GrowthEvent, GrowthPhase, GrowthState, STAGE_WORD_COUNTS};
use super::input::{KeyInput, Status};
use super::mode::{DailyState, Mode, ModeKind};
use super::round::{GuessOutcome, Rejection, Round, RoundStatus};
use super::stats::Statistics;
use crate::clock::DateResolution;
use crate::core::{KeyHints, MAX_GUESSES, WORD_LENGTH};
use crate::storage::{KeyValueStore, Storage};
use crate::wordlists::{BankLoad, WordBank};
use chrono::NaiveDate;
use rand::Rng;
use tracing::{debug, info};

const START_MESSAGE: &str = "Guess the 5-letter word in six tries.";
const KEEP_GOING: &str = "Keep going!";
const SOLVED_MESSAGE: &str = "Nice! You solved it.";
const DAILY_LOCKED: &str = "You've played today's word. Come back tomorrow!";
const FINISH_FIRST: &str = "Finish today's word first.";
const WORDS_FALLBACK: &str = "Using the built-in word list. (Word list download failed.)";
const DATE_FALLBACK: &str = "Couldn't reach the date source. Using this device's date.";

/// What an accepted guess did
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnReport {
    pub outcome: GuessOutcome,
    /// Set when the guess ended a growth stage
    pub growth: Option<GrowthEvent>,
    /// Whether this guess put a result into statistics
    pub recorded: bool,
}

/// Answer to a request for the next round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NextRound {
    Started,
    StageAdvanced { stage_index: usize, guess_limit: usize },
    /// Today's daily word is done
    DailyLocked,
    /// The daily round is still in progress
    AlreadyPlaying,
}

/// Effect of one key press
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyResponse {
    /// The pending guess changed
    Typing,
    Submitted(TurnReport),
    Rejected(Rejection),
    /// Enter on a finished round asks for the next one
    Next(NextRound),
    Ignored,
}

pub struct Session<S, R> {
    bank: WordBank,
    storage: Storage<S>,
    stats: Statistics,
    mode: Mode,
    today: NaiveDate,
    rng: R,
    pending: String,
    status: Status,
}

impl<S: KeyValueStore, R: Rng> Session<S, R> {
    /// Load statistics and resume (or start) the requested mode
    pub fn open(
        bank: WordBank,
        storage: Storage<S>,
        today: NaiveDate,
        mut rng: R,
        kind: ModeKind,
    ) -> Self {
        let stats = storage.load_stats();
        let mode = resume(kind, &storage, &bank, today, &mut rng);
        let mut session = Self {
            bank,
            storage,
            stats,
            mode,
            today,
            rng,
            pending: String::new(),
            status: Status::default(),
        };
        session.status = session.describe();
        session.storage.save_mode(&session.mode);
        info!(mode = %kind, date = %today, "session opened");
        session
    }

    /// Open a session from startup inputs
    ///
    /// A word-list or date fallback replaces the opening status with a warning.
    pub fn launch(
        load: BankLoad,
        storage: Storage<S>,
        today: DateResolution,
        rng: R,
        kind: ModeKind,
    ) -> Self {
        let mut session = Self::open(load.bank, storage, today.date, rng, kind);
        let notices: Vec<&str> = [
            (load.used_fallback, WORDS_FALLBACK),
            (today.fell_back, DATE_FALLBACK),
        ]
        .into_iter()
        .filter_map(|(hit, text)| hit.then_some(text))
        .collect();
        if !notices.is_empty() {
            session.status = Status::warning(notices.join(" "));
        }
        session
    }

    /// Persist the current mode and resume another
    pub fn switch_mode(&mut self, kind: ModeKind) {
        if self.mode.kind() == kind {
            return;
        }
        self.storage.save_mode(&self.mode);
        self.mode = resume(kind, &self.storage, &self.bank, self.today, &mut self.rng);
        self.pending.clear();
        self.status = self.describe();
        self.storage.save_mode(&self.mode);
        info!(mode = %kind, "switched mode");
    }

    /// Apply one key press to the pending guess
    pub fn handle_key(&mut self, key: KeyInput) -> KeyResponse {
        if self.mode.round().is_over() || self.daily_locked() {
            return match key {
                KeyInput::Enter => KeyResponse::Next(self.next_round()),
                KeyInput::Letter(_) | KeyInput::Backspace => KeyResponse::Ignored,
            };
        }

        match key {
            KeyInput::Letter(c) if c.is_ascii_alphabetic() && self.pending.len() < WORD_LENGTH => {
                self.pending.push(c.to_ascii_lowercase());
                KeyResponse::Typing
            }
            KeyInput::Letter(_) => KeyResponse::Ignored,
            KeyInput::Backspace => {
                if self.pending.pop().is_some() {
                    KeyResponse::Typing
                } else {
                    KeyResponse::Ignored
                }
            }
            KeyInput::Enter => {
                let guess = self.pending.clone();
                match self.submit_guess(&guess) {
                    Ok(report) => KeyResponse::Submitted(report),
                    Err(rejection) => KeyResponse::Rejected(rejection),
                }
            }
        }
    }

    /// Submit a whole guess
    ///
    /// # Errors
    ///
    /// Returns the `Rejection` from the round; nothing changes except the
    /// status line, which shows the reason.
    pub fn submit_guess(&mut self, guess: &str) -> Result<TurnReport, Rejection> {
        if self.daily_locked() && !self.mode.round().is_over() {
            debug!(date = %self.today, "daily already counted");
            self.status = Status::neutral(DAILY_LOCKED);
            return Err(Rejection::RoundOver);
        }
        let outcome = match self.mode.round_mut().submit(guess, &self.bank) {
            Ok(outcome) => outcome,
            Err(rejection) => {
                debug!(guess, %rejection, "guess rejected");
                self.status = Status::warning(rejection.to_string());
                return Err(rejection);
            }
        };
        self.pending.clear();

        let mut growth = None;
        let mut recorded = false;
        if self.mode.round().is_over() {
            if let Mode::Growth(state) = &mut self.mode {
                growth = state.finish_stage();
            }
            recorded = self.record_result();
        }

        self.status = self.describe();
        self.storage.save_mode(&self.mode);
        if recorded {
            self.storage.save_stats(&self.stats);
        }

        Ok(TurnReport {
            outcome,
            growth,
            recorded,
        })
    }

    /// Count a finished game once; cleared growth stages are not results
    fn record_result(&mut self) -> bool {
        let guess_count = match &self.mode {
            Mode::Growth(state) => match state.phase() {
                GrowthPhase::Playing | GrowthPhase::StageCleared => return false,
                // The eight-word stage always takes more than six guesses
                GrowthPhase::Complete => MAX_GUESSES,
                GrowthPhase::Failed => state.round().guesses().len(),
            },
            Mode::Daily(_) | Mode::Infinite(_) => self.mode.round().guesses().len(),
        };
        let on = match &self.mode {
            Mode::Daily(state) => state.date(),
            Mode::Infinite(_) | Mode::Growth(_) => self.today,
        };

        let kind = self.mode.kind();
        let recorded = self
            .stats
            .record_round(kind, self.mode.round_mut(), guess_count, on);
        if recorded {
            info!(
                mode = %kind,
                won = self.mode.round().all_solved(),
                guesses = self.mode.round().guesses().len(),
                "result recorded"
            );
        }
        recorded
    }

    /// Move on from the current round
    ///
    /// Daily is locked until the date changes. Infinite always draws a new
    /// word, abandoning an unfinished round without counting it. Growth
    /// advances after a cleared stage and otherwise restarts from stage 0;
    /// like infinite, an unfinished run given up this way is not counted.
    pub fn next_round(&mut self) -> NextRound {
        let locked = self.daily_locked();
        let next = match &mut self.mode {
            Mode::Daily(state) if state.date() != self.today => {
                self.mode = Mode::Daily(DailyState::start(&self.bank, self.today));
                NextRound::Started
            }
            Mode::Daily(_) if locked => {
                self.status = Status::neutral(DAILY_LOCKED);
                return NextRound::DailyLocked;
            }
            Mode::Daily(_) => {
                self.status = Status::neutral(FINISH_FIRST);
                return NextRound::AlreadyPlaying;
            }
            Mode::Infinite(_) => {
                self.mode = Mode::start(ModeKind::Infinite, &self.bank, self.today, &mut self.rng);
                NextRound::Started
            }
            Mode::Growth(state) => {
                if state.advance(&self.bank, &mut self.rng) {
                    NextRound::StageAdvanced {
                        stage_index: state.stage_index(),
                        guess_limit: state.round().guess_limit(),
                    }
                } else {
                    self.mode = Mode::Growth(GrowthState::start(&self.bank, &mut self.rng));
                    NextRound::Started
                }
            }
        };

        info!(mode = %self.mode.kind(), ?next, "next round");
        self.pending.clear();
        self.status = self.describe();
        self.storage.save_mode(&self.mode);
        next
    }

    /// Start a new growth run at stage 0, switching to growth if needed
    ///
    /// An unfinished run is dropped without a result, the same as an
    /// abandoned infinite round.
    pub fn restart_growth(&mut self) {
        if self.mode.kind() != ModeKind::Growth {
            self.storage.save_mode(&self.mode);
        }
        self.mode = Mode::Growth(GrowthState::start(&self.bank, &mut self.rng));
        self.pending.clear();
        self.status = self.describe();
        self.storage.save_mode(&self.mode);
        info!("growth restarted");
    }

    /// Adopt a new date; a daily round from another date gives way to today's
    ///
    /// Returns `true` if a new daily puzzle was started. It starts locked when
    /// the date already has a result.
    pub fn refresh_date(&mut self, today: NaiveDate) -> bool {
        self.today = today;
        let stale = matches!(&self.mode, Mode::Daily(state) if state.date() != today);
        if stale {
            self.mode = Mode::Daily(DailyState::start(&self.bank, today));
            self.pending.clear();
            self.status = self.describe();
            self.storage.save_mode(&self.mode);
            info!(date = %today, "new daily puzzle");
        }
        stale
    }

    #[must_use]
    pub const fn mode(&self) -> &Mode {
        &self.mode
    }

    #[must_use]
    pub const fn kind(&self) -> ModeKind {
        self.mode.kind()
    }

    #[must_use]
    pub const fn round(&self) -> &Round {
        self.mode.round()
    }

    #[must_use]
    pub const fn stats(&self) -> &Statistics {
        &self.stats
    }

    #[must_use]
    pub const fn status(&self) -> &Status {
        &self.status
    }

    /// Letters typed so far
    #[must_use]
    pub fn pending(&self) -> &str {
        &self.pending
    }

    #[must_use]
    pub const fn bank(&self) -> &WordBank {
        &self.bank
    }

    #[must_use]
    pub const fn today(&self) -> NaiveDate {
        self.today
    }

    #[must_use]
    pub fn key_hints(&self) -> KeyHints {
        self.mode.round().key_hints()
    }

    pub fn into_storage(self) -> Storage<S> {
        self.storage
    }

    /// Today's daily puzzle is finished or was already counted
    ///
    /// The saved daily round only covers one date, so a date that already has
    /// a result stays locked even when its round is gone.
    fn daily_locked(&self) -> bool {
        match &self.mode {
            Mode::Daily(state) => {
                state.round().is_over()
                    || self.stats.mode(ModeKind::Daily).daily_done(state.date())
            }
            Mode::Infinite(_) | Mode::Growth(_) => false,
        }
    }

    fn describe(&self) -> Status {
        let round = self.mode.round();
        match &self.mode {
            Mode::Growth(state) => describe_growth(state),
            Mode::Daily(_) if !round.is_over() && self.daily_locked() => {
                Status::neutral(DAILY_LOCKED)
            }
            Mode::Daily(_) | Mode::Infinite(_) => match round.status() {
                RoundStatus::InProgress if round.guesses().is_empty() => {
                    Status::neutral(START_MESSAGE)
                }
                RoundStatus::InProgress => Status::neutral(KEEP_GOING),
                RoundStatus::Won => Status::success(SOLVED_MESSAGE),
                RoundStatus::Lost => Status::error(reveal(round)),
            },
        }
    }
}

fn describe_growth(state: &GrowthState) -> Status {
    let round = state.round();
    let stage = state.stage_index() + 1;
    let stages = STAGE_WORD_COUNTS.len();
    match state.phase() {
        GrowthPhase::Playing if round.guesses().is_empty() => {
            let count = state.word_count();
            let words = if count == 1 { "word" } else { "words" };
            Status::neutral(format!(
                "Stage {stage} of {stages}: solve {count} {words} in {} guesses.",
                round.guess_limit()
            ))
        }
        GrowthPhase::Playing => {
            let solved = round.solved().iter().filter(|&&s| s).count();
            Status::neutral(format!(
                "{KEEP_GOING} {solved}/{} solved, {} guesses left.",
                state.word_count(),
                round.guesses_remaining()
            ))
        }
        GrowthPhase::StageCleared => Status::success(format!(
            "Stage {stage} cleared! {} bonus guesses carry over.",
            state.carryover()
        )),
        GrowthPhase::Complete => Status::success("All stages cleared! Growth complete."),
        GrowthPhase::Failed => Status::error(reveal(round)),
    }
}

fn reveal(round: &Round) -> String {
    let missed: Vec<String> = round
        .targets()
        .iter()
        .zip(round.solved())
        .filter(|(_, solved)| !**solved)
        .map(|(word, _)| word.text().to_uppercase())
        .collect();
    if missed.len() == 1 {
        format!("Out of guesses! The word was {}.", missed[0])
    } else {
        format!("Out of guesses! The words were {}.", missed.join(", "))
    }
}

/// Resume a persisted mode, or start it fresh
fn resume<S: KeyValueStore, R: Rng + ?Sized>(
    kind: ModeKind,
    storage: &Storage<S>,
    bank: &WordBank,
    today: NaiveDate,
    rng: &mut R,
) -> Mode {
    match storage.load_mode(kind) {
        Some(Mode::Daily(state)) if state.date() != today => {
            debug!(saved = %state.date(), %today, "discarding daily round from another day");
            Mode::start(kind, bank, today, rng)
        }
        Some(mode) => {
            debug!(mode = %kind, "resumed saved round");
            mode
        }
        None => Mode::start(kind, bank, today, rng),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Tone;
    use crate::storage::MemoryStore;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    type TestSession = Session<MemoryStore, StdRng>;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 2, d).unwrap()
    }

    fn open_with(storage: Storage<MemoryStore>, kind: ModeKind, today: NaiveDate) -> TestSession {
        Session::open(
            WordBank::builtin(),
            storage,
            today,
            StdRng::seed_from_u64(17),
            kind,
        )
    }

    fn open(kind: ModeKind) -> TestSession {
        open_with(Storage::new(MemoryStore::new()), kind, day(10))
    }

    fn targets(session: &TestSession) -> Vec<String> {
        session
            .round()
            .targets()
            .iter()
            .map(|w| w.text().to_string())
            .collect()
    }

    fn misses(session: &TestSession) -> Vec<String> {
        session
            .bank()
            .answers()
            .iter()
            .filter(|w| !session.round().targets().contains(w))
            .map(|w| w.text().to_string())
            .collect()
    }

    fn type_word(session: &mut TestSession, word: &str) -> KeyResponse {
        for c in word.chars() {
            session.handle_key(KeyInput::Letter(c));
        }
        session.handle_key(KeyInput::Enter)
    }

    #[test]
    fn open_starts_fresh_round_with_start_message() {
        let session = open(ModeKind::Infinite);
        assert_eq!(session.kind(), ModeKind::Infinite);
        assert!(session.round().guesses().is_empty());
        assert_eq!(session.status().text, START_MESSAGE);
        assert_eq!(session.stats(), &Statistics::default());
    }

    #[test]
    fn key_buffer_caps_at_word_length() {
        let mut session = open(ModeKind::Infinite);
        for c in "abcdef".chars() {
            session.handle_key(KeyInput::Letter(c));
        }
        assert_eq!(session.pending(), "abcde");

        assert_eq!(session.handle_key(KeyInput::Backspace), KeyResponse::Typing);
        assert_eq!(session.pending(), "abcd");
    }

    #[test]
    fn short_guess_warns_and_keeps_buffer() {
        let mut session = open(ModeKind::Infinite);
        session.handle_key(KeyInput::Letter('c'));
        session.handle_key(KeyInput::Letter('r'));

        assert_eq!(
            session.handle_key(KeyInput::Enter),
            KeyResponse::Rejected(Rejection::NotEnoughLetters)
        );
        assert_eq!(session.pending(), "cr");
        assert_eq!(session.status().tone, Tone::Warning);
        assert_eq!(session.status().text, "Not enough letters. Keep typing.");
        assert!(session.round().guesses().is_empty());
    }

    #[test]
    fn win_is_recorded_once() {
        let mut session = open(ModeKind::Infinite);
        let target = targets(&session).remove(0);

        let KeyResponse::Submitted(report) = type_word(&mut session, &target) else {
            panic!("expected an accepted guess");
        };
        assert!(report.recorded);
        assert!(report.outcome.all_solved);
        assert_eq!(session.status().tone, Tone::Success);

        assert_eq!(
            session.submit_guess(&target),
            Err(Rejection::RoundOver)
        );
        assert_eq!(session.handle_key(KeyInput::Letter('a')), KeyResponse::Ignored);

        let infinite = session.stats().mode(ModeKind::Infinite);
        assert_eq!(infinite.games_played(), 1);
        assert_eq!(infinite.distribution()[0], 1);
    }

    #[test]
    fn loss_reveals_word() {
        let mut session = open(ModeKind::Infinite);
        let target = targets(&session).remove(0);
        for word in misses(&session).iter().take(MAX_GUESSES) {
            session.submit_guess(word).unwrap();
        }
        assert_eq!(session.status().tone, Tone::Error);
        assert_eq!(
            session.status().text,
            format!("Out of guesses! The word was {}.", target.to_uppercase())
        );
        assert_eq!(session.stats().mode(ModeKind::Infinite).wins(), 0);
        assert_eq!(session.stats().mode(ModeKind::Infinite).games_played(), 1);
    }

    #[test]
    fn infinite_resumes_exactly() {
        let mut session = open(ModeKind::Infinite);
        let first_miss = misses(&session).remove(0);
        session.submit_guess(&first_miss).unwrap();
        let round = session.round().clone();

        let reopened = open_with(session.into_storage(), ModeKind::Infinite, day(10));
        assert_eq!(reopened.round(), &round);
        assert_eq!(reopened.status().text, KEEP_GOING);
    }

    #[test]
    fn infinite_next_round_abandons_without_recording() {
        let mut session = open(ModeKind::Infinite);
        let first_miss = misses(&session).remove(0);
        session.submit_guess(&first_miss).unwrap();

        assert_eq!(session.next_round(), NextRound::Started);
        assert!(session.round().guesses().is_empty());
        assert_eq!(session.stats().mode(ModeKind::Infinite).games_played(), 0);
    }

    #[test]
    fn daily_locks_until_date_changes() {
        let mut session = open(ModeKind::Daily);
        assert_eq!(session.next_round(), NextRound::AlreadyPlaying);

        let target = targets(&session).remove(0);
        session.submit_guess(&target).unwrap();
        assert_eq!(session.next_round(), NextRound::DailyLocked);
        assert_eq!(session.status().text, DAILY_LOCKED);
        assert_eq!(session.handle_key(KeyInput::Enter), KeyResponse::Next(NextRound::DailyLocked));

        assert!(session.refresh_date(day(11)));
        assert!(matches!(session.mode(), Mode::Daily(state) if state.date() == day(11)));
        assert!(session.round().guesses().is_empty());
        assert!(!session.refresh_date(day(11)));

        let daily = session.stats().mode(ModeKind::Daily);
        assert_eq!(daily.games_played(), 1);
        assert_eq!(daily.last_result_date(), Some(day(10)));
    }

    #[test]
    fn daily_round_from_another_day_is_discarded() {
        let mut session = open(ModeKind::Daily);
        let first_miss = misses(&session).remove(0);
        session.submit_guess(&first_miss).unwrap();

        let reopened = open_with(session.into_storage(), ModeKind::Daily, day(11));
        assert!(reopened.round().guesses().is_empty());
        let Mode::Daily(state) = reopened.mode() else {
            panic!("expected daily mode");
        };
        assert_eq!(state.date(), day(11));
    }

    #[test]
    fn counted_daily_stays_locked_after_date_moves_back() {
        let mut session = open(ModeKind::Daily);
        let target = targets(&session).remove(0);
        session.submit_guess(&target).unwrap();

        let next_day = open_with(session.into_storage(), ModeKind::Daily, day(11));
        assert!(next_day.round().guesses().is_empty());
        assert_eq!(next_day.status().text, START_MESSAGE);

        let mut back = open_with(next_day.into_storage(), ModeKind::Daily, day(10));
        assert_eq!(back.status().text, DAILY_LOCKED);
        assert_eq!(back.submit_guess(&target), Err(Rejection::RoundOver));
        assert_eq!(back.handle_key(KeyInput::Letter('a')), KeyResponse::Ignored);
        assert_eq!(back.next_round(), NextRound::DailyLocked);
        assert!(back.round().guesses().is_empty());

        let daily = back.stats().mode(ModeKind::Daily);
        assert_eq!(daily.games_played(), 1);
        assert_eq!(daily.wins(), 1);
    }

    #[test]
    fn refresh_to_counted_date_is_locked() {
        let mut session = open(ModeKind::Daily);
        let target = targets(&session).remove(0);
        session.submit_guess(&target).unwrap();

        assert!(session.refresh_date(day(11)));
        assert!(session.refresh_date(day(10)));
        assert_eq!(session.status().text, DAILY_LOCKED);
        assert_eq!(session.submit_guess(&target), Err(Rejection::RoundOver));
        assert_eq!(session.stats().mode(ModeKind::Daily).games_played(), 1);
    }

    #[test]
    fn launch_warns_about_date_fallback() {
        let load = BankLoad {
            bank: WordBank::builtin(),
            used_fallback: false,
        };
        let today = DateResolution {
            date: day(10),
            fell_back: true,
        };
        let session: TestSession = Session::launch(
            load,
            Storage::new(MemoryStore::new()),
            today,
            StdRng::seed_from_u64(17),
            ModeKind::Daily,
        );
        assert_eq!(session.status().tone, Tone::Warning);
        assert_eq!(session.status().text, DATE_FALLBACK);
        assert_eq!(session.today(), day(10));
    }

    #[test]
    fn launch_joins_both_fallback_notices() {
        let load = BankLoad {
            bank: WordBank::builtin(),
            used_fallback: true,
        };
        let today = DateResolution {
            date: day(10),
            fell_back: true,
        };
        let session: TestSession = Session::launch(
            load,
            Storage::new(MemoryStore::new()),
            today,
            StdRng::seed_from_u64(17),
            ModeKind::Infinite,
        );
        assert_eq!(session.status().text, format!("{WORDS_FALLBACK} {DATE_FALLBACK}"));
    }

    #[test]
    fn launch_without_fallback_keeps_start_message() {
        let load = BankLoad {
            bank: WordBank::builtin(),
            used_fallback: false,
        };
        let today = DateResolution {
            date: day(10),
            fell_back: false,
        };
        let session: TestSession = Session::launch(
            load,
            Storage::new(MemoryStore::new()),
            today,
            StdRng::seed_from_u64(17),
            ModeKind::Infinite,
        );
        assert_eq!(session.status().text, START_MESSAGE);
    }

    #[test]
    fn growth_carryover_through_session() {
        let mut session = open(ModeKind::Growth);
        let target = targets(&session).remove(0);
        for word in misses(&session).iter().take(3) {
            session.submit_guess(word).unwrap();
        }
        let report = session.submit_guess(&target).unwrap();

        assert!(matches!(
            report.growth,
            Some(GrowthEvent::StageCleared { carryover: 2, .. })
        ));
        assert!(!report.recorded);
        assert_eq!(session.stats().mode(ModeKind::Growth).games_played(), 0);

        assert_eq!(
            session.next_round(),
            NextRound::StageAdvanced {
                stage_index: 1,
                guess_limit: 9
            }
        );
        assert_eq!(session.round().targets().len(), 2);
    }

    #[test]
    fn growth_failure_recorded_once_then_restarts() {
        let mut session = open(ModeKind::Growth);
        for word in misses(&session).iter().take(MAX_GUESSES) {
            session.submit_guess(word).unwrap();
        }
        let growth = session.stats().mode(ModeKind::Growth);
        assert_eq!(growth.games_played(), 1);
        assert_eq!(growth.wins(), 0);

        assert_eq!(session.next_round(), NextRound::Started);
        let Mode::Growth(state) = session.mode() else {
            panic!("expected growth mode");
        };
        assert_eq!(state.stage_index(), 0);
        assert_eq!(session.stats().mode(ModeKind::Growth).games_played(), 1);
    }

    #[test]
    fn switching_modes_keeps_each_round() {
        let mut session = open(ModeKind::Infinite);
        let first_miss = misses(&session).remove(0);
        session.submit_guess(&first_miss).unwrap();
        let infinite_round = session.round().clone();

        session.switch_mode(ModeKind::Growth);
        assert_eq!(session.kind(), ModeKind::Growth);
        session.switch_mode(ModeKind::Infinite);
        assert_eq!(session.round(), &infinite_round);
    }

    #[test]
    fn restart_growth_resets_run() {
        let mut session = open(ModeKind::Growth);
        let target = targets(&session).remove(0);
        session.submit_guess(&target).unwrap();
        session.next_round();

        session.restart_growth();
        let Mode::Growth(state) = session.mode() else {
            panic!("expected growth mode");
        };
        assert_eq!(state.stage_index(), 0);
        assert_eq!(state.carryover(), 0);
        assert!(state.scoreboard().is_empty());
        assert_eq!(session.round().guess_limit(), MAX_GUESSES);
    }

    #[test]
    fn abandoned_growth_run_is_not_counted() {
        let mut session = open(ModeKind::Growth);
        let first_miss = misses(&session).remove(0);
        session.submit_guess(&first_miss).unwrap();

        assert_eq!(session.next_round(), NextRound::Started);
        let second_miss = misses(&session).remove(0);
        session.submit_guess(&second_miss).unwrap();
        session.restart_growth();

        let growth = session.stats().mode(ModeKind::Growth);
        assert_eq!(growth.games_played(), 0);
        assert_eq!(growth.current_streak(), 0);
    }

    #[test]
    fn stats_survive_reopen() {
        let mut session = open(ModeKind::Infinite);
        let target = targets(&session).remove(0);
        session.submit_guess(&target).unwrap();

        let reopened = open_with(session.into_storage(), ModeKind::Daily, day(10));
        assert_eq!(reopened.stats().mode(ModeKind::Infinite).wins(), 1);
    }
}
