//! Terminal user interface and state management.
//!
//! This module contains the main TUI loop, `AppState`, event handling,
//! and all UI widgets using Ratatui. The presentation layer calls named
//! core operations and renders the structured results; the core never
//! touches the display tree.

pub mod home;
pub mod panel;
pub mod reader;
pub mod results;
pub mod status_bar;
pub mod theme;
pub mod tray;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame, Terminal,
};
use std::io;
use std::time::{Duration, Instant};

use crate::config::Config;
use crate::constants::{APP_NAME, MAX_LEVEL, QUIZ_ADVANCE_DELAY};
use crate::learning::{AnswerFeedback, ModuleId};
use crate::models::{level::zones_for, ComponentKind, Level, ZoneId};
use crate::progress::ProgressStore;
use crate::simulator::{ActionError, DeferredAction, Scheduler, Session, ValidationReport};

pub use reader::ReaderState;
pub use status_bar::StatusBar;
pub use theme::Theme;

/// Severity of a feedback message, mapped to theme colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Neutral information
    Info,
    /// A successful action
    Success,
    /// A rejected but harmless action
    Warning,
    /// An incompatible or failing action
    Error,
}

/// A transient feedback banner shown in the status bar.
#[derive(Debug, Clone)]
pub struct Feedback {
    /// Message text
    pub message: String,
    /// Display severity
    pub severity: Severity,
}

/// Which screen the UI is showing.
#[derive(Debug)]
pub enum Screen {
    /// Module list and overall progress
    Home,
    /// The panel simulator
    Simulator,
    /// A learning module's reader and quiz
    Module(ReaderState),
}

/// Entries on the home screen: the four modules plus the simulator.
const HOME_ENTRIES: usize = ModuleId::ALL.len() + 1;

/// Top-level application state owned by the event loop.
pub struct AppState {
    /// Loaded configuration
    pub config: Config,
    /// Active color theme
    pub theme: Theme,
    /// The simulator session (score, level, board, timer)
    pub session: Session,
    /// Persisted per-module completion
    pub progress: ProgressStore,
    /// Current screen
    pub screen: Screen,
    /// Transient feedback banner
    pub feedback: Option<Feedback>,
    /// Validation report popup, when a check has run
    pub results: Option<ValidationReport>,
    /// Whether the help overlay is visible
    pub help_visible: bool,
    /// Set when the user asks to quit
    pub should_quit: bool,
    /// Cursor into the active level's zone list
    pub zone_cursor: usize,
    /// Cursor on the home screen
    pub home_cursor: usize,
    // Paces quiz reveals; separate from the session's own scheduler so
    // quitting a module cannot disturb simulator timing.
    ui_scheduler: Scheduler,
}

impl AppState {
    /// Creates the initial application state.
    #[must_use]
    pub fn new(config: Config, progress: ProgressStore) -> Self {
        let theme = Theme::from_mode(config.ui.theme_mode);
        Self {
            config,
            theme,
            session: Session::new(),
            progress,
            screen: Screen::Home,
            feedback: None,
            results: None,
            help_visible: false,
            should_quit: false,
            zone_cursor: 0,
            home_cursor: 0,
            ui_scheduler: Scheduler::new(),
        }
    }

    /// Shows a feedback banner.
    pub fn set_feedback(&mut self, message: impl Into<String>, severity: Severity) {
        self.feedback = Some(Feedback {
            message: message.into(),
            severity,
        });
    }

    /// Zones of the active level, in display order.
    #[must_use]
    pub fn zones(&self) -> Vec<ZoneId> {
        zones_for(self.session.current_level())
    }

    /// Zone currently under the cursor.
    #[must_use]
    pub fn selected_zone(&self) -> Option<ZoneId> {
        self.zones().get(self.zone_cursor).copied()
    }

    fn select_component(&mut self, kind: ComponentKind) {
        let info = self.session.select_component(kind);
        self.set_feedback(
            format!("{} selected. Move to a zone and press Enter.", info.display_name),
            Severity::Info,
        );
    }

    fn place_at_cursor(&mut self) {
        let Some(zone) = self.selected_zone() else {
            return;
        };
        match self.session.place_at(zone) {
            Ok(placed) => {
                self.set_feedback(
                    format!("{} placed on {}.", placed.kind, placed.zone),
                    Severity::Success,
                );
            }
            Err(error) => self.reject(error),
        }
    }

    fn remove_at_cursor(&mut self) {
        let Some(zone) = self.selected_zone() else {
            return;
        };
        if let Some(kind) = self.session.remove_at(zone) {
            self.set_feedback(format!("{} removed from {}.", kind, zone), Severity::Info);
        }
    }

    fn select_level(&mut self, level: Level) {
        match self.session.select_level(level) {
            Ok(level) => {
                self.zone_cursor = 0;
                self.results = None;
                self.set_feedback(format!("Level {} active.", level), Severity::Info);
            }
            Err(error) => self.reject(error),
        }
    }

    fn reset_panel(&mut self) {
        self.session.reset_panel();
        self.results = None;
        self.set_feedback("Panel reset.", Severity::Info);
    }

    fn run_check(&mut self) {
        let report = self.session.check_connections();
        let severity = match report.band {
            crate::simulator::ResultBand::Pass => Severity::Success,
            crate::simulator::ResultBand::Partial => Severity::Warning,
            crate::simulator::ResultBand::Fail => Severity::Error,
        };
        self.set_feedback(
            format!(
                "{} {}/{} correct ({}%)",
                report.band.headline(),
                report.correct_count,
                report.total_required,
                report.percentage
            ),
            severity,
        );
        self.results = Some(report);
    }

    fn finish_level(&mut self) {
        let level = self.session.current_level();
        self.session.complete_level();
        if level < MAX_LEVEL {
            self.set_feedback(
                format!("Level {} complete! Level {} unlocked.", level, level + 1),
                Severity::Success,
            );
        } else {
            self.set_feedback("All levels complete. Well done!", Severity::Success);
        }
    }

    fn reject(&mut self, error: ActionError) {
        let severity = match error {
            ActionError::NoSelection | ActionError::LevelLocked { .. } => Severity::Warning,
            _ => Severity::Error,
        };
        self.set_feedback(error.to_string(), severity);
    }

    fn open_module(&mut self, id: ModuleId) {
        self.screen = Screen::Module(ReaderState::new(id));
        self.set_feedback(format!("Opened: {}", id.title()), Severity::Info);
    }

    fn answer_quiz(&mut self, choice: usize) {
        let Screen::Module(reader) = &mut self.screen else {
            return;
        };
        let Some(feedback) = reader.answer(choice) else {
            return;
        };
        match feedback {
            AnswerFeedback::Correct => self.set_feedback("Correct!", Severity::Success),
            AnswerFeedback::Incorrect { .. } => {
                self.set_feedback("Incorrect. The correct answer is highlighted.", Severity::Error);
            }
        }
        self.ui_scheduler
            .schedule(DeferredAction::AdvanceQuiz, QUIZ_ADVANCE_DELAY);
    }

    fn advance_quiz(&mut self) {
        let Screen::Module(reader) = &mut self.screen else {
            return;
        };
        reader.advance_quiz();
        if reader.quiz_summary().is_some_and(|(score, total)| score == total) {
            self.set_feedback("Congratulations! A perfect score!", Severity::Success);
        }
    }

    /// Marks the open module complete, persists progress, and returns home.
    fn finish_module(&mut self) {
        let Screen::Module(reader) = &self.screen else {
            return;
        };
        let id = reader.module_id();
        self.progress.complete(id);
        if let Err(error) = self.progress.save() {
            self.set_feedback(format!("Could not save progress: {error:#}"), Severity::Error);
        } else {
            self.set_feedback(format!("{} complete!", id.title()), Severity::Success);
        }
        self.screen = Screen::Home;
    }

    /// Persists partial section progress when leaving a module early.
    fn leave_module(&mut self) {
        if let Screen::Module(reader) = &self.screen {
            self.progress.record(reader.module_id(), reader.percent());
            // Best-effort: partial progress is a convenience, not critical
            let _ = self.progress.save();
        }
        self.screen = Screen::Home;
    }

    /// Executes deferred actions that have come due.
    fn drain_deferred(&mut self, now: Instant) {
        for action in self.session.tick(now) {
            match action {
                DeferredAction::AutoCheck => self.run_check(),
                DeferredAction::CompleteLevel => self.finish_level(),
                DeferredAction::AdvanceQuiz => {}
            }
        }
        for action in self.ui_scheduler.drain_due(now) {
            if action == DeferredAction::AdvanceQuiz {
                self.advance_quiz();
            }
        }
    }
}

/// Initialize terminal for TUI
pub fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend).context("Failed to create terminal")?;
    Ok(terminal)
}

/// Restore terminal to normal state
pub fn restore_terminal(mut terminal: Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)
        .context("Failed to leave alternate screen")?;
    terminal.show_cursor().context("Failed to show cursor")?;
    Ok(())
}

/// Main event loop
pub fn run_tui(
    state: &mut AppState,
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
) -> Result<()> {
    loop {
        state.theme = Theme::from_mode(state.config.ui.theme_mode);

        // All state mutation happens in the handlers below; the renderer
        // only ever sees a settled snapshot.
        terminal.draw(|f| render(f, state))?;

        // Poll for events with 100ms timeout; the timeout doubles as the
        // tick for the elapsed timer and the deferred-task queue.
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if handle_key_event(state, key) {
                    break; // User quit
                }
            }
        }

        state.drain_deferred(Instant::now());

        if state.should_quit {
            break;
        }
    }

    Ok(())
}

/// Handle keyboard input events. Returns `true` when the user quits.
fn handle_key_event(state: &mut AppState, key: KeyEvent) -> bool {
    // Help overlay swallows everything until dismissed
    if state.help_visible {
        state.help_visible = false;
        return false;
    }

    // Results popup: dismiss on Enter/Esc before anything else
    if state.results.is_some() && matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
        state.results = None;
        return false;
    }

    match &state.screen {
        Screen::Home => handle_home_key(state, key),
        Screen::Simulator => handle_simulator_key(state, key),
        Screen::Module(_) => handle_module_key(state, key),
    }
}

fn handle_home_key(state: &mut AppState, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => return true,
        KeyCode::Up | KeyCode::Char('k') => {
            state.home_cursor = state.home_cursor.saturating_sub(1);
        }
        KeyCode::Down | KeyCode::Char('j') => {
            state.home_cursor = (state.home_cursor + 1).min(HOME_ENTRIES - 1);
        }
        KeyCode::Enter => {
            if let Some(id) = ModuleId::ALL.get(state.home_cursor).copied() {
                state.open_module(id);
            } else {
                state.screen = Screen::Simulator;
            }
        }
        KeyCode::Char('s') => state.screen = Screen::Simulator,
        KeyCode::Char('?') => state.help_visible = true,
        _ => {}
    }
    false
}

fn handle_simulator_key(state: &mut AppState, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') => {
            state.screen = Screen::Home;
        }
        KeyCode::Char(c @ '1'..='9') => {
            state.select_level(c as u8 - b'0');
        }
        KeyCode::Char('b') => state.select_component(ComponentKind::Breaker),
        KeyCode::Char('d') => state.select_component(ComponentKind::ResidualDevice),
        KeyCode::Char('p') => state.select_component(ComponentKind::PhaseWire),
        KeyCode::Char('n') => state.select_component(ComponentKind::NeutralWire),
        KeyCode::Char('e') => state.select_component(ComponentKind::EarthWire),
        KeyCode::Char('o') => state.select_component(ComponentKind::Outlet),
        KeyCode::Char('l') => state.select_component(ComponentKind::Lamp),
        KeyCode::Up => state.zone_cursor = state.zone_cursor.saturating_sub(1),
        KeyCode::Down => {
            let max = state.zones().len().saturating_sub(1);
            state.zone_cursor = (state.zone_cursor + 1).min(max);
        }
        KeyCode::Enter => state.place_at_cursor(),
        KeyCode::Char('x') | KeyCode::Delete | KeyCode::Backspace => state.remove_at_cursor(),
        KeyCode::Char('r') => state.reset_panel(),
        KeyCode::Char('c') => state.run_check(),
        KeyCode::Char('?') => state.help_visible = true,
        _ => {}
    }
    false
}

fn handle_module_key(state: &mut AppState, key: KeyEvent) -> bool {
    let Screen::Module(reader) = &mut state.screen else {
        return false;
    };

    if reader.in_quiz() {
        match key.code {
            KeyCode::Esc | KeyCode::Char('q') => state.leave_module(),
            KeyCode::Char(c @ '1'..='3') => state.answer_quiz(c as usize - '1' as usize),
            KeyCode::Enter => {
                if reader.quiz_summary().is_some() {
                    state.finish_module();
                }
            }
            _ => {}
        }
        return false;
    }

    match key.code {
        KeyCode::Esc | KeyCode::Char('q') => state.leave_module(),
        KeyCode::Left | KeyCode::Char('h') => reader.previous_section(),
        KeyCode::Right | KeyCode::Char('l') => reader.next_section(),
        KeyCode::Enter => {
            reader.complete_section();
            let id = reader.module_id();
            let percent = reader.percent();
            state.progress.record(id, percent);
        }
        KeyCode::Char('?') => state.help_visible = true,
        _ => {}
    }
    false
}

/// Render the UI from current state
fn render(f: &mut Frame, state: &AppState) {
    // Fill entire screen with theme background color first
    let full_bg = Block::default().style(Style::default().bg(state.theme.background));
    f.render_widget(full_bg, f.area());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title bar
            Constraint::Min(10),   // Main content
            Constraint::Length(4), // Status bar (stats + feedback + hints)
        ])
        .split(f.area());

    render_title_bar(f, chunks[0], state);

    match &state.screen {
        Screen::Home => home::render(f, chunks[1], state),
        Screen::Simulator => render_simulator(f, chunks[1], state),
        Screen::Module(reader) => reader::render(f, chunks[1], reader, &state.theme),
    }

    StatusBar::render(f, chunks[2], state, &state.theme);

    if let Some(report) = &state.results {
        results::render(f, report, &state.theme);
    }

    if state.help_visible {
        render_help_overlay(f, state);
    }
}

fn render_title_bar(f: &mut Frame, area: Rect, state: &AppState) {
    let screen_name = match &state.screen {
        Screen::Home => "Training Modules".to_string(),
        Screen::Simulator => format!("Panel Simulator - Level {}", state.session.current_level()),
        Screen::Module(reader) => reader.module_id().title().to_string(),
    };
    let title = format!(" {} - {}", APP_NAME, screen_name);

    let widget = Paragraph::new(title)
        .style(
            Style::default()
                .fg(state.theme.primary)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(state.theme.primary)),
        );
    f.render_widget(widget, area);
}

fn render_simulator(f: &mut Frame, area: Rect, state: &AppState) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(30), Constraint::Min(30)])
        .split(area);

    tray::render(f, chunks[0], state);
    panel::render(f, chunks[1], state);
}

fn render_help_overlay(f: &mut Frame, state: &AppState) {
    use ratatui::text::Line;

    let area = centered_rect(60, 60, f.area());
    f.render_widget(Clear, area);
    let background = Block::default().style(Style::default().bg(state.theme.background));
    f.render_widget(background, area);

    let text = vec![
        Line::from(""),
        Line::from("  Home:       ↑/↓ move, Enter open, q quit"),
        Line::from(""),
        Line::from("  Simulator:  1-3 select level"),
        Line::from("              b/d/p/n/e/o/l arm a component"),
        Line::from("              ↑/↓ move between zones, Enter place"),
        Line::from("              x remove, r reset, c check wiring"),
        Line::from(""),
        Line::from("  Modules:    ←/→ browse sections, Enter continue"),
        Line::from("              1-3 answer quiz questions"),
        Line::from(""),
        Line::from("  Press any key to close this help."),
    ];

    let help = Paragraph::new(text).block(
        Block::default()
            .title(" Help ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(state.theme.accent)),
    );
    f.render_widget(help, area);
}

/// Centers a popup of the given percentage size within `r`.
fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEventKind, KeyEventState, KeyModifiers};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    fn fresh_state() -> AppState {
        AppState::new(Config::default(), ProgressStore::default())
    }

    #[test]
    fn locked_level_key_is_rejected_with_warning() {
        let mut state = fresh_state();
        state.screen = Screen::Simulator;

        handle_key_event(&mut state, key(KeyCode::Char('3')));

        assert_eq!(state.session.current_level(), 1);
        let feedback = state.feedback.expect("feedback should be set");
        assert_eq!(feedback.severity, Severity::Warning);
    }

    #[test]
    fn component_key_arms_a_selection() {
        let mut state = fresh_state();
        state.screen = Screen::Simulator;

        handle_key_event(&mut state, key(KeyCode::Char('b')));
        assert_eq!(state.session.board().pending(), Some(ComponentKind::Breaker));
    }

    #[test]
    fn enter_places_on_the_zone_under_the_cursor() {
        let mut state = fresh_state();
        state.screen = Screen::Simulator;

        handle_key_event(&mut state, key(KeyCode::Char('b')));
        handle_key_event(&mut state, key(KeyCode::Enter));

        assert_eq!(
            state.session.board().occupant(ZoneId::Main),
            Some(ComponentKind::Breaker)
        );
    }

    #[test]
    fn zone_cursor_stays_in_range() {
        let mut state = fresh_state();
        state.screen = Screen::Simulator;

        for _ in 0..20 {
            handle_key_event(&mut state, key(KeyCode::Down));
        }
        assert_eq!(state.zone_cursor, state.zones().len() - 1);

        for _ in 0..20 {
            handle_key_event(&mut state, key(KeyCode::Up));
        }
        assert_eq!(state.zone_cursor, 0);
    }

    #[test]
    fn check_key_opens_the_results_popup_and_enter_dismisses_it() {
        let mut state = fresh_state();
        state.screen = Screen::Simulator;

        handle_key_event(&mut state, key(KeyCode::Char('c')));
        assert!(state.results.is_some());

        handle_key_event(&mut state, key(KeyCode::Enter));
        assert!(state.results.is_none());
    }

    #[test]
    fn home_enter_on_last_entry_opens_the_simulator() {
        let mut state = fresh_state();
        for _ in 0..HOME_ENTRIES {
            handle_key_event(&mut state, key(KeyCode::Down));
        }
        handle_key_event(&mut state, key(KeyCode::Enter));
        assert!(matches!(state.screen, Screen::Simulator));
    }

    #[test]
    fn completing_sections_records_partial_progress() {
        let mut state = fresh_state();
        state.open_module(ModuleId::Introduction);

        handle_key_event(&mut state, key(KeyCode::Enter));
        assert_eq!(state.progress.percent(ModuleId::Introduction), 50);
    }
}
