//! Status bar widget: session stats, feedback banner, key hints.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::{AppState, Screen, Severity, Theme};

/// Status bar widget
pub struct StatusBar;

impl StatusBar {
    /// Render the status bar with session stats and contextual help.
    pub fn render(f: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
        let elapsed = state.session.elapsed().as_secs();
        let stats_line = Line::from(vec![
            Span::styled("Score: ", Style::default().fg(theme.primary)),
            Span::styled(
                state.session.score().to_string(),
                Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            Span::styled("Correct: ", Style::default().fg(theme.primary)),
            Span::styled(
                state.session.correct_connections().to_string(),
                Style::default().fg(theme.text),
            ),
            Span::raw("  "),
            Span::styled("Time: ", Style::default().fg(theme.primary)),
            Span::styled(
                format!("{:02}:{:02}", elapsed / 60, elapsed % 60),
                Style::default().fg(theme.text),
            ),
        ]);

        let feedback_line = state.feedback.as_ref().map_or_else(
            || Line::from(""),
            |feedback| {
                let color = match feedback.severity {
                    Severity::Info => theme.text,
                    Severity::Success => theme.success,
                    Severity::Warning => theme.warning,
                    Severity::Error => theme.error,
                };
                Line::from(Span::styled(
                    feedback.message.clone(),
                    Style::default().fg(color),
                ))
            },
        );

        let hints = match &state.screen {
            Screen::Home => "↑/↓ move · Enter open · s simulator · ? help · q quit",
            Screen::Simulator => "1-3 level · letters arm · Enter place · x remove · r reset · c check · ? help",
            Screen::Module(reader) if reader.in_quiz() => "1-3 answer · Enter finish · Esc back",
            Screen::Module(_) => "←/→ browse · Enter continue · Esc back",
        };
        let hints_line = Line::from(Span::styled(hints, Style::default().fg(theme.text_muted)));

        let widget = Paragraph::new(vec![stats_line, feedback_line, hints_line]).block(
            Block::default()
                .borders(Borders::TOP)
                .border_style(Style::default().fg(theme.primary)),
        );
        f.render_widget(widget, area);
    }
}
