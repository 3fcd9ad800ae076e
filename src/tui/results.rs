//! Validation results popup.

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::simulator::{ResultBand, ValidationReport};
use crate::tui::{centered_rect, Theme};

/// Render the validation report as a centered popup.
pub fn render(f: &mut Frame, report: &ValidationReport, theme: &Theme) {
    let area = centered_rect(60, 50, f.area());

    // Clear the background area first
    f.render_widget(Clear, area);
    let background = Block::default().style(Style::default().bg(theme.background));
    f.render_widget(background, area);

    let band_color = match report.band {
        ResultBand::Pass => theme.success,
        ResultBand::Partial => theme.warning,
        ResultBand::Fail => theme.error,
    };

    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            format!("  Result: {}%", report.percentage),
            Style::default().fg(band_color).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!(
                "  Correct connections: {}/{}",
                report.correct_count, report.total_required
            ),
            Style::default().fg(theme.text),
        )),
        Line::from(""),
    ];

    if !report.errors.is_empty() {
        lines.push(Line::from(Span::styled(
            "  Problems found:",
            Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
        )));
        for error in &report.errors {
            lines.push(Line::from(Span::styled(
                format!("   • {}", error),
                Style::default().fg(theme.error),
            )));
        }
        lines.push(Line::from(""));
    }

    if report.passed() {
        lines.push(Line::from(Span::styled(
            "  Level complete - advancing shortly...",
            Style::default().fg(theme.success),
        )));
        lines.push(Line::from(""));
    }

    lines.push(Line::from(Span::styled(
        "  Press Enter to close.",
        Style::default().fg(theme.text_muted),
    )));

    let popup = Paragraph::new(lines).block(
        Block::default()
            .title(format!(" {} ", report.band.headline()))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(band_color)),
    );
    f.render_widget(popup, area);
}
