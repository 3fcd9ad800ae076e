//! Home screen: module list, overall progress, simulator entry.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
    Frame,
};

use crate::learning::ModuleId;
use crate::tui::AppState;

/// Render the home screen into `area`.
pub fn render(f: &mut Frame, area: Rect, state: &AppState) {
    let theme = &state.theme;
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Overall progress gauge
            Constraint::Min(7),    // Module list + simulator entry
        ])
        .split(area);

    let overall = state.progress.overall();
    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Course Progress ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.primary)),
        )
        .gauge_style(Style::default().fg(theme.success))
        .percent(u16::from(overall));
    f.render_widget(gauge, chunks[0]);

    let mut lines = vec![Line::from("")];
    for (index, module) in ModuleId::ALL.iter().enumerate() {
        let percent = state.progress.percent(*module);
        let marker = if percent >= 100 { "✔" } else { " " };
        let line = format!("  {} {}  ({}%)", marker, module.title(), percent);
        lines.push(entry_line(line, state.home_cursor == index, state));
    }
    lines.push(Line::from(""));
    lines.push(entry_line(
        "  ⚡ Panel Simulator".to_string(),
        state.home_cursor == ModuleId::ALL.len(),
        state,
    ));

    let list = Paragraph::new(lines).block(
        Block::default()
            .title(" Choose a module ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.primary)),
    );
    f.render_widget(list, chunks[1]);
}

fn entry_line(text: String, selected: bool, state: &AppState) -> Line<'static> {
    let style = if selected {
        Style::default()
            .fg(state.theme.accent)
            .bg(state.theme.highlight_bg)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(state.theme.text)
    };
    Line::from(Span::styled(text, style))
}
