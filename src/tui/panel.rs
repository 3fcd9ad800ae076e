//! Panel widget: the drop zones of the active level.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::constants::MAX_LEVEL;
use crate::tui::AppState;

/// Render the panel zones into `area`.
pub fn render(f: &mut Frame, area: Rect, state: &AppState) {
    let theme = &state.theme;
    let board = state.session.board();
    let zones = state.zones();

    // Level selector row: reachable levels bright, locked ones dim
    let mut level_spans = vec![Span::styled(" Levels: ", Style::default().fg(theme.text_muted))];
    for level in 1..=MAX_LEVEL {
        let style = if level == state.session.current_level() {
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD)
        } else if state.session.is_level_unlocked(level) {
            Style::default().fg(theme.text)
        } else {
            Style::default().fg(theme.text_muted)
        };
        let marker = if state.session.is_level_unlocked(level) {
            format!("[{}] ", level)
        } else {
            format!("[{}🔒] ", level)
        };
        level_spans.push(Span::styled(marker, style));
    }

    let mut lines = vec![Line::from(level_spans), Line::from("")];

    for (index, zone) in zones.iter().enumerate() {
        let under_cursor = index == state.zone_cursor;
        let cursor = if under_cursor { " ▶ " } else { "   " };

        let mut spans = vec![Span::styled(
            cursor,
            Style::default().fg(theme.accent),
        )];

        match board.occupant(*zone) {
            Some(kind) => {
                let info = kind.describe();
                spans.push(Span::styled(
                    format!("{:<12}", zone.display_name()),
                    Style::default().fg(theme.text_muted),
                ));
                spans.push(Span::styled(info.icon, Style::default().fg(theme.component_color(info.style))));
                spans.push(Span::raw(" "));
                spans.push(Span::styled(
                    info.display_name,
                    Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
                ));
            }
            None => {
                let style = if under_cursor {
                    Style::default().fg(theme.text).bg(theme.highlight_bg)
                } else {
                    Style::default().fg(theme.text_muted)
                };
                spans.push(Span::styled(
                    format!("{:<12}(empty)", zone.display_name()),
                    style,
                ));
            }
        }
        lines.push(Line::from(spans));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        format!(
            " {}/{} zones filled",
            board.occupied_count(),
            zones.len()
        ),
        Style::default().fg(theme.text_muted),
    )));

    let panel = Paragraph::new(lines).block(
        Block::default()
            .title(format!(" Panel - Level {} ", state.session.current_level()))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.primary)),
    );
    f.render_widget(panel, area);
}
