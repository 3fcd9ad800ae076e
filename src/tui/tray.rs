//! Component tray: the catalog of placeable components.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::models::ComponentKind;
use crate::tui::AppState;

/// Key binding for each component kind, shown next to its name.
fn binding(kind: ComponentKind) -> char {
    match kind {
        ComponentKind::Breaker => 'b',
        ComponentKind::ResidualDevice => 'd',
        ComponentKind::PhaseWire => 'p',
        ComponentKind::NeutralWire => 'n',
        ComponentKind::EarthWire => 'e',
        ComponentKind::Outlet => 'o',
        ComponentKind::Lamp => 'l',
    }
}

/// Render the component tray into `area`.
pub fn render(f: &mut Frame, area: Rect, state: &AppState) {
    let theme = &state.theme;
    let armed = state.session.board().pending();

    let mut lines = vec![Line::from("")];
    for kind in ComponentKind::ALL {
        let info = kind.describe();
        let color = theme.component_color(info.style);
        let selected = armed == Some(kind);

        let mut spans = vec![
            Span::raw(if selected { " ▶ " } else { "   " }),
            Span::styled(
                format!("[{}] ", binding(kind)),
                Style::default().fg(theme.text_muted),
            ),
            Span::styled(info.icon, Style::default().fg(color)),
            Span::raw(" "),
        ];
        let name_style = if selected {
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.text)
        };
        spans.push(Span::styled(info.display_name, name_style));
        lines.push(Line::from(spans));
    }

    lines.push(Line::from(""));
    let armed_line = match armed {
        Some(kind) => Line::from(vec![
            Span::styled(" Armed: ", Style::default().fg(theme.text_muted)),
            Span::styled(
                kind.describe().display_name,
                Style::default().fg(theme.accent),
            ),
        ]),
        None => Line::from(Span::styled(
            " Nothing armed",
            Style::default().fg(theme.text_muted),
        )),
    };
    lines.push(armed_line);

    let tray = Paragraph::new(lines).block(
        Block::default()
            .title(" Components ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.primary)),
    );
    f.render_widget(tray, area);
}
