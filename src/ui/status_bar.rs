use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use super::theme::Theme;

pub struct StatusBarState {
    pub connected: bool,
    pub input_active: bool,
    pub status_message: Option<(String, bool)>, // (message, is_error)
}

pub fn render_status_bar(
    f: &mut Frame,
    state: &StatusBarState,
    area: ratatui::layout::Rect,
    theme: &Theme,
) {
    let status_bar = if let Some((ref msg, is_error)) = state.status_message {
        let color = if is_error { theme.error() } else { theme.warning() };
        Paragraph::new(Line::from(vec![
            Span::styled(
                if is_error { "ERROR" } else { "INFO" },
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            ),
            Span::raw(": "),
            Span::styled(msg.as_str(), Style::default().fg(color)),
        ]))
    } else if state.input_active {
        Paragraph::new(Line::from(vec![
            Span::styled(
                "INSERT MODE",
                Style::default().fg(theme.warning()).add_modifier(Modifier::BOLD),
            ),
            Span::raw(" | "),
            Span::styled("Enter", Style::default().add_modifier(Modifier::BOLD)),
            Span::raw(": submit | "),
            Span::styled("Esc", Style::default().add_modifier(Modifier::BOLD)),
            Span::raw(": cancel"),
        ]))
    } else if !state.connected {
        Paragraph::new(Line::from(vec![
            Span::styled(
                "DISCONNECTED",
                Style::default().fg(theme.error()).add_modifier(Modifier::BOLD),
            ),
            Span::raw(" | "),
            Span::styled("c", Style::default().add_modifier(Modifier::BOLD)),
            Span::raw(": connect | "),
            Span::styled("q", Style::default().add_modifier(Modifier::BOLD)),
            Span::raw(": quit"),
        ]))
    } else {
        Paragraph::new(Line::from(vec![
            Span::styled(
                "CONNECTED",
                Style::default().fg(theme.success()).add_modifier(Modifier::BOLD),
            ),
            Span::raw(" | "),
            Span::styled("j/k", Style::default().add_modifier(Modifier::BOLD)),
            Span::raw(": move | "),
            Span::styled("u", Style::default().add_modifier(Modifier::BOLD)),
            Span::raw(": upvote | "),
            Span::styled("a", Style::default().add_modifier(Modifier::BOLD)),
            Span::raw(": submit | "),
            Span::styled("r", Style::default().add_modifier(Modifier::BOLD)),
            Span::raw(": refresh | "),
            Span::styled("d", Style::default().add_modifier(Modifier::BOLD)),
            Span::raw(": debug | "),
            Span::styled("q", Style::default().add_modifier(Modifier::BOLD)),
            Span::raw(": quit"),
        ]))
    };

    let status_bar = status_bar.block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(status_bar, area);
}
