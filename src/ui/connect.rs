use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use super::theme::Theme;

/// Not-connected view: a single connect affordance.
pub fn render_connect_view(f: &mut Frame, wallet_available: bool, area: Rect, theme: &Theme) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),
            Constraint::Length(5),
            Constraint::Min(1),
        ])
        .split(area);

    let lines = if wallet_available {
        vec![
            Line::from("View the GIF collection in the metaverse"),
            Line::from(""),
            Line::styled(
                "Press c to connect your wallet",
                Style::default()
                    .fg(theme.warning())
                    .add_modifier(Modifier::BOLD),
            ),
        ]
    } else {
        vec![
            Line::from("No wallet found"),
            Line::from(""),
            Line::styled(
                "Create a wallet file to get started",
                Style::default().fg(theme.text_muted()),
            ),
        ]
    };

    let panel = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(theme.border_normal())),
        );
    f.render_widget(panel, chunks[1]);
}
