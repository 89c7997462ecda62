use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

use crate::app::FeedState;

use super::theme::Theme;

pub struct FeedViewState<'a> {
    pub feed: &'a FeedState,
    pub selected_record: usize,
    pub draft: &'a str,
    pub input_active: bool,
}

/// Shorten a base58 address for list display
pub fn short_address(address: &str) -> String {
    if address.len() <= 10 {
        address.to_string()
    } else {
        format!("{}..{}", &address[..4], &address[address.len() - 4..])
    }
}

/// Connected view: loading placeholder, init affordance, or the feed itself.
pub fn render_feed_view(f: &mut Frame, state: &FeedViewState, area: Rect, theme: &Theme) {
    match state.feed {
        FeedState::NotLoaded => {
            let placeholder = Paragraph::new("Loading feed...")
                .style(Style::default().fg(theme.text_muted()))
                .alignment(Alignment::Center)
                .block(Block::default().borders(Borders::ALL));
            f.render_widget(placeholder, area);
        }
        FeedState::Uninitialized => render_initialize_prompt(f, area, theme),
        FeedState::Loaded(records) => {
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Length(3), Constraint::Min(3)])
                .split(area);

            render_submit_input(f, state, chunks[0], theme);
            render_record_list(f, records, state.selected_record, chunks[1], theme);
        }
    }
}

fn render_initialize_prompt(f: &mut Frame, area: Rect, theme: &Theme) {
    let prompt = Paragraph::new(vec![
        Line::from("Feed account does not exist yet."),
        Line::from(""),
        Line::styled(
            "Press i for one-time initialization of the feed account",
            Style::default()
                .fg(theme.warning())
                .add_modifier(Modifier::BOLD),
        ),
    ])
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(theme.border_normal())),
    );
    f.render_widget(prompt, area);
}

fn render_submit_input(f: &mut Frame, state: &FeedViewState, area: Rect, theme: &Theme) {
    let display = if state.draft.is_empty() && !state.input_active {
        Span::styled("Enter gif link! [a: edit]", Style::default().fg(theme.text_muted()))
    } else if state.input_active {
        // Trailing block as a poor man's cursor
        Span::raw(format!("{}\u{2588}", state.draft))
    } else {
        Span::raw(state.draft.to_string())
    };

    let border_color = if state.input_active {
        theme.border_focused()
    } else {
        theme.border_normal()
    };

    let input = Paragraph::new(Line::from(display)).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Submit")
            .border_style(Style::default().fg(border_color)),
    );
    f.render_widget(input, area);
}

fn render_record_list(
    f: &mut Frame,
    records: &[crate::service::Record],
    selected: usize,
    area: Rect,
    theme: &Theme,
) {
    if records.is_empty() {
        let empty = Paragraph::new("No GIFs submitted yet - be the first!")
            .style(Style::default().fg(theme.text_muted()))
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title("GIF Feed [a: submit]"),
            );
        f.render_widget(empty, area);
        return;
    }

    let items: Vec<ListItem> = records
        .iter()
        .enumerate()
        .map(|(i, record)| {
            let line = Line::from(vec![
                Span::styled(
                    format!("{:>4} ", record.upvotes),
                    Style::default().fg(theme.success()),
                ),
                Span::raw(record.link.clone()),
                Span::styled(
                    format!("  by {}", short_address(&record.submitter)),
                    Style::default().fg(theme.text_muted()),
                ),
            ]);
            ListItem::new(line).style(theme.record_style(i == selected))
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("GIF Feed [j/k: move | u: upvote | a: submit | r: refresh]")
                .border_style(Style::default().fg(theme.border_normal())),
        )
        .highlight_style(theme.highlight_style())
        .highlight_symbol("> ");

    f.render_stateful_widget(
        list,
        area,
        &mut ListState::default().with_selected(Some(selected)),
    );
}

#[cfg(test)]
mod tests {
    use super::short_address;

    #[test]
    fn test_short_address() {
        assert_eq!(
            short_address("9xQeWvG816bUx9EPjHmaT23yvVM2ZWbrrpZb9PusVFin"),
            "9xQe..VFin"
        );
        assert_eq!(short_address("short"), "short");
    }
}
