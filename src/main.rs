mod app;
mod config;
mod handlers;
mod service;
mod ui;
mod wallet;

use anyhow::Result;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Modifier, Style},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
    Frame, Terminal,
};
use std::{io, path::PathBuf, time::Duration};

use app::App;
use config::Config;
use handlers::{handle_key_event, KeyAction};
use service::RpcPortalClient;
use ui::{
    render_connect_view, render_feed_view, render_status_bar, FeedViewState, StatusBarState,
};
use wallet::KeypairWallet;

#[tokio::main]
async fn main() -> Result<()> {
    let config = match Config::load() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Failed to load config: {}, using defaults", e);
            Config::default()
        }
    };

    let wallet_path = match &config.wallet.wallet_file {
        Some(path) => PathBuf::from(path),
        None => KeypairWallet::default_path()?,
    };
    let wallet = Box::new(KeypairWallet::new(wallet_path));
    let service = Box::new(RpcPortalClient::new(&config));

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(config, wallet, service);

    let res = run_app(&mut terminal, &mut app).await;

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("{:?}", err);
    }

    Ok(())
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()>
where
    <B as ratatui::backend::Backend>::Error: Send + Sync + 'static,
{
    // Silent connect on startup; fetches the feed if the wallet already
    // trusts us
    app.connect_on_startup().await;

    let tick_interval = Duration::from_millis(app.config.ui.tick_interval_ms);

    loop {
        app.clear_expired_status();

        terminal.draw(|f| render_ui(f, app))?;

        if event::poll(tick_interval)? {
            if let Event::Key(key) = event::read()? {
                match handle_key_event(app, key).await {
                    KeyAction::Quit => return Ok(()),
                    KeyAction::Continue => {}
                }
            }
        }
    }
}

fn render_ui(f: &mut Frame, app: &mut App) {
    let theme = app.config.theme.clone();

    let mut constraints = vec![
        Constraint::Length(3), // Header
    ];
    if app.show_debug {
        constraints.push(Constraint::Percentage(60)); // Main content
        constraints.push(Constraint::Percentage(25)); // Debug panel
    } else {
        constraints.push(Constraint::Min(10)); // Main content takes all remaining space
    }
    constraints.push(Constraint::Length(3)); // Status bar

    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints(constraints)
        .split(f.area());

    let mut chunk_index = 0;

    // Header
    let header_text = match &app.wallet_address {
        Some(address) => format!("GIF Portal - {}", ui::short_address(address)),
        None => "GIF Portal - Not Connected".to_string(),
    };
    let header = Paragraph::new(header_text)
        .style(Style::default().fg(theme.primary()).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
    f.render_widget(header, main_chunks[chunk_index]);
    chunk_index += 1;

    // Main content
    if app.is_connected() {
        let feed_state = FeedViewState {
            feed: &app.feed,
            selected_record: app.selected_record,
            draft: &app.submit.draft,
            input_active: app.submit.is_active,
        };
        render_feed_view(f, &feed_state, main_chunks[chunk_index], &theme);
    } else {
        render_connect_view(
            f,
            app.wallet_available(),
            main_chunks[chunk_index],
            &theme,
        );
    }
    chunk_index += 1;

    // Debug panel (only shown when enabled)
    if app.show_debug {
        let debug_text: String = app
            .debug_log
            .iter()
            .rev()
            .take(10)
            .rev()
            .cloned()
            .collect::<Vec<_>>()
            .join("\n");

        let debug_panel = Paragraph::new(debug_text)
            .style(Style::default().fg(theme.text_muted()))
            .wrap(Wrap { trim: false })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title("Debug Log [d: hide]")
                    .border_style(Style::default().fg(theme.border_normal())),
            );
        f.render_widget(debug_panel, main_chunks[chunk_index]);
        chunk_index += 1;
    }

    // Status bar
    let status_state = StatusBarState {
        connected: app.is_connected(),
        input_active: app.submit.is_active,
        status_message: app
            .status_message
            .as_ref()
            .map(|m| (m.message.clone(), m.is_error)),
    };
    render_status_bar(f, &status_state, main_chunks[chunk_index], &theme);
}
