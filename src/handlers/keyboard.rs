use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::{App, FeedState};

pub enum KeyAction {
    Continue,
    Quit,
}

pub async fn handle_key_event(app: &mut App, key: KeyEvent) -> KeyAction {
    // Submit input mode captures everything except Esc/Enter
    if app.submit.is_active {
        return handle_submit_input(app, key).await;
    }

    handle_normal_mode(app, key).await
}

async fn handle_submit_input(app: &mut App, key: KeyEvent) -> KeyAction {
    match key.code {
        KeyCode::Enter => {
            app.submit_link().await;
        }
        KeyCode::Esc => {
            app.submit.is_active = false;
            app.submit.draft.clear();
        }
        KeyCode::Backspace => {
            app.submit.draft.pop();
        }
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.submit.draft.push(c);
        }
        _ => {}
    }
    KeyAction::Continue
}

async fn handle_normal_mode(app: &mut App, key: KeyEvent) -> KeyAction {
    match key.code {
        KeyCode::Char('q') => return KeyAction::Quit,

        KeyCode::Char('c') => {
            if !app.is_connected() {
                app.connect_wallet().await;
            }
        }

        KeyCode::Char('i') => {
            if app.is_connected() && app.feed.is_uninitialized() {
                app.initialize_feed().await;
            }
        }

        KeyCode::Char('a') | KeyCode::Char('/') => {
            if matches!(app.feed, FeedState::Loaded(_)) {
                app.submit.is_active = true;
            }
        }

        KeyCode::Char('j') | KeyCode::Down => {
            if let Some(records) = app.feed.records() {
                if app.selected_record + 1 < records.len() {
                    app.selected_record += 1;
                }
            }
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.selected_record = app.selected_record.saturating_sub(1);
        }

        KeyCode::Char('u') | KeyCode::Enter => {
            let index = app.selected_record;
            app.upvote_record(index).await;
        }

        KeyCode::Char('r') => {
            app.refresh_feed().await;
        }

        KeyCode::Char('d') => {
            app.show_debug = !app.show_debug;
        }

        _ => {}
    }

    KeyAction::Continue
}
