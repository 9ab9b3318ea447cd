//! Keyboard input dispatch. Global keys first, then filter keys, then panel-specific handlers.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::app::{AppState, Panel};

const PAGE: usize = 10;

/// Handle a key event.
pub fn handle_key(app: &mut AppState<'_>, key: KeyEvent) {
    // Only handle key press events (Windows sends both Press and Release).
    if key.kind != KeyEventKind::Press {
        return;
    }

    // 1. Navigation.
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => {
            app.running = false;
            return;
        }
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.running = false;
            return;
        }
        KeyCode::Char(c @ '1'..='4') => {
            if let Some(panel) = c.to_digit(10).and_then(|d| Panel::from_index(d as usize - 1)) {
                app.active_panel = panel;
            }
            return;
        }
        KeyCode::Tab => {
            if key.modifiers.contains(KeyModifiers::SHIFT) {
                app.active_panel = app.active_panel.prev();
            } else {
                app.active_panel = app.active_panel.next();
            }
            return;
        }
        KeyCode::BackTab => {
            app.active_panel = app.active_panel.prev();
            return;
        }
        _ => {}
    }

    // 2. Filter keys, available on every panel.
    match key.code {
        KeyCode::Char('e') => return app.cycle_exchange(true),
        KeyCode::Char('E') => return app.cycle_exchange(false),
        KeyCode::Char('l') => return app.cycle_leverage(true),
        KeyCode::Char('L') => return app.cycle_leverage(false),
        KeyCode::Char('[') => return app.shift_start(false),
        KeyCode::Char(']') => return app.shift_start(true),
        KeyCode::Char('{') => return app.shift_end(false),
        KeyCode::Char('}') => return app.shift_end(true),
        KeyCode::Char('r') => return app.reset_dates(),
        _ => {}
    }

    // 3. Panel-specific keys.
    if app.active_panel == Panel::Trades {
        handle_trades_key(app, key);
    }
}

fn handle_trades_key(app: &mut AppState<'_>, key: KeyEvent) {
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => app.scroll_down(1),
        KeyCode::Char('k') | KeyCode::Up => app.scroll_up(1),
        KeyCode::PageDown => app.scroll_down(PAGE),
        KeyCode::PageUp => app.scroll_up(PAGE),
        KeyCode::Char('g') | KeyCode::Home => app.table_scroll = 0,
        KeyCode::Char('G') | KeyCode::End => app.scroll_to_end(),
        _ => {}
    }
}
