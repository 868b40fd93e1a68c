//! Keyboard Input Handler
//!
//! Popups take keys first; otherwise keys act on the focused control, then
//! fall through to the global actions.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use movietui::logic::options::ListField;
use movietui::logic::ui::{focused_handle, sort_key_for_digit};
use movietui::model::ui::Focus;

use crate::App;

/// Cells a handle moves per arrow press (Shift multiplies by this)
const FAST_NUDGE: i32 = 5;

/// Handle keyboard input
pub async fn handle_key(app: &mut App, key: KeyEvent) -> Result<()> {
    if key.kind == KeyEventKind::Release {
        return Ok(());
    }

    // Ctrl+C always quits
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.ui.should_quit = true;
        return Ok(());
    }

    if app.ui.has_modal() {
        handle_dropdown_key(app, key);
        return Ok(());
    }

    let focus = app.ui.focus;
    let handled = match focus {
        Focus::Director => open_on_enter(app, key, ListField::Director),
        Focus::Country => open_on_enter(app, key, ListField::Country),
        Focus::Table => handle_table_key(app, key),
        _ => match focused_handle(focus) {
            Some((axis, handle)) => match nudge_delta(key, app.ui.vim_mode) {
                Some(delta) => {
                    app.nudge_handle(axis, handle, delta);
                    true
                }
                None => false,
            },
            None => false,
        },
    };
    if handled {
        return Ok(());
    }

    match key.code {
        KeyCode::Tab => app.focus_next(),
        KeyCode::BackTab => app.focus_prev(),
        KeyCode::Char('a') => app.apply_filters(),
        KeyCode::Char('r') => app.reset_filters(),
        KeyCode::Char('R') => app.reset_all_filters(),
        KeyCode::Char('q') => app.ui.should_quit = true,
        KeyCode::Esc => app.ui.focus = Focus::Table,
        KeyCode::Char(c) => {
            if let Some(sort) = sort_key_for_digit(c) {
                app.select_sort(sort);
            }
        }
        _ => {}
    }

    Ok(())
}

fn handle_dropdown_key(app: &mut App, key: KeyEvent) {
    let vim = app.ui.vim_mode;
    match key.code {
        KeyCode::Esc => app.close_dropdown(),
        KeyCode::Enter => app.confirm_dropdown(None),
        KeyCode::Down => app.move_dropdown_selection(1),
        KeyCode::Up => app.move_dropdown_selection(-1),
        KeyCode::Char('j') if vim => app.move_dropdown_selection(1),
        KeyCode::Char('k') if vim => app.move_dropdown_selection(-1),
        KeyCode::PageDown => app.move_dropdown_selection(10),
        KeyCode::PageUp => app.move_dropdown_selection(-10),
        _ => {}
    }
}

fn open_on_enter(app: &mut App, key: KeyEvent, field: ListField) -> bool {
    if key.code != KeyCode::Enter {
        return false;
    }
    app.open_dropdown(field);
    true
}

/// Cells to move a focused handle for this key, if it is a nudge key
fn nudge_delta(key: KeyEvent, vim: bool) -> Option<i32> {
    let step = if key.modifiers.contains(KeyModifiers::SHIFT) {
        FAST_NUDGE
    } else {
        1
    };
    match key.code {
        KeyCode::Left => Some(-step),
        KeyCode::Right => Some(step),
        KeyCode::Char('h') if vim => Some(-1),
        KeyCode::Char('l') if vim => Some(1),
        KeyCode::Char('H') if vim => Some(-FAST_NUDGE),
        KeyCode::Char('L') if vim => Some(FAST_NUDGE),
        _ => None,
    }
}

fn handle_table_key(app: &mut App, key: KeyEvent) -> bool {
    let vim = app.ui.vim_mode;
    match key.code {
        KeyCode::Down => app.next_row(),
        KeyCode::Up => app.previous_row(),
        KeyCode::Char('j') if vim => app.next_row(),
        KeyCode::Char('k') if vim => app.previous_row(),
        KeyCode::PageDown => {
            let page = app.page_size();
            app.scroll_rows(page);
        }
        KeyCode::PageUp => {
            let page = app.page_size();
            app.scroll_rows(-page);
        }
        KeyCode::Char('d') if vim && key.modifiers.contains(KeyModifiers::CONTROL) => {
            let half = (app.page_size() / 2).max(1);
            app.scroll_rows(half);
        }
        KeyCode::Char('u') if vim && key.modifiers.contains(KeyModifiers::CONTROL) => {
            let half = (app.page_size() / 2).max(1);
            app.scroll_rows(-half);
        }
        KeyCode::Home => app.first_row(),
        KeyCode::End => app.last_row(),
        KeyCode::Char('g') if vim => app.first_row(),
        KeyCode::Char('G') if vim => app.last_row(),
        _ => return false,
    }
    true
}
