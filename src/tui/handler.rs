//! Event handler for the TUI
//!
//! Routes keyboard events to the appropriate handlers based on focus and
//! whether an overlay is open.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::app::{ActiveDialog, App, Focus};
use super::event::Event;

/// Handle an incoming event
pub fn handle_event(app: &mut App, event: Event) -> Result<()> {
    match event {
        Event::Key(key) => handle_key_event(app, key),
        Event::Tick => {
            app.tick();
            Ok(())
        }
        Event::Resize(_, _) => Ok(()),
    }
}

/// Handle a key event
fn handle_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    // Ctrl-C always quits
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.quit();
        return Ok(());
    }

    if app.has_dialog() {
        return handle_dialog_key(app, key);
    }

    // Keys that work regardless of focus
    match key.code {
        KeyCode::Tab => {
            app.focus_next();
            return Ok(());
        }
        KeyCode::BackTab => {
            app.focus_prev();
            return Ok(());
        }
        KeyCode::F(1) => {
            app.open_dialog(ActiveDialog::Help);
            return Ok(());
        }
        KeyCode::Esc => {
            if app.state.editing_id().is_some() {
                app.cancel_edit();
            } else if app.focus.is_input() {
                app.set_focus(Focus::ExpenseList);
            }
            return Ok(());
        }
        _ => {}
    }

    if app.focus.is_input() {
        handle_input_key(app, key)
    } else {
        handle_list_key(app, key)
    }
}

/// Handle keys while an overlay is open
fn handle_dialog_key(app: &mut App, _key: KeyEvent) -> Result<()> {
    match app.active_dialog {
        // Any key closes help
        ActiveDialog::Help => app.close_dialog(),
        ActiveDialog::None => {}
    }
    Ok(())
}

/// Handle keys while a text field is focused
fn handle_input_key(app: &mut App, key: KeyEvent) -> Result<()> {
    if key.code == KeyCode::Enter {
        match app.focus {
            Focus::Budget => app.submit_budget(),
            Focus::Title | Focus::Amount => app.submit_expense(),
            Focus::ExpenseList => {}
        }
        return Ok(());
    }

    let Some(input) = app.focused_input_mut() else {
        return Ok(());
    };

    match key.code {
        KeyCode::Char(c) => input.insert(c),
        KeyCode::Backspace => input.backspace(),
        KeyCode::Delete => input.delete(),
        KeyCode::Left => input.move_left(),
        KeyCode::Right => input.move_right(),
        KeyCode::Home => input.move_start(),
        KeyCode::End => input.move_end(),
        _ => {}
    }

    Ok(())
}

/// Handle keys while the expense list is focused
fn handle_list_key(app: &mut App, key: KeyEvent) -> Result<()> {
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => app.quit(),
        KeyCode::Char('?') => app.open_dialog(ActiveDialog::Help),

        // Navigation
        KeyCode::Char('j') | KeyCode::Down => app.move_down(),
        KeyCode::Char('k') | KeyCode::Up => app.move_up(),
        KeyCode::Char('g') | KeyCode::Home => app.selected_index = 0,
        KeyCode::Char('G') | KeyCode::End => {
            app.selected_index = app.state.len().saturating_sub(1);
        }

        // Row actions
        KeyCode::Char('e') | KeyCode::Enter => app.edit_selected(),
        KeyCode::Char('d') | KeyCode::Delete => app.delete_selected(),

        // Jump to forms
        KeyCode::Char('b') => app.set_focus(Focus::Budget),
        KeyCode::Char('a') | KeyCode::Char('n') => app.set_focus(Focus::Title),

        _ => {}
    }

    Ok(())
}
