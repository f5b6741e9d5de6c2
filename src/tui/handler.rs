//! Event handler for the TUI
//!
//! Routes keyboard events to the active dialog or to the table keys.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};

use super::app::{ActiveDialog, App};
use super::dialogs;
use super::event::Event;

/// Handle an incoming event
pub fn handle_event(app: &mut App, event: Event) -> Result<()> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => handle_key_event(app, key),
        Event::Key(_) | Event::Mouse(_) | Event::Resize(_, _) => Ok(()),
        Event::Tick => {
            app.on_tick();
            Ok(())
        }
    }
}

fn handle_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    match app.active_dialog {
        ActiveDialog::AddExpense => {
            dialogs::expense::handle_key(app, key);
        }
        // Any key dismisses the read-only popups
        ActiveDialog::Summary | ActiveDialog::Help => app.close_dialog(),
        ActiveDialog::None => handle_normal_key(app, key),
    }
    Ok(())
}

/// Handle keys when no dialog is open
fn handle_normal_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => app.quit(),
        KeyCode::Char('?') => app.open_dialog(ActiveDialog::Help),
        KeyCode::Char('a') | KeyCode::Char('n') => app.open_add_form(),
        KeyCode::Char('v') | KeyCode::Char('r') => app.reload(),
        KeyCode::Char('s') => app.open_summary(),
        KeyCode::Char('j') | KeyCode::Down => app.move_down(),
        KeyCode::Char('k') | KeyCode::Up => app.move_up(),
        KeyCode::Char('g') | KeyCode::Home => app.select_first(),
        KeyCode::Char('G') | KeyCode::End => app.select_last(),
        _ => {}
    }
}
