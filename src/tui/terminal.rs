//! Terminal setup and teardown
//!
//! Raw mode and the alternate screen are restored on normal exit, on error
//! and from the panic hook.

use anyhow::Result;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::panic;
use std::path::Path;
use tracing::info;

use crate::config::Settings;
use crate::storage::RecordStore;

use super::app::App;
use super::event::EventHandler;
use super::handler::handle_event;

/// Type alias for our terminal
pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Initialize the terminal for TUI mode
pub fn init_terminal() -> Result<Tui> {
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = restore_terminal();
        original_hook(panic_info);
    }));

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;

    Ok(terminal)
}

/// Restore the terminal to its original state
pub fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)?;
    Ok(())
}

/// Run the form interface until the user quits
pub fn run_tui(store: &dyn RecordStore, settings: &Settings, source: &Path) -> Result<()> {
    let mut app = App::new(store, settings).with_source(source.display().to_string());
    app.refresh_expenses();

    let mut terminal = init_terminal()?;
    info!("form interface started");

    let result = event_loop(&mut terminal, &mut app);
    restore_terminal()?;

    info!("form interface closed");
    result
}

fn event_loop(terminal: &mut Tui, app: &mut App) -> Result<()> {
    let events = EventHandler::default();

    while !app.should_quit {
        terminal.draw(|frame| super::views::render(frame, app))?;
        handle_event(app, events.next()?)?;
    }

    Ok(())
}
