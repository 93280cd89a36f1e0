//! Terminal setup and teardown
//!
//! This module handles initializing and restoring the terminal state,
//! including setting up the panic hook to restore the terminal on crash.

use anyhow::Result;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::panic;

use tracing::info;

use crate::config::Settings;
use crate::error::TrackerError;
use crate::services::BudgetState;

use super::app::App;
use super::event::EventHandler;
use super::handler::handle_event;

/// Type alias for our terminal
pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Initialize the terminal for TUI mode
pub fn init_terminal() -> Result<Tui> {
    // Restore terminal before printing panic info
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = restore_terminal();
        original_hook(panic_info);
    }));

    enable_raw_mode().map_err(terminal_error("Failed to enable raw mode"))?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)
        .map_err(terminal_error("Failed to enter alternate screen"))?;

    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend).map_err(terminal_error("Failed to create terminal"))?;

    Ok(terminal)
}

/// Restore the terminal to its original state
pub fn restore_terminal() -> Result<()> {
    disable_raw_mode().map_err(terminal_error("Failed to disable raw mode"))?;
    execute!(io::stdout(), LeaveAlternateScreen)
        .map_err(terminal_error("Failed to leave alternate screen"))?;
    Ok(())
}

/// Wrap a terminal I/O failure with what was being attempted
fn terminal_error(context: &'static str) -> impl Fn(io::Error) -> TrackerError {
    move |e| TrackerError::Tui(format!("{}: {}", context, e))
}

/// Run the TUI against the given budget state until the user quits
pub fn run_tui(state: &mut BudgetState, settings: &Settings) -> Result<()> {
    let mut terminal = init_terminal()?;
    info!(policy = %state.policy(), "tui session started");

    let result = event_loop(&mut terminal, state, settings);

    // Restore even when the loop failed
    restore_terminal()?;
    info!(expenses = state.len(), "tui session ended");

    result
}

fn event_loop(terminal: &mut Tui, state: &mut BudgetState, settings: &Settings) -> Result<()> {
    let mut app = App::new(state, settings);
    let events = EventHandler::default();

    while !app.should_quit {
        terminal.draw(|frame| {
            super::views::render(frame, &mut app);
        })?;

        let event = events.next()?;
        handle_event(&mut app, event)?;
    }

    Ok(())
}
