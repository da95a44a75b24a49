//! Terminal setup and teardown
//!
//! Handles initializing and restoring the terminal state, including the
//! panic hook that restores the terminal on crash, and runs the demo
//! host's event loop.

use std::io::{self, Stdout};
use std::panic;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use crate::config::settings::Settings;
use crate::tour::step::{Deck, Step};

use super::app::{builtin_steps, App};
use super::event::EventHandler;
use super::handler::handle_event;
use super::page::Page;

/// Type alias for our terminal
pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Initialize the terminal for TUI mode
pub fn init_terminal(mouse_capture: bool) -> Result<Tui> {
    // Restore the terminal before printing panic info
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = restore_terminal_impl(mouse_capture);
        original_hook(panic_info);
    }));

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    if mouse_capture {
        execute!(stdout, EnableMouseCapture)?;
    }

    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;

    Ok(terminal)
}

/// Restore the terminal to its original state
pub fn restore_terminal(mouse_capture: bool) -> Result<()> {
    restore_terminal_impl(mouse_capture)?;
    Ok(())
}

fn restore_terminal_impl(mouse_capture: bool) -> Result<()> {
    disable_raw_mode()?;
    if mouse_capture {
        execute!(io::stdout(), DisableMouseCapture)?;
    }
    execute!(io::stdout(), LeaveAlternateScreen)?;
    Ok(())
}

/// Run the demo host
///
/// Builds the dashboard page, resolves the step deck (a file if one was
/// supplied, the built-in deck otherwise), starts the tour and runs the
/// event loop until the user quits.
pub fn run_tui(settings: &Settings, deck_path: Option<PathBuf>) -> Result<()> {
    let page = Page::dashboard(settings.scroll_cells_per_tick);

    let steps: Vec<Step> = match deck_path {
        Some(path) => {
            let deck = Deck::load(&path)?;
            deck.resolve(|name| page.find(name))
        }
        None => builtin_steps(&page),
    };

    let mut terminal = init_terminal(settings.mouse_capture)?;

    let mut app = App::new(page, steps);
    app.start_tour();

    let events = EventHandler::new(Duration::from_millis(settings.tick_rate_ms));

    loop {
        terminal.draw(|frame| {
            super::views::render(frame, &mut app);
        })?;

        let event = events.next()?;
        handle_event(&mut app, event)?;

        if app.should_quit {
            break;
        }
    }

    restore_terminal(settings.mouse_capture)?;

    Ok(())
}
