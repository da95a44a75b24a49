//! Event handling for the demo host
//!
//! Routes terminal events to the page and the tour engine. The document
//! level mouse stream is forwarded to the engine only while a tour is
//! active; keyboard navigation drives the same transitions the callout
//! controls produce.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

use crate::tour::stage::Click;

use super::app::App;
use super::event::Event;

/// Handle a terminal event
pub fn handle_event(app: &mut App, event: Event) -> Result<()> {
    match event {
        Event::Key(key) => handle_key_event(app, key),
        Event::Mouse(mouse) => handle_mouse_event(app, mouse),
        Event::Tick => {
            app.page.tick();
            Ok(())
        }
        // The next draw picks the new size up from the frame area
        Event::Resize(_, _) => Ok(()),
    }
}

/// Handle a key event
fn handle_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => {
            app.quit();
            return Ok(());
        }
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.quit();
            return Ok(());
        }
        KeyCode::Char('r') => {
            app.restart_tour();
            return Ok(());
        }
        _ => {}
    }

    if app.tour.is_active() {
        handle_tour_key(app, key)
    } else {
        handle_page_key(app, key)
    }
}

/// Keys while a tour is active: navigation mirrors the callout controls
fn handle_tour_key(app: &mut App, key: KeyEvent) -> Result<()> {
    match key.code {
        KeyCode::Right | KeyCode::Char('n') | KeyCode::Enter => {
            app.tour.next(&mut app.page);
            note_if_finished(app);
        }
        KeyCode::Left | KeyCode::Char('b') => {
            app.tour.back(&mut app.page);
        }
        KeyCode::Esc => {
            app.tour.finish();
            note_if_finished(app);
        }
        _ => {}
    }
    Ok(())
}

/// Keys while no tour is active: free page scrolling
fn handle_page_key(app: &mut App, key: KeyEvent) -> Result<()> {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => app.page.scroll_by(0, -1),
        KeyCode::Down | KeyCode::Char('j') => app.page.scroll_by(0, 1),
        KeyCode::Left | KeyCode::Char('h') => app.page.scroll_by(-2, 0),
        KeyCode::Right | KeyCode::Char('l') => app.page.scroll_by(2, 0),
        KeyCode::PageUp => app.page.scroll_by(0, -10),
        KeyCode::PageDown => app.page.scroll_by(0, 10),
        _ => {}
    }
    Ok(())
}

/// Handle a mouse event
fn handle_mouse_event(app: &mut App, mouse: MouseEvent) -> Result<()> {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            let click = Click {
                column: mouse.column,
                row: mouse.row,
                node: app.page.hit_test(mouse.column, mouse.row),
            };
            let viewport = app.page.viewport();
            app.tour.handle_click(&mut app.page, click, viewport);
            note_if_finished(app);
        }
        MouseEventKind::ScrollUp => app.page.scroll_by(0, -2),
        MouseEventKind::ScrollDown => app.page.scroll_by(0, 2),
        _ => {}
    }
    Ok(())
}

fn note_if_finished(app: &mut App) {
    use crate::tour::engine::TourPhase;
    if app.tour.phase() == TourPhase::Finished && app.status_message.is_none() {
        app.set_status("Tour finished - press r to run it again, q to quit");
    }
}
