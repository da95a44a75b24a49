//! Highlight-region surface
//!
//! A border ring drawn around the current step's target element. The ring
//! sits one cell outside the target rectangle so the target's content
//! stays visible inside it. Zero-size bounds are the canonical "no
//! target" value and put the surface in a distinct hidden state instead
//! of drawing a zero-size box.

use ratatui::{
    layout::{Position, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders},
    Frame,
};

use crate::tour::stage::{Bounds, Offset};
use crate::tui::layout::{inflate, page_to_screen};

/// The highlight-region surface
#[derive(Debug, Clone)]
pub struct Highlight {
    /// Target rectangle in page coordinates
    rect: Option<Rect>,
    hidden: bool,
    destroyed: bool,
}

impl Highlight {
    pub fn new() -> Self {
        Self {
            rect: None,
            hidden: true,
            destroyed: false,
        }
    }

    /// Position the overlay at a viewport-relative rectangle
    ///
    /// The rectangle is translated into page coordinates by the current
    /// scroll so the ring follows subsequent scrolling. Zero-size bounds
    /// hide the overlay.
    pub fn show(&mut self, bounds: Bounds, scroll: Offset) {
        if self.destroyed {
            return;
        }
        if bounds.is_zero() {
            self.rect = None;
            self.hidden = true;
            return;
        }

        let x = (bounds.left + scroll.x as i32).max(0) as u16;
        let y = (bounds.top + scroll.y as i32).max(0) as u16;
        self.rect = Some(Rect::new(
            x,
            y,
            bounds.width().max(0) as u16,
            bounds.height().max(0) as u16,
        ));
        self.hidden = false;
    }

    /// Explicit hide, independent of positioning
    pub fn hide(&mut self) {
        self.hidden = true;
    }

    /// Remove the overlay permanently; further calls are no-ops
    pub fn destroy(&mut self) {
        self.rect = None;
        self.hidden = true;
        self.destroyed = true;
    }

    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    /// Whether a viewport position falls inside the ring
    pub fn contains(&self, column: u16, row: u16, scroll: Offset) -> bool {
        self.ring(scroll)
            .is_some_and(|ring| ring.contains(Position::new(column, row)))
    }

    /// Draw the ring for the current frame, clipped to the viewport
    pub fn render(&self, frame: &mut Frame, viewport: Rect, scroll: Offset) {
        let Some(ring) = self.ring(scroll) else {
            return;
        };
        let visible = ring.intersection(viewport);
        if visible.is_empty() {
            return;
        }

        frame.render_widget(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)),
            visible,
        );
    }

    /// The ring's screen rectangle under the current scroll, or `None`
    /// while hidden
    fn ring(&self, scroll: Offset) -> Option<Rect> {
        if self.hidden || self.destroyed {
            return None;
        }
        let rect = self.rect?;
        page_to_screen(inflate(rect, 1), scroll)
    }
}

impl Default for Highlight {
    fn default() -> Self {
        Self::new()
    }
}
