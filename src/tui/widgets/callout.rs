//! Callout surface
//!
//! The positioned text box shown for each tour step: a title, a body and
//! a back/next control pair plus a dismiss control. Anchored below the
//! highlighted element, or centered on screen for anchorless steps. The
//! anchor is stored in page coordinates so the box follows page scrolling.

use ratatui::{
    layout::{Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::tour::stage::{Bounds, Offset};
use crate::tui::layout::{centered_rect_fixed, wrapped_height};

/// Fixed offset from the anchor point, in cells. The vertical gap is one
/// row larger so the box clears the highlight border drawn around the
/// target.
const ANCHOR_GAP_X: u16 = 1;
const ANCHOR_GAP_Y: u16 = 2;

const MIN_WIDTH: u16 = 28;
const MAX_WIDTH: u16 = 44;

const BACK_LABEL: &str = "[ Back ]";
const NEXT_LABEL: &str = "[ Next ]";
const CLOSE_LABEL: &str = "[x]";

/// Navigation event reported by the callout's controls
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalloutEvent {
    /// The back control was activated
    Back,
    /// The next control was activated
    Next,
    /// The dismiss control was activated
    Dismiss,
}

/// Screen regions the callout currently occupies
#[derive(Debug, Clone, Copy)]
pub(crate) struct CalloutRegions {
    pub area: Rect,
    pub close: Rect,
    pub back: Rect,
    pub next: Rect,
}

/// The callout surface
#[derive(Debug, Clone)]
pub struct Callout {
    title: String,
    body: String,
    back_enabled: bool,
    visible: bool,
    centered: bool,
    /// Anchor point in page coordinates
    anchor: (u16, u16),
    destroyed: bool,
}

impl Callout {
    pub fn new() -> Self {
        Self {
            title: String::new(),
            body: String::new(),
            back_enabled: false,
            visible: false,
            centered: false,
            anchor: (0, 0),
            destroyed: false,
        }
    }

    /// Replace the title text
    ///
    /// Stored verbatim and rendered as raw spans; never interpreted as
    /// markup.
    pub fn set_title(&mut self, text: impl Into<String>) {
        self.title = text.into();
    }

    /// Replace the body text; plain text only, like the title
    pub fn set_body(&mut self, text: impl Into<String>) {
        self.body = text.into();
    }

    /// Toggle the back control's interactivity without hiding it
    pub fn set_back_enabled(&mut self, enabled: bool) {
        self.back_enabled = enabled;
    }

    pub fn back_enabled(&self) -> bool {
        self.back_enabled
    }

    /// Toggle overall visibility
    pub fn set_visible(&mut self, visible: bool) {
        if !self.destroyed {
            self.visible = visible;
        }
    }

    /// Center on screen instead of anchoring to a point
    pub fn set_centered(&mut self, centered: bool) {
        self.centered = centered;
    }

    pub fn is_centered(&self) -> bool {
        self.centered
    }

    /// Anchor below the bottom-left corner of a target rectangle
    ///
    /// The rectangle is viewport-relative; the stored anchor is the page
    /// position `(left + scroll.x, bottom + scroll.y)` plus the fixed gap,
    /// so the box tracks subsequent scrolling.
    pub fn anchor_to(&mut self, bounds: Bounds, scroll: Offset) {
        let x = (bounds.left + scroll.x as i32 + ANCHOR_GAP_X as i32).max(0) as u16;
        let y = (bounds.bottom + scroll.y as i32 + ANCHOR_GAP_Y as i32).max(0) as u16;
        self.anchor = (x, y);
    }

    /// Remove the surface permanently; further calls are no-ops
    pub fn destroy(&mut self) {
        self.visible = false;
        self.destroyed = true;
    }

    /// The rectangle the surface currently occupies on screen, or `None`
    /// while hidden. Computed fresh from the current viewport and scroll.
    pub fn area(&self, viewport: Rect, scroll: Offset) -> Option<Rect> {
        if !self.visible || self.destroyed {
            return None;
        }

        let width = self.box_width(viewport);
        let height = self.box_height(width).min(viewport.height);

        if self.centered {
            return Some(centered_rect_fixed(width, height, viewport));
        }

        let max_x = viewport.x + viewport.width.saturating_sub(width);
        let max_y = viewport.y + viewport.height.saturating_sub(height);
        let x = (viewport.x as i32 + self.anchor.0 as i32 - scroll.x as i32)
            .clamp(viewport.x as i32, max_x as i32) as u16;
        let y = (viewport.y as i32 + self.anchor.1 as i32 - scroll.y as i32)
            .clamp(viewport.y as i32, max_y as i32) as u16;

        Some(Rect::new(x, y, width, height))
    }

    /// Whether a viewport position falls inside the surface
    pub fn contains(&self, column: u16, row: u16, viewport: Rect, scroll: Offset) -> bool {
        self.area(viewport, scroll)
            .is_some_and(|area| area.contains(Position::new(column, row)))
    }

    /// Resolve a click on the surface's controls
    ///
    /// Returns `None` for clicks that land outside the surface, on the
    /// body, or on the disabled back control; use [`Callout::contains`] to
    /// distinguish the first case from the rest.
    pub fn hit(&self, column: u16, row: u16, viewport: Rect, scroll: Offset) -> Option<CalloutEvent> {
        let regions = self.regions(viewport, scroll)?;
        let pos = Position::new(column, row);

        if regions.close.contains(pos) {
            return Some(CalloutEvent::Dismiss);
        }
        if regions.back.contains(pos) && self.back_enabled {
            return Some(CalloutEvent::Back);
        }
        if regions.next.contains(pos) {
            return Some(CalloutEvent::Next);
        }
        None
    }

    /// Draw the surface for the current frame
    pub fn render(&self, frame: &mut Frame, viewport: Rect, scroll: Offset) {
        let Some(regions) = self.regions(viewport, scroll) else {
            return;
        };
        let area = regions.area;

        frame.render_widget(Clear, area);

        let block = Block::default()
            .title(format!(" {} ", self.title))
            .title_style(
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Yellow));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        // Dismiss control over the top border, matching the hit region
        frame.render_widget(
            Paragraph::new(Span::styled(
                CLOSE_LABEL,
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            )),
            regions.close,
        );

        let body_area = Rect::new(
            inner.x + 1,
            inner.y,
            inner.width.saturating_sub(2),
            inner.height.saturating_sub(2),
        );
        frame.render_widget(
            Paragraph::new(Span::raw(self.body.as_str())).wrap(Wrap { trim: true }),
            body_area,
        );

        let back_style = if self.back_enabled {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(BACK_LABEL, back_style))),
            regions.back,
        );
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                NEXT_LABEL,
                Style::default().fg(Color::Green),
            ))),
            regions.next,
        );
    }

    /// Screen regions for the frame and each control, or `None` while hidden
    pub(crate) fn regions(&self, viewport: Rect, scroll: Offset) -> Option<CalloutRegions> {
        let area = self.area(viewport, scroll)?;

        let close_width = CLOSE_LABEL.len() as u16;
        let close = Rect::new(
            area.right().saturating_sub(close_width + 2),
            area.y,
            close_width.min(area.width),
            1,
        );

        let footer_y = area.bottom().saturating_sub(2);
        let back_width = BACK_LABEL.len() as u16;
        let next_width = NEXT_LABEL.len() as u16;
        let back = Rect::new(area.x + 2, footer_y, back_width.min(area.width), 1);
        let next = Rect::new(
            area.right().saturating_sub(next_width + 2),
            footer_y,
            next_width.min(area.width),
            1,
        );

        Some(CalloutRegions {
            area,
            close,
            back,
            next,
        })
    }

    fn box_width(&self, viewport: Rect) -> u16 {
        let longest_body = self
            .body
            .lines()
            .map(|line| line.chars().count())
            .max()
            .unwrap_or(0);
        let longest = self.title.chars().count().max(longest_body) as u16;
        longest
            .saturating_add(4)
            .clamp(MIN_WIDTH, MAX_WIDTH)
            .min(viewport.width)
    }

    fn box_height(&self, width: u16) -> u16 {
        // top border + body + blank + footer + bottom border
        wrapped_height(&self.body, width.saturating_sub(4)) as u16 + 4
    }
}

impl Default for Callout {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn viewport() -> Rect {
        Rect::new(0, 0, 80, 24)
    }

    fn visible_callout() -> Callout {
        let mut callout = Callout::new();
        callout.set_visible(true);
        callout
    }

    #[test]
    fn test_hidden_until_set_visible() {
        let callout = Callout::new();
        assert!(callout.area(viewport(), Offset::default()).is_none());
        assert!(!callout.contains(40, 12, viewport(), Offset::default()));
    }

    #[test]
    fn test_text_is_stored_verbatim() {
        let mut callout = visible_callout();
        callout.set_title("<b>bold?</b>");
        callout.set_body("a & b <i>c</i>");
        assert_eq!(callout.title, "<b>bold?</b>");
        assert_eq!(callout.body, "a & b <i>c</i>");
    }

    #[test]
    fn test_anchor_is_stored_in_page_coordinates() {
        let mut callout = visible_callout();
        callout.anchor_to(Bounds::new(10, 5, 20, 4), Offset::new(3, 7));
        // left 10 + scroll 3 + gap 1, bottom 9 + scroll 7 + gap 2
        assert_eq!(callout.anchor, (14, 18));
    }

    #[test]
    fn test_anchored_area_tracks_scroll() {
        let mut callout = visible_callout();
        callout.anchor_to(Bounds::new(10, 5, 20, 4), Offset::default());

        let before = callout.area(viewport(), Offset::default()).unwrap();
        let after = callout.area(viewport(), Offset::new(0, 3)).unwrap();
        assert_eq!(before.x, after.x);
        assert_eq!(before.y, after.y + 3);
    }

    #[test]
    fn test_anchored_area_clamps_into_viewport() {
        let mut callout = visible_callout();
        callout.anchor_to(Bounds::new(200, 100, 5, 2), Offset::default());

        let area = callout.area(viewport(), Offset::default()).unwrap();
        assert!(area.right() <= viewport().right());
        assert!(area.bottom() <= viewport().bottom());
    }

    #[test]
    fn test_centered_area_ignores_anchor() {
        let mut callout = visible_callout();
        callout.anchor_to(Bounds::new(2, 2, 5, 2), Offset::default());
        callout.set_centered(true);

        let area = callout.area(viewport(), Offset::default()).unwrap();
        let expected = centered_rect_fixed(area.width, area.height, viewport());
        assert_eq!(area, expected);
    }

    #[test]
    fn test_hit_regions() {
        let mut callout = visible_callout();
        callout.set_centered(true);
        callout.set_back_enabled(true);

        let regions = callout.regions(viewport(), Offset::default()).unwrap();
        assert_eq!(
            callout.hit(regions.close.x, regions.close.y, viewport(), Offset::default()),
            Some(CalloutEvent::Dismiss)
        );
        assert_eq!(
            callout.hit(regions.back.x, regions.back.y, viewport(), Offset::default()),
            Some(CalloutEvent::Back)
        );
        assert_eq!(
            callout.hit(regions.next.x, regions.next.y, viewport(), Offset::default()),
            Some(CalloutEvent::Next)
        );
        // body click: inside the surface but no event
        assert_eq!(
            callout.hit(regions.area.x + 1, regions.area.y + 1, viewport(), Offset::default()),
            None
        );
        assert!(callout.contains(regions.area.x + 1, regions.area.y + 1, viewport(), Offset::default()));
    }

    #[test]
    fn test_disabled_back_control_emits_no_event() {
        let mut callout = visible_callout();
        callout.set_centered(true);
        callout.set_back_enabled(false);

        let regions = callout.regions(viewport(), Offset::default()).unwrap();
        assert_eq!(
            callout.hit(regions.back.x, regions.back.y, viewport(), Offset::default()),
            None
        );
        // still inside the surface, so the click must not dismiss the tour
        assert!(callout.contains(regions.back.x, regions.back.y, viewport(), Offset::default()));
    }

    #[test]
    fn test_destroy_is_idempotent() {
        let mut callout = visible_callout();
        callout.destroy();
        callout.destroy();
        callout.set_visible(true);
        assert!(callout.area(viewport(), Offset::default()).is_none());
    }
}
