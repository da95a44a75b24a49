//! Layout helpers for overlay placement
//!
//! Conversions between page and screen coordinates, plus the sizing
//! helpers used to place the callout box.

use ratatui::layout::Rect;

use crate::tour::stage::Offset;

/// Create a fixed-size centered rect for dialogs
pub fn centered_rect_fixed(width: u16, height: u16, r: Rect) -> Rect {
    let x = r.x + (r.width.saturating_sub(width)) / 2;
    let y = r.y + (r.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(r.width), height.min(r.height))
}

/// Translate a page-space rectangle to screen coordinates under a scroll
/// offset, clipping at the screen origin
///
/// Returns `None` when the rectangle lies entirely above or left of the
/// visible origin. Callers still need to intersect the result with their
/// viewport to clip the far edges.
pub fn page_to_screen(rect: Rect, scroll: Offset) -> Option<Rect> {
    let left = rect.x as i32 - scroll.x as i32;
    let top = rect.y as i32 - scroll.y as i32;
    let right = left + rect.width as i32;
    let bottom = top + rect.height as i32;

    let clipped_left = left.max(0);
    let clipped_top = top.max(0);
    if right <= clipped_left || bottom <= clipped_top {
        return None;
    }

    Some(Rect::new(
        clipped_left as u16,
        clipped_top as u16,
        (right - clipped_left) as u16,
        (bottom - clipped_top) as u16,
    ))
}

/// Grow a page-space rectangle by `by` cells on every side, clamping at
/// the page origin
pub fn inflate(rect: Rect, by: u16) -> Rect {
    let x = rect.x.saturating_sub(by);
    let y = rect.y.saturating_sub(by);
    let width = rect.width + by + (rect.x - x);
    let height = rect.height + by + (rect.y - y);
    Rect::new(x, y, width, height)
}

/// Number of lines `text` occupies when greedily word-wrapped to `width`
///
/// An estimate matching ratatui's trimming word wrap closely enough to
/// size the callout box; words longer than the width spill onto extra
/// lines.
pub fn wrapped_height(text: &str, width: u16) -> usize {
    if width == 0 {
        return 0;
    }
    if text.is_empty() {
        return 1;
    }

    let width = width as usize;
    let mut total = 0;

    for raw_line in text.lines() {
        if raw_line.split_whitespace().next().is_none() {
            total += 1;
            continue;
        }

        let mut lines = 1;
        let mut used = 0;
        for word in raw_line.split_whitespace() {
            let len = word.chars().count();
            if used == 0 {
                used = len.min(width);
                lines += len.saturating_sub(1) / width;
            } else if used + 1 + len <= width {
                used += 1 + len;
            } else {
                lines += 1 + len.saturating_sub(1) / width;
                used = len.min(width);
            }
        }
        total += lines;
    }

    total
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_rect_fixed() {
        let area = Rect::new(0, 0, 80, 24);
        let rect = centered_rect_fixed(40, 10, area);
        assert_eq!(rect, Rect::new(20, 7, 40, 10));
    }

    #[test]
    fn test_centered_rect_fixed_clamps_to_parent() {
        let area = Rect::new(0, 0, 20, 6);
        let rect = centered_rect_fixed(40, 10, area);
        assert_eq!(rect.width, 20);
        assert_eq!(rect.height, 6);
    }

    #[test]
    fn test_page_to_screen_translates() {
        let rect = Rect::new(30, 40, 10, 5);
        let screen = page_to_screen(rect, Offset::new(20, 35)).unwrap();
        assert_eq!(screen, Rect::new(10, 5, 10, 5));
    }

    #[test]
    fn test_page_to_screen_clips_at_origin() {
        let rect = Rect::new(5, 5, 10, 4);
        let screen = page_to_screen(rect, Offset::new(8, 6)).unwrap();
        assert_eq!(screen, Rect::new(0, 0, 7, 3));
    }

    #[test]
    fn test_page_to_screen_none_when_fully_past() {
        let rect = Rect::new(5, 5, 10, 4);
        assert_eq!(page_to_screen(rect, Offset::new(40, 40)), None);
    }

    #[test]
    fn test_inflate_clamps_at_origin() {
        assert_eq!(inflate(Rect::new(3, 3, 4, 2), 1), Rect::new(2, 2, 6, 4));
        assert_eq!(inflate(Rect::new(0, 0, 4, 2), 1), Rect::new(0, 0, 5, 3));
    }

    #[test]
    fn test_wrapped_height() {
        assert_eq!(wrapped_height("", 20), 1);
        assert_eq!(wrapped_height("short", 20), 1);
        assert_eq!(wrapped_height("alpha beta gamma delta", 10), 3);
        assert_eq!(wrapped_height("one\ntwo", 20), 2);
    }
}
