//! The demo page hosting the tour
//!
//! A virtual dashboard laid out on a page larger than the terminal: a
//! tree of named regions with page-space rectangles and parent links.
//! This is the UI-tree abstraction the engine's [`Stage`] seam expects:
//! it answers hit tests with the deepest node under the pointer,
//! containment by walking parent links, and "scroll into view" with a
//! clamped glide animation advanced once per tick.

use ratatui::layout::{Position, Rect};

use crate::tour::stage::{Bounds, Offset, Stage, TargetId};

/// Virtual page dimensions, in cells
pub const PAGE_WIDTH: u16 = 110;
pub const PAGE_HEIGHT: u16 = 62;

/// One named region of the page
#[derive(Debug, Clone)]
pub struct Node {
    /// Stable name deck files reference targets by
    pub name: &'static str,
    /// Title drawn on the region's border
    pub title: &'static str,
    /// Position in page coordinates
    pub rect: Rect,
    pub parent: Option<TargetId>,
}

/// The scrollable demo page
pub struct Page {
    nodes: Vec<Node>,
    scroll: Offset,
    /// Glide destination while a scroll animation is in flight
    glide: Option<Offset>,
    viewport: Rect,
    scroll_cells_per_tick: u16,
}

impl Page {
    /// Build the demo dashboard
    pub fn dashboard(scroll_cells_per_tick: u16) -> Self {
        let mut page = Self {
            nodes: Vec::new(),
            scroll: Offset::default(),
            glide: None,
            viewport: Rect::new(0, 0, 80, 24),
            scroll_cells_per_tick,
        };

        let header = page.add("header", "Acme Dashboard", Rect::new(0, 0, PAGE_WIDTH, 4), None);
        page.add("search", "Search", Rect::new(78, 1, 30, 2), Some(header));

        let sidebar = page.add("sidebar", "Navigation", Rect::new(0, 5, 24, 22), None);
        page.add("nav-overview", "Overview", Rect::new(2, 7, 20, 3), Some(sidebar));
        page.add("nav-reports", "Reports", Rect::new(2, 11, 20, 3), Some(sidebar));
        page.add("nav-alerts", "Alerts", Rect::new(2, 15, 20, 3), Some(sidebar));
        page.add("nav-settings", "Settings", Rect::new(2, 19, 20, 3), Some(sidebar));

        let stats = page.add("stats", "This Month", Rect::new(26, 5, 84, 10), None);
        page.add("stat-active", "Active Users", Rect::new(28, 7, 25, 6), Some(stats));
        page.add("stat-errors", "Error Rate", Rect::new(55, 7, 25, 6), Some(stats));
        page.add("stat-uptime", "Uptime", Rect::new(82, 7, 25, 6), Some(stats));

        page.add("activity", "Recent Activity", Rect::new(26, 16, 84, 18), None);
        page.add("chart", "Weekly Trend", Rect::new(0, 35, 110, 18), None);
        page.add("footer", "About", Rect::new(0, 54, 110, 4), None);

        page
    }

    fn add(
        &mut self,
        name: &'static str,
        title: &'static str,
        rect: Rect,
        parent: Option<TargetId>,
    ) -> TargetId {
        let id = TargetId::new(self.nodes.len() as u32);
        self.nodes.push(Node {
            name,
            title,
            rect,
            parent,
        });
        id
    }

    /// Look a region up by its deck-facing name
    pub fn find(&self, name: &str) -> Option<TargetId> {
        self.nodes
            .iter()
            .position(|node| node.name == name)
            .map(|index| TargetId::new(index as u32))
    }

    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.iter()
    }

    fn node(&self, id: TargetId) -> Option<&Node> {
        self.nodes.get(id.raw() as usize)
    }

    pub fn viewport(&self) -> Rect {
        self.viewport
    }

    /// Record the area the page is drawn into and re-clamp the scroll
    pub fn set_viewport(&mut self, area: Rect) {
        self.viewport = area;
        self.scroll = self.clamped(self.scroll.x as i32, self.scroll.y as i32);
    }

    /// Manual scroll; cancels any glide in flight
    pub fn scroll_by(&mut self, dx: i32, dy: i32) {
        self.glide = None;
        self.scroll = self.clamped(self.scroll.x as i32 + dx, self.scroll.y as i32 + dy);
    }

    /// The deepest node under a viewport position, if any
    pub fn hit_test(&self, column: u16, row: u16) -> Option<TargetId> {
        if !self.viewport.contains(Position::new(column, row)) {
            return None;
        }
        let px = (column - self.viewport.x) as i32 + self.scroll.x as i32;
        let py = (row - self.viewport.y) as i32 + self.scroll.y as i32;

        let mut best: Option<(TargetId, usize)> = None;
        for (index, node) in self.nodes.iter().enumerate() {
            let r = node.rect;
            let inside = px >= r.x as i32
                && px < r.x as i32 + r.width as i32
                && py >= r.y as i32
                && py < r.y as i32 + r.height as i32;
            if !inside {
                continue;
            }
            let id = TargetId::new(index as u32);
            let depth = self.depth(id);
            if best.map_or(true, |(_, best_depth)| depth >= best_depth) {
                best = Some((id, depth));
            }
        }
        best.map(|(id, _)| id)
    }

    /// Advance the glide animation one step
    pub fn tick(&mut self) {
        let Some(dest) = self.glide else {
            return;
        };
        let step = self.scroll_cells_per_tick.max(1);
        self.scroll.x = approach(self.scroll.x, dest.x, step);
        self.scroll.y = approach(self.scroll.y, dest.y, step);
        if self.scroll == dest {
            self.glide = None;
        }
    }

    /// Whether a glide animation is still in flight
    pub fn is_gliding(&self) -> bool {
        self.glide.is_some()
    }

    fn depth(&self, id: TargetId) -> usize {
        let mut depth = 0;
        let mut cur = self.node(id).and_then(|node| node.parent);
        while let Some(parent) = cur {
            depth += 1;
            cur = self.node(parent).and_then(|node| node.parent);
        }
        depth
    }

    fn clamped(&self, x: i32, y: i32) -> Offset {
        let max_x = (PAGE_WIDTH as i32 - self.viewport.width as i32).max(0);
        let max_y = (PAGE_HEIGHT as i32 - self.viewport.height as i32).max(0);
        Offset::new(x.clamp(0, max_x) as u16, y.clamp(0, max_y) as u16)
    }
}

fn approach(current: u16, dest: u16, step: u16) -> u16 {
    if current < dest {
        current.saturating_add(step).min(dest)
    } else {
        current.saturating_sub(step).max(dest)
    }
}

impl Stage for Page {
    fn scroll_offset(&self) -> Offset {
        self.scroll
    }

    fn target_bounds(&self, id: TargetId) -> Option<Bounds> {
        self.node(id)
            .map(|node| Bounds::from_page_rect(node.rect, self.scroll))
    }

    fn scroll_into_view(&mut self, id: TargetId) {
        let Some(node) = self.node(id) else {
            return;
        };
        let center_x = node.rect.x as i32 + node.rect.width as i32 / 2;
        let center_y = node.rect.y as i32 + node.rect.height as i32 / 2;
        let dest = self.clamped(
            center_x - self.viewport.width as i32 / 2,
            center_y - self.viewport.height as i32 / 2,
        );
        if dest == self.scroll {
            return;
        }
        self.glide = Some(dest);
    }

    fn is_within(&self, node: TargetId, ancestor: TargetId) -> bool {
        let mut cur = Some(node);
        while let Some(id) = cur {
            if id == ancestor {
                return true;
            }
            cur = self.node(id).and_then(|n| n.parent);
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page() -> Page {
        let mut page = Page::dashboard(3);
        page.set_viewport(Rect::new(0, 0, 80, 23));
        page
    }

    #[test]
    fn test_find_by_name() {
        let page = page();
        assert!(page.find("sidebar").is_some());
        assert!(page.find("chart").is_some());
        assert_eq!(page.find("no-such-region"), None);
    }

    #[test]
    fn test_hit_test_prefers_deepest_node() {
        let page = page();
        let sidebar = page.find("sidebar").unwrap();
        let reports = page.find("nav-reports").unwrap();

        // inside the nav item, which is nested in the sidebar
        assert_eq!(page.hit_test(10, 12), Some(reports));
        // inside the sidebar but outside every nav item
        assert_eq!(page.hit_test(1, 6), Some(sidebar));
        // outside the viewport entirely
        assert_eq!(page.hit_test(10, 40), None);
    }

    #[test]
    fn test_hit_test_accounts_for_scroll() {
        let mut page = page();
        let chart = page.find("chart").unwrap();
        assert_ne!(page.hit_test(10, 12), Some(chart));

        page.scroll_by(0, 30);
        // chart spans page rows 35..53; at scroll 30 its screen rows are 5..23
        assert_eq!(page.hit_test(10, 12), Some(chart));
    }

    #[test]
    fn test_is_within_walks_ancestor_chain() {
        let page = page();
        let sidebar = page.find("sidebar").unwrap();
        let reports = page.find("nav-reports").unwrap();
        let stats = page.find("stats").unwrap();

        assert!(page.is_within(reports, sidebar));
        assert!(page.is_within(sidebar, sidebar));
        assert!(!page.is_within(sidebar, reports));
        assert!(!page.is_within(reports, stats));
    }

    #[test]
    fn test_target_bounds_follow_scroll() {
        let mut page = page();
        let sidebar = page.find("sidebar").unwrap();

        let before = page.target_bounds(sidebar).unwrap();
        assert_eq!((before.left, before.top), (0, 5));

        page.scroll_by(0, 10);
        let after = page.target_bounds(sidebar).unwrap();
        assert_eq!((after.left, after.top), (0, -5));
    }

    #[test]
    fn test_scroll_by_clamps_to_page() {
        let mut page = page();
        page.scroll_by(-10, -10);
        assert_eq!(page.scroll_offset(), Offset::default());

        page.scroll_by(1000, 1000);
        let max = page.scroll_offset();
        assert_eq!(max.x, PAGE_WIDTH - 80);
        assert_eq!(max.y, PAGE_HEIGHT - 23);
    }

    #[test]
    fn test_glide_converges_on_destination() {
        let mut page = page();
        let chart = page.find("chart").unwrap();
        page.scroll_into_view(chart);
        assert!(page.is_gliding());

        let mut guard = 0;
        while page.is_gliding() {
            page.tick();
            guard += 1;
            assert!(guard < 100, "glide never converged");
        }

        // chart center row 44 lands mid-viewport: scroll y = 44 - 11 = 33
        assert_eq!(page.scroll_offset().y, 33);
    }

    #[test]
    fn test_manual_scroll_cancels_glide() {
        let mut page = page();
        let chart = page.find("chart").unwrap();
        page.scroll_into_view(chart);
        assert!(page.is_gliding());

        page.scroll_by(0, 1);
        assert!(!page.is_gliding());
    }

    #[test]
    fn test_already_centered_target_requests_no_glide() {
        let mut page = page();
        // nav-overview's clamped centering destination is the origin, which
        // is where the scroll already sits
        let overview = page.find("nav-overview").unwrap();
        page.scroll_into_view(overview);
        assert!(!page.is_gliding());
    }
}
