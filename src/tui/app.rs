//! Application state for the demo host
//!
//! The App struct holds the page, the tour engine and the transient UI
//! state needed for rendering and event handling.

use crate::tour::engine::Tour;
use crate::tour::step::Step;

use super::page::Page;

/// Main application state
pub struct App {
    /// The scrollable demo page; implements the engine's stage seam
    pub page: Page,

    /// The tour engine for the current run
    pub tour: Tour,

    /// The resolved steps, kept so a finished tour can be restarted with
    /// a fresh engine
    steps: Vec<Step>,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: Option<String>,
}

impl App {
    /// Create a new App instance over a page and a resolved step sequence
    pub fn new(page: Page, steps: Vec<Step>) -> Self {
        Self {
            page,
            tour: Tour::new(steps.clone()),
            steps,
            should_quit: false,
            status_message: None,
        }
    }

    /// Request to quit the application
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Set a status message
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// Clear the status message
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    /// Start the current tour engine
    pub fn start_tour(&mut self) {
        self.tour.start(&mut self.page);
    }

    /// Replace a finished tour with a fresh engine and start it
    ///
    /// The engine's lifecycle is one-directional, so restarting means
    /// constructing a new one over the same steps.
    pub fn restart_tour(&mut self) {
        self.tour.finish();
        self.tour = Tour::new(self.steps.clone());
        self.tour.start(&mut self.page);
        self.clear_status();
    }
}

/// The built-in demo deck shown when no deck file is supplied
pub fn builtin_steps(page: &Page) -> Vec<Step> {
    let step = |title: &str, body: &str, name: Option<&str>| {
        let mut step = Step::new(title, body);
        step.target = name.and_then(|n| page.find(n));
        step
    };

    vec![
        step(
            "Welcome",
            "This short tour points out the main areas of the dashboard. \
             Use Next and Back to move around, or click anywhere outside \
             the highlighted region to leave the tour.",
            None,
        ),
        step(
            "Navigation",
            "Switch between the dashboard's views from the sidebar.",
            Some("sidebar"),
        ),
        step(
            "Reports",
            "The reports view lives one click away. Items inside a \
             highlighted region stay clickable during the tour.",
            Some("nav-reports"),
        ),
        step(
            "Live stats",
            "The headline numbers for the current month update as new \
             data arrives.",
            Some("stats"),
        ),
        step(
            "Recent activity",
            "Every change shows up here first.",
            Some("activity"),
        ),
        step(
            "Weekly trend",
            "The trend chart sits further down the page; the view scrolls \
             it into the center on its own.",
            Some("chart"),
        ),
        step(
            "That's it",
            "You're all set. Press r any time to take the tour again.",
            None,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tour::engine::TourPhase;
    use ratatui::layout::Rect;

    fn app() -> App {
        let mut page = Page::dashboard(3);
        page.set_viewport(Rect::new(0, 0, 80, 23));
        let steps = builtin_steps(&page);
        App::new(page, steps)
    }

    #[test]
    fn test_builtin_steps_resolve_against_dashboard() {
        let page = Page::dashboard(3);
        let steps = builtin_steps(&page);

        assert!(steps.len() >= 3);
        assert_eq!(steps.first().unwrap().target, None);
        assert_eq!(steps.last().unwrap().target, None);
        assert!(steps.iter().any(|step| step.target.is_some()));
    }

    #[test]
    fn test_restart_builds_a_fresh_engine() {
        let mut app = app();
        app.start_tour();
        app.tour.finish();
        assert_eq!(app.tour.phase(), TourPhase::Finished);

        app.restart_tour();
        assert_eq!(app.tour.phase(), TourPhase::Active(0));
    }
}
