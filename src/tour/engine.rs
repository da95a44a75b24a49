//! The tour engine
//!
//! Owns the ordered step sequence, the lifecycle phase and both overlay
//! surfaces, and drives them from navigation events and classified
//! clicks. All state changes happen synchronously inside a single event
//! handler invocation; the only asynchronous collaborator is the host's
//! glide scroll, which is fire-and-forget.

use ratatui::{layout::Rect, Frame};

use super::click::{classify, Verdict};
use super::stage::{Bounds, Click, Stage};
use super::step::Step;
use crate::tui::widgets::{Callout, CalloutEvent, Highlight};

/// Lifecycle phase of a tour
///
/// One-directional per engine instance: `Idle` to `Active` to `Finished`.
/// Restarting means constructing a new engine over the same steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TourPhase {
    /// Constructed but not started
    Idle,
    /// Showing the step at this index
    Active(usize),
    /// Terminal; the engine is inert afterward
    Finished,
}

/// The guided-tour engine
pub struct Tour {
    steps: Vec<Step>,
    phase: TourPhase,
    callout: Option<Callout>,
    highlight: Option<Highlight>,
}

impl Tour {
    /// Create an engine over an ordered sequence of steps
    ///
    /// The sequence is supplied once and never mutated afterward.
    pub fn new(steps: Vec<Step>) -> Self {
        Self {
            steps,
            phase: TourPhase::Idle,
            callout: None,
            highlight: None,
        }
    }

    pub fn phase(&self) -> TourPhase {
        self.phase
    }

    /// Whether the tour is currently showing a step
    pub fn is_active(&self) -> bool {
        matches!(self.phase, TourPhase::Active(_))
    }

    /// Begin the tour at step 0
    ///
    /// Creates both surfaces and renders the first step. A second call is
    /// a no-op, as is starting after `finish()`. A tour with no steps
    /// completes immediately without creating surfaces.
    pub fn start(&mut self, stage: &mut impl Stage) {
        if self.phase != TourPhase::Idle {
            return;
        }
        if self.steps.is_empty() {
            self.phase = TourPhase::Finished;
            return;
        }

        self.callout = Some(Callout::new());
        self.highlight = Some(Highlight::new());
        self.phase = TourPhase::Active(0);
        self.show_current_step(stage);
    }

    /// End the tour and tear both surfaces down
    ///
    /// Idempotent, and safe to call at any time: before `start()` it is a
    /// no-op that leaves the engine finished, and repeated calls perform
    /// no duplicate teardown. Once this returns, no event can re-enter
    /// the render path.
    pub fn finish(&mut self) {
        if self.phase == TourPhase::Finished {
            return;
        }
        self.phase = TourPhase::Finished;
        if let Some(mut callout) = self.callout.take() {
            callout.destroy();
        }
        if let Some(mut highlight) = self.highlight.take() {
            highlight.destroy();
        }
    }

    /// Step back once
    ///
    /// No-op at the first step; the back control is disabled there and
    /// this guard is the backstop behind it.
    pub fn back(&mut self, stage: &mut impl Stage) {
        if let TourPhase::Active(index) = self.phase {
            if index > 0 {
                self.phase = TourPhase::Active(index - 1);
                self.show_current_step(stage);
            }
        }
    }

    /// Advance once; past the last step the tour finishes
    pub fn next(&mut self, stage: &mut impl Stage) {
        if let TourPhase::Active(index) = self.phase {
            if index + 1 >= self.steps.len() {
                self.finish();
            } else {
                self.phase = TourPhase::Active(index + 1);
                self.show_current_step(stage);
            }
        }
    }

    /// Route one document-level click
    ///
    /// Consumed only while active. The callout's own controls take
    /// priority; every other click is classified against the current
    /// step's target and the two surfaces, and a qualifying click ends
    /// the tour.
    pub fn handle_click(&mut self, stage: &mut impl Stage, click: Click, viewport: Rect) {
        let TourPhase::Active(index) = self.phase else {
            return;
        };
        let scroll = stage.scroll_offset();

        let event = self
            .callout
            .as_ref()
            .and_then(|callout| callout.hit(click.column, click.row, viewport, scroll));
        if let Some(event) = event {
            match event {
                CalloutEvent::Back => self.back(stage),
                CalloutEvent::Next => self.next(stage),
                CalloutEvent::Dismiss => self.finish(),
            }
            return;
        }

        let (Some(callout), Some(highlight)) = (self.callout.as_ref(), self.highlight.as_ref())
        else {
            return;
        };
        let target = self.steps[index].target;
        match classify(click, target, callout, highlight, viewport, stage) {
            Verdict::Inert => {}
            Verdict::Qualifying => self.finish(),
        }
    }

    /// Draw both surfaces for the current frame, highlight below callout
    pub fn render(&self, frame: &mut Frame, stage: &impl Stage, viewport: Rect) {
        if !self.is_active() {
            return;
        }
        let scroll = stage.scroll_offset();
        if let Some(highlight) = self.highlight.as_ref() {
            highlight.render(frame, viewport, scroll);
        }
        if let Some(callout) = self.callout.as_ref() {
            callout.render(frame, viewport, scroll);
        }
    }

    /// Apply the current step to both surfaces
    ///
    /// A step whose target is absent, or whose target no longer resolves
    /// to bounds, renders the anchorless path: highlight hidden through
    /// the zero-bounds convention, callout centered.
    fn show_current_step(&mut self, stage: &mut impl Stage) {
        let TourPhase::Active(index) = self.phase else {
            return;
        };
        let step = &self.steps[index];
        let scroll = stage.scroll_offset();
        let (Some(callout), Some(highlight)) = (self.callout.as_mut(), self.highlight.as_mut())
        else {
            return;
        };

        callout.set_visible(true);
        callout.set_back_enabled(index != 0);
        callout.set_title(step.title.as_str());
        callout.set_body(step.body.as_str());

        let resolved = match step.target {
            Some(id) => stage.target_bounds(id).map(|bounds| (id, bounds)),
            None => None,
        };
        match resolved {
            None => {
                highlight.show(Bounds::ZERO, scroll);
                callout.set_centered(true);
            }
            Some((id, bounds)) => {
                callout.set_centered(false);
                callout.anchor_to(bounds, scroll);
                highlight.show(bounds, scroll);
                stage.scroll_into_view(id);
            }
        }
    }

    #[cfg(test)]
    pub(crate) fn callout(&self) -> Option<&Callout> {
        self.callout.as_ref()
    }

    #[cfg(test)]
    pub(crate) fn highlight(&self) -> Option<&Highlight> {
        self.highlight.as_ref()
    }
}
