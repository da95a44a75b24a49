//! Outside-click classification
//!
//! While a tour is active, every document-level click is classified
//! against the current step: clicks on the highlighted element (or any of
//! its descendants), on the highlight surface, or on the callout surface
//! leave the tour running; anything else dismisses it. Classification is
//! evaluated fresh on every click because the current step, the scroll
//! position and the surface geometry all change over the tour's lifetime.

use ratatui::layout::Rect;

use super::stage::{Click, Stage, TargetId};
use crate::tui::widgets::{Callout, Highlight};

/// What a document-level click means for an active tour
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// The tour continues; no state change
    Inert,
    /// The click fell outside the callout and the highlighted region and
    /// ends the tour
    Qualifying,
}

/// Classify one click against the current step's target and both surfaces
pub(crate) fn classify(
    click: Click,
    target: Option<TargetId>,
    callout: &Callout,
    highlight: &Highlight,
    viewport: Rect,
    stage: &impl Stage,
) -> Verdict {
    let scroll = stage.scroll_offset();

    if let (Some(node), Some(target)) = (click.node, target) {
        if stage.is_within(node, target) {
            return Verdict::Inert;
        }
    }

    if highlight.contains(click.column, click.row, scroll) {
        return Verdict::Inert;
    }

    if callout.contains(click.column, click.row, viewport, scroll) {
        return Verdict::Inert;
    }

    Verdict::Qualifying
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tour::stage::testing::MockStage;
    use crate::tour::stage::{Bounds, Offset};

    fn viewport() -> Rect {
        Rect::new(0, 0, 80, 24)
    }

    fn surfaces() -> (Callout, Highlight) {
        let mut callout = Callout::new();
        callout.set_visible(true);
        callout.set_centered(true);
        let highlight = Highlight::new();
        (callout, highlight)
    }

    fn click_at(column: u16, row: u16, node: Option<TargetId>) -> Click {
        Click { column, row, node }
    }

    #[test]
    fn test_click_on_target_is_inert() {
        let target = TargetId::new(7);
        let stage = MockStage::new().with_target(target, Bounds::new(5, 5, 10, 3));
        let (callout, highlight) = surfaces();

        let verdict = classify(
            click_at(6, 6, Some(target)),
            Some(target),
            &callout,
            &highlight,
            viewport(),
            &stage,
        );
        assert_eq!(verdict, Verdict::Inert);
    }

    #[test]
    fn test_click_on_target_descendant_is_inert() {
        let target = TargetId::new(7);
        let child = TargetId::new(8);
        let stage = MockStage::new()
            .with_target(target, Bounds::new(5, 5, 10, 3))
            .with_child(child, target);
        let (callout, highlight) = surfaces();

        let verdict = classify(
            click_at(6, 6, Some(child)),
            Some(target),
            &callout,
            &highlight,
            viewport(),
            &stage,
        );
        assert_eq!(verdict, Verdict::Inert);
    }

    #[test]
    fn test_click_inside_highlight_surface_is_inert() {
        let stage = MockStage::new();
        let (callout, mut highlight) = surfaces();
        highlight.show(Bounds::new(10, 10, 6, 2), Offset::default());

        let verdict = classify(
            click_at(12, 11, None),
            None,
            &callout,
            &highlight,
            viewport(),
            &stage,
        );
        assert_eq!(verdict, Verdict::Inert);
    }

    #[test]
    fn test_click_inside_callout_is_inert() {
        let stage = MockStage::new();
        let (callout, highlight) = surfaces();

        let area = callout
            .area(viewport(), Offset::default())
            .expect("visible callout has an area");
        let verdict = classify(
            click_at(area.x + 1, area.y + 1, None),
            None,
            &callout,
            &highlight,
            viewport(),
            &stage,
        );
        assert_eq!(verdict, Verdict::Inert);
    }

    #[test]
    fn test_unrelated_click_qualifies() {
        let target = TargetId::new(7);
        let other = TargetId::new(9);
        let stage = MockStage::new().with_target(target, Bounds::new(5, 5, 10, 3));
        let (callout, highlight) = surfaces();

        let verdict = classify(
            click_at(0, 23, Some(other)),
            Some(target),
            &callout,
            &highlight,
            viewport(),
            &stage,
        );
        assert_eq!(verdict, Verdict::Qualifying);
    }

    #[test]
    fn test_hidden_highlight_does_not_absorb_clicks() {
        let stage = MockStage::new();
        let (callout, mut highlight) = surfaces();
        highlight.show(Bounds::new(10, 10, 6, 2), Offset::default());
        highlight.hide();

        let verdict = classify(
            click_at(12, 11, None),
            None,
            &callout,
            &highlight,
            viewport(),
            &stage,
        );
        assert_eq!(verdict, Verdict::Qualifying);
    }
}
