//! spotlight-tour - Guided product-tour overlays for terminal applications
//!
//! This library provides a guided-tour (product walkthrough) overlay for
//! terminal UIs: it steps a user through a sequence of UI regions,
//! showing a positioned callout and a highlight ring around the current
//! target, advancing on explicit navigation and dismissing when the user
//! clicks outside the highlighted region.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `tour`: The tour engine - steps, the stage seam, click
//!   classification and the step state machine
//! - `tui`: The demo host - page, overlay surfaces, event loop
//!
//! The engine never touches the terminal directly; the host UI implements
//! the [`Stage`] seam (scroll offsets, element geometry, animated
//! centering, UI-tree containment) and forwards clicks to the engine.
//!
//! # Example
//!
//! ```rust,ignore
//! use spotlight_tour::{Step, Tour};
//!
//! let steps = vec![
//!     Step::new("Welcome", "A quick look around."),
//!     Step::new("Navigation", "Views live here.").with_target(sidebar),
//! ];
//! let mut tour = Tour::new(steps);
//! tour.start(&mut page);
//! ```

pub mod config;
pub mod error;
pub mod tour;
pub mod tui;

pub use error::SpotlightError;
pub use tour::{Bounds, Click, Deck, Offset, Stage, Step, StepSpec, TargetId, Tour, TourPhase};
