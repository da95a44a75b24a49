//! Tour overlay surfaces

pub mod callout;
pub mod highlight;

pub use callout::{Callout, CalloutEvent};
pub use highlight::Highlight;
