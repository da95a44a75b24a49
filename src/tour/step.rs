//! Tour steps and deck files
//!
//! A [`Step`] is the immutable value object the engine runs over. Decks
//! written on disk reference targets by name; [`Deck::resolve`] maps the
//! names to host UI-tree handles, and a name that resolves to nothing
//! becomes an anchorless step (centered callout, no highlight).

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::stage::TargetId;
use crate::error::{SpotlightError, SpotlightResult};

/// One stage of a tour: title, body text, optional target element
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    pub title: String,
    pub body: String,
    pub target: Option<TargetId>,
}

impl Step {
    /// Create an anchorless step
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
            target: None,
        }
    }

    /// Attach a target element
    pub fn with_target(mut self, target: TargetId) -> Self {
        self.target = Some(target);
        self
    }
}

/// A step as written in a deck file, with the target referenced by name
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StepSpec {
    pub title: String,
    pub body: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
}

/// An ordered tour deck loaded from disk
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Deck {
    pub steps: Vec<StepSpec>,
}

impl Deck {
    /// Load a deck from a JSON or YAML file, chosen by extension
    pub fn load(path: &Path) -> SpotlightResult<Self> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| SpotlightError::Io(format!("Failed to read deck file: {}", e)))?;

        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Ok(serde_json::from_str(&contents)?),
            Some("yaml") | Some("yml") => Ok(serde_yaml::from_str(&contents)?),
            _ => Err(SpotlightError::unsupported_deck_format(
                path.display().to_string(),
            )),
        }
    }

    /// Resolve target names against the host UI tree
    ///
    /// A name `lookup` cannot resolve degrades to an anchorless step; a
    /// deck may legitimately reference elements the host does not show.
    pub fn resolve(&self, lookup: impl Fn(&str) -> Option<TargetId>) -> Vec<Step> {
        self.steps
            .iter()
            .map(|spec| Step {
                title: spec.title.clone(),
                body: spec.body.clone(),
                target: spec.target.as_deref().and_then(&lookup),
            })
            .collect()
    }
}
