use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::error::{FlowError, FlowResult};
use crate::scene::SceneId;

/// Unique identifier of a choice, taken verbatim from the canvas edge id.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ChoiceId(pub String);

impl ChoiceId {
    /// Wrap a raw identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ChoiceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ChoiceId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for ChoiceId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// A directed edge: a player-selectable transition between two scenes.
///
/// Endpoints are stored as scene ids and resolved through the owning
/// [`FlowGraph`](crate::FlowGraph).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Choice {
    /// Unique identifier.
    pub id: ChoiceId,
    /// Display label, never empty.
    pub text: String,
    /// Origin scene.
    pub leads_from: SceneId,
    /// Target scene.
    pub leads_to: SceneId,
    /// Edge colour.
    pub color: Color,
    /// Tricks that must all be found before the choice is visible.
    /// Only yellow choices carry any.
    pub requires_tricks: BTreeSet<String>,
}

impl Choice {
    /// Create a choice with no trick requirements.
    pub fn new(
        id: impl Into<ChoiceId>,
        text: impl Into<String>,
        leads_from: impl Into<SceneId>,
        leads_to: impl Into<SceneId>,
        color: Color,
    ) -> FlowResult<Self> {
        let id = id.into();
        let text = text.into();
        if text.is_empty() {
            return Err(FlowError::EmptyText {
                kind: "choice",
                id: id.0,
            });
        }
        Ok(Self {
            id,
            text,
            leads_from: leads_from.into(),
            leads_to: leads_to.into(),
            color,
            requires_tricks: BTreeSet::new(),
        })
    }
}

impl fmt::Display for Choice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
