use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::choice::ChoiceId;
use crate::color::Color;
use crate::error::{FlowError, FlowResult};

/// Text prefix marking a trick scene.
pub const TRICK_PREFIX: &str = "TRICK: ";
/// Text prefix marking a world scene.
pub const WORLD_PREFIX: &str = "WORLD: ";
/// Literal text of the START scene.
pub const START_TEXT: &str = "START";
/// Literal text of an END scene.
pub const END_TEXT: &str = "END";
/// Replacement for empty scene or choice text.
pub const DEFAULT_TEXT: &str = "Continue";

/// Stable identifier of a scene, taken verbatim from the canvas node id.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SceneId(pub String);

impl SceneId {
    /// Wrap a raw identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SceneId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SceneId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for SceneId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// A narrative node: one unit of presented story text.
///
/// The role flags (`is_trick`, `is_start`, `is_end`, `is_world`) are derived
/// from text and colour when the scene is created. The link lists are
/// filled in by [`GraphBuilder`](crate::GraphBuilder) once every choice
/// exists.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scene {
    /// Unique identifier.
    pub id: SceneId,
    /// Display text, never empty.
    pub text: String,
    /// Node colour.
    pub color: Color,
    /// Bookkeeping node that grants a trick when its parent is visited.
    pub is_trick: bool,
    /// The unique entry point of the story.
    pub is_start: bool,
    /// Reaching this scene ends the game.
    pub is_end: bool,
    /// Root of a narrative region.
    pub is_world: bool,
    /// Outgoing choices, in canvas edge order.
    pub choices_from: Vec<ChoiceId>,
    /// Incoming choices, in canvas edge order.
    pub choices_to: Vec<ChoiceId>,
    /// Tricks obtainable by taking an outgoing choice into a trick scene.
    pub gives_tricks: BTreeSet<String>,
}

impl Scene {
    /// Create an unlinked scene, deriving its role flags.
    pub fn new(id: impl Into<SceneId>, text: impl Into<String>, color: Color) -> FlowResult<Self> {
        let id = id.into();
        let text = text.into();
        if text.is_empty() {
            return Err(FlowError::EmptyText {
                kind: "scene",
                id: id.0,
            });
        }

        let is_trick = text.starts_with(TRICK_PREFIX) && color == Color::Green;
        let is_start = text == START_TEXT && color == Color::Red;
        let is_end = text == END_TEXT && color == Color::Red;
        let is_world = text.starts_with(WORLD_PREFIX);

        Ok(Self {
            id,
            text,
            color,
            is_trick,
            is_start,
            is_end,
            is_world,
            choices_from: Vec::new(),
            choices_to: Vec::new(),
            gives_tricks: BTreeSet::new(),
        })
    }

    /// Name of the trick this scene grants, if it is a trick scene.
    pub fn trick_name(&self) -> Option<&str> {
        if self.is_trick {
            self.text.strip_prefix(TRICK_PREFIX)
        } else {
            None
        }
    }

    /// Name of the region this scene roots, if it is a world scene.
    pub fn world_name(&self) -> Option<&str> {
        if self.is_world {
            self.text.strip_prefix(WORLD_PREFIX)
        } else {
            None
        }
    }

    /// Short role label for listings.
    pub fn role(&self) -> &'static str {
        if self.is_start {
            "start"
        } else if self.is_end {
            "end"
        } else if self.is_trick {
            "trick"
        } else if self.is_world {
            "world"
        } else {
            "scene"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trick_requires_green_and_prefix() {
        let trick = Scene::new("t", "TRICK: Key", Color::Green).unwrap();
        assert!(trick.is_trick);
        assert_eq!(trick.trick_name(), Some("Key"));

        let gray = Scene::new("t", "TRICK: Key", Color::Gray).unwrap();
        assert!(!gray.is_trick);
        assert_eq!(gray.trick_name(), None);
    }

    #[test]
    fn start_and_end_require_red() {
        assert!(Scene::new("s", "START", Color::Red).unwrap().is_start);
        assert!(!Scene::new("s", "START", Color::Gray).unwrap().is_start);
        assert!(Scene::new("e", "END", Color::Red).unwrap().is_end);
        assert!(!Scene::new("e", "END", Color::Blue).unwrap().is_end);
        assert!(!Scene::new("e", "THE END", Color::Red).unwrap().is_end);
    }

    #[test]
    fn world_is_prefix_only() {
        let world = Scene::new("w", "WORLD: Timber Hearth", Color::Purple).unwrap();
        assert!(world.is_world);
        assert_eq!(world.world_name(), Some("Timber Hearth"));
        assert_eq!(world.role(), "world");
    }

    #[test]
    fn empty_text_rejected() {
        let err = Scene::new("x", "", Color::Gray).unwrap_err();
        assert!(matches!(err, FlowError::EmptyText { kind: "scene", .. }));
    }
}
