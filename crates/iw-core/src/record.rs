//! Raw records in the shape of an Obsidian `.canvas` document.
//!
//! Unknown keys (`type`, `x`, `y`, `width`, `fromSide`, ...) are ignored on
//! decode.

use serde::{Deserialize, Serialize};

/// A decoded canvas document: a node list and an edge list.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CanvasDocument {
    /// Scene records.
    #[serde(default)]
    pub nodes: Vec<SceneRecord>,
    /// Choice records.
    #[serde(default)]
    pub edges: Vec<ChoiceRecord>,
}

impl CanvasDocument {
    /// Decode a document from canvas JSON.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}

/// One canvas node.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SceneRecord {
    /// Node identifier.
    pub id: String,
    /// Node text; absent or empty becomes `"Continue"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Colour code `"1"`..=`"6"`, absent for gray.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl SceneRecord {
    /// A gray node with the given text.
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: Some(text.into()),
            color: None,
        }
    }

    /// Set the colour code.
    pub fn with_color(mut self, code: impl Into<String>) -> Self {
        self.color = Some(code.into());
        self
    }
}

/// One canvas edge.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChoiceRecord {
    /// Edge identifier.
    pub id: String,
    /// Origin node id.
    #[serde(rename = "fromNode")]
    pub from_node: String,
    /// Target node id.
    #[serde(rename = "toNode")]
    pub to_node: String,
    /// Colour code `"1"`..=`"6"`, absent for gray.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    /// Edge label; absent or empty becomes `"Continue"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl ChoiceRecord {
    /// An unlabeled gray edge.
    pub fn new(id: impl Into<String>, from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            from_node: from.into(),
            to_node: to.into(),
            color: None,
            label: None,
        }
    }

    /// Set the edge label.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Set the colour code.
    pub fn with_color(mut self, code: impl Into<String>) -> Self {
        self.color = Some(code.into());
        self
    }
}
