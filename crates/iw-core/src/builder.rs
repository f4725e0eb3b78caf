//! Graph construction from raw node/edge records.
//!
//! Construction runs in fixed passes: scenes, choices, link lists, endpoint
//! resolution, then the two derived trick sets. Any failure aborts the
//! whole build.

use std::collections::{BTreeSet, HashMap};

use tracing::{debug, info};

use crate::choice::{Choice, ChoiceId};
use crate::color::Color;
use crate::error::{FlowError, FlowResult};
use crate::graph::FlowGraph;
use crate::record::{CanvasDocument, ChoiceRecord, SceneRecord};
use crate::scene::{DEFAULT_TEXT, Scene, SceneId};

/// Collects raw records and turns them into a cross-linked [`FlowGraph`].
#[derive(Debug, Clone, Default)]
pub struct GraphBuilder {
    scenes: Vec<SceneRecord>,
    choices: Vec<ChoiceRecord>,
}

impl GraphBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a builder with every node and edge of a canvas document.
    pub fn from_document(document: CanvasDocument) -> Self {
        Self {
            scenes: document.nodes,
            choices: document.edges,
        }
    }

    /// Add a scene record.
    pub fn scene(mut self, record: SceneRecord) -> Self {
        self.scenes.push(record);
        self
    }

    /// Add a choice record.
    pub fn choice(mut self, record: ChoiceRecord) -> Self {
        self.choices.push(record);
        self
    }

    /// Build the graph, failing on the first invalid record.
    pub fn build(self) -> FlowResult<FlowGraph> {
        // Scenes
        let mut scenes = Vec::with_capacity(self.scenes.len());
        let mut scene_index = HashMap::with_capacity(self.scenes.len());
        for record in self.scenes {
            let scene = build_scene(record)?;
            if scene_index.insert(scene.id.clone(), scenes.len()).is_some() {
                return Err(FlowError::DuplicateScene(scene.id));
            }
            scenes.push(scene);
        }

        // Choices
        let mut choices = Vec::with_capacity(self.choices.len());
        let mut choice_index = HashMap::with_capacity(self.choices.len());
        for record in self.choices {
            let choice = build_choice(record)?;
            if choice_index.insert(choice.id.clone(), choices.len()).is_some() {
                return Err(FlowError::DuplicateChoice(choice.id));
            }
            choices.push(choice);
        }

        // Endpoint resolution
        for choice in &choices {
            for endpoint in [&choice.leads_from, &choice.leads_to] {
                if !scene_index.contains_key(endpoint) {
                    return Err(FlowError::UnknownScene {
                        choice: choice.id.clone(),
                        scene: endpoint.clone(),
                    });
                }
            }
        }

        // Link lists, in edge order
        for choice in &choices {
            scenes[scene_index[&choice.leads_from]]
                .choices_from
                .push(choice.id.clone());
            scenes[scene_index[&choice.leads_to]]
                .choices_to
                .push(choice.id.clone());
        }

        // Tricks granted by each scene
        for choice in &choices {
            let granted = scenes[scene_index[&choice.leads_to]]
                .trick_name()
                .map(str::to_string);
            if let Some(name) = granted {
                scenes[scene_index[&choice.leads_from]]
                    .gives_tricks
                    .insert(name);
            }
        }

        // Tricks required by yellow choices
        let requirements: Vec<(usize, BTreeSet<String>)> = choices
            .iter()
            .enumerate()
            .filter(|(_, choice)| choice.color == Color::Yellow)
            .map(|(i, choice)| {
                let origin = &scenes[scene_index[&choice.leads_from]];
                let tricks = required_tricks(origin, &scenes, &choices, &scene_index, &choice_index);
                (i, tricks)
            })
            .collect();
        for (i, tricks) in requirements {
            choices[i].requires_tricks = tricks;
        }

        let graph = FlowGraph::from_parts(scenes, choices, scene_index, choice_index);
        info!(
            scenes = graph.scene_count(),
            choices = graph.choice_count(),
            tricks = graph.trick_names().len(),
            "flow_graph_built"
        );
        Ok(graph)
    }
}

fn build_scene(record: SceneRecord) -> FlowResult<Scene> {
    let color = Color::from_code(record.color.as_deref())?;
    let text = normalize_text(record.text);
    let scene = Scene::new(record.id, text, color)?;
    debug!(scene_id = %scene.id, color = %scene.color, role = scene.role(), "scene_built");
    Ok(scene)
}

fn build_choice(record: ChoiceRecord) -> FlowResult<Choice> {
    let color = Color::from_code(record.color.as_deref())?;
    let text = normalize_text(record.label);
    Choice::new(record.id, text, record.from_node, record.to_node, color)
}

/// Tricks gating the yellow choices leaving `origin`: the names of trick
/// scenes with a green edge into `origin`.
fn required_tricks(
    origin: &Scene,
    scenes: &[Scene],
    choices: &[Choice],
    scene_index: &HashMap<SceneId, usize>,
    choice_index: &HashMap<ChoiceId, usize>,
) -> BTreeSet<String> {
    origin
        .choices_to
        .iter()
        .map(|id| &choices[choice_index[id]])
        .filter(|incoming| incoming.color == Color::Green)
        .filter_map(|incoming| scenes[scene_index[&incoming.leads_from]].trick_name())
        .map(str::to_string)
        .collect()
}

fn normalize_text(text: Option<String>) -> String {
    match text {
        Some(text) if !text.is_empty() => text,
        _ => DEFAULT_TEXT.to_string(),
    }
}
