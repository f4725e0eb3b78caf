use std::collections::{BTreeSet, HashMap};
use std::path::Path;

use crate::builder::GraphBuilder;
use crate::choice::{Choice, ChoiceId};
use crate::error::{FlowError, FlowResult};
use crate::record::CanvasDocument;
use crate::scene::{Scene, SceneId};

/// The immutable set of all scenes and choices for one game.
///
/// Scenes and choices live in arenas and refer to each other by id, so the
/// graph has no ownership cycles. Every cross-reference was resolved by
/// [`GraphBuilder`], which makes the id-based accessors on this type total
/// for ids that came out of the graph itself.
#[derive(Debug, Clone)]
pub struct FlowGraph {
    scenes: Vec<Scene>,
    choices: Vec<Choice>,

    // Indexes
    scene_index: HashMap<SceneId, usize>,
    choice_index: HashMap<ChoiceId, usize>,
}

impl FlowGraph {
    pub(crate) fn from_parts(
        scenes: Vec<Scene>,
        choices: Vec<Choice>,
        scene_index: HashMap<SceneId, usize>,
        choice_index: HashMap<ChoiceId, usize>,
    ) -> Self {
        Self {
            scenes,
            choices,
            scene_index,
            choice_index,
        }
    }

    /// Build a graph from canvas JSON text.
    pub fn from_canvas_str(json: &str) -> FlowResult<Self> {
        let document = CanvasDocument::from_json(json)?;
        GraphBuilder::from_document(document).build()
    }

    /// Read and build a graph from a `.canvas` file.
    pub fn from_canvas_path(path: &Path) -> FlowResult<Self> {
        let json = std::fs::read_to_string(path).map_err(|source| FlowError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_canvas_str(&json)
    }

    // -----------------------------------------------------------------------
    // Lookup
    // -----------------------------------------------------------------------

    /// Get a scene by id.
    pub fn scene(&self, id: &SceneId) -> Option<&Scene> {
        self.scene_index.get(id).map(|&i| &self.scenes[i])
    }

    /// Get a choice by id.
    pub fn choice(&self, id: &ChoiceId) -> Option<&Choice> {
        self.choice_index.get(id).map(|&i| &self.choices[i])
    }

    /// All scenes, in canvas node order.
    pub fn scenes(&self) -> &[Scene] {
        &self.scenes
    }

    /// All choices, in canvas edge order.
    pub fn choices(&self) -> &[Choice] {
        &self.choices
    }

    /// Number of scenes in the graph.
    pub fn scene_count(&self) -> usize {
        self.scenes.len()
    }

    /// Number of choices in the graph.
    pub fn choice_count(&self) -> usize {
        self.choices.len()
    }

    // -----------------------------------------------------------------------
    // Links
    // -----------------------------------------------------------------------

    /// Outgoing choices of a scene, in canvas edge order.
    pub fn choices_from(&self, scene: &Scene) -> Vec<&Choice> {
        scene
            .choices_from
            .iter()
            .filter_map(|id| self.choice(id))
            .collect()
    }

    /// Incoming choices of a scene, in canvas edge order.
    pub fn choices_to(&self, scene: &Scene) -> Vec<&Choice> {
        scene
            .choices_to
            .iter()
            .filter_map(|id| self.choice(id))
            .collect()
    }

    /// The scene a choice leaves from.
    ///
    /// # Panics
    ///
    /// Panics if the choice does not belong to this graph.
    pub fn source_of(&self, choice: &Choice) -> &Scene {
        &self.scenes[self.scene_index[&choice.leads_from]]
    }

    /// The scene a choice leads to.
    ///
    /// # Panics
    ///
    /// Panics if the choice does not belong to this graph.
    pub fn target_of(&self, choice: &Choice) -> &Scene {
        &self.scenes[self.scene_index[&choice.leads_to]]
    }

    // -----------------------------------------------------------------------
    // Game-start invariants
    // -----------------------------------------------------------------------

    /// The unique START scene.
    pub fn start_scene(&self) -> FlowResult<&Scene> {
        let starts: Vec<&Scene> = self.scenes.iter().filter(|s| s.is_start).collect();
        match starts.as_slice() {
            [start] => Ok(*start),
            _ => Err(FlowError::StartSceneCount(starts.len())),
        }
    }

    /// The scene a fresh game begins at: the target of the START scene's
    /// single outgoing choice.
    pub fn initial_scene(&self) -> FlowResult<&Scene> {
        let start = self.start_scene()?;
        match self.choices_from(start).as_slice() {
            [only] => Ok(self.target_of(only)),
            others => Err(FlowError::StartChoiceCount {
                scene: start.id.clone(),
                count: others.len(),
            }),
        }
    }

    // -----------------------------------------------------------------------
    // Statistics
    // -----------------------------------------------------------------------

    /// Names of every trick in the story.
    pub fn trick_names(&self) -> BTreeSet<&str> {
        self.scenes.iter().filter_map(Scene::trick_name).collect()
    }

    /// All world scenes, in canvas node order.
    pub fn worlds(&self) -> impl Iterator<Item = &Scene> {
        self.scenes.iter().filter(|s| s.is_world)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{ChoiceRecord, SceneRecord};

    fn linear() -> FlowGraph {
        GraphBuilder::new()
            .scene(SceneRecord::new("start", "START").with_color("1"))
            .scene(SceneRecord::new("a", "Hello"))
            .scene(SceneRecord::new("end", "END").with_color("1"))
            .choice(ChoiceRecord::new("c1", "start", "a"))
            .choice(ChoiceRecord::new("c2", "a", "end").with_label("Leave"))
            .build()
            .unwrap()
    }

    #[test]
    fn initial_scene_follows_start_choice() {
        let graph = linear();
        assert_eq!(graph.start_scene().unwrap().id, SceneId::new("start"));
        assert_eq!(graph.initial_scene().unwrap().text, "Hello");
    }

    #[test]
    fn zero_start_scenes_fails_at_game_start() {
        let graph = GraphBuilder::new()
            .scene(SceneRecord::new("a", "Hello"))
            .build()
            .unwrap();
        assert!(matches!(
            graph.initial_scene(),
            Err(FlowError::StartSceneCount(0))
        ));
    }

    #[test]
    fn two_start_scenes_fail_at_game_start() {
        let graph = GraphBuilder::new()
            .scene(SceneRecord::new("s1", "START").with_color("1"))
            .scene(SceneRecord::new("s2", "START").with_color("1"))
            .build()
            .unwrap();
        assert!(matches!(
            graph.start_scene(),
            Err(FlowError::StartSceneCount(2))
        ));
    }

    #[test]
    fn start_with_two_choices_fails() {
        let graph = GraphBuilder::new()
            .scene(SceneRecord::new("start", "START").with_color("1"))
            .scene(SceneRecord::new("a", "A"))
            .scene(SceneRecord::new("b", "B"))
            .choice(ChoiceRecord::new("c1", "start", "a"))
            .choice(ChoiceRecord::new("c2", "start", "b"))
            .build()
            .unwrap();
        assert!(matches!(
            graph.initial_scene(),
            Err(FlowError::StartChoiceCount { count: 2, .. })
        ));
    }

    #[test]
    fn endpoints_resolve() {
        let graph = linear();
        let leave = graph.choice(&ChoiceId::new("c2")).unwrap();
        assert_eq!(graph.source_of(leave).text, "Hello");
        assert!(graph.target_of(leave).is_end);
    }

    #[test]
    fn from_canvas_str_builds_graph() {
        let json = r#"{
            "nodes": [
                {"id": "s", "type": "text", "text": "START", "color": "1"},
                {"id": "a", "type": "text", "text": "Hello"}
            ],
            "edges": [{"id": "e", "fromNode": "s", "toNode": "a"}]
        }"#;
        let graph = FlowGraph::from_canvas_str(json).unwrap();
        assert_eq!(graph.scene_count(), 2);
        assert_eq!(graph.choice_count(), 1);
        assert_eq!(graph.choice(&ChoiceId::new("e")).unwrap().text, "Continue");
    }

    #[test]
    fn from_canvas_str_rejects_bad_json() {
        assert!(matches!(
            FlowGraph::from_canvas_str("not json"),
            Err(FlowError::Canvas(_))
        ));
    }
}
