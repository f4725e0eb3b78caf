use std::collections::{HashSet, VecDeque};

use crate::color::Color;
use crate::graph::FlowGraph;
use crate::scene::{Scene, SceneId};

impl FlowGraph {
    /// Find the nearest world scene enclosing `scene`.
    ///
    /// Walks incoming choices breadth-first, skipping green (trick) and
    /// blue edges, and returns the first world scene reached. World and
    /// trick scenes have no enclosing world. Each scene is queued at most
    /// once, so cycles terminate.
    pub fn locate_world(&self, scene: &Scene) -> Option<&Scene> {
        if scene.is_world || scene.is_trick {
            return None;
        }

        let mut visited: HashSet<&SceneId> = HashSet::from([&scene.id]);
        let mut frontier: VecDeque<&Scene> = VecDeque::from([self.scene(&scene.id)?]);

        while let Some(current) = frontier.pop_front() {
            for choice in self.choices_to(current) {
                if matches!(choice.color, Color::Green | Color::Blue) {
                    continue;
                }
                let neighbor = self.source_of(choice);
                if !visited.insert(&neighbor.id) {
                    continue;
                }
                if neighbor.is_world {
                    return Some(neighbor);
                }
                frontier.push_back(neighbor);
            }
        }
        None
    }
}
