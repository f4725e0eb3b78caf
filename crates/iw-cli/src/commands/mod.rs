pub mod check;
pub mod play;
pub mod save;
pub mod scenes;
pub mod world;

use std::path::Path;

use iw_core::FlowGraph;

/// Load and build the story canvas at `path`.
fn load_story(path: &Path) -> Result<FlowGraph, String> {
    FlowGraph::from_canvas_path(path).map_err(|e| e.to_string())
}
