use std::path::Path;

use colored::Colorize;
use iw_core::SceneId;

pub fn run(story: &Path, scene_id: &str) -> Result<(), String> {
    let graph = super::load_story(story)?;
    let scene = graph
        .scene(&SceneId::new(scene_id))
        .ok_or_else(|| format!("scene not found: {scene_id}"))?;

    match graph.locate_world(scene).and_then(|w| w.world_name().map(|name| (w, name))) {
        Some((world, name)) => println!("  {} ({})", name.bold(), world.id),
        None => println!("  '{scene_id}' is not inside any world."),
    }

    Ok(())
}
