use std::path::Path;

use iw_engine::redirect::validate_variants;

pub fn run(story: &Path) -> Result<(), String> {
    let graph = super::load_story(story)?;
    let first = graph.initial_scene().map_err(|e| e.to_string())?;
    let variants = validate_variants(&graph).map_err(|e| e.to_string())?;

    println!("  All checks passed for '{}'.", story.display());
    println!(
        "  {} scenes, {} choices, {} tricks, {} worlds",
        graph.scene_count(),
        graph.choice_count(),
        graph.trick_names().len(),
        graph.worlds().count(),
    );
    println!("  {variants} state-variant scenes");
    println!("  New games begin at '{}'", first.id);

    Ok(())
}
