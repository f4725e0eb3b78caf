use std::path::Path;

use comfy_table::{ContentArrangement, Table};

const TEXT_LIMIT: usize = 48;

pub fn run(story: &Path) -> Result<(), String> {
    let graph = super::load_story(story)?;

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Id", "Role", "Color", "World", "Text", "Choices"]);

    for scene in graph.scenes() {
        let world = graph
            .locate_world(scene)
            .and_then(|w| w.world_name())
            .unwrap_or("—");
        let text = truncate(&scene.text.replace('\n', " "));
        let choices = scene.choices_from.len().to_string();
        table.add_row(vec![
            scene.id.as_str(),
            scene.role(),
            scene.color.name(),
            world,
            text.as_str(),
            choices.as_str(),
        ]);
    }

    println!("{table}");
    println!();
    println!("  {} scenes, {} choices", graph.scene_count(), graph.choice_count());

    let grants: Vec<_> = graph
        .scenes()
        .iter()
        .filter(|s| !s.gives_tricks.is_empty())
        .collect();
    for scene in grants {
        let tricks: Vec<&str> = scene.gives_tricks.iter().map(String::as_str).collect();
        println!("  {} grants {}", scene.id, tricks.join(", "));
    }

    Ok(())
}

fn truncate(text: &str) -> String {
    if text.chars().count() > TEXT_LIMIT {
        let head: String = text.chars().take(TEXT_LIMIT - 3).collect();
        format!("{head}...")
    } else {
        text.to_string()
    }
}
