//! Inspect and clear the ship log.

use std::path::Path;

use iw_engine::SaveStore;

pub fn show(path: &Path) -> Result<(), String> {
    let store = SaveStore::new(path);
    if store.is_save_file_missing() {
        println!("  No ship log at '{}'.", path.display());
        return Ok(());
    }
    if store.is_save_data_empty().map_err(|e| e.to_string())? {
        println!("  Ship log '{}' is empty.", path.display());
        return Ok(());
    }

    let data = store.load().map_err(|e| e.to_string())?;
    println!("  Current scene: {}", data.scene_id);
    if data.tricks.is_empty() {
        println!("  No tricks discovered yet.");
    } else {
        println!("  Tricks discovered:");
        for trick in &data.tricks {
            println!("    - {trick}");
        }
    }

    Ok(())
}

pub fn wipe(path: &Path) -> Result<(), String> {
    let store = SaveStore::new(path);
    if store.is_save_file_missing() {
        println!("  No ship log at '{}'.", path.display());
        return Ok(());
    }
    store.wipe_save().map_err(|e| e.to_string())?;
    println!("  Ship log '{}' wiped.", path.display());
    Ok(())
}
