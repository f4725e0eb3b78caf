//! Interactive play on stdin/stdout.

use std::io;

use iw_engine::{GameConfig, GameError, GameSession, SaveStore};
use tracing::info;

use crate::console::ConsoleFrontend;

pub fn run(config: &GameConfig) -> Result<(), String> {
    let graph = super::load_story(&config.story_path)?;
    let store = SaveStore::new(&config.save_path);
    let mut session = GameSession::new(&graph, store, config);

    let stdin = io::stdin();
    let mut frontend = ConsoleFrontend::new(stdin.lock(), io::stdout(), config.line_width);

    match session.run(&mut frontend) {
        Ok(()) => Ok(()),
        Err(GameError::InputClosed) => {
            info!(save = %config.save_path.display(), "input_closed");
            println!();
            println!("  Input closed. Progress saved to '{}'.", config.save_path.display());
            Ok(())
        }
        Err(e @ (GameError::CorruptedSave(_) | GameError::SavedSceneNotFound(_))) => Err(format!(
            "{e}\n  Run `iw save wipe --save {}` to clear it.",
            config.save_path.display()
        )),
        Err(e) => Err(e.to_string()),
    }
}
