//! The collaborator interface the session calls into for all player I/O.

use iw_core::{Choice, Scene, TrickSet};

use crate::error::GameResult;

/// Answer to the "existing save found" prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResumeChoice {
    /// Pick up from the ship log.
    Continue,
    /// Wipe the ship log and start a new game.
    StartOver,
}

/// Everything a frontend needs to present one turn.
#[derive(Debug)]
pub struct SceneView<'a> {
    /// The active scene.
    pub scene: &'a Scene,
    /// The world enclosing the active scene, if any.
    pub world: Option<&'a Scene>,
    /// Selectable choices, in presentation order.
    pub choices: Vec<&'a Choice>,
    /// Tricks discovered so far.
    pub found_tricks: &'a TrickSet,
}

/// Player-facing side effects: rendering, input, title and intro.
///
/// The session holds no state about the frontend; every call is
/// self-contained.
pub trait Frontend {
    /// Show the title screen on a fresh game.
    fn show_title(&mut self) -> GameResult<()>;

    /// Play the intro on a fresh game, after the title.
    fn play_intro(&mut self) -> GameResult<()>;

    /// Ask whether to continue an existing save.
    fn offer_resume(&mut self) -> GameResult<ResumeChoice>;

    /// Present a scene and return the index of the selected choice.
    fn present_choices(&mut self, view: &SceneView<'_>) -> GameResult<usize>;

    /// Tell the player their selection was not recognized.
    fn reject_choice(&mut self, _index: usize) -> GameResult<()> {
        Ok(())
    }

    /// Present the end scene once the game is over.
    fn show_ending(&mut self, _scene: &Scene) -> GameResult<()> {
        Ok(())
    }
}
