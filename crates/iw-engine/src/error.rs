//! Error types for the game engine.

use iw_core::{ChoiceId, FlowError, SceneId};
use thiserror::Error;

/// Result type for engine operations.
pub type GameResult<T> = Result<T, GameError>;

/// Errors that can occur while running a game.
#[derive(Debug, Error)]
pub enum GameError {
    /// The story graph violates an invariant.
    #[error("{0}")]
    Flow(#[from] FlowError),

    /// Reading or writing the ship log failed.
    #[error("ship log I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The ship log could not be parsed.
    #[error(
        "The ship log (which doubles as your save file) was corrupted: {0}. You'll have to start a new game."
    )]
    CorruptedSave(String),

    /// The ship log names a scene that is not in the story.
    #[error(
        "Loading saved game failed; couldn't find a scene matching the scene id in save file: {0}. You'll have to start a new game."
    )]
    SavedSceneNotFound(SceneId),

    /// A redirection-eligible scene lacks a unique state-variant link.
    #[error(
        "cannot redirect to state variant of scene {scene} because it has {count} outgoing orange choices, expected exactly 1"
    )]
    VariantCount {
        /// The scene being redirected.
        scene: SceneId,
        /// Number of outgoing orange choices found.
        count: usize,
    },

    /// The player picked a number outside the presented list.
    #[error("Choice not recognized: {0}")]
    InvalidChoice(usize),

    /// The choice is not currently visible from the active scene.
    #[error("choice {0} is not available here")]
    ChoiceNotAvailable(ChoiceId),

    /// A non-end scene offers nothing to choose.
    #[error("scene {0} has no available choices")]
    DeadEnd(SceneId),

    /// The session has no active scene yet.
    #[error("the game has not started")]
    NotStarted,

    /// `start` was called twice.
    #[error("the game has already started")]
    AlreadyStarted,

    /// The session reached an end scene.
    #[error("the game has already ended")]
    AlreadyEnded,

    /// The player's input stream closed mid-game.
    #[error("input closed before the game ended")]
    InputClosed,
}

impl GameError {
    /// Whether the turn can simply be retried without any state change.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::InvalidChoice(_))
    }
}
