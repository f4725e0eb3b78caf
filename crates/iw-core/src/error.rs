use crate::choice::ChoiceId;
use crate::scene::SceneId;

/// Alias for `Result<T, FlowError>`.
pub type FlowResult<T> = Result<T, FlowError>;

/// Errors raised while building or validating a flow graph.
#[derive(Debug, thiserror::Error)]
pub enum FlowError {
    /// A colour code outside the known palette.
    #[error("color code not recognized: \"{0}\"")]
    UnrecognizedColor(String),

    /// A scene or choice ended up with empty text.
    #[error("{kind} {id} has empty text")]
    EmptyText {
        /// Either `"scene"` or `"choice"`.
        kind: &'static str,
        /// Identifier of the offending record.
        id: String,
    },

    /// Two scenes share an identifier.
    #[error("duplicate scene id: {0}")]
    DuplicateScene(SceneId),

    /// Two choices share an identifier.
    #[error("duplicate choice id: {0}")]
    DuplicateChoice(ChoiceId),

    /// A choice points at a scene that does not exist.
    #[error("choice {choice} references unknown scene {scene}")]
    UnknownScene {
        /// The choice holding the dangling reference.
        choice: ChoiceId,
        /// The scene id that failed to resolve.
        scene: SceneId,
    },

    /// The graph must contain exactly one START scene.
    #[error("number of START scenes must be exactly 1, found {0}")]
    StartSceneCount(usize),

    /// The START scene must have exactly one outgoing choice.
    #[error("the START scene {scene} must point to exactly 1 scene, found {count}")]
    StartChoiceCount {
        /// The START scene.
        scene: SceneId,
        /// Number of outgoing choices found.
        count: usize,
    },

    /// The canvas document could not be decoded.
    #[error("invalid canvas document: {0}")]
    Canvas(#[from] serde_json::Error),

    /// The canvas file could not be read.
    #[error("cannot read {path}: {source}")]
    Read {
        /// Path that failed to read.
        path: String,
        /// Underlying I/O error.
        source: std::io::Error,
    },
}
