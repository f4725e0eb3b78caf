//! Game engine for Inner Wilds.
//!
//! Drives a [`FlowGraph`](iw_core::FlowGraph) turn by turn: presents the
//! visible choices through a [`Frontend`], redirects to state variants,
//! unlocks tricks, and persists progress to the ship log after every turn.

pub mod config;
pub mod error;
pub mod frontend;
pub mod redirect;
pub mod save;
pub mod session;

pub use config::GameConfig;
pub use error::{GameError, GameResult};
pub use frontend::{Frontend, ResumeChoice, SceneView};
pub use redirect::RedirectPolicy;
pub use save::{SaveData, SaveStore};
pub use session::{GameSession, GameState, unlock_tricks};
