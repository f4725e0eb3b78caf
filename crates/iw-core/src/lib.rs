//! Core types for Inner Wilds: scenes, choices, and the flow graph.
//!
//! A story is authored as a visual canvas of nodes and edges. This crate
//! turns the decoded node/edge records into a validated, cross-linked
//! [`FlowGraph`] and answers the read-only questions the game loop asks of
//! it: which choices are visible, which world encloses a scene, and which
//! tricks a scene hands out.

/// Choice visibility against the set of discovered tricks.
pub mod availability;
/// Graph construction from raw node/edge records.
pub mod builder;
/// Directed edges between scenes.
pub mod choice;
/// The closed colour palette used to type scenes and choices.
pub mod color;
/// Error types used throughout the crate.
pub mod error;
/// The immutable flow graph that owns scenes and choices.
pub mod graph;
/// Backward search for the world enclosing a scene.
pub mod locator;
/// Raw node/edge records as decoded from a canvas file.
pub mod record;
/// Narrative nodes.
pub mod scene;

/// Re-export availability helpers.
pub use availability::{TrickSet, is_available, visible_choices};
/// Re-export the graph builder.
pub use builder::GraphBuilder;
/// Re-export choice types.
pub use choice::{Choice, ChoiceId};
/// Re-export the colour palette.
pub use color::Color;
/// Re-export error types.
pub use error::{FlowError, FlowResult};
/// Re-export the flow graph.
pub use graph::FlowGraph;
/// Re-export raw record types.
pub use record::{CanvasDocument, ChoiceRecord, SceneRecord};
/// Re-export scene types.
pub use scene::{Scene, SceneId};
