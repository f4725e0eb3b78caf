use std::collections::BTreeSet;

use crate::choice::Choice;
use crate::graph::FlowGraph;
use crate::scene::Scene;

/// The discovered tricks of one playthrough, by name.
pub type TrickSet = BTreeSet<String>;

/// Whether every trick the choice requires has been found.
///
/// Availability only grows with `found`: adding tricks never hides a choice.
pub fn is_available(choice: &Choice, found: &TrickSet) -> bool {
    choice.requires_tricks.is_subset(found)
}

/// The outgoing choices of `scene` the player may pick right now.
///
/// Choices leading into trick scenes are bookkeeping edges and are never
/// shown.
pub fn visible_choices<'g>(graph: &'g FlowGraph, scene: &Scene, found: &TrickSet) -> Vec<&'g Choice> {
    graph
        .choices_from(scene)
        .into_iter()
        .filter(|choice| is_available(choice, found))
        .filter(|choice| !graph.target_of(choice).is_trick)
        .collect()
}
