//! State-variant redirection.
//!
//! A scene has a state variant when a trick scene links into it with an
//! orange choice. Arriving at such a scene may swap it for the scene behind
//! its single outgoing orange choice, depending on whether the gating
//! tricks have been found and on the configured [`RedirectPolicy`].

use std::fmt;
use std::str::FromStr;

use iw_core::{Color, FlowGraph, Scene, TrickSet};
use tracing::info;

use crate::error::{GameError, GameResult};

/// When arriving at a state-variant scene triggers redirection.
///
/// Draft revisions of the story logic disagree on the polarity of this
/// check, so it is configurable. Pending product-owner confirmation the
/// default is [`RedirectPolicy::WhenTrickFound`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RedirectPolicy {
    /// Redirect once every gating trick has been found.
    #[default]
    WhenTrickFound,
    /// Redirect while any gating trick is still missing.
    WhenTrickMissing,
}

impl RedirectPolicy {
    /// Decide redirection for a scene gated by `gating` tricks.
    pub fn should_redirect(self, gating: &[&str], found: &TrickSet) -> bool {
        let all_found = gating.iter().all(|trick| found.contains(*trick));
        match self {
            Self::WhenTrickFound => all_found,
            Self::WhenTrickMissing => !all_found,
        }
    }

    /// Short name used on the command line.
    pub fn name(self) -> &'static str {
        match self {
            Self::WhenTrickFound => "found",
            Self::WhenTrickMissing => "missing",
        }
    }
}

impl fmt::Display for RedirectPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for RedirectPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "found" => Ok(Self::WhenTrickFound),
            "missing" => Ok(Self::WhenTrickMissing),
            other => Err(format!(
                "unknown redirect policy: {other} (expected 'found' or 'missing')"
            )),
        }
    }
}

/// Tricks gating the state variant of `scene`: the names of trick scenes
/// linking into it with an orange choice.
pub fn gating_tricks<'g>(graph: &'g FlowGraph, scene: &Scene) -> Vec<&'g str> {
    graph
        .choices_to(scene)
        .into_iter()
        .filter(|choice| choice.color == Color::Orange)
        .filter_map(|choice| graph.source_of(choice).trick_name())
        .collect()
}

/// Whether arriving at `scene` is subject to redirection at all.
pub fn has_state_variant(graph: &FlowGraph, scene: &Scene) -> bool {
    !gating_tricks(graph, scene).is_empty()
}

/// The substitute for `scene`: the target of its single outgoing orange
/// choice.
pub fn variant_target<'g>(graph: &'g FlowGraph, scene: &Scene) -> GameResult<&'g Scene> {
    let oranges: Vec<_> = graph
        .choices_from(scene)
        .into_iter()
        .filter(|choice| choice.color == Color::Orange)
        .collect();
    match oranges.as_slice() {
        [only] => Ok(graph.target_of(only)),
        others => Err(GameError::VariantCount {
            scene: scene.id.clone(),
            count: others.len(),
        }),
    }
}

/// The scene the player actually lands on after arriving at `scene`.
///
/// Redirection happens at most once per arrival.
pub fn resolve_arrival<'g>(
    graph: &'g FlowGraph,
    scene: &'g Scene,
    found: &TrickSet,
    policy: RedirectPolicy,
) -> GameResult<&'g Scene> {
    let gating = gating_tricks(graph, scene);
    if gating.is_empty() || !policy.should_redirect(&gating, found) {
        return Ok(scene);
    }

    let variant = variant_target(graph, scene)?;
    info!(
        from = %scene.id,
        to = %variant.id,
        policy = %policy,
        "state_variant_redirect"
    );
    Ok(variant)
}

/// Check every redirection-eligible scene for a unique variant link.
///
/// Returns the number of eligible scenes.
pub fn validate_variants(graph: &FlowGraph) -> GameResult<usize> {
    let mut eligible = 0;
    for scene in graph.scenes() {
        if has_state_variant(graph, scene) {
            variant_target(graph, scene)?;
            eligible += 1;
        }
    }
    Ok(eligible)
}
