//! The turn-by-turn game state machine.

use iw_core::{Choice, ChoiceId, FlowGraph, Scene, TrickSet, visible_choices};
use tracing::info;

use crate::config::GameConfig;
use crate::error::{GameError, GameResult};
use crate::frontend::{Frontend, ResumeChoice, SceneView};
use crate::redirect::{RedirectPolicy, resolve_arrival};
use crate::save::SaveStore;

/// Lifecycle of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// No scene is active yet.
    AwaitingStart,
    /// A scene is active and awaiting a choice.
    Playing,
    /// An end scene was reached. Terminal.
    Ended,
}

/// One playthrough of a story.
pub struct GameSession<'g> {
    graph: &'g FlowGraph,
    store: SaveStore,
    policy: RedirectPolicy,
    show_intro: bool,
    state: GameState,
    active: Option<&'g Scene>,
    found_tricks: TrickSet,
}

impl<'g> GameSession<'g> {
    /// Create a session that has not started yet.
    pub fn new(graph: &'g FlowGraph, store: SaveStore, config: &GameConfig) -> Self {
        Self {
            graph,
            store,
            policy: config.redirect_policy,
            show_intro: config.show_intro,
            state: GameState::AwaitingStart,
            active: None,
            found_tricks: TrickSet::new(),
        }
    }

    /// Where the session is in its lifecycle.
    pub fn state(&self) -> GameState {
        self.state
    }

    /// The scene the player is on.
    pub fn active_scene(&self) -> Option<&'g Scene> {
        self.active
    }

    /// Tricks discovered so far.
    pub fn found_tricks(&self) -> &TrickSet {
        &self.found_tricks
    }

    /// The world enclosing the active scene.
    pub fn current_world(&self) -> Option<&'g Scene> {
        self.active.and_then(|scene| self.graph.locate_world(scene))
    }

    /// The ship log this session writes to.
    pub fn store(&self) -> &SaveStore {
        &self.store
    }

    /// Resolve where play begins: a fresh game at the scene after START, or
    /// the scene recorded in the ship log.
    pub fn start(&mut self, frontend: &mut impl Frontend) -> GameResult<&'g Scene> {
        if self.state != GameState::AwaitingStart {
            return Err(GameError::AlreadyStarted);
        }

        // Parse the log only after the player chooses to continue.
        let saved = if self.store.has_save_data()? {
            match frontend.offer_resume()? {
                ResumeChoice::Continue => Some(self.store.load()?),
                ResumeChoice::StartOver => {
                    self.store.wipe_save()?;
                    None
                }
            }
        } else {
            None
        };

        let scene = match saved {
            Some(data) => {
                let scene = self
                    .graph
                    .scene(&data.scene_id)
                    .ok_or_else(|| GameError::SavedSceneNotFound(data.scene_id.clone()))?;
                self.found_tricks = data.tricks;
                info!(
                    scene_id = %scene.id,
                    tricks = self.found_tricks.len(),
                    "game_resumed"
                );
                scene
            }
            None => {
                let scene = self.graph.initial_scene()?;
                if self.show_intro {
                    frontend.show_title()?;
                    frontend.play_intro()?;
                }
                self.found_tricks = TrickSet::new();
                info!(scene_id = %scene.id, "game_started");
                scene
            }
        };

        self.enter(scene);
        Ok(scene)
    }

    /// Choices the player may pick on the active scene.
    pub fn visible_choices(&self) -> GameResult<Vec<&'g Choice>> {
        let scene = self.playing_scene()?;
        Ok(visible_choices(self.graph, scene, &self.found_tricks))
    }

    /// Take the `index`-th visible choice.
    pub fn choose(&mut self, index: usize) -> GameResult<&'g Scene> {
        let choice = self
            .visible_choices()?
            .get(index)
            .copied()
            .ok_or(GameError::InvalidChoice(index))?;
        self.take(choice)
    }

    /// Take a choice by id. It must be visible from the active scene.
    pub fn advance(&mut self, choice_id: &ChoiceId) -> GameResult<&'g Scene> {
        let choice = self
            .visible_choices()?
            .into_iter()
            .find(|choice| &choice.id == choice_id)
            .ok_or_else(|| GameError::ChoiceNotAvailable(choice_id.clone()))?;
        self.take(choice)
    }

    /// Play until an end scene is reached.
    pub fn run(&mut self, frontend: &mut impl Frontend) -> GameResult<()> {
        if self.state == GameState::AwaitingStart {
            self.start(frontend)?;
        }

        loop {
            let scene = match (self.state, self.active) {
                (GameState::Playing, Some(scene)) => scene,
                (GameState::Ended, Some(scene)) => {
                    frontend.show_ending(scene)?;
                    return Ok(());
                }
                _ => return Err(GameError::NotStarted),
            };

            let choices = self.visible_choices()?;
            if choices.is_empty() {
                return Err(GameError::DeadEnd(scene.id.clone()));
            }
            let view = SceneView {
                scene,
                world: self.graph.locate_world(scene),
                choices,
                found_tricks: &self.found_tricks,
            };
            let index = frontend.present_choices(&view)?;

            match self.choose(index) {
                Ok(_) => {}
                Err(e) if e.is_recoverable() => frontend.reject_choice(index)?,
                Err(e) => return Err(e),
            }
        }
    }

    fn take(&mut self, choice: &'g Choice) -> GameResult<&'g Scene> {
        let arrived = self.graph.target_of(choice);
        let scene = resolve_arrival(self.graph, arrived, &self.found_tricks, self.policy)?;

        let found = std::mem::take(&mut self.found_tricks);
        self.found_tricks = unlock_tricks(self.graph, scene, found);

        self.store.save(&scene.id, &self.found_tricks)?;
        self.enter(scene);
        Ok(scene)
    }

    fn enter(&mut self, scene: &'g Scene) {
        self.active = Some(scene);
        self.state = if scene.is_end {
            GameState::Ended
        } else {
            GameState::Playing
        };
        info!(
            scene_id = %scene.id,
            ended = scene.is_end,
            "scene_entered"
        );
    }

    fn playing_scene(&self) -> GameResult<&'g Scene> {
        match (self.state, self.active) {
            (GameState::Playing, Some(scene)) => Ok(scene),
            (GameState::Ended, _) => Err(GameError::AlreadyEnded),
            _ => Err(GameError::NotStarted),
        }
    }
}

/// Add every trick granted by `scene` to `found`.
///
/// A trick is granted when one of the scene's outgoing choices leads into a
/// trick scene.
pub fn unlock_tricks(graph: &FlowGraph, scene: &Scene, mut found: TrickSet) -> TrickSet {
    for choice in graph.choices_from(scene) {
        if let Some(trick) = graph.target_of(choice).trick_name() {
            if found.insert(trick.to_string()) {
                info!(trick = %trick, scene_id = %scene.id, "trick_found");
            }
        }
    }
    found
}
