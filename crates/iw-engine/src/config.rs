//! Configuration for a game session.

use std::path::PathBuf;

use crate::redirect::RedirectPolicy;

/// Default story canvas path.
pub const DEFAULT_STORY_PATH: &str = "game_flowchart.canvas";
/// Default ship log path.
pub const DEFAULT_SAVE_PATH: &str = "ship_log.txt";
/// Narrowest supported text column.
pub const MIN_LINE_WIDTH: usize = 20;

/// Configuration for a game session.
#[derive(Debug, Clone)]
pub struct GameConfig {
    /// Story canvas to load.
    pub story_path: PathBuf,
    /// Ship log (save file) location.
    pub save_path: PathBuf,
    /// When arriving at a state-variant scene triggers redirection.
    pub redirect_policy: RedirectPolicy,
    /// Column at which scene text wraps.
    pub line_width: usize,
    /// Show the title and intro on a fresh game.
    pub show_intro: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            story_path: PathBuf::from(DEFAULT_STORY_PATH),
            save_path: PathBuf::from(DEFAULT_SAVE_PATH),
            redirect_policy: RedirectPolicy::default(),
            line_width: 80,
            show_intro: true,
        }
    }
}

impl GameConfig {
    /// Set the story canvas path.
    pub fn with_story(mut self, path: impl Into<PathBuf>) -> Self {
        self.story_path = path.into();
        self
    }

    /// Set the ship log path.
    pub fn with_save(mut self, path: impl Into<PathBuf>) -> Self {
        self.save_path = path.into();
        self
    }

    /// Set the redirection policy.
    pub fn with_redirect_policy(mut self, policy: RedirectPolicy) -> Self {
        self.redirect_policy = policy;
        self
    }

    /// Set the wrap column (at least [`MIN_LINE_WIDTH`]).
    pub fn with_line_width(mut self, width: usize) -> Self {
        self.line_width = width.max(MIN_LINE_WIDTH);
        self
    }

    /// Enable or disable the title and intro.
    pub fn with_intro(mut self, show: bool) -> Self {
        self.show_intro = show;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let cfg = GameConfig::default();
        assert_eq!(cfg.story_path, PathBuf::from("game_flowchart.canvas"));
        assert_eq!(cfg.save_path, PathBuf::from("ship_log.txt"));
        assert_eq!(cfg.redirect_policy, RedirectPolicy::WhenTrickFound);
        assert_eq!(cfg.line_width, 80);
        assert!(cfg.show_intro);
    }

    #[test]
    fn builder_methods() {
        let cfg = GameConfig::default()
            .with_story("story.canvas")
            .with_save("log.txt")
            .with_redirect_policy(RedirectPolicy::WhenTrickMissing)
            .with_line_width(60)
            .with_intro(false);
        assert_eq!(cfg.story_path, PathBuf::from("story.canvas"));
        assert_eq!(cfg.save_path, PathBuf::from("log.txt"));
        assert_eq!(cfg.redirect_policy, RedirectPolicy::WhenTrickMissing);
        assert_eq!(cfg.line_width, 60);
        assert!(!cfg.show_intro);
    }

    #[test]
    fn line_width_clamped() {
        let cfg = GameConfig::default().with_line_width(3);
        assert_eq!(cfg.line_width, MIN_LINE_WIDTH);
    }
}
