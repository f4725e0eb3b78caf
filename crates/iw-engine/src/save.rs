//! The ship log: a flat text save file.
//!
//! ```text
//! current scene id: <scene-id>
//!
//! --------LOG BEGINS BELOW--------
//! LOG ENTRY: <trick-name>
//! ```
//!
//! The file is rewritten in full on every save. Trick order in the file is
//! not significant. Scene ids and trick names are stored one per line, so
//! backslashes and line breaks inside them are escaped as `\\`, `\n` and
//! `\r`.

use std::borrow::Cow;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use iw_core::{SceneId, TrickSet};
use tracing::{debug, warn};

use crate::error::{GameError, GameResult};

/// Prefix of the first line.
pub const SCENE_PREFIX: &str = "current scene id: ";
/// Fixed third line separating the header from the log.
pub const LOG_HEADER: &str = "--------LOG BEGINS BELOW--------";
/// Prefix of each trick line.
pub const ENTRY_PREFIX: &str = "LOG ENTRY: ";

/// The persisted state of one playthrough.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveData {
    /// Scene the player was last on.
    pub scene_id: SceneId,
    /// Tricks discovered so far.
    pub tricks: TrickSet,
}

/// Reads and writes the ship log at a fixed path.
#[derive(Debug, Clone)]
pub struct SaveStore {
    path: PathBuf,
}

impl SaveStore {
    /// A store backed by the file at `path`. Nothing is touched on disk.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Location of the ship log.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether no file exists at the save path.
    pub fn is_save_file_missing(&self) -> bool {
        !self.path.exists()
    }

    /// Whether the save file exists and has zero length.
    pub fn is_save_data_empty(&self) -> GameResult<bool> {
        match fs::metadata(&self.path) {
            Ok(meta) => Ok(meta.len() == 0),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
            Err(e) => Err(e.into()),
        }
    }

    /// Truncate the save file, creating it if needed.
    pub fn wipe_save(&self) -> GameResult<()> {
        fs::write(&self.path, "")?;
        debug!(path = %self.path.display(), "ship_log_wiped");
        Ok(())
    }

    /// Overwrite the save file with the given state.
    pub fn save(&self, scene_id: &SceneId, tricks: &TrickSet) -> GameResult<()> {
        fs::write(&self.path, Self::render(scene_id, tricks))?;
        debug!(
            path = %self.path.display(),
            scene_id = %scene_id,
            tricks = tricks.len(),
            "ship_log_saved"
        );
        Ok(())
    }

    /// Read and parse the save file.
    pub fn load(&self) -> GameResult<SaveData> {
        let text = fs::read_to_string(&self.path)?;
        let data = Self::parse(&text)?;
        debug!(
            path = %self.path.display(),
            scene_id = %data.scene_id,
            tricks = data.tricks.len(),
            "ship_log_loaded"
        );
        Ok(data)
    }

    /// Whether a saved game is waiting to be resumed. Nothing is parsed.
    ///
    /// A missing file is created empty and counts as no save.
    pub fn has_save_data(&self) -> GameResult<bool> {
        if self.is_save_file_missing() {
            self.wipe_save()?;
            return Ok(false);
        }
        Ok(!self.is_save_data_empty()?)
    }

    /// Load a saved game if there is one.
    ///
    /// A missing file is created empty; a missing or empty file yields
    /// `None`, meaning a fresh game.
    pub fn load_or_init(&self) -> GameResult<Option<SaveData>> {
        if !self.has_save_data()? {
            return Ok(None);
        }
        self.load().map(Some)
    }

    /// Render the ship log text for a state.
    pub fn render(scene_id: &SceneId, tricks: &TrickSet) -> String {
        let mut out = format!("{SCENE_PREFIX}{}\n\n{LOG_HEADER}\n", escape(scene_id.as_str()));
        for trick in tricks {
            out.push_str(ENTRY_PREFIX);
            out.push_str(&escape(trick));
            out.push('\n');
        }
        out
    }

    /// Parse ship log text.
    ///
    /// Lines after the header that are not log entries are ignored.
    pub fn parse(text: &str) -> GameResult<SaveData> {
        let lines: Vec<&str> = text.lines().collect();
        if lines.len() < 3 {
            return Err(corrupted(format!("expected at least 3 lines, found {}", lines.len())));
        }

        let scene_id = lines[0]
            .strip_prefix(SCENE_PREFIX)
            .ok_or_else(|| corrupted("missing current scene id".to_string()))?;
        if scene_id.is_empty() {
            return Err(corrupted("empty scene id".to_string()));
        }
        if !lines[1].is_empty() {
            return Err(corrupted("expected a blank second line".to_string()));
        }
        if lines[2] != LOG_HEADER {
            return Err(corrupted("missing log header".to_string()));
        }

        let tricks = lines[3..]
            .iter()
            .filter_map(|line| line.strip_prefix(ENTRY_PREFIX))
            .map(unescape)
            .collect();

        Ok(SaveData {
            scene_id: SceneId::new(unescape(scene_id)),
            tricks,
        })
    }
}

fn escape(raw: &str) -> Cow<'_, str> {
    if !raw.contains(['\\', '\n', '\r']) {
        return Cow::Borrowed(raw);
    }
    let mut out = String::with_capacity(raw.len() + 2);
    for ch in raw.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            other => out.push(other),
        }
    }
    Cow::Owned(out)
}

fn unescape(stored: &str) -> String {
    let mut out = String::with_capacity(stored.len());
    let mut chars = stored.chars();
    while let Some(ch) = chars.next() {
        if ch != '\\' {
            out.push(ch);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            Some('\\') => out.push('\\'),
            Some(other) => {
                out.push('\\');
                out.push(other);
            }
            None => out.push('\\'),
        }
    }
    out
}

fn corrupted(reason: String) -> GameError {
    warn!(reason = %reason, "ship_log_corrupted");
    GameError::CorruptedSave(reason)
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use tempfile::TempDir;

    use super::*;

    fn tricks(names: &[&str]) -> TrickSet {
        names.iter().map(|n| n.to_string()).collect()
    }

    fn temp_store() -> (TempDir, SaveStore) {
        let dir = TempDir::new().unwrap();
        let store = SaveStore::new(dir.path().join("ship_log.txt"));
        (dir, store)
    }

    #[test]
    fn render_layout() {
        let text = SaveStore::render(&SceneId::new("observatory"), &tricks(&["Map", "Key"]));
        insta::assert_snapshot!(text.trim_end(), @r"
        current scene id: observatory

        --------LOG BEGINS BELOW--------
        LOG ENTRY: Key
        LOG ENTRY: Map
        ");
    }

    #[test]
    fn render_with_no_tricks_ends_at_header() {
        let text = SaveStore::render(&SceneId::new("end"), &TrickSet::new());
        assert_eq!(text, "current scene id: end\n\n--------LOG BEGINS BELOW--------\n");
    }

    #[test]
    fn parse_ignores_foreign_trailing_lines() {
        let text = "current scene id: a1\n\n--------LOG BEGINS BELOW--------\nLOG ENTRY: Key\nscribbled note\n\nLOG ENTRY: Map\n";
        let data = SaveStore::parse(text).unwrap();
        assert_eq!(data.scene_id, SceneId::new("a1"));
        assert_eq!(data.tricks, tricks(&["Key", "Map"]));
    }

    #[test]
    fn parse_rejects_short_file() {
        let err = SaveStore::parse("current scene id: a1\n").unwrap_err();
        assert!(matches!(err, GameError::CorruptedSave(_)));
    }

    #[test]
    fn parse_rejects_wrong_header() {
        let err = SaveStore::parse("scene: a1\n\n--------LOG BEGINS BELOW--------\n").unwrap_err();
        assert!(matches!(err, GameError::CorruptedSave(_)));

        let err = SaveStore::parse("current scene id: a1\n\n-- log --\n").unwrap_err();
        assert!(matches!(err, GameError::CorruptedSave(_)));

        let err = SaveStore::parse("current scene id: \n\n--------LOG BEGINS BELOW--------\n")
            .unwrap_err();
        assert!(matches!(err, GameError::CorruptedSave(_)));
    }

    #[test]
    fn save_then_load() {
        let (_dir, store) = temp_store();
        store.save(&SceneId::new("a1"), &tricks(&["Key"])).unwrap();
        let data = store.load().unwrap();
        assert_eq!(data.scene_id, SceneId::new("a1"));
        assert_eq!(data.tricks, tricks(&["Key"]));
    }

    #[test]
    fn save_overwrites_previous_state() {
        let (_dir, store) = temp_store();
        store.save(&SceneId::new("a1"), &tricks(&["Key", "Map"])).unwrap();
        store.save(&SceneId::new("b2"), &tricks(&["Key"])).unwrap();
        let data = store.load().unwrap();
        assert_eq!(data.scene_id, SceneId::new("b2"));
        assert_eq!(data.tricks, tricks(&["Key"]));
    }

    #[test]
    fn missing_and_empty_states() {
        let (_dir, store) = temp_store();
        assert!(store.is_save_file_missing());
        assert!(!store.is_save_data_empty().unwrap());

        store.wipe_save().unwrap();
        assert!(!store.is_save_file_missing());
        assert!(store.is_save_data_empty().unwrap());

        store.save(&SceneId::new("a1"), &TrickSet::new()).unwrap();
        assert!(!store.is_save_data_empty().unwrap());

        store.wipe_save().unwrap();
        assert!(store.is_save_data_empty().unwrap());
    }

    #[test]
    fn load_or_init_creates_empty_file() {
        let (_dir, store) = temp_store();
        assert_eq!(store.load_or_init().unwrap(), None);
        assert!(!store.is_save_file_missing());
        assert!(store.is_save_data_empty().unwrap());
        assert_eq!(store.load_or_init().unwrap(), None);
    }

    #[test]
    fn load_of_empty_file_is_corrupted() {
        let (_dir, store) = temp_store();
        store.wipe_save().unwrap();
        assert!(matches!(store.load(), Err(GameError::CorruptedSave(_))));
    }

    #[test]
    fn multi_line_names_survive_save_and_load() {
        let (_dir, store) = temp_store();
        let found = tricks(&["Key\nhidden under the desk", "Map\r\n", "C:\\charts\\n"]);
        store.save(&SceneId::new("desk\nleft drawer"), &found).unwrap();

        let text = std::fs::read_to_string(store.path()).unwrap();
        assert_eq!(text.lines().count(), 6);
        assert!(text.contains("LOG ENTRY: Key\\nhidden under the desk\n"));

        let data = store.load().unwrap();
        assert_eq!(data.scene_id, SceneId::new("desk\nleft drawer"));
        assert_eq!(data.tricks, found);
    }

    #[test]
    fn has_save_data_does_not_parse() {
        let (_dir, store) = temp_store();
        assert!(!store.has_save_data().unwrap());
        assert!(!store.is_save_file_missing());

        std::fs::write(store.path(), "garbage\n").unwrap();
        assert!(store.has_save_data().unwrap());
    }

    proptest! {
        #[test]
        fn render_parse_round_trip(
            scene in "[A-Za-z0-9_\\\\\n\r -]{1,16}",
            found in proptest::collection::btree_set("[A-Za-z][A-Za-z' \\\\\n\r]{0,12}", 0..6),
        ) {
            let scene_id = SceneId::new(scene);
            let text = SaveStore::render(&scene_id, &found);
            let data = SaveStore::parse(&text).unwrap();
            prop_assert_eq!(data.scene_id, scene_id);
            prop_assert_eq!(data.tricks, found);
        }
    }
}
