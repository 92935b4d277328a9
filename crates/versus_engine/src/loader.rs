//! Character document loading.
//!
//! Characters live in a directory of individually-authored JSON documents,
//! one [`GameCharacter`] per file. Loading is partial-failure tolerant: a
//! document that fails to read or parse is logged and skipped, and the rest
//! of the roster still loads. Only a missing/unreadable directory is a hard
//! error. A key is therefore either fully loaded or absent — the engine
//! never sees a half-populated stat block.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, warn};

use crate::character::{CharacterKey, GameCharacter, Origin};

/// Raised when the character directory itself cannot be read.
#[derive(Debug, Error)]
#[error("failed to read character directory {}", path.display())]
pub struct LoaderError {
    pub path: PathBuf,
    #[source]
    pub source: io::Error,
}

/// Loads every parseable `*.json` character document under `dir`.
///
/// Documents are visited in filename order so the result is deterministic.
/// Non-JSON files are ignored; malformed documents are skipped with a
/// warning.
pub fn load_characters(dir: impl AsRef<Path>) -> Result<Vec<GameCharacter>, LoaderError> {
    let dir = dir.as_ref();
    let entries = fs::read_dir(dir).map_err(|source| LoaderError {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut files: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.extension().is_some_and(|ext| ext == "json"))
        .collect();
    files.sort();

    let mut characters = Vec::new();
    for path in &files {
        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(error) => {
                warn!(path = %path.display(), %error, "skipping unreadable character document");
                continue;
            }
        };
        match serde_json::from_str::<GameCharacter>(&text) {
            Ok(character) => {
                debug!(path = %path.display(), name = %character.name, "loaded character");
                characters.push(character);
            }
            Err(error) => {
                warn!(path = %path.display(), %error, "skipping malformed character document");
            }
        }
    }

    debug!(count = characters.len(), "character roster loaded");
    Ok(characters)
}

/// In-memory roster of loaded characters.
#[derive(Debug)]
pub struct CharacterStore {
    dir: PathBuf,
    characters: Vec<GameCharacter>,
}

impl CharacterStore {
    /// Loads the roster from `dir`.
    pub fn load(dir: impl AsRef<Path>) -> Result<Self, LoaderError> {
        let dir = dir.as_ref().to_path_buf();
        let characters = load_characters(&dir)?;
        Ok(Self { dir, characters })
    }

    /// Re-reads the directory, replacing the current roster.
    pub fn reload(&mut self) -> Result<(), LoaderError> {
        self.characters = load_characters(&self.dir)?;
        Ok(())
    }

    /// Every loaded character, in filename order.
    pub fn all(&self) -> &[GameCharacter] {
        &self.characters
    }

    pub fn len(&self) -> usize {
        self.characters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.characters.is_empty()
    }

    /// Find a character by name, case-insensitively.
    pub fn by_name(&self, name: &str) -> Option<&GameCharacter> {
        self.characters
            .iter()
            .find(|c| c.name.eq_ignore_ascii_case(name))
    }

    /// Characters from one origin.
    pub fn by_origin(&self, origin: Origin) -> Vec<&GameCharacter> {
        self.characters
            .iter()
            .filter(|c| c.origin == origin)
            .collect()
    }

    /// Distinct origins present in the roster, sorted by display name.
    pub fn origins(&self) -> Vec<Origin> {
        let mut origins: Vec<Origin> = Vec::new();
        for character in &self.characters {
            if !origins.contains(&character.origin) {
                origins.push(character.origin);
            }
        }
        origins.sort_by_key(|o| o.display_name());
        origins
    }

    /// Characters whose name, or any key name, contains `query`
    /// (case-insensitive). An empty query matches everything.
    pub fn search(&self, query: &str) -> Vec<&GameCharacter> {
        let query = query.to_ascii_lowercase();
        self.characters
            .iter()
            .filter(|c| {
                c.name.to_ascii_lowercase().contains(&query)
                    || c.keys
                        .iter()
                        .any(|k| k.name.to_ascii_lowercase().contains(&query))
            })
            .collect()
    }

    /// Resolve a battle selection: a character by name, and either a named
    /// key or the character's first key.
    pub fn select(
        &self,
        character: &str,
        key: Option<&str>,
    ) -> Option<(&GameCharacter, &CharacterKey)> {
        let character = self.by_name(character)?;
        let key = match key {
            Some(name) => character.key(name)?,
            None => character.keys.first()?,
        };
        Some((character, key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    const HULK: &str = r#"{
        "name": "Hulk",
        "origin": "MARVEL",
        "gender": "MALE",
        "keys": [{
            "name": "Savage Hulk",
            "statTiers": {
                "tier": {"level": "Low 6-B"},
                "attackPotency": {"level": "Small Country"},
                "speed": {"level": "Massively Hypersonic"},
                "liftingStrength": {"level": "Class T"},
                "strikingStrength": {"level": "Small Country level"},
                "durability": {"level": "Small Country"},
                "intelligence": {"level": "Below Average"},
                "range": {"level": "Standard Melee Range"},
                "stamina": {"level": "Superhuman"}
            }
        }]
    }"#;

    const FLASH: &str = r#"{
        "name": "Flash",
        "origin": "DC",
        "gender": "MALE",
        "keys": [
            {
                "name": "Barry Allen",
                "statTiers": {
                    "tier": {"level": "8-C"},
                    "attackPotency": {"level": "Building"},
                    "speed": {"level": "Massively FTL+", "modifier": "AT_LEAST"},
                    "liftingStrength": {"level": "Superhuman"},
                    "strikingStrength": {"level": "Building level"},
                    "durability": {"level": "Building"},
                    "intelligence": {"level": "Gifted"},
                    "range": {"level": "Standard Melee Range"},
                    "stamina": {"level": "Superhuman"}
                }
            },
            {
                "name": "Wally West",
                "statTiers": {
                    "tier": {"level": "8-C"},
                    "attackPotency": {"level": "Building"},
                    "speed": {"level": "Massively FTL+"},
                    "liftingStrength": {"level": "Superhuman"},
                    "strikingStrength": {"level": "Building level"},
                    "durability": {"level": "Building"},
                    "intelligence": {"level": "Above Average"},
                    "range": {"level": "Standard Melee Range"},
                    "stamina": {"level": "Superhuman"}
                }
            }
        ]
    }"#;

    #[test]
    fn loads_a_directory_and_skips_broken_documents() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("hulk.json"), HULK).unwrap();
        fs::write(dir.path().join("flash.json"), FLASH).unwrap();
        fs::write(dir.path().join("broken.json"), "{ not json").unwrap();
        fs::write(dir.path().join("wrong_shape.json"), r#"{"name": "X"}"#).unwrap();
        fs::write(dir.path().join("notes.txt"), "ignored").unwrap();

        let characters = load_characters(dir.path()).unwrap();
        // Filename order: flash before hulk; broken documents skipped.
        let names: Vec<&str> = characters.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Flash", "Hulk"]);
    }

    #[test]
    fn missing_directory_is_a_hard_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope");
        let error = load_characters(&missing).unwrap_err();
        assert_eq!(error.path, missing);
    }

    #[test]
    fn store_lookups() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("hulk.json"), HULK).unwrap();
        fs::write(dir.path().join("flash.json"), FLASH).unwrap();

        let store = CharacterStore::load(dir.path()).unwrap();
        assert_eq!(store.len(), 2);
        assert!(store.by_name("hulk").is_some());
        assert!(store.by_name("HULK").is_some());
        assert!(store.by_name("Thor").is_none());

        assert_eq!(store.by_origin(Origin::Dc).len(), 1);
        assert_eq!(store.origins(), vec![Origin::Dc, Origin::Marvel]);

        assert_eq!(store.search("wally").len(), 1);
        assert_eq!(store.search("").len(), 2);

        let (character, key) = store.select("flash", Some("wally west")).unwrap();
        assert_eq!(character.name, "Flash");
        assert_eq!(key.name, "Wally West");
        let (_, first) = store.select("flash", None).unwrap();
        assert_eq!(first.name, "Barry Allen");
        assert!(store.select("flash", Some("jay")).is_none());
    }

    #[test]
    fn store_reload_picks_up_new_documents() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("hulk.json"), HULK).unwrap();
        let mut store = CharacterStore::load(dir.path()).unwrap();
        assert_eq!(store.len(), 1);

        fs::write(dir.path().join("flash.json"), FLASH).unwrap();
        store.reload().unwrap();
        assert_eq!(store.len(), 2);
    }
}
