//! File-backed persistence for the one mode key.
//!
//! The stored value is a single word ("dark" or "light") in
//! `$HOME/.config/orrery/mode`. Load and save failures are non-fatal;
//! callers fall back to the default mode.

use crate::theme::Mode;
use std::io;
use std::path::PathBuf;

pub struct ModeStore {
    path: PathBuf,
}

impl ModeStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// The store under the user's config directory.
    pub fn at_default_location() -> Self {
        Self::new(dirs_config().join("orrery").join("mode"))
    }

    /// Read the persisted mode. None when the file is absent, unreadable
    /// or holds an unrecognized value.
    pub fn load(&self) -> Option<Mode> {
        let raw = match std::fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) => {
                log::debug!("no persisted mode at {}: {}", self.path.display(), err);
                return None;
            }
        };
        match Mode::parse(raw.trim()) {
            Some(mode) => Some(mode),
            None => {
                log::warn!("unrecognized persisted mode {:?}, ignoring", raw.trim());
                None
            }
        }
    }

    /// Persist the mode, creating the config directory if needed.
    pub fn save(&self, mode: Mode) -> io::Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.path, mode.as_str())
    }
}

fn dirs_config() -> PathBuf {
    if let Some(home) = std::env::var_os("HOME") {
        PathBuf::from(home).join(".config")
    } else {
        PathBuf::from(".")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_store(name: &str) -> ModeStore {
        let path = std::env::temp_dir()
            .join(format!("orrery-test-{}", std::process::id()))
            .join(name);
        ModeStore::new(path)
    }

    #[test]
    fn load_without_saved_value_is_none() {
        let store = temp_store("never-written");
        assert_eq!(store.load(), None);
        // callers default dark
        assert_eq!(store.load().unwrap_or_default(), Mode::Dark);
    }

    #[test]
    fn save_then_load_round_trips() {
        let store = temp_store("roundtrip");
        store.save(Mode::Light).unwrap();
        assert_eq!(store.load(), Some(Mode::Light));
    }

    #[test]
    fn double_toggle_restores_persisted_value() {
        let store = temp_store("double-toggle");
        store.save(Mode::Dark).unwrap();
        let original = store.load().unwrap_or_default();

        store.save(original.opposite()).unwrap();
        store.save(original.opposite().opposite()).unwrap();

        assert_eq!(store.load(), Some(original));
    }

    #[test]
    fn unrecognized_content_is_ignored() {
        let store = temp_store("garbage");
        if let Some(parent) = store.path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(&store.path, "sepia").unwrap();
        assert_eq!(store.load(), None);
    }
}
