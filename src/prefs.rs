//! Theme preference persistence.
//!
//! The only durable state in the application: a single-key JSON file
//! (`{"theme": "dark"}`) read once at startup and rewritten on every
//! toggle. An absent or unreadable file resolves to the default; a
//! failed write never interrupts the UI (callers surface it as a status
//! message).

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// The two-valued appearance preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    #[default]
    Dark,
    Light,
}

impl ThemePreference {
    /// The other of the two values.
    pub fn toggled(self) -> Self {
        match self {
            ThemePreference::Dark => ThemePreference::Light,
            ThemePreference::Light => ThemePreference::Dark,
        }
    }

    /// Display label, also the persisted form.
    pub fn label(&self) -> &'static str {
        match self {
            ThemePreference::Dark => "dark",
            ThemePreference::Light => "light",
        }
    }
}

/// On-disk shape of the preference file.
#[derive(Debug, Serialize, Deserialize)]
struct PrefFile {
    theme: ThemePreference,
}

/// Reads and writes the preference file at a fixed path.
#[derive(Debug, Clone)]
pub struct PrefStore {
    path: PathBuf,
}

impl PrefStore {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self { path: path.as_ref().to_path_buf() }
    }

    /// Path of the preference file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the stored preference.
    ///
    /// Returns `None` when the file is absent or unparsable; the caller
    /// decides the default.
    pub fn load(&self) -> Option<ThemePreference> {
        let raw = fs::read_to_string(&self.path).ok()?;
        let file: PrefFile = serde_json::from_str(&raw).ok()?;
        Some(file.theme)
    }

    /// Persist the given preference, replacing any previous value.
    pub fn save(&self, theme: ThemePreference) -> Result<()> {
        let json = serde_json::to_string_pretty(&PrefFile { theme })?;
        fs::write(&self.path, json)
            .with_context(|| format!("writing preference file {}", self.path.display()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_toggle_is_involutive() {
        assert_eq!(ThemePreference::Dark.toggled(), ThemePreference::Light);
        assert_eq!(ThemePreference::Dark.toggled().toggled(), ThemePreference::Dark);
    }

    #[test]
    fn test_absent_file_loads_none() {
        let dir = TempDir::new().unwrap();
        let store = PrefStore::new(dir.path().join("prefs.json"));
        assert!(store.load().is_none());
    }

    #[test]
    fn test_save_then_load_round_trips() {
        let dir = TempDir::new().unwrap();
        let store = PrefStore::new(dir.path().join("prefs.json"));

        store.save(ThemePreference::Light).unwrap();
        assert_eq!(store.load(), Some(ThemePreference::Light));

        // Toggling twice restores the persisted value
        store.save(store.load().unwrap().toggled()).unwrap();
        store.save(store.load().unwrap().toggled()).unwrap();
        assert_eq!(store.load(), Some(ThemePreference::Light));
    }

    #[test]
    fn test_corrupt_file_loads_none() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("prefs.json");
        std::fs::write(&path, "{not json").unwrap();

        let store = PrefStore::new(&path);
        assert!(store.load().is_none());
    }

    #[test]
    fn test_persisted_form_is_single_key() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("prefs.json");
        PrefStore::new(&path).save(ThemePreference::Dark).unwrap();

        let raw = std::fs::read_to_string(&path).unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(value, serde_json::json!({ "theme": "dark" }));
    }
}
