use lingo_types::Language;
use serde::{Deserialize, Serialize};

use crate::store::{KeyValueStore, StoreError, load_json, save_json};

pub const SETTINGS_KEY: &str = "lingopop_config";

/// User language choice, persisted across runs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    pub native_lang: Language,
    pub target_lang: Language,
    pub has_onboarded: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            native_lang: Language::ChineseSimplified,
            target_lang: Language::English,
            has_onboarded: false,
        }
    }
}

impl Settings {
    /// Load once at startup; unreadable data falls back to defaults
    pub fn load(store: &dyn KeyValueStore) -> Self {
        match load_json::<Settings>(store, SETTINGS_KEY) {
            Ok(Some(settings)) => settings,
            Ok(None) => Self::default(),
            Err(e) => {
                tracing::warn!("Stored settings unreadable, using defaults: {}", e);
                Self::default()
            }
        }
    }

    /// Written after every mutation
    pub fn save(&self, store: &dyn KeyValueStore) -> Result<(), StoreError> {
        save_json(store, SETTINGS_KEY, self)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::store::{FileStore, MemoryStore};

    #[test]
    fn test_roundtrip_through_file_store() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path());

        let settings = Settings {
            native_lang: Language::Korean,
            target_lang: Language::Arabic,
            has_onboarded: true,
        };
        settings.save(&store).unwrap();

        assert_eq!(Settings::load(&store), settings);
    }

    #[test]
    fn test_wire_format() {
        let store = MemoryStore::new();
        Settings::default().save(&store).unwrap();

        let raw: serde_json::Value =
            serde_json::from_str(&store.get(SETTINGS_KEY).unwrap().unwrap()).unwrap();
        assert_eq!(
            raw,
            serde_json::json!({
                "nativeLang": "Chinese (Simplified)",
                "targetLang": "English",
                "hasOnboarded": false
            })
        );
    }

    #[test]
    fn test_missing_or_corrupt_falls_back_to_default() {
        let store = MemoryStore::new();
        assert_eq!(Settings::load(&store), Settings::default());

        store.set(SETTINGS_KEY, "{not json").unwrap();
        assert_eq!(Settings::load(&store), Settings::default());
    }
}
