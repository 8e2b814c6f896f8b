use std::env;

use serde::{Deserialize, Serialize};

use self::audio::AudioConfig;
use self::backend::BackendConfig;
use self::ui::UiConfig;

pub mod audio;
pub mod backend;
pub mod notebook;
pub mod settings;
pub mod store;
pub mod ui;

pub use notebook::Notebook;
pub use settings::Settings;
pub use store::{FileStore, KeyValueStore, MemoryStore, StoreError};

#[derive(Serialize, Deserialize, Clone, Default)]
#[serde(default)]
pub struct Config {
    pub backend: BackendConfig,
    pub ui: UiConfig,
    pub audio: AudioConfig,
}

impl Config {
    /// Defaults with environment overrides applied
    pub fn new() -> Self {
        let mut config = Self::default();
        config.apply_env();
        config
    }

    /// Environment wins over whatever a profile file holds
    pub fn apply_env(&mut self) {
        if let Some(api_key) = env::var("GEMINI_API_KEY")
            .or_else(|_| env::var("API_KEY"))
            .ok()
            .filter(|k| !k.is_empty())
        {
            self.backend.api_key = api_key;
        }

        if let Ok(base_url) = env::var("GEMINI_BASE_URL") {
            self.backend.base_url = base_url;
        }

        if let Some(timeout) = env::var("LINGO_TIMEOUT_SECONDS")
            .ok()
            .and_then(|v| v.parse().ok())
        {
            self.backend.timeout_seconds = timeout;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_profile_fills_defaults() {
        let config: Config =
            serde_json::from_str(r#"{ "backend": { "models": { "chat": "my-chat" } } }"#).unwrap();

        assert_eq!(config.backend.models.chat, "my-chat");
        assert_eq!(config.backend.models.lookup, "gemini-3-pro-preview");
        assert_eq!(config.backend.voice, "Kore");
        assert!(config.ui.generate_images);
    }

    #[test]
    fn test_api_key_not_written_when_empty() {
        let json = serde_json::to_value(Config::default()).unwrap();
        assert!(json["backend"].get("api_key").is_none());
    }
}
