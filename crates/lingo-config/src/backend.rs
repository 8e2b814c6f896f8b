use serde::{Deserialize, Serialize};

fn default_base_url() -> String {
    "https://generativelanguage.googleapis.com/v1beta".to_string()
}

fn default_timeout_seconds() -> u64 {
    60
}

fn default_voice() -> String {
    "Kore".to_string()
}

#[derive(Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct BackendConfig {
    /// Never persisted unless set explicitly in a profile
    #[serde(skip_serializing_if = "String::is_empty")]
    pub api_key: String,
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
    /// Prebuilt voice used for speech synthesis
    #[serde(default = "default_voice")]
    pub voice: String,
    pub models: ModelConfig,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: default_base_url(),
            timeout_seconds: default_timeout_seconds(),
            voice: default_voice(),
            models: ModelConfig::default(),
        }
    }
}

fn default_lookup_model() -> String {
    "gemini-3-pro-preview".to_string()
}

fn default_fallback_model() -> String {
    "gemini-3-flash-preview".to_string()
}

fn default_image_model() -> String {
    "gemini-2.5-flash-image".to_string()
}

fn default_flash_model() -> String {
    "gemini-2.5-flash".to_string()
}

fn default_speech_model() -> String {
    "gemini-2.5-flash-preview-tts".to_string()
}

/// Model identifier per operation
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(default)]
pub struct ModelConfig {
    #[serde(default = "default_lookup_model")]
    pub lookup: String,
    /// Used once when `lookup` is reported missing
    #[serde(default = "default_fallback_model")]
    pub lookup_fallback: String,
    #[serde(default = "default_image_model")]
    pub image: String,
    #[serde(default = "default_flash_model")]
    pub scan: String,
    #[serde(default = "default_flash_model")]
    pub story: String,
    #[serde(default = "default_flash_model")]
    pub chat: String,
    #[serde(default = "default_speech_model")]
    pub speech: String,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            lookup: default_lookup_model(),
            lookup_fallback: default_fallback_model(),
            image: default_image_model(),
            scan: default_flash_model(),
            story: default_flash_model(),
            chat: default_flash_model(),
            speech: default_speech_model(),
        }
    }
}
