use serde::{Deserialize, Serialize};

fn default_generate_images() -> bool {
    true
}

#[derive(Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct UiConfig {
    /// Request an illustration after every successful lookup
    #[serde(default = "default_generate_images")]
    pub generate_images: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            generate_images: default_generate_images(),
        }
    }
}
