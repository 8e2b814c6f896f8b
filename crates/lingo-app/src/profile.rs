use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use lingo_config::Config;
use serde::{Deserialize, Serialize};

pub const MAIN_PROFILE: &str = "main";

/// Defaults shipped next to the binary, else the built-in ones
fn load_repo_default_config() -> Config {
    match fs::read_to_string("config.json") {
        Ok(data) => match serde_json::from_str(&data) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("Ignoring malformed config.json: {}", e);
                Config::default()
            }
        },
        Err(_) => {
            tracing::debug!("No config.json in working directory, using built-in defaults");
            Config::default()
        }
    }
}

/// `<config_dir>/LingoPop/profiles`
pub fn default_profiles_dir() -> anyhow::Result<PathBuf> {
    let base = dirs::config_dir().context("no config directory for this platform")?;
    Ok(base.join("LingoPop").join("profiles"))
}

#[derive(Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub value: Config,
}

/// Named `Config` snapshots stored as JSON files in one directory
pub struct Profiles {
    dir: PathBuf,
}

impl Profiles {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path(&self, name: &str) -> PathBuf {
        self.dir.join(format!("{name}.json"))
    }

    fn read(&self, path: &Path) -> anyhow::Result<Config> {
        let data =
            fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
        let profile: Profile = serde_json::from_str(&data)
            .with_context(|| format!("parsing profile {}", path.display()))?;
        Ok(profile.value)
    }

    fn write(&self, name: &str, config: Config) -> anyhow::Result<PathBuf> {
        let path = self.path(name);
        let profile = Profile {
            name: name.into(),
            value: config,
        };
        fs::write(&path, serde_json::to_string_pretty(&profile)?)
            .with_context(|| format!("writing {}", path.display()))?;
        Ok(path)
    }

    /// Create the folder and the main profile if missing
    pub fn init(&self) -> anyhow::Result<()> {
        fs::create_dir_all(&self.dir)
            .with_context(|| format!("creating {}", self.dir.display()))?;

        if !self.path(MAIN_PROFILE).exists() {
            self.write(MAIN_PROFILE, load_repo_default_config())?;
            tracing::info!("Created main profile in {}", self.dir.display());
        }

        Ok(())
    }

    /// Load `name`, falling back to main and then to the shipped defaults
    pub fn load(&self, name: &str) -> anyhow::Result<Config> {
        let path = self.path(name);
        if path.exists() {
            return self.read(&path);
        }

        tracing::warn!("Profile {name} not found, falling back to main profile");
        let main = self.path(MAIN_PROFILE);
        if main.exists() {
            self.read(&main)
        } else {
            Ok(load_repo_default_config())
        }
    }

    /// New profile cloned from main
    pub fn add_from_main(&self, name: &str) -> anyhow::Result<PathBuf> {
        let config = self.load(MAIN_PROFILE)?;
        let path = self.write(name, config)?;
        tracing::info!("Created new profile: {name}");
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_creates_main_once() {
        let dir = tempfile::tempdir().unwrap();
        let profiles = Profiles::new(dir.path().join("profiles"));

        profiles.init().unwrap();
        let main = dir.path().join("profiles").join("main.json");
        assert!(main.exists());

        fs::write(
            &main,
            r#"{ "name": "main", "value": { "backend": { "voice": "Puck" } } }"#,
        )
        .unwrap();
        profiles.init().unwrap();

        assert_eq!(profiles.load(MAIN_PROFILE).unwrap().backend.voice, "Puck");
    }

    #[test]
    fn test_missing_profile_falls_back_to_main() {
        let dir = tempfile::tempdir().unwrap();
        let profiles = Profiles::new(dir.path());
        profiles.init().unwrap();

        let path = profiles.add_from_main("travel").unwrap();
        assert!(path.ends_with("travel.json"));

        let config = profiles.load("nope").unwrap();
        assert_eq!(config.backend.voice, "Kore");
    }

    #[test]
    fn test_corrupt_profile_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let profiles = Profiles::new(dir.path());
        fs::write(dir.path().join("broken.json"), "{").unwrap();

        assert!(profiles.load("broken").is_err());
    }
}
