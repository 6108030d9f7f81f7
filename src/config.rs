use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::app_dirs::AppDirs;
use crate::error::Result;
use crate::session::{DEFAULT_EXERCISE_SECS, DEFAULT_REST_SECS, DEFAULT_ROUNDS};
use crate::settings::SettingsCollector;

/// Last used timer settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    pub exercise_secs: u32,
    pub rest_secs: u32,
    pub rounds: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            exercise_secs: DEFAULT_EXERCISE_SECS,
            rest_secs: DEFAULT_REST_SECS,
            rounds: DEFAULT_ROUNDS,
        }
    }
}

impl From<&SettingsCollector> for Config {
    fn from(settings: &SettingsCollector) -> Self {
        Self {
            exercise_secs: settings.exercise_secs(),
            rest_secs: settings.rest_secs(),
            rounds: settings.rounds(),
        }
    }
}

impl From<&Config> for SettingsCollector {
    fn from(cfg: &Config) -> Self {
        SettingsCollector::new(cfg.exercise_secs, cfg.rest_secs, cfg.rounds)
    }
}

pub trait ConfigStore {
    /// Never fails: a missing or unreadable file yields the defaults.
    fn load(&self) -> Config;
    fn save(&self, cfg: &Config) -> Result<()>;
}

#[derive(Debug, Clone)]
pub struct FileConfigStore {
    path: PathBuf,
}

impl FileConfigStore {
    pub fn new() -> Self {
        let path = AppDirs::config_path().unwrap_or_else(|| PathBuf::from("sporting_config.json"));
        Self { path }
    }

    pub fn with_path<P: AsRef<Path>>(p: P) -> Self {
        Self {
            path: p.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for FileConfigStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigStore for FileConfigStore {
    fn load(&self) -> Config {
        match fs::read(&self.path) {
            Ok(bytes) => serde_json::from_slice::<Config>(&bytes).unwrap_or_else(|err| {
                log::warn!("ignoring unreadable config {}: {err}", self.path.display());
                Config::default()
            }),
            Err(_) => Config::default(),
        }
    }

    fn save(&self, cfg: &Config) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let data = serde_json::to_vec_pretty(cfg)?;
        fs::write(&self.path, data)?;
        log::debug!("saved settings to {}", self.path.display());
        Ok(())
    }
}
