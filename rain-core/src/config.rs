use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf};

use crate::model::DEFAULT_RAIN_CHANCE_PCT;
use crate::policy::PolicyId;

/// Top-level configuration stored on disk.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Optional default policy id, e.g. "standard" or "simple".
    pub default_policy: Option<String>,

    /// Initial chance-of-rain value used when none is given on a request.
    /// Absent means the built-in default of 50.
    pub default_rain_chance_pct: Option<i32>,
}

impl Config {
    /// Return the default policy as a strongly-typed PolicyId, if one is set.
    ///
    /// Errors only when the stored string names an unknown policy.
    pub fn default_policy_id(&self) -> Result<Option<PolicyId>> {
        match self.default_policy.as_deref() {
            None => Ok(None),
            Some(s) => PolicyId::try_from(s).map(Some),
        }
    }

    /// Store default policy as string.
    pub fn set_default_policy(&mut self, id: PolicyId) {
        self.default_policy = Some(id.as_str().to_string());
    }

    /// Chance-of-rain value to pre-fill when the user does not supply one.
    pub fn rain_chance_or_default(&self) -> i32 {
        self.default_rain_chance_pct.unwrap_or(DEFAULT_RAIN_CHANCE_PCT)
    }

    /// Load config from disk, or return an empty default if it doesn't exist yet.
    pub fn load() -> Result<Self> {
        let path = Self::config_file_path()?;
        if !path.exists() {
            // First run: no config file, return empty.
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let cfg: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(cfg)
    }

    /// Save config to disk, creating parent directories as needed.
    pub fn save(&self) -> Result<()> {
        let path = Self::config_file_path()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let toml =
            toml::to_string_pretty(self).context("Failed to serialize configuration to TOML")?;

        fs::write(&path, toml)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "rain-prediction", "rain-cli")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }
}
