use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf};

use crate::client::DEFAULT_TIMEOUT_SECS;
use crate::lookup::DEFAULT_CITIES;

/// Top-level configuration stored on disk. Open-Meteo requires no API key,
/// so there are no credentials to manage.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Cities shown on the startup panel, in display order.
    #[serde(default = "default_cities")]
    pub default_cities: Vec<String>,

    /// Per-request timeout for all outbound calls.
    #[serde(default = "default_timeout_secs")]
    pub request_timeout_secs: u64,
}

fn default_cities() -> Vec<String> {
    DEFAULT_CITIES.iter().map(|c| c.to_string()).collect()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_cities: default_cities(),
            request_timeout_secs: default_timeout_secs(),
        }
    }
}

impl Config {
    /// Load config from disk, or return the defaults if it doesn't exist yet.
    pub fn load() -> Result<Self> {
        let path = Self::config_file_path()?;
        if !path.exists() {
            // First run: no config file.
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
        let dirs = ProjectDirs::from("dev", "weathernow", "weathernow-cli")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_builtin_city_list() {
        let cfg = Config::default();
        assert_eq!(cfg.default_cities, ["Delhi", "New York", "Mumbai", "Kolkata"]);
        assert_eq!(cfg.request_timeout_secs, DEFAULT_TIMEOUT_SECS);
    }

    #[test]
    fn empty_toml_falls_back_to_defaults() {
        let cfg: Config = toml::from_str("").expect("empty config must parse");
        assert_eq!(cfg.default_cities, Config::default().default_cities);
        assert_eq!(cfg.request_timeout_secs, DEFAULT_TIMEOUT_SECS);
    }

    #[test]
    fn partial_toml_keeps_other_defaults() {
        let cfg: Config = toml::from_str("request_timeout_secs = 3\n").unwrap();
        assert_eq!(cfg.request_timeout_secs, 3);
        assert_eq!(cfg.default_cities, Config::default().default_cities);
    }

    #[test]
    fn roundtrips_through_toml() {
        let mut cfg = Config::default();
        cfg.default_cities = vec!["Oslo".to_string(), "Lima".to_string()];

        let serialized = toml::to_string_pretty(&cfg).unwrap();
        let parsed: Config = toml::from_str(&serialized).unwrap();

        assert_eq!(parsed.default_cities, ["Oslo", "Lima"]);
        assert_eq!(parsed.request_timeout_secs, cfg.request_timeout_secs);
    }
}
