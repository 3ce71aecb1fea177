//! Configuration management for device-specs
//!
//! Config file location:
//! - Linux: ~/.config/device-specs/config.toml
//! - macOS: ~/Library/Application Support/device-specs/config.toml
//! - Windows: %APPDATA%/device-specs/config.toml
//!
//! You can override the config location by setting `DEVICE_SPECS_CONFIG_PATH`.

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Probe source settings
    #[serde(default)]
    pub probe: ProbeConfig,
}

impl Config {
    /// Load configuration from file or create default
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if config_path.exists() {
            let content = fs::read_to_string(&config_path)
                .with_context(|| format!("Failed to read config from {}", config_path.display()))?;

            let config: Config = toml::from_str(&content).with_context(|| {
                format!("Failed to parse config from {}", config_path.display())
            })?;

            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path()?;

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let toml = toml::to_string_pretty(self).context("Failed to serialize config to TOML")?;

        fs::write(&config_path, toml)
            .with_context(|| format!("Failed to write config to {}", config_path.display()))?;

        Ok(())
    }

    /// Create default config file if it doesn't exist
    pub fn init() -> Result<Self> {
        let config = Self::load()?;

        let config_path = Self::config_path()?;
        if !config_path.exists() {
            config.save()?;
        }

        Ok(config)
    }

    /// Get the configuration file path
    pub fn config_path() -> Result<PathBuf> {
        if let Ok(path) = std::env::var("DEVICE_SPECS_CONFIG_PATH") {
            let trimmed = path.trim();
            if !trimmed.is_empty() {
                return Ok(PathBuf::from(trimmed));
            }
        }

        let proj_dirs = ProjectDirs::from("com", "forgemypc", "device-specs")
            .context("Could not determine project directories")?;

        Ok(proj_dirs.config_dir().join("config.toml"))
    }
}

/// Probe source configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProbeConfig {
    /// Mount point of the userdata partition whose capacity backs the
    /// storage tier.
    #[serde(default = "default_data_partition")]
    pub data_partition: PathBuf,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            data_partition: default_data_partition(),
        }
    }
}

fn default_data_partition() -> PathBuf {
    PathBuf::from("/data")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.probe.data_partition, PathBuf::from("/data"));
    }

    #[test]
    fn test_config_serialization() {
        let config = Config::default();
        let toml = toml::to_string(&config).unwrap();

        assert!(toml.contains("[probe]"));
        assert!(toml.contains("data_partition"));
    }

    #[test]
    fn test_config_round_trip() {
        let mut config = Config::default();
        config.probe.data_partition = PathBuf::from("/mnt/userdata");

        let toml = toml::to_string(&config).unwrap();
        let parsed: Config = toml::from_str(&toml).unwrap();
        assert_eq!(parsed.probe.data_partition, PathBuf::from("/mnt/userdata"));
    }

    // Single test for the env-override path: the variable is process-global,
    // so splitting this up would race under the parallel test runner.
    #[test]
    fn test_init_and_load_through_env_override() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::env::set_var("DEVICE_SPECS_CONFIG_PATH", &path);

        // First run: no file yet, init writes the defaults out.
        let mut config = Config::init().unwrap();
        assert!(path.exists());
        assert_eq!(config.probe.data_partition, PathBuf::from("/data"));

        // Saved edits come back on the next load.
        config.probe.data_partition = PathBuf::from("/mnt/userdata");
        config.save().unwrap();
        let loaded = Config::load().unwrap();
        assert_eq!(loaded.probe.data_partition, PathBuf::from("/mnt/userdata"));

        std::env::remove_var("DEVICE_SPECS_CONFIG_PATH");
    }
}
