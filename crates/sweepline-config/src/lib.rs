//! Configuration management for sweepline.
//!
//! Loads configuration from TOML files with engine and replay sections.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use sweepline_engine::{EngineConfig, SwingDepth};

/// Configuration errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),
    #[error("Failed to parse config file: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("Invalid swing depth {0:?} (expected shallow, medium or deep)")]
    InvalidDepth(String),
}

/// Root configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub engine: EngineSection,
    pub replay: ReplaySection,
}

impl Config {
    /// Load configuration from a file path.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Load configuration from default locations.
    ///
    /// Searches in order:
    /// 1. `./sweepline.toml`
    /// 2. `~/.config/sweepline/sweepline.toml`
    ///
    /// Returns default config if no file found.
    pub fn load_default() -> Self {
        if let Ok(config) = Self::load("sweepline.toml") {
            return config;
        }

        if let Some(config_dir) = dirs::config_dir() {
            let config_path = config_dir.join("sweepline").join("sweepline.toml");
            if let Ok(config) = Self::load(&config_path) {
                return config;
            }
        }

        Self::default()
    }

    /// Save configuration to a file path.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Get the default config file path.
    pub fn default_path() -> PathBuf {
        PathBuf::from("sweepline.toml")
    }
}

/// Engine parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineSection {
    /// Pyramid depth: "shallow", "medium" or "deep".
    pub depth: String,
    /// Maximum level age in bars before eviction.
    pub max_level_age: usize,
}

impl Default for EngineSection {
    fn default() -> Self {
        Self {
            depth: "medium".to_string(),
            max_level_age: 2000,
        }
    }
}

impl EngineSection {
    /// Build the engine configuration from this section.
    pub fn engine_config(&self) -> Result<EngineConfig, ConfigError> {
        let depth = SwingDepth::parse(&self.depth)
            .ok_or_else(|| ConfigError::InvalidDepth(self.depth.clone()))?;
        Ok(EngineConfig::new(depth, self.max_level_age))
    }
}

/// Replay harness parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ReplaySection {
    /// Default CSV file to replay when none is given on the command line.
    pub csv_path: Option<PathBuf>,
    /// Log every confirmed swing, not only sweeps.
    pub log_swings: bool,
}

impl Default for ReplaySection {
    fn default() -> Self {
        Self {
            csv_path: None,
            log_swings: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.engine.depth, "medium");
        assert_eq!(config.engine.max_level_age, 2000);

        let engine = config.engine.engine_config().unwrap();
        assert_eq!(engine.depth, SwingDepth::Medium);
    }

    #[test]
    fn test_parse_toml() {
        let toml = r#"
[engine]
depth = "deep"
max_level_age = 500

[replay]
log_swings = true
"#;
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.engine.depth, "deep");
        assert_eq!(config.engine.max_level_age, 500);
        assert!(config.replay.log_swings);

        let engine = config.engine.engine_config().unwrap();
        assert_eq!(engine.depth, SwingDepth::Deep);
        assert_eq!(engine.max_level_age, 500);
    }

    #[test]
    fn test_invalid_depth_is_rejected() {
        let config = Config {
            engine: EngineSection {
                depth: "bottomless".to_string(),
                max_level_age: 100,
            },
            replay: ReplaySection::default(),
        };
        assert!(matches!(
            config.engine.engine_config(),
            Err(ConfigError::InvalidDepth(_))
        ));
    }
}
