pub mod types;

pub use types::*;

use crate::error::AppError;
use crate::profile::Profile;
use crate::variant::Variant;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Tier boundaries used for picking
    #[serde(default)]
    pub profile: Profile,
    /// Output settings
    #[serde(default)]
    pub output: OutputConfig,
}

impl AppConfig {
    /// Load configuration from the default TOML file, or fall back to defaults
    pub fn load() -> Self {
        let config_path = Self::config_path();

        if config_path.exists() {
            match Self::load_from_file(&config_path) {
                Ok(config) => {
                    info!("Loaded config from {}", config_path.display());
                    return config;
                }
                Err(e) => {
                    warn!("Failed to load config: {}. Using defaults.", e);
                }
            }
        }

        Self::default()
    }

    /// Save configuration to a TOML file
    pub fn save_to(&self, path: &Path) -> Result<(), AppError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                AppError::Config(format!("Failed to create config directory: {}", e))
            })?;
        }

        let toml_string = toml::to_string_pretty(self)?;
        std::fs::write(path, toml_string)
            .map_err(|e| AppError::Config(format!("Failed to write config file: {}", e)))?;

        info!("Saved config to {}", path.display());
        Ok(())
    }

    /// Load and validate configuration from a specific file
    pub fn load_from_file(path: &Path) -> Result<Self, AppError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| AppError::Config(format!("Failed to read config file: {}", e)))?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Get the default configuration file path
    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("avpick")
            .join("config.toml")
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), AppError> {
        let Profile { high, medium, low } = &self.profile;
        check_descending("resolution", [high, medium, low], |v| v.resolution)?;
        check_descending("audio_bitrate", [high, medium, low], |v| v.audio_bitrate)?;
        Ok(())
    }
}

/// Populated values must not grow from high to low
fn check_descending(
    field: &str,
    refs: [&Variant; 3],
    value: impl Fn(&Variant) -> u32,
) -> Result<(), AppError> {
    let populated: Vec<u32> = refs.iter().map(|&v| value(v)).filter(|&x| x != 0).collect();
    if populated.windows(2).any(|w| w[0] < w[1]) {
        return Err(AppError::Config(format!(
            "Profile {} must not increase from high to low",
            field
        )));
    }
    Ok(())
}
