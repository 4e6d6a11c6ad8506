//! Configuration management for orgkit

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::{ConfigError, Result};

/// Application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// GitHub access token (classic PAT or fine-grained token)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,

    /// Default organization login
    #[serde(skip_serializing_if = "Option::is_none")]
    pub org: Option<String>,

    /// User preferences
    #[serde(default)]
    pub preferences: Preferences,
}

/// User preferences
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Preferences {
    /// Default output format
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
}

/// A partial configuration update with named optional fields.
///
/// Fields that are `None` leave the current value untouched; fields that are
/// `Some` replace it. Applied via [`Config::apply`], which returns a new
/// value rather than mutating in place.
#[derive(Debug, Clone, Default)]
pub struct ConfigUpdate {
    pub token: Option<String>,
    pub org: Option<String>,
    pub format: Option<String>,
}

impl Config {
    /// Get the default config file path
    pub fn default_path() -> Result<PathBuf> {
        let home = dirs::home_dir().ok_or(ConfigError::Invalid(
            "Could not determine home directory".to_string(),
        ))?;

        Ok(home.join(".orgkit").join("config.yaml"))
    }

    /// Resolve the config path, honoring an optional override
    pub fn resolve_path(path_override: Option<&str>) -> Result<PathBuf> {
        match path_override {
            Some(p) => Ok(PathBuf::from(p)),
            None => Self::default_path(),
        }
    }

    /// Load configuration, honoring an optional path override
    pub fn load_at(path_override: Option<&str>) -> Result<Self> {
        Self::load_from(Self::resolve_path(path_override)?)
    }

    /// Load configuration from a specific path
    pub fn load_from(path: PathBuf) -> Result<Self> {
        if !path.exists() {
            return Err(ConfigError::NotFound.into());
        }

        let contents = std::fs::read_to_string(&path)?;
        let config: Config = serde_yaml::from_str(&contents).map_err(ConfigError::from)?;

        Ok(config)
    }

    /// Save configuration, honoring an optional path override
    pub fn save_at(&self, path_override: Option<&str>) -> Result<()> {
        self.save_to(Self::resolve_path(path_override)?)
    }

    /// Save configuration to a specific path
    pub fn save_to(&self, path: PathBuf) -> Result<()> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents = serde_yaml::to_string(self)
            .map_err(|e| ConfigError::SaveError(e.to_string()))?;

        std::fs::write(&path, contents)?;

        // The token lives in this file, so restrict it to the owner on Unix
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mut perms = std::fs::metadata(&path)?.permissions();
            perms.set_mode(0o600);
            std::fs::set_permissions(&path, perms)?;
        }

        Ok(())
    }

    /// Apply a partial update, returning the merged configuration
    pub fn apply(&self, update: ConfigUpdate) -> Config {
        Config {
            token: update.token.or_else(|| self.token.clone()),
            org: update.org.or_else(|| self.org.clone()),
            preferences: Preferences {
                format: update.format.or_else(|| self.preferences.format.clone()),
            },
        }
    }

    /// Validate that required authentication configuration is present
    pub fn validate_auth(&self) -> Result<()> {
        if self.token.is_none() {
            return Err(ConfigError::MissingToken.into());
        }
        Ok(())
    }
}
