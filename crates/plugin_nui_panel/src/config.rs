//! Resource configuration loaded from a TOML file.
//!
//! The `[debug]` section feeds the conditional debug logger; the top-level
//! keys control the NUI command. A missing file is replaced with a written
//! default so server operators always have something to edit.

use debug_log::DebugConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

/// Errors that can occur while loading the resource configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read the configuration file
    #[error("Failed to read configuration {0}: {1}")]
    Read(PathBuf, std::io::Error),
    /// Failed to write the default configuration file
    #[error("Failed to write configuration {0}: {1}")]
    Write(PathBuf, std::io::Error),
    /// Configuration file is not valid TOML for this schema
    #[error("Failed to parse configuration {0}: {1}")]
    Parse(PathBuf, toml::de::Error),
    /// Default configuration could not be serialized
    #[error("Failed to serialize default configuration: {0}")]
    Serialize(toml::ser::Error),
}

fn default_enable_nui_command() -> bool {
    true
}

fn default_nui_command_name() -> String {
    "openNui".to_string()
}

/// Top-level configuration for the NUI panel resource.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourceConfig {
    /// Whether to register the command that opens the NUI panel
    #[serde(default = "default_enable_nui_command")]
    pub enable_nui_command: bool,
    /// Name of the in-game command, as typed by players
    #[serde(default = "default_nui_command_name")]
    pub nui_command_name: String,
    /// Conditional debug logging settings
    #[serde(default)]
    pub debug: DebugConfig,
}

impl Default for ResourceConfig {
    fn default() -> Self {
        Self {
            enable_nui_command: true,
            nui_command_name: default_nui_command_name(),
            debug: DebugConfig::default(),
        }
    }
}

impl ResourceConfig {
    /// Loads configuration from a TOML file.
    ///
    /// If the file doesn't exist, creates a default configuration file at
    /// the specified path and returns the default configuration.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration file
    ///
    /// # Returns
    ///
    /// The loaded or default configuration, or an error if loading or
    /// creation failed.
    pub async fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            let content = tokio::fs::read_to_string(path)
                .await
                .map_err(|e| ConfigError::Read(path.to_path_buf(), e))?;
            let config: ResourceConfig =
                toml::from_str(&content).map_err(|e| ConfigError::Parse(path.to_path_buf(), e))?;
            Ok(config)
        } else {
            let default_config = ResourceConfig::default();
            let toml_content =
                toml::to_string_pretty(&default_config).map_err(ConfigError::Serialize)?;
            tokio::fs::write(path, toml_content)
                .await
                .map_err(|e| ConfigError::Write(path.to_path_buf(), e))?;
            info!("Created default configuration file: {}", path.display());
            Ok(default_config)
        }
    }

    /// Validates the configuration for consistency and correctness.
    ///
    /// # Returns
    ///
    /// `Ok(())` if the configuration is valid, or an error string
    /// describing the issue.
    pub fn validate(&self) -> Result<(), String> {
        if self.nui_command_name.trim().is_empty() {
            return Err("NUI command name cannot be empty".to_string());
        }
        if self.nui_command_name.chars().any(char::is_whitespace) {
            return Err(format!(
                "NUI command name cannot contain whitespace: {:?}",
                self.nui_command_name
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use debug_log::{LogLevel, LogModule};
    use tempfile::tempdir;

    #[test]
    fn test_default_config() {
        let config = ResourceConfig::default();
        assert!(config.enable_nui_command);
        assert_eq!(config.nui_command_name, "openNui");
        assert!(!config.debug.enabled);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_toml_deserialization_with_defaults() {
        let config: ResourceConfig = toml::from_str(
            r#"
enable_nui_command = false
"#,
        )
        .unwrap();

        assert!(!config.enable_nui_command);
        assert_eq!(config.nui_command_name, "openNui");
        assert_eq!(config.debug, DebugConfig::default());
    }

    #[test]
    fn test_toml_deserialization_full() {
        let config: ResourceConfig = toml::from_str(
            r#"
enable_nui_command = true
nui_command_name = "panel"

[debug]
enabled = true
min_level = "debug"

[debug.modules]
client = false
"#,
        )
        .unwrap();

        assert_eq!(config.nui_command_name, "panel");
        assert!(config.debug.enabled);
        assert_eq!(config.debug.min_level, LogLevel::Debug);
        assert!(!config.debug.modules.is_enabled(LogModule::Client));
        assert!(config.debug.modules.is_enabled(LogModule::Server));
    }

    #[test]
    fn test_validation_rejects_empty_command_name() {
        let mut config = ResourceConfig::default();
        config.nui_command_name = "".to_string();
        assert!(config.validate().is_err());

        config.nui_command_name = "   ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_whitespace_in_command_name() {
        let mut config = ResourceConfig::default();
        config.nui_command_name = "open nui".to_string();
        let result = config.validate();
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("whitespace"));
    }

    #[tokio::test]
    async fn test_load_from_nonexistent_file_creates_default() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let config = ResourceConfig::load_from_file(&path).await.unwrap();
        assert_eq!(config, ResourceConfig::default());
        assert!(path.exists());

        // A second load reads the file that was just written.
        let reloaded = ResourceConfig::load_from_file(&path).await.unwrap();
        assert_eq!(reloaded, config);
    }

    #[tokio::test]
    async fn test_load_from_existing_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        tokio::fs::write(
            &path,
            r#"
enable_nui_command = false
nui_command_name = "ui"

[debug]
enabled = true
min_level = "warn"
"#,
        )
        .await
        .unwrap();

        let config = ResourceConfig::load_from_file(&path).await.unwrap();
        assert!(!config.enable_nui_command);
        assert_eq!(config.nui_command_name, "ui");
        assert!(config.debug.enabled);
        assert_eq!(config.debug.min_level, LogLevel::Warn);
    }

    #[tokio::test]
    async fn test_load_from_malformed_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        tokio::fs::write(&path, "enable_nui_command = \"not a bool\"")
            .await
            .unwrap();

        let result = ResourceConfig::load_from_file(&path).await;
        assert!(matches!(result, Err(ConfigError::Parse(_, _))));
    }
}
