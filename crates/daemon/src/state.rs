use std::{fs, path::PathBuf};

use serde::{Deserialize, Serialize};

use crate::service_config::DEFAULT_API_PORT;

pub const APP_NAME: &str = "jsonstash";
pub const CONFIG_FILE_NAME: &str = "config.toml";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Port for the API server
    #[serde(default = "default_api_port")]
    pub api_port: u16,
    /// Default log level for the daemon (error, warn, info, debug, trace)
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_api_port() -> u16 {
    DEFAULT_API_PORT
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_port: default_api_port(),
            log_level: default_log_level(),
        }
    }
}

impl AppConfig {
    /// Parsed log level, falling back to INFO on anything unrecognised
    pub fn tracing_level(&self) -> tracing::Level {
        self.log_level.parse().unwrap_or(tracing::Level::INFO)
    }
}

#[derive(Debug, Clone)]
pub struct AppState {
    /// Path to the config directory (~/.jsonstash)
    pub config_dir: PathBuf,
    /// Path to the config file
    pub config_path: PathBuf,
    /// Loaded configuration
    pub config: AppConfig,
}

impl AppState {
    /// Get the config directory path (custom or default ~/.jsonstash)
    pub fn config_dir(custom_path: Option<PathBuf>) -> Result<PathBuf, StateError> {
        if let Some(path) = custom_path {
            return Ok(path);
        }

        let home = dirs::home_dir().ok_or(StateError::NoHomeDirectory)?;
        Ok(home.join(format!(".{}", APP_NAME)))
    }

    /// Initialize a new config directory
    pub fn init(
        custom_path: Option<PathBuf>,
        config: Option<AppConfig>,
    ) -> Result<Self, StateError> {
        let config_dir = Self::config_dir(custom_path)?;
        let config_path = config_dir.join(CONFIG_FILE_NAME);

        if config_path.exists() {
            return Err(StateError::AlreadyInitialized);
        }

        fs::create_dir_all(&config_dir)?;

        let config = config.unwrap_or_default();
        let config_toml = toml::to_string_pretty(&config)?;
        fs::write(&config_path, config_toml)?;

        Ok(Self {
            config_dir,
            config_path,
            config,
        })
    }

    /// Load existing state from the config directory
    pub fn load(custom_path: Option<PathBuf>) -> Result<Self, StateError> {
        let config_dir = Self::config_dir(custom_path)?;
        let config_path = config_dir.join(CONFIG_FILE_NAME);

        if !config_path.exists() {
            return Err(StateError::NotInitialized);
        }

        let config_toml = fs::read_to_string(&config_path)?;
        let config: AppConfig = toml::from_str(&config_toml)?;

        Ok(Self {
            config_dir,
            config_path,
            config,
        })
    }

    /// Load the config directory, or fall back to defaults if it was never
    ///  initialized. The store is in-memory, so a config file is optional.
    pub fn load_or_default(custom_path: Option<PathBuf>) -> Result<Self, StateError> {
        match Self::load(custom_path.clone()) {
            Err(StateError::NotInitialized) => {
                let config_dir = Self::config_dir(custom_path)?;
                Ok(Self {
                    config_path: config_dir.join(CONFIG_FILE_NAME),
                    config_dir,
                    config: AppConfig::default(),
                })
            }
            other => other,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum StateError {
    #[error("jsonstash directory not initialized. Run 'jsonstash init' first")]
    NotInitialized,

    #[error("jsonstash directory already initialized")]
    AlreadyInitialized,

    #[error("no home directory found")]
    NoHomeDirectory,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML serialization error: {0}")]
    TomlSer(#[from] toml::ser::Error),

    #[error("TOML deserialization error: {0}")]
    TomlDe(#[from] toml::de::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("stash");

        let config = AppConfig {
            api_port: 9123,
            log_level: "debug".to_string(),
        };
        let state = AppState::init(Some(path.clone()), Some(config.clone())).unwrap();
        assert!(state.config_path.exists());

        let loaded = AppState::load(Some(path)).unwrap();
        assert_eq!(loaded.config, config);
        assert_eq!(loaded.config.tracing_level(), tracing::Level::DEBUG);
    }

    #[test]
    fn test_init_twice_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().to_path_buf();

        AppState::init(Some(path.clone()), None).unwrap();
        assert!(matches!(
            AppState::init(Some(path), None),
            Err(StateError::AlreadyInitialized)
        ));
    }

    #[test]
    fn test_load_missing_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("never-initialized");

        assert!(matches!(
            AppState::load(Some(path.clone())),
            Err(StateError::NotInitialized)
        ));

        let state = AppState::load_or_default(Some(path)).unwrap();
        assert_eq!(state.config, AppConfig::default());
        assert_eq!(state.config.api_port, DEFAULT_API_PORT);
    }

    #[test]
    fn test_partial_config_uses_field_defaults() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(CONFIG_FILE_NAME), "api_port = 7000\n").unwrap();

        let state = AppState::load(Some(dir.path().to_path_buf())).unwrap();
        assert_eq!(state.config.api_port, 7000);
        assert_eq!(state.config.log_level, "info");
    }

    #[test]
    fn test_unknown_log_level_defaults_to_info() {
        let config = AppConfig {
            log_level: "chatty".to_string(),
            ..AppConfig::default()
        };
        assert_eq!(config.tracing_level(), tracing::Level::INFO);
    }
}
