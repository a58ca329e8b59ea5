//! Persisted application settings.
//!
//! Settings live in a small TOML file under the `.depscreen` root. Unknown or
//! missing fields fall back to defaults so old config files keep loading as
//! the schema evolves.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::app_dirs;

/// Default filename used to store the app configuration.
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Filename of the classifier artifact inside the models directory.
pub const MODEL_FILE_NAME: &str = "depression_svm.json";

/// Application settings loaded from disk.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Explicit model artifact path; overrides the default models directory.
    #[serde(default)]
    pub model_path: Option<PathBuf>,
    /// Section shown when the app starts.
    #[serde(default)]
    pub last_section: Option<String>,
}

/// Errors that can occur while loading or saving the configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The application directory could not be resolved or created.
    #[error(transparent)]
    AppDir(#[from] app_dirs::AppDirError),
    /// The config file exists but could not be read or written.
    #[error("Failed to access config file {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    /// The config file contents are not valid TOML for this schema.
    #[error("Failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
    /// The config could not be serialized for writing.
    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Resolve the model artifact path from config, falling back to the default
/// location under the models directory.
pub fn resolve_model_path(config: &AppConfig) -> Result<PathBuf, ConfigError> {
    if let Some(path) = &config.model_path {
        return Ok(path.clone());
    }
    Ok(app_dirs::models_dir()?.join(MODEL_FILE_NAME))
}

/// Load the persisted config, returning defaults when no file exists yet.
pub fn load_or_default() -> Result<AppConfig, ConfigError> {
    let path = config_path()?;
    load_from(&path)
}

/// Persist the config to its default location.
pub fn save(config: &AppConfig) -> Result<(), ConfigError> {
    let path = config_path()?;
    save_to(config, &path)
}

fn config_path() -> Result<PathBuf, ConfigError> {
    Ok(app_dirs::app_root_dir()?.join(CONFIG_FILE_NAME))
}

fn load_from(path: &Path) -> Result<AppConfig, ConfigError> {
    let text = match std::fs::read_to_string(path) {
        Ok(text) => text,
        Err(source) if source.kind() == std::io::ErrorKind::NotFound => {
            return Ok(AppConfig::default());
        }
        Err(source) => {
            return Err(ConfigError::Io {
                path: path.to_path_buf(),
                source,
            });
        }
    };
    toml::from_str(&text).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

fn save_to(config: &AppConfig, path: &Path) -> Result<(), ConfigError> {
    let text = toml::to_string_pretty(config)?;
    std::fs::write(path, text).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn missing_file_loads_defaults() {
        let dir = tempdir().unwrap();
        let config = load_from(&dir.path().join("config.toml")).unwrap();
        assert!(config.model_path.is_none());
        assert!(config.last_section.is_none());
    }

    #[test]
    fn config_round_trips_through_toml() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let config = AppConfig {
            model_path: Some(PathBuf::from("/tmp/custom_model.json")),
            last_section: Some("Batch Evaluation".to_string()),
        };
        save_to(&config, &path).unwrap();
        let loaded = load_from(&path).unwrap();
        assert_eq!(loaded.model_path, config.model_path);
        assert_eq!(loaded.last_section, config.last_section);
    }

    #[test]
    fn tolerates_empty_config_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "").unwrap();
        let loaded = load_from(&path).unwrap();
        assert!(loaded.model_path.is_none());
    }

    #[test]
    fn explicit_model_path_wins() {
        let config = AppConfig {
            model_path: Some(PathBuf::from("/models/alt.json")),
            last_section: None,
        };
        let resolved = resolve_model_path(&config).unwrap();
        assert_eq!(resolved, PathBuf::from("/models/alt.json"));
    }
}
