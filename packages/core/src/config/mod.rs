//! Configuration management
//!
//! Loading, validation, and per-user paths.

pub mod paths;
pub mod schema;
pub mod validation;

pub use schema::Config;
pub use validation::{ValidationError, display_validation_error, validate_config};

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// Errors while loading the config file
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Invalid JSON in {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid value for {}: {}", .0.field, .0.message)]
    Invalid(ValidationError),
}

/// Load and validate the config at `path`
///
/// A missing file yields the defaults.
pub fn load_config_from(path: &Path) -> Result<Config, ConfigError> {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            debug!("No config at {}, using defaults", path.display());
            return Ok(Config::default());
        }
        Err(source) => {
            return Err(ConfigError::Read {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    let config: Config = serde_json::from_str(&raw).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    validate_config(&config).map_err(ConfigError::Invalid)?;

    debug!("Config loaded from {}", path.display());
    Ok(config)
}

/// Load the config from its default location, or the defaults
pub fn load_config_or_default() -> Result<Config, ConfigError> {
    match paths::get_config_path() {
        Some(path) => load_config_from(&path),
        None => Ok(Config::default()),
    }
}
