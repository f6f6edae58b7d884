//! Configuration loading and data file resolution
//!
//! Resolution priority for the review data file:
//! 1. Command-line argument or environment variable (highest priority)
//! 2. TOML config file `data_file` key
//! 3. Compiled default (fallback)

use crate::{Error, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Default listening port
pub const DEFAULT_PORT: u16 = 8000;

/// Default review data file, relative to the working directory
pub const DEFAULT_DATA_FILE: &str = "data/reviews.csv";

/// Optional settings read from `config.toml`
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct TomlConfig {
    /// Review data file path
    pub data_file: Option<PathBuf>,
    /// Default tracing filter directive (overridden by `RUST_LOG`)
    pub log_level: Option<String>,
}

impl TomlConfig {
    /// Parse TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::Config(format!("Invalid TOML: {}", e)))
    }
}

/// Platform config file location: `<config_dir>/reviews/config.toml`
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("reviews").join("config.toml"))
}

/// Load the TOML config file
///
/// A missing file is not an error: a warning is logged and defaults are
/// returned. A file that exists but cannot be read or parsed is
/// [`Error::Config`].
pub fn load_toml_config(explicit_path: Option<&Path>) -> Result<TomlConfig> {
    let path = match explicit_path
        .map(Path::to_path_buf)
        .or_else(default_config_path)
    {
        Some(path) => path,
        None => {
            warn!("Could not determine config directory, using defaults");
            return Ok(TomlConfig::default());
        }
    };

    if !path.exists() {
        if explicit_path.is_some() {
            warn!("Config file not found: {}, using defaults", path.display());
        } else {
            info!("No config file at {}, using defaults", path.display());
        }
        return Ok(TomlConfig::default());
    }

    let content = std::fs::read_to_string(&path)
        .map_err(|e| Error::Config(format!("Failed to read {}: {}", path.display(), e)))?;

    let config = TomlConfig::from_toml_str(&content).map_err(|e| match e {
        Error::Config(msg) => Error::Config(format!("{} ({})", msg, path.display())),
        other => other,
    })?;

    info!("Loaded config file: {}", path.display());
    Ok(config)
}

/// Resolve the review data file path
pub fn resolve_data_file(cli_arg: Option<&Path>, toml_config: &TomlConfig) -> PathBuf {
    // Priority 1: Command-line argument / environment variable
    if let Some(path) = cli_arg {
        return path.to_path_buf();
    }

    // Priority 2: TOML config file
    if let Some(path) = &toml_config.data_file {
        return path.clone();
    }

    // Priority 3: Compiled default
    PathBuf::from(DEFAULT_DATA_FILE)
}
