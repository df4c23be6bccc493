//! Configuration for the `toast` command
//!
//! Optional TOML file supplying defaults that command-line flags override.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, ToastError};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub app_id: Option<String>,

    /// Audio name, resolved with `Audio::lookup`
    pub audio: Option<String>,

    /// Duration name, resolved with `Duration::lookup`
    pub duration: Option<String>,

    pub icon: Option<String>,

    /// PowerShell interpreter, e.g. `pwsh`
    pub powershell: Option<String>,
}

pub fn config_path() -> PathBuf {
    let mut path = dirs::config_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("toast");
    path.push("config.toml");
    path
}

/// Load the config from `path`, or from the default location.
///
/// A missing default file is not an error; a missing explicit file is.
pub fn load(path: Option<&Path>) -> Result<Config> {
    let (path, explicit) = match path {
        Some(path) => (path.to_path_buf(), true),
        None => (config_path(), false),
    };

    match fs::read_to_string(&path) {
        Ok(content) => parse(&content)
            .map_err(|e| ToastError::Config(format!("{}: {}", path.display(), e))),
        Err(e) if !explicit && e.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!("No config at {}, using defaults", path.display());
            Ok(Config::default())
        }
        Err(e) => Err(ToastError::Config(format!(
            "Failed to read {}: {}",
            path.display(),
            e
        ))),
    }
}

pub fn parse(content: &str) -> Result<Config> {
    toml::from_str(content).map_err(|e| ToastError::Config(e.to_string()))
}
