//! Configuration and input file loading for the CLI
//!
//! This module finds the layout configuration from various locations
//! (explicit path, local directory, platform config directory) and reads
//! TOML documents into library types.

use std::{
    fs,
    path::{Path, PathBuf},
};

use directories::ProjectDirs;
use log::{debug, info};
use serde::de::DeserializeOwned;

use chordbox::config::ChordBoxOptions;

use crate::error::{CliError, FileKind};

const LOCAL_CONFIG: &str = "chordbox/config.toml";

/// Find and load layout options from various locations
///
/// Search order:
/// 1. Explicit path if provided
/// 2. Local project directory (chordbox/config.toml)
/// 3. Platform-specific config directory
/// 4. Default options if none found
///
/// # Errors
///
/// Returns error if:
/// - Explicit path is provided but file doesn't exist
/// - Config file exists but cannot be read or parsed
pub fn load_config(explicit_path: Option<impl AsRef<Path>>) -> Result<ChordBoxOptions, CliError> {
    if let Some(path) = explicit_path {
        let path = path.as_ref();
        info!(path = path.display().to_string(); "Loading configuration from explicit path");
        if !path.exists() {
            return Err(CliError::MissingConfig(path.to_path_buf()));
        }
        return read_toml(path, FileKind::Config);
    }

    let local_config = Path::new(LOCAL_CONFIG);
    if local_config.exists() {
        info!(path = local_config.display().to_string(); "Loading configuration from local path");
        return read_toml(local_config, FileKind::Config);
    }

    if let Some(system_config) = system_config_path() {
        if system_config.exists() {
            info!(path = system_config.display().to_string(); "Loading configuration from system path");
            return read_toml(&system_config, FileKind::Config);
        }
        debug!(path = system_config.display().to_string(); "System configuration file not found");
    } else {
        debug!("Could not determine platform-specific config directory");
    }

    debug!("No configuration file found, using default options");
    Ok(ChordBoxOptions::default())
}

fn system_config_path() -> Option<PathBuf> {
    ProjectDirs::from("com", "chordbox", "chordbox")
        .map(|dirs| dirs.config_dir().join("config.toml"))
}

/// Reads `path` and deserializes it as TOML.
///
/// Parse failures keep the file content so the report can show the span.
pub(crate) fn read_toml<T: DeserializeOwned>(path: &Path, kind: FileKind) -> Result<T, CliError> {
    let content = fs::read_to_string(path).map_err(|source| CliError::io(path, source))?;

    match toml::from_str(&content) {
        Ok(value) => Ok(value),
        Err(err) => {
            let message = err.message().to_string();
            let span = err.span();
            Err(CliError::parse(kind, path, content, message, span))
        }
    }
}
