use std::fs;
use std::path::{Path, PathBuf};

use articulation_core::AssessmentConfig;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("failed to read settings from {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid settings in {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Default settings location: `<config dir>/articulation/settings.json`.
pub fn default_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("articulation").join("settings.json"))
}

/// Loads settings from an explicit file. Errors propagate.
pub fn load_from(path: &Path) -> Result<AssessmentConfig, SettingsError> {
    let json = fs::read_to_string(path).map_err(|source| SettingsError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&json).map_err(|source| SettingsError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Loads settings from the default location, falling back to defaults when
/// the file is missing or unreadable.
pub fn load() -> AssessmentConfig {
    default_path()
        .filter(|path| path.exists())
        .and_then(|path| match load_from(&path) {
            Ok(config) => Some(config),
            Err(e) => {
                log::warn!("Ignoring settings file: {e}");
                None
            }
        })
        .unwrap_or_default()
}
