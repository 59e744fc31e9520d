use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::app::settings::config_dirs::project_config_dir;

/// Persisted flags. Both default to off.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Post a confirmation after a successful rename/delete.
    pub verbose: bool,
    /// Post a diagnostic when an operation fails.
    pub err_report: bool,
}

/// Errors raised while loading or saving settings.
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("could not determine a configuration directory")]
    NoConfigDir,

    #[error("settings I/O error at `{path}`: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid settings file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("could not encode settings: {0}")]
    Encode(#[from] toml::ser::Error),
}

pub const SETTINGS_FILE: &str = "settings.toml";

/// Default location of the settings file.
pub fn settings_path() -> Result<PathBuf, SettingsError> {
    project_config_dir()
        .map(|d| d.join(SETTINGS_FILE))
        .ok_or(SettingsError::NoConfigDir)
}

/// Save `settings` to the default settings file.
pub fn save_settings(settings: &Settings) -> Result<PathBuf, SettingsError> {
    let path = settings_path()?;
    save_settings_to(settings, &path)?;
    Ok(path)
}

/// Save `settings` as TOML at `path`, creating parent directories.
pub fn save_settings_to(settings: &Settings, path: &Path) -> Result<(), SettingsError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|source| SettingsError::Io {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    let body = toml::to_string_pretty(settings)?;
    fs::write(path, body).map_err(|source| SettingsError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!("saved settings to {}", path.display());
    Ok(())
}
