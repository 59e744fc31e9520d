use std::fs;
use std::io;
use std::path::Path;

use crate::app::settings::write_settings::{settings_path, Settings, SettingsError};

/// Load settings from the default settings file.
///
/// A missing file is not an error: defaults (both flags off) are returned.
pub fn load_settings() -> Result<Settings, SettingsError> {
    load_settings_from(&settings_path()?)
}

/// Load settings from `path`, falling back to defaults if it does not exist.
pub fn load_settings_from(path: &Path) -> Result<Settings, SettingsError> {
    let body = match fs::read_to_string(path) {
        Ok(b) => b,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Settings::default()),
        Err(source) => {
            return Err(SettingsError::Io {
                path: path.to_path_buf(),
                source,
            })
        }
    };
    Ok(toml::from_str(&body)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::settings::write_settings::save_settings_to;
    use tempfile::tempdir;

    #[test]
    fn missing_file_yields_defaults() {
        let td = tempdir().expect("tempdir");
        let s = load_settings_from(&td.path().join("settings.toml")).expect("load");
        assert_eq!(s, Settings::default());
        assert!(!s.verbose && !s.err_report);
    }

    #[test]
    fn round_trips_through_toml() {
        let td = tempdir().expect("tempdir");
        let path = td.path().join("nested").join("settings.toml");
        let s = Settings { verbose: true, err_report: false };
        save_settings_to(&s, &path).expect("save");
        assert_eq!(load_settings_from(&path).expect("load"), s);
    }

    #[test]
    fn partial_file_fills_defaults() {
        let td = tempdir().expect("tempdir");
        let path = td.path().join("settings.toml");
        std::fs::write(&path, "err_report = true\n").expect("write");
        let s = load_settings_from(&path).expect("load");
        assert_eq!(s, Settings { verbose: false, err_report: true });
    }

    #[test]
    fn garbage_is_a_parse_error() {
        let td = tempdir().expect("tempdir");
        let path = td.path().join("settings.toml");
        std::fs::write(&path, "verbose = \"loud\"\n").expect("write");
        assert!(matches!(load_settings_from(&path), Err(SettingsError::Parse(_))));
    }
}
