// SPDX-License-Identifier: Apache-2.0

//! Optional defaults for the `tinta` binary, read from
//! `~/.config/tinta/config.toml`:
//!
//! ```toml
//! mode = "markup"
//! theme = "light"
//! log_path = "/var/log/tinta/messages.log"
//! ```
//!
//! Every key is optional. Command-line flags and `TINTA_*` variables win.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::types::OutputMode;

/// Environment variable a CGI-style web server sets for each request.
pub const HTTP_HOST_VAR: &str = "HTTP_HOST";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config '{}': {source}", path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// Settings from the config file.
///
/// `theme` stays a string so the printer reports bad values the same way it
/// does for the command line.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    pub mode: Option<OutputMode>,
    pub theme: Option<String>,
    pub log_path: Option<PathBuf>,
}

/// `~/.config/tinta/config.toml`, if a home directory can be found.
pub fn default_config_path() -> Option<PathBuf> {
    home::home_dir().map(|h| h.join(".config").join("tinta").join("config.toml"))
}

/// Load settings from `path`. A missing file yields the defaults.
pub fn load_settings(path: &Path) -> Result<Settings, ConfigError> {
    let content = match std::fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Settings::default());
        }
        Err(source) => {
            return Err(ConfigError::Read {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    toml::from_str(&content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Pick the output mode: an explicit choice first, then whether the process
/// is serving an HTTP request.
pub fn resolve_mode(explicit: Option<OutputMode>, http_host: Option<&str>) -> OutputMode {
    match explicit {
        Some(mode) => mode,
        None if http_host.is_some() => OutputMode::Markup,
        None => OutputMode::Terminal,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_is_default() {
        let tmp = tempdir().unwrap();
        let settings = load_settings(&tmp.path().join("none.toml")).unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_full_file() {
        let tmp = tempdir().unwrap();
        let path = tmp.path().join("config.toml");
        std::fs::write(
            &path,
            "mode = \"markup\"\ntheme = \"light\"\nlog_path = \"logs/out.log\"\n",
        )
        .unwrap();

        let settings = load_settings(&path).unwrap();
        assert_eq!(settings.mode, Some(OutputMode::Markup));
        assert_eq!(settings.theme.as_deref(), Some("light"));
        assert_eq!(settings.log_path, Some(PathBuf::from("logs/out.log")));
    }

    #[test]
    fn test_bad_file_is_parse_error() {
        let tmp = tempdir().unwrap();
        let path = tmp.path().join("config.toml");
        std::fs::write(&path, "mode = \"web\"\n").unwrap();
        assert!(matches!(load_settings(&path), Err(ConfigError::Parse { .. })));

        std::fs::write(&path, "colour = \"red\"\n").unwrap();
        assert!(matches!(load_settings(&path), Err(ConfigError::Parse { .. })));
    }

    #[test]
    fn test_resolve_mode() {
        assert_eq!(resolve_mode(None, None), OutputMode::Terminal);
        assert_eq!(resolve_mode(None, Some("example.org")), OutputMode::Markup);
        assert_eq!(
            resolve_mode(Some(OutputMode::Terminal), Some("example.org")),
            OutputMode::Terminal
        );
        assert_eq!(resolve_mode(Some(OutputMode::Markup), None), OutputMode::Markup);
    }

    #[test]
    fn test_default_config_path() {
        if let Some(path) = default_config_path() {
            assert!(path.ends_with(".config/tinta/config.toml"));
        }
    }
}
