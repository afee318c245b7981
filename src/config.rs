//! TOML configuration.
//!
//! Looked up at `$XDG_CONFIG_HOME/calcpad/config.toml` unless a path is given.
//!
//! ```toml
//! error_marker = "Error"
//!
//! [keys]
//! clear = ["Escape", "c", "C"]
//! equals = ["Enter", "="]
//! backspace = ["Backspace"]
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::calculator::{DEFAULT_ERROR_MARKER, is_valid_display};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),

    /// The marker must be distinguishable from anything the user can type.
    #[error("error marker {0:?} could be mistaken for calculator input")]
    InvalidErrorMarker(String),

    #[error("key {0:?} is bound to more than one action")]
    ConflictingKey(String),

    /// Digits, operators and the point always type themselves.
    #[error("key {0:?} is reserved for calculator input and cannot be rebound")]
    ReservedKey(String),
}

/// Keys that always map to a digit, operator or decimal point.
const RESERVED_KEYS: &str = "0123456789.+-*/";

/// Keyboard keys for the actions that have no single obvious key.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct KeyBindings {
    pub clear: Vec<String>,
    pub equals: Vec<String>,
    pub backspace: Vec<String>,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            clear: vec!["Escape".into(), "c".into(), "C".into()],
            equals: vec!["Enter".into(), "=".into()],
            backspace: vec!["Backspace".into()],
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    /// Text shown after a failed evaluation.
    pub error_marker: String,
    pub keys: KeyBindings,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            error_marker: DEFAULT_ERROR_MARKER.to_string(),
            keys: KeyBindings::default(),
        }
    }
}

impl Config {
    /// Default config file location, if the platform has a config directory.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("calcpad").join("config.toml"))
    }

    /// Load configuration.
    ///
    /// An explicit `path` must exist. Without one, the default location is
    /// tried and a missing file falls back to defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let (path, required) = match path {
            Some(path) => (path.to_path_buf(), true),
            None => match Self::default_path() {
                Some(path) => (path, false),
                None => return Ok(Self::default()),
            },
        };

        match std::fs::read_to_string(&path) {
            Ok(contents) => {
                tracing::debug!(path = %path.display(), "loading config");
                Self::from_toml_str(&contents)
            }
            Err(err) if !required && err.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "no config file, using defaults");
                Ok(Self::default())
            }
            Err(source) => Err(ConfigError::Io { path, source }),
        }
    }

    /// Parse and validate a TOML document.
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let marker = &self.error_marker;
        // With an empty marker argument this only matches typeable shapes.
        if marker.is_empty() || is_valid_display(marker, "") {
            return Err(ConfigError::InvalidErrorMarker(marker.clone()));
        }

        let mut seen = std::collections::HashSet::new();
        let all = self
            .keys
            .clear
            .iter()
            .chain(&self.keys.equals)
            .chain(&self.keys.backspace);
        for key in all {
            if key.chars().count() == 1 && key.chars().all(|c| RESERVED_KEYS.contains(c)) {
                return Err(ConfigError::ReservedKey(key.clone()));
            }
            if !seen.insert(key.as_str()) {
                return Err(ConfigError::ConflictingKey(key.clone()));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_gives_defaults() {
        assert_eq!(Config::from_toml_str("").unwrap(), Config::default());
    }

    #[test]
    fn test_partial_override() {
        let config = Config::from_toml_str(
            r#"
            error_marker = "ERR"

            [keys]
            clear = ["Delete"]
            "#,
        )
        .unwrap();
        assert_eq!(config.error_marker, "ERR");
        assert_eq!(config.keys.clear, vec!["Delete"]);
        assert_eq!(config.keys.equals, KeyBindings::default().equals);
    }

    #[test]
    fn test_rejects_typeable_marker() {
        for marker in ["", "0", "-", "1+2"] {
            let doc = format!("error_marker = {:?}", marker);
            assert!(matches!(
                Config::from_toml_str(&doc),
                Err(ConfigError::InvalidErrorMarker(_))
            ));
        }
    }

    #[test]
    fn test_rejects_conflicting_keys() {
        let err = Config::from_toml_str(
            r#"
            [keys]
            clear = ["Enter"]
            "#,
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::ConflictingKey(key) if key == "Enter"));
    }

    #[test]
    fn test_rejects_rebinding_input_keys() {
        for key in ["5", "0", ".", "+", "-", "*", "/"] {
            let doc = format!("[keys]\nclear = [{:?}]", key);
            let err = Config::from_toml_str(&doc).unwrap_err();
            assert!(matches!(err, ConfigError::ReservedKey(k) if k == key));
        }

        let err = Config::from_toml_str("[keys]\nbackspace = [\"7\"]").unwrap_err();
        assert!(matches!(err, ConfigError::ReservedKey(_)));

        // Multi-character names and unused characters stay bindable.
        let config = Config::from_toml_str("[keys]\nclear = [\"Delete\", \"x\"]").unwrap();
        assert_eq!(config.keys.clear, vec!["Delete", "x"]);
    }

    #[test]
    fn test_rejects_bad_toml() {
        assert!(matches!(
            Config::from_toml_str("error_marker = ["),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        let err = Config::load(Some(Path::new("/nonexistent/calcpad.toml"))).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
