//! `atelier.yaml` configuration.
//!
//! ```yaml
//! stylesheet: public/theme-variables.css
//! csv_delimiter: ";"
//! ```
//!
//! Every key is optional. Unknown keys are rejected so a typo does not
//! silently fall back to a default.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context};
use serde::{Deserialize, Serialize};

/// File name looked up in the working directory.
pub const CONFIG_FILE: &str = "atelier.yaml";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Where the theme stylesheet is written.
    pub stylesheet: PathBuf,
    /// Cell separator for inventory files.
    pub csv_delimiter: char,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            stylesheet: PathBuf::from("theme-variables.css"),
            csv_delimiter: ',',
        }
    }
}

impl Config {
    pub fn from_yaml(yaml: &str) -> anyhow::Result<Self> {
        // An empty file deserializes to null, not to an empty mapping.
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Config = serde_yaml::from_str(yaml)?;
        config.csv_delimiter_byte()?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        Self::from_yaml(&content).with_context(|| format!("invalid config {}", path.display()))
    }

    /// Resolves the configuration for a run.
    ///
    /// An explicit path must exist. Otherwise `atelier.yaml` in `dir` is used
    /// when present, and the defaults when not.
    pub fn load(explicit: Option<&Path>, dir: &Path) -> anyhow::Result<Self> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }

        let candidate = dir.join(CONFIG_FILE);
        if candidate.is_file() {
            tracing::debug!(path = %candidate.display(), "using config file");
            Self::from_file(&candidate)
        } else {
            Ok(Self::default())
        }
    }

    /// The delimiter as the single byte the CSV reader expects.
    pub fn csv_delimiter_byte(&self) -> anyhow::Result<u8> {
        delimiter_byte(self.csv_delimiter)
    }
}

/// Converts a delimiter character to a byte; only ASCII is accepted.
pub fn delimiter_byte(delimiter: char) -> anyhow::Result<u8> {
    if !delimiter.is_ascii() {
        bail!("delimiter must be an ASCII character, got '{}'", delimiter);
    }
    Ok(delimiter as u8)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_is_default() {
        assert_eq!(Config::from_yaml("").unwrap(), Config::default());
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let config = Config::from_yaml("csv_delimiter: \";\"\n").unwrap();
        assert_eq!(config.csv_delimiter, ';');
        assert_eq!(config.stylesheet, PathBuf::from("theme-variables.css"));
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(Config::from_yaml("stylesheet: a.css\ndelimiter: ','\n").is_err());
    }

    #[test]
    fn non_ascii_delimiter_is_rejected() {
        assert!(Config::from_yaml("csv_delimiter: \"§\"\n").is_err());
        assert!(delimiter_byte('\t').is_ok());
    }

    #[test]
    fn load_prefers_explicit_path() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(CONFIG_FILE), "stylesheet: local.css\n").unwrap();
        let explicit = dir.path().join("other.yaml");
        std::fs::write(&explicit, "stylesheet: other.css\n").unwrap();

        let config = Config::load(Some(&explicit), dir.path()).unwrap();
        assert_eq!(config.stylesheet, PathBuf::from("other.css"));

        let config = Config::load(None, dir.path()).unwrap();
        assert_eq!(config.stylesheet, PathBuf::from("local.css"));
    }

    #[test]
    fn load_without_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(Config::load(None, dir.path()).unwrap(), Config::default());
    }

    #[test]
    fn missing_explicit_path_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = Config::load(Some(&dir.path().join("nope.yaml")), dir.path()).unwrap_err();
        assert!(err.to_string().contains("nope.yaml"));
    }
}
