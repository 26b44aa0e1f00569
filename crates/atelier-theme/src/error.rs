//! Error types for theme handling.
//!
//! Unparseable colors and unknown keys are not errors here: they are reported
//! as [`Warning`](crate::Warning)s next to the normalized result. The variants
//! below cover the cases where an operation cannot proceed at all.

use std::io;
use std::path::PathBuf;

use crate::theme::ColorMode;

/// Errors that can occur while loading or applying a theme.
#[derive(Debug, thiserror::Error)]
pub enum ThemeError {
    /// A role name outside the closed role set.
    #[error("unknown theme role '{0}'")]
    UnknownRole(String),

    /// One side of the theme has no recognized roles, so applying it would
    /// wipe the active styling.
    #[error("{0} theme has no recognized color roles")]
    EmptyTheme(ColorMode),

    /// The stylesheet target could not be written or removed.
    #[error("failed to write stylesheet {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The persisted settings document is not valid JSON.
    #[error("invalid settings document: {0}")]
    Settings(#[from] serde_json::Error),
}

/// Result type for theme operations.
pub type Result<T> = std::result::Result<T, ThemeError>;
