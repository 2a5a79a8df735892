//! Error types for landtracker-core.

use std::path::{Path, PathBuf};

/// Errors that can occur when building Land Tracker domain values.
///
/// Decisions themselves never fail; these errors surface at the boundaries
/// where untyped input (strings from a database row, a CLI flag, a config
/// file) is turned into typed values.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// A role string did not name one of the three known roles.
    #[error("Unknown role: '{value}' (expected administrator, manager or staff)")]
    UnknownRole {
        /// The rejected input
        value: String,
    },

    /// An identifier string was not a valid numeric id.
    #[error("Invalid id: '{value}'")]
    InvalidId {
        /// The rejected input
        value: String,
    },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Config {
        /// What configuration is problematic
        message: String,
    },

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// I/O error tied to the file being accessed
    #[error("I/O error at {}: {source}", .path.display())]
    IoPath {
        /// Underlying error
        #[source]
        source: std::io::Error,
        /// File involved
        path: PathBuf,
    },

    /// TOML could not be parsed
    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// TOML could not be produced
    #[error("TOML serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

/// Convenience `Result` type alias for landtracker-core operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Creates an unknown-role error.
    pub fn unknown_role<S: Into<String>>(value: S) -> Self {
        Error::UnknownRole {
            value: value.into(),
        }
    }

    /// Creates an invalid-id error.
    pub fn invalid_id<S: Into<String>>(value: S) -> Self {
        Error::InvalidId {
            value: value.into(),
        }
    }

    /// Creates a configuration error.
    pub fn config<S: Into<String>>(message: S) -> Self {
        Error::Config {
            message: message.into(),
        }
    }

    /// Wraps an I/O error together with the path that caused it.
    pub fn io_with_path(source: std::io::Error, path: impl AsRef<Path>) -> Self {
        Error::IoPath {
            source,
            path: path.as_ref().to_path_buf(),
        }
    }
}
