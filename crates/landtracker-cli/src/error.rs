//! Error types for landtracker-cli

use thiserror::Error;

/// Result type alias for landtracker-cli operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in landtracker-cli
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Error from landtracker-core
    #[error(transparent)]
    Core(#[from] landtracker_core::Error),

    /// Error from landtracker-authz
    #[error(transparent)]
    Authz(#[from] landtracker_authz::Error),

    /// The command-line arguments do not describe a valid request
    #[error("Invalid arguments: {0}")]
    InvalidArgs(String),
}

impl Error {
    /// Creates an invalid-arguments error.
    pub fn invalid_args<S: Into<String>>(message: S) -> Self {
        Error::InvalidArgs(message.into())
    }
}
