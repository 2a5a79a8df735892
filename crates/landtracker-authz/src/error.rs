//! Authorization error types.

use http::StatusCode;
use landtracker_core::Actor;

use crate::action::{Action, Resource};

/// Result type alias for landtracker-authz operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors produced when an authorization check is turned into a `Result`.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// Error from landtracker-core
    #[error("Core error: {0}")]
    Core(#[from] landtracker_core::Error),

    /// The action string did not name a known action.
    #[error("Unknown action: '{value}'")]
    UnknownAction {
        /// The rejected input
        value: String,
    },

    /// The request carried no authenticated actor.
    #[error("unauthenticated request")]
    Unauthenticated,

    /// A target-bound action was checked without a target.
    #[error("action '{action}' requires a target")]
    MissingTarget {
        /// The action being checked
        action: Action,
    },

    /// The target belongs to a different resource family than the action.
    #[error("action '{action}' cannot target a {resource} record")]
    TargetMismatch {
        /// The action being checked
        action: Action,
        /// The family the supplied target belongs to
        resource: Resource,
    },

    /// The policy denied the action.
    #[error("{actor} is not allowed to perform '{action}'")]
    Forbidden {
        /// The action being checked
        action: Action,
        /// The requester
        actor: Actor,
    },

    /// An account tried to delete itself.
    #[error("{actor} cannot delete their own account")]
    SelfDeletion {
        /// The requester
        actor: Actor,
    },
}

impl Error {
    /// Creates an unknown-action error.
    pub fn unknown_action<S: Into<String>>(value: S) -> Self {
        Error::UnknownAction {
            value: value.into(),
        }
    }

    /// HTTP status the authorization middleware should answer with.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Error::Unauthenticated => StatusCode::UNAUTHORIZED,
            Error::Forbidden { .. } | Error::SelfDeletion { .. } => StatusCode::FORBIDDEN,
            Error::UnknownAction { .. }
            | Error::MissingTarget { .. }
            | Error::TargetMismatch { .. } => StatusCode::BAD_REQUEST,
            Error::Core(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Whether this error is caused by the request (4xx) rather than the server.
    pub fn is_client_error(&self) -> bool {
        self.status_code().is_client_error()
    }

    /// Whether this error is a policy denial.
    pub fn is_denial(&self) -> bool {
        matches!(self, Error::Forbidden { .. } | Error::SelfDeletion { .. })
    }
}
