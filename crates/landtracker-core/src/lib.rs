#![doc = include_str!("../README.md")]
#![forbid(unsafe_code)]
#![warn(missing_docs)]

//! Land Tracker Core
//!
//! Roles, identities, user accounts, and activity records. This crate has no
//! internal Land Tracker dependencies.

pub mod error;
pub mod types;

// Re-exports for convenience
pub use error::{Error, Result};
pub use types::{ActivityId, ActivityRecord, Actor, Role, RoleSet, UserId, UserRecord, UserStatus};
