//! Reading the actor from HTTP request extensions.
//!
//! The authentication layer (outside this crate) inserts the resolved
//! [`Actor`] into the request extensions. Handlers and the authorization
//! middleware read it back with these helpers.

use landtracker_core::Actor;

use crate::error::{Error, Result};

/// The `Actor` stored in request `Parts`, if present.
pub fn actor_from_parts(parts: &http::request::Parts) -> Option<&Actor> {
    parts.extensions.get::<Actor>()
}

/// The `Actor` stored in request `Parts`, or [`Error::Unauthenticated`].
pub fn require_actor(parts: &http::request::Parts) -> Result<&Actor> {
    actor_from_parts(parts).ok_or(Error::Unauthenticated)
}
