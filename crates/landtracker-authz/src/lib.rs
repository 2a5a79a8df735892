//! # landtracker-authz
//!
//! Role-based access decisions for Land Tracker.
//!
//! Provides:
//! - [`UserPolicy`] / [`ActivityPolicy`] — one pure boolean function per action
//! - [`Gate`] — dispatch by [`Action`], with decision logging and a
//!   `Result`-returning [`Gate::authorize`]
//! - [`rules`] — the ordered, declarative rule table behind both
//! - [`Abilities`] / [`UserAbilities`] — flags for the admin UI
//! - [`guard_self_deletion`] — the controller-side self-deletion check
//! - [`actor_from_parts`] — read the authenticated actor from request extensions

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod abilities;
mod action;
mod context;
mod error;
mod gate;
mod guard;
mod policy;
mod proptests;
pub mod rules;
mod target;

pub use abilities::{Abilities, UserAbilities};
pub use action::{Ability, Action, Resource};
pub use context::{actor_from_parts, require_actor};
pub use error::{Error, Result};
pub use gate::Gate;
pub use guard::guard_self_deletion;
pub use policy::{ActivityPolicy, UserPolicy};
pub use rules::{Decision, Evaluation};
pub use target::Target;
