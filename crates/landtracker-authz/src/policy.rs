//! Per-family policy entry points.
//!
//! Thin, pure wrappers over the rule table, one function per action. They
//! never log; use [`Gate`](crate::Gate) when the decision should be traced.

use landtracker_core::{ActivityRecord, Actor};

use crate::action::Action;
use crate::rules::evaluate;
use crate::target::Target;

fn allowed(action: Action, actor: &Actor, target: Option<Target>) -> bool {
    if target.is_some_and(|t| t.resource() != action.resource) {
        return false;
    }
    evaluate(action, actor, target.as_ref()).decision.is_allowed()
}

/// Decisions over user accounts.
///
/// `target` accepts a [`UserRecord`](landtracker_core::UserRecord), an
/// [`Actor`], or a [`Target::User`]. An activity target is always denied.
pub struct UserPolicy;

impl UserPolicy {
    /// Administrators and managers may list users.
    pub fn view_any(actor: &Actor) -> bool {
        allowed(Action::VIEW_ANY_USERS, actor, None)
    }

    /// Administrators and managers may view anyone; everyone may view themselves.
    pub fn view(actor: &Actor, target: impl Into<Target>) -> bool {
        allowed(Action::VIEW_USER, actor, Some(target.into()))
    }

    /// Only administrators may create users.
    pub fn create(actor: &Actor) -> bool {
        allowed(Action::CREATE_USER, actor, None)
    }

    /// Administrators may update anyone, managers may update staff, and
    /// everyone may update themselves.
    pub fn update(actor: &Actor, target: impl Into<Target>) -> bool {
        allowed(Action::UPDATE_USER, actor, Some(target.into()))
    }

    /// Administrators may delete anyone and managers may delete staff.
    ///
    /// This does not stop an account from deleting itself; callers must
    /// also run [`guard_self_deletion`](crate::guard_self_deletion).
    pub fn delete(actor: &Actor, target: impl Into<Target>) -> bool {
        allowed(Action::DELETE_USER, actor, Some(target.into()))
    }

    /// Nobody may toggle their own status. Otherwise administrators may
    /// toggle anyone and managers may toggle staff.
    pub fn toggle_status(actor: &Actor, target: impl Into<Target>) -> bool {
        allowed(Action::TOGGLE_USER_STATUS, actor, Some(target.into()))
    }
}

/// Decisions over activity records.
pub struct ActivityPolicy;

impl ActivityPolicy {
    /// Administrators and managers may browse the activity log.
    pub fn view_any(actor: &Actor) -> bool {
        allowed(Action::VIEW_ANY_ACTIVITIES, actor, None)
    }

    /// Administrators and managers may view any record; everyone may view
    /// their own.
    pub fn view(actor: &Actor, activity: &ActivityRecord) -> bool {
        allowed(Action::VIEW_ACTIVITY, actor, Some(activity.into()))
    }
}
