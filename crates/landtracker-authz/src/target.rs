//! The entity an action applies to.

use landtracker_core::{ActivityRecord, Actor, Role, UserId, UserRecord};

use crate::action::Resource;

/// Decision-relevant view of a target entity.
///
/// Only what the rules read is kept: the role of a user target, and the id
/// of whoever owns the entity. For a user account the owner is the account
/// itself; for an activity record it is the user whose action was logged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Target {
    /// A user account.
    User {
        /// Account id.
        id: UserId,
        /// Account role.
        role: Role,
    },
    /// An activity record.
    Activity {
        /// Id of the user the record belongs to.
        owner: UserId,
    },
}

impl Target {
    /// A user account target.
    pub fn user(id: impl Into<UserId>, role: Role) -> Self {
        Target::User {
            id: id.into(),
            role,
        }
    }

    /// An activity record target owned by `owner`.
    pub fn activity(owner: impl Into<UserId>) -> Self {
        Target::Activity {
            owner: owner.into(),
        }
    }

    /// Family the target belongs to.
    pub fn resource(&self) -> Resource {
        match self {
            Target::User { .. } => Resource::User,
            Target::Activity { .. } => Resource::Activity,
        }
    }

    /// Id of the user owning the target.
    pub fn owner_id(&self) -> UserId {
        match self {
            Target::User { id, .. } => *id,
            Target::Activity { owner } => *owner,
        }
    }

    /// Role of a user target; `None` for activity records.
    pub fn role(&self) -> Option<Role> {
        match self {
            Target::User { role, .. } => Some(*role),
            Target::Activity { .. } => None,
        }
    }

    /// Whether `actor` owns this target.
    pub fn is_owned_by(&self, actor: &Actor) -> bool {
        self.owner_id() == actor.id
    }
}

impl From<&UserRecord> for Target {
    fn from(user: &UserRecord) -> Self {
        Target::user(user.id, user.role)
    }
}

/// An actor's own account as a target (self-service actions).
impl From<&Actor> for Target {
    fn from(actor: &Actor) -> Self {
        Target::user(actor.id, actor.role)
    }
}

impl From<&ActivityRecord> for Target {
    fn from(record: &ActivityRecord) -> Self {
        Target::activity(record.owner_id())
    }
}
