//! Actors and user accounts.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::UserId;
use super::role::{Role, RoleSet};

/// The authenticated identity requesting an action.
///
/// Resolved by the authentication layer before any decision is made; the
/// decision engine trusts it as given.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Actor {
    /// Account id of the requester.
    pub id: UserId,
    /// Role of the requester.
    pub role: Role,
}

impl Actor {
    /// Creates an actor.
    pub fn new(id: impl Into<UserId>, role: Role) -> Self {
        Self {
            id: id.into(),
            role,
        }
    }

    /// Returns `true` if the actor's role is in `roles`.
    pub fn has_any_role(&self, roles: RoleSet) -> bool {
        roles.contains(self.role)
    }

    /// Returns `true` if the actor is an administrator.
    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }

    /// Returns `true` if the actor is a manager.
    pub fn is_manager(&self) -> bool {
        self.role.is_manager()
    }
}

impl fmt::Display for Actor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#{}", self.role, self.id)
    }
}

/// Whether an account may sign in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserStatus {
    /// The account can sign in.
    #[default]
    Active,
    /// The account is disabled.
    Inactive,
}

impl UserStatus {
    /// The opposite status.
    pub fn toggled(self) -> Self {
        match self {
            UserStatus::Active => UserStatus::Inactive,
            UserStatus::Inactive => UserStatus::Active,
        }
    }

    /// Returns `true` for active accounts.
    pub fn is_active(self) -> bool {
        matches!(self, UserStatus::Active)
    }
}

impl fmt::Display for UserStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UserStatus::Active => write!(f, "active"),
            UserStatus::Inactive => write!(f, "inactive"),
        }
    }
}

/// A user account, the target of user-management actions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    /// Account id.
    pub id: UserId,
    /// Display name.
    pub name: String,
    /// Sign-in email.
    pub email: String,
    /// Assigned role.
    pub role: Role,
    /// Sign-in status.
    #[serde(default)]
    pub status: UserStatus,
}

impl UserRecord {
    /// Creates an active account.
    pub fn new(
        id: impl Into<UserId>,
        name: impl Into<String>,
        email: impl Into<String>,
        role: Role,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            email: email.into(),
            role,
            status: UserStatus::Active,
        }
    }

    /// The status this account would have after a toggle-status action.
    pub fn toggled_status(&self) -> UserStatus {
        self.status.toggled()
    }

    /// This account acting as a requester.
    pub fn as_actor(&self) -> Actor {
        Actor::new(self.id, self.role)
    }
}

impl From<&UserRecord> for Actor {
    fn from(user: &UserRecord) -> Self {
        user.as_actor()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_actor_display() {
        let actor = Actor::new(2, Role::Manager);
        assert_eq!(actor.to_string(), "manager#2");
    }

    #[test]
    fn test_actor_has_any_role() {
        let actor = Actor::new(1, Role::Manager);
        assert!(actor.has_any_role(RoleSet::SUPERVISORS));
        assert!(!actor.has_any_role(RoleSet::ADMIN));
        assert!(actor.is_manager());
        assert!(!actor.is_admin());
    }

    #[test]
    fn test_user_status_toggle() {
        assert_eq!(UserStatus::Active.toggled(), UserStatus::Inactive);
        assert_eq!(UserStatus::Inactive.toggled(), UserStatus::Active);
        assert!(UserStatus::default().is_active());
    }

    #[test]
    fn test_user_record_defaults_active() {
        let user = UserRecord::new(5, "Sokha Chan", "sokha@example.com", Role::Staff);
        assert_eq!(user.status, UserStatus::Active);
        assert_eq!(user.toggled_status(), UserStatus::Inactive);
    }

    #[test]
    fn test_user_record_as_actor() {
        let user = UserRecord::new(3, "Dara Kim", "dara@example.com", Role::Manager);
        let actor: Actor = (&user).into();
        assert_eq!(actor, Actor::new(3, Role::Manager));
    }

    #[test]
    fn test_user_record_deserialize_without_status() {
        let json = r#"{"id":8,"name":"Vanna","email":"vanna@example.com","role":"staff"}"#;
        let user: UserRecord = serde_json::from_str(json).unwrap();
        assert_eq!(user.id, UserId::new(8));
        assert_eq!(user.role, Role::Staff);
        assert_eq!(user.status, UserStatus::Active);
    }
}
