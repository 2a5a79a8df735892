//! Roles and role-membership checks.
//!
//! A [`Role`] is a closed set of three values. There is no structural
//! hierarchy between them: any precedence lives in the rule that asks the
//! question. [`RoleSet`] is the one capability abstraction used everywhere a
//! rule needs "is the actor one of these roles".

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::Error;

/// Role assigned to every user account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Full control over users and the audit log.
    Administrator,
    /// Manages staff accounts and reads the audit log.
    Manager,
    /// Regular field or office account.
    Staff,
}

impl Role {
    /// Every role, in declaration order.
    pub const ALL: [Role; 3] = [Role::Administrator, Role::Manager, Role::Staff];

    /// Returns the canonical lowercase name.
    pub const fn as_str(self) -> &'static str {
        match self {
            Role::Administrator => "administrator",
            Role::Manager => "manager",
            Role::Staff => "staff",
        }
    }

    /// Returns `true` for administrators.
    pub const fn is_admin(self) -> bool {
        matches!(self, Role::Administrator)
    }

    /// Returns `true` for managers.
    pub const fn is_manager(self) -> bool {
        matches!(self, Role::Manager)
    }

    /// Returns `true` for staff.
    pub const fn is_staff(self) -> bool {
        matches!(self, Role::Staff)
    }

    const fn bit(self) -> u8 {
        match self {
            Role::Administrator => 0b001,
            Role::Manager => 0b010,
            Role::Staff => 0b100,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Role {
    type Err = Error;

    /// Parses a role name, ignoring case and surrounding whitespace.
    ///
    /// `admin` is accepted as a short form of `administrator`.
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "administrator" | "admin" => Ok(Role::Administrator),
            "manager" => Ok(Role::Manager),
            "staff" => Ok(Role::Staff),
            _ => Err(Error::unknown_role(s)),
        }
    }
}

/// A set of roles, usable in `const` rule tables.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct RoleSet(u8);

impl RoleSet {
    /// No role.
    pub const NONE: RoleSet = RoleSet(0);
    /// Every role.
    pub const ANY: RoleSet = RoleSet(0b111);
    /// Administrators only.
    pub const ADMIN: RoleSet = RoleSet::of(Role::Administrator);
    /// Managers only.
    pub const MANAGER: RoleSet = RoleSet::of(Role::Manager);
    /// Administrators and managers: the roles that oversee other accounts.
    pub const SUPERVISORS: RoleSet = RoleSet::ADMIN.with(Role::Manager);

    /// A set containing a single role.
    pub const fn of(role: Role) -> Self {
        RoleSet(role.bit())
    }

    /// Returns this set with `role` added.
    pub const fn with(self, role: Role) -> Self {
        RoleSet(self.0 | role.bit())
    }

    /// Membership test.
    pub const fn contains(self, role: Role) -> bool {
        self.0 & role.bit() != 0
    }

    /// Returns `true` if no role is in the set.
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Iterates the members in declaration order.
    pub fn iter(self) -> impl Iterator<Item = Role> {
        Role::ALL.into_iter().filter(move |r| self.contains(*r))
    }
}

impl fmt::Debug for RoleSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl FromIterator<Role> for RoleSet {
    fn from_iter<I: IntoIterator<Item = Role>>(iter: I) -> Self {
        iter.into_iter().fold(RoleSet::NONE, RoleSet::with)
    }
}
