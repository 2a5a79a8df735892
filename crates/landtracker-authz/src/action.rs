//! Actions: an ability applied to a resource family.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::Error;

/// Entity family an action applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Resource {
    /// User accounts.
    User,
    /// Activity log records.
    Activity,
}

impl Resource {
    /// Canonical lowercase name.
    pub const fn as_str(self) -> &'static str {
        match self {
            Resource::User => "user",
            Resource::Activity => "activity",
        }
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What the actor wants to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Ability {
    /// List the resource family.
    ViewAny,
    /// Read one entity.
    View,
    /// Create an entity.
    Create,
    /// Modify one entity.
    Update,
    /// Remove one entity.
    Delete,
    /// Enable or disable one account.
    ToggleStatus,
}

impl Ability {
    /// Every ability, in declaration order.
    pub const ALL: [Ability; 6] = [
        Ability::ViewAny,
        Ability::View,
        Ability::Create,
        Ability::Update,
        Ability::Delete,
        Ability::ToggleStatus,
    ];

    /// Canonical kebab-case name.
    pub const fn as_str(self) -> &'static str {
        match self {
            Ability::ViewAny => "view-any",
            Ability::View => "view",
            Ability::Create => "create",
            Ability::Update => "update",
            Ability::Delete => "delete",
            Ability::ToggleStatus => "toggle-status",
        }
    }

    /// Whether the ability operates on one specific entity.
    pub const fn requires_target(self) -> bool {
        matches!(
            self,
            Ability::View | Ability::Update | Ability::Delete | Ability::ToggleStatus
        )
    }
}

impl fmt::Display for Ability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An ability on a resource family, written `resource.ability`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Action {
    /// Entity family.
    pub resource: Resource,
    /// Requested ability.
    pub ability: Ability,
}

impl Action {
    /// List user accounts.
    pub const VIEW_ANY_USERS: Action = Action::new(Resource::User, Ability::ViewAny);
    /// Read one user account.
    pub const VIEW_USER: Action = Action::new(Resource::User, Ability::View);
    /// Create a user account.
    pub const CREATE_USER: Action = Action::new(Resource::User, Ability::Create);
    /// Modify a user account.
    pub const UPDATE_USER: Action = Action::new(Resource::User, Ability::Update);
    /// Delete a user account.
    pub const DELETE_USER: Action = Action::new(Resource::User, Ability::Delete);
    /// Enable or disable a user account.
    pub const TOGGLE_USER_STATUS: Action = Action::new(Resource::User, Ability::ToggleStatus);
    /// List the activity log.
    pub const VIEW_ANY_ACTIVITIES: Action = Action::new(Resource::Activity, Ability::ViewAny);
    /// Read one activity record.
    pub const VIEW_ACTIVITY: Action = Action::new(Resource::Activity, Ability::View);

    /// The actions the application exposes.
    pub const ALL: [Action; 8] = [
        Action::VIEW_ANY_USERS,
        Action::VIEW_USER,
        Action::CREATE_USER,
        Action::UPDATE_USER,
        Action::DELETE_USER,
        Action::TOGGLE_USER_STATUS,
        Action::VIEW_ANY_ACTIVITIES,
        Action::VIEW_ACTIVITY,
    ];

    /// Combines a resource and an ability.
    pub const fn new(resource: Resource, ability: Ability) -> Self {
        Self { resource, ability }
    }

    /// Whether the action needs a target entity.
    pub const fn requires_target(self) -> bool {
        self.ability.requires_target()
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.resource, self.ability)
    }
}

impl std::str::FromStr for Action {
    type Err = Error;

    /// Parses `resource.ability`, e.g. `user.toggle-status`.
    ///
    /// Underscores are accepted in place of dashes.
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('_', "-");
        let (resource, ability) = normalized
            .split_once('.')
            .ok_or_else(|| Error::unknown_action(s))?;

        let resource = match resource {
            "user" | "users" => Resource::User,
            "activity" | "activities" => Resource::Activity,
            _ => return Err(Error::unknown_action(s)),
        };
        let ability = Ability::ALL
            .into_iter()
            .find(|a| a.as_str() == ability)
            .ok_or_else(|| Error::unknown_action(s))?;

        Ok(Action::new(resource, ability))
    }
}

impl Serialize for Action {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Action {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_action_display() {
        assert_eq!(Action::VIEW_ANY_USERS.to_string(), "user.view-any");
        assert_eq!(Action::TOGGLE_USER_STATUS.to_string(), "user.toggle-status");
        assert_eq!(Action::VIEW_ACTIVITY.to_string(), "activity.view");
    }

    #[test]
    fn test_action_parse_all_display_forms() {
        for action in Action::ALL {
            let parsed: Action = action.to_string().parse().unwrap();
            assert_eq!(parsed, action);
        }
    }

    #[test]
    fn test_action_parse_lenient_forms() {
        assert_eq!(
            "users.toggle_status".parse::<Action>().unwrap(),
            Action::TOGGLE_USER_STATUS
        );
        assert_eq!(
            "Activities.View-Any".parse::<Action>().unwrap(),
            Action::VIEW_ANY_ACTIVITIES
        );
    }

    #[test]
    fn test_action_parse_unknown() {
        for bad in ["user", "user.approve", "parcel.view", ""] {
            let err = bad.parse::<Action>().unwrap_err();
            assert!(matches!(err, Error::UnknownAction { .. }), "{bad}");
        }
    }

    #[test]
    fn test_requires_target() {
        assert!(!Action::VIEW_ANY_USERS.requires_target());
        assert!(!Action::CREATE_USER.requires_target());
        assert!(Action::VIEW_USER.requires_target());
        assert!(Action::DELETE_USER.requires_target());
        assert!(Action::VIEW_ACTIVITY.requires_target());
    }

    #[test]
    fn test_action_serde_as_string() {
        let json = serde_json::to_string(&Action::UPDATE_USER).unwrap();
        assert_eq!(json, "\"user.update\"");
        let back: Action = serde_json::from_str("\"activity.view-any\"").unwrap();
        assert_eq!(back, Action::VIEW_ANY_ACTIVITIES);
    }
}
