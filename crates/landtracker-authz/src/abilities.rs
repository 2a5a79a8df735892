//! Ability flags handed to the admin UI.
//!
//! The UI shows or hides controls from these flags; the server still runs
//! the real check when the action is submitted.

use serde::{Deserialize, Serialize};

/// What an actor may do with one target.
///
/// `delete` reflects the policy only. It can be `true` for an
/// administrator's own account; the self-deletion guard runs separately.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Abilities {
    /// Open the target.
    pub view: bool,
    /// Edit the target.
    pub update: bool,
    /// Delete the target.
    pub delete: bool,
    /// Enable or disable the target account.
    pub toggle_status: bool,
}

/// What an actor may do regardless of target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct UserAbilities {
    /// Browse the user list.
    pub view_any_users: bool,
    /// Create new accounts.
    pub create_user: bool,
    /// Browse the activity log.
    pub view_any_activities: bool,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_abilities_json_shape() {
        let abilities = Abilities {
            view: true,
            update: true,
            ..Default::default()
        };
        let json = serde_json::to_value(abilities).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "view": true,
                "update": true,
                "delete": false,
                "toggle_status": false,
            })
        );
    }

    #[test]
    fn test_user_abilities_default_is_nothing() {
        let abilities = UserAbilities::default();
        assert!(!abilities.view_any_users);
        assert!(!abilities.create_user);
        assert!(!abilities.view_any_activities);
    }
}
