//! The declarative rule table.
//!
//! Each action maps to an ordered list of rules. Evaluation walks the list
//! top to bottom and the first rule that applies decides; if none applies
//! the action is denied. Order inside a list is significant: a leading
//! `deny` rule (as on toggle-status) shadows every `allow` below it.
//!
//! ```text
//! action               | # | roles         | condition          | effect
//! ---------------------+---+---------------+--------------------+-------
//! user.view-any        | 0 | admin,manager | always             | allow
//! user.view            | 0 | admin,manager | always             | allow
//!                      | 1 | any           | owns target        | allow
//! user.create          | 0 | admin         | always             | allow
//! user.update          | 0 | admin         | always             | allow
//!                      | 1 | manager       | target is staff    | allow
//!                      | 2 | any           | owns target        | allow
//! user.delete          | 0 | admin         | always             | allow
//!                      | 1 | manager       | target is staff    | allow
//! user.toggle-status   | 0 | any           | owns target        | deny
//!                      | 1 | admin         | always             | allow
//!                      | 2 | manager       | target is staff    | allow
//! activity.view-any    | 0 | admin,manager | always             | allow
//! activity.view        | 0 | admin,manager | always             | allow
//!                      | 1 | any           | owns target        | allow
//! ```
//!
//! Activity records are read-only; every other ability on them has an empty
//! rule list.

use serde::{Deserialize, Serialize};
use std::fmt;

use landtracker_core::{Actor, Role, RoleSet};

use crate::action::{Ability, Action, Resource};
use crate::target::Target;

/// Outcome of a decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Decision {
    /// The action may proceed.
    Allow,
    /// The action must be refused.
    Deny,
}

impl Decision {
    /// Returns `true` for [`Decision::Allow`].
    pub fn is_allowed(self) -> bool {
        matches!(self, Decision::Allow)
    }
}

impl From<bool> for Decision {
    fn from(allowed: bool) -> Self {
        if allowed {
            Decision::Allow
        } else {
            Decision::Deny
        }
    }
}

impl From<Decision> for bool {
    fn from(decision: Decision) -> Self {
        decision.is_allowed()
    }
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Decision::Allow => write!(f, "allow"),
            Decision::Deny => write!(f, "deny"),
        }
    }
}

/// What a matching rule decides.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Allow the action.
    Allow,
    /// Deny the action; evaluation stops.
    Deny,
}

impl From<Effect> for Decision {
    fn from(effect: Effect) -> Self {
        match effect {
            Effect::Allow => Decision::Allow,
            Effect::Deny => Decision::Deny,
        }
    }
}

/// Predicate over the actor/target pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Condition {
    /// Holds unconditionally, with or without a target.
    Always,
    /// The actor owns the target. Never holds without a target.
    OwnsTarget,
    /// The target is a user with this role. Never holds without a user target.
    TargetRole(Role),
}

impl Condition {
    /// Evaluates the predicate.
    pub fn holds(self, actor: &Actor, target: Option<&Target>) -> bool {
        match self {
            Condition::Always => true,
            Condition::OwnsTarget => target.is_some_and(|t| t.is_owned_by(actor)),
            Condition::TargetRole(role) => target.and_then(Target::role) == Some(role),
        }
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Condition::Always => write!(f, "always"),
            Condition::OwnsTarget => write!(f, "owns target"),
            Condition::TargetRole(role) => write!(f, "target is {role}"),
        }
    }
}

/// One row of the rule table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rule {
    /// Roles the rule applies to.
    pub roles: RoleSet,
    /// Extra predicate over actor and target.
    pub condition: Condition,
    /// Result when the rule applies.
    pub effect: Effect,
}

impl Rule {
    /// An allowing rule.
    pub const fn allow(roles: RoleSet, condition: Condition) -> Self {
        Self {
            roles,
            condition,
            effect: Effect::Allow,
        }
    }

    /// A denying rule.
    pub const fn deny(roles: RoleSet, condition: Condition) -> Self {
        Self {
            roles,
            condition,
            effect: Effect::Deny,
        }
    }

    /// Whether the rule applies to this actor/target pair.
    pub fn applies(&self, actor: &Actor, target: Option<&Target>) -> bool {
        actor.has_any_role(self.roles) && self.condition.holds(actor, target)
    }
}

const STAFF_TARGET: Condition = Condition::TargetRole(Role::Staff);

const VIEW_ANY_USERS: &[Rule] = &[Rule::allow(RoleSet::SUPERVISORS, Condition::Always)];

const VIEW_USER: &[Rule] = &[
    Rule::allow(RoleSet::SUPERVISORS, Condition::Always),
    Rule::allow(RoleSet::ANY, Condition::OwnsTarget),
];

const CREATE_USER: &[Rule] = &[Rule::allow(RoleSet::ADMIN, Condition::Always)];

const UPDATE_USER: &[Rule] = &[
    Rule::allow(RoleSet::ADMIN, Condition::Always),
    Rule::allow(RoleSet::MANAGER, STAFF_TARGET),
    Rule::allow(RoleSet::ANY, Condition::OwnsTarget),
];

// Self-deletion is not blocked here; see `guard::guard_self_deletion`.
const DELETE_USER: &[Rule] = &[
    Rule::allow(RoleSet::ADMIN, Condition::Always),
    Rule::allow(RoleSet::MANAGER, STAFF_TARGET),
];

const TOGGLE_USER_STATUS: &[Rule] = &[
    Rule::deny(RoleSet::ANY, Condition::OwnsTarget),
    Rule::allow(RoleSet::ADMIN, Condition::Always),
    Rule::allow(RoleSet::MANAGER, STAFF_TARGET),
];

const VIEW_ANY_ACTIVITIES: &[Rule] = &[Rule::allow(RoleSet::SUPERVISORS, Condition::Always)];

const VIEW_ACTIVITY: &[Rule] = &[
    Rule::allow(RoleSet::SUPERVISORS, Condition::Always),
    Rule::allow(RoleSet::ANY, Condition::OwnsTarget),
];

const NO_RULES: &[Rule] = &[];

/// The ordered rules for `action`.
pub fn rules_for(action: Action) -> &'static [Rule] {
    match (action.resource, action.ability) {
        (Resource::User, Ability::ViewAny) => VIEW_ANY_USERS,
        (Resource::User, Ability::View) => VIEW_USER,
        (Resource::User, Ability::Create) => CREATE_USER,
        (Resource::User, Ability::Update) => UPDATE_USER,
        (Resource::User, Ability::Delete) => DELETE_USER,
        (Resource::User, Ability::ToggleStatus) => TOGGLE_USER_STATUS,
        (Resource::Activity, Ability::ViewAny) => VIEW_ANY_ACTIVITIES,
        (Resource::Activity, Ability::View) => VIEW_ACTIVITY,
        (Resource::Activity, _) => NO_RULES,
    }
}

/// Result of walking a rule list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Evaluation {
    /// The decision.
    pub decision: Decision,
    /// Index of the rule that decided; `None` when the default deny applied.
    pub matched: Option<usize>,
}

/// Walks the rules for `action` and returns the first applicable outcome.
pub fn evaluate(action: Action, actor: &Actor, target: Option<&Target>) -> Evaluation {
    rules_for(action)
        .iter()
        .enumerate()
        .find(|(_, rule)| rule.applies(actor, target))
        .map(|(index, rule)| Evaluation {
            decision: rule.effect.into(),
            matched: Some(index),
        })
        .unwrap_or(Evaluation {
            decision: Decision::Deny,
            matched: None,
        })
}
