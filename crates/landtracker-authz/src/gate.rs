//! Single dispatch point for authorization checks.
//!
//! The authorization middleware resolves the actor and target, then asks the
//! [`Gate`] either for a [`Decision`] or for a `Result` it can turn straight
//! into a 403.
//!
//! # Usage
//!
//! ```rust
//! use landtracker_authz::{Action, Gate, Target};
//! use landtracker_core::{Actor, Role};
//!
//! let gate = Gate::new();
//! let manager = Actor::new(2, Role::Manager);
//! let staff = Target::user(5, Role::Staff);
//!
//! assert!(gate.allows(&manager, Action::DELETE_USER, Some(&staff)));
//! assert!(gate.authorize(&manager, Action::CREATE_USER, None).is_err());
//! ```

use landtracker_core::Actor;

use crate::abilities::{Abilities, UserAbilities};
use crate::action::{Ability, Action};
use crate::error::{Error, Result};
use crate::rules::{evaluate, Decision};
use crate::target::Target;

/// Evaluates actions through the rule table.
///
/// Holds no state besides its logging switch; `Copy` and safe to share.
#[derive(Debug, Clone, Copy)]
pub struct Gate {
    log_decisions: bool,
}

impl Default for Gate {
    fn default() -> Self {
        Self::new()
    }
}

impl Gate {
    /// A gate that logs each decision at debug level.
    pub fn new() -> Self {
        Self {
            log_decisions: true,
        }
    }

    /// Enables or disables per-decision logging.
    pub fn with_decision_logging(mut self, enabled: bool) -> Self {
        self.log_decisions = enabled;
        self
    }

    /// Decides `action` for `actor` on `target`.
    ///
    /// A target from another resource family is denied.
    pub fn check(&self, actor: &Actor, action: Action, target: Option<&Target>) -> Decision {
        if let Some(t) = target
            && t.resource() != action.resource
        {
            log::warn!(
                "{action} checked against a {} target; denying",
                t.resource()
            );
            return Decision::Deny;
        }

        let eval = evaluate(action, actor, target);
        if self.log_decisions {
            match target {
                Some(t) => log::debug!(
                    "{actor} {action} on {} #{} -> {}",
                    t.resource(),
                    t.owner_id(),
                    eval.decision
                ),
                None => log::debug!("{actor} {action} -> {}", eval.decision),
            }
            match eval.matched {
                Some(index) => log::trace!("{action}: decided by rule {index}"),
                None => log::trace!("{action}: no rule applied, default deny"),
            }
        }
        eval.decision
    }

    /// Boolean form of [`Gate::check`].
    pub fn allows(&self, actor: &Actor, action: Action, target: Option<&Target>) -> bool {
        self.check(actor, action, target).is_allowed()
    }

    /// Like [`Gate::check`], but validates the request shape and reports a
    /// denial as [`Error::Forbidden`].
    pub fn authorize(&self, actor: &Actor, action: Action, target: Option<&Target>) -> Result<()> {
        match target {
            None if action.requires_target() => return Err(Error::MissingTarget { action }),
            Some(t) if t.resource() != action.resource => {
                return Err(Error::TargetMismatch {
                    action,
                    resource: t.resource(),
                });
            }
            _ => {}
        }

        if self.check(actor, action, target).is_allowed() {
            Ok(())
        } else {
            Err(Error::Forbidden {
                action,
                actor: *actor,
            })
        }
    }

    /// Per-target ability flags for `actor`.
    pub fn abilities(&self, actor: &Actor, target: &Target) -> Abilities {
        let resource = target.resource();
        let flag = |ability: Ability| {
            self.allows(actor, Action::new(resource, ability), Some(target))
        };
        Abilities {
            view: flag(Ability::View),
            update: flag(Ability::Update),
            delete: flag(Ability::Delete),
            toggle_status: flag(Ability::ToggleStatus),
        }
    }

    /// Target-independent ability flags for `actor`.
    pub fn user_abilities(&self, actor: &Actor) -> UserAbilities {
        UserAbilities {
            view_any_users: self.allows(actor, Action::VIEW_ANY_USERS, None),
            create_user: self.allows(actor, Action::CREATE_USER, None),
            view_any_activities: self.allows(actor, Action::VIEW_ANY_ACTIVITIES, None),
        }
    }
}
