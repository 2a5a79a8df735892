//! Decision commands: `check`, `abilities`, `matrix`.
//!
//! Each command builds a serializable report; `main` decides how to print it.

use std::fmt::Write as _;

use landtracker_authz::{
    guard_self_deletion, Abilities, Action, Decision, Gate, Resource, Target, UserAbilities,
};
use landtracker_core::{Actor, Role};
use serde::Serialize;

use crate::config::LandTrackerConfig;
use crate::error::Result;

// ============================================================================
// check
// ============================================================================

/// Outcome of `landtracker check`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckReport {
    /// The action that was checked.
    pub action: Action,
    /// The requester.
    pub actor: Actor,
    /// The final decision.
    pub decision: Decision,
    /// Why the action was denied, when it was.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

/// Decides `action` for `actor` on `target`.
///
/// Request-shape problems (unknown action, missing or mismatched target) are
/// errors; a policy denial is a successful report with `decision = deny`.
pub fn check(
    config: &LandTrackerConfig,
    action: &str,
    actor: Actor,
    target: Option<Target>,
) -> Result<CheckReport> {
    let action: Action = action.parse()?;
    let gate = config.gate();

    let mut report = CheckReport {
        action,
        actor,
        decision: Decision::Allow,
        reason: None,
    };

    match gate.authorize(&actor, action, target.as_ref()) {
        Ok(()) => {}
        Err(e) if e.is_denial() => {
            report.decision = Decision::Deny;
            report.reason = Some(e.to_string());
            return Ok(report);
        }
        Err(e) => return Err(e.into()),
    }

    if action == Action::DELETE_USER
        && config.authz.guard_self_delete
        && let Some(t) = &target
        && let Err(e) = guard_self_deletion(&actor, t)
    {
        report.decision = Decision::Deny;
        report.reason = Some(e.to_string());
    }

    Ok(report)
}

/// One-line text form of a [`CheckReport`].
pub fn render_check(report: &CheckReport) -> String {
    match &report.reason {
        Some(reason) => format!("{} ({reason})", report.decision),
        None => report.decision.to_string(),
    }
}

// ============================================================================
// abilities
// ============================================================================

/// Outcome of `landtracker abilities`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AbilitiesReport {
    /// The requester.
    pub actor: Actor,
    /// Target-independent flags.
    pub global: UserAbilities,
    /// Flags over the given target, when one was given.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<Abilities>,
}

/// Collects the ability flags of `actor`.
pub fn abilities(config: &LandTrackerConfig, actor: Actor, target: Option<Target>) -> AbilitiesReport {
    let gate = config.gate();
    AbilitiesReport {
        actor,
        global: gate.user_abilities(&actor),
        target: target.map(|t| gate.abilities(&actor, &t)),
    }
}

// ============================================================================
// matrix
// ============================================================================

/// Target column of the decision matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Subject {
    /// The actor's own account.
    #[serde(rename = "self")]
    Own,
    /// Another account with this role.
    Other(Role),
}

/// Decisions for one role and one action across every target column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatrixRow {
    /// Actor role.
    pub role: Role,
    /// Action.
    pub action: Action,
    /// `(column, decision)` pairs in column order.
    pub cells: Vec<(Subject, Decision)>,
}

/// Column order of the matrix.
pub const SUBJECTS: [Subject; 4] = [
    Subject::Own,
    Subject::Other(Role::Administrator),
    Subject::Other(Role::Manager),
    Subject::Other(Role::Staff),
];

/// Decides every user action for every role against every target column.
pub fn decision_matrix(gate: &Gate) -> Vec<MatrixRow> {
    const ACTOR_ID: u64 = 1;
    const OTHER_ID: u64 = 2;

    let mut rows = Vec::new();
    for role in Role::ALL {
        let actor = Actor::new(ACTOR_ID, role);
        for action in Action::ALL
            .into_iter()
            .filter(|a| a.resource == Resource::User)
        {
            let cells = SUBJECTS
                .into_iter()
                .map(|subject| {
                    let target = match subject {
                        Subject::Own => Target::from(&actor),
                        Subject::Other(r) => Target::user(OTHER_ID, r),
                    };
                    let target = action.requires_target().then_some(target);
                    (subject, gate.check(&actor, action, target.as_ref()))
                })
                .collect();
            rows.push(MatrixRow {
                role,
                action,
                cells,
            });
        }
    }
    rows
}

/// Fixed-width text table of the matrix.
pub fn render_matrix(rows: &[MatrixRow]) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<14} {:<20} {:<6} {:<14} {:<8} {:<6}",
        "role", "action", "self", "administrator", "manager", "staff"
    );
    for row in rows {
        let cell = |i: usize| {
            row.cells
                .get(i)
                .map(|(_, d)| d.to_string())
                .unwrap_or_default()
        };
        let _ = writeln!(
            out,
            "{:<14} {:<20} {:<6} {:<14} {:<8} {:<6}",
            row.role.as_str(),
            row.action.to_string(),
            cell(0),
            cell(1),
            cell(2),
            cell(3)
        );
    }
    out
}

// ============================================================================
// Tests
// ============================================================================
