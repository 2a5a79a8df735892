//! Checks the user controller runs in addition to the policies.

use landtracker_core::Actor;

use crate::error::{Error, Result};
use crate::target::Target;

/// Refuses an account deleting itself.
///
/// The delete policy allows an administrator to delete any account,
/// including their own. Whoever performs the deletion runs this guard too,
/// so the last administrator cannot lock everyone out by accident.
/// Activity targets always pass.
pub fn guard_self_deletion(actor: &Actor, target: &Target) -> Result<()> {
    match target {
        Target::User { id, .. } if *id == actor.id => {
            log::warn!("{actor} attempted to delete their own account");
            Err(Error::SelfDeletion { actor: *actor })
        }
        _ => Ok(()),
    }
}
