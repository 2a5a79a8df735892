//! Domain types shared by the decision engine and its callers.

mod activity;
mod ids;
mod role;
mod user;

pub use activity::ActivityRecord;
pub use ids::{ActivityId, UserId};
pub use role::{Role, RoleSet};
pub use user::{Actor, UserRecord, UserStatus};
