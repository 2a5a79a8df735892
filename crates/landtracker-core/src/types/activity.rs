//! Activity log records.
//!
//! Records are written by the application's activity logger and never
//! modified afterwards. The owning user is fixed at construction; there is
//! no setter for any field.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::net::IpAddr;

use super::ids::{ActivityId, UserId};

/// One entry of the audit trail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityRecord {
    id: ActivityId,
    user_id: UserId,
    action: String,
    description: String,
    ip_address: Option<IpAddr>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl ActivityRecord {
    /// Creates a record stamped with the current time.
    pub fn new(
        id: impl Into<ActivityId>,
        user_id: impl Into<UserId>,
        action: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: id.into(),
            user_id: user_id.into(),
            action: action.into(),
            description: description.into(),
            ip_address: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Attaches the source address of the request that produced the record.
    pub fn with_ip_address(mut self, ip: IpAddr) -> Self {
        self.ip_address = Some(ip);
        self
    }

    /// Overrides both timestamps; used when loading stored records.
    pub fn with_timestamps(mut self, created_at: DateTime<Utc>, updated_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self.updated_at = updated_at;
        self
    }

    /// Record id.
    pub fn id(&self) -> ActivityId {
        self.id
    }

    /// The user whose action this record describes.
    pub fn owner_id(&self) -> UserId {
        self.user_id
    }

    /// Short action label, e.g. `login` or `user.update`.
    pub fn action(&self) -> &str {
        &self.action
    }

    /// Human-readable description.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Source address, when recorded.
    pub fn ip_address(&self) -> Option<IpAddr> {
        self.ip_address
    }

    /// Creation time.
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Last update time.
    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_activity_record_new() {
        let record = ActivityRecord::new(1, 7, "login", "Signed in");
        assert_eq!(record.id(), ActivityId::new(1));
        assert_eq!(record.owner_id(), UserId::new(7));
        assert_eq!(record.action(), "login");
        assert_eq!(record.description(), "Signed in");
        assert!(record.ip_address().is_none());
        assert_eq!(record.created_at(), record.updated_at());
    }

    #[test]
    fn test_activity_record_builders() {
        let created = Utc.with_ymd_and_hms(2024, 3, 1, 8, 30, 0).unwrap();
        let updated = Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).unwrap();
        let record = ActivityRecord::new(2, 9, "user.update", "Updated profile")
            .with_ip_address("203.0.113.4".parse().unwrap())
            .with_timestamps(created, updated);

        assert_eq!(record.ip_address().unwrap().to_string(), "203.0.113.4");
        assert_eq!(record.created_at(), created);
        assert_eq!(record.updated_at(), updated);
        assert_eq!(record.owner_id(), UserId::new(9));
    }

    #[test]
    fn test_activity_record_serde() {
        let record = ActivityRecord::new(3, 4, "logout", "Signed out")
            .with_ip_address("::1".parse().unwrap());
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["user_id"], 4);
        assert_eq!(json["ip_address"], "::1");

        let back: ActivityRecord = serde_json::from_value(json).unwrap();
        assert_eq!(back, record);
    }
}
