//! Numeric identifiers for users and activity records.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::Error;

/// Identifier of a user account.
///
/// Actors and user targets share this id space, which is what makes
/// ownership checks (`actor.id == target.id`) meaningful.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(u64);

impl UserId {
    /// Creates a user id from its raw value.
    ///
    /// # Examples
    ///
    /// ```
    /// use landtracker_core::UserId;
    ///
    /// let id = UserId::new(7);
    /// assert_eq!(id.get(), 7);
    /// ```
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Returns the raw value.
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for UserId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl std::str::FromStr for UserId {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        s.trim()
            .parse::<u64>()
            .map(Self)
            .map_err(|_| Error::invalid_id(s))
    }
}

/// Identifier of an activity log record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ActivityId(u64);

impl ActivityId {
    /// Creates an activity id from its raw value.
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Returns the raw value.
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ActivityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for ActivityId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl std::str::FromStr for ActivityId {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        s.trim()
            .parse::<u64>()
            .map(Self)
            .map_err(|_| Error::invalid_id(s))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_user_id_display() {
        assert_eq!(UserId::new(42).to_string(), "42");
    }

    #[test]
    fn test_user_id_from_str() {
        let id: UserId = " 5 ".parse().unwrap();
        assert_eq!(id, UserId::new(5));
    }

    #[test]
    fn test_user_id_from_str_rejects_garbage() {
        let err = "five".parse::<UserId>().unwrap_err();
        assert!(matches!(err, Error::InvalidId { .. }));
    }

    #[test]
    fn test_user_id_from_str_rejects_negative() {
        assert!("-1".parse::<UserId>().is_err());
    }

    #[test]
    fn test_user_id_serializes_as_number() {
        let json = serde_json::to_string(&UserId::new(9)).unwrap();
        assert_eq!(json, "9");
        let back: UserId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, UserId::new(9));
    }

    #[test]
    fn test_activity_id_from_u64() {
        let id = ActivityId::from(11);
        assert_eq!(id.get(), 11);
        assert_eq!(id.to_string(), "11");
    }

    #[test]
    fn test_activity_id_from_str() {
        let id: ActivityId = "300".parse().unwrap();
        assert_eq!(id, ActivityId::new(300));
        assert!("".parse::<ActivityId>().is_err());
    }
}
