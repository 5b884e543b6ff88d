//! User identifier value type.
//!
//! Wraps a validated UUID so handlers can check the identifier's
//! structure before any store access. Construction goes through the
//! fallible `parse` only.

use std::fmt;

use uuid::Uuid;

use crate::errors::{AppError, AppResult};

/// Structurally validated user identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UserId(Uuid);

impl UserId {
    /// Parse an identifier from its wire representation.
    ///
    /// # Errors
    /// Returns `AppError::InvalidId` when the string is not a
    /// well-formed UUID. Existence of the record is a separate concern.
    pub fn parse(raw: &str) -> AppResult<Self> {
        Uuid::parse_str(raw).map(Self).map_err(|_| AppError::InvalidId)
    }

    /// Get the underlying UUID
    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl From<Uuid> for UserId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl From<UserId> for Uuid {
    fn from(id: UserId) -> Self {
        id.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_uuid() {
        let raw = "550e8400-e29b-41d4-a716-446655440000";
        let id = UserId::parse(raw).unwrap();
        assert_eq!(id.to_string(), raw);
    }

    #[test]
    fn test_parse_round_trips() {
        let original = Uuid::new_v4();
        let id = UserId::parse(&original.to_string()).unwrap();
        assert_eq!(id.as_uuid(), original);
    }

    #[test]
    fn test_parse_rejects_malformed_input() {
        for raw in ["", "abc", "123", "550e8400-e29b-41d4-a716", "not-a-uuid-at-all"] {
            let result = UserId::parse(raw);
            assert!(matches!(result, Err(AppError::InvalidId)), "accepted {:?}", raw);
        }
    }
}
