//! User domain entity and related types.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// User domain entity
///
/// `password_hash` is never serialized; only the update operation
/// may change `name`, `email` or `password_hash`, and `id` is
/// immutable once assigned by the store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
}

impl User {
    /// Create a new user entity
    pub fn new(id: Uuid, name: String, email: String, password_hash: String) -> Self {
        Self {
            id,
            name,
            email,
            password_hash,
        }
    }
}

/// User creation request
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateUser {
    /// User display name
    #[validate(length(min = 1, max = 100, message = "Name must be between 1 and 100 characters"))]
    #[schema(example = "John Doe")]
    pub name: String,
    /// User email address
    #[validate(email(message = "Invalid email format"))]
    #[schema(example = "user@example.com")]
    pub email: String,
    /// User password (minimum 6 characters)
    #[validate(length(min = 6, message = "Password must be at least 6 characters"))]
    #[schema(example = "SecurePass123!", min_length = 6)]
    pub password: String,
}

/// Partial user update request
///
/// `None` means "field not supplied"; absent fields are left untouched
/// by the update operation, never cleared.
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateUser {
    /// New display name
    #[validate(length(min = 1, max = 100, message = "Name must be between 1 and 100 characters"))]
    #[schema(example = "Jane Doe")]
    pub name: Option<String>,
    /// New email address
    #[validate(email(message = "Invalid email format"))]
    #[schema(example = "new@example.com")]
    pub email: Option<String>,
    /// New password (minimum 6 characters)
    #[validate(length(min = 6, message = "Password must be at least 6 characters"))]
    #[schema(example = "NewPass123!", min_length = 6)]
    pub password: Option<String>,
}

impl UpdateUser {
    /// Check whether the request carries no fields at all
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.password.is_none()
    }
}

/// User response (safe to return to client)
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UserResponse {
    /// Unique user identifier
    #[schema(example = "550e8400-e29b-41d4-a716-446655440000")]
    pub id: Uuid,
    /// User display name
    #[schema(example = "John Doe")]
    pub name: String,
    /// User email address
    #[schema(example = "user@example.com")]
    pub email: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_user_rejects_bad_email() {
        let payload = CreateUser {
            name: "Test".to_string(),
            email: "not-an-email".to_string(),
            password: "secret1".to_string(),
        };
        assert!(payload.validate().is_err());
    }

    #[test]
    fn test_create_user_rejects_long_name() {
        let payload = CreateUser {
            name: "x".repeat(101),
            email: "test@example.com".to_string(),
            password: "secret1".to_string(),
        };
        assert!(payload.validate().is_err());
    }

    #[test]
    fn test_update_user_skips_absent_fields() {
        let payload = UpdateUser {
            name: Some("New Name".to_string()),
            email: None,
            password: None,
        };
        assert!(payload.validate().is_ok());
        assert!(!payload.is_empty());
    }

    #[test]
    fn test_update_user_empty_detection() {
        assert!(UpdateUser::default().is_empty());
    }

    #[test]
    fn test_user_response_has_no_password_hash() {
        let user = User::new(
            Uuid::new_v4(),
            "Test".to_string(),
            "test@example.com".to_string(),
            "$argon2id$fake".to_string(),
        );
        let json = serde_json::to_value(UserResponse::from(user)).unwrap();
        assert!(json.get("password_hash").is_none());
        assert!(json.get("password").is_none());
    }
}
