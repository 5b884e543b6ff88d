//! User service - Handles the user resource lifecycle.
//!
//! Owns validation, email uniqueness enforcement and the four
//! lifecycle operations against the store. Stateless between calls;
//! the repository is the single source of truth for every operation.

use async_trait::async_trait;
use std::sync::Arc;
use validator::Validate;

use crate::domain::{CreateUser, Password, UpdateUser, User, UserId};
use crate::errors::{AppError, AppResult, OptionExt};
use crate::infra::{UserChanges, UserRepository};

/// User service trait for dependency injection.
#[async_trait]
pub trait UserService: Send + Sync {
    /// Create a new user from validated input
    async fn create_user(&self, payload: CreateUser) -> AppResult<User>;

    /// Get user by ID
    async fn get_user(&self, id: UserId) -> AppResult<User>;

    /// Apply a partial update; only supplied fields change
    async fn update_user(&self, id: UserId, payload: UpdateUser) -> AppResult<User>;

    /// Permanently delete a user
    async fn delete_user(&self, id: UserId) -> AppResult<()>;
}

/// Concrete implementation of UserService using a repository.
pub struct UserDirectory {
    repo: Arc<dyn UserRepository>,
}

impl UserDirectory {
    /// Create new user service instance with repository
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl UserService for UserDirectory {
    async fn create_user(&self, payload: CreateUser) -> AppResult<User> {
        payload.validate()?;

        // Advisory uniqueness check; the unique index on email covers
        // the window between this read and the insert below.
        if self.repo.find_by_email(&payload.email).await?.is_some() {
            return Err(AppError::DuplicateEmail);
        }

        let digest = Password::new(&payload.password)?;

        self.repo
            .insert(payload.name, payload.email, digest.into_string())
            .await
    }

    async fn get_user(&self, id: UserId) -> AppResult<User> {
        self.repo.find_by_id(id.as_uuid()).await?.ok_or_not_found()
    }

    async fn update_user(&self, id: UserId, payload: UpdateUser) -> AppResult<User> {
        let existing = self.repo.find_by_id(id.as_uuid()).await?.ok_or_not_found()?;

        if payload.is_empty() {
            return Err(AppError::validation("Nothing to update"));
        }

        payload.validate()?;

        // Re-check uniqueness only when the email actually changes;
        // a user's own current address is never a conflict.
        if let Some(ref email) = payload.email {
            if *email != existing.email
                && self
                    .repo
                    .find_by_email_excluding(email, existing.id)
                    .await?
                    .is_some()
            {
                return Err(AppError::DuplicateEmail);
            }
        }

        let password_hash = match payload.password {
            Some(ref plain) => Some(Password::new(plain)?.into_string()),
            None => None,
        };

        let changes = UserChanges {
            name: payload.name,
            email: payload.email,
            password_hash,
        };

        self.repo.update(existing.id, changes).await
    }

    async fn delete_user(&self, id: UserId) -> AppResult<()> {
        self.repo.delete(id.as_uuid()).await
    }
}
