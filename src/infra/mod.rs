//! Infrastructure layer - External systems integration
//!
//! This module handles all external system concerns:
//! - Database connections and migrations
//! - Repositories over the document collection

pub mod db;
pub mod repositories;

pub use db::{Database, Migrator};
pub use repositories::{UserChanges, UserRepository, UserStore};

#[cfg(any(test, feature = "test-utils"))]
pub use repositories::MockUserRepository;
