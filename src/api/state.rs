//! Application state - Dependency injection container.
//!
//! The store client is constructed once at process start and handed to
//! the service here; the core never opens or closes connections itself.

use std::sync::Arc;

use crate::infra::{Database, UserStore};
use crate::services::{UserDirectory, UserService};

/// Application state containing all services (DI container).
#[derive(Clone)]
pub struct AppState {
    /// User service
    pub user_service: Arc<dyn UserService>,
    /// Database connection
    pub database: Arc<Database>,
}

impl AppState {
    /// Create application state from a connected database.
    pub fn from_database(database: Arc<Database>) -> Self {
        let repo = Arc::new(UserStore::new(database.get_connection()));
        let user_service = Arc::new(UserDirectory::new(repo));

        Self {
            user_service,
            database,
        }
    }

    /// Create new application state with manually injected services.
    pub fn new(user_service: Arc<dyn UserService>, database: Arc<Database>) -> Self {
        Self {
            user_service,
            database,
        }
    }
}
