//! Application state - Dependency injection container.

use std::sync::Arc;

use crate::infra::{Database, UserStore};
use crate::services::{UserRoster, UserService};

/// Application state containing all services.
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
        let repository = Arc::new(UserStore::new(database.get_connection()));
        let user_service = Arc::new(UserRoster::new(repository));

        Self {
            user_service,
            database,
        }
    }

    /// Create application state with a manually injected service.
    ///
    /// Used by tests to swap in mock services.
    pub fn new(user_service: Arc<dyn UserService>, database: Arc<Database>) -> Self {
        Self {
            user_service,
            database,
        }
    }
}
