//! User service - roster use cases.
//!
//! Thin orchestration over the repository; existence checks and error
//! translation happen below, in the repository itself.

use async_trait::async_trait;
use chrono::NaiveDate;
use std::sync::Arc;

use crate::domain::User;
use crate::errors::AppResult;
use crate::infra::UserRepository;

/// User service trait for dependency injection.
#[async_trait]
pub trait UserService: Send + Sync {
    /// List every user in the roster
    async fn list_users(&self) -> AppResult<Vec<User>>;

    /// Get user by ID
    async fn get_user(&self, id: i32) -> AppResult<User>;

    /// Get user by unique handle
    async fn get_user_by_handle(&self, handle: &str) -> AppResult<User>;

    /// Create a new user
    async fn create_user(
        &self,
        handle: String,
        display_name: String,
        birthday: NaiveDate,
    ) -> AppResult<User>;

    /// Update a user, resupplying all mutable fields
    async fn update_user(
        &self,
        id: i32,
        handle: String,
        display_name: String,
        birthday: NaiveDate,
    ) -> AppResult<User>;

    /// Delete a user
    async fn delete_user(&self, id: i32) -> AppResult<()>;
}

/// Concrete implementation of UserService over the repository.
pub struct UserRoster {
    repository: Arc<dyn UserRepository>,
}

impl UserRoster {
    /// Create new user service instance
    pub fn new(repository: Arc<dyn UserRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl UserService for UserRoster {
    async fn list_users(&self) -> AppResult<Vec<User>> {
        self.repository.get_all().await
    }

    async fn get_user(&self, id: i32) -> AppResult<User> {
        self.repository.get_by_id(id).await
    }

    async fn get_user_by_handle(&self, handle: &str) -> AppResult<User> {
        self.repository.get_by_handle(handle).await
    }

    async fn create_user(
        &self,
        handle: String,
        display_name: String,
        birthday: NaiveDate,
    ) -> AppResult<User> {
        let user = self
            .repository
            .create(handle, display_name, birthday)
            .await?;
        tracing::info!(id = user.id, handle = %user.handle, "user created");
        Ok(user)
    }

    async fn update_user(
        &self,
        id: i32,
        handle: String,
        display_name: String,
        birthday: NaiveDate,
    ) -> AppResult<User> {
        let user = self
            .repository
            .update(id, handle, display_name, birthday)
            .await?;
        tracing::info!(id = user.id, "user updated");
        Ok(user)
    }

    async fn delete_user(&self, id: i32) -> AppResult<()> {
        self.repository.delete(id).await?;
        tracing::info!(id, "user deleted");
        Ok(())
    }
}
