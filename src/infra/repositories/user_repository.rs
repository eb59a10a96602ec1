//! User repository implementation.
//!
//! The single access point for reading and writing roster records.
//! Storage failures are translated here: an absent row becomes
//! `AppError::NotFound`, a unique-constraint violation on the handle
//! column becomes `AppError::HandleConflict`, and anything else is
//! surfaced as `AppError::Database` untouched.

use async_trait::async_trait;
use chrono::NaiveDate;
use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, Set, SqlErr};

use super::base::{DeleteRepository, ReadRepository, WriteRepository};
use super::entities::user::{self, ActiveModel, Entity as UserEntity};
use crate::domain::User;
use crate::errors::{AppError, AppResult, OptionExt};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// User repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// List every stored user, in no particular order
    async fn get_all(&self) -> AppResult<Vec<User>>;

    /// Get user by ID
    async fn get_by_id(&self, id: i32) -> AppResult<User>;

    /// Get user by unique handle
    async fn get_by_handle(&self, handle: &str) -> AppResult<User>;

    /// Create a new user; the store assigns the id
    async fn create(
        &self,
        handle: String,
        display_name: String,
        birthday: NaiveDate,
    ) -> AppResult<User>;

    /// Overwrite all mutable fields of an existing user
    async fn update(
        &self,
        id: i32,
        handle: String,
        display_name: String,
        birthday: NaiveDate,
    ) -> AppResult<User>;

    /// Delete user by ID
    async fn delete(&self, id: i32) -> AppResult<()>;
}

/// Concrete implementation of UserRepository backed by SeaORM
pub struct UserStore {
    db: DatabaseConnection,
}

impl UserStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl ReadRepository<UserEntity, user::Model> for UserStore {
    fn db(&self) -> &DatabaseConnection {
        &self.db
    }
}

impl WriteRepository<UserEntity, user::Model, ActiveModel> for UserStore {
    fn db(&self) -> &DatabaseConnection {
        &self.db
    }
}

impl DeleteRepository<UserEntity> for UserStore {
    fn db(&self) -> &DatabaseConnection {
        &self.db
    }
}

/// Translate a unique-constraint violation on the handle column into a
/// typed conflict; any other storage failure propagates untouched.
fn map_handle_conflict(err: AppError, handle: &str) -> AppError {
    match err {
        AppError::Database(db_err) => {
            let sql_err = db_err.sql_err();
            classify_db_err(sql_err, db_err, handle)
        }
        other => other,
    }
}

fn classify_db_err(sql_err: Option<SqlErr>, db_err: DbErr, handle: &str) -> AppError {
    match sql_err {
        Some(SqlErr::UniqueConstraintViolation(_)) => AppError::handle_conflict(handle),
        _ => AppError::Database(db_err),
    }
}

#[async_trait]
impl UserRepository for UserStore {
    async fn get_all(&self) -> AppResult<Vec<User>> {
        let models = self.find_all().await?;
        Ok(models.into_iter().map(User::from).collect())
    }

    async fn get_by_id(&self, id: i32) -> AppResult<User> {
        let model = self.find_by_id(id).await?;
        model.map(User::from).ok_or_not_found()
    }

    async fn get_by_handle(&self, handle: &str) -> AppResult<User> {
        let model = UserEntity::find()
            .filter(user::Column::Handle.eq(handle))
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        model.map(User::from).ok_or_not_found()
    }

    async fn create(
        &self,
        handle: String,
        display_name: String,
        birthday: NaiveDate,
    ) -> AppResult<User> {
        let active_model = ActiveModel {
            handle: Set(handle.clone()),
            display_name: Set(display_name),
            birthday: Set(birthday),
            ..Default::default()
        };

        let model = self
            .insert(active_model)
            .await
            .map_err(|e| map_handle_conflict(e, &handle))?;

        Ok(User::from(model))
    }

    async fn update(
        &self,
        id: i32,
        handle: String,
        display_name: String,
        birthday: NaiveDate,
    ) -> AppResult<User> {
        let existing = self.find_by_id(id).await?.ok_or(AppError::NotFound)?;

        let mut active: ActiveModel = existing.into();
        active.handle = Set(handle.clone());
        active.display_name = Set(display_name);
        active.birthday = Set(birthday);

        // A moved handle can collide with another row; surface that as a
        // typed conflict rather than an opaque storage failure.
        let model = self
            .persist(active)
            .await
            .map_err(|e| map_handle_conflict(e, &handle))?;

        Ok(User::from(model))
    }

    async fn delete(&self, id: i32) -> AppResult<()> {
        let rows_affected = self.delete_by_id(id).await?;
        if rows_affected == 0 {
            return Err(AppError::NotFound);
        }

        Ok(())
    }
}
