//! User domain entity and related types.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// User domain entity
///
/// The `handle` is the guild member's Discord nickname and is unique
/// across the roster, independent of the surrogate `id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i32,
    pub handle: String,
    pub display_name: String,
    pub birthday: NaiveDate,
}

/// User response (safe to return to client)
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct UserResponse {
    /// Unique user identifier
    #[schema(example = 1)]
    pub id: i32,
    /// Unique Discord nickname
    #[schema(example = "amy#0001")]
    pub handle: String,
    /// Display name
    #[schema(example = "Amy")]
    pub display_name: String,
    /// Birthday (year-month-day)
    #[schema(example = "2000-01-01")]
    pub birthday: NaiveDate,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            handle: user.handle,
            display_name: user.display_name,
            birthday: user.birthday,
        }
    }
}

/// Roster listing with a count alongside the users
#[derive(Debug, Serialize, ToSchema)]
pub struct UserListResponse {
    /// Number of users in the roster
    #[schema(example = 2)]
    pub count: usize,
    pub users: Vec<UserResponse>,
}

impl From<Vec<User>> for UserListResponse {
    fn from(users: Vec<User>) -> Self {
        let users: Vec<UserResponse> = users.into_iter().map(UserResponse::from).collect();
        Self {
            count: users.len(),
            users,
        }
    }
}
