//! User handlers.

use axum::{
    extract::{Path, State},
    response::Json,
    routing::get,
    Router,
};
use chrono::NaiveDate;
use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

use crate::api::extractors::ValidatedJson;
use crate::api::AppState;
use crate::domain::{UserListResponse, UserResponse};
use crate::errors::AppResult;
use crate::types::{Created, NoContent};

/// User creation request with validation
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateUserRequest {
    /// Unique Discord nickname
    #[validate(length(min = 1, message = "Handle cannot be empty"))]
    #[schema(example = "amy#0001")]
    pub handle: String,
    /// Display name
    #[validate(length(min = 1, message = "Display name cannot be empty"))]
    #[schema(example = "Amy")]
    pub display_name: String,
    /// Birthday (year-month-day)
    #[schema(example = "2000-01-01")]
    pub birthday: NaiveDate,
}

/// User update request; all fields must be resupplied
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateUserRequest {
    /// Unique Discord nickname
    #[validate(length(min = 1, message = "Handle cannot be empty"))]
    #[schema(example = "amy#0002")]
    pub handle: String,
    /// Display name
    #[validate(length(min = 1, message = "Display name cannot be empty"))]
    #[schema(example = "Amy")]
    pub display_name: String,
    /// Birthday (year-month-day)
    #[schema(example = "2000-01-01")]
    pub birthday: NaiveDate,
}

/// Create user routes
pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_users).post(create_user))
        .route("/by_handle/:handle", get(get_user_by_handle))
        .route(
            "/:id",
            get(get_user).patch(update_user).delete(delete_user),
        )
}

/// List all users
#[utoipa::path(
    get,
    path = "/users",
    tag = "Users",
    responses(
        (status = 200, description = "Roster with user count", body = UserListResponse)
    )
)]
pub async fn list_users(State(state): State<AppState>) -> AppResult<Json<UserListResponse>> {
    let users = state.user_service.list_users().await?;
    Ok(Json(UserListResponse::from(users)))
}

/// Get user by ID
#[utoipa::path(
    get,
    path = "/users/{id}",
    tag = "Users",
    params(
        ("id" = i32, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User profile", body = UserResponse),
        (status = 404, description = "User not found")
    )
)]
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<UserResponse>> {
    let user = state.user_service.get_user(id).await?;
    Ok(Json(UserResponse::from(user)))
}

/// Get user by unique handle
#[utoipa::path(
    get,
    path = "/users/by_handle/{handle}",
    tag = "Users",
    params(
        ("handle" = String, Path, description = "Discord nickname")
    ),
    responses(
        (status = 200, description = "User profile", body = UserResponse),
        (status = 404, description = "User not found")
    )
)]
pub async fn get_user_by_handle(
    State(state): State<AppState>,
    Path(handle): Path<String>,
) -> AppResult<Json<UserResponse>> {
    let user = state.user_service.get_user_by_handle(&handle).await?;
    Ok(Json(UserResponse::from(user)))
}

/// Create a new user
#[utoipa::path(
    post,
    path = "/users",
    tag = "Users",
    request_body = CreateUserRequest,
    responses(
        (status = 201, description = "User created", body = UserResponse),
        (status = 400, description = "Handle already exists or invalid input")
    )
)]
pub async fn create_user(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateUserRequest>,
) -> AppResult<Created<UserResponse>> {
    let user = state
        .user_service
        .create_user(payload.handle, payload.display_name, payload.birthday)
        .await?;
    Ok(Created(UserResponse::from(user)))
}

/// Update a user, overwriting all mutable fields
#[utoipa::path(
    patch,
    path = "/users/{id}",
    tag = "Users",
    params(
        ("id" = i32, Path, description = "User ID")
    ),
    request_body = UpdateUserRequest,
    responses(
        (status = 201, description = "User updated", body = UserResponse),
        (status = 400, description = "Handle already exists or invalid input"),
        (status = 404, description = "User not found")
    )
)]
pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    ValidatedJson(payload): ValidatedJson<UpdateUserRequest>,
) -> AppResult<Created<UserResponse>> {
    let user = state
        .user_service
        .update_user(id, payload.handle, payload.display_name, payload.birthday)
        .await?;
    Ok(Created(UserResponse::from(user)))
}

/// Delete a user
#[utoipa::path(
    delete,
    path = "/users/{id}",
    tag = "Users",
    params(
        ("id" = i32, Path, description = "User ID")
    ),
    responses(
        (status = 204, description = "User deleted"),
        (status = 404, description = "User not found")
    )
)]
pub async fn delete_user(State(state): State<AppState>, Path(id): Path<i32>) -> AppResult<NoContent> {
    state.user_service.delete_user(id).await?;
    Ok(NoContent)
}
