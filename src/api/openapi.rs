//! OpenAPI documentation configuration.
//!
//! Provides Swagger UI for API exploration and testing.

use utoipa::OpenApi;

use crate::api::handlers::user_handler;
use crate::domain::{UserListResponse, UserResponse};

/// OpenAPI documentation root
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Chillzone API",
        description = "Birthday roster API for the Chillzone guild",
        version = "0.1.0"
    ),
    paths(
        user_handler::list_users,
        user_handler::get_user,
        user_handler::get_user_by_handle,
        user_handler::create_user,
        user_handler::update_user,
        user_handler::delete_user,
    ),
    components(schemas(
        UserResponse,
        UserListResponse,
        user_handler::CreateUserRequest,
        user_handler::UpdateUserRequest,
    )),
    tags(
        (name = "Users", description = "Roster management endpoints")
    )
)]
pub struct ApiDoc;
