/// User API routes
use crate::{
    error::{Result, ServerError},
    middleware::CurrentUser,
    models::{PaginatedUsers, UserResponse},
    response::ApiResponse,
    state::AppState,
};
use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct PaginationQuery {
    #[serde(default = "default_page")]
    pub page: i64,
    #[serde(default = "default_limit")]
    pub limit: i64,
    #[serde(default)]
    pub search: String,
}

fn default_page() -> i64 {
    1
}

fn default_limit() -> i64 {
    10
}

#[derive(Debug, Deserialize)]
pub struct UpdateUserRequest {
    pub name: String,
}

/// GET /api/v1/users
pub async fn list(State(state): State<AppState>) -> Result<ApiResponse<Vec<UserResponse>>> {
    let users = state.users.get_all().await?;
    Ok(ApiResponse::ok("users retrieved successfully", users))
}

/// GET /api/v1/users/pagination?page=1&limit=10&search=john
pub async fn list_paginated(
    State(state): State<AppState>,
    Query(query): Query<PaginationQuery>,
) -> Result<ApiResponse<PaginatedUsers>> {
    let result = state
        .users
        .get_paginated(query.page, query.limit, &query.search)
        .await?;

    Ok(ApiResponse::ok("users retrieved successfully", result))
}

/// GET /api/v1/users/:id
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<ApiResponse<UserResponse>> {
    let user = state.users.get_by_id(id).await?;
    Ok(ApiResponse::ok("user retrieved successfully", user))
}

/// PUT /api/v1/users/:id
///
/// Self-scoped: the authenticated caller may only update their own
/// record, regardless of role.
pub async fn update(
    State(state): State<AppState>,
    current: CurrentUser,
    Path(id): Path<i64>,
    Json(req): Json<UpdateUserRequest>,
) -> Result<ApiResponse<UserResponse>> {
    if current.id != id {
        return Err(ServerError::Forbidden(
            "you can only update your own profile".to_string(),
        ));
    }

    let user = state.users.update(id, &req.name).await?;
    Ok(ApiResponse::ok("user updated successfully", user))
}

/// DELETE /api/v1/users/:id
///
/// Self-scoped, like update.
pub async fn remove(
    State(state): State<AppState>,
    current: CurrentUser,
    Path(id): Path<i64>,
) -> Result<ApiResponse<()>> {
    if current.id != id {
        return Err(ServerError::Forbidden(
            "you can only delete your own account".to_string(),
        ));
    }

    state.users.delete(id).await?;
    Ok(ApiResponse::message("user deleted successfully"))
}

/// GET /api/v1/profile
pub async fn profile(
    State(state): State<AppState>,
    current: CurrentUser,
) -> Result<ApiResponse<UserResponse>> {
    let user = state.users.get_by_id(current.id).await?;
    Ok(ApiResponse::ok("profile retrieved successfully", user))
}
