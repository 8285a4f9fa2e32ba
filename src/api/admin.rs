/// Admin API routes
///
/// Routes in this module sit behind both the bearer-auth middleware
/// and the admin gate.
use crate::{
    error::Result,
    models::UserResponse,
    response::ApiResponse,
    state::AppState,
};
use axum::extract::{Path, State};

/// GET /api/v1/admin/users
pub async fn list_users(State(state): State<AppState>) -> Result<ApiResponse<Vec<UserResponse>>> {
    let users = state.users.get_all().await?;
    Ok(ApiResponse::ok("users retrieved successfully", users))
}

/// DELETE /api/v1/admin/users/:id
///
/// Unlike the self-scoped delete, an admin may remove any account.
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<ApiResponse<()>> {
    state.users.delete(id).await?;
    Ok(ApiResponse::message("user deleted successfully"))
}
