/// Authentication API routes
use crate::{
    error::Result,
    models::{LoginResponse, UserResponse},
    response::ApiResponse,
    state::AppState,
};
use axum::{extract::State, Json};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// POST /api/v1/auth/register
pub async fn register(
    State(state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> Result<ApiResponse<UserResponse>> {
    let user = state
        .users
        .register(&req.name, &req.email, &req.password)
        .await?;

    Ok(ApiResponse::created("user registered successfully", user))
}

/// POST /api/v1/auth/login
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<ApiResponse<LoginResponse>> {
    let result = state.users.login(&req.email, &req.password).await?;

    Ok(ApiResponse::ok("login successful", result))
}
