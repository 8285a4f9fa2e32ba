/// Domain entities and response projections
use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;

/// Role assigned to accounts created without an explicit role
pub const DEFAULT_ROLE_ID: i64 = 1;
/// Role required by admin-only routes; compared by exact numeric match
pub const ADMIN_ROLE_ID: i64 = 2;

/// User record as stored. The password hash never leaves the process;
/// outward-facing code converts to [`UserResponse`] instead.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub password: String,
    pub role_id: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Fields for inserting a new user. The store assigns id and
/// timestamps, and falls back to [`DEFAULT_ROLE_ID`] when `role_id`
/// is `None`.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub role_id: Option<i64>,
}

/// Public projection of a user, with the password omitted
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct UserResponse {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub role_id: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            name: user.name.clone(),
            email: user.email.clone(),
            role_id: user.role_id,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self::from(&user)
    }
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: UserResponse,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct PaginationMeta {
    pub page: i64,
    pub limit: i64,
    pub total: i64,
    pub total_pages: i64,
}

#[derive(Debug, Serialize)]
pub struct PaginatedUsers {
    pub data: Vec<UserResponse>,
    pub pagination: PaginationMeta,
}
