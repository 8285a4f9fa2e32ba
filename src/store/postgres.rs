/// PostgreSQL implementation of the user store
use super::{clamp_page_limit, UserStore};
use crate::error::{Result, ServerError};
use crate::models::{NewUser, User, DEFAULT_ROLE_ID};
use async_trait::async_trait;
use sqlx::PgPool;

#[derive(Debug, Clone)]
pub struct PgUserStore {
    pool: PgPool,
}

impl PgUserStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserStore for PgUserStore {
    async fn get_by_id(&self, id: i64) -> Result<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            "SELECT id, name, email, password, role_id, created_at, updated_at
             FROM users WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    async fn get_by_email(&self, email: &str) -> Result<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            "SELECT id, name, email, password, role_id, created_at, updated_at
             FROM users WHERE email = $1",
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    async fn create(&self, new_user: NewUser) -> Result<User> {
        let role_id = new_user.role_id.unwrap_or(DEFAULT_ROLE_ID);

        let result = sqlx::query_as::<_, User>(
            "INSERT INTO users (name, email, password, role_id)
             VALUES ($1, $2, $3, $4)
             RETURNING id, name, email, password, role_id, created_at, updated_at",
        )
        .bind(&new_user.name)
        .bind(&new_user.email)
        .bind(&new_user.password_hash)
        .bind(role_id)
        .fetch_one(&self.pool)
        .await;

        match result {
            Ok(user) => Ok(user),
            Err(sqlx::Error::Database(e)) if e.is_unique_violation() => Err(
                ServerError::Conflict("email is already registered".to_string()),
            ),
            Err(e) => Err(e.into()),
        }
    }

    async fn update(&self, user: &User) -> Result<User> {
        let updated = sqlx::query_as::<_, User>(
            "UPDATE users
             SET name = $1, role_id = $2, updated_at = now()
             WHERE id = $3
             RETURNING id, name, email, password, role_id, created_at, updated_at",
        )
        .bind(&user.name)
        .bind(user.role_id)
        .bind(user.id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| ServerError::NotFound("user not found".to_string()))?;

        Ok(updated)
    }

    async fn delete(&self, id: i64) -> Result<()> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(ServerError::NotFound("user not found".to_string()));
        }

        Ok(())
    }

    async fn get_all(&self) -> Result<Vec<User>> {
        let users = sqlx::query_as::<_, User>(
            "SELECT id, name, email, password, role_id, created_at, updated_at
             FROM users ORDER BY created_at DESC",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(users)
    }

    async fn get_paginated(
        &self,
        page: i64,
        limit: i64,
        search: &str,
    ) -> Result<(Vec<User>, i64)> {
        let (page, limit) = clamp_page_limit(page, limit);
        let offset = (page - 1) * limit;
        let pattern = format!("%{}%", search);

        // Count and page slice are two independent statements; a
        // concurrent insert between them can skew `total` slightly.
        let total: i64 = if search.is_empty() {
            sqlx::query_scalar("SELECT COUNT(*) FROM users")
                .fetch_one(&self.pool)
                .await?
        } else {
            sqlx::query_scalar("SELECT COUNT(*) FROM users WHERE name ILIKE $1 OR email ILIKE $1")
                .bind(&pattern)
                .fetch_one(&self.pool)
                .await?
        };

        let users = if search.is_empty() {
            sqlx::query_as::<_, User>(
                "SELECT id, name, email, password, role_id, created_at, updated_at
                 FROM users
                 ORDER BY created_at DESC
                 LIMIT $1 OFFSET $2",
            )
            .bind(limit)
            .bind(offset)
            .fetch_all(&self.pool)
            .await?
        } else {
            sqlx::query_as::<_, User>(
                "SELECT id, name, email, password, role_id, created_at, updated_at
                 FROM users
                 WHERE name ILIKE $1 OR email ILIKE $1
                 ORDER BY created_at DESC
                 LIMIT $2 OFFSET $3",
            )
            .bind(&pattern)
            .bind(limit)
            .bind(offset)
            .fetch_all(&self.pool)
            .await?
        };

        Ok((users, total))
    }
}
