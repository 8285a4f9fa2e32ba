/// Account service - registration, login, and profile management
use crate::error::{Result, ServerError};
use crate::models::{LoginResponse, NewUser, PaginatedUsers, PaginationMeta, UserResponse};
use crate::services::AuthService;
use crate::store::{clamp_page_limit, UserStore};
use std::sync::Arc;

#[derive(Clone)]
pub struct UserService {
    store: Arc<dyn UserStore>,
    auth: Arc<AuthService>,
}

impl UserService {
    pub fn new(store: Arc<dyn UserStore>, auth: Arc<AuthService>) -> Self {
        Self { store, auth }
    }

    /// Register a new account with the default role
    pub async fn register(&self, name: &str, email: &str, password: &str) -> Result<UserResponse> {
        validate_name(name)?;
        validate_email(email)?;
        validate_password(password)?;

        if self.store.get_by_email(email).await?.is_some() {
            return Err(ServerError::Conflict(
                "email is already registered".to_string(),
            ));
        }

        let password_hash = self.auth.hash_password(password)?;
        let user = self
            .store
            .create(NewUser {
                name: name.to_string(),
                email: email.to_string(),
                password_hash,
                role_id: None,
            })
            .await?;

        Ok(UserResponse::from(user))
    }

    /// Authenticate and issue a session token.
    ///
    /// Unknown email and wrong password produce the identical message
    /// so a caller cannot probe which one failed.
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginResponse> {
        let user = self
            .store
            .get_by_email(email)
            .await?
            .ok_or_else(|| ServerError::Auth("invalid email or password".to_string()))?;

        if !self.auth.verify_password(password, &user.password)? {
            return Err(ServerError::Auth("invalid email or password".to_string()));
        }

        let token = self.auth.issue_token(user.id, &user.email, user.role_id)?;

        Ok(LoginResponse {
            token,
            user: UserResponse::from(user),
        })
    }

    pub async fn get_by_id(&self, id: i64) -> Result<UserResponse> {
        let user = self
            .store
            .get_by_id(id)
            .await?
            .ok_or_else(|| ServerError::NotFound("user not found".to_string()))?;

        Ok(UserResponse::from(user))
    }

    pub async fn get_all(&self) -> Result<Vec<UserResponse>> {
        let users = self.store.get_all().await?;
        Ok(users.into_iter().map(UserResponse::from).collect())
    }

    pub async fn get_paginated(
        &self,
        page: i64,
        limit: i64,
        search: &str,
    ) -> Result<PaginatedUsers> {
        let (page, limit) = clamp_page_limit(page, limit);
        let (users, total) = self.store.get_paginated(page, limit, search).await?;

        let total_pages = (total + limit - 1) / limit;

        Ok(PaginatedUsers {
            data: users.into_iter().map(UserResponse::from).collect(),
            pagination: PaginationMeta {
                page,
                limit,
                total,
                total_pages,
            },
        })
    }

    /// Only the name is mutable through this path
    pub async fn update(&self, id: i64, name: &str) -> Result<UserResponse> {
        validate_name(name)?;

        let mut user = self
            .store
            .get_by_id(id)
            .await?
            .ok_or_else(|| ServerError::NotFound("user not found".to_string()))?;

        user.name = name.to_string();
        let updated = self.store.update(&user).await?;

        Ok(UserResponse::from(updated))
    }

    pub async fn delete(&self, id: i64) -> Result<()> {
        self.store
            .get_by_id(id)
            .await?
            .ok_or_else(|| ServerError::NotFound("user not found".to_string()))?;

        self.store.delete(id).await
    }
}

fn validate_name(name: &str) -> Result<()> {
    if name.len() < 3 {
        return Err(ServerError::Validation(
            "name must be at least 3 characters".to_string(),
        ));
    }
    Ok(())
}

fn validate_email(email: &str) -> Result<()> {
    let valid = match email.split_once('@') {
        Some((local, domain)) => !local.is_empty() && domain.contains('.') && domain.len() > 2,
        None => false,
    };

    if !valid {
        return Err(ServerError::Validation(
            "email must be a valid address".to_string(),
        ));
    }
    Ok(())
}

fn validate_password(password: &str) -> Result<()> {
    if password.len() < 6 {
        return Err(ServerError::Validation(
            "password must be at least 6 characters".to_string(),
        ));
    }
    Ok(())
}
