/// Common test utilities and fixtures
use async_trait::async_trait;
use chrono::Utc;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::{Arc, Mutex};
use userhub::error::{Result, ServerError};
use userhub::models::{NewUser, User, DEFAULT_ROLE_ID};
use userhub::router::create_router;
use userhub::services::AuthService;
use userhub::state::AppState;
use userhub::store::{clamp_page_limit, UserStore};

/// Test user credentials
pub mod fixtures {
    pub const TEST_NAME: &str = "test user";
    pub const TEST_EMAIL: &str = "testuser@example.com";
    pub const TEST_PASSWORD: &str = "TestPassword123!";

    pub const ADMIN_NAME: &str = "admin";
    pub const ADMIN_EMAIL: &str = "admin@example.com";
    pub const ADMIN_PASSWORD: &str = "AdminPassword456!";
}

/// In-memory store implementing the same contract as the PostgreSQL
/// store, so the full router can be exercised without a database.
#[derive(Default)]
pub struct InMemoryStore {
    users: Mutex<Vec<User>>,
    next_id: AtomicI64,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self {
            users: Mutex::new(Vec::new()),
            next_id: AtomicI64::new(1),
        }
    }

    pub fn len(&self) -> usize {
        self.users.lock().unwrap().len()
    }
}

#[async_trait]
impl UserStore for InMemoryStore {
    async fn get_by_id(&self, id: i64) -> Result<Option<User>> {
        let users = self.users.lock().unwrap();
        Ok(users.iter().find(|u| u.id == id).cloned())
    }

    async fn get_by_email(&self, email: &str) -> Result<Option<User>> {
        let users = self.users.lock().unwrap();
        Ok(users.iter().find(|u| u.email == email).cloned())
    }

    async fn create(&self, new_user: NewUser) -> Result<User> {
        let mut users = self.users.lock().unwrap();
        if users.iter().any(|u| u.email == new_user.email) {
            return Err(ServerError::Conflict(
                "email is already registered".to_string(),
            ));
        }

        let now = Utc::now();
        let user = User {
            id: self.next_id.fetch_add(1, Ordering::SeqCst),
            name: new_user.name,
            email: new_user.email,
            password: new_user.password_hash,
            role_id: new_user.role_id.unwrap_or(DEFAULT_ROLE_ID),
            created_at: now,
            updated_at: now,
        };
        users.push(user.clone());
        Ok(user)
    }

    async fn update(&self, user: &User) -> Result<User> {
        let mut users = self.users.lock().unwrap();
        let stored = users
            .iter_mut()
            .find(|u| u.id == user.id)
            .ok_or_else(|| ServerError::NotFound("user not found".to_string()))?;

        stored.name = user.name.clone();
        stored.role_id = user.role_id;
        stored.updated_at = Utc::now();
        Ok(stored.clone())
    }

    async fn delete(&self, id: i64) -> Result<()> {
        let mut users = self.users.lock().unwrap();
        let before = users.len();
        users.retain(|u| u.id != id);
        if users.len() == before {
            return Err(ServerError::NotFound("user not found".to_string()));
        }
        Ok(())
    }

    async fn get_all(&self) -> Result<Vec<User>> {
        let mut users = self.users.lock().unwrap().clone();
        users.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        Ok(users)
    }

    async fn get_paginated(
        &self,
        page: i64,
        limit: i64,
        search: &str,
    ) -> Result<(Vec<User>, i64)> {
        let (page, limit) = clamp_page_limit(page, limit);
        let needle = search.to_lowercase();

        let mut matching: Vec<User> = self
            .users
            .lock()
            .unwrap()
            .iter()
            .filter(|u| {
                search.is_empty()
                    || u.name.to_lowercase().contains(&needle)
                    || u.email.to_lowercase().contains(&needle)
            })
            .cloned()
            .collect();
        matching.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));

        let total = matching.len() as i64;
        let offset = ((page - 1) * limit) as usize;
        let slice = matching
            .into_iter()
            .skip(offset)
            .take(limit as usize)
            .collect();

        Ok((slice, total))
    }
}

pub fn create_test_auth_service() -> Arc<AuthService> {
    Arc::new(AuthService::new("test-secret-key".to_string(), 24))
}

/// Build the full application router over an in-memory store
pub fn create_test_app() -> (axum::Router, Arc<AuthService>, Arc<InMemoryStore>) {
    let store = Arc::new(InMemoryStore::new());
    let auth_service = create_test_auth_service();

    let state = AppState::new(
        Arc::clone(&store) as Arc<dyn UserStore>,
        Arc::clone(&auth_service),
    );
    let app = create_router(state, Arc::clone(&auth_service));

    (app, auth_service, store)
}

/// Insert a user directly into the store and return it with a token
pub async fn seed_user(
    store: &InMemoryStore,
    auth: &AuthService,
    name: &str,
    email: &str,
    password: &str,
    role_id: Option<i64>,
) -> (User, String) {
    let password_hash = auth.hash_password(password).unwrap();
    let user = store
        .create(NewUser {
            name: name.to_string(),
            email: email.to_string(),
            password_hash,
            role_id,
        })
        .await
        .unwrap();

    let token = auth
        .issue_token(user.id, &user.email, user.role_id)
        .unwrap();

    (user, token)
}
