/// Shared application state
use crate::services::{AuthService, UserService};
use crate::store::UserStore;
use std::sync::Arc;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub users: UserService,
    pub auth: Arc<AuthService>,
}

impl AppState {
    pub fn new(store: Arc<dyn UserStore>, auth: Arc<AuthService>) -> Self {
        Self {
            users: UserService::new(store, Arc::clone(&auth)),
            auth,
        }
    }
}
