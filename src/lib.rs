//! Userhub Library
//!
//! User management backend with JWT authentication, a two-tier role
//! model, and a PostgreSQL-backed credential store.
//!
//! This library exposes the core components for testing purposes.

pub mod api;
pub mod config;
pub mod db;
pub mod error;
pub mod middleware;
pub mod models;
pub mod response;
pub mod router;
pub mod services;
pub mod state;
pub mod store;

// Re-export commonly used types for convenience
pub use config::AppConfig;
pub use error::{Result, ServerError};
pub use services::{auth::AuthService, users::UserService};
pub use state::AppState;
