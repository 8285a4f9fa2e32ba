/// Router assembly
use crate::{api, middleware, services::AuthService, state::AppState};
use axum::{
    middleware as axum_middleware,
    routing::{delete, get, post, put},
    Router,
};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub fn create_router(state: AppState, auth_service: Arc<AuthService>) -> Router {
    // Public routes (no auth required)
    let public_routes = Router::new()
        .route("/auth/register", post(api::auth::register))
        .route("/auth/login", post(api::auth::login));

    // Protected routes (bearer token required)
    let protected_routes = Router::new()
        .route("/users", get(api::users::list))
        .route("/users/pagination", get(api::users::list_paginated))
        .route("/users/:id", get(api::users::get_by_id))
        .route("/users/:id", put(api::users::update))
        .route("/users/:id", delete(api::users::remove))
        .route("/profile", get(api::users::profile))
        .layer(axum_middleware::from_fn_with_state(
            Arc::clone(&auth_service),
            middleware::auth_middleware,
        ));

    // Admin routes (bearer token + admin role). Layers run outermost
    // last, so auth populates the identity before the admin gate.
    let admin_routes = Router::new()
        .route("/admin/users", get(api::admin::list_users))
        .route("/admin/users/:id", delete(api::admin::delete_user))
        .layer(axum_middleware::from_fn(middleware::require_admin))
        .layer(axum_middleware::from_fn_with_state(
            Arc::clone(&auth_service),
            middleware::auth_middleware,
        ));

    Router::new()
        .route("/health", get(api::health::health))
        .nest(
            "/api/v1",
            public_routes.merge(protected_routes).merge(admin_routes),
        )
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
