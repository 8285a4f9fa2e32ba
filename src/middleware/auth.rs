/// Authentication and authorization middleware
use crate::{
    error::ServerError,
    models::ADMIN_ROLE_ID,
    services::AuthService,
};
use axum::{
    extract::{FromRequestParts, Request, State},
    http::request::Parts,
    middleware::Next,
    response::Response,
};
use std::sync::Arc;

/// Authenticated caller identity, attached to request extensions by
/// [`auth_middleware`] and read back through the extractor impl.
/// Strongly typed on purpose: handlers never touch a string-keyed bag.
#[derive(Debug, Clone)]
pub struct CurrentUser {
    pub id: i64,
    pub email: String,
    pub role_id: i64,
}

/// Middleware that extracts and validates a bearer token from the
/// Authorization header, rejecting the request with 401 otherwise
pub async fn auth_middleware(
    State(auth_service): State<Arc<AuthService>>,
    mut request: Request,
    next: Next,
) -> Result<Response, ServerError> {
    let token = bearer_token(&request)
        .ok_or_else(|| ServerError::Auth("missing or malformed authorization header".to_string()))?;

    let claims = auth_service.verify_token(token).map_err(|e| {
        tracing::warn!("Token verification failed: {}", e);
        ServerError::Auth(format!("invalid token: {}", e))
    })?;

    request.extensions_mut().insert(CurrentUser {
        id: claims.user_id,
        email: claims.email,
        role_id: claims.role_id,
    });

    Ok(next.run(request).await)
}

/// Variant for routes that must not reject anonymous callers: a
/// missing or invalid token simply leaves the identity unset.
pub async fn optional_auth_middleware(
    State(auth_service): State<Arc<AuthService>>,
    mut request: Request,
    next: Next,
) -> Response {
    if let Some(token) = bearer_token(&request) {
        if let Ok(claims) = auth_service.verify_token(token) {
            request.extensions_mut().insert(CurrentUser {
                id: claims.user_id,
                email: claims.email,
                role_id: claims.role_id,
            });
        }
    }

    next.run(request).await
}

/// Admin gate. Must run after [`auth_middleware`]; role comparison is
/// by exact numeric match against the reserved admin id.
pub async fn require_admin(request: Request, next: Next) -> Result<Response, ServerError> {
    let current = request
        .extensions()
        .get::<CurrentUser>()
        .ok_or_else(|| ServerError::Auth("unauthorized".to_string()))?;

    if current.role_id != ADMIN_ROLE_ID {
        return Err(ServerError::Forbidden(
            "you don't have permission to access this resource".to_string(),
        ));
    }

    Ok(next.run(request).await)
}

fn bearer_token(request: &Request) -> Option<&str> {
    request
        .headers()
        .get(axum::http::header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "))
}

/// Implement FromRequestParts so CurrentUser can be used as an extractor
#[axum::async_trait]
impl<S> FromRequestParts<S> for CurrentUser
where
    S: Send + Sync,
{
    type Rejection = ServerError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<CurrentUser>()
            .cloned()
            .ok_or_else(|| ServerError::Auth("not authenticated".to_string()))
    }
}
