/// Authentication service - JWT and password handling
use crate::error::{Result, ServerError};
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone)]
pub struct AuthService {
    secret: String,
    token_ttl: Duration,
}

/// Session claims carried by every issued token. Stateless: nothing is
/// stored server-side, so an issued token stays valid until `exp`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claims {
    pub user_id: i64,
    pub email: String,
    pub role_id: i64,
    pub iat: i64,
    pub nbf: i64,
    pub exp: i64,
}

impl AuthService {
    pub fn new(secret: String, token_ttl_hours: i64) -> Self {
        Self::with_ttl(secret, Duration::hours(token_ttl_hours))
    }

    /// Construct with an arbitrary TTL; used by tests to exercise the
    /// expiry boundary without waiting.
    pub fn with_ttl(secret: String, token_ttl: Duration) -> Self {
        Self { secret, token_ttl }
    }

    /// Hash a password using bcrypt
    pub fn hash_password(&self, password: &str) -> Result<String> {
        bcrypt::hash(password, bcrypt::DEFAULT_COST).map_err(ServerError::from)
    }

    /// Verify a password against a hash
    pub fn verify_password(&self, password: &str, hash: &str) -> Result<bool> {
        bcrypt::verify(password, hash).map_err(ServerError::from)
    }

    /// Issue a signed token binding identity and role
    pub fn issue_token(&self, user_id: i64, email: &str, role_id: i64) -> Result<String> {
        let now = Utc::now();
        let exp = now + self.token_ttl;

        let claims = Claims {
            user_id,
            email: email.to_string(),
            role_id,
            iat: now.timestamp(),
            nbf: now.timestamp(),
            exp: exp.timestamp(),
        };

        let encoding_key = EncodingKey::from_secret(self.secret.as_bytes());
        encode(&Header::default(), &claims, &encoding_key).map_err(ServerError::from)
    }

    /// Verify signature and expiry, recovering the claims
    pub fn verify_token(&self, token: &str) -> Result<Claims> {
        let decoding_key = DecodingKey::from_secret(self.secret.as_bytes());
        let validation = Validation::default();

        let token_data = decode::<Claims>(token, &decoding_key, &validation)?;
        Ok(token_data.claims)
    }
}
