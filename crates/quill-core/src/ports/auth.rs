//! Bearer authentication port.
//!
//! Tokens are issued elsewhere; this side only validates them.

use uuid::Uuid;

use crate::domain::CallerIdentity;

/// Claims carried by a validated bearer token.
#[derive(Debug, Clone)]
pub struct TokenClaims {
    pub user_id: Uuid,
    pub name: String,
    pub exp: i64,
}

impl From<TokenClaims> for CallerIdentity {
    fn from(claims: TokenClaims) -> Self {
        CallerIdentity::new(claims.user_id, claims.name)
    }
}

/// Token service trait for bearer token validation.
pub trait TokenService: Send + Sync {
    /// Validate and decode a token.
    fn validate_token(&self, token: &str) -> Result<TokenClaims, AuthError>;
}

/// Authentication errors.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("Token expired")]
    TokenExpired,

    #[error("Invalid token: {0}")]
    InvalidToken(String),

    #[error("Missing authorization header")]
    MissingAuth,
}
