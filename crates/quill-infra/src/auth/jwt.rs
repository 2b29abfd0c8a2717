//! JWT bearer token validation.
//!
//! Tokens are minted by the external auth service with the shared HS256
//! secret; this service only verifies them and reads the caller identity.

use jsonwebtoken::{DecodingKey, Validation, decode};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use quill_core::ports::{AuthError, TokenClaims, TokenService};

const DEFAULT_SECRET: &str = "change-me-in-production";

/// JWT token service configuration.
#[derive(Debug, Clone)]
pub struct JwtConfig {
    pub secret: String,
    pub issuer: String,
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            secret: DEFAULT_SECRET.to_string(),
            issuer: "quill-auth".to_string(),
        }
    }
}

impl JwtConfig {
    pub fn from_env() -> Self {
        let secret = std::env::var("JWT_SECRET").unwrap_or_else(|_| DEFAULT_SECRET.to_string());

        // Warn if using default secret in production
        if secret == DEFAULT_SECRET {
            let is_production = std::env::var("RUST_ENV")
                .map(|v| v == "production" || v == "prod")
                .unwrap_or(false);

            if is_production {
                tracing::error!(
                    "SECURITY: Using default JWT secret in production! Set JWT_SECRET environment variable."
                );
            } else {
                tracing::warn!("Using default JWT secret. Set JWT_SECRET for production use.");
            }
        }

        Self {
            secret,
            issuer: std::env::var("JWT_ISSUER").unwrap_or_else(|_| "quill-auth".to_string()),
        }
    }
}

/// Claims layout shared with the token issuer.
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String, // user_id
    pub name: String,
    pub exp: i64,    // expiration timestamp
    pub iat: i64,    // issued at
    pub iss: String, // issuer
}

/// JWT-based token validator.
pub struct JwtTokenService {
    decoding_key: DecodingKey,
    config: JwtConfig,
}

impl JwtTokenService {
    pub fn new(config: JwtConfig) -> Self {
        let decoding_key = DecodingKey::from_secret(config.secret.as_bytes());

        Self {
            decoding_key,
            config,
        }
    }

    pub fn from_env() -> Self {
        Self::new(JwtConfig::from_env())
    }
}

impl TokenService for JwtTokenService {
    fn validate_token(&self, token: &str) -> Result<TokenClaims, AuthError> {
        let mut validation = Validation::default();
        validation.set_issuer(&[&self.config.issuer]);

        let token_data = decode::<Claims>(token, &self.decoding_key, &validation).map_err(|e| {
            match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => AuthError::TokenExpired,
                _ => AuthError::InvalidToken(e.to_string()),
            }
        })?;

        let user_id = Uuid::parse_str(&token_data.claims.sub)
            .map_err(|e| AuthError::InvalidToken(e.to_string()))?;

        if token_data.claims.name.trim().is_empty() {
            return Err(AuthError::InvalidToken("missing name claim".to_string()));
        }

        Ok(TokenClaims {
            user_id,
            name: token_data.claims.name,
            exp: token_data.claims.exp,
        })
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeDelta, Utc};
    use jsonwebtoken::{EncodingKey, Header, encode};

    use super::*;

    fn test_config() -> JwtConfig {
        JwtConfig {
            secret: "test-secret-key".to_string(),
            issuer: "test-issuer".to_string(),
        }
    }

    fn sign(secret: &str, claims: &Claims) -> String {
        encode(
            &Header::default(),
            claims,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
        .unwrap()
    }

    fn claims(user_id: Uuid, name: &str, issuer: &str, ttl: TimeDelta) -> Claims {
        let now = Utc::now();
        Claims {
            sub: user_id.to_string(),
            name: name.to_string(),
            exp: (now + ttl).timestamp(),
            iat: now.timestamp(),
            iss: issuer.to_string(),
        }
    }

    #[test]
    fn test_validate_token_success() {
        let service = JwtTokenService::new(test_config());
        let user_id = Uuid::new_v4();

        let token = sign(
            "test-secret-key",
            &claims(user_id, "Ada", "test-issuer", TimeDelta::hours(1)),
        );

        let claims = service.validate_token(&token).unwrap();

        assert_eq!(claims.user_id, user_id);
        assert_eq!(claims.name, "Ada");
    }

    #[test]
    fn test_validate_invalid_token() {
        let service = JwtTokenService::new(test_config());

        let result = service.validate_token("invalid-token");

        assert!(result.is_err());
        assert!(matches!(result.unwrap_err(), AuthError::InvalidToken(_)));
    }

    #[test]
    fn test_validate_wrong_issuer_token() {
        let service = JwtTokenService::new(test_config());
        let token = sign(
            "test-secret-key",
            &claims(Uuid::new_v4(), "Ada", "someone-else", TimeDelta::hours(1)),
        );

        assert!(service.validate_token(&token).is_err());
    }

    #[test]
    fn test_validate_wrong_secret_token() {
        let service = JwtTokenService::new(test_config());
        let token = sign(
            "another-secret",
            &claims(Uuid::new_v4(), "Ada", "test-issuer", TimeDelta::hours(1)),
        );

        assert!(matches!(
            service.validate_token(&token),
            Err(AuthError::InvalidToken(_))
        ));
    }

    #[test]
    fn test_validate_expired_token() {
        let service = JwtTokenService::new(test_config());
        // Well past the default 60s leeway.
        let token = sign(
            "test-secret-key",
            &claims(Uuid::new_v4(), "Ada", "test-issuer", TimeDelta::hours(-2)),
        );

        assert!(matches!(
            service.validate_token(&token),
            Err(AuthError::TokenExpired)
        ));
    }

    #[test]
    fn test_validate_rejects_non_uuid_subject() {
        let service = JwtTokenService::new(test_config());
        let mut bad = claims(Uuid::new_v4(), "Ada", "test-issuer", TimeDelta::hours(1));
        bad.sub = "64f1c0ffee".to_string();

        assert!(service.validate_token(&sign("test-secret-key", &bad)).is_err());
    }
}
