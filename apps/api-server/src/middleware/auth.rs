//! Bearer authentication extractor.

use std::future::{Ready, ready};

use actix_web::{FromRequest, HttpRequest, dev::Payload, http::header, web};

use quill_core::domain::CallerIdentity;
use quill_core::ports::AuthError;

use crate::middleware::error::AppError;
use crate::state::AppState;

/// Authenticated caller, resolved from `Authorization: Bearer <token>`.
///
/// Use this in handlers to require authentication:
/// ```ignore
/// async fn protected_route(Identity(caller): Identity) -> impl Responder {
///     format!("Hello, {}!", caller.name)
/// }
/// ```
#[derive(Debug, Clone)]
pub struct Identity(pub CallerIdentity);

impl FromRequest for Identity {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(authenticate(req).map(Identity))
    }
}

fn authenticate(req: &HttpRequest) -> Result<CallerIdentity, AppError> {
    let Some(state) = req.app_data::<web::Data<AppState>>() else {
        tracing::error!("AppState not found in app data");
        return Err(AppError::Internal("Server configuration error".to_string()));
    };

    let token = bearer_token(req).map_err(|e| {
        tracing::debug!(error = %e, "rejecting request without bearer token");
        AppError::Unauthorized("Not authorized, no token".to_string())
    })?;

    let claims = state.tokens.validate_token(token).map_err(|e| {
        tracing::warn!(error = %e, "bearer token validation failed");
        AppError::Unauthorized("Not authorized, token failed".to_string())
    })?;

    Ok(claims.into())
}

fn bearer_token(req: &HttpRequest) -> Result<&str, AuthError> {
    let auth_header = req
        .headers()
        .get(header::AUTHORIZATION)
        .ok_or(AuthError::MissingAuth)?;

    let auth_str = auth_header
        .to_str()
        .map_err(|_| AuthError::InvalidToken("Invalid authorization header".to_string()))?;

    // Parse "Bearer <token>"
    auth_str
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .ok_or_else(|| AuthError::InvalidToken("Expected Bearer token".to_string()))
}
