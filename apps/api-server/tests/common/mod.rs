//! Fixtures shared by the HTTP test suites.
#![allow(dead_code)]

use std::sync::Arc;

use chrono::{TimeDelta, Utc};
use jsonwebtoken::{EncodingKey, Header, encode};
use uuid::Uuid;

use api_server::AppState;
use quill_infra::auth::Claims;
use quill_infra::{InMemoryPostRepository, JwtConfig, JwtTokenService};

const SECRET: &str = "integration-secret";
const ISSUER: &str = "quill-test";

pub struct User {
    pub id: Uuid,
    pub name: &'static str,
}

impl User {
    pub fn new(name: &'static str) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
        }
    }

    pub fn token(&self) -> String {
        let now = Utc::now();
        let claims = Claims {
            sub: self.id.to_string(),
            name: self.name.to_string(),
            exp: (now + TimeDelta::hours(1)).timestamp(),
            iat: now.timestamp(),
            iss: ISSUER.to_string(),
        };
        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(SECRET.as_bytes()),
        )
        .unwrap()
    }

    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.token())
    }
}

pub fn state() -> AppState {
    let tokens = Arc::new(JwtTokenService::new(JwtConfig {
        secret: SECRET.to_string(),
        issuer: ISSUER.to_string(),
    }));
    AppState::with_repository(Arc::new(InMemoryPostRepository::new()), tokens)
}
