use std::io::ErrorKind;
use std::path::Path;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::ClientResult;

/// The signed-in user as known to the client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    pub id: Uuid,
    pub name: String,
}

/// A bearer token together with the user it was issued to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub token: String,
    pub user: SessionUser,
}

impl Session {
    pub fn new(token: impl Into<String>, id: Uuid, name: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            user: SessionUser {
                id,
                name: name.into(),
            },
        }
    }

    pub(crate) fn bearer(&self) -> String {
        format!("Bearer {}", self.token)
    }
}

/// Holds at most one active session.
#[derive(Debug, Default)]
pub struct SessionStore {
    current: Option<Session>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces any previous session.
    pub fn login(&mut self, session: Session) -> &Session {
        tracing::debug!(user_id = %session.user.id, "Session started");
        self.current.insert(session)
    }

    pub fn logout(&mut self) -> Option<Session> {
        let ended = self.current.take();
        if let Some(session) = &ended {
            tracing::debug!(user_id = %session.user.id, "Session ended");
        }
        ended
    }

    pub fn current(&self) -> Option<&Session> {
        self.current.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.current.is_some()
    }

    /// Loads the session saved by [`SessionStore::persist`].
    /// A missing file yields a signed-out store.
    pub fn restore(path: impl AsRef<Path>) -> ClientResult<Self> {
        let current = match std::fs::read(path.as_ref()) {
            Ok(bytes) => Some(serde_json::from_slice(&bytes)?),
            Err(e) if e.kind() == ErrorKind::NotFound => None,
            Err(e) => return Err(e.into()),
        };
        Ok(Self { current })
    }

    /// Writes the active session to `path`, or removes the file when signed out.
    pub fn persist(&self, path: impl AsRef<Path>) -> ClientResult<()> {
        let path = path.as_ref();
        match &self.current {
            Some(session) => std::fs::write(path, serde_json::to_vec(session)?)?,
            None => match std::fs::remove_file(path) {
                Err(e) if e.kind() != ErrorKind::NotFound => return Err(e.into()),
                _ => {}
            },
        }
        Ok(())
    }
}
