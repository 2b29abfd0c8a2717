use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Authenticated caller attached to a request by the bearer-token layer.
///
/// Passed explicitly into every [`crate::BlogService`] operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallerIdentity {
    pub id: Uuid,
    pub name: String,
}

impl CallerIdentity {
    pub fn new(id: Uuid, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}
