//! # Quill Client
//!
//! Typed access to the Quill blog API for front ends and tools.
//! Authentication state lives in an explicit [`Session`] that callers
//! keep in a [`SessionStore`] and lend to each [`BlogClient`] call.

mod client;
mod error;
mod session;

pub use client::BlogClient;
pub use error::{ClientError, ClientResult};
pub use session::{Session, SessionStore, SessionUser};

// Request and response types travel with the client.
pub use quill_shared::{ErrorResponse, SUGGESTED_CATEGORIES, dto};
