//! Domain entities - the core business objects.

mod identity;

mod post;

pub use identity::CallerIdentity;
pub use post::{MISSING_FIELDS, NewPost, Post, PostFilter, PostPatch};
