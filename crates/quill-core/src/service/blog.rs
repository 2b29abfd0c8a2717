use std::sync::Arc;

use tracing::{info, instrument, warn};
use uuid::Uuid;

use crate::domain::{CallerIdentity, NewPost, Post, PostFilter, PostPatch};
use crate::error::{DomainError, RepoError};
use crate::ports::PostRepository;

/// Ownership-gated CRUD over blog posts.
///
/// Every operation takes the resolved caller explicitly. Mutations are only
/// allowed when the caller's id equals the post's `owner_id`; the author name
/// is never used for authorization.
#[derive(Clone)]
pub struct BlogService {
    posts: Arc<dyn PostRepository>,
}

impl BlogService {
    pub fn new(posts: Arc<dyn PostRepository>) -> Self {
        Self { posts }
    }

    /// List posts matching `filter`, newest first.
    #[instrument(skip(self, caller), fields(caller_id = %caller.id))]
    pub async fn list(
        &self,
        filter: &PostFilter,
        caller: &CallerIdentity,
    ) -> Result<Vec<Post>, DomainError> {
        Ok(self.posts.find(filter).await?)
    }

    #[instrument(skip(self, new, caller), fields(caller_id = %caller.id))]
    pub async fn create(&self, new: NewPost, caller: &CallerIdentity) -> Result<Post, DomainError> {
        new.validate()?;

        let post = self.posts.insert(Post::create(new, caller)).await?;
        info!(post_id = %post.id, "post created");
        Ok(post)
    }

    #[instrument(skip(self, patch, caller), fields(caller_id = %caller.id))]
    pub async fn update(
        &self,
        id: Uuid,
        patch: PostPatch,
        caller: &CallerIdentity,
    ) -> Result<Post, DomainError> {
        let mut post = self.owned_post(id, caller).await?;
        patch.validate()?;

        post.apply(patch);
        let post = self
            .posts
            .update(post)
            .await
            .map_err(|e| not_found_or_store(e, id))?;

        info!(post_id = %post.id, "post updated");
        Ok(post)
    }

    /// Delete a post and return its id.
    #[instrument(skip(self, caller), fields(caller_id = %caller.id))]
    pub async fn delete(&self, id: Uuid, caller: &CallerIdentity) -> Result<Uuid, DomainError> {
        self.owned_post(id, caller).await?;

        self.posts
            .delete(id)
            .await
            .map_err(|e| not_found_or_store(e, id))?;

        info!(post_id = %id, "post deleted");
        Ok(id)
    }

    async fn owned_post(&self, id: Uuid, caller: &CallerIdentity) -> Result<Post, DomainError> {
        let post = self
            .posts
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::post_not_found(id))?;

        if !post.is_owned_by(caller) {
            warn!(post_id = %id, owner_id = %post.owner_id, "caller does not own post");
            return Err(DomainError::Unauthorized);
        }

        Ok(post)
    }
}

// The post can vanish between the ownership check and the write.
fn not_found_or_store(err: RepoError, id: Uuid) -> DomainError {
    match err {
        RepoError::NotFound => DomainError::post_not_found(id),
        other => DomainError::Store(other),
    }
}
