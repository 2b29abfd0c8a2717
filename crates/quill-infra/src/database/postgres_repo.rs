//! PostgreSQL repository implementations.

use async_trait::async_trait;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder};

use quill_core::domain::{Post, PostFilter};
use quill_core::error::RepoError;
use quill_core::ports::PostRepository;

use super::entity::post::{self, Entity as PostEntity};
use super::postgres_base::{PostgresBaseRepository, repo_error};

/// PostgreSQL post repository.
pub type PostgresPostRepository = PostgresBaseRepository<PostEntity>;

#[async_trait]
impl PostRepository for PostgresPostRepository {
    async fn find(&self, filter: &PostFilter) -> Result<Vec<Post>, RepoError> {
        tracing::debug!(
            category = ?filter.category,
            author = ?filter.author,
            "Listing posts"
        );

        let mut query = PostEntity::find();
        if let Some(category) = &filter.category {
            query = query.filter(post::Column::Category.eq(category.as_str()));
        }
        if let Some(author) = &filter.author {
            query = query.filter(post::Column::Author.eq(author.as_str()));
        }

        let result = query
            .order_by_desc(post::Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(repo_error)?;

        Ok(result.into_iter().map(Into::into).collect())
    }
}
