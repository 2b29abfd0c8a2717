//! Create `posts` with lookup indexes for the list filters and ordering.
//! `owner_id` refers to users held by the external auth service, so no FK.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.create_table(posts_table()).await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_posts_category")
                    .table(Posts::Table)
                    .col(Posts::Category)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_posts_author")
                    .table(Posts::Table)
                    .col(Posts::Author)
                    .to_owned(),
            )
            .await?;

        // Listing is always newest first
        manager
            .create_index(
                Index::create()
                    .name("idx_posts_created_at")
                    .table(Posts::Table)
                    .col(Posts::CreatedAt)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Posts::Table).to_owned())
            .await
    }
}

fn posts_table() -> TableCreateStatement {
    Table::create()
        .table(Posts::Table)
        .if_not_exists()
        .col(uuid(Posts::Id).primary_key())
        .col(uuid(Posts::OwnerId))
        .col(string(Posts::Title))
        .col(string(Posts::Category))
        .col(string(Posts::Author))
        .col(text(Posts::Content))
        .col(string_null(Posts::Image))
        .col(timestamp_with_time_zone(Posts::CreatedAt))
        .col(timestamp_with_time_zone(Posts::UpdatedAt))
        .to_owned()
}

#[derive(DeriveIden)]
enum Posts {
    Table,
    Id,
    OwnerId,
    Title,
    Category,
    Author,
    Content,
    Image,
    CreatedAt,
    UpdatedAt,
}
