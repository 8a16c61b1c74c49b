use sea_orm_migration::{prelude::*, schema::*};

static IDX_COMMENT_ENTITY: &str = "idx_comment_entity_type_entity_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Comment::Table)
                    .if_not_exists()
                    .col(pk_auto(Comment::Id))
                    .col(string(Comment::EntityType))
                    .col(integer(Comment::EntityId))
                    .col(text(Comment::Content))
                    .col(timestamp(Comment::CreatedAt))
                    .col(timestamp(Comment::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_COMMENT_ENTITY)
                    .table(Comment::Table)
                    .col(Comment::EntityType)
                    .col(Comment::EntityId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_COMMENT_ENTITY)
                    .table(Comment::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Comment::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Comment {
    Table,
    Id,
    EntityType,
    EntityId,
    Content,
    CreatedAt,
    UpdatedAt,
}
