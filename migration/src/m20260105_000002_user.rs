use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260105_000001_branch::Branch;

static IDX_USER_BRANCH_ID: &str = "idx_user_branch_id";
static FK_USER_BRANCH_ID: &str = "fk_user_branch_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(User::Table)
                    .if_not_exists()
                    .col(pk_auto(User::Id))
                    .col(string(User::FirstName))
                    .col(string(User::LastName))
                    .col(string_uniq(User::IdNumber))
                    .col(string_uniq(User::Email))
                    .col(string(User::PhoneNumber))
                    .col(string(User::Role))
                    .col(integer_null(User::BranchId))
                    .col(string(User::Status))
                    .col(timestamp(User::CreatedAt))
                    .col(timestamp(User::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_USER_BRANCH_ID)
                    .table(User::Table)
                    .col(User::BranchId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_USER_BRANCH_ID)
                    .from_tbl(User::Table)
                    .from_col(User::BranchId)
                    .to_tbl(Branch::Table)
                    .to_col(Branch::Id)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_USER_BRANCH_ID)
                    .table(User::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_USER_BRANCH_ID)
                    .table(User::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(User::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum User {
    Table,
    Id,
    FirstName,
    LastName,
    IdNumber,
    Email,
    PhoneNumber,
    Role,
    BranchId,
    Status,
    CreatedAt,
    UpdatedAt,
}
