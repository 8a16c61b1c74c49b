use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Branch::Table)
                    .if_not_exists()
                    .col(pk_auto(Branch::Id))
                    .col(string(Branch::City))
                    .col(string(Branch::Address))
                    .col(string(Branch::ManagerName))
                    .col(string(Branch::PhoneNumber))
                    .col(string(Branch::Status))
                    .col(timestamp(Branch::CreatedAt))
                    .col(timestamp(Branch::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Branch::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Branch {
    Table,
    Id,
    City,
    Address,
    ManagerName,
    PhoneNumber,
    Status,
    CreatedAt,
    UpdatedAt,
}
