use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Customer::Table)
                    .if_not_exists()
                    .col(pk_auto(Customer::Id))
                    .col(string(Customer::FirstName))
                    .col(string(Customer::LastName))
                    .col(string_uniq(Customer::IdNumber))
                    .col(string_uniq(Customer::Email))
                    .col(string(Customer::PhoneNumber))
                    .col(string_null(Customer::AdditionalPhone))
                    .col(string(Customer::Address))
                    .col(string(Customer::City))
                    .col(string(Customer::Status))
                    .col(timestamp(Customer::CreatedAt))
                    .col(timestamp(Customer::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Customer::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Customer {
    Table,
    Id,
    FirstName,
    LastName,
    IdNumber,
    Email,
    PhoneNumber,
    AdditionalPhone,
    Address,
    City,
    Status,
    CreatedAt,
    UpdatedAt,
}
