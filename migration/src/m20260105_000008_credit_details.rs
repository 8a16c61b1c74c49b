use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260105_000003_customer::Customer;

static FK_CREDIT_DETAILS_CUSTOMER_ID: &str = "fk_credit_details_customer_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CreditDetails::Table)
                    .if_not_exists()
                    .col(pk_auto(CreditDetails::Id))
                    .col(integer(CreditDetails::CustomerId))
                    .col(string_uniq(CreditDetails::Token))
                    .col(string(CreditDetails::Last4Digits))
                    .col(integer(CreditDetails::ExpiryMonth))
                    .col(integer(CreditDetails::ExpiryYear))
                    .col(string(CreditDetails::Status))
                    .col(timestamp(CreditDetails::CreatedAt))
                    .col(timestamp(CreditDetails::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_CREDIT_DETAILS_CUSTOMER_ID)
                    .from_tbl(CreditDetails::Table)
                    .from_col(CreditDetails::CustomerId)
                    .to_tbl(Customer::Table)
                    .to_col(Customer::Id)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_CREDIT_DETAILS_CUSTOMER_ID)
                    .table(CreditDetails::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(CreditDetails::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum CreditDetails {
    Table,
    Id,
    CustomerId,
    Token,
    #[sea_orm(iden = "last_4_digits")]
    Last4Digits,
    ExpiryMonth,
    ExpiryYear,
    Status,
    CreatedAt,
    UpdatedAt,
}
