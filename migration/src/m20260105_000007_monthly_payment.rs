use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260105_000003_customer::Customer;

static IDX_MONTHLY_PAYMENT_CUSTOMER_ID: &str = "idx_monthly_payment_customer_id";
static FK_MONTHLY_PAYMENT_CUSTOMER_ID: &str = "fk_monthly_payment_customer_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(MonthlyPayment::Table)
                    .if_not_exists()
                    .col(pk_auto(MonthlyPayment::Id))
                    .col(integer(MonthlyPayment::CustomerId))
                    .col(string_null(MonthlyPayment::BelongsOrganization))
                    .col(date(MonthlyPayment::StartDate))
                    .col(date(MonthlyPayment::EndDate))
                    .col(integer(MonthlyPayment::DayOfTheMonth))
                    .col(integer(MonthlyPayment::Frequency))
                    .col(integer(MonthlyPayment::AmountOfCharges))
                    .col(double(MonthlyPayment::Amount))
                    .col(double(MonthlyPayment::OneTimePayment))
                    .col(double(MonthlyPayment::TotalAmount))
                    .col(date(MonthlyPayment::NextCharge))
                    .col(timestamp_null(MonthlyPayment::LastAttempt))
                    .col(timestamp_null(MonthlyPayment::LastSucceeded))
                    .col(text_null(MonthlyPayment::Notes))
                    .col(string(MonthlyPayment::Status))
                    .col(timestamp(MonthlyPayment::CreatedAt))
                    .col(timestamp(MonthlyPayment::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_MONTHLY_PAYMENT_CUSTOMER_ID)
                    .table(MonthlyPayment::Table)
                    .col(MonthlyPayment::CustomerId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_MONTHLY_PAYMENT_CUSTOMER_ID)
                    .from_tbl(MonthlyPayment::Table)
                    .from_col(MonthlyPayment::CustomerId)
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
                    .name(FK_MONTHLY_PAYMENT_CUSTOMER_ID)
                    .table(MonthlyPayment::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(MonthlyPayment::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum MonthlyPayment {
    Table,
    Id,
    CustomerId,
    BelongsOrganization,
    StartDate,
    EndDate,
    DayOfTheMonth,
    Frequency,
    AmountOfCharges,
    Amount,
    OneTimePayment,
    TotalAmount,
    NextCharge,
    LastAttempt,
    LastSucceeded,
    Notes,
    Status,
    CreatedAt,
    UpdatedAt,
}
