use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260105_000007_monthly_payment::MonthlyPayment;

static IDX_PAYMENTS_MONTHLY_PAYMENT_ID: &str = "idx_payments_monthly_payment_id";
static FK_PAYMENTS_MONTHLY_PAYMENT_ID: &str = "fk_payments_monthly_payment_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Payments::Table)
                    .if_not_exists()
                    .col(pk_auto(Payments::Id))
                    .col(integer(Payments::MonthlyPaymentId))
                    .col(date(Payments::Date))
                    .col(double(Payments::Amount))
                    .col(string(Payments::Status))
                    .col(timestamp(Payments::CreatedAt))
                    .col(timestamp(Payments::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_PAYMENTS_MONTHLY_PAYMENT_ID)
                    .table(Payments::Table)
                    .col(Payments::MonthlyPaymentId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_PAYMENTS_MONTHLY_PAYMENT_ID)
                    .from_tbl(Payments::Table)
                    .from_col(Payments::MonthlyPaymentId)
                    .to_tbl(MonthlyPayment::Table)
                    .to_col(MonthlyPayment::Id)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_PAYMENTS_MONTHLY_PAYMENT_ID)
                    .table(Payments::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Payments::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Payments {
    Table,
    Id,
    MonthlyPaymentId,
    Date,
    Amount,
    Status,
    CreatedAt,
    UpdatedAt,
}
