use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    m20260105_000007_monthly_payment::MonthlyPayment,
    m20260105_000008_credit_details::CreditDetails,
};

static IDX_PAYMENT_CREDIT_LINK_MONTHLY_PAYMENT_ID: &str =
    "idx_payment_credit_link_monthly_payment_id";
static FK_PAYMENT_CREDIT_LINK_MONTHLY_PAYMENT_ID: &str =
    "fk_payment_credit_link_monthly_payment_id";
static FK_PAYMENT_CREDIT_LINK_CREDIT_DETAILS_ID: &str =
    "fk_payment_credit_link_credit_details_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PaymentCreditLink::Table)
                    .if_not_exists()
                    .col(pk_auto(PaymentCreditLink::Id))
                    .col(integer(PaymentCreditLink::MonthlyPaymentId))
                    .col(integer(PaymentCreditLink::CreditDetailsId))
                    .col(string(PaymentCreditLink::Status))
                    .col(timestamp(PaymentCreditLink::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_PAYMENT_CREDIT_LINK_MONTHLY_PAYMENT_ID)
                    .table(PaymentCreditLink::Table)
                    .col(PaymentCreditLink::MonthlyPaymentId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_PAYMENT_CREDIT_LINK_MONTHLY_PAYMENT_ID)
                    .from_tbl(PaymentCreditLink::Table)
                    .from_col(PaymentCreditLink::MonthlyPaymentId)
                    .to_tbl(MonthlyPayment::Table)
                    .to_col(MonthlyPayment::Id)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_PAYMENT_CREDIT_LINK_CREDIT_DETAILS_ID)
                    .from_tbl(PaymentCreditLink::Table)
                    .from_col(PaymentCreditLink::CreditDetailsId)
                    .to_tbl(CreditDetails::Table)
                    .to_col(CreditDetails::Id)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_PAYMENT_CREDIT_LINK_CREDIT_DETAILS_ID)
                    .table(PaymentCreditLink::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_PAYMENT_CREDIT_LINK_MONTHLY_PAYMENT_ID)
                    .table(PaymentCreditLink::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(PaymentCreditLink::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum PaymentCreditLink {
    Table,
    Id,
    MonthlyPaymentId,
    CreditDetailsId,
    Status,
    CreatedAt,
}
