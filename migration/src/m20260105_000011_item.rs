use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260105_000007_monthly_payment::MonthlyPayment;

static IDX_ITEM_MONTHLY_PAYMENT_ID: &str = "idx_item_monthly_payment_id";
static FK_ITEM_MONTHLY_PAYMENT_ID: &str = "fk_item_monthly_payment_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Item::Table)
                    .if_not_exists()
                    .col(pk_auto(Item::Id))
                    .col(integer(Item::MonthlyPaymentId))
                    .col(string(Item::Description))
                    .col(integer(Item::Quantity))
                    .col(double(Item::Price))
                    .col(double(Item::Total))
                    .col(string(Item::PaymentType))
                    .col(timestamp(Item::CreatedAt))
                    .col(timestamp(Item::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_ITEM_MONTHLY_PAYMENT_ID)
                    .table(Item::Table)
                    .col(Item::MonthlyPaymentId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_ITEM_MONTHLY_PAYMENT_ID)
                    .from_tbl(Item::Table)
                    .from_col(Item::MonthlyPaymentId)
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
                    .name(FK_ITEM_MONTHLY_PAYMENT_ID)
                    .table(Item::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Item::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Item {
    Table,
    Id,
    MonthlyPaymentId,
    Description,
    Quantity,
    Price,
    Total,
    PaymentType,
    CreatedAt,
    UpdatedAt,
}
