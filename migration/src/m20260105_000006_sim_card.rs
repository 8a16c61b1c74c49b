use sea_orm_migration::{prelude::*, schema::*};

use crate::{m20260105_000003_customer::Customer, m20260105_000004_device::Device};

static IDX_SIM_CARD_CUSTOMER_ID: &str = "idx_sim_card_customer_id";
static FK_SIM_CARD_CUSTOMER_ID: &str = "fk_sim_card_customer_id";
static FK_SIM_CARD_DEVICE_ID: &str = "fk_sim_card_device_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(SimCard::Table)
                    .if_not_exists()
                    .col(pk_auto(SimCard::Id))
                    .col(string_uniq(SimCard::SimNumber))
                    .col(integer_null(SimCard::CustomerId))
                    .col(integer_null(SimCard::DeviceId))
                    .col(date_null(SimCard::ReceivedAt))
                    .col(date_null(SimCard::PlanEndDate))
                    .col(string(SimCard::Status))
                    .col(timestamp(SimCard::CreatedAt))
                    .col(timestamp(SimCard::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_SIM_CARD_CUSTOMER_ID)
                    .table(SimCard::Table)
                    .col(SimCard::CustomerId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_SIM_CARD_CUSTOMER_ID)
                    .from_tbl(SimCard::Table)
                    .from_col(SimCard::CustomerId)
                    .to_tbl(Customer::Table)
                    .to_col(Customer::Id)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_SIM_CARD_DEVICE_ID)
                    .from_tbl(SimCard::Table)
                    .from_col(SimCard::DeviceId)
                    .to_tbl(Device::Table)
                    .to_col(Device::Id)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_SIM_CARD_DEVICE_ID)
                    .table(SimCard::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_SIM_CARD_CUSTOMER_ID)
                    .table(SimCard::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(SimCard::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum SimCard {
    Table,
    Id,
    SimNumber,
    CustomerId,
    DeviceId,
    ReceivedAt,
    PlanEndDate,
    Status,
    CreatedAt,
    UpdatedAt,
}
