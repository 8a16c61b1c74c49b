use sea_orm_migration::{prelude::*, schema::*};

use crate::{m20260105_000003_customer::Customer, m20260105_000004_device::Device};

static IDX_CUSTOMER_DEVICE_CUSTOMER_ID: &str = "idx_customer_device_customer_id";
static IDX_CUSTOMER_DEVICE_DEVICE_ID: &str = "idx_customer_device_device_id";
static FK_CUSTOMER_DEVICE_CUSTOMER_ID: &str = "fk_customer_device_customer_id";
static FK_CUSTOMER_DEVICE_DEVICE_ID: &str = "fk_customer_device_device_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CustomerDevice::Table)
                    .if_not_exists()
                    .col(pk_auto(CustomerDevice::Id))
                    .col(integer(CustomerDevice::CustomerId))
                    .col(integer(CustomerDevice::DeviceId))
                    .col(date(CustomerDevice::ReceivedAt))
                    .col(date_null(CustomerDevice::PlanEndDate))
                    .col(string(CustomerDevice::Status))
                    .col(timestamp(CustomerDevice::CreatedAt))
                    .col(timestamp(CustomerDevice::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_CUSTOMER_DEVICE_CUSTOMER_ID)
                    .table(CustomerDevice::Table)
                    .col(CustomerDevice::CustomerId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_CUSTOMER_DEVICE_DEVICE_ID)
                    .table(CustomerDevice::Table)
                    .col(CustomerDevice::DeviceId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_CUSTOMER_DEVICE_CUSTOMER_ID)
                    .from_tbl(CustomerDevice::Table)
                    .from_col(CustomerDevice::CustomerId)
                    .to_tbl(Customer::Table)
                    .to_col(Customer::Id)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_CUSTOMER_DEVICE_DEVICE_ID)
                    .from_tbl(CustomerDevice::Table)
                    .from_col(CustomerDevice::DeviceId)
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
                    .name(FK_CUSTOMER_DEVICE_DEVICE_ID)
                    .table(CustomerDevice::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_CUSTOMER_DEVICE_CUSTOMER_ID)
                    .table(CustomerDevice::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(CustomerDevice::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum CustomerDevice {
    Table,
    Id,
    CustomerId,
    DeviceId,
    ReceivedAt,
    PlanEndDate,
    Status,
    CreatedAt,
    UpdatedAt,
}
