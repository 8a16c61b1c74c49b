use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Device::Table)
                    .if_not_exists()
                    .col(pk_auto(Device::Id))
                    .col(string_uniq(Device::DeviceNumber))
                    .col(string_uniq(Device::Imei))
                    .col(string(Device::Model))
                    .col(string_null(Device::SerialNumber))
                    .col(date_null(Device::PurchaseDate))
                    .col(string_null(Device::PlanType))
                    .col(string(Device::Status))
                    .col(timestamp(Device::CreatedAt))
                    .col(timestamp(Device::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Device::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Device {
    Table,
    Id,
    DeviceNumber,
    Imei,
    Model,
    SerialNumber,
    PurchaseDate,
    PlanType,
    Status,
    CreatedAt,
    UpdatedAt,
}
