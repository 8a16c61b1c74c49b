pub use sea_orm_migration::prelude::*;

mod m20260105_000001_branch;
mod m20260105_000002_user;
mod m20260105_000003_customer;
mod m20260105_000004_device;
mod m20260105_000005_customer_device;
mod m20260105_000006_sim_card;
mod m20260105_000007_monthly_payment;
mod m20260105_000008_credit_details;
mod m20260105_000009_payment_credit_link;
mod m20260105_000010_payments;
mod m20260105_000011_item;
mod m20260105_000012_comment;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260105_000001_branch::Migration),
            Box::new(m20260105_000002_user::Migration),
            Box::new(m20260105_000003_customer::Migration),
            Box::new(m20260105_000004_device::Migration),
            Box::new(m20260105_000005_customer_device::Migration),
            Box::new(m20260105_000006_sim_card::Migration),
            Box::new(m20260105_000007_monthly_payment::Migration),
            Box::new(m20260105_000008_credit_details::Migration),
            Box::new(m20260105_000009_payment_credit_link::Migration),
            Box::new(m20260105_000010_payments::Migration),
            Box::new(m20260105_000011_item::Migration),
            Box::new(m20260105_000012_comment::Migration),
        ]
    }
}
