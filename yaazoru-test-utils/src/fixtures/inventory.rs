//! Branch, user, device and SIM card fixture utilities.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue};

use crate::{
    error::TestError,
    fixtures::factory,
    model::{BranchModel, CustomerDeviceModel, DeviceModel, SimCardModel, UserModel},
    TestContext,
};

impl TestContext {
    pub fn inventory<'a>(&'a mut self) -> InventoryFixtures<'a> {
        InventoryFixtures { setup: self }
    }
}

pub struct InventoryFixtures<'a> {
    setup: &'a mut TestContext,
}

impl<'a> InventoryFixtures<'a> {
    pub async fn insert_branch(&self, seed: u32) -> Result<BranchModel, TestError> {
        let now = Utc::now().naive_utc();

        Ok(entity::branch::ActiveModel {
            city: ActiveValue::Set(format!("City {}", seed)),
            address: ActiveValue::Set(format!("{} Rothschild Blvd", seed)),
            manager_name: ActiveValue::Set("Branch Manager".to_string()),
            phone_number: ActiveValue::Set(factory::phone_number(seed)),
            status: ActiveValue::Set("active".to_string()),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(&self.setup.db)
        .await?)
    }

    /// Insert a user; `branch_id` decides between an `admin` and a `branch` role.
    pub async fn insert_user(
        &self,
        seed: u32,
        branch_id: Option<i32>,
    ) -> Result<UserModel, TestError> {
        let now = Utc::now().naive_utc();
        let role = if branch_id.is_some() { "branch" } else { "admin" };

        Ok(entity::user::ActiveModel {
            first_name: ActiveValue::Set("Test".to_string()),
            last_name: ActiveValue::Set(format!("User {}", seed)),
            id_number: ActiveValue::Set(factory::id_number(seed)),
            email: ActiveValue::Set(factory::email("user", seed)),
            phone_number: ActiveValue::Set(factory::phone_number(seed)),
            role: ActiveValue::Set(role.to_string()),
            branch_id: ActiveValue::Set(branch_id),
            status: ActiveValue::Set("active".to_string()),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(&self.setup.db)
        .await?)
    }

    pub async fn insert_device(&self, seed: u32) -> Result<DeviceModel, TestError> {
        let now = Utc::now().naive_utc();

        Ok(entity::device::ActiveModel {
            device_number: ActiveValue::Set(factory::device_number(seed)),
            imei: ActiveValue::Set(factory::imei(seed)),
            model: ActiveValue::Set("Galaxy A15".to_string()),
            serial_number: ActiveValue::Set(Some(format!("SN{:06}", seed))),
            purchase_date: ActiveValue::Set(Some(factory::date(2025, 1, 1))),
            plan_type: ActiveValue::Set(Some("kosher".to_string())),
            status: ActiveValue::Set("active".to_string()),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(&self.setup.db)
        .await?)
    }

    pub async fn insert_sim_card(
        &self,
        seed: u32,
        customer_id: Option<i32>,
        device_id: Option<i32>,
    ) -> Result<SimCardModel, TestError> {
        let now = Utc::now().naive_utc();

        Ok(entity::sim_card::ActiveModel {
            sim_number: ActiveValue::Set(factory::sim_number(seed)),
            customer_id: ActiveValue::Set(customer_id),
            device_id: ActiveValue::Set(device_id),
            received_at: ActiveValue::Set(Some(factory::date(2025, 1, 1))),
            plan_end_date: ActiveValue::Set(None),
            status: ActiveValue::Set("active".to_string()),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(&self.setup.db)
        .await?)
    }

    pub async fn insert_customer_device(
        &self,
        customer_id: i32,
        device_id: i32,
    ) -> Result<CustomerDeviceModel, TestError> {
        let now = Utc::now().naive_utc();

        Ok(entity::customer_device::ActiveModel {
            customer_id: ActiveValue::Set(customer_id),
            device_id: ActiveValue::Set(device_id),
            received_at: ActiveValue::Set(factory::date(2025, 2, 1)),
            plan_end_date: ActiveValue::Set(Some(factory::date(2026, 2, 1))),
            status: ActiveValue::Set("active".to_string()),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(&self.setup.db)
        .await?)
    }
}
