//! Customer fixture utilities.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue};

use crate::{error::TestError, fixtures::factory, model::CustomerModel, TestContext};

impl TestContext {
    pub fn customer<'a>(&'a mut self) -> CustomerFixtures<'a> {
        CustomerFixtures { setup: self }
    }
}

pub struct CustomerFixtures<'a> {
    setup: &'a mut TestContext,
}

impl<'a> CustomerFixtures<'a> {
    /// Insert an active customer whose unique columns are derived from `seed`.
    pub async fn insert_customer(&self, seed: u32) -> Result<CustomerModel, TestError> {
        self.insert_customer_with_status(seed, "active").await
    }

    pub async fn insert_customer_with_status(
        &self,
        seed: u32,
        status: &str,
    ) -> Result<CustomerModel, TestError> {
        let now = Utc::now().naive_utc();

        Ok(entity::customer::ActiveModel {
            first_name: ActiveValue::Set("Test".to_string()),
            last_name: ActiveValue::Set(format!("Customer {}", seed)),
            id_number: ActiveValue::Set(factory::id_number(seed)),
            email: ActiveValue::Set(factory::email("customer", seed)),
            phone_number: ActiveValue::Set(factory::phone_number(seed)),
            additional_phone: ActiveValue::Set(None),
            address: ActiveValue::Set("1 Herzl St".to_string()),
            city: ActiveValue::Set("Tel Aviv".to_string()),
            status: ActiveValue::Set(status.to_string()),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(&self.setup.db)
        .await?)
    }
}
