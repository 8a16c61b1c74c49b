//! Monthly payment fixture utilities.
//!
//! Rows are inserted directly so tests of the billing service start from a known state
//! without going through the transactional create flow under test.

use chrono::{NaiveDate, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue};

use crate::{
    error::TestError,
    fixtures::factory,
    model::{
        CreditDetailsModel, ItemModel, MonthlyPaymentModel, PaymentCreditLinkModel, PaymentModel,
    },
    TestContext,
};

impl TestContext {
    pub fn billing<'a>(&'a mut self) -> BillingFixtures<'a> {
        BillingFixtures { setup: self }
    }
}

pub struct BillingFixtures<'a> {
    setup: &'a mut TestContext,
}

impl<'a> BillingFixtures<'a> {
    /// Insert a 12 charge monthly plan of 100.0 starting 2026-01-10.
    pub async fn insert_monthly_payment(
        &self,
        customer_id: i32,
    ) -> Result<MonthlyPaymentModel, TestError> {
        let now = Utc::now().naive_utc();

        Ok(entity::monthly_payment::ActiveModel {
            customer_id: ActiveValue::Set(customer_id),
            belongs_organization: ActiveValue::Set(None),
            start_date: ActiveValue::Set(factory::date(2026, 1, 10)),
            end_date: ActiveValue::Set(factory::date(2026, 12, 10)),
            day_of_the_month: ActiveValue::Set(10),
            frequency: ActiveValue::Set(1),
            amount_of_charges: ActiveValue::Set(12),
            amount: ActiveValue::Set(100.0),
            one_time_payment: ActiveValue::Set(0.0),
            total_amount: ActiveValue::Set(1200.0),
            next_charge: ActiveValue::Set(factory::date(2026, 1, 10)),
            last_attempt: ActiveValue::Set(None),
            last_succeeded: ActiveValue::Set(None),
            notes: ActiveValue::Set(None),
            status: ActiveValue::Set("active".to_string()),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(&self.setup.db)
        .await?)
    }

    pub async fn insert_credit_details(
        &self,
        customer_id: i32,
        seed: u32,
    ) -> Result<CreditDetailsModel, TestError> {
        let now = Utc::now().naive_utc();

        Ok(entity::credit_details::ActiveModel {
            customer_id: ActiveValue::Set(customer_id),
            token: ActiveValue::Set(factory::card_token(seed)),
            last_4_digits: ActiveValue::Set("4242".to_string()),
            expiry_month: ActiveValue::Set(12),
            expiry_year: ActiveValue::Set(2030),
            status: ActiveValue::Set("active".to_string()),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(&self.setup.db)
        .await?)
    }

    pub async fn insert_payment_credit_link(
        &self,
        monthly_payment_id: i32,
        credit_details_id: i32,
    ) -> Result<PaymentCreditLinkModel, TestError> {
        Ok(entity::payment_credit_link::ActiveModel {
            monthly_payment_id: ActiveValue::Set(monthly_payment_id),
            credit_details_id: ActiveValue::Set(credit_details_id),
            status: ActiveValue::Set("active".to_string()),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        }
        .insert(&self.setup.db)
        .await?)
    }

    /// Insert a monthly payment together with its credit details and active link.
    pub async fn insert_linked_monthly_payment(
        &self,
        customer_id: i32,
        token_seed: u32,
    ) -> Result<
        (
            MonthlyPaymentModel,
            CreditDetailsModel,
            PaymentCreditLinkModel,
        ),
        TestError,
    > {
        let monthly_payment = self.insert_monthly_payment(customer_id).await?;
        let credit_details = self.insert_credit_details(customer_id, token_seed).await?;
        let link = self
            .insert_payment_credit_link(monthly_payment.id, credit_details.id)
            .await?;

        Ok((monthly_payment, credit_details, link))
    }

    pub async fn insert_item(
        &self,
        monthly_payment_id: i32,
        quantity: i32,
        price: f64,
        payment_type: &str,
    ) -> Result<ItemModel, TestError> {
        let now = Utc::now().naive_utc();

        Ok(entity::item::ActiveModel {
            monthly_payment_id: ActiveValue::Set(monthly_payment_id),
            description: ActiveValue::Set("Line item".to_string()),
            quantity: ActiveValue::Set(quantity),
            price: ActiveValue::Set(price),
            total: ActiveValue::Set(price * quantity as f64),
            payment_type: ActiveValue::Set(payment_type.to_string()),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(&self.setup.db)
        .await?)
    }

    pub async fn insert_payment(
        &self,
        monthly_payment_id: i32,
        date: NaiveDate,
        status: &str,
    ) -> Result<PaymentModel, TestError> {
        let now = Utc::now().naive_utc();

        Ok(entity::payments::ActiveModel {
            monthly_payment_id: ActiveValue::Set(monthly_payment_id),
            date: ActiveValue::Set(date),
            amount: ActiveValue::Set(100.0),
            status: ActiveValue::Set(status.to_string()),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(&self.setup.db)
        .await?)
    }
}
