use chrono::{NaiveDate, NaiveDateTime};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder,
};

use crate::{
    model::status::RecordStatus,
    server::{
        model::db::MonthlyPaymentModel,
        util::{
            pagination::{fetch_page, Page},
            time::now,
        },
    },
};

/// Validated column values of a monthly payment, derived amounts included
#[derive(Debug, Clone, PartialEq)]
pub struct MonthlyPaymentParams {
    pub customer_id: i32,
    pub belongs_organization: Option<String>,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub day_of_the_month: i32,
    pub frequency: i32,
    pub amount_of_charges: i32,
    pub amount: f64,
    pub one_time_payment: f64,
    pub total_amount: f64,
    pub next_charge: NaiveDate,
    pub notes: Option<String>,
}

/// The three amounts derived from a plan's items
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonthlyPaymentTotals {
    pub amount: f64,
    pub one_time_payment: f64,
    pub total_amount: f64,
}

pub struct MonthlyPaymentRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> MonthlyPaymentRepository<'a, C> {
    /// Creates a new instance of [`MonthlyPaymentRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new active monthly payment
    pub async fn create(&self, params: MonthlyPaymentParams) -> Result<MonthlyPaymentModel, DbErr> {
        let now = now();

        entity::monthly_payment::ActiveModel {
            customer_id: ActiveValue::Set(params.customer_id),
            belongs_organization: ActiveValue::Set(params.belongs_organization),
            start_date: ActiveValue::Set(params.start_date),
            end_date: ActiveValue::Set(params.end_date),
            day_of_the_month: ActiveValue::Set(params.day_of_the_month),
            frequency: ActiveValue::Set(params.frequency),
            amount_of_charges: ActiveValue::Set(params.amount_of_charges),
            amount: ActiveValue::Set(params.amount),
            one_time_payment: ActiveValue::Set(params.one_time_payment),
            total_amount: ActiveValue::Set(params.total_amount),
            next_charge: ActiveValue::Set(params.next_charge),
            last_attempt: ActiveValue::Set(None),
            last_succeeded: ActiveValue::Set(None),
            notes: ActiveValue::Set(params.notes),
            status: ActiveValue::Set(RecordStatus::Active.to_string()),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn get(
        &self,
        monthly_payment_id: i32,
    ) -> Result<Option<MonthlyPaymentModel>, DbErr> {
        entity::prelude::MonthlyPayment::find_by_id(monthly_payment_id)
            .one(self.db)
            .await
    }

    /// Lists monthly payments, optionally of a single customer, newest first
    pub async fn list(
        &self,
        customer_id: Option<i32>,
        page: u64,
        page_size: u64,
    ) -> Result<Page<MonthlyPaymentModel>, DbErr> {
        let mut select = entity::prelude::MonthlyPayment::find();

        if let Some(customer_id) = customer_id {
            select = select.filter(entity::monthly_payment::Column::CustomerId.eq(customer_id));
        }

        let select = select
            .order_by_desc(entity::monthly_payment::Column::CreatedAt)
            .order_by_desc(entity::monthly_payment::Column::Id);

        fetch_page(select, self.db, page, page_size).await
    }

    /// Replaces every column set by the client, keeping status and charge timestamps
    pub async fn update(
        &self,
        monthly_payment_id: i32,
        params: MonthlyPaymentParams,
    ) -> Result<Option<MonthlyPaymentModel>, DbErr> {
        let Some(monthly_payment) = self.get(monthly_payment_id).await? else {
            return Ok(None);
        };

        let mut monthly_payment_am = monthly_payment.into_active_model();
        monthly_payment_am.customer_id = ActiveValue::Set(params.customer_id);
        monthly_payment_am.belongs_organization = ActiveValue::Set(params.belongs_organization);
        monthly_payment_am.start_date = ActiveValue::Set(params.start_date);
        monthly_payment_am.end_date = ActiveValue::Set(params.end_date);
        monthly_payment_am.day_of_the_month = ActiveValue::Set(params.day_of_the_month);
        monthly_payment_am.frequency = ActiveValue::Set(params.frequency);
        monthly_payment_am.amount_of_charges = ActiveValue::Set(params.amount_of_charges);
        monthly_payment_am.amount = ActiveValue::Set(params.amount);
        monthly_payment_am.one_time_payment = ActiveValue::Set(params.one_time_payment);
        monthly_payment_am.total_amount = ActiveValue::Set(params.total_amount);
        monthly_payment_am.next_charge = ActiveValue::Set(params.next_charge);
        monthly_payment_am.notes = ActiveValue::Set(params.notes);
        monthly_payment_am.updated_at = ActiveValue::Set(now());

        Ok(Some(monthly_payment_am.update(self.db).await?))
    }

    pub async fn update_totals(
        &self,
        monthly_payment_id: i32,
        totals: MonthlyPaymentTotals,
    ) -> Result<Option<MonthlyPaymentModel>, DbErr> {
        let Some(monthly_payment) = self.get(monthly_payment_id).await? else {
            return Ok(None);
        };

        let mut monthly_payment_am = monthly_payment.into_active_model();
        monthly_payment_am.amount = ActiveValue::Set(totals.amount);
        monthly_payment_am.one_time_payment = ActiveValue::Set(totals.one_time_payment);
        monthly_payment_am.total_amount = ActiveValue::Set(totals.total_amount);
        monthly_payment_am.updated_at = ActiveValue::Set(now());

        Ok(Some(monthly_payment_am.update(self.db).await?))
    }

    /// Records the outcome of a charge: `last_succeeded` on success, `last_attempt` on failure
    pub async fn record_charge(
        &self,
        monthly_payment_id: i32,
        succeeded: bool,
        at: NaiveDateTime,
    ) -> Result<Option<MonthlyPaymentModel>, DbErr> {
        let Some(monthly_payment) = self.get(monthly_payment_id).await? else {
            return Ok(None);
        };

        let mut monthly_payment_am = monthly_payment.into_active_model();
        if succeeded {
            monthly_payment_am.last_succeeded = ActiveValue::Set(Some(at));
        } else {
            monthly_payment_am.last_attempt = ActiveValue::Set(Some(at));
        }
        monthly_payment_am.updated_at = ActiveValue::Set(now());

        Ok(Some(monthly_payment_am.update(self.db).await?))
    }

    pub async fn set_status(
        &self,
        monthly_payment_id: i32,
        status: RecordStatus,
    ) -> Result<Option<MonthlyPaymentModel>, DbErr> {
        let Some(monthly_payment) = self.get(monthly_payment_id).await? else {
            return Ok(None);
        };

        let mut monthly_payment_am = monthly_payment.into_active_model();
        monthly_payment_am.status = ActiveValue::Set(status.to_string());
        monthly_payment_am.updated_at = ActiveValue::Set(now());

        Ok(Some(monthly_payment_am.update(self.db).await?))
    }
}
