use chrono::NaiveDate;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult,
    EntityTrait, IntoActiveModel, QueryFilter, QueryOrder,
};

use crate::{
    model::status::PaymentStatus,
    server::{model::db::PaymentModel, util::time::now},
};

/// Repository of installment rows (`payments` table)
pub struct PaymentsRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PaymentsRepository<'a, C> {
    /// Creates a new instance of [`PaymentsRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        monthly_payment_id: i32,
        date: NaiveDate,
        amount: f64,
        status: PaymentStatus,
    ) -> Result<PaymentModel, DbErr> {
        let now = now();

        entity::payments::ActiveModel {
            monthly_payment_id: ActiveValue::Set(monthly_payment_id),
            date: ActiveValue::Set(date),
            amount: ActiveValue::Set(amount),
            status: ActiveValue::Set(status.to_string()),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn get(&self, payment_id: i32) -> Result<Option<PaymentModel>, DbErr> {
        entity::prelude::Payments::find_by_id(payment_id)
            .one(self.db)
            .await
    }

    /// Lists the installments of a monthly payment in date order
    pub async fn list_by_monthly_payment(
        &self,
        monthly_payment_id: i32,
    ) -> Result<Vec<PaymentModel>, DbErr> {
        entity::prelude::Payments::find()
            .filter(entity::payments::Column::MonthlyPaymentId.eq(monthly_payment_id))
            .order_by_asc(entity::payments::Column::Date)
            .order_by_asc(entity::payments::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn update_status(
        &self,
        payment_id: i32,
        status: PaymentStatus,
    ) -> Result<Option<PaymentModel>, DbErr> {
        let Some(payment) = self.get(payment_id).await? else {
            return Ok(None);
        };

        let mut payment_am = payment.into_active_model();
        payment_am.status = ActiveValue::Set(status.to_string());
        payment_am.updated_at = ActiveValue::Set(now());

        Ok(Some(payment_am.update(self.db).await?))
    }

    /// Deletes the `pending` installments of a monthly payment, keeping paid and failed history
    pub async fn delete_pending(&self, monthly_payment_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Payments::delete_many()
            .filter(entity::payments::Column::MonthlyPaymentId.eq(monthly_payment_id))
            .filter(entity::payments::Column::Status.eq(PaymentStatus::Pending.as_str()))
            .exec(self.db)
            .await
    }
}
