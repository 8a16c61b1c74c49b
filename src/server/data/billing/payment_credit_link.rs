use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder,
};

use crate::{
    model::status::RecordStatus,
    server::{model::db::PaymentCreditLinkModel, util::time::now},
};

pub struct PaymentCreditLinkRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PaymentCreditLinkRepository<'a, C> {
    /// Creates a new instance of [`PaymentCreditLinkRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates an active link between a monthly payment and a card
    pub async fn create(
        &self,
        monthly_payment_id: i32,
        credit_details_id: i32,
    ) -> Result<PaymentCreditLinkModel, DbErr> {
        entity::payment_credit_link::ActiveModel {
            monthly_payment_id: ActiveValue::Set(monthly_payment_id),
            credit_details_id: ActiveValue::Set(credit_details_id),
            status: ActiveValue::Set(RecordStatus::Active.to_string()),
            created_at: ActiveValue::Set(now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Latest active link of a monthly payment
    pub async fn find_active_by_monthly_payment(
        &self,
        monthly_payment_id: i32,
    ) -> Result<Option<PaymentCreditLinkModel>, DbErr> {
        entity::prelude::PaymentCreditLink::find()
            .filter(entity::payment_credit_link::Column::MonthlyPaymentId.eq(monthly_payment_id))
            .filter(entity::payment_credit_link::Column::Status.eq(RecordStatus::Active.as_str()))
            .order_by_desc(entity::payment_credit_link::Column::Id)
            .one(self.db)
            .await
    }

    pub async fn set_status(
        &self,
        link: PaymentCreditLinkModel,
        status: RecordStatus,
    ) -> Result<PaymentCreditLinkModel, DbErr> {
        let mut link_am = link.into_active_model();
        link_am.status = ActiveValue::Set(status.to_string());

        link_am.update(self.db).await
    }
}
