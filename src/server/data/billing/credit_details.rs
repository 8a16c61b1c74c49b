use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    IntoActiveModel, QueryFilter,
};

use crate::{
    model::{billing::CreditDetailsRequest, status::RecordStatus},
    server::{model::db::CreditDetailsModel, util::time::now},
};

pub struct CreditDetailsRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CreditDetailsRepository<'a, C> {
    /// Creates a new instance of [`CreditDetailsRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        customer_id: i32,
        request: CreditDetailsRequest,
    ) -> Result<CreditDetailsModel, DbErr> {
        let now = now();

        entity::credit_details::ActiveModel {
            customer_id: ActiveValue::Set(customer_id),
            token: ActiveValue::Set(request.token),
            last_4_digits: ActiveValue::Set(request.last_4_digits),
            expiry_month: ActiveValue::Set(request.expiry_month),
            expiry_year: ActiveValue::Set(request.expiry_year),
            status: ActiveValue::Set(RecordStatus::Active.to_string()),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn get(&self, credit_details_id: i32) -> Result<Option<CreditDetailsModel>, DbErr> {
        entity::prelude::CreditDetails::find_by_id(credit_details_id)
            .one(self.db)
            .await
    }

    pub async fn find_by_token(&self, token: &str) -> Result<Option<CreditDetailsModel>, DbErr> {
        entity::prelude::CreditDetails::find()
            .filter(entity::credit_details::Column::Token.eq(token))
            .one(self.db)
            .await
    }

    pub async fn set_status(
        &self,
        credit_details_id: i32,
        status: RecordStatus,
    ) -> Result<Option<CreditDetailsModel>, DbErr> {
        let Some(credit_details) = self.get(credit_details_id).await? else {
            return Ok(None);
        };

        let mut credit_details_am = credit_details.into_active_model();
        credit_details_am.status = ActiveValue::Set(status.to_string());
        credit_details_am.updated_at = ActiveValue::Set(now());

        Ok(Some(credit_details_am.update(self.db).await?))
    }
}
