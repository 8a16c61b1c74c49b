use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult,
    EntityTrait, IntoActiveModel, QueryFilter, QueryOrder,
};

use crate::{
    model::status::PaymentType,
    server::{model::db::ItemModel, util::time::now},
};

/// Validated column values of an item
#[derive(Debug, Clone, PartialEq)]
pub struct ItemParams {
    pub description: String,
    pub quantity: i32,
    pub price: f64,
    /// `quantity * price`, rounded to agorot
    pub total: f64,
    pub payment_type: PaymentType,
}

pub struct ItemRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ItemRepository<'a, C> {
    /// Creates a new instance of [`ItemRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        monthly_payment_id: i32,
        params: ItemParams,
    ) -> Result<ItemModel, DbErr> {
        let now = now();

        entity::item::ActiveModel {
            monthly_payment_id: ActiveValue::Set(monthly_payment_id),
            description: ActiveValue::Set(params.description),
            quantity: ActiveValue::Set(params.quantity),
            price: ActiveValue::Set(params.price),
            total: ActiveValue::Set(params.total),
            payment_type: ActiveValue::Set(params.payment_type.to_string()),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn get(&self, item_id: i32) -> Result<Option<ItemModel>, DbErr> {
        entity::prelude::Item::find_by_id(item_id).one(self.db).await
    }

    pub async fn list_by_monthly_payment(
        &self,
        monthly_payment_id: i32,
    ) -> Result<Vec<ItemModel>, DbErr> {
        entity::prelude::Item::find()
            .filter(entity::item::Column::MonthlyPaymentId.eq(monthly_payment_id))
            .order_by_asc(entity::item::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn update(
        &self,
        item_id: i32,
        params: ItemParams,
    ) -> Result<Option<ItemModel>, DbErr> {
        let Some(item) = self.get(item_id).await? else {
            return Ok(None);
        };

        let mut item_am = item.into_active_model();
        item_am.description = ActiveValue::Set(params.description);
        item_am.quantity = ActiveValue::Set(params.quantity);
        item_am.price = ActiveValue::Set(params.price);
        item_am.total = ActiveValue::Set(params.total);
        item_am.payment_type = ActiveValue::Set(params.payment_type.to_string());
        item_am.updated_at = ActiveValue::Set(now());

        Ok(Some(item_am.update(self.db).await?))
    }

    pub async fn delete(&self, item_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Item::delete_by_id(item_id)
            .exec(self.db)
            .await
    }

    /// Deletes every item of a monthly payment
    pub async fn delete_by_monthly_payment(
        &self,
        monthly_payment_id: i32,
    ) -> Result<DeleteResult, DbErr> {
        entity::prelude::Item::delete_many()
            .filter(entity::item::Column::MonthlyPaymentId.eq(monthly_payment_id))
            .exec(self.db)
            .await
    }
}
