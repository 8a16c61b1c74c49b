use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder,
};

use crate::{
    model::{sim_card::SimCardRequest, status::RecordStatus},
    server::{
        model::db::SimCardModel,
        util::{
            pagination::{fetch_page, Page},
            time::now,
        },
    },
};

pub struct SimCardRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> SimCardRepository<'a, C> {
    /// Creates a new instance of [`SimCardRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, request: SimCardRequest) -> Result<SimCardModel, DbErr> {
        let now = now();

        entity::sim_card::ActiveModel {
            sim_number: ActiveValue::Set(request.sim_number),
            customer_id: ActiveValue::Set(request.customer_id),
            device_id: ActiveValue::Set(request.device_id),
            received_at: ActiveValue::Set(request.received_at),
            plan_end_date: ActiveValue::Set(request.plan_end_date),
            status: ActiveValue::Set(RecordStatus::Active.to_string()),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn get(&self, sim_card_id: i32) -> Result<Option<SimCardModel>, DbErr> {
        entity::prelude::SimCard::find_by_id(sim_card_id)
            .one(self.db)
            .await
    }

    pub async fn find_by_sim_number(
        &self,
        sim_number: &str,
    ) -> Result<Option<SimCardModel>, DbErr> {
        entity::prelude::SimCard::find()
            .filter(entity::sim_card::Column::SimNumber.eq(sim_number))
            .one(self.db)
            .await
    }

    pub async fn list(
        &self,
        search: Option<String>,
        status: Option<RecordStatus>,
        page: u64,
        page_size: u64,
    ) -> Result<Page<SimCardModel>, DbErr> {
        let mut select = entity::prelude::SimCard::find();

        if let Some(search) = search {
            select = select.filter(entity::sim_card::Column::SimNumber.contains(&search));
        }
        if let Some(status) = status {
            select = select.filter(entity::sim_card::Column::Status.eq(status.as_str()));
        }

        let select = select
            .order_by_desc(entity::sim_card::Column::CreatedAt)
            .order_by_desc(entity::sim_card::Column::Id);

        fetch_page(select, self.db, page, page_size).await
    }

    pub async fn update(
        &self,
        sim_card_id: i32,
        request: SimCardRequest,
    ) -> Result<Option<SimCardModel>, DbErr> {
        let Some(sim_card) = self.get(sim_card_id).await? else {
            return Ok(None);
        };

        let mut sim_card_am = sim_card.into_active_model();
        sim_card_am.sim_number = ActiveValue::Set(request.sim_number);
        sim_card_am.customer_id = ActiveValue::Set(request.customer_id);
        sim_card_am.device_id = ActiveValue::Set(request.device_id);
        sim_card_am.received_at = ActiveValue::Set(request.received_at);
        sim_card_am.plan_end_date = ActiveValue::Set(request.plan_end_date);
        sim_card_am.updated_at = ActiveValue::Set(now());

        Ok(Some(sim_card_am.update(self.db).await?))
    }

    pub async fn set_status(
        &self,
        sim_card_id: i32,
        status: RecordStatus,
    ) -> Result<Option<SimCardModel>, DbErr> {
        let Some(sim_card) = self.get(sim_card_id).await? else {
            return Ok(None);
        };

        let mut sim_card_am = sim_card.into_active_model();
        sim_card_am.status = ActiveValue::Set(status.to_string());
        sim_card_am.updated_at = ActiveValue::Set(now());

        Ok(Some(sim_card_am.update(self.db).await?))
    }
}
