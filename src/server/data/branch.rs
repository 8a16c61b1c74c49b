use sea_orm::{
    ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, EntityTrait, IntoActiveModel,
    QueryOrder,
};

use crate::{
    model::{branch::BranchRequest, status::RecordStatus},
    server::{
        model::db::BranchModel,
        util::{
            pagination::{fetch_page, Page},
            time::now,
        },
    },
};

pub struct BranchRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> BranchRepository<'a, C> {
    /// Creates a new instance of [`BranchRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new active branch
    pub async fn create(&self, request: BranchRequest) -> Result<BranchModel, DbErr> {
        let now = now();

        entity::branch::ActiveModel {
            city: ActiveValue::Set(request.city),
            address: ActiveValue::Set(request.address),
            manager_name: ActiveValue::Set(request.manager_name),
            phone_number: ActiveValue::Set(request.phone_number),
            status: ActiveValue::Set(RecordStatus::Active.to_string()),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn get(&self, branch_id: i32) -> Result<Option<BranchModel>, DbErr> {
        entity::prelude::Branch::find_by_id(branch_id)
            .one(self.db)
            .await
    }

    pub async fn list(&self, page: u64, page_size: u64) -> Result<Page<BranchModel>, DbErr> {
        let select = entity::prelude::Branch::find().order_by_asc(entity::branch::Column::Id);

        fetch_page(select, self.db, page, page_size).await
    }

    /// Replaces the editable fields of a branch, returns `None` if it does not exist
    pub async fn update(
        &self,
        branch_id: i32,
        request: BranchRequest,
    ) -> Result<Option<BranchModel>, DbErr> {
        let Some(branch) = self.get(branch_id).await? else {
            return Ok(None);
        };

        let mut branch_am = branch.into_active_model();
        branch_am.city = ActiveValue::Set(request.city);
        branch_am.address = ActiveValue::Set(request.address);
        branch_am.manager_name = ActiveValue::Set(request.manager_name);
        branch_am.phone_number = ActiveValue::Set(request.phone_number);
        branch_am.updated_at = ActiveValue::Set(now());

        Ok(Some(branch_am.update(self.db).await?))
    }

    pub async fn set_status(
        &self,
        branch_id: i32,
        status: RecordStatus,
    ) -> Result<Option<BranchModel>, DbErr> {
        let Some(branch) = self.get(branch_id).await? else {
            return Ok(None);
        };

        let mut branch_am = branch.into_active_model();
        branch_am.status = ActiveValue::Set(status.to_string());
        branch_am.updated_at = ActiveValue::Set(now());

        Ok(Some(branch_am.update(self.db).await?))
    }
}
