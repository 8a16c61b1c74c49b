use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder,
};

use crate::{
    model::{customer_device::AssignDeviceRequest, status::RecordStatus},
    server::{
        model::db::CustomerDeviceModel,
        util::{
            pagination::{fetch_page, Page},
            time::now,
        },
    },
};

pub struct CustomerDeviceRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CustomerDeviceRepository<'a, C> {
    /// Creates a new instance of [`CustomerDeviceRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates an active assignment of a device to a customer
    pub async fn create(
        &self,
        customer_id: i32,
        request: AssignDeviceRequest,
    ) -> Result<CustomerDeviceModel, DbErr> {
        let now = now();

        entity::customer_device::ActiveModel {
            customer_id: ActiveValue::Set(customer_id),
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

    pub async fn get(&self, assignment_id: i32) -> Result<Option<CustomerDeviceModel>, DbErr> {
        entity::prelude::CustomerDevice::find_by_id(assignment_id)
            .one(self.db)
            .await
    }

    /// Finds the active assignment of a device, if any
    pub async fn find_active_by_device(
        &self,
        device_id: i32,
    ) -> Result<Option<CustomerDeviceModel>, DbErr> {
        entity::prelude::CustomerDevice::find()
            .filter(entity::customer_device::Column::DeviceId.eq(device_id))
            .filter(entity::customer_device::Column::Status.eq(RecordStatus::Active.as_str()))
            .one(self.db)
            .await
    }

    /// Lists every assignment of a customer, newest first, including inactive history
    pub async fn list_by_customer(
        &self,
        customer_id: i32,
        page: u64,
        page_size: u64,
    ) -> Result<Page<CustomerDeviceModel>, DbErr> {
        let select = entity::prelude::CustomerDevice::find()
            .filter(entity::customer_device::Column::CustomerId.eq(customer_id))
            .order_by_desc(entity::customer_device::Column::ReceivedAt)
            .order_by_desc(entity::customer_device::Column::Id);

        fetch_page(select, self.db, page, page_size).await
    }

    pub async fn set_status(
        &self,
        assignment_id: i32,
        status: RecordStatus,
    ) -> Result<Option<CustomerDeviceModel>, DbErr> {
        let Some(assignment) = self.get(assignment_id).await? else {
            return Ok(None);
        };

        let mut assignment_am = assignment.into_active_model();
        assignment_am.status = ActiveValue::Set(status.to_string());
        assignment_am.updated_at = ActiveValue::Set(now());

        Ok(Some(assignment_am.update(self.db).await?))
    }
}
