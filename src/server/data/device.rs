use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, ConnectionTrait, DbErr, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder,
};

use crate::{
    model::{device::DeviceRequest, status::RecordStatus},
    server::{
        model::db::DeviceModel,
        util::{
            pagination::{fetch_page, Page},
            time::now,
        },
    },
};

#[derive(Default, Debug, Clone)]
pub struct DeviceFilter {
    /// Substring matched against device number, IMEI, model and serial number
    pub search: Option<String>,
    pub status: Option<RecordStatus>,
}

pub struct DeviceRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> DeviceRepository<'a, C> {
    /// Creates a new instance of [`DeviceRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, request: DeviceRequest) -> Result<DeviceModel, DbErr> {
        let now = now();

        entity::device::ActiveModel {
            device_number: ActiveValue::Set(request.device_number),
            imei: ActiveValue::Set(request.imei),
            model: ActiveValue::Set(request.model),
            serial_number: ActiveValue::Set(request.serial_number),
            purchase_date: ActiveValue::Set(request.purchase_date),
            plan_type: ActiveValue::Set(request.plan_type),
            status: ActiveValue::Set(RecordStatus::Active.to_string()),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn get(&self, device_id: i32) -> Result<Option<DeviceModel>, DbErr> {
        entity::prelude::Device::find_by_id(device_id)
            .one(self.db)
            .await
    }

    pub async fn find_by_device_number(
        &self,
        device_number: &str,
    ) -> Result<Option<DeviceModel>, DbErr> {
        entity::prelude::Device::find()
            .filter(entity::device::Column::DeviceNumber.eq(device_number))
            .one(self.db)
            .await
    }

    pub async fn find_by_imei(&self, imei: &str) -> Result<Option<DeviceModel>, DbErr> {
        entity::prelude::Device::find()
            .filter(entity::device::Column::Imei.eq(imei))
            .one(self.db)
            .await
    }

    pub async fn list(
        &self,
        filter: DeviceFilter,
        page: u64,
        page_size: u64,
    ) -> Result<Page<DeviceModel>, DbErr> {
        let mut condition = Condition::all();

        if let Some(search) = filter.search {
            condition = condition.add(
                Condition::any()
                    .add(entity::device::Column::DeviceNumber.contains(&search))
                    .add(entity::device::Column::Imei.contains(&search))
                    .add(entity::device::Column::Model.contains(&search))
                    .add(entity::device::Column::SerialNumber.contains(&search)),
            );
        }
        if let Some(status) = filter.status {
            condition = condition.add(entity::device::Column::Status.eq(status.as_str()));
        }

        let select = entity::prelude::Device::find()
            .filter(condition)
            .order_by_desc(entity::device::Column::CreatedAt)
            .order_by_desc(entity::device::Column::Id);

        fetch_page(select, self.db, page, page_size).await
    }

    pub async fn update(
        &self,
        device_id: i32,
        request: DeviceRequest,
    ) -> Result<Option<DeviceModel>, DbErr> {
        let Some(device) = self.get(device_id).await? else {
            return Ok(None);
        };

        let mut device_am = device.into_active_model();
        device_am.device_number = ActiveValue::Set(request.device_number);
        device_am.imei = ActiveValue::Set(request.imei);
        device_am.model = ActiveValue::Set(request.model);
        device_am.serial_number = ActiveValue::Set(request.serial_number);
        device_am.purchase_date = ActiveValue::Set(request.purchase_date);
        device_am.plan_type = ActiveValue::Set(request.plan_type);
        device_am.updated_at = ActiveValue::Set(now());

        Ok(Some(device_am.update(self.db).await?))
    }

    pub async fn set_status(
        &self,
        device_id: i32,
        status: RecordStatus,
    ) -> Result<Option<DeviceModel>, DbErr> {
        let Some(device) = self.get(device_id).await? else {
            return Ok(None);
        };

        let mut device_am = device.into_active_model();
        device_am.status = ActiveValue::Set(status.to_string());
        device_am.updated_at = ActiveValue::Set(now());

        Ok(Some(device_am.update(self.db).await?))
    }
}
