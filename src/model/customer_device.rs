use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Assignment of a device to a customer
#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq)]
pub struct CustomerDeviceDto {
    pub id: i32,
    pub customer_id: i32,
    pub device_id: i32,
    pub received_at: NaiveDate,
    pub plan_end_date: Option<NaiveDate>,
    pub status: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
pub struct AssignDeviceRequest {
    pub device_id: i32,
    pub received_at: NaiveDate,
    #[serde(default)]
    pub plan_end_date: Option<NaiveDate>,
}

impl From<entity::customer_device::Model> for CustomerDeviceDto {
    fn from(model: entity::customer_device::Model) -> Self {
        Self {
            id: model.id,
            customer_id: model.customer_id,
            device_id: model.device_id,
            received_at: model.received_at,
            plan_end_date: model.plan_end_date,
            status: model.status,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
