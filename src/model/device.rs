use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::server::util::validate;

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq)]
pub struct DeviceDto {
    pub id: i32,
    pub device_number: String,
    pub imei: String,
    pub model: String,
    pub serial_number: Option<String>,
    pub purchase_date: Option<NaiveDate>,
    pub plan_type: Option<String>,
    pub status: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Serialize, Deserialize, ToSchema, Validate, Debug, Clone)]
pub struct DeviceRequest {
    #[validate(length(min = 1, max = 100))]
    pub device_number: String,
    /// 15 digit IMEI with a valid Luhn check digit
    #[validate(custom(function = "validate::imei"))]
    pub imei: String,
    #[validate(length(min = 1, max = 100))]
    pub model: String,
    #[serde(default)]
    #[validate(length(max = 100))]
    pub serial_number: Option<String>,
    #[serde(default)]
    pub purchase_date: Option<NaiveDate>,
    #[serde(default)]
    #[validate(length(max = 100))]
    pub plan_type: Option<String>,
}

#[derive(Deserialize, IntoParams, Default)]
#[into_params(parameter_in = Query)]
pub struct DeviceListQuery {
    pub page: Option<u64>,
    /// Matches device number, IMEI, model or serial number
    pub search: Option<String>,
    pub status: Option<String>,
}

/// Management status of a device as reported by Samsung
#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq)]
pub struct SamsungStatusDto {
    pub device_id: i32,
    pub imei: String,
    pub status: String,
    pub enrolled: bool,
    pub last_seen: Option<String>,
}

impl From<entity::device::Model> for DeviceDto {
    fn from(model: entity::device::Model) -> Self {
        Self {
            id: model.id,
            device_number: model.device_number,
            imei: model.imei,
            model: model.model,
            serial_number: model.serial_number,
            purchase_date: model.purchase_date,
            plan_type: model.plan_type,
            status: model.status,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
