use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::server::util::validate;

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq)]
pub struct SimCardDto {
    pub id: i32,
    pub sim_number: String,
    pub customer_id: Option<i32>,
    pub device_id: Option<i32>,
    pub received_at: Option<NaiveDate>,
    pub plan_end_date: Option<NaiveDate>,
    pub status: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Serialize, Deserialize, ToSchema, Validate, Debug, Clone)]
pub struct SimCardRequest {
    /// ICCID, 18 to 22 digits
    #[validate(custom(function = "validate::sim_number"))]
    pub sim_number: String,
    #[serde(default)]
    pub customer_id: Option<i32>,
    #[serde(default)]
    pub device_id: Option<i32>,
    #[serde(default)]
    pub received_at: Option<NaiveDate>,
    #[serde(default)]
    pub plan_end_date: Option<NaiveDate>,
}

impl From<entity::sim_card::Model> for SimCardDto {
    fn from(model: entity::sim_card::Model) -> Self {
        Self {
            id: model.id,
            sim_number: model.sim_number,
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

#[derive(Deserialize, utoipa::IntoParams, Default)]
#[into_params(parameter_in = Query)]
pub struct SimCardListQuery {
    pub page: Option<u64>,
    /// Matches the SIM number
    pub search: Option<String>,
    pub status: Option<String>,
}
