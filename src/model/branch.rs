use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::server::util::validate;

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq)]
pub struct BranchDto {
    pub id: i32,
    pub city: String,
    pub address: String,
    pub manager_name: String,
    pub phone_number: String,
    pub status: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Serialize, Deserialize, ToSchema, Validate, Debug, Clone)]
pub struct BranchRequest {
    #[validate(length(min = 1, max = 100))]
    pub city: String,
    #[validate(length(min = 1, max = 100))]
    pub address: String,
    #[validate(length(min = 1, max = 100))]
    pub manager_name: String,
    #[validate(custom(function = "validate::phone_number"))]
    pub phone_number: String,
}

impl From<entity::branch::Model> for BranchDto {
    fn from(model: entity::branch::Model) -> Self {
        Self {
            id: model.id,
            city: model.city,
            address: model.address,
            manager_name: model.manager_name,
            phone_number: model.phone_number,
            status: model.status,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
