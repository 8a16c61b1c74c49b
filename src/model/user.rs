use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::server::util::validate;

/// A staff member of the business
#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq)]
pub struct UserDto {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub id_number: String,
    pub email: String,
    pub phone_number: String,
    /// `admin` or `branch`
    pub role: String,
    pub branch_id: Option<i32>,
    pub status: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Serialize, Deserialize, ToSchema, Validate, Debug, Clone)]
pub struct UserRequest {
    #[validate(length(min = 1, max = 100))]
    pub first_name: String,
    #[validate(length(min = 1, max = 100))]
    pub last_name: String,
    #[validate(custom(function = "validate::israeli_id"))]
    pub id_number: String,
    #[validate(email)]
    pub email: String,
    #[validate(custom(function = "validate::phone_number"))]
    pub phone_number: String,
    pub role: String,
    /// Required when `role` is `branch`
    #[serde(default)]
    pub branch_id: Option<i32>,
}

impl From<entity::user::Model> for UserDto {
    fn from(model: entity::user::Model) -> Self {
        Self {
            id: model.id,
            first_name: model.first_name,
            last_name: model.last_name,
            id_number: model.id_number,
            email: model.email,
            phone_number: model.phone_number,
            role: model.role,
            branch_id: model.branch_id,
            status: model.status,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
