use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::server::util::validate;

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq)]
pub struct CustomerDto {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    /// Israeli ID number, 9 digits
    pub id_number: String,
    pub email: String,
    pub phone_number: String,
    pub additional_phone: Option<String>,
    pub address: String,
    pub city: String,
    pub status: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Payload for creating or replacing a customer
#[derive(Serialize, Deserialize, ToSchema, Validate, Debug, Clone)]
pub struct CustomerRequest {
    #[validate(length(min = 1, max = 100))]
    pub first_name: String,
    #[validate(length(min = 1, max = 100))]
    pub last_name: String,
    /// Israeli ID number, up to 9 digits; shorter values are left-padded with zeros
    #[validate(custom(function = "validate::israeli_id"))]
    pub id_number: String,
    #[validate(email)]
    pub email: String,
    #[validate(custom(function = "validate::phone_number"))]
    pub phone_number: String,
    #[serde(default)]
    #[validate(custom(function = "validate::phone_number"))]
    pub additional_phone: Option<String>,
    #[validate(length(min = 1, max = 100))]
    pub address: String,
    #[validate(length(min = 1, max = 100))]
    pub city: String,
}

#[derive(Deserialize, IntoParams, Default)]
#[into_params(parameter_in = Query)]
pub struct CustomerListQuery {
    pub page: Option<u64>,
    /// Matches name, email, phone number or ID number
    pub search: Option<String>,
    /// `active` or `inactive`
    pub status: Option<String>,
}

impl From<entity::customer::Model> for CustomerDto {
    fn from(model: entity::customer::Model) -> Self {
        Self {
            id: model.id,
            first_name: model.first_name,
            last_name: model.last_name,
            id_number: model.id_number,
            email: model.email,
            phone_number: model.phone_number,
            additional_phone: model.additional_phone,
            address: model.address,
            city: model.city,
            status: model.status,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
