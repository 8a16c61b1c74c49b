//! Monthly payment plans, their credit card, items and installments.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::server::util::validate;

#[derive(Serialize, Deserialize, ToSchema, Validate, Debug, Clone)]
pub struct CreditDetailsRequest {
    /// Payment gateway token for the card
    #[validate(length(min = 1, max = 255))]
    pub token: String,
    #[validate(custom(function = "validate::last_4_digits"))]
    pub last_4_digits: String,
    #[validate(range(min = 1, max = 12, message = "must be between 1 and 12"))]
    pub expiry_month: i32,
    pub expiry_year: i32,
}

#[derive(Serialize, Deserialize, ToSchema, Validate, Debug, Clone)]
pub struct ItemRequest {
    #[validate(length(min = 1, max = 100))]
    pub description: String,
    #[validate(range(min = 1, message = "must be at least 1"))]
    pub quantity: i32,
    #[validate(range(min = 0.0, message = "must not be negative"))]
    pub price: f64,
    /// `monthly` or `one_time`
    pub payment_type: String,
}

#[derive(Serialize, Deserialize, ToSchema, Validate, Debug, Clone)]
pub struct PaymentRequest {
    pub date: NaiveDate,
    #[validate(range(min = 0.0, message = "must not be negative"))]
    pub amount: f64,
    /// Defaults to `pending`
    #[serde(default)]
    pub status: Option<String>,
}

/// Fields shared by the create and update payloads of a monthly payment
#[derive(Serialize, Deserialize, ToSchema, Validate, Debug, Clone)]
pub struct MonthlyPaymentFields {
    pub customer_id: i32,
    #[serde(default)]
    #[validate(length(max = 100))]
    pub belongs_organization: Option<String>,
    pub start_date: NaiveDate,
    /// Day of the month charges fall on, 1 to 28
    #[validate(range(min = 1, max = 28, message = "must be between 1 and 28"))]
    pub day_of_the_month: i32,
    /// Months between two charges
    #[validate(range(min = 1, message = "must be at least 1"))]
    pub frequency: i32,
    #[validate(range(min = 1, message = "must be at least 1"))]
    pub amount_of_charges: i32,
    /// Amount per charge, only used when no items are given
    #[serde(default)]
    #[validate(range(min = 0.0, message = "must not be negative"))]
    pub amount: Option<f64>,
    #[serde(default)]
    #[validate(length(max = 2000))]
    pub notes: Option<String>,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
pub struct CreateMonthlyPaymentRequest {
    #[serde(flatten)]
    pub fields: MonthlyPaymentFields,
    pub credit_details: CreditDetailsRequest,
    #[serde(default)]
    pub items: Vec<ItemRequest>,
    #[serde(default)]
    pub payments: Vec<PaymentRequest>,
}

/// Omitted collections are left untouched; supplied ones replace the stored rows
#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
pub struct UpdateMonthlyPaymentRequest {
    #[serde(flatten)]
    pub fields: MonthlyPaymentFields,
    #[serde(default)]
    pub credit_details: Option<CreditDetailsRequest>,
    #[serde(default)]
    pub items: Option<Vec<ItemRequest>>,
    #[serde(default)]
    pub payments: Option<Vec<PaymentRequest>>,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
pub struct PaymentStatusRequest {
    /// `pending`, `paid` or `failed`
    pub status: String,
}

#[derive(Deserialize, IntoParams, Default)]
#[into_params(parameter_in = Query)]
pub struct MonthlyPaymentListQuery {
    pub page: Option<u64>,
    pub customer_id: Option<i32>,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq)]
pub struct MonthlyPaymentDto {
    pub id: i32,
    pub customer_id: i32,
    pub belongs_organization: Option<String>,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub day_of_the_month: i32,
    pub frequency: i32,
    pub amount_of_charges: i32,
    pub amount: f64,
    pub one_time_payment: f64,
    pub total_amount: f64,
    pub next_charge: NaiveDate,
    pub last_attempt: Option<NaiveDateTime>,
    pub last_succeeded: Option<NaiveDateTime>,
    pub notes: Option<String>,
    pub status: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq)]
pub struct CreditDetailsDto {
    pub id: i32,
    pub customer_id: i32,
    pub token: String,
    pub last_4_digits: String,
    pub expiry_month: i32,
    pub expiry_year: i32,
    pub status: String,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq)]
pub struct ItemDto {
    pub id: i32,
    pub monthly_payment_id: i32,
    pub description: String,
    pub quantity: i32,
    pub price: f64,
    pub total: f64,
    pub payment_type: String,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq)]
pub struct PaymentDto {
    pub id: i32,
    pub monthly_payment_id: i32,
    pub date: NaiveDate,
    pub amount: f64,
    pub status: String,
}

/// A monthly payment with its active card, items and installments
#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq)]
pub struct MonthlyPaymentDetailDto {
    pub monthly_payment: MonthlyPaymentDto,
    pub credit_details: Option<CreditDetailsDto>,
    pub items: Vec<ItemDto>,
    pub payments: Vec<PaymentDto>,
}

impl From<entity::monthly_payment::Model> for MonthlyPaymentDto {
    fn from(model: entity::monthly_payment::Model) -> Self {
        Self {
            id: model.id,
            customer_id: model.customer_id,
            belongs_organization: model.belongs_organization,
            start_date: model.start_date,
            end_date: model.end_date,
            day_of_the_month: model.day_of_the_month,
            frequency: model.frequency,
            amount_of_charges: model.amount_of_charges,
            amount: model.amount,
            one_time_payment: model.one_time_payment,
            total_amount: model.total_amount,
            next_charge: model.next_charge,
            last_attempt: model.last_attempt,
            last_succeeded: model.last_succeeded,
            notes: model.notes,
            status: model.status,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

impl From<entity::credit_details::Model> for CreditDetailsDto {
    fn from(model: entity::credit_details::Model) -> Self {
        Self {
            id: model.id,
            customer_id: model.customer_id,
            token: model.token,
            last_4_digits: model.last_4_digits,
            expiry_month: model.expiry_month,
            expiry_year: model.expiry_year,
            status: model.status,
        }
    }
}

impl From<entity::item::Model> for ItemDto {
    fn from(model: entity::item::Model) -> Self {
        Self {
            id: model.id,
            monthly_payment_id: model.monthly_payment_id,
            description: model.description,
            quantity: model.quantity,
            price: model.price,
            total: model.total,
            payment_type: model.payment_type,
        }
    }
}

impl From<entity::payments::Model> for PaymentDto {
    fn from(model: entity::payments::Model) -> Self {
        Self {
            id: model.id,
            monthly_payment_id: model.monthly_payment_id,
            date: model.date,
            amount: model.amount,
            status: model.status,
        }
    }
}
