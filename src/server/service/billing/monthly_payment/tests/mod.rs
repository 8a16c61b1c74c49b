use sea_orm::{DatabaseConnection, DbErr, EntityTrait, PaginatorTrait};
use yaazoru_test_utils::prelude::*;

use crate::{
    model::billing::{
        CreateMonthlyPaymentRequest, CreditDetailsRequest, ItemRequest, MonthlyPaymentFields,
        PaymentRequest, UpdateMonthlyPaymentRequest,
    },
    server::{
        error::{record::RecordError, validation::ValidationError, Error},
        service::billing::monthly_payment::MonthlyPaymentService,
    },
};

mod deactivate;

/// Monthly plan of 12 charges on the 10th starting 2026-01-05
fn fields(customer_id: i32) -> MonthlyPaymentFields {
    MonthlyPaymentFields {
        customer_id,
        belongs_organization: None,
        start_date: factory::date(2026, 1, 5),
        day_of_the_month: 10,
        frequency: 1,
        amount_of_charges: 12,
        amount: Some(100.0),
        notes: None,
    }
}

fn credit_details(seed: u32) -> CreditDetailsRequest {
    CreditDetailsRequest {
        token: factory::card_token(seed),
        last_4_digits: "4242".to_string(),
        expiry_month: 12,
        expiry_year: 2030,
    }
}

fn item(quantity: i32, price: f64, payment_type: &str) -> ItemRequest {
    ItemRequest {
        description: "Kosher phone plan".to_string(),
        quantity,
        price,
        payment_type: payment_type.to_string(),
    }
}

fn pending_payment(year: i32, month: u32) -> PaymentRequest {
    PaymentRequest {
        date: factory::date(year, month, 10),
        amount: 100.0,
        status: None,
    }
}

fn create_request(customer_id: i32, token_seed: u32) -> CreateMonthlyPaymentRequest {
    CreateMonthlyPaymentRequest {
        fields: fields(customer_id),
        credit_details: credit_details(token_seed),
        items: Vec::new(),
        payments: Vec::new(),
    }
}

fn update_request(customer_id: i32) -> UpdateMonthlyPaymentRequest {
    UpdateMonthlyPaymentRequest {
        fields: MonthlyPaymentFields {
            start_date: factory::date(2026, 1, 10),
            ..fields(customer_id)
        },
        credit_details: None,
        items: None,
        payments: None,
    }
}

/// Row counts of the five billing tables, in write order:
/// monthly payments, credit details, links, payments, items
async fn billing_row_counts(db: &DatabaseConnection) -> Result<[u64; 5], DbErr> {
    Ok([
        entity::prelude::MonthlyPayment::find().count(db).await?,
        entity::prelude::CreditDetails::find().count(db).await?,
        entity::prelude::PaymentCreditLink::find().count(db).await?,
        entity::prelude::Payments::find().count(db).await?,
        entity::prelude::Item::find().count(db).await?,
    ])
}
