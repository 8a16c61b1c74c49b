//! Billing services: monthly payment plans, their items and installments.
//!
//! Writes touching more than one billing table run inside a single database transaction.
//! Every early return drops the uncommitted transaction, which rolls it back.

pub mod item;
pub mod monthly_payment;
pub mod payments;

use sea_orm::ConnectionTrait;

use crate::{
    model::{
        billing::{ItemRequest, MonthlyPaymentDetailDto},
        status::PaymentType,
    },
    server::{
        data::billing::{
            credit_details::CreditDetailsRepository,
            item::{ItemParams, ItemRepository},
            monthly_payment::{MonthlyPaymentRepository, MonthlyPaymentTotals},
            payment_credit_link::PaymentCreditLinkRepository,
            payments::PaymentsRepository,
        },
        error::{record::RecordError, validation::ValidationError, Error},
        model::db::{ItemModel, MonthlyPaymentModel},
        util::validate,
    },
};

pub(crate) static MONTHLY_PAYMENT: &str = "Monthly payment";

/// Rounds a money amount to agorot
pub fn round_money(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Validates an item payload and computes its total
pub fn item_params(request: ItemRequest) -> Result<ItemParams, ValidationError> {
    let request = ItemRequest {
        description: validate::trimmed(&request.description),
        ..request
    };
    validate::check(&request)?;
    let payment_type = validate::parse_kind("payment_type", &request.payment_type)?;

    Ok(ItemParams {
        description: request.description,
        quantity: request.quantity,
        price: request.price,
        total: round_money(request.price * request.quantity as f64),
        payment_type,
    })
}

/// Derives the amounts of a plan from its items
///
/// With no items the per-charge amount is `fallback_amount`. Otherwise it is the sum of
/// the `monthly` item totals and `one_time` totals add up to the one-time payment.
pub fn compute_totals(
    items: impl IntoIterator<Item = (f64, PaymentType)>,
    amount_of_charges: i32,
    fallback_amount: f64,
) -> MonthlyPaymentTotals {
    let mut has_items = false;
    let mut amount = 0.0;
    let mut one_time_payment = 0.0;

    for (total, payment_type) in items {
        has_items = true;
        match payment_type {
            PaymentType::Monthly => amount += total,
            PaymentType::OneTime => one_time_payment += total,
        }
    }
    if !has_items {
        amount = fallback_amount;
    }

    let amount = round_money(amount);
    let one_time_payment = round_money(one_time_payment);

    MonthlyPaymentTotals {
        amount,
        one_time_payment,
        total_amount: round_money(amount * amount_of_charges as f64 + one_time_payment),
    }
}

/// Stored items as `(total, payment_type)` pairs for [`compute_totals`]
///
/// An unreadable stored payment type is treated as monthly.
pub(crate) fn stored_item_totals(items: &[ItemModel]) -> Vec<(f64, PaymentType)> {
    items
        .iter()
        .map(|item| {
            let payment_type = item
                .payment_type
                .parse()
                .unwrap_or(PaymentType::Monthly);
            (item.total, payment_type)
        })
        .collect()
}

/// Recomputes and stores the amounts of a plan from its current items
pub(crate) async fn recompute_totals<C: ConnectionTrait>(
    db: &C,
    monthly_payment: &MonthlyPaymentModel,
) -> Result<MonthlyPaymentModel, Error> {
    let items = ItemRepository::new(db)
        .list_by_monthly_payment(monthly_payment.id)
        .await?;
    let totals = compute_totals(
        stored_item_totals(&items),
        monthly_payment.amount_of_charges,
        monthly_payment.amount,
    );

    let updated = MonthlyPaymentRepository::new(db)
        .update_totals(monthly_payment.id, totals)
        .await?
        .ok_or(RecordError::not_found(MONTHLY_PAYMENT, monthly_payment.id))?;

    Ok(updated)
}

/// Loads the active card, items and installments of a plan
pub(crate) async fn load_detail<C: ConnectionTrait>(
    db: &C,
    monthly_payment: MonthlyPaymentModel,
) -> Result<MonthlyPaymentDetailDto, Error> {
    let credit_details = match PaymentCreditLinkRepository::new(db)
        .find_active_by_monthly_payment(monthly_payment.id)
        .await?
    {
        Some(link) => {
            CreditDetailsRepository::new(db)
                .get(link.credit_details_id)
                .await?
        }
        None => None,
    };
    let items = ItemRepository::new(db)
        .list_by_monthly_payment(monthly_payment.id)
        .await?;
    let payments = PaymentsRepository::new(db)
        .list_by_monthly_payment(monthly_payment.id)
        .await?;

    Ok(MonthlyPaymentDetailDto {
        monthly_payment: monthly_payment.into(),
        credit_details: credit_details.map(Into::into),
        items: items.into_iter().map(Into::into).collect(),
        payments: payments.into_iter().map(Into::into).collect(),
    })
}
