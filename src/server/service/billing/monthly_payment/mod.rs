//! Monthly payment plans.
//!
//! Creating or updating a plan writes the plan, its credit details, the link between them,
//! its installments and its items in one transaction, so either every table changes or
//! none does.

#[cfg(test)]
mod tests;

use chrono::Datelike;
use sea_orm::{DatabaseConnection, DatabaseTransaction, TransactionTrait};

use crate::{
    model::{
        api::PageDto,
        billing::{
            CreateMonthlyPaymentRequest, CreditDetailsRequest, ItemRequest,
            MonthlyPaymentDetailDto, MonthlyPaymentDto, MonthlyPaymentFields,
            MonthlyPaymentListQuery, PaymentRequest, UpdateMonthlyPaymentRequest,
        },
        status::{PaymentStatus, PaymentType, RecordStatus},
    },
    server::{
        data::{
            billing::{
                credit_details::CreditDetailsRepository,
                item::{ItemParams, ItemRepository},
                monthly_payment::{MonthlyPaymentParams, MonthlyPaymentRepository},
                payment_credit_link::PaymentCreditLinkRepository,
                payments::PaymentsRepository,
            },
            customer::CustomerRepository,
        },
        error::{record::RecordError, validation::ValidationError, Error},
        service::billing::{
            compute_totals, item_params, load_detail, round_money, stored_item_totals,
            MONTHLY_PAYMENT,
        },
        util::{time, validate},
    },
};

static CREDIT_DETAILS: &str = "Credit details";

/// Installment row validated from a [`PaymentRequest`]
struct PaymentParams {
    date: chrono::NaiveDate,
    amount: f64,
    status: PaymentStatus,
}

pub struct MonthlyPaymentService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MonthlyPaymentService<'a> {
    /// Creates a new instance of [`MonthlyPaymentService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a plan together with its card, link, installments and items
    ///
    /// # Returns
    /// - `Ok(MonthlyPaymentDetailDto)` - The committed plan with everything attached to it
    /// - `Err(Error::ValidationError)` - Invalid plan, card, item or installment fields
    /// - `Err(Error::RecordError::NotFound)` - Customer does not exist
    /// - `Err(Error::RecordError::Duplicate)` - Card token already stored
    /// - `Err(Error::DbErr)` - Database operation failed, nothing was written
    pub async fn create(
        &self,
        request: CreateMonthlyPaymentRequest,
    ) -> Result<MonthlyPaymentDetailDto, Error> {
        validate::check(&request.fields)?;
        let items = validate_items(request.items)?;
        let payments = validate_payments(request.payments)?;
        let amount = match (request.fields.amount, items.is_empty()) {
            (Some(amount), _) => amount,
            (None, false) => 0.0,
            (None, true) => {
                return Err(ValidationError::invalid(
                    "amount",
                    "is required when no items are given",
                )
                .into())
            }
        };
        let credit_details = validate_credit_details(request.credit_details, &request.fields)?;
        let item_totals: Vec<_> = items
            .iter()
            .map(|item| (item.total, item.payment_type))
            .collect();
        let params = plan_params(request.fields, item_totals, amount)?;

        let txn = self.db.begin().await?;

        ensure_customer(&txn, params.customer_id).await?;

        let customer_id = params.customer_id;
        let monthly_payment = MonthlyPaymentRepository::new(&txn).create(params).await?;

        let credit_repo = CreditDetailsRepository::new(&txn);
        if credit_repo
            .find_by_token(&credit_details.token)
            .await?
            .is_some()
        {
            return Err(RecordError::duplicate(CREDIT_DETAILS, "token").into());
        }
        let card = credit_repo.create(customer_id, credit_details).await?;
        PaymentCreditLinkRepository::new(&txn)
            .create(monthly_payment.id, card.id)
            .await?;

        insert_payments(&txn, monthly_payment.id, payments).await?;
        insert_items(&txn, monthly_payment.id, items).await?;

        let detail = load_detail(&txn, monthly_payment).await?;
        txn.commit().await?;

        tracing::info!(
            monthly_payment_id = detail.monthly_payment.id,
            customer_id,
            credit_details_id = card.id,
            "Created monthly payment"
        );

        Ok(detail)
    }

    /// Updates a plan and, when supplied, its card, items and pending installments
    ///
    /// Omitted collections are left untouched. A card whose token matches the linked card is
    /// kept; another token replaces the link and deactivates the previous card. Supplied
    /// installments replace only the `pending` ones so charge history is preserved.
    pub async fn update(
        &self,
        monthly_payment_id: i32,
        request: UpdateMonthlyPaymentRequest,
    ) -> Result<MonthlyPaymentDetailDto, Error> {
        validate::check(&request.fields)?;
        let items = request.items.map(validate_items).transpose()?;
        let payments = request.payments.map(validate_payments).transpose()?;
        let amount = request.fields.amount;
        let credit_details = request
            .credit_details
            .map(|credit| validate_credit_details(credit, &request.fields))
            .transpose()?;

        let txn = self.db.begin().await?;

        let repo = MonthlyPaymentRepository::new(&txn);
        let existing = repo
            .get(monthly_payment_id)
            .await?
            .ok_or(RecordError::not_found(MONTHLY_PAYMENT, monthly_payment_id))?;
        if existing.customer_id != request.fields.customer_id {
            ensure_customer(&txn, request.fields.customer_id).await?;
        }

        let item_repo = ItemRepository::new(&txn);
        let item_totals: Vec<_> = match &items {
            Some(items) => items
                .iter()
                .map(|item| (item.total, item.payment_type))
                .collect(),
            None => stored_item_totals(
                &item_repo
                    .list_by_monthly_payment(monthly_payment_id)
                    .await?,
            ),
        };
        let params = plan_params(
            request.fields,
            item_totals,
            amount.unwrap_or(existing.amount),
        )?;
        let customer_id = params.customer_id;

        let monthly_payment = repo
            .update(monthly_payment_id, params)
            .await?
            .ok_or(RecordError::not_found(MONTHLY_PAYMENT, monthly_payment_id))?;

        if let Some(credit_details) = credit_details {
            replace_credit_details(&txn, monthly_payment_id, customer_id, credit_details).await?;
        }
        if let Some(items) = items {
            item_repo.delete_by_monthly_payment(monthly_payment_id).await?;
            insert_items(&txn, monthly_payment_id, items).await?;
        }
        if let Some(payments) = payments {
            PaymentsRepository::new(&txn)
                .delete_pending(monthly_payment_id)
                .await?;
            insert_payments(&txn, monthly_payment_id, payments).await?;
        }

        let detail = load_detail(&txn, monthly_payment).await?;
        txn.commit().await?;

        tracing::info!(monthly_payment_id, customer_id, "Updated monthly payment");

        Ok(detail)
    }

    pub async fn get(&self, monthly_payment_id: i32) -> Result<MonthlyPaymentDetailDto, Error> {
        let monthly_payment = MonthlyPaymentRepository::new(self.db)
            .get(monthly_payment_id)
            .await?
            .ok_or(RecordError::not_found(MONTHLY_PAYMENT, monthly_payment_id))?;

        load_detail(self.db, monthly_payment).await
    }

    /// Lists plans newest first, optionally only those of one customer
    pub async fn list(
        &self,
        query: MonthlyPaymentListQuery,
        page_size: u64,
    ) -> Result<PageDto<MonthlyPaymentDto>, Error> {
        let page = MonthlyPaymentRepository::new(self.db)
            .list(query.customer_id, query.page.unwrap_or(1), page_size)
            .await?;

        Ok(page.into_dto())
    }

    /// Marks a plan and its active card link inactive
    pub async fn deactivate(&self, monthly_payment_id: i32) -> Result<(), Error> {
        let txn = self.db.begin().await?;

        MonthlyPaymentRepository::new(&txn)
            .set_status(monthly_payment_id, RecordStatus::Inactive)
            .await?
            .ok_or(RecordError::not_found(MONTHLY_PAYMENT, monthly_payment_id))?;

        let link_repo = PaymentCreditLinkRepository::new(&txn);
        if let Some(link) = link_repo
            .find_active_by_monthly_payment(monthly_payment_id)
            .await?
        {
            link_repo.set_status(link, RecordStatus::Inactive).await?;
        }

        txn.commit().await?;

        tracing::info!(monthly_payment_id, "Deactivated monthly payment");

        Ok(())
    }
}

async fn ensure_customer(txn: &DatabaseTransaction, customer_id: i32) -> Result<(), Error> {
    if CustomerRepository::new(txn).get(customer_id).await?.is_none() {
        return Err(RecordError::not_found("Customer", customer_id).into());
    }

    Ok(())
}

/// Swaps the linked card for `credit_details` unless it carries the linked token
async fn replace_credit_details(
    txn: &DatabaseTransaction,
    monthly_payment_id: i32,
    customer_id: i32,
    credit_details: CreditDetailsRequest,
) -> Result<(), Error> {
    let link_repo = PaymentCreditLinkRepository::new(txn);
    let credit_repo = CreditDetailsRepository::new(txn);

    let current_link = link_repo
        .find_active_by_monthly_payment(monthly_payment_id)
        .await?;
    let current_card = match &current_link {
        Some(link) => credit_repo.get(link.credit_details_id).await?,
        None => None,
    };

    if let Some(card) = &current_card {
        if card.token == credit_details.token {
            return Ok(());
        }
    }

    if credit_repo
        .find_by_token(&credit_details.token)
        .await?
        .is_some()
    {
        return Err(RecordError::duplicate(CREDIT_DETAILS, "token").into());
    }

    let card = credit_repo.create(customer_id, credit_details).await?;

    if let Some(link) = current_link {
        link_repo.set_status(link, RecordStatus::Inactive).await?;
    }
    if let Some(previous) = current_card {
        credit_repo
            .set_status(previous.id, RecordStatus::Inactive)
            .await?;
    }
    link_repo.create(monthly_payment_id, card.id).await?;

    tracing::info!(
        monthly_payment_id,
        credit_details_id = card.id,
        "Replaced credit details of monthly payment"
    );

    Ok(())
}

async fn insert_items(
    txn: &DatabaseTransaction,
    monthly_payment_id: i32,
    items: Vec<ItemParams>,
) -> Result<(), Error> {
    let repo = ItemRepository::new(txn);
    for item in items {
        repo.create(monthly_payment_id, item).await?;
    }

    Ok(())
}

async fn insert_payments(
    txn: &DatabaseTransaction,
    monthly_payment_id: i32,
    payments: Vec<PaymentParams>,
) -> Result<(), Error> {
    let repo = PaymentsRepository::new(txn);
    for payment in payments {
        repo.create(monthly_payment_id, payment.date, payment.amount, payment.status)
            .await?;
    }

    Ok(())
}

/// Derives dates and amounts from plan fields that already passed [`validate::check`]
///
/// `fallback_amount` is the per-charge amount used when the plan has no items.
fn plan_params(
    fields: MonthlyPaymentFields,
    item_totals: Vec<(f64, PaymentType)>,
    fallback_amount: f64,
) -> Result<MonthlyPaymentParams, ValidationError> {

    let end_date = time::plan_end_date(
        fields.start_date,
        fields.frequency as u32,
        fields.amount_of_charges as u32,
    )
    .ok_or_else(|| ValidationError::invalid("start_date", "is out of range"))?;
    let next_charge = time::first_charge_date(fields.start_date, fields.day_of_the_month as u32)
        .ok_or_else(|| ValidationError::invalid("start_date", "is out of range"))?;

    let totals = compute_totals(item_totals, fields.amount_of_charges, fallback_amount);

    Ok(MonthlyPaymentParams {
        customer_id: fields.customer_id,
        belongs_organization: validate::optional_text(fields.belongs_organization.as_deref()),
        start_date: fields.start_date,
        end_date,
        day_of_the_month: fields.day_of_the_month,
        frequency: fields.frequency,
        amount_of_charges: fields.amount_of_charges,
        amount: totals.amount,
        one_time_payment: totals.one_time_payment,
        total_amount: totals.total_amount,
        next_charge,
        notes: validate::optional_text(fields.notes.as_deref()),
    })
}

/// Validates the card reference; the card must not expire before the plan starts
fn validate_credit_details(
    request: CreditDetailsRequest,
    fields: &MonthlyPaymentFields,
) -> Result<CreditDetailsRequest, ValidationError> {
    let request = CreditDetailsRequest {
        token: validate::trimmed(&request.token),
        last_4_digits: validate::trimmed(&request.last_4_digits),
        ..request
    };
    validate::check(&request)?;

    let start = (fields.start_date.year(), fields.start_date.month() as i32);
    if (request.expiry_year, request.expiry_month) < start {
        return Err(ValidationError::invalid(
            "expiry_year",
            "card expires before the start date",
        ));
    }

    Ok(request)
}

fn validate_items(items: Vec<ItemRequest>) -> Result<Vec<ItemParams>, ValidationError> {
    items.into_iter().map(item_params).collect()
}

fn validate_payments(payments: Vec<PaymentRequest>) -> Result<Vec<PaymentParams>, ValidationError> {
    payments
        .into_iter()
        .map(|payment| {
            validate::check(&payment)?;
            let status = match payment.status.as_deref() {
                Some(status) => validate::parse_kind("payments.status", status)?,
                None => PaymentStatus::Pending,
            };

            Ok(PaymentParams {
                date: payment.date,
                amount: round_money(payment.amount),
                status,
            })
        })
        .collect()
}
