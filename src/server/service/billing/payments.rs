//! Installments of a monthly payment.

use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    model::{
        billing::{PaymentDto, PaymentStatusRequest},
        status::PaymentStatus,
    },
    server::{
        data::billing::{monthly_payment::MonthlyPaymentRepository, payments::PaymentsRepository},
        error::{record::RecordError, Error},
        service::billing::MONTHLY_PAYMENT,
        util::{time::now, validate},
    },
};

pub struct PaymentsService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PaymentsService<'a> {
    /// Creates a new instance of [`PaymentsService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists the installments of a plan by date
    pub async fn list_by_monthly_payment(
        &self,
        monthly_payment_id: i32,
    ) -> Result<Vec<PaymentDto>, Error> {
        if MonthlyPaymentRepository::new(self.db)
            .get(monthly_payment_id)
            .await?
            .is_none()
        {
            return Err(RecordError::not_found(MONTHLY_PAYMENT, monthly_payment_id).into());
        }

        let payments = PaymentsRepository::new(self.db)
            .list_by_monthly_payment(monthly_payment_id)
            .await?;

        Ok(payments.into_iter().map(Into::into).collect())
    }

    /// Sets the status of one installment
    ///
    /// A `paid` installment stamps the plan's `last_succeeded`, a `failed` one its
    /// `last_attempt`. Both rows change in the same transaction.
    pub async fn update_status(
        &self,
        payment_id: i32,
        request: PaymentStatusRequest,
    ) -> Result<PaymentDto, Error> {
        let status: PaymentStatus = validate::parse_kind("status", &request.status)?;

        let txn = self.db.begin().await?;

        let payment = PaymentsRepository::new(&txn)
            .update_status(payment_id, status)
            .await?
            .ok_or(RecordError::not_found("Payment", payment_id))?;

        let succeeded = match status {
            PaymentStatus::Paid => Some(true),
            PaymentStatus::Failed => Some(false),
            PaymentStatus::Pending => None,
        };
        if let Some(succeeded) = succeeded {
            MonthlyPaymentRepository::new(&txn)
                .record_charge(payment.monthly_payment_id, succeeded, now())
                .await?
                .ok_or(RecordError::not_found(
                    MONTHLY_PAYMENT,
                    payment.monthly_payment_id,
                ))?;
        }

        txn.commit().await?;

        tracing::info!(
            payment_id,
            monthly_payment_id = payment.monthly_payment_id,
            status = %status,
            "Updated payment status"
        );

        Ok(payment.into())
    }
}
