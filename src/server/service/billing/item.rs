//! Line items of a monthly payment.
//!
//! Every change recomputes the plan's amounts in the same transaction.

use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    model::billing::{ItemDto, ItemRequest},
    server::{
        data::billing::{item::ItemRepository, monthly_payment::MonthlyPaymentRepository},
        error::{record::RecordError, Error},
        service::billing::{item_params, recompute_totals, MONTHLY_PAYMENT},
    },
};

static ENTITY: &str = "Item";

pub struct ItemService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ItemService<'a> {
    /// Creates a new instance of [`ItemService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn list_by_monthly_payment(
        &self,
        monthly_payment_id: i32,
    ) -> Result<Vec<ItemDto>, Error> {
        if MonthlyPaymentRepository::new(self.db)
            .get(monthly_payment_id)
            .await?
            .is_none()
        {
            return Err(RecordError::not_found(MONTHLY_PAYMENT, monthly_payment_id).into());
        }

        let items = ItemRepository::new(self.db)
            .list_by_monthly_payment(monthly_payment_id)
            .await?;

        Ok(items.into_iter().map(Into::into).collect())
    }

    pub async fn create(
        &self,
        monthly_payment_id: i32,
        request: ItemRequest,
    ) -> Result<ItemDto, Error> {
        let params = item_params(request)?;

        let txn = self.db.begin().await?;

        let monthly_payment = MonthlyPaymentRepository::new(&txn)
            .get(monthly_payment_id)
            .await?
            .ok_or(RecordError::not_found(MONTHLY_PAYMENT, monthly_payment_id))?;
        let item = ItemRepository::new(&txn)
            .create(monthly_payment_id, params)
            .await?;
        recompute_totals(&txn, &monthly_payment).await?;

        txn.commit().await?;

        tracing::info!(item_id = item.id, monthly_payment_id, "Created item");

        Ok(item.into())
    }

    pub async fn update(&self, item_id: i32, request: ItemRequest) -> Result<ItemDto, Error> {
        let params = item_params(request)?;

        let txn = self.db.begin().await?;

        let item = ItemRepository::new(&txn)
            .update(item_id, params)
            .await?
            .ok_or(RecordError::not_found(ENTITY, item_id))?;
        let monthly_payment = MonthlyPaymentRepository::new(&txn)
            .get(item.monthly_payment_id)
            .await?
            .ok_or(RecordError::not_found(MONTHLY_PAYMENT, item.monthly_payment_id))?;
        recompute_totals(&txn, &monthly_payment).await?;

        txn.commit().await?;

        tracing::info!(item_id, "Updated item");

        Ok(item.into())
    }

    pub async fn delete(&self, item_id: i32) -> Result<(), Error> {
        let txn = self.db.begin().await?;

        let repo = ItemRepository::new(&txn);
        let item = repo
            .get(item_id)
            .await?
            .ok_or(RecordError::not_found(ENTITY, item_id))?;
        repo.delete(item_id).await?;

        let monthly_payment = MonthlyPaymentRepository::new(&txn)
            .get(item.monthly_payment_id)
            .await?
            .ok_or(RecordError::not_found(MONTHLY_PAYMENT, item.monthly_payment_id))?;
        recompute_totals(&txn, &monthly_payment).await?;

        txn.commit().await?;

        tracing::info!(item_id, monthly_payment_id = item.monthly_payment_id, "Deleted item");

        Ok(())
    }
}
