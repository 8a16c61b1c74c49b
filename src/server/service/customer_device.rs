//! Assignment of devices to customers.
//!
//! A device has at most one active assignment; unassigning keeps the row as history.

use sea_orm::DatabaseConnection;

use crate::{
    model::{
        api::PageDto,
        customer_device::{AssignDeviceRequest, CustomerDeviceDto},
        status::RecordStatus,
    },
    server::{
        data::{
            customer::CustomerRepository, customer_device::CustomerDeviceRepository,
            device::DeviceRepository,
        },
        error::{record::RecordError, validation::ValidationError, Error},
    },
};

pub struct CustomerDeviceService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CustomerDeviceService<'a> {
    /// Creates a new instance of [`CustomerDeviceService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Assigns a device to a customer
    ///
    /// # Returns
    /// - `Ok(CustomerDeviceDto)` - The new active assignment
    /// - `Err(Error::ValidationError)` - Plan end date before the received date
    /// - `Err(Error::RecordError::NotFound)` - Customer or device missing
    /// - `Err(Error::RecordError::DeviceAlreadyAssigned)` - Device has an active assignment
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn assign(
        &self,
        customer_id: i32,
        request: AssignDeviceRequest,
    ) -> Result<CustomerDeviceDto, Error> {
        if let Some(plan_end_date) = request.plan_end_date {
            if plan_end_date < request.received_at {
                return Err(ValidationError::invalid(
                    "plan_end_date",
                    "must not be before received_at",
                )
                .into());
            }
        }

        if CustomerRepository::new(self.db)
            .get(customer_id)
            .await?
            .is_none()
        {
            return Err(RecordError::not_found("Customer", customer_id).into());
        }
        if DeviceRepository::new(self.db)
            .get(request.device_id)
            .await?
            .is_none()
        {
            return Err(RecordError::not_found("Device", request.device_id).into());
        }

        let repo = CustomerDeviceRepository::new(self.db);
        if let Some(active) = repo.find_active_by_device(request.device_id).await? {
            return Err(RecordError::DeviceAlreadyAssigned {
                device_id: active.device_id,
                customer_id: active.customer_id,
            }
            .into());
        }

        let assignment = repo.create(customer_id, request).await?;

        tracing::info!(
            assignment_id = assignment.id,
            customer_id,
            device_id = assignment.device_id,
            "Assigned device to customer"
        );

        Ok(assignment.into())
    }

    /// Lists every assignment of a customer including inactive history
    pub async fn list_by_customer(
        &self,
        customer_id: i32,
        page: u64,
        page_size: u64,
    ) -> Result<PageDto<CustomerDeviceDto>, Error> {
        if CustomerRepository::new(self.db)
            .get(customer_id)
            .await?
            .is_none()
        {
            return Err(RecordError::not_found("Customer", customer_id).into());
        }

        let page = CustomerDeviceRepository::new(self.db)
            .list_by_customer(customer_id, page, page_size)
            .await?;

        Ok(page.into_dto())
    }

    pub async fn unassign(&self, assignment_id: i32) -> Result<(), Error> {
        CustomerDeviceRepository::new(self.db)
            .set_status(assignment_id, RecordStatus::Inactive)
            .await?
            .ok_or(RecordError::not_found("Device assignment", assignment_id))?;

        tracing::info!(assignment_id, "Unassigned device");

        Ok(())
    }
}
