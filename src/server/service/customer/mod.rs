//! Customer service layer.

#[cfg(test)]
mod tests;

use sea_orm::{ConnectionTrait, DatabaseConnection};

use crate::{
    model::{
        api::PageDto,
        customer::{CustomerDto, CustomerListQuery, CustomerRequest},
        status::RecordStatus,
    },
    server::{
        data::customer::{CustomerFilter, CustomerRepository},
        error::{record::RecordError, Error},
        util::validate,
    },
};

static ENTITY: &str = "Customer";

pub struct CustomerService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CustomerService<'a> {
    /// Creates a new instance of [`CustomerService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Validates and creates a customer
    ///
    /// # Returns
    /// - `Ok(CustomerDto)` - The created customer
    /// - `Err(Error::ValidationError)` - A field failed validation
    /// - `Err(Error::RecordError)` - E-mail or ID number already in use
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn create(&self, request: CustomerRequest) -> Result<CustomerDto, Error> {
        let request = normalize(request)?;
        ensure_unique(self.db, &request, None).await?;

        let customer = CustomerRepository::new(self.db).create(request).await?;

        tracing::info!(customer_id = customer.id, "Created customer");

        Ok(customer.into())
    }

    pub async fn get(&self, customer_id: i32) -> Result<CustomerDto, Error> {
        let customer = CustomerRepository::new(self.db)
            .get(customer_id)
            .await?
            .ok_or(RecordError::not_found(ENTITY, customer_id))?;

        Ok(customer.into())
    }

    /// Lists customers matching the optional `search` term and `status`, newest first
    pub async fn list(
        &self,
        query: CustomerListQuery,
        page_size: u64,
    ) -> Result<PageDto<CustomerDto>, Error> {
        let status = query
            .status
            .as_deref()
            .map(|status| validate::parse_kind::<RecordStatus>("status", status))
            .transpose()?;
        let filter = CustomerFilter {
            search: validate::optional_text(query.search.as_deref()),
            status,
        };

        let page = CustomerRepository::new(self.db)
            .list(filter, query.page.unwrap_or(1), page_size)
            .await?;

        Ok(page.into_dto())
    }

    pub async fn update(
        &self,
        customer_id: i32,
        request: CustomerRequest,
    ) -> Result<CustomerDto, Error> {
        let request = normalize(request)?;
        let repo = CustomerRepository::new(self.db);

        if repo.get(customer_id).await?.is_none() {
            return Err(RecordError::not_found(ENTITY, customer_id).into());
        }
        ensure_unique(self.db, &request, Some(customer_id)).await?;

        let customer = repo
            .update(customer_id, request)
            .await?
            .ok_or(RecordError::not_found(ENTITY, customer_id))?;

        tracing::info!(customer_id = customer.id, "Updated customer");

        Ok(customer.into())
    }

    /// Soft deletes a customer by marking it inactive
    pub async fn deactivate(&self, customer_id: i32) -> Result<(), Error> {
        CustomerRepository::new(self.db)
            .set_status(customer_id, RecordStatus::Inactive)
            .await?
            .ok_or(RecordError::not_found(ENTITY, customer_id))?;

        tracing::info!(customer_id, "Deactivated customer");

        Ok(())
    }
}

/// Validates every field of a customer payload, returning the normalized values
///
/// Shared with the Excel import so imported rows follow the same rules.
pub fn normalize(request: CustomerRequest) -> Result<CustomerRequest, Error> {
    let request = CustomerRequest {
        first_name: validate::trimmed(&request.first_name),
        last_name: validate::trimmed(&request.last_name),
        id_number: validate::normalize_id_number(&request.id_number),
        email: validate::normalize_email(&request.email),
        phone_number: validate::normalize_phone_number(&request.phone_number),
        additional_phone: validate::optional_text(request.additional_phone.as_deref())
            .map(|phone| validate::normalize_phone_number(&phone)),
        address: validate::trimmed(&request.address),
        city: validate::trimmed(&request.city),
    };
    validate::check(&request)?;

    Ok(request)
}

/// Checks that no other customer holds the e-mail or ID number of `request`
pub async fn ensure_unique<C: ConnectionTrait>(
    db: &C,
    request: &CustomerRequest,
    customer_id: Option<i32>,
) -> Result<(), Error> {
    let repo = CustomerRepository::new(db);
    let is_other = |id: i32| Some(id) != customer_id;

    if let Some(existing) = repo.find_by_email(&request.email).await? {
        if is_other(existing.id) {
            return Err(RecordError::duplicate(ENTITY, "email").into());
        }
    }
    if let Some(existing) = repo.find_by_id_number(&request.id_number).await? {
        if is_other(existing.id) {
            return Err(RecordError::duplicate(ENTITY, "id_number").into());
        }
    }

    Ok(())
}
