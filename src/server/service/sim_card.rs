use sea_orm::DatabaseConnection;

use crate::{
    model::{
        api::PageDto,
        sim_card::{SimCardDto, SimCardListQuery, SimCardRequest},
        status::RecordStatus,
    },
    server::{
        data::{
            customer::CustomerRepository, device::DeviceRepository, sim_card::SimCardRepository,
        },
        error::{record::RecordError, Error},
        util::validate,
    },
};

static ENTITY: &str = "SIM card";

pub struct SimCardService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SimCardService<'a> {
    /// Creates a new instance of [`SimCardService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Validates and creates a SIM card
    ///
    /// # Returns
    /// - `Ok(SimCardDto)` - The created SIM card
    /// - `Err(Error::ValidationError)` - SIM number is not an 18 to 22 digit ICCID
    /// - `Err(Error::RecordError)` - Referenced customer or device missing, or SIM number in use
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn create(&self, request: SimCardRequest) -> Result<SimCardDto, Error> {
        let request = self.validate(request, None).await?;

        let sim_card = SimCardRepository::new(self.db).create(request).await?;

        tracing::info!(sim_card_id = sim_card.id, "Created SIM card");

        Ok(sim_card.into())
    }

    pub async fn get(&self, sim_card_id: i32) -> Result<SimCardDto, Error> {
        let sim_card = SimCardRepository::new(self.db)
            .get(sim_card_id)
            .await?
            .ok_or(RecordError::not_found(ENTITY, sim_card_id))?;

        Ok(sim_card.into())
    }

    pub async fn list(
        &self,
        query: SimCardListQuery,
        page_size: u64,
    ) -> Result<PageDto<SimCardDto>, Error> {
        let status = query
            .status
            .as_deref()
            .map(|status| validate::parse_kind::<RecordStatus>("status", status))
            .transpose()?;

        let page = SimCardRepository::new(self.db)
            .list(
                validate::optional_text(query.search.as_deref()),
                status,
                query.page.unwrap_or(1),
                page_size,
            )
            .await?;

        Ok(page.into_dto())
    }

    pub async fn update(
        &self,
        sim_card_id: i32,
        request: SimCardRequest,
    ) -> Result<SimCardDto, Error> {
        let repo = SimCardRepository::new(self.db);
        if repo.get(sim_card_id).await?.is_none() {
            return Err(RecordError::not_found(ENTITY, sim_card_id).into());
        }

        let request = self.validate(request, Some(sim_card_id)).await?;
        let sim_card = repo
            .update(sim_card_id, request)
            .await?
            .ok_or(RecordError::not_found(ENTITY, sim_card_id))?;

        tracing::info!(sim_card_id, "Updated SIM card");

        Ok(sim_card.into())
    }

    pub async fn deactivate(&self, sim_card_id: i32) -> Result<(), Error> {
        SimCardRepository::new(self.db)
            .set_status(sim_card_id, RecordStatus::Inactive)
            .await?
            .ok_or(RecordError::not_found(ENTITY, sim_card_id))?;

        tracing::info!(sim_card_id, "Deactivated SIM card");

        Ok(())
    }

    async fn validate(
        &self,
        request: SimCardRequest,
        sim_card_id: Option<i32>,
    ) -> Result<SimCardRequest, Error> {
        let request = SimCardRequest {
            sim_number: validate::trimmed(&request.sim_number),
            ..request
        };
        validate::check(&request)?;

        if let Some(customer_id) = request.customer_id {
            if CustomerRepository::new(self.db).get(customer_id).await?.is_none() {
                return Err(RecordError::not_found("Customer", customer_id).into());
            }
        }
        if let Some(device_id) = request.device_id {
            if DeviceRepository::new(self.db).get(device_id).await?.is_none() {
                return Err(RecordError::not_found("Device", device_id).into());
            }
        }

        if let Some(existing) = SimCardRepository::new(self.db)
            .find_by_sim_number(&request.sim_number)
            .await?
        {
            if Some(existing.id) != sim_card_id {
                return Err(RecordError::duplicate(ENTITY, "sim_number").into());
            }
        }

        Ok(request)
    }
}
