use sea_orm::{ConnectionTrait, DatabaseConnection};

use crate::{
    model::{
        api::PageDto,
        device::{DeviceDto, DeviceListQuery, DeviceRequest},
        status::RecordStatus,
    },
    server::{
        data::device::{DeviceFilter, DeviceRepository},
        error::{record::RecordError, Error},
        util::validate,
    },
};

static ENTITY: &str = "Device";

pub struct DeviceService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DeviceService<'a> {
    /// Creates a new instance of [`DeviceService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, request: DeviceRequest) -> Result<DeviceDto, Error> {
        let request = normalize(request)?;
        ensure_unique(self.db, &request, None).await?;

        let device = DeviceRepository::new(self.db).create(request).await?;

        tracing::info!(device_id = device.id, "Created device");

        Ok(device.into())
    }

    pub async fn get(&self, device_id: i32) -> Result<DeviceDto, Error> {
        let device = DeviceRepository::new(self.db)
            .get(device_id)
            .await?
            .ok_or(RecordError::not_found(ENTITY, device_id))?;

        Ok(device.into())
    }

    pub async fn list(
        &self,
        query: DeviceListQuery,
        page_size: u64,
    ) -> Result<PageDto<DeviceDto>, Error> {
        let status = query
            .status
            .as_deref()
            .map(|status| validate::parse_kind::<RecordStatus>("status", status))
            .transpose()?;
        let filter = DeviceFilter {
            search: validate::optional_text(query.search.as_deref()),
            status,
        };

        let page = DeviceRepository::new(self.db)
            .list(filter, query.page.unwrap_or(1), page_size)
            .await?;

        Ok(page.into_dto())
    }

    pub async fn update(&self, device_id: i32, request: DeviceRequest) -> Result<DeviceDto, Error> {
        let request = normalize(request)?;
        let repo = DeviceRepository::new(self.db);

        if repo.get(device_id).await?.is_none() {
            return Err(RecordError::not_found(ENTITY, device_id).into());
        }
        ensure_unique(self.db, &request, Some(device_id)).await?;

        let device = repo
            .update(device_id, request)
            .await?
            .ok_or(RecordError::not_found(ENTITY, device_id))?;

        tracing::info!(device_id, "Updated device");

        Ok(device.into())
    }

    pub async fn deactivate(&self, device_id: i32) -> Result<(), Error> {
        DeviceRepository::new(self.db)
            .set_status(device_id, RecordStatus::Inactive)
            .await?
            .ok_or(RecordError::not_found(ENTITY, device_id))?;

        tracing::info!(device_id, "Deactivated device");

        Ok(())
    }
}

/// Validates a device payload; the IMEI must pass the Luhn check
pub fn normalize(request: DeviceRequest) -> Result<DeviceRequest, Error> {
    let request = DeviceRequest {
        device_number: validate::trimmed(&request.device_number),
        imei: validate::trimmed(&request.imei),
        model: validate::trimmed(&request.model),
        serial_number: validate::optional_text(request.serial_number.as_deref()),
        purchase_date: request.purchase_date,
        plan_type: validate::optional_text(request.plan_type.as_deref()),
    };
    validate::check(&request)?;

    Ok(request)
}

/// Checks that no other device holds the device number or IMEI of `request`
pub async fn ensure_unique<C: ConnectionTrait>(
    db: &C,
    request: &DeviceRequest,
    device_id: Option<i32>,
) -> Result<(), Error> {
    let repo = DeviceRepository::new(db);
    let is_other = |id: i32| Some(id) != device_id;

    if let Some(existing) = repo.find_by_device_number(&request.device_number).await? {
        if is_other(existing.id) {
            return Err(RecordError::duplicate(ENTITY, "device_number").into());
        }
    }
    if let Some(existing) = repo.find_by_imei(&request.imei).await? {
        if is_other(existing.id) {
            return Err(RecordError::duplicate(ENTITY, "imei").into());
        }
    }

    Ok(())
}
