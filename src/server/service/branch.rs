use sea_orm::DatabaseConnection;

use crate::{
    model::{
        api::PageDto,
        branch::{BranchDto, BranchRequest},
        status::RecordStatus,
    },
    server::{
        data::branch::BranchRepository,
        error::{record::RecordError, Error},
        util::validate,
    },
};

static ENTITY: &str = "Branch";

pub struct BranchService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BranchService<'a> {
    /// Creates a new instance of [`BranchService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, request: BranchRequest) -> Result<BranchDto, Error> {
        let branch = BranchRepository::new(self.db)
            .create(normalize(request)?)
            .await?;

        tracing::info!(branch_id = branch.id, "Created branch");

        Ok(branch.into())
    }

    pub async fn get(&self, branch_id: i32) -> Result<BranchDto, Error> {
        let branch = BranchRepository::new(self.db)
            .get(branch_id)
            .await?
            .ok_or(RecordError::not_found(ENTITY, branch_id))?;

        Ok(branch.into())
    }

    pub async fn list(&self, page: u64, page_size: u64) -> Result<PageDto<BranchDto>, Error> {
        let page = BranchRepository::new(self.db).list(page, page_size).await?;

        Ok(page.into_dto())
    }

    pub async fn update(&self, branch_id: i32, request: BranchRequest) -> Result<BranchDto, Error> {
        let branch = BranchRepository::new(self.db)
            .update(branch_id, normalize(request)?)
            .await?
            .ok_or(RecordError::not_found(ENTITY, branch_id))?;

        tracing::info!(branch_id, "Updated branch");

        Ok(branch.into())
    }

    pub async fn deactivate(&self, branch_id: i32) -> Result<(), Error> {
        BranchRepository::new(self.db)
            .set_status(branch_id, RecordStatus::Inactive)
            .await?
            .ok_or(RecordError::not_found(ENTITY, branch_id))?;

        tracing::info!(branch_id, "Deactivated branch");

        Ok(())
    }
}

fn normalize(request: BranchRequest) -> Result<BranchRequest, Error> {
    let request = BranchRequest {
        city: validate::trimmed(&request.city),
        address: validate::trimmed(&request.address),
        manager_name: validate::trimmed(&request.manager_name),
        phone_number: validate::normalize_phone_number(&request.phone_number),
    };
    validate::check(&request)?;

    Ok(request)
}
