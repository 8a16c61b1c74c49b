//! Back-office user management. Authentication is handled outside this service.

use sea_orm::DatabaseConnection;

use crate::{
    model::{
        api::PageDto,
        status::{RecordStatus, UserRole},
        user::{UserDto, UserRequest},
    },
    server::{
        data::{branch::BranchRepository, user::UserRepository},
        error::{record::RecordError, validation::ValidationError, Error},
        util::validate,
    },
};

static ENTITY: &str = "User";

pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    /// Creates a new instance of [`UserService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Validates and creates a user
    ///
    /// # Returns
    /// - `Ok(UserDto)` - The created user
    /// - `Err(Error::ValidationError)` - Invalid field, or a `branch` user without a branch
    /// - `Err(Error::RecordError)` - Branch not found, or e-mail / ID number in use
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn create(&self, request: UserRequest) -> Result<UserDto, Error> {
        let request = self.validate(request, None).await?;

        let user = UserRepository::new(self.db).create(request).await?;

        tracing::info!(user_id = user.id, role = %user.role, "Created user");

        Ok(user.into())
    }

    pub async fn get(&self, user_id: i32) -> Result<UserDto, Error> {
        let user = UserRepository::new(self.db)
            .get(user_id)
            .await?
            .ok_or(RecordError::not_found(ENTITY, user_id))?;

        Ok(user.into())
    }

    pub async fn list(&self, page: u64, page_size: u64) -> Result<PageDto<UserDto>, Error> {
        let page = UserRepository::new(self.db).list(page, page_size).await?;

        Ok(page.into_dto())
    }

    pub async fn update(&self, user_id: i32, request: UserRequest) -> Result<UserDto, Error> {
        let repo = UserRepository::new(self.db);
        if repo.get(user_id).await?.is_none() {
            return Err(RecordError::not_found(ENTITY, user_id).into());
        }

        let request = self.validate(request, Some(user_id)).await?;
        let user = repo
            .update(user_id, request)
            .await?
            .ok_or(RecordError::not_found(ENTITY, user_id))?;

        tracing::info!(user_id, "Updated user");

        Ok(user.into())
    }

    pub async fn deactivate(&self, user_id: i32) -> Result<(), Error> {
        UserRepository::new(self.db)
            .set_status(user_id, RecordStatus::Inactive)
            .await?
            .ok_or(RecordError::not_found(ENTITY, user_id))?;

        tracing::info!(user_id, "Deactivated user");

        Ok(())
    }

    /// Normalizes the payload, checks the branch reference and unique fields
    ///
    /// `user_id` is the user being updated, whose own e-mail and ID number are not conflicts.
    async fn validate(
        &self,
        request: UserRequest,
        user_id: Option<i32>,
    ) -> Result<UserRequest, Error> {
        let role: UserRole = validate::parse_kind("role", &request.role)?;
        if role == UserRole::Branch && request.branch_id.is_none() {
            return Err(ValidationError::invalid("branch_id", "is required for branch users").into());
        }

        let request = UserRequest {
            first_name: validate::trimmed(&request.first_name),
            last_name: validate::trimmed(&request.last_name),
            id_number: validate::normalize_id_number(&request.id_number),
            email: validate::normalize_email(&request.email),
            phone_number: validate::normalize_phone_number(&request.phone_number),
            role: role.to_string(),
            branch_id: request.branch_id,
        };
        validate::check(&request)?;

        if let Some(branch_id) = request.branch_id {
            if BranchRepository::new(self.db).get(branch_id).await?.is_none() {
                return Err(RecordError::not_found("Branch", branch_id).into());
            }
        }

        let repo = UserRepository::new(self.db);
        let is_other = |id: i32| Some(id) != user_id;

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

        Ok(request)
    }
}
