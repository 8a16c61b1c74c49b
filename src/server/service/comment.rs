//! Free-text comment threads attached to customers, devices, SIM cards, monthly payments,
//! branches and users.

use sea_orm::DatabaseConnection;

use crate::{
    model::{
        api::PageDto,
        comment::{CommentDto, CommentQuery, CreateCommentRequest, UpdateCommentRequest},
        status::CommentEntityType,
    },
    server::{
        data::{
            billing::monthly_payment::MonthlyPaymentRepository, branch::BranchRepository,
            comment::CommentRepository, customer::CustomerRepository, device::DeviceRepository,
            sim_card::SimCardRepository, user::UserRepository,
        },
        error::{record::RecordError, Error},
        util::validate,
    },
};

/// Longest comment accepted, in characters; mirrored by the payload's length rule
pub const MAX_COMMENT_LENGTH: usize = 2000;

static ENTITY: &str = "Comment";

pub struct CommentService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CommentService<'a> {
    /// Creates a new instance of [`CommentService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Adds a comment to an existing record
    ///
    /// # Returns
    /// - `Ok(CommentDto)` - The stored comment
    /// - `Err(Error::ValidationError)` - Unknown entity type, or blank or over-long content
    /// - `Err(Error::RecordError)` - The commented record does not exist
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn create(&self, request: CreateCommentRequest) -> Result<CommentDto, Error> {
        let request = CreateCommentRequest {
            content: validate::trimmed(&request.content),
            ..request
        };
        validate::check(&request)?;
        let entity_type: CommentEntityType =
            validate::parse_kind("entity_type", &request.entity_type)?;
        self.ensure_entity(entity_type, request.entity_id).await?;

        let comment = CommentRepository::new(self.db)
            .create(entity_type, request.entity_id, request.content)
            .await?;

        tracing::info!(
            comment_id = comment.id,
            entity_type = %entity_type,
            entity_id = request.entity_id,
            "Created comment"
        );

        Ok(comment.into())
    }

    /// Lists the thread of a record, newest first
    pub async fn list(
        &self,
        query: CommentQuery,
        page_size: u64,
    ) -> Result<PageDto<CommentDto>, Error> {
        let entity_type: CommentEntityType =
            validate::parse_kind("entity_type", &query.entity_type)?;

        let page = CommentRepository::new(self.db)
            .list_by_entity(
                entity_type,
                query.entity_id,
                query.page.unwrap_or(1),
                page_size,
            )
            .await?;

        Ok(page.into_dto())
    }

    pub async fn update(
        &self,
        comment_id: i32,
        request: UpdateCommentRequest,
    ) -> Result<CommentDto, Error> {
        let request = UpdateCommentRequest {
            content: validate::trimmed(&request.content),
        };
        validate::check(&request)?;

        let comment = CommentRepository::new(self.db)
            .update_content(comment_id, request.content)
            .await?
            .ok_or(RecordError::not_found(ENTITY, comment_id))?;

        tracing::info!(comment_id, "Updated comment");

        Ok(comment.into())
    }

    /// Permanently deletes a comment
    pub async fn delete(&self, comment_id: i32) -> Result<(), Error> {
        let result = CommentRepository::new(self.db).delete(comment_id).await?;
        if result.rows_affected == 0 {
            return Err(RecordError::not_found(ENTITY, comment_id).into());
        }

        tracing::info!(comment_id, "Deleted comment");

        Ok(())
    }

    async fn ensure_entity(&self, entity_type: CommentEntityType, entity_id: i32) -> Result<(), Error> {
        let (entity, exists) = match entity_type {
            CommentEntityType::Customer => (
                "Customer",
                CustomerRepository::new(self.db).get(entity_id).await?.is_some(),
            ),
            CommentEntityType::Device => (
                "Device",
                DeviceRepository::new(self.db).get(entity_id).await?.is_some(),
            ),
            CommentEntityType::SimCard => (
                "SIM card",
                SimCardRepository::new(self.db).get(entity_id).await?.is_some(),
            ),
            CommentEntityType::MonthlyPayment => (
                "Monthly payment",
                MonthlyPaymentRepository::new(self.db)
                    .get(entity_id)
                    .await?
                    .is_some(),
            ),
            CommentEntityType::Branch => (
                "Branch",
                BranchRepository::new(self.db).get(entity_id).await?.is_some(),
            ),
            CommentEntityType::User => (
                "User",
                UserRepository::new(self.db).get(entity_id).await?.is_some(),
            ),
        };

        if !exists {
            return Err(RecordError::not_found(entity, entity_id).into());
        }

        Ok(())
    }
}
