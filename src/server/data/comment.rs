use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult,
    EntityTrait, IntoActiveModel, QueryFilter, QueryOrder,
};

use crate::{
    model::status::CommentEntityType,
    server::{
        model::db::CommentModel,
        util::{
            pagination::{fetch_page, Page},
            time::now,
        },
    },
};

pub struct CommentRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CommentRepository<'a, C> {
    /// Creates a new instance of [`CommentRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        entity_type: CommentEntityType,
        entity_id: i32,
        content: String,
    ) -> Result<CommentModel, DbErr> {
        let now = now();

        entity::comment::ActiveModel {
            entity_type: ActiveValue::Set(entity_type.to_string()),
            entity_id: ActiveValue::Set(entity_id),
            content: ActiveValue::Set(content),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn get(&self, comment_id: i32) -> Result<Option<CommentModel>, DbErr> {
        entity::prelude::Comment::find_by_id(comment_id)
            .one(self.db)
            .await
    }

    /// Lists the comment thread of a record, newest first
    pub async fn list_by_entity(
        &self,
        entity_type: CommentEntityType,
        entity_id: i32,
        page: u64,
        page_size: u64,
    ) -> Result<Page<CommentModel>, DbErr> {
        let select = entity::prelude::Comment::find()
            .filter(entity::comment::Column::EntityType.eq(entity_type.as_str()))
            .filter(entity::comment::Column::EntityId.eq(entity_id))
            .order_by_desc(entity::comment::Column::CreatedAt)
            .order_by_desc(entity::comment::Column::Id);

        fetch_page(select, self.db, page, page_size).await
    }

    pub async fn update_content(
        &self,
        comment_id: i32,
        content: String,
    ) -> Result<Option<CommentModel>, DbErr> {
        let Some(comment) = self.get(comment_id).await? else {
            return Ok(None);
        };

        let mut comment_am = comment.into_active_model();
        comment_am.content = ActiveValue::Set(content);
        comment_am.updated_at = ActiveValue::Set(now());

        Ok(Some(comment_am.update(self.db).await?))
    }

    /// Deletes a comment
    ///
    /// Returns OK regardless of the comment existing, to confirm the deletion result
    /// check the [`DeleteResult::rows_affected`] field.
    pub async fn delete(&self, comment_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Comment::delete_by_id(comment_id)
            .exec(self.db)
            .await
    }
}
