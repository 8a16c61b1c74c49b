use chrono::{Duration, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue};

use crate::{error::TestError, model::CommentModel, TestContext};

impl TestContext {
    pub fn comment<'a>(&'a mut self) -> CommentFixtures<'a> {
        CommentFixtures { setup: self }
    }
}

pub struct CommentFixtures<'a> {
    setup: &'a mut TestContext,
}

impl<'a> CommentFixtures<'a> {
    /// Insert a comment created `minutes_ago` minutes before now, for ordering tests.
    pub async fn insert_comment(
        &self,
        entity_type: &str,
        entity_id: i32,
        content: &str,
        minutes_ago: i64,
    ) -> Result<CommentModel, TestError> {
        let created_at = Utc::now().naive_utc() - Duration::minutes(minutes_ago);

        Ok(entity::comment::ActiveModel {
            entity_type: ActiveValue::Set(entity_type.to_string()),
            entity_id: ActiveValue::Set(entity_id),
            content: ActiveValue::Set(content.to_string()),
            created_at: ActiveValue::Set(created_at),
            updated_at: ActiveValue::Set(created_at),
            ..Default::default()
        }
        .insert(&self.setup.db)
        .await?)
    }
}
