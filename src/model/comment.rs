use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq)]
pub struct CommentDto {
    pub id: i32,
    pub entity_type: String,
    pub entity_id: i32,
    pub content: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Serialize, Deserialize, ToSchema, Validate, Debug, Clone)]
pub struct CreateCommentRequest {
    /// One of `customer`, `device`, `sim_card`, `monthly_payment`, `branch`, `user`
    pub entity_type: String,
    pub entity_id: i32,
    #[validate(length(min = 1, max = 2000))]
    pub content: String,
}

#[derive(Serialize, Deserialize, ToSchema, Validate, Debug, Clone)]
pub struct UpdateCommentRequest {
    #[validate(length(min = 1, max = 2000))]
    pub content: String,
}

#[derive(Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct CommentQuery {
    pub entity_type: String,
    pub entity_id: i32,
    pub page: Option<u64>,
}

impl From<entity::comment::Model> for CommentDto {
    fn from(model: entity::comment::Model) -> Self {
        Self {
            id: model.id,
            entity_type: model.entity_type,
            entity_id: model.entity_id,
            content: model.content,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
