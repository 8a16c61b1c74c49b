use yaazoru::{
    model::{
        api::PageDto,
        comment::{CommentDto, CommentQuery, CreateCommentRequest, UpdateCommentRequest},
    },
    server::controller::comment::{create_comment, delete_comment, list_comments, update_comment},
};

use super::*;

fn query(entity_type: &str, entity_id: i32) -> CommentQuery {
    CommentQuery {
        entity_type: entity_type.to_string(),
        entity_id,
        page: None,
    }
}

/// Expect 201 for a comment on an existing customer
#[tokio::test]
async fn create_returns_created_comment() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_all_tables()
        .with_mock_customer(1)
        .build()
        .await?;
    let request = CreateCommentRequest {
        entity_type: "customer".to_string(),
        entity_id: 1,
        content: "  Asked to move the charge date  ".to_string(),
    };

    let result = create_comment(State(test.into_app_state()), Ok(Json(request))).await;

    let resp = into_response(result);
    assert_eq!(resp.status(), StatusCode::CREATED);
    let comment: CommentDto = json_body(resp).await;
    assert_eq!(comment.content, "Asked to move the charge date");

    Ok(())
}

/// Expect 404 when the commented device does not exist
#[tokio::test]
async fn create_rejects_missing_entity() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;
    let request = CreateCommentRequest {
        entity_type: "device".to_string(),
        entity_id: 3,
        content: "Screen cracked".to_string(),
    };

    let result = create_comment(State(test.into_app_state()), Ok(Json(request))).await;

    assert_eq!(into_response(result).status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Expect 400 for an unknown entity type
#[tokio::test]
async fn list_rejects_unknown_entity_type() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;

    let result = list_comments(State(test.into_app_state()), Ok(Query(query("invoice", 1)))).await;

    assert_eq!(into_response(result).status(), StatusCode::BAD_REQUEST);

    Ok(())
}

/// Expect only the comments of the requested entity, newest first
#[tokio::test]
async fn list_returns_entity_comments() -> Result<(), TestError> {
    let mut test = TestBuilder::new()
        .with_all_tables()
        .with_mock_customer(1)
        .with_mock_customer(2)
        .build()
        .await?;
    test.comment().insert_comment("customer", 1, "older", 30).await?;
    test.comment().insert_comment("customer", 1, "newer", 5).await?;
    test.comment().insert_comment("customer", 2, "other", 1).await?;

    let result =
        list_comments(State(test.into_app_state()), Ok(Query(query("customer", 1)))).await;

    let page: PageDto<CommentDto> = json_body(into_response(result)).await;
    let contents: Vec<&str> = page.data.iter().map(|c| c.content.as_str()).collect();
    assert_eq!(contents, vec!["newer", "older"]);

    Ok(())
}

/// Expect 400 for blank content on update
#[tokio::test]
async fn update_rejects_blank_content() -> Result<(), TestError> {
    let mut test = TestBuilder::new()
        .with_all_tables()
        .with_mock_customer(1)
        .build()
        .await?;
    let comment = test.comment().insert_comment("customer", 1, "note", 0).await?;

    let result = update_comment(
        State(test.into_app_state()),
        Ok(Path(comment.id)),
        Ok(Json(UpdateCommentRequest {
            content: "   ".to_string(),
        })),
    )
    .await;

    assert_eq!(into_response(result).status(), StatusCode::BAD_REQUEST);

    Ok(())
}

/// Expect 204 on delete and 404 on the second attempt
#[tokio::test]
async fn delete_removes_comment() -> Result<(), TestError> {
    let mut test = TestBuilder::new()
        .with_all_tables()
        .with_mock_customer(1)
        .build()
        .await?;
    let comment = test.comment().insert_comment("customer", 1, "note", 0).await?;

    let result = delete_comment(State(test.into_app_state()), Ok(Path(comment.id))).await;
    assert_eq!(into_response(result).status(), StatusCode::NO_CONTENT);

    let result = delete_comment(State(test.into_app_state()), Ok(Path(comment.id))).await;
    assert_eq!(into_response(result).status(), StatusCode::NOT_FOUND);

    Ok(())
}
