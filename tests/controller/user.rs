use yaazoru::{
    model::{
        api::{PageDto, PageQuery},
        branch::{BranchDto, BranchRequest},
        user::{UserDto, UserRequest},
    },
    server::controller::{
        branch::{create_branch, delete_branch, get_branch, list_branches},
        user::{create_user, get_user, update_user},
    },
};

use super::*;

fn user_request(seed: u32, role: &str, branch_id: Option<i32>) -> UserRequest {
    UserRequest {
        first_name: "Yossi".to_string(),
        last_name: "Mizrahi".to_string(),
        id_number: factory::id_number(seed),
        email: factory::email("staff", seed),
        phone_number: factory::phone_number(seed),
        role: role.to_string(),
        branch_id,
    }
}

/// Expect 201 for a branch user of an existing branch
#[tokio::test]
async fn create_branch_user() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_all_tables()
        .with_mock_branch(1)
        .build()
        .await?;

    let result = create_user(
        State(test.into_app_state()),
        Ok(Json(user_request(1, "branch", Some(1)))),
    )
    .await;

    let resp = into_response(result);
    assert_eq!(resp.status(), StatusCode::CREATED);
    let user: UserDto = json_body(resp).await;
    assert_eq!(user.role, "branch");
    assert_eq!(user.branch_id, Some(1));

    Ok(())
}

/// Expect 400 for a branch user without a branch and for an unknown role
#[tokio::test]
async fn create_rejects_invalid_role() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;

    let result = create_user(
        State(test.into_app_state()),
        Ok(Json(user_request(1, "branch", None))),
    )
    .await;
    assert_eq!(into_response(result).status(), StatusCode::BAD_REQUEST);

    let result = create_user(
        State(test.into_app_state()),
        Ok(Json(user_request(1, "owner", None))),
    )
    .await;
    assert_eq!(into_response(result).status(), StatusCode::BAD_REQUEST);

    Ok(())
}

/// Expect 404 when the branch does not exist
#[tokio::test]
async fn create_rejects_missing_branch() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;

    let result = create_user(
        State(test.into_app_state()),
        Ok(Json(user_request(1, "branch", Some(3)))),
    )
    .await;

    assert_eq!(into_response(result).status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Expect 409 when another user has the e-mail
#[tokio::test]
async fn update_rejects_duplicate_email() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_all_tables().build().await?;
    test.inventory().insert_user(1, None).await?;
    let second = test.inventory().insert_user(2, None).await?;
    let mut request = user_request(2, "admin", None);
    request.email = factory::email("user", 1);

    let result =
        update_user(State(test.into_app_state()), Ok(Path(second.id)), Ok(Json(request))).await;

    assert_eq!(into_response(result).status(), StatusCode::CONFLICT);

    Ok(())
}

/// Expect 404 for a user that does not exist
#[tokio::test]
async fn get_returns_not_found() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;

    let result = get_user(State(test.into_app_state()), Ok(Path(7))).await;

    assert_eq!(into_response(result).status(), StatusCode::NOT_FOUND);

    Ok(())
}

mod branches {
    use super::*;

    fn branch_request() -> BranchRequest {
        BranchRequest {
            city: "Bnei Brak".to_string(),
            address: "5 Rabbi Akiva St".to_string(),
            manager_name: "Moshe Katz".to_string(),
            phone_number: factory::phone_number(9),
        }
    }

    /// Expect 201 with the created branch
    #[tokio::test]
    async fn create_returns_created_branch() -> Result<(), TestError> {
        let test = TestBuilder::new().with_all_tables().build().await?;

        let result = create_branch(State(test.into_app_state()), Ok(Json(branch_request()))).await;

        let resp = into_response(result);
        assert_eq!(resp.status(), StatusCode::CREATED);
        let branch: BranchDto = json_body(resp).await;
        assert_eq!(branch.city, "Bnei Brak");

        Ok(())
    }

    /// Expect 400 for a branch without a city
    #[tokio::test]
    async fn create_rejects_blank_city() -> Result<(), TestError> {
        let test = TestBuilder::new().with_all_tables().build().await?;
        let request = BranchRequest {
            city: "  ".to_string(),
            ..branch_request()
        };

        let result = create_branch(State(test.into_app_state()), Ok(Json(request))).await;

        assert_eq!(into_response(result).status(), StatusCode::BAD_REQUEST);

        Ok(())
    }

    /// Expect a deactivated branch to stay readable with status inactive
    #[tokio::test]
    async fn delete_deactivates_branch() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_all_tables()
            .with_mock_branch(1)
            .with_mock_branch(2)
            .build()
            .await?;

        let result = delete_branch(State(test.into_app_state()), Ok(Path(1))).await;
        assert_eq!(into_response(result).status(), StatusCode::NO_CONTENT);

        let result = get_branch(State(test.into_app_state()), Ok(Path(1))).await;
        let branch: BranchDto = json_body(into_response(result)).await;
        assert_eq!(branch.status, "inactive");

        let result =
            list_branches(State(test.into_app_state()), Ok(Query(PageQuery::default()))).await;
        let page: PageDto<BranchDto> = json_body(into_response(result)).await;
        assert_eq!(page.total_items, 2);

        Ok(())
    }
}
