use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder,
};

use crate::{
    model::{status::RecordStatus, user::UserRequest},
    server::{
        model::db::UserModel,
        util::{
            pagination::{fetch_page, Page},
            time::now,
        },
    },
};

pub struct UserRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserRepository<'a, C> {
    /// Creates a new instance of [`UserRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new user
    pub async fn create(&self, request: UserRequest) -> Result<UserModel, DbErr> {
        let now = now();

        entity::user::ActiveModel {
            first_name: ActiveValue::Set(request.first_name),
            last_name: ActiveValue::Set(request.last_name),
            id_number: ActiveValue::Set(request.id_number),
            email: ActiveValue::Set(request.email),
            phone_number: ActiveValue::Set(request.phone_number),
            role: ActiveValue::Set(request.role),
            branch_id: ActiveValue::Set(request.branch_id),
            status: ActiveValue::Set(RecordStatus::Active.to_string()),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn get(&self, user_id: i32) -> Result<Option<UserModel>, DbErr> {
        entity::prelude::User::find_by_id(user_id).one(self.db).await
    }

    pub async fn find_by_email(&self, email: &str) -> Result<Option<UserModel>, DbErr> {
        entity::prelude::User::find()
            .filter(entity::user::Column::Email.eq(email))
            .one(self.db)
            .await
    }

    pub async fn find_by_id_number(&self, id_number: &str) -> Result<Option<UserModel>, DbErr> {
        entity::prelude::User::find()
            .filter(entity::user::Column::IdNumber.eq(id_number))
            .one(self.db)
            .await
    }

    pub async fn list(&self, page: u64, page_size: u64) -> Result<Page<UserModel>, DbErr> {
        let select = entity::prelude::User::find()
            .order_by_asc(entity::user::Column::LastName)
            .order_by_asc(entity::user::Column::Id);

        fetch_page(select, self.db, page, page_size).await
    }

    pub async fn update(
        &self,
        user_id: i32,
        request: UserRequest,
    ) -> Result<Option<UserModel>, DbErr> {
        let Some(user) = self.get(user_id).await? else {
            return Ok(None);
        };

        let mut user_am = user.into_active_model();
        user_am.first_name = ActiveValue::Set(request.first_name);
        user_am.last_name = ActiveValue::Set(request.last_name);
        user_am.id_number = ActiveValue::Set(request.id_number);
        user_am.email = ActiveValue::Set(request.email);
        user_am.phone_number = ActiveValue::Set(request.phone_number);
        user_am.role = ActiveValue::Set(request.role);
        user_am.branch_id = ActiveValue::Set(request.branch_id);
        user_am.updated_at = ActiveValue::Set(now());

        Ok(Some(user_am.update(self.db).await?))
    }

    pub async fn set_status(
        &self,
        user_id: i32,
        status: RecordStatus,
    ) -> Result<Option<UserModel>, DbErr> {
        let Some(user) = self.get(user_id).await? else {
            return Ok(None);
        };

        let mut user_am = user.into_active_model();
        user_am.status = ActiveValue::Set(status.to_string());
        user_am.updated_at = ActiveValue::Set(now());

        Ok(Some(user_am.update(self.db).await?))
    }
}

#[cfg(test)]
mod tests {

    mod get {
        use entity::prelude::*;
        use yaazoru_test_utils::prelude::*;

        use crate::server::data::user::UserRepository;

        /// Expect Ok(Some(_)) when existing user is found
        #[tokio::test]
        async fn finds_existing_user() -> Result<(), TestError> {
            let mut test = test_setup_with_tables!(Branch, User)?;
            let branch = test.inventory().insert_branch(1).await?;
            let user = test.inventory().insert_user(1, Some(branch.id)).await?;

            let user_repo = UserRepository::new(&test.db);
            let result = user_repo.get(user.id).await;

            assert!(matches!(result, Ok(Some(_))));

            Ok(())
        }

        /// Expect Ok(None) when user is not found
        #[tokio::test]
        async fn returns_none_for_nonexistent_user() -> Result<(), TestError> {
            let test = test_setup_with_tables!(Branch, User)?;

            let user_repo = UserRepository::new(&test.db);
            let result = user_repo.get(1).await;

            assert!(matches!(result, Ok(None)));

            Ok(())
        }

        /// Expect Error when required database tables are not present
        #[tokio::test]
        async fn fails_when_tables_missing() -> Result<(), TestError> {
            let test = test_setup_with_tables!()?;

            let user_repo = UserRepository::new(&test.db);
            let result = user_repo.get(1).await;

            assert!(result.is_err());

            Ok(())
        }
    }

    mod find {
        use entity::prelude::*;
        use yaazoru_test_utils::prelude::*;

        use crate::server::data::user::UserRepository;

        /// Expect lookups by email and ID number to find the same user
        #[tokio::test]
        async fn finds_by_unique_columns() -> Result<(), TestError> {
            let mut test = test_setup_with_tables!(Branch, User)?;
            let user = test.inventory().insert_user(1, None).await?;

            let user_repo = UserRepository::new(&test.db);

            assert_eq!(
                user_repo.find_by_email(&user.email).await?.map(|u| u.id),
                Some(user.id)
            );
            assert_eq!(
                user_repo
                    .find_by_id_number(&user.id_number)
                    .await?
                    .map(|u| u.id),
                Some(user.id)
            );

            Ok(())
        }
    }
}
