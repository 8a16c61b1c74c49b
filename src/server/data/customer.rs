use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, ConnectionTrait, DbErr, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder,
};

use crate::{
    model::{customer::CustomerRequest, status::RecordStatus},
    server::{
        model::db::CustomerModel,
        util::{
            pagination::{fetch_page, Page},
            time::now,
        },
    },
};

/// Filters applied by [`CustomerRepository::list`]
#[derive(Default, Debug, Clone)]
pub struct CustomerFilter {
    /// Substring matched against name, email, phone number and ID number
    pub search: Option<String>,
    pub status: Option<RecordStatus>,
}

pub struct CustomerRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CustomerRepository<'a, C> {
    /// Creates a new instance of [`CustomerRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new active customer
    pub async fn create(&self, request: CustomerRequest) -> Result<CustomerModel, DbErr> {
        let now = now();

        entity::customer::ActiveModel {
            first_name: ActiveValue::Set(request.first_name),
            last_name: ActiveValue::Set(request.last_name),
            id_number: ActiveValue::Set(request.id_number),
            email: ActiveValue::Set(request.email),
            phone_number: ActiveValue::Set(request.phone_number),
            additional_phone: ActiveValue::Set(request.additional_phone),
            address: ActiveValue::Set(request.address),
            city: ActiveValue::Set(request.city),
            status: ActiveValue::Set(RecordStatus::Active.to_string()),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn get(&self, customer_id: i32) -> Result<Option<CustomerModel>, DbErr> {
        entity::prelude::Customer::find_by_id(customer_id)
            .one(self.db)
            .await
    }

    pub async fn find_by_email(&self, email: &str) -> Result<Option<CustomerModel>, DbErr> {
        entity::prelude::Customer::find()
            .filter(entity::customer::Column::Email.eq(email))
            .one(self.db)
            .await
    }

    pub async fn find_by_id_number(
        &self,
        id_number: &str,
    ) -> Result<Option<CustomerModel>, DbErr> {
        entity::prelude::Customer::find()
            .filter(entity::customer::Column::IdNumber.eq(id_number))
            .one(self.db)
            .await
    }

    /// Lists customers matching `filter`, newest first
    pub async fn list(
        &self,
        filter: CustomerFilter,
        page: u64,
        page_size: u64,
    ) -> Result<Page<CustomerModel>, DbErr> {
        let mut condition = Condition::all();

        if let Some(search) = filter.search {
            condition = condition.add(
                Condition::any()
                    .add(entity::customer::Column::FirstName.contains(&search))
                    .add(entity::customer::Column::LastName.contains(&search))
                    .add(entity::customer::Column::Email.contains(&search))
                    .add(entity::customer::Column::PhoneNumber.contains(&search))
                    .add(entity::customer::Column::IdNumber.contains(&search)),
            );
        }
        if let Some(status) = filter.status {
            condition = condition.add(entity::customer::Column::Status.eq(status.as_str()));
        }

        let select = entity::prelude::Customer::find()
            .filter(condition)
            .order_by_desc(entity::customer::Column::CreatedAt)
            .order_by_desc(entity::customer::Column::Id);

        fetch_page(select, self.db, page, page_size).await
    }

    /// Replaces the editable fields of a customer, returns `None` if it does not exist
    pub async fn update(
        &self,
        customer_id: i32,
        request: CustomerRequest,
    ) -> Result<Option<CustomerModel>, DbErr> {
        let Some(customer) = self.get(customer_id).await? else {
            return Ok(None);
        };

        let mut customer_am = customer.into_active_model();
        customer_am.first_name = ActiveValue::Set(request.first_name);
        customer_am.last_name = ActiveValue::Set(request.last_name);
        customer_am.id_number = ActiveValue::Set(request.id_number);
        customer_am.email = ActiveValue::Set(request.email);
        customer_am.phone_number = ActiveValue::Set(request.phone_number);
        customer_am.additional_phone = ActiveValue::Set(request.additional_phone);
        customer_am.address = ActiveValue::Set(request.address);
        customer_am.city = ActiveValue::Set(request.city);
        customer_am.updated_at = ActiveValue::Set(now());

        Ok(Some(customer_am.update(self.db).await?))
    }

    pub async fn set_status(
        &self,
        customer_id: i32,
        status: RecordStatus,
    ) -> Result<Option<CustomerModel>, DbErr> {
        let Some(customer) = self.get(customer_id).await? else {
            return Ok(None);
        };

        let mut customer_am = customer.into_active_model();
        customer_am.status = ActiveValue::Set(status.to_string());
        customer_am.updated_at = ActiveValue::Set(now());

        Ok(Some(customer_am.update(self.db).await?))
    }
}

#[cfg(test)]
mod tests {
    use entity::prelude::*;
    use yaazoru_test_utils::prelude::*;

    use crate::{
        model::{customer::CustomerRequest, status::RecordStatus},
        server::data::customer::{CustomerFilter, CustomerRepository},
    };

    fn request(seed: u32) -> CustomerRequest {
        CustomerRequest {
            first_name: "Dana".to_string(),
            last_name: "Cohen".to_string(),
            id_number: factory::id_number(seed),
            email: factory::email("dana", seed),
            phone_number: factory::phone_number(seed),
            additional_phone: None,
            address: "5 Jaffa Rd".to_string(),
            city: "Jerusalem".to_string(),
        }
    }

    mod create {
        use super::*;

        /// Expect an active customer to be created
        #[tokio::test]
        async fn creates_customer() -> Result<(), TestError> {
            let test = test_setup_with_tables!(Customer)?;

            let customer_repo = CustomerRepository::new(&test.db);
            let customer = customer_repo.create(request(1)).await?;

            assert_eq!(customer.status, "active");
            assert_eq!(customer.id_number, factory::id_number(1));

            Ok(())
        }

        /// Expect a unique constraint violation for a duplicate email
        #[tokio::test]
        async fn fails_for_duplicate_email() -> Result<(), TestError> {
            let test = test_setup_with_tables!(Customer)?;

            let customer_repo = CustomerRepository::new(&test.db);
            customer_repo.create(request(1)).await?;

            let mut duplicate = request(2);
            duplicate.email = factory::email("dana", 1);
            let result = customer_repo.create(duplicate).await;

            assert!(matches!(
                result.map_err(|e| e.sql_err()),
                Err(Some(sea_orm::SqlErr::UniqueConstraintViolation(_)))
            ));

            Ok(())
        }
    }

    mod find {
        use super::*;

        /// Expect lookups by unique columns to find the customer
        #[tokio::test]
        async fn finds_by_unique_columns() -> Result<(), TestError> {
            let mut test = test_setup_with_tables!(Customer)?;
            let customer = test.customer().insert_customer(1).await?;

            let customer_repo = CustomerRepository::new(&test.db);

            let by_email = customer_repo.find_by_email(&customer.email).await?;
            let by_id_number = customer_repo.find_by_id_number(&customer.id_number).await?;
            let missing = customer_repo.find_by_email("nobody@example.com").await?;

            assert_eq!(by_email.map(|c| c.id), Some(customer.id));
            assert_eq!(by_id_number.map(|c| c.id), Some(customer.id));
            assert!(missing.is_none());

            Ok(())
        }
    }

    mod list {
        use super::*;

        /// Expect search to match any of the searchable columns
        #[tokio::test]
        async fn filters_by_search() -> Result<(), TestError> {
            let mut test = test_setup_with_tables!(Customer)?;
            test.customer().insert_customer(1).await?;
            let second = test.customer().insert_customer(2).await?;

            let customer_repo = CustomerRepository::new(&test.db);
            let filter = CustomerFilter {
                search: Some(second.email.clone()),
                status: None,
            };
            let page = customer_repo.list(filter, 1, 10).await?;

            assert_eq!(page.total_items, 1);
            assert_eq!(page.items[0].id, second.id);

            Ok(())
        }

        /// Expect the status filter to exclude other statuses
        #[tokio::test]
        async fn filters_by_status() -> Result<(), TestError> {
            let mut test = test_setup_with_tables!(Customer)?;
            test.customer().insert_customer(1).await?;
            test.customer()
                .insert_customer_with_status(2, "inactive")
                .await?;

            let customer_repo = CustomerRepository::new(&test.db);
            let filter = CustomerFilter {
                search: None,
                status: Some(RecordStatus::Inactive),
            };
            let page = customer_repo.list(filter, 1, 10).await?;

            assert_eq!(page.total_items, 1);
            assert_eq!(page.items[0].status, "inactive");

            Ok(())
        }
    }

    mod update {
        use super::*;

        /// Expect Ok(None) when the customer does not exist
        #[tokio::test]
        async fn returns_none_for_nonexistent_customer() -> Result<(), TestError> {
            let test = test_setup_with_tables!(Customer)?;

            let customer_repo = CustomerRepository::new(&test.db);
            let result = customer_repo.update(1, request(1)).await?;

            assert!(result.is_none());

            Ok(())
        }

        /// Expect the soft delete to keep the row
        #[tokio::test]
        async fn deactivates_customer() -> Result<(), TestError> {
            let mut test = test_setup_with_tables!(Customer)?;
            let customer = test.customer().insert_customer(1).await?;

            let customer_repo = CustomerRepository::new(&test.db);
            customer_repo
                .set_status(customer.id, RecordStatus::Inactive)
                .await?;

            let stored = customer_repo.get(customer.id).await?;
            assert_eq!(stored.map(|c| c.status), Some("inactive".to_string()));

            Ok(())
        }
    }
}
