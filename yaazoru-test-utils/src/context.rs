//! Test context structure and utilities.
//!
//! This module provides the `TestContext` returned by `TestBuilder` for Phase 2 test execution.
//! The context owns an in-memory SQLite database and a mockito server standing in for the
//! third-party HTTP services (payment gateway, Samsung device management).

use mockito::{Mock, Server, ServerGuard};
use sea_orm::{
    sea_query::TableCreateStatement, ConnectionTrait, Database, DatabaseConnection, DbBackend,
    Schema,
};

use crate::error::TestError;

/// Test context structure returned by `TestBuilder`
///
/// Provides access to:
/// - Database connection (in-memory SQLite)
/// - Mock HTTP server for third-party integrations
/// - Collection of mock endpoints for assertion
///
/// ```ignore
/// let mut test = TestBuilder::new().with_all_tables().build().await?;
///
/// let customer = test.customer().insert_customer(1).await?;
/// let client = PaymentGatewayClient::new(reqwest::Client::new(), &test.server_url(), "key");
///
/// test.assert_mocks();
/// ```
pub struct TestContext {
    /// Database connection to in-memory SQLite database
    pub db: DatabaseConnection,

    /// Mock HTTP server for third-party endpoints
    pub(crate) server: ServerGuard,
    /// Collection of mock HTTP endpoints for assertion
    pub(crate) mocks: Vec<Mock>,
}

impl TestContext {
    /// Create a new test context with an empty database and a fresh mock server.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Initialized test context without any tables
    /// - `Err(TestError::DbErr)` - Database connection failed
    pub async fn new() -> Result<Self, TestError> {
        let server = Server::new_async().await;
        let db = Database::connect("sqlite::memory:").await?;

        Ok(TestContext {
            db,
            server,
            mocks: Vec::new(),
        })
    }

    /// Base URL of the mock server, used as the base URL of integration clients.
    pub fn server_url(&self) -> String {
        self.server.url()
    }

    /// Direct access to the mock server for endpoints not covered by fixture helpers.
    pub fn server(&mut self) -> &mut ServerGuard {
        &mut self.server
    }

    /// Create database tables from schema statements.
    pub async fn with_tables(&self, stmts: Vec<TableCreateStatement>) -> Result<(), TestError> {
        for stmt in stmts {
            self.db.execute(&stmt).await?;
        }

        Ok(())
    }

    /// Assert all mock endpoints were called as expected.
    ///
    /// # Panics
    /// Panics if any mock endpoint was not called the expected number of times
    pub fn assert_mocks(&self) {
        for mock in &self.mocks {
            mock.assert();
        }
    }
}

/// CREATE TABLE statements for every entity, ordered so referenced tables come first.
pub fn all_table_statements() -> Vec<TableCreateStatement> {
    let schema = Schema::new(DbBackend::Sqlite);

    vec![
        schema.create_table_from_entity(entity::prelude::Branch),
        schema.create_table_from_entity(entity::prelude::User),
        schema.create_table_from_entity(entity::prelude::Customer),
        schema.create_table_from_entity(entity::prelude::Device),
        schema.create_table_from_entity(entity::prelude::CustomerDevice),
        schema.create_table_from_entity(entity::prelude::SimCard),
        schema.create_table_from_entity(entity::prelude::MonthlyPayment),
        schema.create_table_from_entity(entity::prelude::CreditDetails),
        schema.create_table_from_entity(entity::prelude::PaymentCreditLink),
        schema.create_table_from_entity(entity::prelude::Payments),
        schema.create_table_from_entity(entity::prelude::Item),
        schema.create_table_from_entity(entity::prelude::Comment),
    ]
}

#[macro_export]
macro_rules! test_setup_with_tables {
    // Pattern 1: No entities provided
    () => {{
        $crate::TestContext::new().await
    }};

    // Pattern 2: Entities provided
    ($($entity:expr),+ $(,)?) => {{
        async {
            let setup = $crate::TestContext::new().await?;

            let schema = sea_orm::Schema::new(sea_orm::DbBackend::Sqlite);
            let stmts = vec![
                $(schema.create_table_from_entity($entity),)+
            ];
            setup.with_tables(stmts).await?;

            Ok::<_, $crate::error::TestError>(setup)
        }.await
    }};
}

#[macro_export]
macro_rules! test_setup_with_all_tables {
    () => {{
        async {
            let setup = $crate::TestContext::new().await?;
            setup
                .with_tables($crate::context::all_table_statements())
                .await?;

            Ok::<_, $crate::error::TestError>(setup)
        }
        .await
    }};
}
