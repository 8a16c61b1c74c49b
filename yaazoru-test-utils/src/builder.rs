//! Declarative test builder.
//!
//! `TestBuilder` queues tables, database fixtures and mock endpoints; everything is executed
//! in order by the final `build()` call.

use mockito::Mock;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{context::all_table_statements, error::TestError, TestContext};

/// Builder for declarative test initialization.
///
/// Seeds are passed to the fixture factories so unique columns stay distinct between rows.
pub struct TestBuilder {
    // Tables to create
    tables: Vec<TableCreateStatement>,
    include_all_tables: bool,

    // Database fixtures to insert, by seed
    branches: Vec<u32>,
    customers: Vec<u32>,
    devices: Vec<u32>,

    // Mock endpoints to create
    mock_builders: Vec<Box<dyn FnOnce(&mut mockito::ServerGuard) -> Mock>>,

    // Pre-configured endpoint shortcuts
    tokenize_endpoints: Vec<(String, String, usize)>, // (token, last_4_digits, expected_requests)
    samsung_device_endpoints: Vec<(String, String, usize)>, // (imei, status, expected_requests)
    switchboard_calls_endpoints: Vec<(String, usize, usize)>, // (phone, count, expected_requests)
    originate_call_endpoints: Vec<(String, usize)>,           // (call_id, expected_requests)
    recognize_endpoints: Vec<(Vec<String>, usize)>,           // (transcripts, expected_requests)
}

impl TestBuilder {
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            include_all_tables: false,
            branches: Vec::new(),
            customers: Vec::new(),
            devices: Vec::new(),
            mock_builders: Vec::new(),
            tokenize_endpoints: Vec::new(),
            samsung_device_endpoints: Vec::new(),
            switchboard_calls_endpoints: Vec::new(),
            originate_call_endpoints: Vec::new(),
            recognize_endpoints: Vec::new(),
        }
    }

    /// Create every table of the schema, referenced tables first.
    pub fn with_all_tables(mut self) -> Self {
        self.include_all_tables = true;
        self
    }

    /// Add a single entity table to the test database.
    ///
    /// Tables are created in the order they are added, so add referenced tables first.
    ///
    /// ```no_run
    /// use entity::prelude::*;
    /// use yaazoru_test_utils::TestBuilder;
    ///
    /// # async fn example() -> Result<(), yaazoru_test_utils::TestError> {
    /// let test = TestBuilder::new()
    ///     .with_table(Customer)
    ///     .with_table(MonthlyPayment)
    ///     .build()
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    pub fn with_mock_branch(mut self, seed: u32) -> Self {
        self.branches.push(seed);
        self
    }

    pub fn with_mock_customer(mut self, seed: u32) -> Self {
        self.customers.push(seed);
        self
    }

    pub fn with_mock_device(mut self, seed: u32) -> Self {
        self.devices.push(seed);
        self
    }

    /// Add a mock payment gateway `POST /tokenize` endpoint.
    pub fn with_tokenize_endpoint(
        mut self,
        token: impl Into<String>,
        last_4_digits: impl Into<String>,
        expected_requests: usize,
    ) -> Self {
        self.tokenize_endpoints
            .push((token.into(), last_4_digits.into(), expected_requests));
        self
    }

    /// Add a mock Samsung `GET /devices/{imei}` endpoint.
    pub fn with_samsung_device_endpoint(
        mut self,
        imei: impl Into<String>,
        status: impl Into<String>,
        expected_requests: usize,
    ) -> Self {
        self.samsung_device_endpoints
            .push((imei.into(), status.into(), expected_requests));
        self
    }

    /// Add a mock switchboard `GET /calls?phone=` endpoint logging `count` calls.
    pub fn with_switchboard_calls_endpoint(
        mut self,
        phone_number: impl Into<String>,
        count: usize,
        expected_requests: usize,
    ) -> Self {
        self.switchboard_calls_endpoints
            .push((phone_number.into(), count, expected_requests));
        self
    }

    pub fn with_originate_call_endpoint(
        mut self,
        call_id: impl Into<String>,
        expected_requests: usize,
    ) -> Self {
        self.originate_call_endpoints
            .push((call_id.into(), expected_requests));
        self
    }

    /// Add a mock Speech-to-Text `POST /v1/speech:recognize` endpoint.
    pub fn with_recognize_endpoint<S: Into<String>>(
        mut self,
        transcripts: Vec<S>,
        expected_requests: usize,
    ) -> Self {
        self.recognize_endpoints.push((
            transcripts.into_iter().map(Into::into).collect(),
            expected_requests,
        ));
        self
    }

    /// Add a custom mock endpoint with direct access to the mockito server.
    pub fn with_mock_endpoint<F>(mut self, setup: F) -> Self
    where
        F: FnOnce(&mut mockito::ServerGuard) -> Mock + 'static,
    {
        self.mock_builders.push(Box::new(setup));
        self
    }

    /// Build the test context.
    ///
    /// Executes all queued operations in the following order:
    /// 1. Creates database tables (all tables if requested, then custom tables)
    /// 2. Inserts database fixtures (branches, customers, devices)
    /// 3. Creates mock HTTP endpoints (custom endpoints first, then shortcuts)
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully configured test environment ready for use
    /// - `Err(TestError::DbErr)` - Database table creation or fixture insertion failed
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new().await?;

        // 1. Create tables
        let mut all_tables = Vec::new();

        if self.include_all_tables {
            all_tables.extend(all_table_statements());
        }

        all_tables.extend(self.tables);
        setup.with_tables(all_tables).await?;

        // 2. Insert database fixtures
        for seed in self.branches {
            setup.inventory().insert_branch(seed).await?;
        }

        for seed in self.customers {
            setup.customer().insert_customer(seed).await?;
        }

        for seed in self.devices {
            setup.inventory().insert_device(seed).await?;
        }

        // 3. Create mock endpoints
        // Custom endpoints go first so mockito matches them before the shortcuts on shared paths
        let mut mocks = Vec::new();

        for builder in self.mock_builders {
            mocks.push(builder(&mut setup.server));
        }

        for (token, last_4_digits, expected) in self.tokenize_endpoints {
            mocks.push(setup.integration().create_tokenize_endpoint(
                &token,
                &last_4_digits,
                expected,
            ));
        }

        for (imei, status, expected) in self.samsung_device_endpoints {
            mocks.push(
                setup
                    .integration()
                    .create_samsung_device_endpoint(&imei, &status, expected),
            );
        }

        for (phone_number, count, expected) in self.switchboard_calls_endpoints {
            mocks.push(setup.integration().create_switchboard_calls_endpoint(
                &phone_number,
                count,
                expected,
            ));
        }

        for (call_id, expected) in self.originate_call_endpoints {
            mocks.push(
                setup
                    .integration()
                    .create_originate_call_endpoint(&call_id, expected),
            );
        }

        for (transcripts, expected) in self.recognize_endpoints {
            mocks.push(
                setup
                    .integration()
                    .create_recognize_endpoint(&transcripts, expected),
            );
        }

        // Store mocks in setup so they live as long as the test
        setup.mocks = mocks;

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
