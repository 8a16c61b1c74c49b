//! Shared test utilities for the Yaazoru workspace.
//!
//! Tests are written in two phases. Phase 1 declares the environment with [`TestBuilder`]
//! (tables, fixture rows, mock third-party endpoints). Phase 2 uses the resulting
//! [`TestContext`] to exercise repositories, services and controllers against an
//! in-memory SQLite database and a local mockito server.

pub mod builder;
pub mod constant;
pub mod context;
pub mod error;
pub mod fixtures;
pub mod model;

pub use builder::TestBuilder;
pub use context::TestContext;
pub use error::TestError;

pub mod prelude {
    pub use crate::{
        fixtures::factory, test_setup_with_all_tables, test_setup_with_tables, TestBuilder,
        TestContext, TestError,
    };
}
