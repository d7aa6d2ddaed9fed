//! Test utilities for the billing workspace.
//!
//! Tests are set up in two phases:
//! 1. Configure a [`TestBuilder`] with the tables and fixtures the test needs
//! 2. Use the [`TestContext`] returned by `build()` to insert further fixtures and run queries
//!    against its in-memory SQLite database

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
        constant::{
            TEST_HIGH_TIER_MINING_TAX_RATE, TEST_HIGH_TIER_MODIFIER, TEST_HIGH_TIER_PVE_TAX_RATE,
            TEST_LOW_TIER_MINING_TAX_RATE, TEST_LOW_TIER_MODIFIER, TEST_LOW_TIER_PVE_TAX_RATE,
            TEST_REGISTRATION_RATE,
        },
        fixtures::eve::factory,
        TestBuilder, TestContext, TestError,
    };
}
