//! Error types for the billing crate.
//!
//! Domain-specific errors live in submodules and are aggregated into the single [`Error`] type
//! returned by services, allowing the `?` operator to convert underlying library errors.

pub mod config;

use thiserror::Error;

use crate::error::config::ConfigError;

/// Main error type for the billing crate.
///
/// Not-found conditions are never represented here: unknown characters, corporations or
/// billing periods produce empty results, zero amounts or `None` instead.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    /// Failed to serialize generated bills.
    #[error(transparent)]
    JsonError(#[from] serde_json::Error),
}
