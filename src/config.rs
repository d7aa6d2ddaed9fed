//! Environment configuration for the billing binary.

use crate::error::config::ConfigError;

/// Runtime configuration read from the environment.
pub struct Config {
    /// Database connection URL
    pub database_url: String,
    /// EVE Online corporation IDs to generate bills for
    pub corporation_ids: Vec<i64>,
}

impl Config {
    /// Reads configuration from environment variables.
    ///
    /// # Returns
    /// - `Ok(Config)` - All required variables present and valid
    /// - `Err(ConfigError::MissingEnvVar)` - `DATABASE_URL` or `BILLING_CORPORATION_IDS` is unset
    /// - `Err(ConfigError::InvalidEnvValue)` - `BILLING_CORPORATION_IDS` is not a comma separated
    ///   list of corporation IDs
    pub fn from_env() -> Result<Self, ConfigError> {
        let database_url = require_env("DATABASE_URL")?;
        let corporation_ids = parse_corporation_ids(
            "BILLING_CORPORATION_IDS",
            &require_env("BILLING_CORPORATION_IDS")?,
        )?;

        Ok(Self {
            database_url,
            corporation_ids,
        })
    }
}

fn require_env(var: &str) -> Result<String, ConfigError> {
    std::env::var(var).map_err(|_| ConfigError::MissingEnvVar(var.to_string()))
}

/// Parses a comma separated list of corporation IDs, ignoring surrounding whitespace.
fn parse_corporation_ids(var: &str, raw: &str) -> Result<Vec<i64>, ConfigError> {
    let corporation_ids = raw
        .split(',')
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(|value| {
            value.parse::<i64>().map_err(|e| ConfigError::InvalidEnvValue {
                var: var.to_string(),
                reason: format!("{:?} is not a valid corporation ID: {}", value, e),
            })
        })
        .collect::<Result<Vec<i64>, ConfigError>>()?;

    if corporation_ids.is_empty() {
        return Err(ConfigError::InvalidEnvValue {
            var: var.to_string(),
            reason: "at least one corporation ID is required".to_string(),
        });
    }

    Ok(corporation_ids)
}
