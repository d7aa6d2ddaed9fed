//! Data transfer objects and database model aliases.

pub mod billing;
pub mod db;
