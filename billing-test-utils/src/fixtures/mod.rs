//! Test fixture modules for database record creation.
//!
//! - `eve` - EVE Online data populated by the ingestion pipeline (corporations, characters,
//!   member tracking, market prices, mining ledgers, wallet journals)
//! - `user` - Users and character ownership records
//! - `billing` - Tax policy settings and persisted bills

pub mod billing;
pub mod eve;
pub mod user;
