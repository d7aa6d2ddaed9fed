//! Data access repositories.
//!
//! Repositories wrap SeaORM queries for a single table (or a small group of joined tables) and
//! return `Result<_, DbErr>`. They are generic over [`sea_orm::ConnectionTrait`] so the same
//! repository can run against a pooled connection or inside a transaction.

pub mod billing;
pub mod eve;
pub mod user;
