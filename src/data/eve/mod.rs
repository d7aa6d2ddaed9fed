//! EVE Online data repositories.
//!
//! This module contains repositories for reading EVE Online game data populated by the external
//! ingestion pipeline. Each repository handles a specific table (characters, corporations,
//! member tracking, mining ledgers, wallet journals) and only performs reads.

pub mod character;
pub mod corporation;
pub mod member_tracking;
pub mod mining;
pub mod wallet_journal;

#[cfg(test)]
mod tests;
