//! Mining and PvE tax billing for EVE Online corporations.
//!
//! Bills are computed from aggregate reads over externally populated tables (characters,
//! corporations, member tracking, mining ledgers, wallet journals and users) and persisted as
//! corporation and character bill records. The tax tier applied to a corporation depends on how
//! many of its tracked members have registered a valid key.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod data;
pub mod error;
pub mod model;
pub mod service;
pub mod startup;
pub mod util;
