//! Utility functions for billing calculations.
//!
//! Calendar helpers for billing periods and ISK amount rounding used by payment reconciliation.

pub mod isk;
pub mod time;
