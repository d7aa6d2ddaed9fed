//! Billing repositories.
//!
//! Settings read by the tax policy provider and the bill tables written by bill generation.

pub mod character_bill;
pub mod corporation_bill;
pub mod setting;

#[cfg(test)]
mod tests;
