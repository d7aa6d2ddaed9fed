//! Business logic services.
//!
//! Services combine repository reads into billing results and own the transaction boundaries of
//! bill generation. They return the crate [`Error`](crate::error::Error) type.

pub mod billing;
