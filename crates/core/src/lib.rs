//! Expense Calculator Core - domain entities, services, and traits.
//!
//! This crate holds the personal expense model of a monthly calculation.
//! It is database-agnostic and defines traits that are implemented
//! by the `storage-sqlite` crate.

pub mod errors;
pub mod expenses;

pub use expenses::*;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
