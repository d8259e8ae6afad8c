//! SQLite storage implementation for the expense calculator.
//!
//! This crate provides all database-related functionality using Diesel ORM with SQLite.
//! It implements the repository traits defined in `expense-calculator-core` and contains:
//! - Database connection pooling and management
//! - The single writer actor through which all writes are issued
//! - Repository implementations for personal expenses
//! - Database-specific model types (with Diesel derives)
//!
//! The tables themselves are owned by the calculator's migrations and are
//! expected to exist before a repository is used.
//!
//! ```text
//! core (domain, traits)
//!          │
//!          ▼
//!  storage-sqlite (this crate)
//!          │
//!          ▼
//!      SQLite DB
//! ```

pub mod db;
pub mod errors;
pub mod schema;

// Repository implementations
pub mod expenses;

// Re-export database utilities
pub use db::{
    create_pool, get_connection, get_db_path, init, spawn_writer, DbConnection, DbPool,
    WriteHandle,
};

// Re-export storage errors and conversion helpers
pub use errors::{IntoCore, StorageError};

pub use expenses::PersonalExpenseRepository;

// Re-export from expense-calculator-core for convenience
pub use expense_calculator_core::errors::{DatabaseError, Error, Result};
