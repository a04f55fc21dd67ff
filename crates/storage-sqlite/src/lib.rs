//! SQLite storage implementation for Ancla.
//!
//! This crate provides all database-related functionality using Diesel ORM with SQLite.
//! It implements the repository traits defined in `ancla-core` and contains:
//! - Database connection pooling and management
//! - Diesel migrations
//! - Repository implementations for all domain entities
//! - Database-specific model types (with Diesel derives)
//!
//! # Architecture
//!
//! This crate is the only place in the application where Diesel dependencies exist.
//! The core and the server work with the repository traits only.
//!
//! ```text
//!   server (HTTP)
//!        │
//!        ▼
//!   core (domain) ◄── storage-sqlite (this crate)
//!                             │
//!                             ▼
//!                         SQLite DB
//! ```
//!
//! Reads go through the r2d2 pool. Writes are funnelled through a single
//! writer task ([`WriteHandle`]).

pub mod db;
pub mod errors;
pub mod schema;

// Repository implementations
pub mod budget_limits;
pub mod reports;
pub mod savings_goals;
pub mod transactions;

// Re-export database utilities
pub use db::{
    create_pool, get_connection, init, run_migrations, spawn_writer, DbConnection, DbPool,
    WriteHandle,
};

// Re-export storage errors and conversion helpers
pub use errors::{IntoCore, StorageError};

// Re-export from ancla-core for convenience
pub use ancla_core::errors::{DatabaseError, Error, Result};
