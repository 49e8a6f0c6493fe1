//! Boxing Store - persistence for boxer records
//!
//! Provides:
//! - A small storage interface (`ConnectionProvider`, `StorageConnection`)
//!   that tests can replace with mocks
//! - The SQLite implementation of that interface
//! - Store configuration resolved from the environment
//! - The Boxer repository: create and lookup operations

pub mod config;
pub mod db;
pub mod errors;
pub mod repo;
pub mod storage;

// Re-export key types
pub use config::StoreConfig;
pub use db::{SqliteConnection, SqliteProvider};
pub use errors::Result;
pub use repo::BoxerRepo;
pub use storage::{ConnectionProvider, Row, SqlValue, StorageConnection};
