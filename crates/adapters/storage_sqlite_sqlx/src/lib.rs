//! # restohub-adapter-storage-sqlite-sqlx
//!
//! `SQLite` persistence adapter using [sqlx](https://docs.rs/sqlx).
//!
//! ## Responsibilities
//! - Implement `RestaurantRepository` from `restohub-app::ports::storage`
//! - Manage `SQLite` connection pool lifecycle (open, migrate, close)
//! - Map between domain types and database rows
//!
//! ## Dependency rule
//! Depends on `restohub-app` (for port traits) and `restohub-domain` (for domain types).
//! The `app` and `domain` crates must never reference this adapter.

mod error;
mod pool;
mod restaurant_repo;

pub use error::StorageError;
pub use pool::{Config, Database};
pub use restaurant_repo::SqliteRestaurantRepository;
