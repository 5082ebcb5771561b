//! Database Layer
//!
//! Connection pool configuration and pagination helpers.

pub mod connection;

pub use connection::{DatabaseConfig, DatabasePool, Pagination};
