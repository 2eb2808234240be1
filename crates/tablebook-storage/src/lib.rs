//! Tablebook Storage Layer
//!
//! SQLite-backed cookie jar. Holds the session cookie between runs the
//! same way a browser keeps it between page loads.

mod database;
mod error;
mod migrations;

pub use database::Database;
pub use error::StorageError;

pub type Result<T> = std::result::Result<T, StorageError>;
