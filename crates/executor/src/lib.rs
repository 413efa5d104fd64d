//! # RafDB Executor
//!
//! Serializable command layer over the RafDB engine. It provides:
//! - [`Command`]/[`Output`] - one variant per operation, JSON-friendly
//! - [`Executor`] - dispatches commands against a [`Database`]
//! - [`Error`] - structured errors that keep every engine error kind
//!
//! ## Quick Start
//!
//! ```text
//! use rafdb_executor::{Command, Database, Executor, Output};
//!
//! let executor = Executor::new(Database::open("/path/to/data")?);
//! executor.execute(Command::CollectionCreate { name: "users".into() })?;
//! ```

#![warn(missing_docs)]

mod command;
mod convert;
mod error;
mod executor;
mod output;

// Handler modules
mod handlers;

// Test modules
#[cfg(test)]
mod tests;

pub use command::Command;
pub use error::Error;
pub use executor::Executor;
pub use output::Output;

// Re-export engine types so users don't need the lower crates directly
pub use rafdb_core::{Document, ErrorKind, Map, Timestamp, Value};
pub use rafdb_engine::{Database, RafConfig};
pub use rafdb_storage::CatalogStats;

/// Result type for executor operations
pub type Result<T> = std::result::Result<T, Error>;
