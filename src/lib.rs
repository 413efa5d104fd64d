//! RafDB - minimal embedded document store
//!
//! A catalog of named collections, each holding JSON-like documents keyed by
//! caller-supplied IDs, persisted as a single JSON snapshot file.
//!
//! # Quick Start
//!
//! ```ignore
//! use rafdb::{Command, Database, Executor, Output, Value};
//!
//! // Open (or create) a database directory
//! let db = Database::open("/path/to/data")?;
//!
//! // Direct catalog access
//! let users = db.catalog().create("users")?;
//! users.insert("u1", [("name".to_string(), Value::from("Alice"))].into())?;
//!
//! // Or through the command layer
//! let executor = Executor::new(db);
//! let output = executor.execute(Command::CollectionList)?;
//! ```
//!
//! # Architecture
//!
//! The [`Executor`] provides a serializable command API. The [`Database`]
//! exposes the [`Catalog`] directly for embedded use; catalog and collection
//! operations return [`StoreError`].

// Re-export the command API from rafdb-executor
pub use rafdb_executor::*;

// Embedded API
pub use rafdb_core::{EntityKind, LimitError, Limits};
pub use rafdb_core::{Error as StoreError, Result as StoreResult};
pub use rafdb_durability::{load_catalog, save_catalog, SnapshotFile, SnapshotInfo};
pub use rafdb_engine::PersistenceMode;
pub use rafdb_storage::{Catalog, Collection, Filter};
