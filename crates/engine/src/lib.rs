//! Database engine for RafDB
//!
//! This crate ties the in-memory catalog to its snapshot file:
//! - Database: open/close, data directory and `rafdb.toml`
//! - Checkpoints: explicit, periodic (background thread), and on shutdown
//! - Recovery: snapshot load on open, with quarantine of unreadable files

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod background;
pub mod database;

pub use background::SnapshotScheduler;
pub use database::{
    Database, PersistenceMode, RafConfig, CONFIG_FILE_NAME, DEFAULT_SNAPSHOT_FILE,
    MAX_SNAPSHOT_INTERVAL_SECS,
};
