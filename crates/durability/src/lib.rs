//! Durability layer for RafDB
//!
//! This crate handles everything that touches disk:
//!
//! - Snapshot capture and restore of the whole catalog
//! - JSON snapshot format (stable field names, deterministic ordering)
//! - Crash-safe file replacement (temp file, fsync, rename)
//! - Quarantine of unreadable snapshot files

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod file; // Snapshot file I/O and atomic replacement
pub mod snapshot; // Catalog <-> snapshot bytes
pub mod snapshot_types; // Snapshot document layout

pub use file::{load_catalog, save_catalog, SnapshotFile};
pub use snapshot::{capture, decode, decode_with_limits, encode, restore};
pub use snapshot_types::{CatalogSnapshot, CollectionSnapshot, SnapshotInfo};
