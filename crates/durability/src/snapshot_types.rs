//! Snapshot format types
//!
//! The snapshot is one JSON document:
//!
//! ```text
//! {
//!   "collections": {
//!     "<name>": {
//!       "name": "<name>",
//!       "documents": {
//!         "<id>": { "id": "<id>", "data": {...}, "created_at": "...", "updated_at": "..." }
//!       }
//!     }
//!   }
//! }
//! ```
//!
//! Field names and nesting are stable. Maps are ordered so that two snapshots
//! of the same state are byte-identical.

use rafdb_core::Document;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Serialized form of a whole catalog
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogSnapshot {
    /// Collections keyed by name
    #[serde(default)]
    pub collections: BTreeMap<String, CollectionSnapshot>,
}

/// Serialized form of one collection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CollectionSnapshot {
    /// Collection name; must equal its key in [`CatalogSnapshot::collections`]
    pub name: String,
    /// Documents keyed by ID
    #[serde(default)]
    pub documents: BTreeMap<String, Document>,
}

impl CatalogSnapshot {
    /// Total number of documents across all collections
    pub fn document_count(&self) -> usize {
        self.collections.values().map(|c| c.documents.len()).sum()
    }
}

/// Snapshot info returned after a successful write
#[derive(Debug, Clone)]
pub struct SnapshotInfo {
    /// Path to the snapshot file
    pub path: PathBuf,
    /// Total size in bytes
    pub size_bytes: u64,
    /// Collections written
    pub collections: usize,
    /// Documents written
    pub documents: usize,
}
