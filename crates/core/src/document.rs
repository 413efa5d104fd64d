//! Document type
//!
//! A document is a caller-identified record inside one collection: an opaque
//! string ID, an open-ended field mapping, and two timestamps.
//!
//! Documents are handed out as immutable snapshots. Updating a document builds
//! a new `Document` via [`Document::replaced`]; nothing mutates a document that
//! a reader may already hold.

use crate::timestamp::Timestamp;
use crate::value::{Map, Value};
use serde::{Deserialize, Serialize};

/// A stored document
///
/// Serialized field names (`id`, `data`, `created_at`, `updated_at`) are part of
/// the snapshot format and must not change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// Identifier, unique within the owning collection
    pub id: String,
    /// Field mapping
    pub data: Map,
    /// Set once at insert
    pub created_at: Timestamp,
    /// Set at insert and on every update
    pub updated_at: Timestamp,
}

impl Document {
    /// Create a freshly inserted document with `created_at == updated_at == now`
    pub fn new(id: impl Into<String>, data: Map) -> Self {
        let now = Timestamp::now();
        Document {
            id: id.into(),
            data,
            created_at: now,
            updated_at: now,
        }
    }

    /// Build the successor of this document with `data` fully replaced
    ///
    /// `created_at` is preserved; `updated_at` is strictly greater than before.
    pub fn replaced(&self, data: Map) -> Self {
        Document {
            id: self.id.clone(),
            data,
            created_at: self.created_at,
            updated_at: Timestamp::after(self.updated_at),
        }
    }

    /// Look up a top-level field
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.data.get(name)
    }
}
