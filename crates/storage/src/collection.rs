//! Collection: the per-collection document store
//!
//! This module implements one collection's document mapping using:
//! - `HashMap<String, Arc<Document>>` for O(1) point lookup by ID
//! - `parking_lot::RwLock` guarding the mapping
//!
//! # Design Notes
//!
//! - **Reads share, writes exclude**: get/list/query take the read lock and may
//!   run concurrently with each other; insert/update/delete take the write lock.
//! - **Immutable snapshots**: documents are stored behind `Arc` and never
//!   mutated in place. An update swaps in a new `Arc<Document>`, so a reader
//!   holding an older document keeps seeing exactly what it fetched.
//! - **Validation outside the lock**: identifiers and data are checked against
//!   [`Limits`] before the lock is acquired.
//! - **Dropped handles**: once the catalog deletes a collection, every operation
//!   through a leftover handle fails with `NotFound(collection)`.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;
use tracing::debug;

use rafdb_core::{Document, Error, Limits, Map, Result, Value};

use crate::query::Filter;

#[derive(Debug, Default)]
struct CollectionState {
    documents: HashMap<String, Arc<Document>>,
    /// Set when the catalog deletes this collection
    dropped: bool,
}

/// A named set of documents with its own read/write lock
#[derive(Debug)]
pub struct Collection {
    name: String,
    limits: Limits,
    state: RwLock<CollectionState>,
}

impl Collection {
    /// Create an empty collection
    ///
    /// Collections are normally created through [`crate::Catalog::create`]; this
    /// constructor exists for catalog restore and tests.
    pub fn new(name: impl Into<String>, limits: Limits) -> Self {
        Collection {
            name: name.into(),
            limits,
            state: RwLock::new(CollectionState::default()),
        }
    }

    /// Rebuild a collection from previously stored documents
    ///
    /// Used when restoring from a snapshot. Documents are taken as-is
    /// (timestamps included); the lock is freshly initialized.
    ///
    /// Fails with `AlreadyExists` if two documents share an ID.
    pub fn from_documents(
        name: impl Into<String>,
        limits: Limits,
        documents: impl IntoIterator<Item = Document>,
    ) -> Result<Self> {
        let mut map = HashMap::new();
        for doc in documents {
            if map.contains_key(&doc.id) {
                return Err(Error::document_exists(doc.id));
            }
            map.insert(doc.id.clone(), Arc::new(doc));
        }
        Ok(Collection {
            name: name.into(),
            limits,
            state: RwLock::new(CollectionState {
                documents: map,
                dropped: false,
            }),
        })
    }

    /// Collection name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Insert a new document
    ///
    /// Fails with `AlreadyExists` if `id` is present. On success the document
    /// has `created_at == updated_at == now`.
    pub fn insert(&self, id: &str, data: Map) -> Result<Arc<Document>> {
        self.limits.validate_key(id)?;
        self.limits.validate_data(&data)?;

        let mut state = self.state.write();
        self.ensure_live(&state)?;
        if state.documents.contains_key(id) {
            return Err(Error::document_exists(id));
        }
        let doc = Arc::new(Document::new(id, data));
        state.documents.insert(id.to_string(), Arc::clone(&doc));
        drop(state);

        debug!(collection = %self.name, id, "Inserted document");
        Ok(doc)
    }

    /// Get a document by ID
    pub fn get(&self, id: &str) -> Result<Arc<Document>> {
        self.limits.validate_key(id)?;

        let state = self.state.read();
        self.ensure_live(&state)?;
        state
            .documents
            .get(id)
            .cloned()
            .ok_or_else(|| Error::document_not_found(id))
    }

    /// Replace a document's data
    ///
    /// The whole mapping is replaced (no merge). `created_at` is kept and
    /// `updated_at` becomes strictly greater than its previous value.
    pub fn update(&self, id: &str, data: Map) -> Result<Arc<Document>> {
        self.limits.validate_key(id)?;
        self.limits.validate_data(&data)?;

        let mut state = self.state.write();
        self.ensure_live(&state)?;
        let slot = state
            .documents
            .get_mut(id)
            .ok_or_else(|| Error::document_not_found(id))?;
        let doc = Arc::new(slot.replaced(data));
        *slot = Arc::clone(&doc);
        drop(state);

        debug!(collection = %self.name, id, "Updated document");
        Ok(doc)
    }

    /// Delete a document by ID
    pub fn delete(&self, id: &str) -> Result<()> {
        self.limits.validate_key(id)?;

        let mut state = self.state.write();
        self.ensure_live(&state)?;
        if state.documents.remove(id).is_none() {
            return Err(Error::document_not_found(id));
        }
        drop(state);

        debug!(collection = %self.name, id, "Deleted document");
        Ok(())
    }

    /// Every document currently in the collection
    ///
    /// Order is unspecified; each document appears exactly once.
    pub fn list(&self) -> Result<Vec<Arc<Document>>> {
        let state = self.state.read();
        self.ensure_live(&state)?;
        Ok(state.documents.values().cloned().collect())
    }

    /// Documents whose `data[field]` equals `value`
    ///
    /// Full scan; see [`Filter`] for the equality rules.
    pub fn query(&self, field: &str, value: Value) -> Result<Vec<Arc<Document>>> {
        let filter = Filter::eq(field, value)?;
        self.find(&filter)
    }

    /// Documents matching a prepared filter
    pub fn find(&self, filter: &Filter) -> Result<Vec<Arc<Document>>> {
        let state = self.state.read();
        self.ensure_live(&state)?;
        Ok(state
            .documents
            .values()
            .filter(|doc| filter.matches(doc))
            .cloned()
            .collect())
    }

    /// True if a document with this ID exists
    pub fn contains(&self, id: &str) -> bool {
        let state = self.state.read();
        !state.dropped && state.documents.contains_key(id)
    }

    /// Number of documents (0 once dropped)
    pub fn len(&self) -> usize {
        let state = self.state.read();
        if state.dropped {
            0
        } else {
            state.documents.len()
        }
    }

    /// True if the collection holds no documents
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// True once the catalog has deleted this collection
    pub fn is_dropped(&self) -> bool {
        self.state.read().dropped
    }

    /// Release all documents and reject further operations
    pub(crate) fn drop_contents(&self) {
        let mut state = self.state.write();
        state.dropped = true;
        state.documents.clear();
    }

    fn ensure_live(&self, state: &CollectionState) -> Result<()> {
        if state.dropped {
            return Err(Error::collection_not_found(&self.name));
        }
        Ok(())
    }
}
