//! Catalog: the registry of named collections
//!
//! The catalog owns the name → collection mapping behind a single
//! `parking_lot::RwLock`. It is the first of two lock tiers:
//!
//! 1. catalog lock: held briefly for create/delete/lookup/list/enumerate
//! 2. collection lock: held for document operations on one collection
//!
//! [`Catalog::get`] releases the catalog lock before returning the handle, so
//! document operations never hold both. Where both are held (stats, delete,
//! enumeration) the order is always catalog then collection, and collection
//! operations never reach back into the catalog.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;
use tracing::debug;

use rafdb_core::{Error, Limits, Result};

use crate::collection::Collection;
use crate::stats::CatalogStats;

/// Registry of all collections
#[derive(Debug)]
pub struct Catalog {
    collections: RwLock<HashMap<String, Arc<Collection>>>,
    limits: Limits,
}

impl Catalog {
    /// Create an empty catalog with default limits
    pub fn new() -> Self {
        Self::with_limits(Limits::default())
    }

    /// Create an empty catalog with custom limits
    pub fn with_limits(limits: Limits) -> Self {
        Catalog {
            collections: RwLock::new(HashMap::new()),
            limits,
        }
    }

    /// Rebuild a catalog from restored collections
    ///
    /// Fails with `AlreadyExists` if two collections share a name.
    pub fn from_collections(
        limits: Limits,
        collections: impl IntoIterator<Item = Collection>,
    ) -> Result<Self> {
        let mut map = HashMap::new();
        for collection in collections {
            if map.contains_key(collection.name()) {
                return Err(Error::collection_exists(collection.name()));
            }
            map.insert(collection.name().to_string(), Arc::new(collection));
        }
        Ok(Catalog {
            collections: RwLock::new(map),
            limits,
        })
    }

    /// Limits applied to every collection in this catalog
    pub fn limits(&self) -> &Limits {
        &self.limits
    }

    /// Create an empty collection
    ///
    /// Fails with `AlreadyExists` if `name` is taken; duplicates are never merged.
    pub fn create(&self, name: &str) -> Result<Arc<Collection>> {
        self.limits.validate_key(name)?;

        let mut collections = self.collections.write();
        if collections.contains_key(name) {
            return Err(Error::collection_exists(name));
        }
        let collection = Arc::new(Collection::new(name, self.limits.clone()));
        collections.insert(name.to_string(), Arc::clone(&collection));
        drop(collections);

        debug!(collection = name, "Created collection");
        Ok(collection)
    }

    /// Delete a collection and all of its documents
    ///
    /// The name disappears from the catalog in one step; outstanding handles
    /// to the collection fail with `NotFound` afterwards.
    pub fn delete(&self, name: &str) -> Result<()> {
        self.limits.validate_key(name)?;

        let removed = self.collections.write().remove(name);
        let collection = removed.ok_or_else(|| Error::collection_not_found(name))?;
        collection.drop_contents();

        debug!(collection = name, "Deleted collection");
        Ok(())
    }

    /// Resolve a collection handle
    ///
    /// The handle stays usable without further catalog lookups.
    pub fn get(&self, name: &str) -> Result<Arc<Collection>> {
        self.limits.validate_key(name)?;

        self.collections
            .read()
            .get(name)
            .cloned()
            .ok_or_else(|| Error::collection_not_found(name))
    }

    /// True if a collection with this name exists
    pub fn contains(&self, name: &str) -> bool {
        self.collections.read().contains_key(name)
    }

    /// All collection names, sorted
    pub fn list(&self) -> Vec<String> {
        let mut names: Vec<String> = self.collections.read().keys().cloned().collect();
        names.sort();
        names
    }

    /// Handles to every collection, sorted by name
    ///
    /// The catalog lock is released before the caller touches any collection.
    pub fn collections(&self) -> Vec<Arc<Collection>> {
        let mut handles: Vec<Arc<Collection>> =
            self.collections.read().values().cloned().collect();
        handles.sort_by(|a, b| a.name().cmp(b.name()));
        handles
    }

    /// Visit every collection, in name order, under the catalog read lock
    ///
    /// Creates and deletes wait until the scan finishes. The visitor may take
    /// collection locks (catalog → collection order) but must not call back
    /// into the catalog's write operations.
    pub fn scan<F>(&self, mut visit: F)
    where
        F: FnMut(&Collection),
    {
        let collections = self.collections.read();
        let mut names: Vec<&String> = collections.keys().collect();
        names.sort();
        for name in names {
            visit(collections[name].as_ref());
        }
    }

    /// Number of collections
    pub fn len(&self) -> usize {
        self.collections.read().len()
    }

    /// True if there are no collections
    pub fn is_empty(&self) -> bool {
        self.collections.read().is_empty()
    }

    /// Collection and document counts
    pub fn stats(&self) -> CatalogStats {
        let mut stats = CatalogStats::default();
        self.scan(|collection| stats.record(collection.name(), collection.len()));
        stats
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}
