//! Snapshot codec
//!
//! Converts a live [`Catalog`] to and from snapshot bytes.
//!
//! ## Capture
//!
//! Capturing reads a best-effort consistent view: the catalog read lock is held
//! for the walk, and each collection is read-locked only while its documents
//! are copied. Writers on other collections proceed in the meantime. No I/O
//! happens under any lock; encoding runs on the captured copy.
//!
//! ## Restore
//!
//! Decoding never trusts the file. Every collection and document is checked
//! (keys match embedded names, identifiers and data within limits, timestamps
//! ordered) and any violation is reported as `CorruptSnapshot`. Restored
//! collections get freshly initialized locks.

use rafdb_core::{Error, Limits, Result, Timestamp};
use rafdb_storage::{Catalog, Collection};
use tracing::debug;

use crate::snapshot_types::{CatalogSnapshot, CollectionSnapshot};

/// Copy the catalog's current state
pub fn capture(catalog: &Catalog) -> CatalogSnapshot {
    let mut snapshot = CatalogSnapshot::default();
    catalog.scan(|collection| {
        // Only dropped collections fail here, and those have left the catalog.
        let Ok(documents) = collection.list() else {
            return;
        };
        let documents = documents
            .into_iter()
            .map(|doc| (doc.id.clone(), (*doc).clone()))
            .collect();
        snapshot.collections.insert(
            collection.name().to_string(),
            CollectionSnapshot {
                name: collection.name().to_string(),
                documents,
            },
        );
    });
    snapshot
}

/// Rebuild a catalog from a captured snapshot
///
/// Fails with `CorruptSnapshot` if the snapshot is internally inconsistent.
pub fn restore(snapshot: CatalogSnapshot, limits: Limits) -> Result<Catalog> {
    let mut collections = Vec::with_capacity(snapshot.collections.len());

    for (key, collection) in snapshot.collections {
        limits
            .validate_key(&key)
            .map_err(|e| Error::corrupt_snapshot(format!("collection '{}': {}", key, e)))?;
        if collection.name != key {
            return Err(Error::corrupt_snapshot(format!(
                "collection key '{}' does not match embedded name '{}'",
                key, collection.name
            )));
        }

        for (id, doc) in &collection.documents {
            validate_document(&key, id, doc, &limits)?;
        }

        let restored = Collection::from_documents(
            key.as_str(),
            limits.clone(),
            collection.documents.into_values(),
        )
        .map_err(|e| Error::corrupt_snapshot(format!("collection '{}': {}", key, e)))?;
        collections.push(restored);
    }

    Catalog::from_collections(limits, collections).map_err(|e| Error::corrupt_snapshot(e.to_string()))
}

fn validate_document(
    collection: &str,
    id: &str,
    doc: &rafdb_core::Document,
    limits: &Limits,
) -> Result<()> {
    let corrupt = |reason: String| {
        Error::corrupt_snapshot(format!(
            "collection '{}', document '{}': {}",
            collection, id, reason
        ))
    };

    limits.validate_key(id).map_err(|e| corrupt(e.to_string()))?;
    if doc.id != id {
        return Err(corrupt(format!("embedded id is '{}'", doc.id)));
    }
    limits
        .validate_data(&doc.data)
        .map_err(|e| corrupt(e.to_string()))?;
    for (field, ts) in [("created_at", doc.created_at), ("updated_at", doc.updated_at)] {
        if !ts.is_representable() {
            return Err(corrupt(format!("{} is out of range ({}µs)", field, ts.as_micros())));
        }
    }
    if doc.updated_at < doc.created_at {
        return Err(corrupt(format!(
            "updated_at {} precedes created_at {}",
            doc.updated_at, doc.created_at
        )));
    }
    Ok(())
}

/// Serialize a snapshot to pretty-printed JSON
///
/// Fails with `InvalidInput` if a document carries a timestamp that could not
/// be read back, so no unloadable file is ever produced.
pub fn to_bytes(snapshot: &CatalogSnapshot) -> Result<Vec<u8>> {
    check_timestamps(snapshot)?;
    let mut bytes = serde_json::to_vec_pretty(snapshot).map_err(|e| Error::Io(e.into()))?;
    bytes.push(b'\n');
    Ok(bytes)
}

fn check_timestamps(snapshot: &CatalogSnapshot) -> Result<()> {
    for (name, collection) in &snapshot.collections {
        for doc in collection.documents.values() {
            if !doc.created_at.is_representable() || !doc.updated_at.is_representable() {
                return Err(Error::invalid_input(format!(
                    "collection '{}', document '{}': timestamp past {}",
                    name,
                    doc.id,
                    Timestamp::MAX
                )));
            }
        }
    }
    Ok(())
}

/// Parse snapshot bytes without validating their content
pub fn from_bytes(bytes: &[u8]) -> Result<CatalogSnapshot> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Err(Error::corrupt_snapshot("snapshot is empty"));
    }
    serde_json::from_slice(bytes).map_err(|e| Error::corrupt_snapshot(e.to_string()))
}

/// Encode the full catalog as snapshot bytes
pub fn encode(catalog: &Catalog) -> Result<Vec<u8>> {
    let snapshot = capture(catalog);
    let bytes = to_bytes(&snapshot)?;
    debug!(
        collections = snapshot.collections.len(),
        documents = snapshot.document_count(),
        size_bytes = bytes.len(),
        "Encoded catalog snapshot"
    );
    Ok(bytes)
}

/// Decode snapshot bytes into a catalog with default limits
pub fn decode(bytes: &[u8]) -> Result<Catalog> {
    decode_with_limits(bytes, Limits::default())
}

/// Decode snapshot bytes into a catalog with custom limits
pub fn decode_with_limits(bytes: &[u8], limits: Limits) -> Result<Catalog> {
    restore(from_bytes(bytes)?, limits)
}
