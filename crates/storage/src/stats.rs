//! Catalog statistics

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Document counts across the catalog
///
/// Each per-collection count is read under that collection's lock; the
/// aggregate is best-effort and not a single atomic snapshot of the store.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogStats {
    /// Number of collections
    pub collections: usize,
    /// Sum of per-collection document counts
    pub total_documents: usize,
    /// Document count by collection name
    pub collection_stats: BTreeMap<String, usize>,
}

impl CatalogStats {
    /// Record one collection's count
    pub(crate) fn record(&mut self, name: &str, count: usize) {
        self.collections += 1;
        self.total_documents += count;
        self.collection_stats.insert(name.to_string(), count);
    }
}
