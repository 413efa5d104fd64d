//! Shared test utilities for all integration test suites.
//!
//! Import via `#[path = "../common/mod.rs"] mod common;` from a suite's main.rs.

#![allow(dead_code)]
#![allow(unused_imports)]

use std::sync::{Arc, Once};

pub use rafdb::{
    Catalog, Collection, Database, Document, ErrorKind, Map, RafConfig, StoreError, Value,
};
pub use tempfile::TempDir;

static INIT_TRACING: Once = Once::new();

/// Route `tracing` output through the test harness (shown for failing tests).
pub fn init_tracing() {
    INIT_TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_test_writer()
            .with_max_level(tracing::Level::DEBUG)
            .try_init();
    });
}

/// Build a field map from `(name, value)` pairs.
pub fn data(pairs: &[(&str, Value)]) -> Map {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.clone()))
        .collect()
}

// ============================================================================
// TestDb - disk-backed database in a temp directory
// ============================================================================

/// Disk-backed database that can be closed and reopened.
pub struct TestDb {
    pub db: Option<Arc<Database>>,
    pub dir: TempDir,
}

impl TestDb {
    /// Fresh database with default config.
    pub fn new() -> Self {
        init_tracing();
        let dir = TempDir::new().expect("temp dir");
        let db = Database::open(dir.path()).expect("open database");
        TestDb { db: Some(db), dir }
    }

    /// Fresh database with an explicit config.
    pub fn with_config(cfg: RafConfig) -> Self {
        init_tracing();
        let dir = TempDir::new().expect("temp dir");
        let db = Database::open_with_config(dir.path(), cfg).expect("open database");
        TestDb { db: Some(db), dir }
    }

    pub fn db(&self) -> &Arc<Database> {
        self.db.as_ref().expect("database is closed")
    }

    pub fn catalog(&self) -> &Arc<Catalog> {
        self.db().catalog()
    }

    /// Drop the database handle, running its shutdown path.
    pub fn close(&mut self) {
        self.db = None;
    }

    /// Close and open again from the same directory.
    pub fn reopen(&mut self) {
        self.close();
        self.db = Some(Database::open(self.dir.path()).expect("reopen database"));
    }

    pub fn snapshot_path(&self) -> std::path::PathBuf {
        self.dir.path().join(&self.db().config().snapshot_file)
    }
}

impl Default for TestDb {
    fn default() -> Self {
        Self::new()
    }
}
