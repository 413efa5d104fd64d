//! Database struct and open/close logic
//!
//! The Database owns the catalog and ties it to its snapshot file:
//! - Data directory and `rafdb.toml` setup
//! - Snapshot load on open (quarantining an unreadable file)
//! - Explicit checkpoints and optional periodic background snapshots
//! - Final snapshot on shutdown
//!
//! Ephemeral databases have no directory and never touch disk.

pub mod config;

pub use config::{RafConfig, CONFIG_FILE_NAME, DEFAULT_SNAPSHOT_FILE, MAX_SNAPSHOT_INTERVAL_SECS};

use crate::background::SnapshotScheduler;
use parking_lot::Mutex as ParkingMutex;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use rafdb_core::{ErrorKind, Limits, Result};
use rafdb_durability::{SnapshotFile, SnapshotInfo};
use rafdb_storage::Catalog;
use tracing::{info, warn};

/// Controls whether a database is backed by a snapshot file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PersistenceMode {
    /// In-memory only; checkpoints are no-ops
    Ephemeral,
    /// Loaded from and saved to a snapshot file in the data directory
    Disk,
}

/// Writes the catalog to its snapshot file, one save at a time.
///
/// Shared with the background thread; it does not keep the Database alive.
#[derive(Debug)]
struct Checkpointer {
    catalog: Arc<Catalog>,
    file: SnapshotFile,
    write_lock: ParkingMutex<()>,
}

impl Checkpointer {
    fn save(&self) -> Result<SnapshotInfo> {
        // Concurrent saves would share the temp file.
        let _guard = self.write_lock.lock();
        self.file.save(&self.catalog)
    }
}

/// Main database struct
#[derive(Debug)]
pub struct Database {
    /// Canonical data directory (empty for ephemeral)
    data_dir: PathBuf,

    /// All collections
    catalog: Arc<Catalog>,

    /// Snapshot writer; None for ephemeral databases
    checkpointer: Option<Arc<Checkpointer>>,

    persistence_mode: PersistenceMode,

    /// Configuration (mirrors rafdb.toml)
    config: RafConfig,

    /// Cleared by the first shutdown or drop
    is_open: AtomicBool,

    /// Periodic snapshot worker, when enabled
    scheduler: Option<SnapshotScheduler>,
}

impl Database {
    /// Open the database in `path`, creating it if needed
    ///
    /// Reads `rafdb.toml` from the data directory, writing the default one
    /// first if it is missing.
    ///
    /// There is no process-wide registry: each call builds an independent
    /// instance, and callers share the returned `Arc` instead of opening the
    /// same directory twice.
    ///
    /// # Flow
    ///
    /// 1. Create data directory if needed
    /// 2. Read or create `rafdb.toml`
    /// 3. Load the snapshot and start the snapshot thread
    ///
    /// An unreadable snapshot is moved to `<snapshot_file>.corrupt` and the
    /// database starts empty. If the move fails, the database still starts
    /// empty but with background and shutdown snapshots turned off, so only an
    /// explicit [`checkpoint`](Self::checkpoint) can replace the file.
    ///
    /// # Example
    ///
    /// ```text
    /// use rafdb_engine::Database;
    ///
    /// let db = Database::open("/path/to/data")?;
    /// db.catalog().create("users")?;
    /// ```
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Arc<Self>> {
        let data_dir = path.as_ref().to_path_buf();
        std::fs::create_dir_all(&data_dir)?;

        let config_path = data_dir.join(CONFIG_FILE_NAME);
        RafConfig::write_default_if_missing(&config_path)?;
        let cfg = RafConfig::from_file(&config_path)?;

        Self::open_inner(&data_dir, cfg)
    }

    /// Open the database in `path` with an explicit configuration
    ///
    /// The supplied config is written to `rafdb.toml` so that later
    /// [`Database::open`] calls pick up the same settings.
    pub fn open_with_config<P: AsRef<Path>>(path: P, cfg: RafConfig) -> Result<Arc<Self>> {
        cfg.validate()?;

        let data_dir = path.as_ref().to_path_buf();
        std::fs::create_dir_all(&data_dir)?;
        cfg.write_to_file(&data_dir.join(CONFIG_FILE_NAME))?;

        Self::open_inner(&data_dir, cfg)
    }

    fn open_inner(data_dir: &Path, mut cfg: RafConfig) -> Result<Arc<Self>> {
        let canonical_path = data_dir.canonicalize()?;

        let file = SnapshotFile::new(canonical_path.join(&cfg.snapshot_file));
        let catalog = match file.load(Limits::default()) {
            Ok(catalog) => catalog,
            Err(e) if e.kind() == ErrorKind::CorruptSnapshot => {
                warn!(
                    target: "rafdb::db",
                    path = %file.path().display(),
                    error = %e,
                    "Snapshot is unreadable, starting with an empty catalog"
                );
                if let Err(qe) = file.quarantine() {
                    // The unreadable file stays in place; never write over it.
                    warn!(
                        target: "rafdb::db",
                        path = %file.path().display(),
                        error = %qe,
                        "Could not quarantine snapshot, automatic saves disabled"
                    );
                    cfg.save_on_shutdown = false;
                    cfg.snapshot_interval_secs = 0;
                }
                Catalog::new()
            }
            Err(e) => return Err(e),
        };
        let catalog = Arc::new(catalog);

        let checkpointer = Arc::new(Checkpointer {
            catalog: Arc::clone(&catalog),
            file,
            write_lock: ParkingMutex::new(()),
        });

        let scheduler = match cfg.snapshot_interval() {
            Some(interval) => {
                let worker = Arc::clone(&checkpointer);
                Some(SnapshotScheduler::start(interval, move || {
                    worker.save().map(|_| ())
                })?)
            }
            None => None,
        };

        info!(
            target: "rafdb::db",
            path = ?canonical_path,
            collections = catalog.len(),
            snapshot_interval_secs = cfg.snapshot_interval_secs,
            "Database opened"
        );

        Ok(Arc::new(Self {
            data_dir: canonical_path,
            catalog,
            checkpointer: Some(checkpointer),
            persistence_mode: PersistenceMode::Disk,
            config: cfg,
            is_open: AtomicBool::new(true),
            scheduler,
        }))
    }

    /// Create an in-memory database with no snapshot file
    ///
    /// Each call creates a new, independent instance. Everything is lost when
    /// it is dropped.
    pub fn ephemeral() -> Arc<Self> {
        Arc::new(Self {
            data_dir: PathBuf::new(),
            catalog: Arc::new(Catalog::new()),
            checkpointer: None,
            persistence_mode: PersistenceMode::Ephemeral,
            config: RafConfig::default(),
            is_open: AtomicBool::new(true),
            scheduler: None,
        })
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// The catalog of collections
    pub fn catalog(&self) -> &Arc<Catalog> {
        &self.catalog
    }

    /// Data directory (empty for ephemeral databases)
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Snapshot file location, if disk-backed
    pub fn snapshot_path(&self) -> Option<&Path> {
        self.checkpointer.as_ref().map(|c| c.file.path())
    }

    /// Active configuration
    pub fn config(&self) -> &RafConfig {
        &self.config
    }

    /// Ephemeral or disk-backed
    pub fn persistence_mode(&self) -> PersistenceMode {
        self.persistence_mode
    }

    /// True until [`shutdown`](Self::shutdown) has run
    pub fn is_open(&self) -> bool {
        self.is_open.load(Ordering::SeqCst)
    }

    // ========================================================================
    // Persistence
    // ========================================================================

    /// Save a snapshot of the whole catalog now
    ///
    /// Returns `None` for ephemeral databases, which have nothing to write.
    pub fn checkpoint(&self) -> Result<Option<SnapshotInfo>> {
        match &self.checkpointer {
            Some(checkpointer) => checkpointer.save().map(Some),
            None => Ok(None),
        }
    }

    /// Stop background work and write the final snapshot
    ///
    /// The final snapshot is skipped when `save_on_shutdown` is off. Only the
    /// first call does anything.
    ///
    /// ```text
    /// db.shutdown()?;
    /// assert!(!db.is_open());
    /// ```
    pub fn shutdown(&self) -> Result<()> {
        if !self.is_open.swap(false, Ordering::SeqCst) {
            return Ok(());
        }

        if let Some(scheduler) = &self.scheduler {
            scheduler.stop();
        }

        if self.config.save_on_shutdown {
            self.checkpoint()?;
        }

        info!(target: "rafdb::db", path = ?self.data_dir, "Database shut down");
        Ok(())
    }
}

impl Drop for Database {
    fn drop(&mut self) {
        if let Err(e) = self.shutdown() {
            warn!(
                target: "rafdb::db",
                path = ?self.data_dir,
                error = %e,
                "Final snapshot on drop failed"
            );
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
