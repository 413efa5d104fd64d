//! Snapshot file I/O
//!
//! Writes are crash-safe: bytes go to `<file>.tmp` in the same directory, are
//! fsynced, and then renamed over the real path. A crash before the rename
//! leaves the previous snapshot untouched; a crash after it leaves the new one.

use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use rafdb_core::{Limits, Result};
use rafdb_storage::Catalog;
use tracing::{debug, info, warn};

use crate::snapshot;
use crate::snapshot_types::SnapshotInfo;

/// Handle to a snapshot file on disk
#[derive(Debug, Clone)]
pub struct SnapshotFile {
    path: PathBuf,
}

impl SnapshotFile {
    /// Wrap a snapshot path; nothing is touched until read or written
    pub fn new(path: impl Into<PathBuf>) -> Self {
        SnapshotFile { path: path.into() }
    }

    /// Path of the snapshot file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// True if the snapshot file exists
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    fn corrupt_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".corrupt");
        self.path.with_file_name(name)
    }

    /// Read the raw snapshot bytes, or `None` if there is no file
    pub fn read(&self) -> Result<Option<Vec<u8>>> {
        match fs::read(&self.path) {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Replace the file contents atomically
    pub fn write_atomic(&self, bytes: &[u8]) -> Result<()> {
        let temp_path = self.temp_path();

        debug!(
            final_path = %self.path.display(),
            temp_path = %temp_path.display(),
            "Starting atomic snapshot write"
        );

        if temp_path.exists() {
            warn!(path = %temp_path.display(), "Removing stale temp file");
            let _ = fs::remove_file(&temp_path);
        }

        if let Err(e) = write_and_sync(&temp_path, bytes) {
            warn!(
                temp_path = %temp_path.display(),
                error = %e,
                "Write failed, cleaning up temp file"
            );
            let _ = fs::remove_file(&temp_path);
            return Err(e.into());
        }

        if let Err(e) = fs::rename(&temp_path, &self.path) {
            warn!(
                temp_path = %temp_path.display(),
                error = %e,
                "Rename failed, cleaning up temp file"
            );
            let _ = fs::remove_file(&temp_path);
            return Err(e.into());
        }

        sync_parent_dir(&self.path);
        debug!(path = %self.path.display(), "Atomic rename completed");
        Ok(())
    }

    /// Load the catalog stored in this file
    ///
    /// A missing file yields an empty catalog. An unreadable or invalid file
    /// fails with `CorruptSnapshot`.
    pub fn load(&self, limits: Limits) -> Result<Catalog> {
        let Some(bytes) = self.read()? else {
            info!(path = %self.path.display(), "No snapshot found, starting empty");
            return Ok(Catalog::with_limits(limits));
        };

        let catalog = snapshot::decode_with_limits(&bytes, limits)?;
        info!(
            path = %self.path.display(),
            size_bytes = bytes.len(),
            collections = catalog.len(),
            "Loaded snapshot"
        );
        Ok(catalog)
    }

    /// Write the whole catalog to this file
    pub fn save(&self, catalog: &Catalog) -> Result<SnapshotInfo> {
        let captured = snapshot::capture(catalog);
        let bytes = snapshot::to_bytes(&captured)?;
        self.write_atomic(&bytes)?;

        let info = SnapshotInfo {
            path: self.path.clone(),
            size_bytes: bytes.len() as u64,
            collections: captured.collections.len(),
            documents: captured.document_count(),
        };
        info!(
            path = %info.path.display(),
            size_bytes = info.size_bytes,
            collections = info.collections,
            documents = info.documents,
            "Snapshot saved"
        );
        Ok(info)
    }

    /// Move an unusable snapshot aside to `<file>.corrupt`
    ///
    /// Returns the new location. An older quarantined file is replaced.
    pub fn quarantine(&self) -> Result<PathBuf> {
        let target = self.corrupt_path();
        fs::rename(&self.path, &target)?;
        warn!(
            path = %self.path.display(),
            moved_to = %target.display(),
            "Quarantined corrupt snapshot"
        );
        Ok(target)
    }
}

fn write_and_sync(path: &Path, bytes: &[u8]) -> io::Result<()> {
    let mut file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)?;
    file.write_all(bytes)?;
    file.sync_all()
}

/// Best effort: makes the rename itself durable on platforms that allow it.
fn sync_parent_dir(path: &Path) {
    let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) else {
        return;
    };
    if let Ok(dir) = File::open(parent) {
        let _ = dir.sync_all();
    }
}

/// Load a catalog from `path` with default limits
pub fn load_catalog(path: impl AsRef<Path>) -> Result<Catalog> {
    SnapshotFile::new(path.as_ref()).load(Limits::default())
}

/// Save `catalog` to `path`
pub fn save_catalog(catalog: &Catalog, path: impl AsRef<Path>) -> Result<SnapshotInfo> {
    SnapshotFile::new(path.as_ref()).save(catalog)
}
