//! Error types for command execution.
//!
//! All errors from command execution are represented by the [`Error`] enum.
//! These errors are:
//! - **Structured**: Each variant has typed fields for error details
//! - **Serializable**: Can be converted to/from JSON
//! - **Lossless**: Every engine error kind maps to its own variant

use serde::{Deserialize, Serialize};

use rafdb_core::ErrorKind;

/// Command execution errors.
///
/// # Categories
///
/// | Category | Variants | Description |
/// |----------|----------|-------------|
/// | Not Found | `CollectionNotFound`, `DocumentNotFound` | Entity doesn't exist |
/// | Exists | `CollectionExists`, `DocumentExists` | Key already taken |
/// | Validation | `InvalidInput` | Bad identifiers or data |
/// | System | `CorruptSnapshot`, `Io` | Snapshot file errors |
///
/// # Example
///
/// ```ignore
/// match executor.execute(cmd) {
///     Ok(output) => { /* handle success */ }
///     Err(Error::DocumentNotFound { id }) => println!("no document '{}'", id),
///     Err(e) => println!("Error: {}", e),
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
pub enum Error {
    // ==================== Not Found ====================
    /// Collection not found
    #[error("collection not found: {collection}")]
    CollectionNotFound { collection: String },

    /// Document not found
    #[error("document not found: {id}")]
    DocumentNotFound { id: String },

    // ==================== Already Exists ====================
    /// Collection already exists
    #[error("collection already exists: {collection}")]
    CollectionExists { collection: String },

    /// Document already exists
    #[error("document already exists: {id}")]
    DocumentExists { id: String },

    // ==================== Validation Errors ====================
    /// Invalid input
    #[error("invalid input: {reason}")]
    InvalidInput { reason: String },

    // ==================== System Errors ====================
    /// Snapshot could not be parsed or validated
    #[error("corrupt snapshot: {reason}")]
    CorruptSnapshot { reason: String },

    /// I/O error
    #[error("I/O error: {reason}")]
    Io { reason: String },
}

impl Error {
    /// Flat error category, matching the engine's [`ErrorKind`].
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::CollectionNotFound { .. } | Error::DocumentNotFound { .. } => {
                ErrorKind::NotFound
            }
            Error::CollectionExists { .. } | Error::DocumentExists { .. } => {
                ErrorKind::AlreadyExists
            }
            Error::InvalidInput { .. } => ErrorKind::InvalidInput,
            Error::CorruptSnapshot { .. } => ErrorKind::CorruptSnapshot,
            Error::Io { .. } => ErrorKind::Io,
        }
    }
}
