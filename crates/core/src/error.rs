//! Error types for RafDB
//!
//! Every engine operation returns `Result<T>`; none of these errors is fatal
//! to the process. We use `thiserror` for `Display` and `Error` impls.
//!
//! Boundary layers translate errors through [`Error::kind`], which keeps the
//! domain categories distinct (already exists, not found, invalid input,
//! corrupt snapshot) so the mapping to a presentation format is lossless.

use crate::limits::LimitError;
use std::fmt;
use std::io;
use thiserror::Error;

/// Result type alias for RafDB operations
pub type Result<T> = std::result::Result<T, Error>;

/// The kind of entity an error refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    /// A named collection in the catalog
    Collection,
    /// A document inside a collection
    Document,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityKind::Collection => f.write_str("collection"),
            EntityKind::Document => f.write_str("document"),
        }
    }
}

/// Flat error category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Key already present
    AlreadyExists,
    /// Key absent
    NotFound,
    /// Structurally invalid request
    InvalidInput,
    /// Snapshot bytes failed to parse or validate
    CorruptSnapshot,
    /// Filesystem failure while reading or writing a snapshot
    Io,
}

/// Error types for RafDB
#[derive(Debug, Error)]
pub enum Error {
    /// Creating a collection or inserting a document whose key already exists
    #[error("{entity} '{key}' already exists")]
    AlreadyExists {
        /// What kind of key collided
        entity: EntityKind,
        /// The colliding key
        key: String,
    },

    /// Referencing a collection or document that does not exist
    #[error("{entity} '{key}' not found")]
    NotFound {
        /// What kind of key was looked up
        entity: EntityKind,
        /// The missing key
        key: String,
    },

    /// Empty identifiers, empty query field, or data outside limits
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Snapshot bytes are not a valid catalog snapshot
    #[error("Corrupt snapshot: {0}")]
    CorruptSnapshot(String),

    /// I/O error (snapshot file operations)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl Error {
    /// Collection `name` already exists
    pub fn collection_exists(name: impl Into<String>) -> Self {
        Error::AlreadyExists {
            entity: EntityKind::Collection,
            key: name.into(),
        }
    }

    /// Collection `name` does not exist
    pub fn collection_not_found(name: impl Into<String>) -> Self {
        Error::NotFound {
            entity: EntityKind::Collection,
            key: name.into(),
        }
    }

    /// Document `id` already exists
    pub fn document_exists(id: impl Into<String>) -> Self {
        Error::AlreadyExists {
            entity: EntityKind::Document,
            key: id.into(),
        }
    }

    /// Document `id` does not exist
    pub fn document_not_found(id: impl Into<String>) -> Self {
        Error::NotFound {
            entity: EntityKind::Document,
            key: id.into(),
        }
    }

    /// Invalid input with a reason
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        Error::InvalidInput(reason.into())
    }

    /// Corrupt snapshot with a reason
    pub fn corrupt_snapshot(reason: impl Into<String>) -> Self {
        Error::CorruptSnapshot(reason.into())
    }

    /// Flat category of this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::AlreadyExists { .. } => ErrorKind::AlreadyExists,
            Error::NotFound { .. } => ErrorKind::NotFound,
            Error::InvalidInput(_) => ErrorKind::InvalidInput,
            Error::CorruptSnapshot(_) => ErrorKind::CorruptSnapshot,
            Error::Io(_) => ErrorKind::Io,
        }
    }

    /// Entity the error refers to, for `AlreadyExists` and `NotFound`
    pub fn entity(&self) -> Option<EntityKind> {
        match self {
            Error::AlreadyExists { entity, .. } | Error::NotFound { entity, .. } => Some(*entity),
            _ => None,
        }
    }

    /// True if this is `NotFound`
    pub fn is_not_found(&self) -> bool {
        self.kind() == ErrorKind::NotFound
    }

    /// True if this is `AlreadyExists`
    pub fn is_already_exists(&self) -> bool {
        self.kind() == ErrorKind::AlreadyExists
    }
}

impl From<LimitError> for Error {
    fn from(e: LimitError) -> Self {
        Error::InvalidInput(e.to_string())
    }
}
