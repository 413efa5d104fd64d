//! Error conversion from engine error types.
//!
//! This module provides the conversion from [`rafdb_core::Error`] to the
//! executor's [`Error`] type.

use crate::Error;
use rafdb_core::EntityKind;

/// Convert an engine error to an executor Error.
///
/// The entity kind picks the collection or document variant, so nothing is
/// lost in the conversion.
impl From<rafdb_core::Error> for Error {
    fn from(err: rafdb_core::Error) -> Self {
        match err {
            rafdb_core::Error::NotFound {
                entity: EntityKind::Collection,
                key,
            } => Error::CollectionNotFound { collection: key },
            rafdb_core::Error::NotFound {
                entity: EntityKind::Document,
                key,
            } => Error::DocumentNotFound { id: key },

            rafdb_core::Error::AlreadyExists {
                entity: EntityKind::Collection,
                key,
            } => Error::CollectionExists { collection: key },
            rafdb_core::Error::AlreadyExists {
                entity: EntityKind::Document,
                key,
            } => Error::DocumentExists { id: key },

            rafdb_core::Error::InvalidInput(reason) => Error::InvalidInput { reason },
            rafdb_core::Error::CorruptSnapshot(reason) => Error::CorruptSnapshot { reason },
            rafdb_core::Error::Io(e) => Error::Io {
                reason: e.to_string(),
            },
        }
    }
}
