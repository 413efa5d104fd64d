//! Command enum defining all RafDB operations.
//!
//! Commands are the "instruction set" of RafDB. Every operation that can be
//! performed on the database is represented as a variant of this enum.
//!
//! Commands are:
//! - **Self-contained**: All parameters needed for execution are in the variant
//! - **Serializable**: Can be converted to/from JSON for cross-language use
//! - **Pure data**: No closures or executable code

use serde::{Deserialize, Serialize};

use rafdb_core::{Map, Value};

/// A command is a self-contained, serializable operation.
///
/// # Command Categories
///
/// | Category | Count | Description |
/// |----------|-------|-------------|
/// | Database | 3 | Health, statistics, checkpoint |
/// | Collection | 3 | Catalog operations |
/// | Document | 6 | Document CRUD and equality query |
///
/// # Example
///
/// ```ignore
/// use rafdb_executor::{Command, Value};
///
/// let cmd = Command::DocumentQuery {
///     collection: "users".into(),
///     field: "age".into(),
///     value: Value::from(30),
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub enum Command {
    // ==================== Database (3) ====================
    /// Check that the database is reachable.
    /// Returns: `Output::Pong`
    Ping,

    /// Collection and document counts.
    /// Returns: `Output::Stats`
    Stats,

    /// Write a snapshot now (no-op for ephemeral databases).
    /// Returns: `Output::Unit`
    Checkpoint,

    // ==================== Collection (3) ====================
    /// Create an empty collection.
    /// Returns: `Output::Unit`
    CollectionCreate { name: String },

    /// Delete a collection and all its documents.
    /// Returns: `Output::Unit`
    CollectionDelete { name: String },

    /// List collection names, sorted.
    /// Returns: `Output::Names`
    CollectionList,

    // ==================== Document (6) ====================
    /// Insert a new document.
    /// Returns: `Output::Document`
    DocumentInsert {
        collection: String,
        id: String,
        data: Map,
    },

    /// Fetch one document.
    /// Returns: `Output::Document`
    DocumentGet { collection: String, id: String },

    /// Replace a document's data.
    /// Returns: `Output::Document`
    DocumentUpdate {
        collection: String,
        id: String,
        data: Map,
    },

    /// Remove a document.
    /// Returns: `Output::Unit`
    DocumentDelete { collection: String, id: String },

    /// All documents in a collection.
    /// Returns: `Output::Documents`
    DocumentList { collection: String },

    /// Documents whose top-level `field` equals `value`.
    /// Returns: `Output::Documents`
    DocumentQuery {
        collection: String,
        field: String,
        value: Value,
    },
}

impl Command {
    /// Returns `true` if this command changes database state.
    pub fn is_write(&self) -> bool {
        matches!(
            self,
            Command::Checkpoint
                | Command::CollectionCreate { .. }
                | Command::CollectionDelete { .. }
                | Command::DocumentInsert { .. }
                | Command::DocumentUpdate { .. }
                | Command::DocumentDelete { .. }
        )
    }

    /// Returns the variant name as a static string.
    pub fn name(&self) -> &'static str {
        match self {
            Command::Ping => "Ping",
            Command::Stats => "Stats",
            Command::Checkpoint => "Checkpoint",
            Command::CollectionCreate { .. } => "CollectionCreate",
            Command::CollectionDelete { .. } => "CollectionDelete",
            Command::CollectionList => "CollectionList",
            Command::DocumentInsert { .. } => "DocumentInsert",
            Command::DocumentGet { .. } => "DocumentGet",
            Command::DocumentUpdate { .. } => "DocumentUpdate",
            Command::DocumentDelete { .. } => "DocumentDelete",
            Command::DocumentList { .. } => "DocumentList",
            Command::DocumentQuery { .. } => "DocumentQuery",
        }
    }
}
