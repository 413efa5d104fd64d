//! Output enum for command execution results.
//!
//! Every command produces exactly one output type. This mapping is deterministic:
//! the same command always produces the same output variant (though the values
//! may differ based on database state).

use serde::{Deserialize, Serialize};

use rafdb_core::Document;
use rafdb_storage::CatalogStats;

/// Successful command execution results.
///
/// Each [`Command`](crate::Command) variant maps to exactly one `Output` variant.
///
/// # Example
///
/// ```text
/// match executor.execute(Command::DocumentGet { collection, id })? {
///     Output::Document(doc) => println!("{}: {:?}", doc.id, doc.data),
///     _ => unreachable!("DocumentGet always returns Document"),
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Output {
    /// No return value (create, delete, checkpoint)
    Unit,

    /// Ping response
    Pong {
        /// Database engine version string.
        version: String,
    },

    /// List of names (collection list)
    Names(Vec<String>),

    /// A single document
    Document(Document),

    /// Several documents, in no particular order
    Documents(Vec<Document>),

    /// Catalog statistics
    Stats(CatalogStats),
}
