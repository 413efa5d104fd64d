//! The Executor - single entry point to RafDB's engine.
//!
//! The Executor is a stateless dispatcher that routes commands to the
//! appropriate handlers and converts results to outputs.

use std::sync::Arc;

use rafdb_engine::Database;
use tracing::trace;

use crate::handlers::{collection, database, document};
use crate::{Command, Output, Result};

/// The command executor - single entry point to RafDB's engine.
///
/// The Executor is **stateless**: it holds a reference to the database but
/// maintains no state of its own. All state lives in the engine.
///
/// # Thread Safety
///
/// Executor is `Send + Sync` and can be shared across threads.
///
/// # Example
///
/// ```ignore
/// use rafdb_executor::{Command, Executor};
/// use rafdb_engine::Database;
///
/// let executor = Executor::new(Database::ephemeral());
///
/// executor.execute(Command::CollectionCreate { name: "users".into() })?;
///
/// let results = executor.execute_many(vec![
///     Command::CollectionList,
///     Command::Stats,
/// ]);
/// ```
#[derive(Debug, Clone)]
pub struct Executor {
    db: Arc<Database>,
}

impl Executor {
    /// Create a new executor wrapping a database.
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    /// Execute a single command.
    ///
    /// Returns the command result or an error.
    pub fn execute(&self, cmd: Command) -> Result<Output> {
        trace!(command = cmd.name(), "Executing command");
        let db = &self.db;
        match cmd {
            Command::Ping => database::ping(),
            Command::Stats => database::stats(db),
            Command::Checkpoint => database::checkpoint(db),

            Command::CollectionCreate { name } => collection::create(db, name),
            Command::CollectionDelete { name } => collection::delete(db, name),
            Command::CollectionList => collection::list(db),

            Command::DocumentInsert {
                collection,
                id,
                data,
            } => document::insert(db, collection, id, data),
            Command::DocumentGet { collection, id } => document::get(db, collection, id),
            Command::DocumentUpdate {
                collection,
                id,
                data,
            } => document::update(db, collection, id, data),
            Command::DocumentDelete { collection, id } => document::delete(db, collection, id),
            Command::DocumentList { collection } => document::list(db, collection),
            Command::DocumentQuery {
                collection,
                field,
                value,
            } => document::query(db, collection, field, value),
        }
    }

    /// Execute multiple commands sequentially.
    ///
    /// Each command runs independently; a failure does not stop the batch.
    ///
    /// ```ignore
    /// let results = executor.execute_many(vec![cmd1, cmd2, cmd3]);
    /// // results[0] corresponds to cmd1, etc.
    /// ```
    pub fn execute_many(&self, cmds: Vec<Command>) -> Vec<Result<Output>> {
        cmds.into_iter().map(|cmd| self.execute(cmd)).collect()
    }

    /// Get a reference to the underlying database.
    pub fn database(&self) -> &Arc<Database> {
        &self.db
    }
}
