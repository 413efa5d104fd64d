//! Database-level command handlers.

use std::sync::Arc;

use rafdb_engine::Database;
use tracing::debug;

use crate::{Output, Result};

/// Handle Ping command.
pub fn ping() -> Result<Output> {
    Ok(Output::Pong {
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Handle Stats command.
pub fn stats(db: &Arc<Database>) -> Result<Output> {
    Ok(Output::Stats(db.catalog().stats()))
}

/// Handle Checkpoint command.
pub fn checkpoint(db: &Arc<Database>) -> Result<Output> {
    if let Some(info) = db.checkpoint()? {
        debug!(
            path = %info.path.display(),
            documents = info.documents,
            "Checkpoint command completed"
        );
    }
    Ok(Output::Unit)
}
