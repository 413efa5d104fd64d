//! Collection command handlers.

use std::sync::Arc;

use rafdb_engine::Database;

use crate::{Output, Result};

/// Handle CollectionCreate command.
pub fn create(db: &Arc<Database>, name: String) -> Result<Output> {
    db.catalog().create(&name)?;
    Ok(Output::Unit)
}

/// Handle CollectionDelete command.
pub fn delete(db: &Arc<Database>, name: String) -> Result<Output> {
    db.catalog().delete(&name)?;
    Ok(Output::Unit)
}

/// Handle CollectionList command.
pub fn list(db: &Arc<Database>) -> Result<Output> {
    Ok(Output::Names(db.catalog().list()))
}
