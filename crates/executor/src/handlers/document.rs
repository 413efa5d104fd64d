//! Document command handlers.
//!
//! Each handler resolves the collection handle first (a brief catalog read
//! lock), then runs the document operation under that collection's own lock.

use std::sync::Arc;

use rafdb_core::{Document, Map, Value};
use rafdb_engine::Database;
use rafdb_storage::Filter;

use crate::{Output, Result};

fn documents(docs: Vec<Arc<Document>>) -> Output {
    Output::Documents(docs.iter().map(|doc| (**doc).clone()).collect())
}

/// Handle DocumentInsert command.
pub fn insert(db: &Arc<Database>, collection: String, id: String, data: Map) -> Result<Output> {
    let doc = db.catalog().get(&collection)?.insert(&id, data)?;
    Ok(Output::Document((*doc).clone()))
}

/// Handle DocumentGet command.
pub fn get(db: &Arc<Database>, collection: String, id: String) -> Result<Output> {
    let doc = db.catalog().get(&collection)?.get(&id)?;
    Ok(Output::Document((*doc).clone()))
}

/// Handle DocumentUpdate command.
pub fn update(db: &Arc<Database>, collection: String, id: String, data: Map) -> Result<Output> {
    let doc = db.catalog().get(&collection)?.update(&id, data)?;
    Ok(Output::Document((*doc).clone()))
}

/// Handle DocumentDelete command.
pub fn delete(db: &Arc<Database>, collection: String, id: String) -> Result<Output> {
    db.catalog().get(&collection)?.delete(&id)?;
    Ok(Output::Unit)
}

/// Handle DocumentList command.
pub fn list(db: &Arc<Database>, collection: String) -> Result<Output> {
    let docs = db.catalog().get(&collection)?.list()?;
    Ok(documents(docs))
}

/// Handle DocumentQuery command.
pub fn query(
    db: &Arc<Database>,
    collection: String,
    field: String,
    value: Value,
) -> Result<Output> {
    let filter = Filter::eq(field, value)?;
    let docs = db.catalog().get(&collection)?.find(&filter)?;
    Ok(documents(docs))
}
