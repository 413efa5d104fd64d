//! Integration tests for the catalog and document store.
//!
//! These run against an in-memory `Catalog` (or an ephemeral `Database`) and
//! cover the public behavior end to end: catalog lifecycle, document CRUD,
//! equality queries, and concurrent access.

#[path = "../common/mod.rs"]
mod common;

mod concurrency;
mod query;
