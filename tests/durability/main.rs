//! Integration tests for snapshot persistence.
//!
//! These cover the on-disk guarantees: what a saved snapshot contains, that
//! loading reproduces the catalog, and how missing or damaged files behave.

#[path = "../common/mod.rs"]
mod common;

mod corruption;
mod format;
mod snapshot_lifecycle;
