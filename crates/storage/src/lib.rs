//! Storage layer for RafDB
//!
//! This crate implements the in-memory document store with:
//! - Catalog: name → collection registry behind a catalog-wide RwLock
//! - Collection: one collection's documents behind a per-collection RwLock
//! - Filter: single-field typed equality, evaluated by full scan
//! - CatalogStats: collection and document counts
//!
//! # Concurrency
//!
//! Operations on different collections never contend. Within a collection,
//! get/list/query share the read lock; insert/update/delete take the write lock.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod catalog;
pub mod collection;
pub mod query;
pub mod stats;

pub use catalog::Catalog;
pub use collection::Collection;
pub use query::Filter;
pub use stats::CatalogStats;
