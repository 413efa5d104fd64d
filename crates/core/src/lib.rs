//! Core types for RafDB
//!
//! This crate defines the foundational types used throughout the system:
//! - Value: tagged variant for document field values (JSON model)
//! - Map: string-keyed field mapping
//! - Timestamp: microsecond wall-clock timestamps
//! - Document: ID + data + created/updated timestamps
//! - Error: error taxonomy shared by every layer
//! - Limits: identifier and value size limits

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod document;
pub mod error;
pub mod limits;
pub mod timestamp;
pub mod value;

pub use document::Document;
pub use error::{EntityKind, Error, ErrorKind, Result};
pub use limits::{LimitError, Limits};
pub use timestamp::Timestamp;
pub use value::{map_from_json, Map, Value};
