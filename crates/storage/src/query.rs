//! Single-field equality filter
//!
//! A [`Filter`] selects documents whose top-level field `field` is present and
//! equals `value` under the value model's typed equality:
//!
//! - `Number(30)` matches `30` and `30.0` (one canonical numeric form)
//! - `Number(30)` does not match `String("30")`
//! - `Bool(true)` does not match `String("true")`
//! - A missing field never matches, not even `Null`
//! - Arrays and objects match by structure
//!
//! Type mismatches are non-matches, never errors. There is no index; evaluation
//! is a full scan over the collection.

use rafdb_core::{Document, Error, Result, Value};

/// Equality filter on one top-level field
#[derive(Debug, Clone, PartialEq)]
pub struct Filter {
    field: String,
    value: Value,
}

impl Filter {
    /// Build an equality filter
    ///
    /// Fails with `InvalidInput` if `field` is empty.
    pub fn eq(field: impl Into<String>, value: impl Into<Value>) -> Result<Self> {
        let field = field.into();
        if field.is_empty() {
            return Err(Error::invalid_input("query field must not be empty"));
        }
        Ok(Filter {
            field,
            value: value.into(),
        })
    }

    /// Field name this filter inspects
    pub fn field(&self) -> &str {
        &self.field
    }

    /// Value the field must equal
    pub fn value(&self) -> &Value {
        &self.value
    }

    /// True if the document matches
    pub fn matches(&self, doc: &Document) -> bool {
        doc.field(&self.field) == Some(&self.value)
    }
}
