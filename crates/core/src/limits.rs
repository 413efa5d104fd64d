//! Size limits for identifiers and document data
//!
//! This module defines the limits enforced on every write and on snapshot
//! decoding. Violations surface as `InvalidInput` (or `CorruptSnapshot` when
//! found while decoding).
//!
//! The nesting limit keeps every accepted document well inside the JSON
//! parser's recursion limit, so anything that can be stored can be reloaded.

use crate::value::{Map, Value};
use thiserror::Error;

/// Size limits for identifiers and values
#[derive(Debug, Clone)]
pub struct Limits {
    /// Maximum collection name / document ID length in bytes (default: 1024)
    pub max_key_bytes: usize,

    /// Maximum string length in bytes (default: 16MB)
    pub max_string_bytes: usize,

    /// Maximum array length (default: 1M elements)
    pub max_array_len: usize,

    /// Maximum object entries (default: 1M entries)
    pub max_object_entries: usize,

    /// Maximum nesting depth below the document's top-level fields (default: 64)
    pub max_nesting_depth: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Limits {
            max_key_bytes: 1024,
            max_string_bytes: 16 * 1024 * 1024, // 16MB
            max_array_len: 1_000_000,
            max_object_entries: 1_000_000,
            max_nesting_depth: 64,
        }
    }
}

impl Limits {
    /// Create limits with small values for testing
    pub fn with_small_limits() -> Self {
        Limits {
            max_key_bytes: 16,
            max_string_bytes: 100,
            max_array_len: 10,
            max_object_entries: 10,
            max_nesting_depth: 3,
        }
    }

    /// Validate a collection name or document ID
    ///
    /// Keys must be non-empty and at most `max_key_bytes` long.
    pub fn validate_key(&self, key: &str) -> Result<(), LimitError> {
        if key.is_empty() {
            return Err(LimitError::EmptyKey);
        }
        let len = key.len();
        if len > self.max_key_bytes {
            return Err(LimitError::KeyTooLong {
                actual: len,
                max: self.max_key_bytes,
            });
        }
        Ok(())
    }

    /// Validate a document's data mapping
    pub fn validate_data(&self, data: &Map) -> Result<(), LimitError> {
        self.validate_object(data, 0)
    }

    /// Validate a single value against size limits
    ///
    /// This validates:
    /// - Numbers are finite
    /// - String length
    /// - Array length
    /// - Object entries count
    /// - Nesting depth (recursive)
    pub fn validate_value(&self, value: &Value) -> Result<(), LimitError> {
        self.validate_value_impl(value, 0)
    }

    fn validate_object(&self, obj: &Map, depth: usize) -> Result<(), LimitError> {
        if obj.len() > self.max_object_entries {
            return Err(LimitError::ValueTooLarge {
                reason: "object_too_many_entries",
                actual: obj.len(),
                max: self.max_object_entries,
            });
        }
        for (k, v) in obj {
            if k.len() > self.max_string_bytes {
                return Err(LimitError::ValueTooLarge {
                    reason: "field_name_too_long",
                    actual: k.len(),
                    max: self.max_string_bytes,
                });
            }
            self.validate_value_impl(v, depth + 1)?;
        }
        Ok(())
    }

    fn validate_value_impl(&self, value: &Value, depth: usize) -> Result<(), LimitError> {
        if depth > self.max_nesting_depth {
            return Err(LimitError::NestingTooDeep {
                actual: depth,
                max: self.max_nesting_depth,
            });
        }

        match value {
            Value::Null | Value::Bool(_) => Ok(()),

            Value::Number(n) => {
                if !n.is_finite() {
                    return Err(LimitError::NonFiniteNumber);
                }
                Ok(())
            }

            Value::String(s) => {
                if s.len() > self.max_string_bytes {
                    return Err(LimitError::ValueTooLarge {
                        reason: "string_too_long",
                        actual: s.len(),
                        max: self.max_string_bytes,
                    });
                }
                Ok(())
            }

            Value::Array(arr) => {
                if arr.len() > self.max_array_len {
                    return Err(LimitError::ValueTooLarge {
                        reason: "array_too_long",
                        actual: arr.len(),
                        max: self.max_array_len,
                    });
                }
                for v in arr {
                    self.validate_value_impl(v, depth + 1)?;
                }
                Ok(())
            }

            Value::Object(obj) => self.validate_object(obj, depth),
        }
    }
}

/// Limit validation errors
#[derive(Debug, Error, PartialEq)]
pub enum LimitError {
    /// Identifier is empty
    #[error("identifier must not be empty")]
    EmptyKey,

    /// Identifier exceeds maximum length
    #[error("identifier too long: {actual} bytes exceeds maximum {max}")]
    KeyTooLong {
        /// Actual key length in bytes
        actual: usize,
        /// Maximum allowed length
        max: usize,
    },

    /// Value exceeds size limits
    #[error("value too large ({reason}): {actual} exceeds maximum {max}")]
    ValueTooLarge {
        /// Reason code for the violation
        reason: &'static str,
        /// Actual size
        actual: usize,
        /// Maximum allowed size
        max: usize,
    },

    /// Value nesting exceeds maximum depth
    #[error("nesting too deep: {actual} levels exceeds maximum {max}")]
    NestingTooDeep {
        /// Actual nesting depth
        actual: usize,
        /// Maximum allowed depth
        max: usize,
    },

    /// NaN or infinity
    #[error("numbers must be finite")]
    NonFiniteNumber,
}
