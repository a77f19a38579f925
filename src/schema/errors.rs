//! # Schema Errors
//!
//! Error types for schema declaration and request validation.
//!
//! Declaration errors (`SchemaError`) abort startup: endpoint schemas are
//! static, so a malformed tree is a programming error caught before the
//! service accepts traffic. Validation errors (`ValidateError`) are
//! per-request client errors and never terminate anything.

use thiserror::Error;

/// Result type for schema declaration operations
pub type SchemaResult<T> = Result<T, SchemaError>;

/// Declaration-integrity errors surfaced while flattening a schema
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    /// Field is neither a usable leaf nor a well-formed named group.
    /// Carries the scope (schema or enclosing group) declaring the field.
    #[error("'{0}' declares a field that is neither a named leaf nor a named group")]
    UnrecognizedField(String),

    /// The flattened tree would contain the same leaf name twice
    #[error("leaf field '{0}' is declared more than once")]
    DuplicateLeaf(String),
}

/// Result type for request validation
pub type ValidateResult = Result<(), ValidateError>;

/// Request-shape rejections
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidateError {
    /// The request carries a different number of fields than the schema
    /// declares. Unexpected extra fields are rejected exactly like missing
    /// ones, so nothing unvalidated can ride along with a request.
    #[error("request has {actual} fields, expected {expected}")]
    FieldCountMismatch { expected: usize, actual: usize },

    /// A declared field is absent, or present with an empty value
    #[error("required field '{0}' is missing or empty")]
    FieldMissingOrEmpty(String),
}

impl ValidateError {
    /// Returns the HTTP status code for this rejection
    ///
    /// Shape errors are always client errors: the request does not conform
    /// to the declared schema and retrying it unchanged cannot succeed.
    pub fn status_code(&self) -> u16 {
        match self {
            ValidateError::FieldCountMismatch { .. } => 400,
            ValidateError::FieldMissingOrEmpty(_) => 400,
        }
    }
}
