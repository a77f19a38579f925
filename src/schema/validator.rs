//! Request validator.
//!
//! Validation semantics:
//! - The request must carry exactly as many fields as the schema flattens to
//! - Every flattened leaf name must be present with a non-empty value
//! - An empty value is indistinguishable from an absent field
//! - Values are opaque strings; nothing is coerced or transformed
//!
//! The validator is a pure decision function: re-running it over the same
//! request map yields the same outcome, and it performs no I/O.

use std::collections::HashMap;

use super::errors::{SchemaResult, ValidateError, ValidateResult};
use super::types::Schema;

/// Validates per-request field maps against one endpoint's declared schema.
///
/// The schema is flattened once at construction, so per-request work is a
/// count comparison plus one lookup per expected field.
#[derive(Debug, Clone)]
pub struct RequestValidator {
    schema_name: String,
    expected: Vec<String>,
}

impl RequestValidator {
    /// Flattens `schema` and prepares a validator for it.
    ///
    /// # Errors
    ///
    /// Returns `SchemaError` if the declaration itself is malformed; see
    /// [`Schema::flatten`].
    pub fn new(schema: &Schema) -> SchemaResult<Self> {
        let expected = schema
            .flatten()?
            .into_iter()
            .map(str::to_string)
            .collect();

        Ok(Self {
            schema_name: schema.name.clone(),
            expected,
        })
    }

    /// Returns the schema name this validator enforces
    pub fn schema_name(&self) -> &str {
        &self.schema_name
    }

    /// Returns the flattened field names, in declaration order
    pub fn expected(&self) -> &[String] {
        &self.expected
    }

    /// Decides ACCEPT/REJECT for one request's field map.
    ///
    /// The count check is strict equality, not a subset check: a request
    /// with unexpected extra fields is rejected exactly like one with
    /// fields missing. Fields are then checked in declaration order, so the
    /// reported field of a multi-field failure is deterministic.
    pub fn validate(&self, fields: &HashMap<String, String>) -> ValidateResult {
        if fields.len() != self.expected.len() {
            return Err(ValidateError::FieldCountMismatch {
                expected: self.expected.len(),
                actual: fields.len(),
            });
        }

        for name in &self.expected {
            match fields.get(name) {
                Some(value) if !value.is_empty() => {}
                _ => return Err(ValidateError::FieldMissingOrEmpty(name.clone())),
            }
        }

        Ok(())
    }
}
