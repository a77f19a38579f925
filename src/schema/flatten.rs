//! Schema flattening.
//!
//! Flattening turns the declared tree into the flat, ordered list of leaf
//! names a well-formed request must supply. The walk is depth-first in
//! declaration order and pure: the same declaration yields the same ordered
//! output on every call, with no hidden global ordering.

use std::collections::HashSet;

use super::errors::{SchemaError, SchemaResult};
use super::types::{FieldSpec, Schema};

impl Schema {
    /// Returns the ordered leaf field names of the fully flattened tree.
    ///
    /// Leaves emit their own name; groups contribute their subtree's leaves
    /// in declaration order. A group's name is never emitted; only leaves
    /// correspond to request fields.
    ///
    /// # Errors
    ///
    /// Returns `SchemaError` if a field has an empty name
    /// (`UnrecognizedField`) or if two leaves share a name after flattening
    /// (`DuplicateLeaf`). Both indicate a malformed declaration; schemas are
    /// static, so these surface at startup, never per request.
    pub fn flatten(&self) -> SchemaResult<Vec<&str>> {
        let mut names = Vec::new();
        collect(&self.name, &self.fields, &mut names)?;

        let mut seen = HashSet::with_capacity(names.len());
        for name in &names {
            if !seen.insert(*name) {
                return Err(SchemaError::DuplicateLeaf((*name).to_string()));
            }
        }

        Ok(names)
    }
}

/// Walks one level of declarations, recursing into groups.
fn collect<'a>(
    scope: &str,
    fields: &'a [FieldSpec],
    names: &mut Vec<&'a str>,
) -> SchemaResult<()> {
    for field in fields {
        match field {
            FieldSpec::Leaf(name) => {
                if name.is_empty() {
                    return Err(SchemaError::UnrecognizedField(scope.to_string()));
                }
                names.push(name.as_str());
            }
            FieldSpec::Group(name, children) => {
                if name.is_empty() {
                    return Err(SchemaError::UnrecognizedField(scope.to_string()));
                }
                collect(name, children, names)?;
            }
        }
    }

    Ok(())
}
