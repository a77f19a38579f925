//! Schema type definitions.
//!
//! An endpoint declares the exact fields it accepts as a `Schema`: a named,
//! ordered tree in which each node is either a leaf (one expected value) or
//! a group contributing the leaves of its own subtree. Fields live in a
//! `Vec`, so declaration order is the iteration order and flattening and
//! validation stay reproducible across runs.

/// A single field declaration inside a schema tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldSpec {
    /// Leaf field mapping to a single scalar value in the request
    Leaf(String),
    /// Named group of nested fields, contributing its subtree's leaves
    Group(String, Vec<FieldSpec>),
}

impl FieldSpec {
    /// Create a leaf field
    pub fn leaf(name: impl Into<String>) -> Self {
        FieldSpec::Leaf(name.into())
    }

    /// Create a group field with the given children
    pub fn group(name: impl Into<String>, children: Vec<FieldSpec>) -> Self {
        FieldSpec::Group(name.into(), children)
    }
}

/// Complete request schema for one endpoint
///
/// Schemas are declared once at startup and never mutated; the validator
/// captures the flattened field list, so a `Schema` itself is only consulted
/// during state construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schema {
    /// Schema name, used in diagnostics
    pub name: String,
    /// Field declarations in written order
    pub fields: Vec<FieldSpec>,
}

impl Schema {
    /// Create a new schema
    pub fn new(name: impl Into<String>, fields: Vec<FieldSpec>) -> Self {
        Self {
            name: name.into(),
            fields,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leaf_constructor() {
        let field = FieldSpec::leaf("UserID");
        assert_eq!(field, FieldSpec::Leaf("UserID".to_string()));
    }

    #[test]
    fn test_group_constructor_keeps_child_order() {
        let group = FieldSpec::group(
            "credentials",
            vec![FieldSpec::leaf("UserID"), FieldSpec::leaf("Password")],
        );

        match group {
            FieldSpec::Group(name, children) => {
                assert_eq!(name, "credentials");
                assert_eq!(children[0], FieldSpec::Leaf("UserID".to_string()));
                assert_eq!(children[1], FieldSpec::Leaf("Password".to_string()));
            }
            FieldSpec::Leaf(_) => panic!("expected a group"),
        }
    }

    #[test]
    fn test_schema_keeps_declaration_order() {
        let schema = Schema::new(
            "create_subject",
            vec![
                FieldSpec::leaf("UserID"),
                FieldSpec::leaf("Password"),
                FieldSpec::leaf("Email"),
            ],
        );

        assert_eq!(schema.name, "create_subject");
        assert_eq!(schema.fields.len(), 3);
        assert_eq!(schema.fields[2], FieldSpec::Leaf("Email".to_string()));
    }
}
