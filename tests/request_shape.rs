//! Request Shape Tests
//!
//! Crate-level invariants of schema flattening and request validation:
//! - Flattening is deterministic and preserves declaration order
//! - Group names contribute their leaves, never themselves
//! - Validation demands exactly the declared fields, no more, no fewer
//! - Blank values are rejected like missing fields

use std::collections::HashMap;

use authgate::http_server::{authenticate_schema, create_subject_schema};
use authgate::schema::{FieldSpec, RequestValidator, Schema, SchemaError, ValidateError};

// =============================================================================
// Helper Functions
// =============================================================================

fn fields(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

// =============================================================================
// Flattening Tests
// =============================================================================

/// Declaring A, B, C yields exactly [A, B, C], length 3.
#[test]
fn test_flatten_preserves_declaration_order() {
    let schema = Schema::new(
        "ordered",
        vec![
            FieldSpec::leaf("A"),
            FieldSpec::leaf("B"),
            FieldSpec::leaf("C"),
        ],
    );

    let flat = schema.flatten().unwrap();
    assert_eq!(flat, vec!["A", "B", "C"]);
    assert_eq!(flat.len(), 3);
}

/// Same declaration flattens identically every time.
#[test]
fn test_flatten_is_deterministic() {
    let schema = create_subject_schema();
    let first = schema.flatten().unwrap();

    for _ in 0..100 {
        assert_eq!(schema.flatten().unwrap(), first);
    }
}

/// A group contributes its leaves in place; its own name never appears.
#[test]
fn test_group_names_never_flatten() {
    let schema = create_subject_schema();
    let flat = schema.flatten().unwrap();

    assert_eq!(flat, vec!["UserID", "Password", "Email"]);
    assert!(!flat.contains(&"credentials"));
}

/// The same leaf name twice, even across nesting levels, is a declaration
/// error.
#[test]
fn test_duplicate_leaf_across_groups_rejected() {
    let schema = Schema::new(
        "clashing",
        vec![
            FieldSpec::group("outer", vec![FieldSpec::leaf("UserID")]),
            FieldSpec::leaf("UserID"),
        ],
    );

    assert_eq!(
        schema.flatten(),
        Err(SchemaError::DuplicateLeaf("UserID".to_string()))
    );
}

/// A nameless field can be neither matched nor reported; the declaration is
/// refused before any validator is built.
#[test]
fn test_unnamed_field_rejected_at_startup() {
    let schema = Schema::new("broken", vec![FieldSpec::leaf("")]);

    assert!(matches!(
        schema.flatten(),
        Err(SchemaError::UnrecognizedField(_))
    ));
    assert!(RequestValidator::new(&schema).is_err());
}

// =============================================================================
// Validation Tests
// =============================================================================

/// A request carrying exactly the declared fields with non-empty values
/// passes.
#[test]
fn test_create_request_accepted() {
    let validator = RequestValidator::new(&create_subject_schema()).unwrap();
    let request = fields(&[
        ("UserID", "bob"),
        ("Password", "hunter2"),
        ("Email", "bob@example.com"),
    ]);

    assert_eq!(validator.validate(&request), Ok(()));
}

/// One unexpected extra field fails the count check even though every
/// declared field is present and filled.
#[test]
fn test_extra_field_rejected() {
    let validator = RequestValidator::new(&create_subject_schema()).unwrap();
    let request = fields(&[
        ("UserID", "bob"),
        ("Password", "hunter2"),
        ("Email", "bob@example.com"),
        ("Role", "admin"),
    ]);

    assert_eq!(
        validator.validate(&request),
        Err(ValidateError::FieldCountMismatch {
            expected: 3,
            actual: 4,
        })
    );
}

/// A present-but-blank value is indistinguishable from an absent field.
#[test]
fn test_blank_password_rejected_like_missing() {
    let validator = RequestValidator::new(&authenticate_schema()).unwrap();
    let request = fields(&[("UserID", "bob"), ("Password", "")]);

    assert_eq!(
        validator.validate(&request),
        Err(ValidateError::FieldMissingOrEmpty("Password".to_string()))
    );
}

/// The count check fires before per-field checks; a one-field login request
/// reports the mismatch, not a specific field.
#[test]
fn test_missing_field_reported_as_count_mismatch() {
    let validator = RequestValidator::new(&authenticate_schema()).unwrap();
    let request = fields(&[("UserID", "bob")]);

    assert_eq!(
        validator.validate(&request),
        Err(ValidateError::FieldCountMismatch {
            expected: 2,
            actual: 1,
        })
    );
}

/// Right count, wrong name: the missing declared field is reported.
#[test]
fn test_misnamed_field_rejected() {
    let validator = RequestValidator::new(&authenticate_schema()).unwrap();
    let request = fields(&[("UserID", "bob"), ("Passwort", "hunter2")]);

    assert_eq!(
        validator.validate(&request),
        Err(ValidateError::FieldMissingOrEmpty("Password".to_string()))
    );
}

/// The login schema is a strict subset of the create schema, yet a create
/// request does not pass login validation: strict equality cuts both ways.
#[test]
fn test_create_request_fails_login_schema() {
    let validator = RequestValidator::new(&authenticate_schema()).unwrap();
    let request = fields(&[
        ("UserID", "bob"),
        ("Password", "hunter2"),
        ("Email", "bob@example.com"),
    ]);

    assert_eq!(
        validator.validate(&request),
        Err(ValidateError::FieldCountMismatch {
            expected: 2,
            actual: 3,
        })
    );
}
