//! Request-shape validation subsystem.
//!
//! Each endpoint declares the exact fields it accepts as a [`Schema`]: a
//! named, ordered tree of leaf and group fields. The tree flattens to the
//! ordered leaf names a request must supply, and a [`RequestValidator`]
//! captures that flattened set once to accept or reject incoming field maps.
//!
//! # Design Principles
//!
//! - Schemas are static, declared once per endpoint at startup
//! - Flattening is deterministic: declaration order in, declaration order out
//! - Field counts must match exactly; unexpected fields are rejected
//! - An empty value is indistinguishable from an absent field
//! - Values are opaque strings; no coercion happens in this layer

mod errors;
mod flatten;
mod types;
mod validator;

pub use errors::{SchemaError, SchemaResult, ValidateError, ValidateResult};
pub use types::{FieldSpec, Schema};
pub use validator::RequestValidator;
