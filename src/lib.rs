//! authgate - a schema-validated authentication gateway
//!
//! Accepts subject-creation and login requests over HTTP, validates that
//! each request carries exactly the fields its endpoint declares, delegates
//! credential storage and verification to a pluggable gateway, and issues
//! signed, time-bounded identity tokens on successful login.

pub mod auth;
pub mod http_server;
pub mod schema;
