//! # Authentication Module
//!
//! Credential storage, verification, and identity token issuance.
//!
//! ## Design Principles
//! - Passwords are hashed with a per-subject salt; plaintext is never stored
//! - Unknown subject and wrong password are indistinguishable to callers
//! - Conflict (subject exists) and failure are distinct outcomes, never folded
//! - Tokens carry exactly five claims and a fixed seven-day validity
//! - The signing key loads once at startup; a bad key stops the process

mod crypto;
mod errors;
mod gateway;
mod jwt;

pub use crypto::{hash_password, verify_password};
pub use errors::{AuthError, AuthResult};
pub use gateway::{CredentialGateway, Credentials, MemoryGateway, NewSubject, SubjectRecord};
pub use jwt::{TokenClaims, TokenConfig, TokenIssuer};
