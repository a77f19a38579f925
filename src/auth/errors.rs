//! # Auth Errors
//!
//! Error types for the credential gateway boundary and token issuance.
//!
//! Credential outcomes (conflict, unauthorized) stay distinct all the way to
//! the response: they are business results, not failures to be collapsed.
//! Infrastructure problems (key handling, signing, collaborator faults) all
//! surface as server errors and are logged, never swallowed.

use thiserror::Error;

/// Result type for auth operations
pub type AuthResult<T> = Result<T, AuthError>;

/// Credential-gateway and token-issuance errors
#[derive(Debug, Clone, Error)]
pub enum AuthError {
    // ==================
    // Credential Outcomes
    // ==================
    /// Subject identifier already registered
    #[error("Subject already exists")]
    SubjectExists,

    /// Credentials did not verify (generic - never reveals whether the
    /// subject exists or which part of the pair was wrong)
    #[error("Invalid credentials")]
    InvalidCredentials,

    // ==================
    // Infrastructure Errors
    // ==================
    /// Signing key could not be loaded or parsed
    #[error("Signing key unavailable: {0}")]
    KeyUnavailable(String),

    /// The signing operation itself failed
    #[error("Internal error: token signing failed")]
    SigningFailed,

    /// Secret hashing failed inside the gateway
    #[error("Internal error: secret hashing failed")]
    HashingFailed,

    /// The credential gateway failed for an unexpected reason
    #[error("Credential gateway error: {0}")]
    GatewayFailure(String),
}

impl AuthError {
    /// Returns the HTTP status code for this error
    pub fn status_code(&self) -> u16 {
        match self {
            // 401 Unauthorized
            AuthError::InvalidCredentials => 401,

            // 409 Conflict
            AuthError::SubjectExists => 409,

            // 500 Internal Server Error
            AuthError::KeyUnavailable(_) => 500,
            AuthError::SigningFailed => 500,
            AuthError::HashingFailed => 500,
            AuthError::GatewayFailure(_) => 500,
        }
    }

    /// Returns whether the failure is attributable to the client
    pub fn is_client_error(&self) -> bool {
        self.status_code() < 500
    }
}
