//! # Credential Gateway
//!
//! Boundary to the collaborator that owns subject records. The gateway
//! answers exactly two questions: "create this subject" and "do these
//! credentials verify". Calls are synchronous and single-shot; a failure
//! maps straight to a response outcome, with no retry anywhere on this side
//! of the boundary.
//!
//! `MemoryGateway` is the reference implementation backing the server binary
//! and the tests; anything that stores subjects durably can replace it by
//! implementing [`CredentialGateway`].

use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::crypto::{hash_password, verify_password};
use super::errors::{AuthError, AuthResult};

/// Subject identifier and secret, as supplied by a validated request
///
/// Credentials exist only for the duration of a single gateway call; the
/// core never stores them.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub user_id: String,
    pub password: String,
}

/// Creation-time payload: credentials plus profile attributes
#[derive(Debug, Clone)]
pub struct NewSubject {
    pub credentials: Credentials,
    pub email: String,
}

/// Stored subject record
#[derive(Debug, Clone)]
pub struct SubjectRecord {
    /// Internal record identifier
    pub id: Uuid,

    /// Login identifier, unique across the store
    pub user_id: String,

    /// Argon2id password hash (never plaintext)
    pub password_hash: String,

    /// Profile attribute captured at creation
    pub email: String,

    /// When the subject was created
    pub created_at: DateTime<Utc>,
}

/// Credential gateway trait
///
/// Abstracts subject creation and credential verification. Both calls are
/// black boxes to the caller: outcomes are reported through `AuthError`
/// variants and nothing else escapes the boundary.
pub trait CredentialGateway: Send + Sync {
    /// Create a new subject
    ///
    /// # Errors
    ///
    /// `SubjectExists` when the identifier is already registered;
    /// `GatewayFailure` for anything operational.
    fn create_subject(&self, subject: NewSubject) -> AuthResult<()>;

    /// Verify that the credentials match a stored subject
    ///
    /// # Errors
    ///
    /// `InvalidCredentials` when the pair does not verify (whether the
    /// subject is unknown or the secret is wrong is not distinguished);
    /// `GatewayFailure` for anything operational.
    fn verify_credentials(&self, credentials: Credentials) -> AuthResult<()>;
}

/// In-memory credential gateway
#[derive(Debug, Default)]
pub struct MemoryGateway {
    subjects: std::sync::RwLock<Vec<SubjectRecord>>,
}

impl MemoryGateway {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of stored subjects
    pub fn len(&self) -> usize {
        self.subjects.read().map(|s| s.len()).unwrap_or(0)
    }

    /// Returns whether the store is empty
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl CredentialGateway for MemoryGateway {
    fn create_subject(&self, subject: NewSubject) -> AuthResult<()> {
        let password_hash = hash_password(&subject.credentials.password)?;

        let mut subjects = self
            .subjects
            .write()
            .map_err(|_| AuthError::GatewayFailure("lock poisoned".to_string()))?;

        if subjects
            .iter()
            .any(|s| s.user_id == subject.credentials.user_id)
        {
            return Err(AuthError::SubjectExists);
        }

        subjects.push(SubjectRecord {
            id: Uuid::new_v4(),
            user_id: subject.credentials.user_id,
            password_hash,
            email: subject.email,
            created_at: Utc::now(),
        });

        Ok(())
    }

    fn verify_credentials(&self, credentials: Credentials) -> AuthResult<()> {
        let subjects = self
            .subjects
            .read()
            .map_err(|_| AuthError::GatewayFailure("lock poisoned".to_string()))?;

        let record = subjects
            .iter()
            .find(|s| s.user_id == credentials.user_id)
            .ok_or(AuthError::InvalidCredentials)?;

        if verify_password(&credentials.password, &record.password_hash)? {
            Ok(())
        } else {
            Err(AuthError::InvalidCredentials)
        }
    }
}
