//! # Identity Token Issuance
//!
//! Builds and signs the time-bounded identity token handed out on
//! successful login.
//!
//! ## Invariants
//! - Exactly five claims: iss, sub, aud, exp, iat; nothing optional
//! - exp is always iat plus the configured validity window
//! - The signing key is loaded once at startup and never reloaded
//! - Issuance is stateless: no record of issued tokens is kept
//!
//! The issuer is write-only. Verification belongs to downstream holders of
//! the public key and never happens here.

use std::path::Path;

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use serde::{Deserialize, Serialize};

use super::errors::{AuthError, AuthResult};

/// Claims carried by an issued identity token
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenClaims {
    /// Issuer (this service)
    pub iss: String,

    /// Subject (the verified user identifier)
    pub sub: String,

    /// Audience (the consuming service)
    pub aud: String,

    /// Expiration timestamp (Unix epoch seconds)
    pub exp: i64,

    /// Issued-at timestamp (Unix epoch seconds)
    pub iat: i64,
}

/// Token issuance configuration
#[derive(Debug, Clone)]
pub struct TokenConfig {
    /// Issuer claim value
    pub issuer: String,

    /// Audience claim value
    pub audience: String,

    /// Validity window added to the issue instant
    pub validity: Duration,
}

impl Default for TokenConfig {
    fn default() -> Self {
        Self {
            issuer: "Auth-Service".to_string(),
            audience: "Moment-Service".to_string(),
            validity: Duration::days(7),
        }
    }
}

/// Issues signed identity tokens with an RSA private key.
///
/// The key is parsed once at construction and held read-only for the
/// process lifetime, so concurrent issuance needs no locking.
pub struct TokenIssuer {
    config: TokenConfig,
    encoding_key: EncodingKey,
}

impl TokenIssuer {
    /// Load an RSA private key in PEM encoding from `path`.
    ///
    /// # Errors
    ///
    /// Returns `KeyUnavailable` if the file cannot be read or is not a
    /// usable RSA signing key. Key problems surface here, before the
    /// service accepts traffic, never per request.
    pub fn from_pem_file(path: impl AsRef<Path>, config: TokenConfig) -> AuthResult<Self> {
        let path = path.as_ref();
        let pem = std::fs::read(path)
            .map_err(|e| AuthError::KeyUnavailable(format!("{}: {}", path.display(), e)))?;

        Self::from_pem(&pem, config)
    }

    /// Build an issuer from PEM-encoded RSA private key bytes.
    ///
    /// # Errors
    ///
    /// Returns `KeyUnavailable` if the bytes do not parse as a PEM-encoded
    /// RSA private key or cannot produce a signature.
    pub fn from_pem(pem: &[u8], config: TokenConfig) -> AuthResult<Self> {
        let encoding_key =
            EncodingKey::from_rsa_pem(pem).map_err(|e| AuthError::KeyUnavailable(e.to_string()))?;

        let issuer = Self {
            config,
            encoding_key,
        };

        // from_rsa_pem accepts any RSA PEM, the public half included; only
        // an actual signing attempt proves the key is usable.
        issuer.issue_at("startup", Utc::now()).map_err(|_| {
            AuthError::KeyUnavailable("PEM is not a usable signing key".to_string())
        })?;

        Ok(issuer)
    }

    /// Issue a token for `subject`, as of now.
    pub fn issue(&self, subject: &str) -> AuthResult<String> {
        self.issue_at(subject, Utc::now())
    }

    /// Issue a token for `subject` with `now` as the issue instant.
    ///
    /// iat is `now` in UTC seconds and exp is exactly `now` plus the
    /// configured validity, so issuing at different instants produces
    /// different signed strings for the same subject.
    ///
    /// # Errors
    ///
    /// Returns `SigningFailed` if the signing operation errors. Terminal
    /// for the request; the caller surfaces a server error, no retry.
    pub fn issue_at(&self, subject: &str, now: DateTime<Utc>) -> AuthResult<String> {
        let claims = TokenClaims {
            iss: self.config.issuer.clone(),
            sub: subject.to_string(),
            aud: self.config.audience.clone(),
            exp: (now + self.config.validity).timestamp(),
            iat: now.timestamp(),
        };

        encode(&Header::new(Algorithm::RS256), &claims, &self.encoding_key)
            .map_err(|_| AuthError::SigningFailed)
    }

    /// Returns the configured validity window
    pub fn validity(&self) -> Duration {
        self.config.validity
    }
}
