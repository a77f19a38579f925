//! # Gateway Routes
//!
//! The two HTTP endpoints of the gateway and the state they share.
//!
//! Handlers stay thin: parse the form, run the prepared validator, call the
//! credential gateway, translate the typed outcome to a status code. Every
//! decision lives in `schema` and `auth`; nothing here inspects field values
//! beyond handing them over.

use std::collections::HashMap;
use std::sync::Arc;

use axum::{
    extract::{rejection::FormRejection, Form, Path, State},
    http::{HeaderName, HeaderValue, StatusCode},
    routing::post,
    Json, Router,
};
use serde::Serialize;

use crate::auth::{AuthError, CredentialGateway, Credentials, NewSubject, TokenIssuer};
use crate::schema::{FieldSpec, RequestValidator, Schema, SchemaResult, ValidateError};

/// Form field carrying the subject identifier
pub const FIELD_USER_ID: &str = "UserID";

/// Form field carrying the secret
pub const FIELD_PASSWORD: &str = "Password";

/// Form field carrying the contact address supplied at creation
pub const FIELD_EMAIL: &str = "Email";

/// Response header carrying the issued token on successful login
pub const TOKEN_HEADER: &str = "jwt";

/// Declared fields for subject creation: the credential pair plus a contact
/// address
pub fn create_subject_schema() -> Schema {
    Schema::new(
        "create-subject",
        vec![
            FieldSpec::group(
                "credentials",
                vec![
                    FieldSpec::leaf(FIELD_USER_ID),
                    FieldSpec::leaf(FIELD_PASSWORD),
                ],
            ),
            FieldSpec::leaf(FIELD_EMAIL),
        ],
    )
}

/// Declared fields for authentication: the credential pair alone
pub fn authenticate_schema() -> Schema {
    Schema::new(
        "authenticate",
        vec![
            FieldSpec::leaf(FIELD_USER_ID),
            FieldSpec::leaf(FIELD_PASSWORD),
        ],
    )
}

/// Shared gateway state
///
/// Validators are prepared once here; the issuer and gateway are read-only
/// for the process lifetime, so handlers share this through an `Arc` with no
/// locking of their own.
pub struct AppState {
    pub create_rules: RequestValidator,
    pub login_rules: RequestValidator,
    pub gateway: Arc<dyn CredentialGateway>,
    pub issuer: TokenIssuer,
}

impl AppState {
    /// Flatten both endpoint schemas and bundle the collaborators.
    ///
    /// # Errors
    ///
    /// Returns `SchemaError` if either declared schema is malformed. This is
    /// a startup failure; no request ever sees it.
    pub fn new(gateway: Arc<dyn CredentialGateway>, issuer: TokenIssuer) -> SchemaResult<Self> {
        Ok(Self {
            create_rules: RequestValidator::new(&create_subject_schema())?,
            login_rules: RequestValidator::new(&authenticate_schema())?,
            gateway,
            issuer,
        })
    }
}

/// Gateway routes with shared state
pub fn gateway_routes(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/user/:user/create", post(create_subject_handler))
        .route("/auth", post(authenticate_handler))
        .with_state(state)
}

// ==================
// Response Types
// ==================

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
}

impl From<AuthError> for ErrorResponse {
    fn from(err: AuthError) -> Self {
        Self {
            error: err.to_string(),
            code: err.status_code(),
        }
    }
}

impl From<ValidateError> for ErrorResponse {
    fn from(err: ValidateError) -> Self {
        Self {
            error: err.to_string(),
            code: err.status_code(),
        }
    }
}

type Rejection = (StatusCode, Json<ErrorResponse>);

fn unparseable_form(rejection: FormRejection) -> Rejection {
    tracing::debug!(error = %rejection, "request body is not a form");
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse {
            error: rejection.body_text(),
            code: 400,
        }),
    )
}

fn shape_failure(rules: &RequestValidator, err: ValidateError) -> Rejection {
    tracing::debug!(schema = rules.schema_name(), error = %err, "request shape rejected");
    let status = StatusCode::from_u16(err.status_code()).unwrap_or(StatusCode::BAD_REQUEST);
    (status, Json(ErrorResponse::from(err)))
}

fn auth_failure(err: AuthError) -> Rejection {
    if err.is_client_error() {
        tracing::debug!(error = %err, "request refused");
    } else {
        tracing::error!(error = %err, "gateway failure");
    }
    let status =
        StatusCode::from_u16(err.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (status, Json(ErrorResponse::from(err)))
}

// Validation has already established presence; a vanished key reads as empty
// rather than panicking.
fn field_value(fields: &HashMap<String, String>, name: &str) -> String {
    fields.get(name).cloned().unwrap_or_default()
}

// ==================
// Handlers
// ==================

/// Create-subject handler
///
/// The path segment carries the subject identifier for routing shape only;
/// the form body is authoritative.
async fn create_subject_handler(
    State(state): State<Arc<AppState>>,
    Path(_user): Path<String>,
    form: Result<Form<HashMap<String, String>>, FormRejection>,
) -> Result<StatusCode, Rejection> {
    let Form(fields) = form.map_err(unparseable_form)?;
    state
        .create_rules
        .validate(&fields)
        .map_err(|e| shape_failure(&state.create_rules, e))?;

    let subject = NewSubject {
        credentials: Credentials {
            user_id: field_value(&fields, FIELD_USER_ID),
            password: field_value(&fields, FIELD_PASSWORD),
        },
        email: field_value(&fields, FIELD_EMAIL),
    };

    state.gateway.create_subject(subject).map_err(auth_failure)?;

    Ok(StatusCode::CREATED)
}

/// Authenticate handler
///
/// On success the signed token travels in the `jwt` response header and the
/// body stays empty.
async fn authenticate_handler(
    State(state): State<Arc<AppState>>,
    form: Result<Form<HashMap<String, String>>, FormRejection>,
) -> Result<(StatusCode, [(HeaderName, HeaderValue); 1]), Rejection> {
    let Form(fields) = form.map_err(unparseable_form)?;
    state
        .login_rules
        .validate(&fields)
        .map_err(|e| shape_failure(&state.login_rules, e))?;

    let user_id = field_value(&fields, FIELD_USER_ID);
    let credentials = Credentials {
        user_id: user_id.clone(),
        password: field_value(&fields, FIELD_PASSWORD),
    };

    state
        .gateway
        .verify_credentials(credentials)
        .map_err(auth_failure)?;

    let token = state.issuer.issue(&user_id).map_err(auth_failure)?;
    let value =
        HeaderValue::from_str(&token).map_err(|_| auth_failure(AuthError::SigningFailed))?;

    tracing::debug!(subject = %user_id, "issued identity token");

    Ok((
        StatusCode::OK,
        [(HeaderName::from_static(TOKEN_HEADER), value)],
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::{MemoryGateway, TokenConfig};

    const PRIVATE_PEM: &str = include_str!("../../tests/fixtures/signing_key.pem");

    #[test]
    fn test_create_schema_flattens_in_declaration_order() {
        let schema = create_subject_schema();
        assert_eq!(schema.flatten().unwrap(), vec!["UserID", "Password", "Email"]);
    }

    #[test]
    fn test_authenticate_schema_flattens_in_declaration_order() {
        let schema = authenticate_schema();
        assert_eq!(schema.flatten().unwrap(), vec!["UserID", "Password"]);
    }

    #[test]
    fn test_state_prepares_both_validators() {
        let issuer = TokenIssuer::from_pem(PRIVATE_PEM.as_bytes(), TokenConfig::default()).unwrap();
        let state = AppState::new(Arc::new(MemoryGateway::new()), issuer).unwrap();

        assert_eq!(state.create_rules.expected().len(), 3);
        assert_eq!(state.login_rules.expected().len(), 2);
    }

    #[test]
    fn test_error_response_carries_status_code() {
        let conflict = ErrorResponse::from(AuthError::SubjectExists);
        assert_eq!(conflict.code, 409);

        let shape = ErrorResponse::from(ValidateError::FieldMissingOrEmpty("UserID".into()));
        assert_eq!(shape.code, 400);
    }
}
