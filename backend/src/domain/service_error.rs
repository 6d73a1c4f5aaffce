//! Structured error payload reported by the identity service.
//!
//! A [`ServiceError`] is a well-formed *domain* failure (bad credentials,
//! expired token, weak password). It is never used for local or network
//! faults; those travel as
//! [`AuthTransportError`](crate::domain::ports::AuthTransportError).

use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::identity::null_as_default;

/// `error_code` reported when sign-in credentials do not match an account.
pub const INVALID_CREDENTIALS: &str = "invalid_credentials";

/// Remote error body: `{"code": 400, "error_code": "...", "msg": "..."}`.
///
/// All fields default when missing or `null` so sparse error bodies still
/// decode as a structured error. `code` is kept wide because the service
/// does not promise it is a valid HTTP status.
///
/// # Examples
/// ```
/// use authgate::domain::ServiceError;
///
/// let err: ServiceError =
///     serde_json::from_str(r#"{"code":422,"error_code":"weak_password","msg":"too short"}"#)
///         .expect("decodes");
/// assert_eq!(err.code, 422);
/// assert_eq!(err.to_string(), "too short");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct ServiceError {
    /// Numeric status the service associates with the failure.
    #[serde(deserialize_with = "null_as_default")]
    #[schema(example = 400)]
    pub code: i64,
    /// Stable machine-readable failure identifier.
    #[serde(deserialize_with = "null_as_default")]
    #[schema(example = "invalid_credentials")]
    pub error_code: String,
    /// Human-readable explanation.
    #[serde(rename = "msg", deserialize_with = "null_as_default")]
    #[schema(example = "Invalid login credentials")]
    pub message: String,
}

impl ServiceError {
    /// Construct an error from its parts.
    pub fn new(code: i64, error_code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code,
            error_code: error_code.into(),
            message: message.into(),
        }
    }

    /// Fill a missing `code` with the HTTP status the error arrived with.
    #[must_use]
    pub fn with_status_fallback(mut self, status: u16) -> Self {
        if self.code == 0 {
            self.code = i64::from(status);
        }
        self
    }

    /// Whether the error denotes an authentication failure.
    pub fn is_unauthorized(&self) -> bool {
        self.code == 401
    }
}

impl fmt::Display for ServiceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.message.is_empty() {
            f.write_str(&self.message)
        } else if !self.error_code.is_empty() {
            f.write_str(&self.error_code)
        } else {
            write!(f, "identity service error (code {})", self.code)
        }
    }
}
