//! Request bodies accepted by the auth endpoints.
//!
//! Missing fields decode as empty strings so they surface as validation
//! errors. Unknown fields and malformed JSON are decode failures.

use serde::Deserialize;
use serde::de::DeserializeOwned;
use utoipa::ToSchema;
use validator::Validate;

use super::error::ApiError;
use super::validation::FieldOrder;
use crate::domain::Credentials;

/// Decode a JSON request body.
///
/// Decode failures are internal errors carrying the decoder message.
pub(crate) fn decode_body<T: DeserializeOwned>(body: &[u8]) -> Result<T, ApiError> {
    serde_json::from_slice(body).map_err(|err| ApiError::internal(err.to_string()))
}

/// `POST /register` body.
#[derive(Default, Deserialize, Validate, ToSchema)]
#[serde(default, deny_unknown_fields)]
pub struct RegisterRequest {
    #[validate(length(min = 1, code = "required"), email(code = "email"))]
    #[schema(example = "ada@example.com")]
    pub email: String,
    #[validate(length(min = 1, code = "required"))]
    #[schema(example = "correct horse battery staple")]
    pub password: String,
}

impl FieldOrder for RegisterRequest {
    const FIELDS: &'static [(&'static str, &'static str)] =
        &[("email", "email"), ("password", "password")];
}

impl From<RegisterRequest> for Credentials {
    fn from(value: RegisterRequest) -> Self {
        Credentials::new(value.email, value.password)
    }
}

/// `POST /login` body.
#[derive(Default, Deserialize, Validate, ToSchema)]
#[serde(default, deny_unknown_fields)]
pub struct LoginRequest {
    #[validate(length(min = 1, code = "required"), email(code = "email"))]
    #[schema(example = "ada@example.com")]
    pub email: String,
    #[validate(length(min = 1, code = "required"))]
    pub password: String,
}

impl FieldOrder for LoginRequest {
    const FIELDS: &'static [(&'static str, &'static str)] =
        &[("email", "email"), ("password", "password")];
}

impl From<LoginRequest> for Credentials {
    fn from(value: LoginRequest) -> Self {
        Credentials::new(value.email, value.password)
    }
}

/// `POST /forgotten-password` body.
#[derive(Default, Deserialize, Validate, ToSchema)]
#[serde(default, deny_unknown_fields)]
pub struct ForgottenPasswordRequest {
    #[validate(length(min = 1, code = "required"), email(code = "email"))]
    #[schema(example = "ada@example.com")]
    pub email: String,
}

impl FieldOrder for ForgottenPasswordRequest {
    const FIELDS: &'static [(&'static str, &'static str)] = &[("email", "email")];
}

/// `POST /reset-password` body.
#[derive(Default, Deserialize, Validate, ToSchema)]
#[serde(default, deny_unknown_fields)]
pub struct ResetPasswordRequest {
    #[validate(length(min = 1, code = "required"))]
    pub password: String,
}

impl FieldOrder for ResetPasswordRequest {
    const FIELDS: &'static [(&'static str, &'static str)] = &[("password", "password")];
}

/// `POST /refresh-token` body.
#[derive(Default, Deserialize, Validate, ToSchema)]
#[serde(default, deny_unknown_fields)]
pub struct RefreshTokenRequest {
    #[serde(rename = "refreshToken")]
    #[validate(length(min = 1, code = "required"))]
    pub refresh_token: String,
}

impl FieldOrder for RefreshTokenRequest {
    const FIELDS: &'static [(&'static str, &'static str)] = &[("refresh_token", "refreshToken")];
}
