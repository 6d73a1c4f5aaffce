//! Request bodies sent to the identity service.

use serde::Serialize;
use serde_json::Value;

use crate::domain::Credentials;

#[derive(Debug, Serialize)]
pub(super) struct CredentialsBody<'a> {
    pub email: &'a str,
    pub password: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<&'a Value>,
}

impl<'a> From<&'a Credentials> for CredentialsBody<'a> {
    fn from(credentials: &'a Credentials) -> Self {
        Self {
            email: credentials.email(),
            password: credentials.password(),
            data: credentials.data(),
        }
    }
}

#[derive(Debug, Serialize)]
pub(super) struct EmailBody<'a> {
    pub email: &'a str,
}

#[derive(Debug, Serialize)]
pub(super) struct PasswordBody<'a> {
    pub password: &'a str,
}

#[derive(Debug, Serialize)]
pub(super) struct RefreshTokenBody<'a> {
    pub refresh_token: &'a str,
}
