//! Driven port for the hosted identity service.
//!
//! HTTP handlers depend on [`AuthBackend`] only, so the remote client can be
//! replaced by a double in tests. Every operation performs at most one round
//! trip and reports exactly one [`AuthOutcome`].

use async_trait::async_trait;

use super::define_port_error;
use crate::domain::{AuthOutcome, AuthenticatedSession, BearerToken, Credentials, UserRecord};

define_port_error! {
    /// Local failures raised while talking to the identity service.
    ///
    /// None of these variants originate from a remote error payload; a
    /// well-formed remote error is a [`ServiceError`](crate::domain::ServiceError).
    pub enum AuthTransportError {
        /// The request could not be built (body encoding or URL construction).
        Construction { message: String } =>
            "failed to build identity request: {message}",
        /// Network transport failed before a response arrived.
        Transport { message: String } =>
            "identity service transport failed: {message}",
        /// The round trip exceeded the client timeout.
        Timeout { message: String } =>
            "identity service timed out: {message}",
        /// A success response carried a body that could not be decoded.
        Decode { message: String } =>
            "identity service response decode failed: {message}",
        /// A failure status arrived without a recognisable error body.
        UnknownStatus { status: u16 } =>
            "unknown error, status {status}",
    }
}

/// Auth operations offered by the identity service.
#[async_trait]
pub trait AuthBackend: Send + Sync {
    /// Register a new account.
    async fn sign_up(&self, credentials: &Credentials) -> AuthOutcome<UserRecord>;

    /// Exchange email and password for a session.
    ///
    /// A remote `invalid_credentials` error is reported with code 401.
    async fn sign_in(&self, credentials: &Credentials) -> AuthOutcome<AuthenticatedSession>;

    /// Revoke the session identified by `token`.
    async fn sign_out(&self, token: Option<&BearerToken>) -> AuthOutcome<()>;

    /// Send a password recovery email.
    async fn forgotten_password(
        &self,
        email: &str,
        token: Option<&BearerToken>,
    ) -> AuthOutcome<()>;

    /// Set a new password using a recovery session token.
    async fn reset_password(
        &self,
        token: Option<&BearerToken>,
        password: &str,
    ) -> AuthOutcome<()>;

    /// Trade a refresh token for a fresh session.
    async fn refresh_token(&self, refresh_token: &str) -> AuthOutcome<AuthenticatedSession>;
}
