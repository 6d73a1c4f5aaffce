//! [`AuthBackend`] adapter for a GoTrue-compatible identity service.
//!
//! Each operation builds exactly one request through the envelope codec and
//! interprets the typed result. The client holds immutable configuration and
//! a shareable transport, so one instance serves every request.

use async_trait::async_trait;
use reqwest::Method;
use serde::Serialize;
use serde::de::{DeserializeOwned, IgnoredAny};
use tracing::warn;

use super::config::AuthServiceConfig;
use super::dto::{CredentialsBody, EmailBody, PasswordBody, RefreshTokenBody};
use super::envelope::{build_request, inject_authorization_header, send};
use super::transport::{HttpTransport, OutboundRequest, ReqwestTransport};
use crate::domain::ports::{AuthBackend, AuthTransportError};
use crate::domain::{
    AuthOutcome, AuthenticatedSession, BearerToken, Credentials, INVALID_CREDENTIALS, TraceId,
    UserRecord,
};

const SIGNUP_PATH: &str = "signup";
const PASSWORD_GRANT_PATH: &str = "token?grant_type=password";
const LOGOUT_PATH: &str = "logout";
const RECOVER_PATH: &str = "recover";
const RECOVERY_USER_PATH: &str = "user?type=recovery";
const REFRESH_GRANT_PATH: &str = "token?grant_type=refresh_token";

const UNAUTHORIZED: i64 = 401;

/// Identity service client.
///
/// Generic over the transport so tests can substitute a scripted double for
/// the network.
#[derive(Debug, Clone)]
pub struct GoTrueAuthClient<H = ReqwestTransport> {
    config: AuthServiceConfig,
    transport: H,
}

impl GoTrueAuthClient {
    /// Build a client that talks to the network through reqwest.
    ///
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn new(config: AuthServiceConfig) -> Result<Self, reqwest::Error> {
        Ok(Self::with_transport(config, ReqwestTransport::new()?))
    }
}

impl<H: HttpTransport> GoTrueAuthClient<H> {
    /// Build a client over an explicit transport.
    pub fn with_transport(config: AuthServiceConfig, transport: H) -> Self {
        Self { config, transport }
    }

    async fn call<B, T>(
        &self,
        operation: &'static str,
        method: Method,
        path: &str,
        body: Option<&B>,
        token: Option<&BearerToken>,
    ) -> AuthOutcome<T>
    where
        B: Serialize + Sync + ?Sized,
        T: DeserializeOwned + Default,
    {
        let outcome = match self.prepare(method, path, body, token) {
            Ok(request) => send(&self.transport, &self.config, request).await,
            Err(error) => AuthOutcome::Transport(error),
        };

        if let AuthOutcome::Transport(error) = &outcome {
            warn!(
                trace_id = %trace_label(),
                operation,
                error = %error,
                "identity service call failed"
            );
        }
        outcome
    }

    fn prepare<B>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
        token: Option<&BearerToken>,
    ) -> Result<OutboundRequest, AuthTransportError>
    where
        B: Serialize + ?Sized,
    {
        let mut request = build_request(&self.config, method, path, body)?;
        if let Some(token) = token {
            inject_authorization_header(&mut request, token)?;
        }
        Ok(request)
    }
}

fn trace_label() -> String {
    TraceId::current().map_or_else(|| "-".to_owned(), |id| id.to_string())
}

#[async_trait]
impl<H: HttpTransport> AuthBackend for GoTrueAuthClient<H> {
    async fn sign_up(&self, credentials: &Credentials) -> AuthOutcome<UserRecord> {
        let body = CredentialsBody::from(credentials);
        self.call("sign_up", Method::POST, SIGNUP_PATH, Some(&body), None)
            .await
    }

    async fn sign_in(&self, credentials: &Credentials) -> AuthOutcome<AuthenticatedSession> {
        let body = CredentialsBody::from(credentials);
        self.call("sign_in", Method::POST, PASSWORD_GRANT_PATH, Some(&body), None)
            .await
            .map_service(|mut error| {
                if error.error_code == INVALID_CREDENTIALS {
                    error.code = UNAUTHORIZED;
                }
                error
            })
    }

    async fn sign_out(&self, token: Option<&BearerToken>) -> AuthOutcome<()> {
        self.call::<(), IgnoredAny>("sign_out", Method::POST, LOGOUT_PATH, None, token)
            .await
            .map(drop)
    }

    async fn forgotten_password(
        &self,
        email: &str,
        token: Option<&BearerToken>,
    ) -> AuthOutcome<()> {
        let body = EmailBody { email };
        self.call::<_, IgnoredAny>(
            "forgotten_password",
            Method::POST,
            RECOVER_PATH,
            Some(&body),
            token,
        )
        .await
        .map(drop)
    }

    async fn reset_password(
        &self,
        token: Option<&BearerToken>,
        password: &str,
    ) -> AuthOutcome<()> {
        let body = PasswordBody { password };
        self.call::<_, AuthenticatedSession>(
            "reset_password",
            Method::PUT,
            RECOVERY_USER_PATH,
            Some(&body),
            token,
        )
        .await
        .map(drop)
    }

    async fn refresh_token(&self, refresh_token: &str) -> AuthOutcome<AuthenticatedSession> {
        let body = RefreshTokenBody { refresh_token };
        self.call(
            "refresh_token",
            Method::POST,
            REFRESH_GRANT_PATH,
            Some(&body),
            None,
        )
        .await
    }
}
