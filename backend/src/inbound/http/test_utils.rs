//! Test helpers for inbound HTTP components.

use std::sync::{Mutex, PoisonError};

use async_trait::async_trait;

use crate::domain::ports::{AuthBackend, AuthTransportError};
use crate::domain::{
    AuthOutcome, AuthenticatedSession, BearerToken, Credentials, ServiceError, UserRecord,
};

/// How [`StubAuth`] answers every call.
#[derive(Debug, Clone)]
pub enum Reply {
    Succeed,
    Reject(ServiceError),
    Fail(AuthTransportError),
}

/// One call observed by [`StubAuth`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedCall {
    pub operation: &'static str,
    /// Email, password or refresh token the call carried.
    pub subject: Option<String>,
    pub token: Option<String>,
}

/// [`AuthBackend`] double that records calls and answers uniformly.
pub struct StubAuth {
    reply: Reply,
    calls: Mutex<Vec<RecordedCall>>,
}

impl StubAuth {
    pub fn new(reply: Reply) -> Self {
        Self {
            reply,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn answer<T>(
        &self,
        operation: &'static str,
        subject: Option<&str>,
        token: Option<&BearerToken>,
        value: impl FnOnce() -> T,
    ) -> AuthOutcome<T> {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(RecordedCall {
                operation,
                subject: subject.map(str::to_owned),
                token: token.map(|t| t.as_str().to_owned()),
            });
        match &self.reply {
            Reply::Succeed => AuthOutcome::Success(value()),
            Reply::Reject(err) => AuthOutcome::Service(err.clone()),
            Reply::Fail(err) => AuthOutcome::Transport(err.clone()),
        }
    }
}

/// User returned by successful sign-ups.
pub fn sample_user() -> UserRecord {
    UserRecord {
        id: "3fa85f64-5717-4562-b3fc-2c963f66afa6".into(),
        aud: "authenticated".into(),
        role: "authenticated".into(),
        email: "ada@example.com".into(),
        ..UserRecord::default()
    }
}

/// Session returned by successful sign-ins and refreshes.
pub fn sample_session() -> AuthenticatedSession {
    AuthenticatedSession {
        access_token: "access-jwt".into(),
        token_type: "bearer".into(),
        expires_in: 3600,
        refresh_token: "refresh-1".into(),
        user: sample_user(),
        ..AuthenticatedSession::default()
    }
}

#[async_trait]
impl AuthBackend for StubAuth {
    async fn sign_up(&self, credentials: &Credentials) -> AuthOutcome<UserRecord> {
        self.answer("sign_up", Some(credentials.email()), None, sample_user)
    }

    async fn sign_in(&self, credentials: &Credentials) -> AuthOutcome<AuthenticatedSession> {
        self.answer("sign_in", Some(credentials.email()), None, sample_session)
    }

    async fn sign_out(&self, token: Option<&BearerToken>) -> AuthOutcome<()> {
        self.answer("sign_out", None, token, || ())
    }

    async fn forgotten_password(
        &self,
        email: &str,
        token: Option<&BearerToken>,
    ) -> AuthOutcome<()> {
        self.answer("forgotten_password", Some(email), token, || ())
    }

    async fn reset_password(
        &self,
        token: Option<&BearerToken>,
        password: &str,
    ) -> AuthOutcome<()> {
        self.answer("reset_password", Some(password), token, || ())
    }

    async fn refresh_token(&self, refresh_token: &str) -> AuthOutcome<AuthenticatedSession> {
        self.answer("refresh_token", Some(refresh_token), None, sample_session)
    }
}
