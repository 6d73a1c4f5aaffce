//! Scripted transport double for tests.
//!
//! Responses are queued up front and handed out in order; every request that
//! reaches the transport is recorded for later inspection.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex, PoisonError};

use async_trait::async_trait;
use reqwest::StatusCode;
use serde_json::Value;

use super::transport::{HttpTransport, OutboundRequest, TransportResponse};
use crate::domain::ports::AuthTransportError;

#[derive(Debug, Default)]
struct Script {
    responses: VecDeque<Result<TransportResponse, AuthTransportError>>,
    requests: Vec<OutboundRequest>,
}

/// In-memory [`HttpTransport`] that replays queued responses.
///
/// Clones share the same script, so a test can keep a handle after moving a
/// clone into the client under test.
///
/// # Examples
/// ```
/// use authgate::outbound::gotrue::ScriptedTransport;
/// use reqwest::StatusCode;
/// use serde_json::json;
///
/// let transport = ScriptedTransport::default();
/// transport.respond_json(StatusCode::OK, &json!({ "id": "u-1" }));
/// assert!(transport.requests().is_empty());
/// ```
#[derive(Debug, Clone, Default)]
pub struct ScriptedTransport {
    script: Arc<Mutex<Script>>,
}

impl ScriptedTransport {
    /// Queue a response with a raw body.
    pub fn respond(&self, status: StatusCode, body: impl Into<Vec<u8>>) -> &Self {
        self.push(Ok(TransportResponse {
            status,
            body: body.into(),
        }))
    }

    /// Queue a response whose body is `value` encoded as JSON.
    pub fn respond_json(&self, status: StatusCode, value: &Value) -> &Self {
        self.respond(status, value.to_string())
    }

    /// Queue a transport failure.
    pub fn fail(&self, error: AuthTransportError) -> &Self {
        self.push(Err(error))
    }

    /// Requests received so far, oldest first.
    pub fn requests(&self) -> Vec<OutboundRequest> {
        self.lock().requests.clone()
    }

    fn push(&self, entry: Result<TransportResponse, AuthTransportError>) -> &Self {
        self.lock().responses.push_back(entry);
        self
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Script> {
        self.script.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[async_trait]
impl HttpTransport for ScriptedTransport {
    async fn send(
        &self,
        request: OutboundRequest,
    ) -> Result<TransportResponse, AuthTransportError> {
        let mut script = self.lock();
        script.requests.push(request);
        script.responses.pop_front().unwrap_or_else(|| {
            Err(AuthTransportError::transport(
                "scripted transport has no queued response",
            ))
        })
    }
}
