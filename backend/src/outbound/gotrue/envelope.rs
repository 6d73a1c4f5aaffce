//! Request construction and response decoding for identity service calls.
//!
//! Every call goes through the same envelope: a JSON request under
//! `<base_url>/auth/v1/`, an `apikey` header, an optional bearer token, and a
//! status-class split between success payloads and [`ServiceError`] bodies.

use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue};
use reqwest::{Method, StatusCode, Url};
use serde::Serialize;
use serde::de::DeserializeOwned;

use super::config::AuthServiceConfig;
use super::transport::{HttpTransport, OutboundRequest, TransportResponse};
use crate::domain::ports::AuthTransportError;
use crate::domain::{AuthOutcome, BearerToken, ServiceError};

const APIKEY_HEADER: &str = "apikey";
const JSON_CONTENT_TYPE: &str = "application/json";

/// Build a request for `relative_path`, encoding `body` as JSON.
///
/// An absent body produces an empty payload.
///
/// # Errors
///
/// Returns [`AuthTransportError::Construction`] when the body cannot be
/// encoded or the resulting URL does not parse.
pub fn build_request<B>(
    config: &AuthServiceConfig,
    method: Method,
    relative_path: &str,
    body: Option<&B>,
) -> Result<OutboundRequest, AuthTransportError>
where
    B: Serialize + ?Sized,
{
    let body = match body {
        Some(payload) => serde_json::to_vec(payload).map_err(|error| {
            AuthTransportError::construction(format!("invalid request body: {error}"))
        })?,
        None => Vec::new(),
    };

    let endpoint = config.endpoint(relative_path);
    let url = Url::parse(&endpoint).map_err(|error| {
        AuthTransportError::construction(format!("invalid request URL {endpoint:?}: {error}"))
    })?;

    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static(JSON_CONTENT_TYPE));
    headers.insert(ACCEPT, HeaderValue::from_static(JSON_CONTENT_TYPE));

    Ok(OutboundRequest {
        method,
        url,
        headers,
        body,
    })
}

/// Set `Authorization: Bearer <token>` on `request`.
///
/// The token format is not inspected.
///
/// # Errors
///
/// Returns [`AuthTransportError::Construction`] when the token contains bytes
/// that are not valid in a header value.
pub fn inject_authorization_header(
    request: &mut OutboundRequest,
    token: &BearerToken,
) -> Result<(), AuthTransportError> {
    let value = sensitive_header(&format!("Bearer {}", token.as_str()), "authorization")?;
    request.headers.insert(AUTHORIZATION, value);
    Ok(())
}

/// Perform the round trip and decode the response into an [`AuthOutcome`].
pub async fn send<T, H>(
    transport: &H,
    config: &AuthServiceConfig,
    mut request: OutboundRequest,
) -> AuthOutcome<T>
where
    T: DeserializeOwned + Default,
    H: HttpTransport + ?Sized,
{
    match sensitive_header(config.api_key(), APIKEY_HEADER) {
        Ok(value) => {
            request.headers.insert(APIKEY_HEADER, value);
        }
        Err(error) => return AuthOutcome::Transport(error),
    }

    match transport.send(request).await {
        Ok(response) => decode_response(&response),
        Err(error) => AuthOutcome::Transport(error),
    }
}

/// Split a raw response into success, remote error, or local failure.
pub fn decode_response<T>(response: &TransportResponse) -> AuthOutcome<T>
where
    T: DeserializeOwned + Default,
{
    let status = response.status;
    if status == StatusCode::NO_CONTENT {
        return AuthOutcome::Success(T::default());
    }

    if status.is_success() {
        return match serde_json::from_slice(&response.body) {
            Ok(value) => AuthOutcome::Success(value),
            Err(error) => AuthOutcome::Transport(AuthTransportError::decode(error.to_string())),
        };
    }

    match serde_json::from_slice::<ServiceError>(&response.body) {
        Ok(error) => AuthOutcome::Service(error.with_status_fallback(status.as_u16())),
        Err(_) => AuthOutcome::Transport(AuthTransportError::unknown_status(status.as_u16())),
    }
}

fn sensitive_header(raw: &str, name: &str) -> Result<HeaderValue, AuthTransportError> {
    let mut value = HeaderValue::from_str(raw).map_err(|_| {
        AuthTransportError::construction(format!("invalid {name} header value"))
    })?;
    value.set_sensitive(true);
    Ok(value)
}
