//! Identity client behaviour over a real HTTP connection.
//!
//! A `wiremock` server stands in for the identity service so the reqwest
//! transport, header injection and status handling are exercised end to end.

use std::time::Duration;

use authgate::domain::ports::{AuthBackend, AuthTransportError};
use authgate::domain::{AuthOutcome, BearerToken, Credentials, ServiceError};
use authgate::outbound::gotrue::{AuthServiceConfig, GoTrueAuthClient, ReqwestTransport};
use rstest::rstest;
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const API_KEY: &str = "service-key";

fn client_for(server: &MockServer) -> GoTrueAuthClient {
    GoTrueAuthClient::new(AuthServiceConfig::new(server.uri(), API_KEY)).expect("client builds")
}

#[tokio::test]
async fn sign_in_sends_password_grant_with_api_key() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/v1/token"))
        .and(query_param("grant_type", "password"))
        .and(header("apikey", API_KEY))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({ "email": "ada@example.com", "password": "pw" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": "jwt",
            "token_type": "bearer",
            "expires_in": 3600,
            "refresh_token": "r-1",
            "user": { "id": "u-1", "email": "ada@example.com" }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let outcome = client_for(&server)
        .sign_in(&Credentials::new("ada@example.com", "pw"))
        .await;

    match outcome {
        AuthOutcome::Success(session) => {
            assert_eq!(session.access_token, "jwt");
            assert_eq!(session.user.id, "u-1");
        }
        other => panic!("expected session, got {other:?}"),
    }
}

#[tokio::test]
async fn invalid_credentials_become_unauthorised() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/v1/token"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "code": 400,
            "error_code": "invalid_credentials",
            "msg": "Invalid login credentials"
        })))
        .mount(&server)
        .await;

    let outcome = client_for(&server)
        .sign_in(&Credentials::new("invalid_credentials@example.com", "x"))
        .await;

    assert_eq!(
        outcome,
        AuthOutcome::Service(ServiceError::new(
            401,
            "invalid_credentials",
            "Invalid login credentials"
        ))
    );
}

#[rstest]
#[case::with_token(Some("jwt-1"))]
#[case::without_token(None)]
#[tokio::test]
async fn sign_out_sends_bearer_only_when_supplied(#[case] raw_token: Option<&str>) {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/v1/logout"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;
    let token = raw_token.and_then(BearerToken::new);

    let outcome = client_for(&server).sign_out(token.as_ref()).await;

    assert_eq!(outcome, AuthOutcome::Success(()));
    let requests = server.received_requests().await.expect("recording enabled");
    let authorization = requests[0]
        .headers
        .get("authorization")
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned);
    assert_eq!(authorization, raw_token.map(|raw| format!("Bearer {raw}")));
}

#[tokio::test]
async fn refresh_keeps_remote_error_code() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/v1/token"))
        .and(query_param("grant_type", "refresh_token"))
        .and(body_json(json!({ "refresh_token": "expired-token" })))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "code": 400,
            "error_code": "token_expired",
            "msg": "Token has expired"
        })))
        .mount(&server)
        .await;

    let outcome = client_for(&server).refresh_token("expired-token").await;

    assert_eq!(
        outcome,
        AuthOutcome::Service(ServiceError::new(400, "token_expired", "Token has expired"))
    );
}

#[tokio::test]
async fn unreadable_error_body_reports_status() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/v1/signup"))
        .respond_with(ResponseTemplate::new(502).set_body_string("<html>bad gateway</html>"))
        .mount(&server)
        .await;

    let outcome = client_for(&server)
        .sign_up(&Credentials::new("ada@example.com", "pw"))
        .await;

    assert_eq!(
        outcome,
        AuthOutcome::Transport(AuthTransportError::unknown_status(502_u16))
    );
}

#[tokio::test]
async fn undecodable_success_body_is_a_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/v1/token"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let outcome = client_for(&server).refresh_token("r-1").await;

    assert!(matches!(
        outcome,
        AuthOutcome::Transport(AuthTransportError::Decode { .. })
    ));
}

#[tokio::test]
async fn slow_service_times_out() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/v1/recover"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(2)))
        .mount(&server)
        .await;
    let transport =
        ReqwestTransport::with_timeout(Duration::from_millis(100)).expect("transport builds");
    let client =
        GoTrueAuthClient::with_transport(AuthServiceConfig::new(server.uri(), API_KEY), transport);

    let outcome = client.forgotten_password("ada@example.com", None).await;

    assert!(matches!(
        outcome,
        AuthOutcome::Transport(AuthTransportError::Timeout { .. })
    ));
}

#[tokio::test]
async fn unreachable_service_is_a_transport_error() {
    let client = GoTrueAuthClient::new(AuthServiceConfig::new("http://127.0.0.1:1", API_KEY))
        .expect("client builds");

    let outcome = client.sign_out(None).await;

    assert!(matches!(
        outcome,
        AuthOutcome::Transport(AuthTransportError::Transport { .. })
    ));
}
