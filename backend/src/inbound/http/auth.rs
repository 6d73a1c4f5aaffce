//! Auth endpoints.
//!
//! ```text
//! POST /register {"email":"ada@example.com","password":"..."}
//! POST /login {"email":"ada@example.com","password":"..."}
//! POST /logout                      Authorization: Bearer <token>
//! POST /forgotten-password {"email":"ada@example.com"}
//! POST /reset-password {"password":"..."}  Authorization: Bearer <token>
//! POST /refresh-token {"refreshToken":"..."}
//! ```
//!
//! Every handler decodes, validates and delegates to the [`AuthBackend`]
//! port held in [`HttpState`].
//!
//! [`AuthBackend`]: crate::domain::ports::AuthBackend

use actix_web::http::header;
use actix_web::{HttpRequest, HttpResponse, post, web};

use super::error::{ApiResult, ErrorMessage, ValidationFailure};
use super::requests::{
    ForgottenPasswordRequest, LoginRequest, RefreshTokenRequest, RegisterRequest,
    ResetPasswordRequest, decode_body,
};
use super::response::{SuccessStatus, respond};
use super::state::HttpState;
use super::validation::validate_request;
use crate::domain::{AuthenticatedSession, BearerToken, Credentials, ServiceError, UserRecord};

/// Token from `Authorization: Bearer <token>`, if one was supplied.
fn bearer_token(req: &HttpRequest) -> Option<BearerToken> {
    req.headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(BearerToken::from_authorization)
}

/// Register a new account.
#[utoipa::path(
    post,
    path = "/register",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "Account created", body = UserRecord),
        (status = 400, description = "Rejected by the identity service", body = ServiceError),
        (status = 401, description = "Unauthorised", body = ServiceError),
        (status = 422, description = "Validation error", body = ValidationFailure),
        (status = 500, description = "Internal server error", body = ErrorMessage)
    ),
    tags = ["auth"],
    operation_id = "register",
    security([])
)]
#[post("/register")]
pub async fn register(state: web::Data<HttpState>, body: web::Bytes) -> ApiResult<HttpResponse> {
    let request: RegisterRequest = decode_body(&body)?;
    validate_request(&request)?;
    let credentials = Credentials::from(request);
    respond(
        state.auth.sign_up(&credentials).await,
        SuccessStatus::Created,
    )
}

/// Exchange email and password for a session.
#[utoipa::path(
    post,
    path = "/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Signed in", body = AuthenticatedSession),
        (status = 400, description = "Rejected by the identity service", body = ServiceError),
        (status = 401, description = "Invalid credentials", body = ServiceError),
        (status = 422, description = "Validation error", body = ValidationFailure),
        (status = 500, description = "Internal server error", body = ErrorMessage)
    ),
    tags = ["auth"],
    operation_id = "login",
    security([])
)]
#[post("/login")]
pub async fn login(state: web::Data<HttpState>, body: web::Bytes) -> ApiResult<HttpResponse> {
    let request: LoginRequest = decode_body(&body)?;
    validate_request(&request)?;
    let credentials = Credentials::from(request);
    respond(state.auth.sign_in(&credentials).await, SuccessStatus::Ok)
}

/// Revoke the caller's session.
#[utoipa::path(
    post,
    path = "/logout",
    responses(
        (status = 204, description = "Signed out"),
        (status = 400, description = "Rejected by the identity service", body = ServiceError),
        (status = 401, description = "Unauthorised", body = ServiceError),
        (status = 500, description = "Internal server error", body = ErrorMessage)
    ),
    tags = ["auth"],
    operation_id = "logout",
    security(("bearer" = []))
)]
#[post("/logout")]
pub async fn logout(state: web::Data<HttpState>, req: HttpRequest) -> ApiResult<HttpResponse> {
    let token = bearer_token(&req);
    respond(
        state.auth.sign_out(token.as_ref()).await,
        SuccessStatus::NoContent,
    )
}

/// Send a password recovery email.
#[utoipa::path(
    post,
    path = "/forgotten-password",
    request_body = ForgottenPasswordRequest,
    responses(
        (status = 204, description = "Recovery email requested"),
        (status = 400, description = "Rejected by the identity service", body = ServiceError),
        (status = 401, description = "Unauthorised", body = ServiceError),
        (status = 422, description = "Validation error", body = ValidationFailure),
        (status = 500, description = "Internal server error", body = ErrorMessage)
    ),
    tags = ["auth"],
    operation_id = "forgottenPassword",
    security([])
)]
#[post("/forgotten-password")]
pub async fn forgotten_password(
    state: web::Data<HttpState>,
    req: HttpRequest,
    body: web::Bytes,
) -> ApiResult<HttpResponse> {
    let request: ForgottenPasswordRequest = decode_body(&body)?;
    validate_request(&request)?;
    let token = bearer_token(&req);
    respond(
        state
            .auth
            .forgotten_password(&request.email, token.as_ref())
            .await,
        SuccessStatus::NoContent,
    )
}

/// Set a new password with a recovery session token.
#[utoipa::path(
    post,
    path = "/reset-password",
    request_body = ResetPasswordRequest,
    responses(
        (status = 204, description = "Password changed"),
        (status = 400, description = "Rejected by the identity service", body = ServiceError),
        (status = 401, description = "Unauthorised", body = ServiceError),
        (status = 422, description = "Validation error", body = ValidationFailure),
        (status = 500, description = "Internal server error", body = ErrorMessage)
    ),
    tags = ["auth"],
    operation_id = "resetPassword",
    security(("bearer" = []))
)]
#[post("/reset-password")]
pub async fn reset_password(
    state: web::Data<HttpState>,
    req: HttpRequest,
    body: web::Bytes,
) -> ApiResult<HttpResponse> {
    let request: ResetPasswordRequest = decode_body(&body)?;
    validate_request(&request)?;
    let token = bearer_token(&req);
    respond(
        state
            .auth
            .reset_password(token.as_ref(), &request.password)
            .await,
        SuccessStatus::NoContent,
    )
}

/// Trade a refresh token for a fresh session.
#[utoipa::path(
    post,
    path = "/refresh-token",
    request_body = RefreshTokenRequest,
    responses(
        (status = 200, description = "Session refreshed", body = AuthenticatedSession),
        (status = 400, description = "Rejected by the identity service", body = ServiceError),
        (status = 401, description = "Unauthorised", body = ServiceError),
        (status = 422, description = "Validation error", body = ValidationFailure),
        (status = 500, description = "Internal server error", body = ErrorMessage)
    ),
    tags = ["auth"],
    operation_id = "refreshToken",
    security([])
)]
#[post("/refresh-token")]
pub async fn refresh_token(
    state: web::Data<HttpState>,
    body: web::Bytes,
) -> ApiResult<HttpResponse> {
    let request: RefreshTokenRequest = decode_body(&body)?;
    validate_request(&request)?;
    respond(
        state.auth.refresh_token(&request.refresh_token).await,
        SuccessStatus::Ok,
    )
}

#[cfg(test)]
mod tests {
    //! Handler behaviour against a stubbed auth port.

    use std::sync::Arc;

    use actix_web::body::MessageBody;
    use actix_web::dev::ServiceResponse;
    use actix_web::http::StatusCode;
    use actix_web::{App, test};
    use rstest::rstest;
    use serde_json::{Value, json};

    use super::*;
    use crate::domain::ports::AuthTransportError;
    use crate::inbound::http::test_utils::{RecordedCall, Reply, StubAuth};

    async fn call(
        stub: &Arc<StubAuth>,
        request: test::TestRequest,
    ) -> ServiceResponse<impl MessageBody> {
        let state = HttpState::new(stub.clone(), "authgate");
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .configure(crate::inbound::http::configure),
        )
        .await;
        test::call_service(&app, request.to_request()).await
    }

    async fn body_json(response: ServiceResponse<impl MessageBody>) -> Value {
        let bytes = test::read_body(response).await;
        serde_json::from_slice(&bytes).expect("response body is JSON")
    }

    fn post_json(uri: &str, body: &Value) -> test::TestRequest {
        test::TestRequest::post().uri(uri).set_json(body)
    }

    #[actix_web::test]
    async fn register_returns_created_user() {
        let stub = Arc::new(StubAuth::new(Reply::Succeed));

        let response = call(
            &stub,
            post_json(
                "/register",
                &json!({ "email": "ada@example.com", "password": "pw" }),
            ),
        )
        .await;

        assert_eq!(response.status(), StatusCode::CREATED);
        assert_eq!(body_json(response).await["email"], "ada@example.com");
        assert_eq!(stub.calls()[0].operation, "sign_up");
    }

    #[actix_web::test]
    async fn login_returns_session() {
        let stub = Arc::new(StubAuth::new(Reply::Succeed));

        let response = call(
            &stub,
            post_json(
                "/login",
                &json!({ "email": "ada@example.com", "password": "pw" }),
            ),
        )
        .await;

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["access_token"], "access-jwt");
        assert_eq!(body["user"]["id"], "3fa85f64-5717-4562-b3fc-2c963f66afa6");
    }

    #[rstest]
    #[case::register("/register", json!({}), json!([
        { "message": "email is a required field", "field": "email" },
        { "message": "password is a required field", "field": "password" }
    ]))]
    #[case::login_bad_email("/login", json!({ "email": "nope", "password": "pw" }), json!([
        { "message": "email must be a valid email address", "field": "email" }
    ]))]
    #[case::forgotten("/forgotten-password", json!({ "email": "" }), json!([
        { "message": "email is a required field", "field": "email" }
    ]))]
    #[case::reset("/reset-password", json!({}), json!([
        { "message": "password is a required field", "field": "password" }
    ]))]
    #[case::refresh("/refresh-token", json!({ "refreshToken": "" }), json!([
        { "message": "refreshToken is a required field", "field": "refreshToken" }
    ]))]
    #[actix_web::test]
    async fn invalid_bodies_are_rejected_before_delegating(
        #[case] uri: &str,
        #[case] body: Value,
        #[case] errors: Value,
    ) {
        let stub = Arc::new(StubAuth::new(Reply::Succeed));

        let response = call(&stub, post_json(uri, &body)).await;

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(
            body_json(response).await,
            json!({ "message": "Validation error", "errors": errors })
        );
        assert!(stub.calls().is_empty());
    }

    #[actix_web::test]
    async fn malformed_json_is_a_server_error() {
        let stub = Arc::new(StubAuth::new(Reply::Succeed));

        let response = call(
            &stub,
            test::TestRequest::post()
                .uri("/login")
                .insert_header((header::CONTENT_TYPE, "application/json"))
                .set_payload("{\"email\":"),
        )
        .await;

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_json(response).await;
        assert!(body["message"].as_str().is_some_and(|m| !m.is_empty()));
        assert!(stub.calls().is_empty());
    }

    #[rstest]
    #[case::unauthorised(401, StatusCode::UNAUTHORIZED)]
    #[case::rejected(400, StatusCode::BAD_REQUEST)]
    #[case::other_remote_code(422, StatusCode::BAD_REQUEST)]
    #[actix_web::test]
    async fn service_errors_map_on_code(#[case] code: i64, #[case] expected: StatusCode) {
        let error = ServiceError::new(code, "invalid_credentials", "Invalid login credentials");
        let stub = Arc::new(StubAuth::new(Reply::Reject(error)));

        let response = call(
            &stub,
            post_json(
                "/login",
                &json!({ "email": "ada@example.com", "password": "pw" }),
            ),
        )
        .await;

        assert_eq!(response.status(), expected);
        assert_eq!(
            body_json(response).await,
            json!({
                "code": code,
                "error_code": "invalid_credentials",
                "msg": "Invalid login credentials"
            })
        );
    }

    #[actix_web::test]
    async fn transport_failures_are_server_errors() {
        let stub = Arc::new(StubAuth::new(Reply::Fail(AuthTransportError::timeout(
            "deadline elapsed",
        ))));

        let response = call(
            &stub,
            post_json("/refresh-token", &json!({ "refreshToken": "r-1" })),
        )
        .await;

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body_json(response).await,
            json!({ "message": "identity service timed out: deadline elapsed" })
        );
    }

    #[rstest]
    #[case::bearer(Some("Bearer jwt-1"), Some("jwt-1"))]
    #[case::lowercase_scheme(Some("bearer jwt-1"), Some("jwt-1"))]
    #[case::other_scheme(Some("Basic abc"), None)]
    #[case::empty_token(Some("Bearer   "), None)]
    #[case::missing(None, None)]
    #[actix_web::test]
    async fn logout_forwards_bearer_token(
        #[case] authorization: Option<&str>,
        #[case] expected: Option<&str>,
    ) {
        let stub = Arc::new(StubAuth::new(Reply::Succeed));
        let mut request = test::TestRequest::post().uri("/logout");
        if let Some(value) = authorization {
            request = request.insert_header((header::AUTHORIZATION, value));
        }

        let response = call(&stub, request).await;

        assert_eq!(response.status(), StatusCode::NO_CONTENT);
        assert_eq!(
            stub.calls(),
            vec![RecordedCall {
                operation: "sign_out",
                subject: None,
                token: expected.map(str::to_owned),
            }]
        );
    }

    #[actix_web::test]
    async fn reset_password_forwards_token_and_password() {
        let stub = Arc::new(StubAuth::new(Reply::Succeed));

        let response = call(
            &stub,
            post_json("/reset-password", &json!({ "password": "new-pw" }))
                .insert_header((header::AUTHORIZATION, "Bearer recovery-jwt")),
        )
        .await;

        assert_eq!(response.status(), StatusCode::NO_CONTENT);
        assert_eq!(
            stub.calls(),
            vec![RecordedCall {
                operation: "reset_password",
                subject: Some("new-pw".to_owned()),
                token: Some("recovery-jwt".to_owned()),
            }]
        );
    }

    #[rstest]
    #[case::with_bearer(Some("Bearer jwt-1"), Some("jwt-1"))]
    #[case::without_bearer(None, None)]
    #[actix_web::test]
    async fn forgotten_password_answers_no_content(
        #[case] authorization: Option<&str>,
        #[case] expected: Option<&str>,
    ) {
        let stub = Arc::new(StubAuth::new(Reply::Succeed));
        let mut request = post_json("/forgotten-password", &json!({ "email": "ada@example.com" }));
        if let Some(value) = authorization {
            request = request.insert_header((header::AUTHORIZATION, value));
        }

        let response = call(&stub, request).await;

        assert_eq!(response.status(), StatusCode::NO_CONTENT);
        assert_eq!(
            stub.calls(),
            vec![RecordedCall {
                operation: "forgotten_password",
                subject: Some("ada@example.com".to_owned()),
                token: expected.map(str::to_owned),
            }]
        );
    }
}
