//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers the landing, auth and health endpoints together with
//! the identity payload schemas and the bearer security scheme. Swagger UI
//! serves it at `/docs` in debug builds.

use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::domain::{AuthenticatedSession, ServiceError, UserRecord};
use crate::inbound::http::error::{ErrorMessage, ValidationFailure};
use crate::inbound::http::home::Welcome;
use crate::inbound::http::requests::{
    ForgottenPasswordRequest, LoginRequest, RefreshTokenRequest, RegisterRequest,
    ResetPasswordRequest,
};
use crate::inbound::http::validation::FieldError;

/// Adds the bearer token scheme used by logout and reset-password.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi
            .components
            .get_or_insert_with(utoipa::openapi::Components::default);

        let bearer = HttpBuilder::new()
            .scheme(HttpAuthScheme::Bearer)
            .bearer_format("JWT")
            .description(Some("Access or recovery token issued by the identity service."))
            .build();
        components.add_security_scheme("bearer", SecurityScheme::Http(bearer));
    }
}

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    modifiers(&SecurityAddon),
    info(
        title = "authgate API",
        description = "Account endpoints backed by a hosted GoTrue-compatible identity service."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::home::home,
        crate::inbound::http::auth::register,
        crate::inbound::http::auth::login,
        crate::inbound::http::auth::logout,
        crate::inbound::http::auth::forgotten_password,
        crate::inbound::http::auth::reset_password,
        crate::inbound::http::auth::refresh_token,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        Welcome,
        RegisterRequest,
        LoginRequest,
        ForgottenPasswordRequest,
        ResetPasswordRequest,
        RefreshTokenRequest,
        UserRecord,
        AuthenticatedSession,
        ServiceError,
        ErrorMessage,
        ValidationFailure,
        FieldError
    )),
    tags(
        (name = "home", description = "Landing endpoint"),
        (name = "auth", description = "Account lifecycle backed by the identity service"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
