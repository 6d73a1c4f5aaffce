//! HTTP adapter error mapping.
//!
//! Purpose: turn validation failures, identity service rejections and local
//! faults into consistent JSON responses and status codes, keeping the domain
//! types free of HTTP concerns.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use serde::{Deserialize, Serialize};
use tracing::error;
use utoipa::ToSchema;

use super::validation::FieldError;
use crate::domain::ports::AuthTransportError;
use crate::domain::{ServiceError, TRACE_ID_HEADER, TraceId};

/// Convenient result alias for HTTP handlers.
pub type ApiResult<T> = Result<T, ApiError>;

/// Top-level message of every 422 response.
pub const VALIDATION_MESSAGE: &str = "Validation error";

/// Message used for 500 responses when no detail is available.
pub const GENERIC_SERVER_ERROR: &str =
    "the server encountered a problem and could not process your request";

/// Failure surfaced by an HTTP handler.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ApiError {
    /// One or more request fields failed validation.
    #[error("Validation error")]
    Validation(Vec<FieldError>),
    /// The identity service rejected the operation.
    #[error("{0}")]
    Service(ServiceError),
    /// A local or transport fault.
    #[error("{message}")]
    Internal { message: String },
}

impl ApiError {
    /// Internal error carrying `message`, or the generic text when empty.
    pub fn internal(message: impl Into<String>) -> Self {
        let message = message.into();
        Self::Internal {
            message: if message.trim().is_empty() {
                GENERIC_SERVER_ERROR.to_owned()
            } else {
                message
            },
        }
    }
}

impl From<AuthTransportError> for ApiError {
    fn from(err: AuthTransportError) -> Self {
        Self::internal(err.to_string())
    }
}

/// Body of 500 responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ErrorMessage {
    #[schema(example = "the server encountered a problem and could not process your request")]
    pub message: String,
}

/// Body of 422 responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ValidationFailure {
    #[schema(example = "Validation error")]
    pub message: String,
    pub errors: Vec<FieldError>,
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::Service(err) if err.is_unauthorized() => StatusCode::UNAUTHORIZED,
            Self::Service(_) => StatusCode::BAD_REQUEST,
            Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let trace_id = TraceId::current();
        let mut builder = HttpResponse::build(self.status_code());
        if let Some(id) = trace_id {
            builder.insert_header((TRACE_ID_HEADER, id.to_string()));
        }

        match self {
            Self::Validation(errors) => builder.json(ValidationFailure {
                message: VALIDATION_MESSAGE.to_owned(),
                errors: errors.clone(),
            }),
            Self::Service(err) => builder.json(err),
            Self::Internal { message } => {
                error!(
                    trace_id = %trace_id.map_or_else(|| "-".to_owned(), |id| id.to_string()),
                    error = %message,
                    "request failed with internal error"
                );
                builder.json(ErrorMessage {
                    message: message.clone(),
                })
            }
        }
    }
}
