//! Maps auth outcomes onto HTTP responses.

use actix_web::HttpResponse;
use serde::Serialize;

use super::error::{ApiError, ApiResult};
use crate::domain::AuthOutcome;

/// Status used when an operation succeeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SuccessStatus {
    /// 200 with the payload as JSON.
    Ok,
    /// 201 with the payload as JSON.
    Created,
    /// 204 with an empty body; the payload is dropped.
    NoContent,
}

pub(crate) fn respond<T: Serialize>(
    outcome: AuthOutcome<T>,
    status: SuccessStatus,
) -> ApiResult<HttpResponse> {
    match outcome {
        AuthOutcome::Success(value) => Ok(match status {
            SuccessStatus::Ok => HttpResponse::Ok().json(value),
            SuccessStatus::Created => HttpResponse::Created().json(value),
            SuccessStatus::NoContent => HttpResponse::NoContent().finish(),
        }),
        AuthOutcome::Service(err) => Err(ApiError::Service(err)),
        AuthOutcome::Transport(err) => Err(err.into()),
    }
}
