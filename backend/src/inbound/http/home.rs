//! Landing endpoint.

use actix_web::{get, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::state::HttpState;

/// `GET /` response body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Welcome {
    #[schema(example = "Welcome to authgate.")]
    pub message: String,
}

/// Greet the caller with the configured application name.
#[utoipa::path(
    get,
    path = "/",
    responses((status = 200, description = "Greeting", body = Welcome)),
    tags = ["home"],
    operation_id = "home",
    security([])
)]
#[get("/")]
pub async fn home(state: web::Data<HttpState>) -> web::Json<Welcome> {
    web::Json(Welcome {
        message: format!("Welcome to {}.", state.app_name),
    })
}
