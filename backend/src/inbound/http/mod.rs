//! HTTP inbound adapter exposing the REST endpoints.

pub mod auth;
pub mod error;
pub mod health;
pub mod home;
pub mod requests;
pub mod response;
pub mod state;
#[cfg(test)]
pub mod test_utils;
pub mod validation;

use actix_web::web;

pub use error::{ApiError, ApiResult};
pub use health::HealthState;
pub use state::HttpState;

/// Register the landing page and auth endpoints.
///
/// Callers supply [`HttpState`] as app data.
///
/// # Examples
/// ```
/// use actix_web::App;
///
/// let app = App::new().configure(authgate::inbound::http::configure);
/// ```
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(home::home)
        .service(auth::register)
        .service(auth::login)
        .service(auth::logout)
        .service(auth::forgotten_password)
        .service(auth::reset_password)
        .service(auth::refresh_token);
}

/// Register the health probes.
///
/// Callers supply [`HealthState`] as app data.
pub fn configure_health(cfg: &mut web::ServiceConfig) {
    cfg.service(health::ready).service(health::live);
}
