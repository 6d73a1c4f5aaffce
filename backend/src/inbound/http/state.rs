//! Shared HTTP adapter state.
//!
//! Handlers receive this through `actix_web::web::Data` and depend only on
//! the [`AuthBackend`] port, so they stay testable without network I/O.

use std::sync::Arc;

use crate::domain::ports::AuthBackend;

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub auth: Arc<dyn AuthBackend>,
    /// Application name shown by `GET /`.
    pub app_name: String,
}

impl HttpState {
    pub fn new(auth: Arc<dyn AuthBackend>, app_name: impl Into<String>) -> Self {
        Self {
            auth,
            app_name: app_name.into(),
        }
    }
}
