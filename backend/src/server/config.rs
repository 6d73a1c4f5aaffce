//! HTTP server configuration object.

use std::time::Duration;

use super::settings::AppSettings;

/// Listener and timeout settings for [`create_server`](super::create_server).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub(crate) bind: (String, u16),
    pub(crate) keep_alive: Duration,
    pub(crate) client_request_timeout: Duration,
    pub(crate) shutdown_timeout_secs: u64,
}

impl ServerConfig {
    #[must_use]
    pub fn from_settings(settings: &AppSettings) -> Self {
        Self {
            bind: settings.bind_target(),
            keep_alive: settings.keep_alive(),
            client_request_timeout: settings.client_request_timeout(),
            shutdown_timeout_secs: settings.shutdown_timeout_secs(),
        }
    }

    /// Address the server binds to, formatted for logs.
    #[must_use]
    pub fn bind_label(&self) -> String {
        format!("{}:{}", self.bind.0, self.bind.1)
    }
}
