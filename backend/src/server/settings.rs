//! Application settings loaded via OrthoConfig.
//!
//! Values come from CLI flags, `AUTHGATE_*` environment variables and an
//! optional configuration file, in increasing precedence. Unset values fall
//! back to the defaults documented on each accessor.

use std::fmt;
use std::time::Duration;

use authgate::outbound::gotrue::AuthServiceConfig;
use ortho_config::OrthoConfig;
use serde::Deserialize;

const DEFAULT_APP_NAME: &str = "authgate";
const DEFAULT_APP_ENV: &str = "development";
const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_IDLE_TIMEOUT_SECS: u64 = 60;
const DEFAULT_READ_TIMEOUT_SECS: u64 = 10;
const DEFAULT_SHUTDOWN_TIMEOUT_SECS: u64 = 30;

/// Settings that cannot be defaulted.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SettingsError {
    #[error("AUTHGATE_AUTH_URL must be set to the identity service base URL")]
    MissingAuthUrl,
    #[error("AUTHGATE_AUTH_KEY must be set to the identity service API key")]
    MissingAuthKey,
}

/// Runtime configuration for the server binary.
#[derive(Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "AUTHGATE")]
pub struct AppSettings {
    /// Name shown by the landing endpoint.
    pub app_name: Option<String>,
    /// Deployment environment label used in logs.
    pub app_env: Option<String>,
    /// Interface to bind.
    pub host: Option<String>,
    /// Port to bind.
    pub port: Option<u16>,
    /// Keep-alive for idle connections, in seconds.
    pub idle_timeout_secs: Option<u64>,
    /// Time allowed for a client to send request headers, in seconds.
    pub read_timeout_secs: Option<u64>,
    /// Grace period for in-flight requests on shutdown, in seconds.
    pub shutdown_timeout_secs: Option<u64>,
    /// PostgreSQL URL; the pool is disabled when unset.
    pub database_url: Option<String>,
    /// Base URL of the identity service.
    pub auth_url: Option<String>,
    /// API key for the identity service.
    pub auth_key: Option<String>,
}

fn non_blank(value: Option<&String>) -> Option<&str> {
    value.map(|raw| raw.trim()).filter(|raw| !raw.is_empty())
}

impl AppSettings {
    pub fn app_name(&self) -> &str {
        non_blank(self.app_name.as_ref()).unwrap_or(DEFAULT_APP_NAME)
    }

    pub fn app_env(&self) -> &str {
        non_blank(self.app_env.as_ref()).unwrap_or(DEFAULT_APP_ENV)
    }

    /// Host and port for `HttpServer::bind`.
    pub fn bind_target(&self) -> (String, u16) {
        let host = non_blank(self.host.as_ref()).unwrap_or(DEFAULT_HOST);
        (host.to_owned(), self.port.unwrap_or(DEFAULT_PORT))
    }

    pub fn keep_alive(&self) -> Duration {
        Duration::from_secs(self.idle_timeout_secs.unwrap_or(DEFAULT_IDLE_TIMEOUT_SECS))
    }

    pub fn client_request_timeout(&self) -> Duration {
        Duration::from_secs(self.read_timeout_secs.unwrap_or(DEFAULT_READ_TIMEOUT_SECS))
    }

    pub fn shutdown_timeout_secs(&self) -> u64 {
        self.shutdown_timeout_secs
            .unwrap_or(DEFAULT_SHUTDOWN_TIMEOUT_SECS)
    }

    pub fn database_url(&self) -> Option<&str> {
        non_blank(self.database_url.as_ref())
    }

    /// Identity service connection settings.
    ///
    /// # Errors
    ///
    /// Fails when the URL or key is missing or blank.
    pub fn auth_service(&self) -> Result<AuthServiceConfig, SettingsError> {
        let url = non_blank(self.auth_url.as_ref()).ok_or(SettingsError::MissingAuthUrl)?;
        let key = non_blank(self.auth_key.as_ref()).ok_or(SettingsError::MissingAuthKey)?;
        Ok(AuthServiceConfig::new(url, key))
    }
}

impl fmt::Debug for AppSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let redact = |value: &Option<String>| value.as_ref().map(|_| "<redacted>");
        f.debug_struct("AppSettings")
            .field("app_name", &self.app_name)
            .field("app_env", &self.app_env)
            .field("host", &self.host)
            .field("port", &self.port)
            .field("idle_timeout_secs", &self.idle_timeout_secs)
            .field("read_timeout_secs", &self.read_timeout_secs)
            .field("shutdown_timeout_secs", &self.shutdown_timeout_secs)
            .field("database_url", &redact(&self.database_url))
            .field("auth_url", &self.auth_url)
            .field("auth_key", &redact(&self.auth_key))
            .finish()
    }
}
