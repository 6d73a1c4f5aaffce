//! Connection settings for the identity service.

use std::fmt;

use zeroize::Zeroizing;

/// Fixed prefix every identity service path lives under.
pub const AUTH_ENDPOINT: &str = "auth/v1";

/// Base URL and API key shared by every outbound call.
///
/// Built once at start-up and read concurrently afterwards; it is never
/// mutated. The key is wiped on drop and redacted from `Debug`.
#[derive(Clone)]
pub struct AuthServiceConfig {
    base_url: String,
    api_key: Zeroizing<String>,
}

impl AuthServiceConfig {
    /// Create a configuration for the service rooted at `base_url`.
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: Zeroizing::new(api_key.into()),
        }
    }

    /// Service root as configured.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Static key sent in the `apikey` header.
    pub fn api_key(&self) -> &str {
        self.api_key.as_str()
    }

    /// Join `relative_path` onto `<base_url>/auth/v1/`.
    ///
    /// Trailing slashes on the base URL are tolerated.
    pub fn endpoint(&self, relative_path: &str) -> String {
        format!(
            "{}/{AUTH_ENDPOINT}/{}",
            self.base_url.trim_end_matches('/'),
            relative_path.trim_start_matches('/')
        )
    }
}

impl fmt::Debug for AuthServiceConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthServiceConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &"<redacted>")
            .finish()
    }
}
