//! Authentication inputs: credentials and bearer tokens.
//!
//! Both values are request scoped and hold secrets in [`Zeroizing`] buffers
//! so passwords and tokens are wiped when the request completes. Neither type
//! prints its secret through `Debug`.

use std::fmt;

use serde_json::Value;
use zeroize::Zeroizing;

/// Email/password pair forwarded to the identity service.
///
/// Field-level validation (required values, email syntax) happens in the
/// inbound adapter before these are constructed.
///
/// # Examples
/// ```
/// use authgate::domain::Credentials;
/// use serde_json::json;
///
/// let creds = Credentials::new("ada@example.com", "hunter2")
///     .with_data(json!({ "display_name": "Ada" }));
/// assert_eq!(creds.email(), "ada@example.com");
/// assert_eq!(creds.password(), "hunter2");
/// assert!(creds.data().is_some());
/// ```
#[derive(Clone, PartialEq)]
pub struct Credentials {
    email: String,
    password: Zeroizing<String>,
    data: Option<Value>,
}

impl Credentials {
    /// Build credentials from an email address and password.
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: Zeroizing::new(password.into()),
            data: None,
        }
    }

    /// Attach free-form user data sent along with a sign-up.
    #[must_use]
    pub fn with_data(mut self, data: Value) -> Self {
        self.data = Some(data);
        self
    }

    /// Email address identifying the account.
    pub fn email(&self) -> &str {
        self.email.as_str()
    }

    /// Password supplied by the caller.
    pub fn password(&self) -> &str {
        self.password.as_str()
    }

    /// Optional user data.
    pub fn data(&self) -> Option<&Value> {
        self.data.as_ref()
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .field("data", &self.data)
            .finish()
    }
}

/// Access token presented as `Authorization: Bearer <token>`.
///
/// ## Invariants
/// - The token is trimmed and never empty.
///
/// No further format checks are made: the identity service is the authority
/// on whether a token is valid.
#[derive(Clone, PartialEq, Eq)]
pub struct BearerToken(Zeroizing<String>);

impl BearerToken {
    /// Wrap a raw token, returning `None` when it is blank.
    ///
    /// # Examples
    /// ```
    /// use authgate::domain::BearerToken;
    ///
    /// assert_eq!(BearerToken::new(" abc ").map(|t| t.as_str().to_owned()), Some("abc".into()));
    /// assert!(BearerToken::new("  ").is_none());
    /// ```
    pub fn new(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(Zeroizing::new(trimmed.to_owned())))
        }
    }

    /// Extract the token from an `Authorization` header value.
    ///
    /// The scheme must be `Bearer` (matched case-insensitively). Any other
    /// scheme, or an empty token, yields `None`.
    pub fn from_authorization(header: &str) -> Option<Self> {
        let (scheme, token) = header.trim_start().split_once(' ')?;
        if scheme.eq_ignore_ascii_case("bearer") {
            Self::new(token)
        } else {
            None
        }
    }

    /// Borrow the raw token.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Debug for BearerToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("BearerToken(<redacted>)")
    }
}
