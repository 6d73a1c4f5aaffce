//! Records mirrored from the identity service.
//!
//! These are read-only pass-through payloads: the gateway decodes them from
//! the remote response and re-encodes them for the HTTP client unchanged.
//! Every field tolerates absence or an explicit `null` so partial payloads
//! still decode.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use utoipa::ToSchema;

/// Decode `null` as the field's default value.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Identity record for one user account.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct UserRecord {
    /// Remote user identifier.
    #[serde(deserialize_with = "null_as_default")]
    #[schema(example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    pub id: String,
    /// Token audience the account belongs to.
    #[serde(deserialize_with = "null_as_default")]
    #[schema(example = "authenticated")]
    pub aud: String,
    /// Role assigned by the identity service.
    #[serde(deserialize_with = "null_as_default")]
    pub role: String,
    /// Account email address.
    #[serde(deserialize_with = "null_as_default")]
    #[schema(example = "ada@example.com")]
    pub email: String,
    pub invited_at: Option<DateTime<Utc>>,
    pub confirmed_at: Option<DateTime<Utc>>,
    pub confirmation_sent_at: Option<DateTime<Utc>>,
    /// Provider metadata maintained by the identity service.
    #[serde(deserialize_with = "null_as_default")]
    #[schema(value_type = Object)]
    pub app_metadata: Map<String, Value>,
    /// Free-form metadata supplied at sign-up.
    #[serde(deserialize_with = "null_as_default")]
    #[schema(value_type = Object)]
    pub user_metadata: Map<String, Value>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Session issued on sign-in, token refresh, or password recovery.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct AuthenticatedSession {
    /// Short-lived JWT used as the bearer token.
    #[serde(deserialize_with = "null_as_default")]
    pub access_token: String,
    /// Token scheme, normally `bearer`.
    #[serde(deserialize_with = "null_as_default")]
    #[schema(example = "bearer")]
    pub token_type: String,
    /// Access token lifetime in seconds.
    #[serde(deserialize_with = "null_as_default")]
    #[schema(example = 3600)]
    pub expires_in: i64,
    /// Unix timestamp at which the access token expires, when reported.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<i64>,
    /// Long-lived token accepted by `POST /refresh-token`.
    #[serde(deserialize_with = "null_as_default")]
    pub refresh_token: String,
    /// Snapshot of the signed-in user.
    #[serde(deserialize_with = "null_as_default")]
    pub user: UserRecord,
    /// OAuth provider access token, when the session came from a provider.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider_token: Option<String>,
    /// OAuth provider refresh token, when the session came from a provider.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider_refresh_token: Option<String>,
}
