//! Three-way result of an identity service operation.

use super::ServiceError;
use super::ports::AuthTransportError;

/// Outcome of one auth operation.
///
/// Exactly one variant is produced per call. Callers match exhaustively
/// instead of inspecting several optional fields in a fragile order.
///
/// # Examples
/// ```
/// use authgate::domain::{AuthOutcome, ServiceError};
///
/// let outcome: AuthOutcome<u8> = AuthOutcome::Service(ServiceError::new(400, "bad", "bad"));
/// let described = match outcome {
///     AuthOutcome::Success(_) => "ok",
///     AuthOutcome::Service(_) => "rejected",
///     AuthOutcome::Transport(_) => "failed",
/// };
/// assert_eq!(described, "rejected");
/// ```
#[derive(Debug, Clone, PartialEq)]
#[must_use]
pub enum AuthOutcome<T> {
    /// The operation succeeded and produced a payload.
    Success(T),
    /// The identity service rejected the operation with a structured error.
    Service(ServiceError),
    /// The operation failed locally or on the network.
    Transport(AuthTransportError),
}

impl<T> AuthOutcome<T> {
    /// Transform the success payload, leaving failures untouched.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> AuthOutcome<U> {
        match self {
            Self::Success(value) => AuthOutcome::Success(f(value)),
            Self::Service(err) => AuthOutcome::Service(err),
            Self::Transport(err) => AuthOutcome::Transport(err),
        }
    }

    /// Transform a structured service error, leaving other outcomes untouched.
    pub fn map_service(self, f: impl FnOnce(ServiceError) -> ServiceError) -> Self {
        match self {
            Self::Service(err) => Self::Service(f(err)),
            other => other,
        }
    }
}
