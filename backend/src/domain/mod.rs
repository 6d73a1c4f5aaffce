//! Domain primitives, remote identity records, and ports.
//!
//! Purpose: define the strongly typed values exchanged between the HTTP
//! adapter and the identity service client. Records mirrored from the remote
//! service are plain pass-through data; locally constructed values (such as
//! [`Credentials`] and [`BearerToken`]) keep secrets in zeroizing buffers.
//!
//! Public surface:
//! - [`Credentials`], [`BearerToken`]: request-scoped authentication inputs.
//! - [`UserRecord`], [`AuthenticatedSession`]: remote identity payloads.
//! - [`ServiceError`]: structured error reported by the identity service.
//! - [`AuthOutcome`]: the three-way result of every auth operation.
//! - [`TraceId`]: request correlation identifier.

pub mod auth;
pub mod identity;
pub mod outcome;
pub mod ports;
pub mod service_error;
pub mod trace_id;

pub use self::auth::{BearerToken, Credentials};
pub use self::identity::{AuthenticatedSession, UserRecord};
pub use self::outcome::AuthOutcome;
pub use self::service_error::{INVALID_CREDENTIALS, ServiceError};
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
