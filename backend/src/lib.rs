//! Authentication gateway library modules.
//!
//! The crate follows a hexagonal layout: [`domain`] owns the types and ports,
//! [`inbound`] adapts HTTP requests onto those ports, and [`outbound`] talks
//! to the hosted identity service and the optional database.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use domain::TraceId;
pub use middleware::Trace;
