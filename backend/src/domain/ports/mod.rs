//! Domain ports defining the edges of the hexagon.
//!
//! Ports describe how the domain expects to interact with driven adapters.
//! Their errors are strongly typed so adapters map failures into predictable
//! variants instead of returning `anyhow::Result`.

mod macros;
pub(crate) use macros::define_port_error;

mod auth_backend;

pub use auth_backend::{AuthBackend, AuthTransportError};
