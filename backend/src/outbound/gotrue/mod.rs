//! Identity service outbound adapter.
//!
//! Implements the [`AuthBackend`](crate::domain::ports::AuthBackend) port on
//! top of a small JSON envelope codec and a pluggable HTTP transport.

mod client;
mod config;
mod dto;
pub mod envelope;
#[cfg(any(test, feature = "test-support"))]
mod scripted;
mod transport;

pub use client::GoTrueAuthClient;
pub use config::{AUTH_ENDPOINT, AuthServiceConfig};
#[cfg(any(test, feature = "test-support"))]
pub use scripted::ScriptedTransport;
pub use transport::{
    DEFAULT_TIMEOUT, HttpTransport, OutboundRequest, ReqwestTransport, TransportResponse,
};
