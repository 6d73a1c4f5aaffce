//! Outbound adapters implementing domain ports for external infrastructure.
//!
//! - **gotrue**: reqwest-backed client for the hosted identity service
//! - **persistence**: optional PostgreSQL connection pool
//!
//! Adapters are thin translators between domain types and wire formats. They
//! contain no business logic.

pub mod gotrue;
pub mod persistence;
