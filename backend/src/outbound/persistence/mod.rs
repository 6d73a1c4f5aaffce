//! PostgreSQL connectivity via Diesel.
//!
//! Only the connection pool lives here; no repositories are defined because
//! account data is owned by the identity service.

mod pool;

pub use pool::{DbPool, PoolConfig, PoolError};
