//! Declarative pool configuration.
//!
//! [`PoolConfig`] is the blueprint a pool is built from via
//! [`FromConfig`](crate::traits::FromConfig).

mod pool_config;

pub use pool_config::PoolConfig;
