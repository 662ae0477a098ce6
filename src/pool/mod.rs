//! The share pool and its thread-safe handle.
//!
//! | Type | Ownership |
//! |------|-----------|
//! | [`SharePool`] | single owner, `&mut self` provide |
//! | [`SharedPool`] | cloneable, mutex-guarded |
//!
//! The issuance arithmetic lives in [`issuance`] as a pure function so it
//! can be quoted without a pool.

pub mod issuance;
mod share_pool;
mod shared;

#[cfg(test)]
#[allow(clippy::panic)]
mod proptest_properties;

pub use share_pool::SharePool;
pub use shared::SharedPool;
