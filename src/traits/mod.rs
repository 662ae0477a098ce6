//! Core trait abstractions.
//!
//! [`Custody`] is the injected token-transfer capability,
//! [`ShareAccounting`] is the read-only query surface, and [`FromConfig`]
//! is configuration-driven construction.

mod custody;
mod from_config;
mod share_accounting;

pub use custody::Custody;
pub use from_config::FromConfig;
pub use share_accounting::ShareAccounting;
