//! Generic construction trait for pool instantiation from configuration.
//!
//! [`FromConfig`] gives every pool flavour the same construction entry
//! point. Implementations **must** validate the whole configuration: a
//! successfully constructed pool is guaranteed to be in a valid empty
//! state (zero supply, zero reserves).

use crate::error::AmmError;

/// Builds a value from a validated configuration.
///
/// # Errors
///
/// Returns [`AmmError::InvalidConfiguration`] (or a more specific
/// variant) if the configuration is invalid.
pub trait FromConfig<C> {
    /// Creates a new instance from `config`.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InvalidConfiguration`] if any parameter is out of range.
    /// - [`AmmError::InvalidAsset`] if the asset pair is invalid.
    fn from_config(config: &C) -> Result<Self, AmmError>
    where
        Self: Sized;
}
