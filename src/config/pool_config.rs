//! Configuration for a two-asset share pool.

use core::fmt;

use crate::domain::{AssetPair, ParticipantId, Precision};
use crate::error::AmmError;

/// Immutable parameters of a pool: the asset pair it accepts, the
/// custody account that receives deposits, and the share precision.
///
/// # Validation
///
/// - The asset pair is validated at [`AssetPair`] construction time.
/// - The pool account must not be [`ParticipantId::ZERO`].
/// - Precision is validated at [`Precision`] construction time.
///
/// # Examples
///
/// ```
/// use share_amm::config::PoolConfig;
/// use share_amm::domain::{AssetId, AssetPair, ParticipantId, Precision};
///
/// let pair = AssetPair::new(
///     AssetId::from_bytes([1u8; 32]),
///     AssetId::from_bytes([2u8; 32]),
/// ).expect("distinct");
/// let cfg = PoolConfig::new(pair, ParticipantId::from_bytes([99u8; 32])).expect("valid");
/// assert_eq!(cfg.precision(), Precision::DEFAULT);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PoolConfig {
    asset_pair: AssetPair,
    account: ParticipantId,
    precision: Precision,
}

impl PoolConfig {
    /// Creates a configuration with the default precision.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidConfiguration`] if `account` is the zero
    /// identity.
    pub fn new(asset_pair: AssetPair, account: ParticipantId) -> Result<Self, AmmError> {
        let config = Self {
            asset_pair,
            account,
            precision: Precision::DEFAULT,
        };
        config.validate()?;
        Ok(config)
    }

    /// Replaces the share precision.
    #[must_use]
    pub const fn with_precision(mut self, precision: Precision) -> Self {
        self.precision = precision;
        self
    }

    /// Validates all configuration invariants.
    ///
    /// Deserialized configs bypass [`PoolConfig::new`], so pool
    /// construction calls this again.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidConfiguration`] if `account` is the zero
    /// identity, or [`AmmError::InvalidAsset`] if the pair is degenerate.
    pub fn validate(&self) -> Result<(), AmmError> {
        if self.account.is_zero() {
            return Err(AmmError::InvalidConfiguration(
                "pool account must not be the zero identity",
            ));
        }
        if self.asset_pair.first() == self.asset_pair.second() {
            return Err(AmmError::InvalidAsset(
                "asset pair requires two distinct assets",
            ));
        }
        Ok(())
    }

    /// Returns the asset pair.
    #[must_use]
    pub const fn asset_pair(&self) -> &AssetPair {
        &self.asset_pair
    }

    /// Returns the pool's custody account.
    #[must_use]
    pub const fn account(&self) -> ParticipantId {
        self.account
    }

    /// Returns the share precision.
    #[must_use]
    pub const fn precision(&self) -> Precision {
        self.precision
    }
}

impl fmt::Display for PoolConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "PoolConfig(pair=[{}, {}], account={}, precision={})",
            self.asset_pair.first(),
            self.asset_pair.second(),
            self.account,
            self.precision
        )
    }
}
