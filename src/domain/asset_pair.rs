//! The two assets a pool is registered for.

use super::{AssetId, Amount};
use crate::error::AmmError;

/// An unordered pair of distinct assets, stored in canonical order.
///
/// The canonical ordering guarantees `first() < second()`, so `(A, B)` and
/// `(B, A)` describe the same pool. Callers never need to know which asset
/// is "first": [`AssetPair::arrange`] maps any caller order onto the
/// canonical one.
///
/// # Examples
///
/// ```
/// use share_amm::domain::{AssetId, AssetPair};
///
/// let usdc = AssetId::from_bytes([1u8; 32]);
/// let joe = AssetId::from_bytes([2u8; 32]);
///
/// let pair = AssetPair::new(joe, usdc).expect("distinct assets");
/// assert_eq!(pair.first(), usdc);
/// assert_eq!(pair.second(), joe);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AssetPair {
    asset_a: AssetId,
    asset_b: AssetId,
}

impl AssetPair {
    /// Creates a canonically-ordered `AssetPair`.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidAsset`] if both identifiers are equal.
    pub fn new(asset1: AssetId, asset2: AssetId) -> Result<Self, AmmError> {
        if asset1 == asset2 {
            return Err(AmmError::InvalidAsset(
                "asset pair requires two distinct assets",
            ));
        }
        let (asset_a, asset_b) = if asset1 < asset2 {
            (asset1, asset2)
        } else {
            (asset2, asset1)
        };
        Ok(Self { asset_a, asset_b })
    }

    /// Returns the first asset (lower identifier).
    #[must_use]
    pub const fn first(&self) -> AssetId {
        self.asset_a
    }

    /// Returns the second asset (higher identifier).
    #[must_use]
    pub const fn second(&self) -> AssetId {
        self.asset_b
    }

    /// Returns `true` if `asset` is one of the two registered assets.
    #[must_use]
    pub fn contains(&self, asset: &AssetId) -> bool {
        self.asset_a == *asset || self.asset_b == *asset
    }

    /// Reorders two `(asset, amount)` arguments into canonical order.
    ///
    /// Returns `(amount_of_first, amount_of_second)`.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidAsset`] if the two assets are not exactly
    /// this pair, in either order.
    pub fn arrange(
        &self,
        asset_x: AssetId,
        amount_x: Amount,
        asset_y: AssetId,
        amount_y: Amount,
    ) -> Result<(Amount, Amount), AmmError> {
        if asset_x == asset_y {
            return Err(AmmError::InvalidAsset("the same asset was supplied twice"));
        }
        if !self.contains(&asset_x) || !self.contains(&asset_y) {
            return Err(AmmError::InvalidAsset("asset is not part of this pool"));
        }
        if asset_x == self.asset_a {
            Ok((amount_x, amount_y))
        } else {
            Ok((amount_y, amount_x))
        }
    }
}
