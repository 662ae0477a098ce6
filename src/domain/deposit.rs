//! A validated two-sided deposit.

use core::fmt;

use super::{Amount, AssetId, AssetPair};
use crate::error::AmmError;

/// A proposed deposit into a pool, already arranged in the pair's
/// canonical order.
///
/// Construction enforces the `provide` preconditions: the two assets are
/// exactly the pool's pair (in any order) and both amounts are strictly
/// positive. A `Deposit` that exists is therefore always acceptable input
/// to the share issuance engine.
///
/// # Examples
///
/// ```
/// use share_amm::domain::{Amount, AssetId, AssetPair, Deposit};
///
/// let a = AssetId::from_bytes([1u8; 32]);
/// let b = AssetId::from_bytes([2u8; 32]);
/// let pair = AssetPair::new(a, b).expect("distinct");
///
/// let d = Deposit::new(&pair, b, Amount::new(20), a, Amount::new(10)).expect("valid");
/// assert_eq!(d.amount_a(), Amount::new(10));
/// assert_eq!(d.amount_b(), Amount::new(20));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Deposit {
    amount_a: Amount,
    amount_b: Amount,
}

impl Deposit {
    /// Validates and arranges a deposit against `pair`.
    ///
    /// Asset checks run before amount checks, so a call that is wrong on
    /// both counts reports [`AmmError::InvalidAsset`].
    ///
    /// # Errors
    ///
    /// - [`AmmError::InvalidAsset`] if the assets are not exactly `pair`.
    /// - [`AmmError::InvalidAmount`] if either amount is zero.
    pub fn new(
        pair: &AssetPair,
        asset_x: AssetId,
        amount_x: Amount,
        asset_y: AssetId,
        amount_y: Amount,
    ) -> Result<Self, AmmError> {
        let (amount_a, amount_b) = pair.arrange(asset_x, amount_x, asset_y, amount_y)?;
        if amount_a.is_zero() || amount_b.is_zero() {
            return Err(AmmError::InvalidAmount("deposit amounts must be positive"));
        }
        Ok(Self { amount_a, amount_b })
    }

    /// Offered amount of the pair's first asset.
    pub const fn amount_a(&self) -> Amount {
        self.amount_a
    }

    /// Offered amount of the pair's second asset.
    pub const fn amount_b(&self) -> Amount {
        self.amount_b
    }
}

impl fmt::Display for Deposit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Deposit(a={}, b={})", self.amount_a, self.amount_b)
    }
}
