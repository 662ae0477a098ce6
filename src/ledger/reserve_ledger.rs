//! Cumulative per-asset reserves.

use std::collections::HashMap;

use crate::domain::{Amount, AssetId, AssetPair};
use crate::error::AmmError;
use crate::math::CheckedArithmetic;

/// A reserve total that has been computed but not yet written.
///
/// Produced by [`ReserveLedger::checked_increment`] and consumed by
/// [`ReserveLedger::commit`]. Staging lets a caller detect every overflow
/// of a multi-asset update before touching the ledger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub struct StagedReserve {
    asset: AssetId,
    total: Amount,
}

impl StagedReserve {
    /// The asset whose total this is.
    #[must_use]
    pub const fn asset(&self) -> AssetId {
        self.asset
    }

    /// The would-be total after the increment.
    pub const fn total(&self) -> Amount {
        self.total
    }
}

/// Holds, for each asset, the cumulative quantity deposited into the pool.
///
/// Pure state with no policy: any asset may be read, and reading one that
/// was never credited yields zero rather than an error.
///
/// # Examples
///
/// ```
/// use share_amm::domain::{Amount, AssetId};
/// use share_amm::ledger::ReserveLedger;
///
/// let usdc = AssetId::from_bytes([1u8; 32]);
/// let mut ledger = ReserveLedger::new();
/// assert_eq!(ledger.total_amount(&usdc), Amount::ZERO);
///
/// ledger.increment(usdc, Amount::new(100)).expect("no overflow");
/// assert_eq!(ledger.total_amount(&usdc), Amount::new(100));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReserveLedger {
    totals: HashMap<AssetId, Amount>,
}

impl ReserveLedger {
    /// Creates an empty ledger.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current cumulative quantity of `asset`; zero if never credited.
    pub fn total_amount(&self, asset: &AssetId) -> Amount {
        self.totals.get(asset).copied().unwrap_or(Amount::ZERO)
    }

    /// Snapshot of both assets of `pair`, in canonical order.
    pub fn reserves_of(&self, pair: &AssetPair) -> (Amount, Amount) {
        (
            self.total_amount(&pair.first()),
            self.total_amount(&pair.second()),
        )
    }

    /// Computes the total `asset` would have after adding `amount`, without
    /// mutating the ledger.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::Overflow`] if the new total exceeds `u128::MAX`.
    pub fn checked_increment(&self, asset: AssetId, amount: Amount) -> Result<StagedReserve, AmmError> {
        let total = self.total_amount(&asset).safe_add(&amount)?;
        Ok(StagedReserve { asset, total })
    }

    /// Writes a staged total.
    ///
    /// The staged value must come from [`checked_increment`] on this ledger
    /// with no intervening write to the same asset.
    ///
    /// [`checked_increment`]: Self::checked_increment
    pub fn commit(&mut self, staged: StagedReserve) {
        self.totals.insert(staged.asset, staged.total);
    }

    /// Adds `amount` to the tracked quantity of `asset`.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::Overflow`] if the new total would exceed
    /// `u128::MAX`; the ledger is left unchanged.
    pub fn increment(&mut self, asset: AssetId, amount: Amount) -> Result<(), AmmError> {
        let staged = self.checked_increment(asset, amount)?;
        self.commit(staged);
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    fn asset(b: u8) -> AssetId {
        AssetId::from_bytes([b; 32])
    }

    #[test]
    fn unknown_asset_reads_zero() {
        let ledger = ReserveLedger::new();
        assert_eq!(ledger.total_amount(&asset(9)), Amount::ZERO);
    }

    #[test]
    fn increments_accumulate() {
        let mut ledger = ReserveLedger::new();
        let Ok(()) = ledger.increment(asset(1), Amount::new(100)) else {
            panic!("expected Ok");
        };
        let Ok(()) = ledger.increment(asset(1), Amount::new(10)) else {
            panic!("expected Ok");
        };
        assert_eq!(ledger.total_amount(&asset(1)), Amount::new(110));
        assert_eq!(ledger.total_amount(&asset(2)), Amount::ZERO);
    }

    #[test]
    fn zero_increment_is_allowed() {
        let mut ledger = ReserveLedger::new();
        assert_eq!(ledger.increment(asset(1), Amount::ZERO), Ok(()));
        assert_eq!(ledger.total_amount(&asset(1)), Amount::ZERO);
    }

    #[test]
    fn overflow_leaves_total_unchanged() {
        let mut ledger = ReserveLedger::new();
        let Ok(()) = ledger.increment(asset(1), Amount::MAX) else {
            panic!("expected Ok");
        };
        assert_eq!(
            ledger.increment(asset(1), Amount::new(1)),
            Err(AmmError::Overflow("reserve accumulation overflow"))
        );
        assert_eq!(ledger.total_amount(&asset(1)), Amount::MAX);
    }

    #[test]
    fn staging_does_not_mutate() {
        let ledger = ReserveLedger::new();
        let Ok(staged) = ledger.checked_increment(asset(1), Amount::new(5)) else {
            panic!("expected Ok");
        };
        assert_eq!(staged.asset(), asset(1));
        assert_eq!(staged.total(), Amount::new(5));
        assert_eq!(ledger.total_amount(&asset(1)), Amount::ZERO);
    }

    #[test]
    fn reserves_of_pair() {
        let Ok(pair) = AssetPair::new(asset(2), asset(1)) else {
            panic!("valid pair");
        };
        let mut ledger = ReserveLedger::new();
        let (Ok(()), Ok(())) = (
            ledger.increment(asset(1), Amount::new(100)),
            ledger.increment(asset(2), Amount::new(200)),
        ) else {
            panic!("expected Ok");
        };
        assert_eq!(ledger.reserves_of(&pair), (Amount::new(100), Amount::new(200)));
    }
}
