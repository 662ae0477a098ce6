//! In-process custody backend.

use std::collections::HashMap;

use tracing::{debug, warn};

use crate::domain::{Amount, AssetId, ParticipantId};
use crate::error::AmmError;
use crate::math::CheckedArithmetic;
use crate::traits::Custody;

/// Balances and allowances held in memory.
///
/// Used as the custody backend for tests, demos and simulations. Supports
/// minting fresh balances ([`mint`](Self::mint), a faucet) and granting
/// allowances ([`approve`](Self::approve)).
///
/// # Examples
///
/// ```
/// use share_amm::custody::InMemoryCustody;
/// use share_amm::domain::{Amount, AssetId, ParticipantId};
/// use share_amm::traits::Custody;
///
/// let usdc = AssetId::from_bytes([1u8; 32]);
/// let alice = ParticipantId::from_bytes([10u8; 32]);
/// let pool = ParticipantId::from_bytes([99u8; 32]);
///
/// let mut custody = InMemoryCustody::new();
/// custody.mint(usdc, alice, Amount::new(500)).expect("mint");
/// custody.approve(usdc, alice, pool, Amount::new(100));
/// custody.transfer_from(usdc, alice, pool, Amount::new(100)).expect("transfer");
///
/// assert_eq!(custody.balance_of(&usdc, &alice), Amount::new(400));
/// assert_eq!(custody.balance_of(&usdc, &pool), Amount::new(100));
/// ```
#[derive(Debug, Clone, Default)]
pub struct InMemoryCustody {
    balances: HashMap<(AssetId, ParticipantId), Amount>,
    allowances: HashMap<(AssetId, ParticipantId, ParticipantId), Amount>,
}

impl InMemoryCustody {
    /// Creates an empty custody with no balances.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Credits `amount` of `asset` to `holder` out of thin air.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::Overflow`] if the balance would overflow.
    pub fn mint(&mut self, asset: AssetId, holder: ParticipantId, amount: Amount) -> Result<(), AmmError> {
        let balance = self.balance_of(&asset, &holder).safe_add(&amount)?;
        self.balances.insert((asset, holder), balance);
        Ok(())
    }

    /// Debits `from` and credits `to`, writing nothing unless both succeed.
    fn move_balance(
        &mut self,
        asset: AssetId,
        from: ParticipantId,
        to: ParticipantId,
        amount: Amount,
    ) -> Result<(), AmmError> {
        let from_balance = self
            .balance_of(&asset, &from)
            .checked_sub(&amount)
            .ok_or(AmmError::InsufficientBalance)?;
        if from == to {
            return Ok(());
        }
        let to_balance = self
            .balance_of(&asset, &to)
            .checked_add(&amount)
            .ok_or(AmmError::Overflow("custody balance overflow"))?;
        self.balances.insert((asset, from), from_balance);
        self.balances.insert((asset, to), to_balance);
        Ok(())
    }

    /// Sets the allowance `spender` has over `owner`'s `asset` balance.
    ///
    /// Replaces any previous allowance.
    pub fn approve(&mut self, asset: AssetId, owner: ParticipantId, spender: ParticipantId, amount: Amount) {
        self.allowances.insert((asset, owner, spender), amount);
    }
}

impl Custody for InMemoryCustody {
    fn balance_of(&self, asset: &AssetId, holder: &ParticipantId) -> Amount {
        self.balances
            .get(&(*asset, *holder))
            .copied()
            .unwrap_or(Amount::ZERO)
    }

    fn allowance(&self, asset: &AssetId, owner: &ParticipantId, spender: &ParticipantId) -> Amount {
        self.allowances
            .get(&(*asset, *owner, *spender))
            .copied()
            .unwrap_or(Amount::ZERO)
    }

    fn transfer_from(
        &mut self,
        asset: AssetId,
        from: ParticipantId,
        to: ParticipantId,
        amount: Amount,
    ) -> Result<(), AmmError> {
        if let Err(e) = self.check_transfer(&asset, &from, &to, amount) {
            warn!(%asset, %from, %to, %amount, error = %e, "custody transfer refused");
            return Err(e);
        }

        let allowance = self.allowance(&asset, &from, &to).safe_sub(&amount)?;
        self.move_balance(asset, from, to, amount)?;
        self.allowances.insert((asset, from, to), allowance);

        debug!(%asset, %from, %to, %amount, "custody transfer");
        Ok(())
    }

    fn transfer(
        &mut self,
        asset: AssetId,
        from: ParticipantId,
        to: ParticipantId,
        amount: Amount,
    ) -> Result<(), AmmError> {
        if let Err(e) = self.move_balance(asset, from, to, amount) {
            warn!(%asset, %from, %to, %amount, error = %e, "custody transfer refused");
            return Err(e);
        }
        debug!(%asset, %from, %to, %amount, "custody direct transfer");
        Ok(())
    }
}
