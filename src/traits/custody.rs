//! The token-custody collaborator.
//!
//! The pool never holds token balances itself. It asks a [`Custody`]
//! implementation to move the consumed amounts from the depositor into the
//! pool's account, and records the same amounts in its reserve ledger.
//!
//! # Transfer Contract
//!
//! A `provide` moves two assets. To keep the pair all-or-nothing the pool
//! first calls [`Custody::check_transfer`] for both legs, then
//! [`Custody::transfer_from`] for both. Implementations must guarantee that
//! a transfer which passed `check_transfer` succeeds when executed with no
//! intervening mutation of the custody state.
//!
//! If the second leg fails anyway, the pool sends the first leg back with
//! [`Custody::transfer`]. The allowance that leg consumed stays consumed.

use crate::domain::{Amount, AssetId, ParticipantId};
use crate::error::AmmError;

/// Moves asset balances between external accounts on behalf of the pool.
///
/// Semantics follow the familiar allowance model: an owner authorizes a
/// spender up to some amount, and the spender pulls funds with
/// [`transfer_from`](Custody::transfer_from). The pool is always both the
/// spender and the recipient.
pub trait Custody {
    /// External balance of `holder` in `asset`.
    #[must_use]
    fn balance_of(&self, asset: &AssetId, holder: &ParticipantId) -> Amount;

    /// Amount of `asset` that `spender` may still pull from `owner`.
    #[must_use]
    fn allowance(&self, asset: &AssetId, owner: &ParticipantId, spender: &ParticipantId) -> Amount;

    /// Moves `amount` of `asset` from `from` to `to`, consuming `to`'s
    /// allowance over `from`.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InsufficientAuthorization`] if the allowance is too low.
    /// - [`AmmError::InsufficientBalance`] if `from` holds too little.
    /// - [`AmmError::Overflow`] if the recipient balance would overflow.
    fn transfer_from(
        &mut self,
        asset: AssetId,
        from: ParticipantId,
        to: ParticipantId,
        amount: Amount,
    ) -> Result<(), AmmError>;

    /// Moves `amount` of `asset` that `from` holds to `to`, on `from`'s own
    /// authority. No allowance is involved.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InsufficientBalance`] if `from` holds too little.
    /// - [`AmmError::Overflow`] if the recipient balance would overflow.
    fn transfer(
        &mut self,
        asset: AssetId,
        from: ParticipantId,
        to: ParticipantId,
        amount: Amount,
    ) -> Result<(), AmmError>;

    /// Checks whether [`transfer_from`](Custody::transfer_from) with the
    /// same arguments would succeed, without moving anything.
    ///
    /// # Errors
    ///
    /// The same errors `transfer_from` would return.
    fn check_transfer(
        &self,
        asset: &AssetId,
        from: &ParticipantId,
        to: &ParticipantId,
        amount: Amount,
    ) -> Result<(), AmmError> {
        if self.allowance(asset, from, to) < amount {
            return Err(AmmError::InsufficientAuthorization);
        }
        if self.balance_of(asset, from) < amount {
            return Err(AmmError::InsufficientBalance);
        }
        if from != to && self.balance_of(asset, to).checked_add(&amount).is_none() {
            return Err(AmmError::Overflow("custody balance overflow"));
        }
        Ok(())
    }
}
