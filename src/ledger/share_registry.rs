//! Per-participant share balances and the outstanding supply.

use std::collections::HashMap;

use crate::domain::{ParticipantId, Share};
use crate::error::AmmError;

/// A share credit that has been validated but not yet written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub struct StagedCredit {
    participant: ParticipantId,
    balance: Share,
    total: Share,
}

impl StagedCredit {
    /// The participant's balance after the credit.
    pub const fn balance(&self) -> Share {
        self.balance
    }

    /// The total supply after the credit.
    pub const fn total(&self) -> Share {
        self.total
    }
}

/// Share balances keyed by participant, with the running total.
///
/// # Invariant
///
/// ```text
/// total_share == Σ balance[p]   for all p
/// ```
///
/// Balances and total only change together, through [`commit`], so the
/// invariant holds between any two calls.
///
/// [`commit`]: ShareRegistry::commit
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShareRegistry {
    balances: HashMap<ParticipantId, Share>,
    total: Share,
}

impl ShareRegistry {
    /// Creates a registry with no outstanding shares.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Outstanding share supply.
    pub const fn total_share(&self) -> Share {
        self.total
    }

    /// Balance of `participant`; zero if they never received shares.
    pub fn share(&self, participant: &ParticipantId) -> Share {
        self.balances.get(participant).copied().unwrap_or(Share::ZERO)
    }

    /// Iterates over every participant holding a non-zero balance.
    pub fn holders(&self) -> impl Iterator<Item = (&ParticipantId, &Share)> {
        self.balances.iter().filter(|(_, s)| !s.is_zero())
    }

    /// Validates crediting `amount` to `participant` without mutating.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::Overflow`] if the total supply or the balance
    /// would exceed `u128::MAX`.
    pub fn checked_credit(&self, participant: ParticipantId, amount: Share) -> Result<StagedCredit, AmmError> {
        let total = self
            .total
            .checked_add(&amount)
            .ok_or(AmmError::Overflow("share accumulation overflow"))?;
        let balance = self
            .share(&participant)
            .checked_add(&amount)
            .ok_or(AmmError::Overflow("share balance overflow"))?;
        Ok(StagedCredit {
            participant,
            balance,
            total,
        })
    }

    /// Writes a staged credit produced by [`checked_credit`] on this
    /// registry with no intervening write.
    ///
    /// [`checked_credit`]: Self::checked_credit
    pub fn commit(&mut self, staged: StagedCredit) {
        self.balances.insert(staged.participant, staged.balance);
        self.total = staged.total;
    }

    /// Credits `amount` shares to `participant`.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::Overflow`] on accumulation overflow; nothing is
    /// written in that case.
    pub fn credit(&mut self, participant: ParticipantId, amount: Share) -> Result<(), AmmError> {
        let staged = self.checked_credit(participant, amount)?;
        self.commit(staged);
        Ok(())
    }
}
