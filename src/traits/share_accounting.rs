//! Read-only query surface shared by every pool handle.
//!
//! Both the single-owner [`SharePool`](crate::pool::SharePool) and the
//! lock-guarded [`SharedPool`](crate::pool::SharedPool) implement
//! [`ShareAccounting`], so callers can inspect committed state without
//! caring how the pool is held.
//!
//! # Accounting Invariants
//!
//! For every implementation and every reachable state:
//!
//! ```text
//! total_share()          == Σ share(p)             for all participants p
//! total_amount(asset)    == Σ deposited(asset)     over all committed provides
//! ```

use crate::domain::{Amount, AssetId, AssetPair, ParticipantId, Precision, Share};

/// Queries over a pool's committed state.
pub trait ShareAccounting {
    /// Outstanding share supply.
    #[must_use]
    fn total_share(&self) -> Share;

    /// Share balance of `participant`; zero for unknown participants.
    #[must_use]
    fn share(&self, participant: &ParticipantId) -> Share;

    /// Cumulative deposited quantity of `asset`; zero for any asset never
    /// deposited, including assets outside the registered pair.
    #[must_use]
    fn total_amount(&self, asset: &AssetId) -> Amount;

    /// The pool's fixed-point share scaling constant.
    #[must_use]
    fn precision(&self) -> Precision;

    /// The two assets the pool accepts.
    #[must_use]
    fn asset_pair(&self) -> AssetPair;
}
