//! Two-asset share pool.
//!
//! [`SharePool`] owns the reserve ledger, the share registry and a
//! [`Custody`] backend, and funnels every mutation through
//! [`SharePool::provide`].
//!
//! # Provide Algorithm
//!
//! 1. Validate the assets against the pair and the amounts (> 0).
//! 2. Snapshot reserves and supply; compute the [`ProvideQuote`].
//! 3. Stage the new reserve totals and the share credit, detecting every
//!    overflow before anything is written.
//! 4. Pre-check both custody transfers, then execute them.
//! 5. Commit the staged reserves and credit.
//!
//! Steps 1–4 never mutate pool state, so any failure leaves the pool
//! exactly as it was. If custody fails the second transfer despite the
//! pre-check, the first leg is sent back before the error is returned.

use tracing::{debug, error, info};

use super::issuance;
use crate::config::PoolConfig;
use crate::domain::{
    Amount, AssetId, AssetPair, Deposit, ParticipantId, Precision, ProvideQuote, ProvideReceipt,
    Share,
};
use crate::error::AmmError;
use crate::ledger::{ReserveLedger, ShareRegistry};
use crate::traits::{Custody, FromConfig, ShareAccounting};

/// A liquidity pool over exactly two assets that issues shares for
/// deposits.
///
/// # State
///
/// - `reserves`: cumulative deposited quantity per asset
/// - `shares`: share balance per participant, plus the total supply
/// - `custody`: the external token balances the reserves mirror
///
/// # Example
///
/// ```rust
/// use share_amm::config::PoolConfig;
/// use share_amm::custody::InMemoryCustody;
/// use share_amm::domain::{Amount, AssetId, AssetPair, ParticipantId, Share};
/// use share_amm::pool::SharePool;
/// use share_amm::traits::{FromConfig, ShareAccounting};
///
/// let usdc = AssetId::from_bytes([1u8; 32]);
/// let joe = AssetId::from_bytes([2u8; 32]);
/// let owner = ParticipantId::from_bytes([10u8; 32]);
/// let account = ParticipantId::from_bytes([99u8; 32]);
///
/// let cfg = PoolConfig::new(AssetPair::new(usdc, joe).expect("distinct"), account)
///     .expect("valid config");
/// let mut pool: SharePool<InMemoryCustody> = SharePool::from_config(&cfg).expect("pool");
///
/// let custody = pool.custody_mut();
/// custody.mint(usdc, owner, Amount::new(100)).expect("mint");
/// custody.mint(joe, owner, Amount::new(200)).expect("mint");
/// custody.approve(usdc, owner, account, Amount::new(100));
/// custody.approve(joe, owner, account, Amount::new(200));
///
/// let receipt = pool
///     .provide(owner, usdc, Amount::new(100), joe, Amount::new(200))
///     .expect("provide");
/// assert_eq!(receipt.minted(), Share::new(10_000));
/// assert_eq!(pool.total_amount(&usdc), Amount::new(100));
/// ```
#[derive(Debug, Clone)]
pub struct SharePool<C> {
    asset_pair: AssetPair,
    account: ParticipantId,
    precision: Precision,
    reserves: ReserveLedger,
    shares: ShareRegistry,
    custody: C,
}

impl<C: Custody> SharePool<C> {
    /// Creates an empty pool backed by `custody`.
    ///
    /// # Errors
    ///
    /// Propagates any error from [`PoolConfig::validate`].
    pub fn new(config: &PoolConfig, custody: C) -> Result<Self, AmmError> {
        config.validate()?;
        debug!(%config, "pool created");
        Ok(Self {
            asset_pair: *config.asset_pair(),
            account: config.account(),
            precision: config.precision(),
            reserves: ReserveLedger::new(),
            shares: ShareRegistry::new(),
            custody,
        })
    }

    /// The pool's own custody account, recipient of every deposit.
    #[must_use]
    pub const fn account(&self) -> ParticipantId {
        self.account
    }

    /// Read access to the custody backend.
    #[must_use]
    pub const fn custody(&self) -> &C {
        &self.custody
    }

    /// Mutable access to the custody backend, e.g. to fund or authorize
    /// depositors. Pool bookkeeping is not reachable through it.
    pub fn custody_mut(&mut self) -> &mut C {
        &mut self.custody
    }

    /// Participants holding a non-zero share balance.
    pub fn holders(&self) -> impl Iterator<Item = (&ParticipantId, &Share)> {
        self.shares.holders()
    }

    /// Previews what [`provide`](Self::provide) would mint and take, without
    /// touching custody or pool state.
    ///
    /// # Errors
    ///
    /// The validation and arithmetic errors of `provide`; custody errors
    /// cannot occur here.
    pub fn quote_provide(
        &self,
        asset_x: AssetId,
        amount_x: Amount,
        asset_y: AssetId,
        amount_y: Amount,
    ) -> Result<ProvideQuote, AmmError> {
        let deposit = Deposit::new(&self.asset_pair, asset_x, amount_x, asset_y, amount_y)?;
        self.quote_deposit(&deposit)
    }

    /// Deposits a pair of amounts and credits `depositor` with newly
    /// minted shares.
    ///
    /// Assets may be given in either order. For a disproportionate deposit
    /// only the ratio-matching part of the over-supplied asset is taken;
    /// see [`ProvideQuote::unused_a`] / [`ProvideQuote::unused_b`].
    ///
    /// # Errors
    ///
    /// - [`AmmError::InvalidAsset`] if the assets are not exactly the pair.
    /// - [`AmmError::InvalidAmount`] if an amount is zero or the deposit
    ///   mints no shares.
    /// - [`AmmError::InvalidParticipant`] if `depositor` is the pool account.
    /// - [`AmmError::Overflow`] on any arithmetic or accumulation overflow.
    /// - [`AmmError::InsufficientBalance`] /
    ///   [`AmmError::InsufficientAuthorization`] from custody.
    ///
    /// On error no pool state and no custody balance has changed.
    pub fn provide(
        &mut self,
        depositor: ParticipantId,
        asset_x: AssetId,
        amount_x: Amount,
        asset_y: AssetId,
        amount_y: Amount,
    ) -> Result<ProvideReceipt, AmmError> {
        match self.try_provide(depositor, asset_x, amount_x, asset_y, amount_y) {
            Ok(receipt) => {
                info!(
                    %depositor,
                    minted = %receipt.minted(),
                    used_a = %receipt.quote().used_a(),
                    used_b = %receipt.quote().used_b(),
                    total_share = %receipt.total_share(),
                    "provide committed"
                );
                Ok(receipt)
            }
            Err(e) => {
                debug!(%depositor, %asset_x, %amount_x, %asset_y, %amount_y, error = %e, "provide rejected");
                Err(e)
            }
        }
    }

    fn try_provide(
        &mut self,
        depositor: ParticipantId,
        asset_x: AssetId,
        amount_x: Amount,
        asset_y: AssetId,
        amount_y: Amount,
    ) -> Result<ProvideReceipt, AmmError> {
        let deposit = Deposit::new(&self.asset_pair, asset_x, amount_x, asset_y, amount_y)?;
        if depositor == self.account {
            return Err(AmmError::InvalidParticipant(
                "the pool account cannot provide to itself",
            ));
        }

        let quote = self.quote_deposit(&deposit)?;

        let asset_a = self.asset_pair.first();
        let asset_b = self.asset_pair.second();
        let staged_a = self.reserves.checked_increment(asset_a, quote.used_a())?;
        let staged_b = self.reserves.checked_increment(asset_b, quote.used_b())?;
        let credit = self.shares.checked_credit(depositor, quote.minted())?;

        self.custody
            .check_transfer(&asset_a, &depositor, &self.account, quote.used_a())?;
        self.custody
            .check_transfer(&asset_b, &depositor, &self.account, quote.used_b())?;

        self.custody
            .transfer_from(asset_a, depositor, self.account, quote.used_a())?;
        if let Err(e) = self
            .custody
            .transfer_from(asset_b, depositor, self.account, quote.used_b())
        {
            error!(
                %depositor,
                asset = %asset_b,
                error = %e,
                "custody refused a pre-checked transfer after the first leg moved"
            );
            if let Err(refund) =
                self.custody
                    .transfer(asset_a, self.account, depositor, quote.used_a())
            {
                error!(
                    %depositor,
                    asset = %asset_a,
                    amount = %quote.used_a(),
                    error = %refund,
                    "first leg could not be returned"
                );
            }
            return Err(e);
        }

        self.reserves.commit(staged_a);
        self.reserves.commit(staged_b);
        self.shares.commit(credit);

        Ok(ProvideReceipt::new(depositor, quote, credit.total()))
    }

    fn quote_deposit(&self, deposit: &Deposit) -> Result<ProvideQuote, AmmError> {
        issuance::quote(
            self.reserves.reserves_of(&self.asset_pair),
            self.shares.total_share(),
            deposit,
            self.precision,
        )
    }
}

impl<C: Custody + Default> FromConfig<PoolConfig> for SharePool<C> {
    /// Creates an empty pool with a default-constructed custody backend.
    ///
    /// # Errors
    ///
    /// Propagates any error from [`PoolConfig::validate`].
    fn from_config(config: &PoolConfig) -> Result<Self, AmmError> {
        Self::new(config, C::default())
    }
}

impl<C> ShareAccounting for SharePool<C> {
    fn total_share(&self) -> Share {
        self.shares.total_share()
    }

    fn share(&self, participant: &ParticipantId) -> Share {
        self.shares.share(participant)
    }

    fn total_amount(&self, asset: &AssetId) -> Amount {
        self.reserves.total_amount(asset)
    }

    fn precision(&self) -> Precision {
        self.precision
    }

    fn asset_pair(&self) -> AssetPair {
        self.asset_pair
    }
}
