//! Thread-safe pool handle.

use std::sync::Arc;

use parking_lot::Mutex;

use super::SharePool;
use crate::config::PoolConfig;
use crate::domain::{
    Amount, AssetId, AssetPair, ParticipantId, Precision, ProvideQuote, ProvideReceipt, Share,
};
use crate::error::AmmError;
use crate::traits::{Custody, FromConfig, ShareAccounting};

/// A cloneable handle to a [`SharePool`] behind a mutex.
///
/// Every call takes the lock for its whole duration, so `provide` calls
/// are serialized and queries never observe a half-applied deposit.
#[derive(Debug)]
pub struct SharedPool<C> {
    inner: Arc<Mutex<SharePool<C>>>,
}

impl<C> Clone for SharedPool<C> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<C: Custody> SharedPool<C> {
    /// Wraps an existing pool.
    #[must_use]
    pub fn new(pool: SharePool<C>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(pool)),
        }
    }

    /// See [`SharePool::provide`].
    ///
    /// # Errors
    ///
    /// Same as [`SharePool::provide`].
    pub fn provide(
        &self,
        depositor: ParticipantId,
        asset_x: AssetId,
        amount_x: Amount,
        asset_y: AssetId,
        amount_y: Amount,
    ) -> Result<ProvideReceipt, AmmError> {
        self.inner
            .lock()
            .provide(depositor, asset_x, amount_x, asset_y, amount_y)
    }

    /// See [`SharePool::quote_provide`].
    ///
    /// # Errors
    ///
    /// Same as [`SharePool::quote_provide`].
    pub fn quote_provide(
        &self,
        asset_x: AssetId,
        amount_x: Amount,
        asset_y: AssetId,
        amount_y: Amount,
    ) -> Result<ProvideQuote, AmmError> {
        self.inner
            .lock()
            .quote_provide(asset_x, amount_x, asset_y, amount_y)
    }

    /// Runs `f` with the pool locked.
    pub fn with_pool<R>(&self, f: impl FnOnce(&SharePool<C>) -> R) -> R {
        f(&self.inner.lock())
    }

    /// Runs `f` with mutable access to the custody backend.
    pub fn with_custody_mut<R>(&self, f: impl FnOnce(&mut C) -> R) -> R {
        f(self.inner.lock().custody_mut())
    }
}

impl<C: Custody + Default> FromConfig<PoolConfig> for SharedPool<C> {
    fn from_config(config: &PoolConfig) -> Result<Self, AmmError> {
        SharePool::from_config(config).map(Self::new)
    }
}

impl<C> ShareAccounting for SharedPool<C> {
    fn total_share(&self) -> Share {
        self.inner.lock().total_share()
    }

    fn share(&self, participant: &ParticipantId) -> Share {
        self.inner.lock().share(participant)
    }

    fn total_amount(&self, asset: &AssetId) -> Amount {
        self.inner.lock().total_amount(asset)
    }

    fn precision(&self) -> Precision {
        self.inner.lock().precision()
    }

    fn asset_pair(&self) -> AssetPair {
        self.inner.lock().asset_pair()
    }
}
