//! Convenience re-exports for common types and traits.
//!
//! ```rust
//! use share_amm::prelude::*;
//! ```

pub use crate::domain::{
    Amount, AssetId, AssetPair, MintKind, ParticipantId, Precision, ProvideQuote, ProvideReceipt,
    Share,
};

pub use crate::traits::{Custody, FromConfig, ShareAccounting};

pub use crate::config::PoolConfig;

pub use crate::custody::InMemoryCustody;

pub use crate::pool::{SharePool, SharedPool};

pub use crate::error::{AmmError, Result};
