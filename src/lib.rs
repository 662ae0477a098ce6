//! # Share AMM
//!
//! Share accounting for a two-asset liquidity pool: depositors provide both
//! assets and receive pool shares that represent their proportional claim
//! on the reserves.
//!
//! This crate provides domain types, the reserve ledger and share registry,
//! a pluggable token-custody abstraction, and the pool that ties them
//! together.
//!
//! # Feature Flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `serde` | no | `Serialize` / `Deserialize` for domain and config types |
//!
//! # Quick Start
//!
//! Add to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! share-amm = "0.1"
//! ```
//!
//! ## Create a pool and provide liquidity
//!
//! ```rust
//! use share_amm::prelude::*;
//!
//! // 1. Define the two assets and the pool's custody account
//! let usdc = AssetId::from_bytes([1u8; 32]);
//! let joe = AssetId::from_bytes([2u8; 32]);
//! let pool_account = ParticipantId::from_bytes([99u8; 32]);
//!
//! // 2. Build the pool from a configuration
//! let pair = AssetPair::new(usdc, joe).expect("distinct assets");
//! let config = PoolConfig::new(pair, pool_account).expect("valid config");
//! let mut pool: SharePool<InMemoryCustody> = SharePool::from_config(&config).expect("pool");
//!
//! // 3. Fund a depositor and let the pool pull from them
//! let alice = ParticipantId::from_bytes([10u8; 32]);
//! let custody = pool.custody_mut();
//! custody.mint(usdc, alice, Amount::new(1_000)).expect("mint");
//! custody.mint(joe, alice, Amount::new(1_000)).expect("mint");
//! custody.approve(usdc, alice, pool_account, Amount::new(1_000));
//! custody.approve(joe, alice, pool_account, Amount::new(1_000));
//!
//! // 4. The first deposit mints the fixed bootstrap supply
//! let receipt = pool
//!     .provide(alice, usdc, Amount::new(100), joe, Amount::new(200))
//!     .expect("provide");
//! assert_eq!(receipt.minted(), Share::new(100 * 100));
//!
//! // 5. Later deposits mint in proportion to the reserves
//! let receipt = pool
//!     .provide(alice, usdc, Amount::new(10), joe, Amount::new(20))
//!     .expect("provide");
//! assert_eq!(receipt.minted(), Share::new(10 * 100));
//! assert_eq!(pool.total_share(), Share::new(110 * 100));
//! ```
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Consumer    │  provide / quote_provide / queries
//! └──────┬──────┘
//!        │
//!        ▼
//! ┌─────────────┐
//! │ SharePool    │  validate → quote → stage → transfer → commit
//! └──┬───────┬──┘
//!    │       │ Custody trait
//!    │       ▼
//!    │  ┌─────────────┐
//!    │  │  Custody     │  external balances and allowances
//!    │  └─────────────┘
//!    ▼
//! ┌─────────────┐
//! │  Ledger      │  ReserveLedger + ShareRegistry
//! └─────────────┘
//! ```
//!
//! # Module Guide
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`domain`] | Newtype value types: [`Amount`](domain::Amount), [`Share`](domain::Share), [`AssetId`](domain::AssetId), etc. |
//! | [`traits`] | Core abstractions: [`Custody`](traits::Custody), [`ShareAccounting`](traits::ShareAccounting), [`FromConfig`](traits::FromConfig) |
//! | [`config`] | [`PoolConfig`](config::PoolConfig) pool blueprint |
//! | [`ledger`] | [`ReserveLedger`](ledger::ReserveLedger) and [`ShareRegistry`](ledger::ShareRegistry) state |
//! | [`custody`] | [`InMemoryCustody`](custody::InMemoryCustody) backend |
//! | [`pool`]   | [`SharePool`](pool::SharePool), [`SharedPool`](pool::SharedPool) and the issuance math |
//! | [`math`]   | Checked arithmetic and rounding-aware ratio helpers |
//! | [`error`]  | [`AmmError`](error::AmmError) unified error enum |
//! | [`prelude`] | Convenience re-exports for common types and traits |

pub mod config;
pub mod custody;
pub mod domain;
pub mod error;
pub mod ledger;
pub mod math;
pub mod pool;
pub mod prelude;
pub mod traits;
