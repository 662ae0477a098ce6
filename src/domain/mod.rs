//! Fundamental domain value types used throughout the pool.
//!
//! Assets, participants, amounts, shares, and the validated deposit and
//! quote records that flow through the share issuance engine. All types
//! are newtypes with validated constructors where an invariant exists.

mod amount;
mod asset_id;
mod asset_pair;
mod deposit;
mod participant_id;
mod precision;
mod provide_quote;
mod rounding;
mod share;

pub use amount::Amount;
pub use asset_id::AssetId;
pub use asset_pair::AssetPair;
pub use deposit::Deposit;
pub use participant_id::ParticipantId;
pub use precision::{Precision, BOOTSTRAP_SHARE_UNITS};
pub use provide_quote::{MintKind, ProvideQuote, ProvideReceipt};
pub use rounding::Rounding;
pub use share::Share;
