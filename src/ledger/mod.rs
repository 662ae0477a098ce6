//! Pool bookkeeping state.
//!
//! [`ReserveLedger`] tracks cumulative per-asset reserves and
//! [`ShareRegistry`] tracks share balances and supply. Both support a
//! stage-then-commit update so the pool can validate an entire deposit
//! before writing any of it.

mod reserve_ledger;
mod share_registry;

pub use reserve_ledger::{ReserveLedger, StagedReserve};
pub use share_registry::{ShareRegistry, StagedCredit};
