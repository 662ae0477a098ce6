//! Integer arithmetic utilities for share accounting.
//!
//! [`CheckedArithmetic`] for overflow-safe accumulation on domain types,
//! [`div_round`] for explicit-direction division, and [`mul_div`] for the
//! `supply × amount / reserve` ratio at the heart of share issuance.

mod checked;
mod mul_div;
mod rounding;

pub use checked::CheckedArithmetic;
pub use mul_div::mul_div;
pub use rounding::div_round;
