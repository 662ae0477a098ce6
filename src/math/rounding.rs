//! Rounding helpers for integer division.
//!
//! [`div_round`] is the low-level building block behind
//! [`mul_div`](super::mul_div) when the product fits in `u128`.
//!
//! # Convention
//!
//! **Always round against the depositor** (pool-favourable):
//!
//! | Quantity | Direction |
//! |----------|-----------|
//! | Shares minted | [`Rounding::Down`] |
//! | Amount taken from the depositor | [`Rounding::Up`] |
//!
//! # Examples
//!
//! ```
//! use share_amm::domain::Rounding;
//! use share_amm::math::div_round;
//!
//! assert_eq!(div_round(10, 3, Rounding::Down), Some(3));
//! assert_eq!(div_round(10, 3, Rounding::Up), Some(4));
//! assert_eq!(div_round(10, 0, Rounding::Down), None);
//! ```

use crate::domain::Rounding;

/// Integer division of `u128` values with explicit rounding direction.
///
/// Returns [`None`] if `denominator` is zero.
#[must_use]
pub const fn div_round(numerator: u128, denominator: u128, rounding: Rounding) -> Option<u128> {
    if denominator == 0 {
        return None;
    }
    let q = numerator / denominator;
    match rounding {
        Rounding::Down => Some(q),
        // q + 1 cannot overflow: a non-zero remainder implies q < u128::MAX.
        Rounding::Up if numerator % denominator != 0 => Some(q + 1),
        Rounding::Up => Some(q),
    }
}
