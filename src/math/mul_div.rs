//! Ratio scaling: `a × b / d` with explicit rounding.
//!
//! The product is formed in 256 bits, so only a quotient above `u128::MAX`
//! is an overflow. `supply × amount` routinely exceeds `u128` for
//! 18-decimal assets even when the resulting mint is small.

use super::div_round;
use crate::domain::Rounding;
use crate::error::AmmError;

/// Computes `a × b / d`, rounding in the given direction.
///
/// # Errors
///
/// - [`AmmError::Overflow`] if the rounded quotient exceeds `u128::MAX`.
/// - [`AmmError::DivisionByZero`] if `d` is zero.
///
/// # Examples
///
/// ```
/// use share_amm::domain::Rounding;
/// use share_amm::math::mul_div;
///
/// // supply × deposit / reserve
/// assert_eq!(mul_div(10_000, 10, 100, Rounding::Down), Ok(1_000));
///
/// // 10_000 × 10^35 does not fit in u128, the quotient does.
/// let e35 = 10u128.pow(35);
/// assert_eq!(mul_div(10_000, e35, 10 * e35, Rounding::Down), Ok(1_000));
/// ```
pub fn mul_div(a: u128, b: u128, d: u128, rounding: Rounding) -> Result<u128, AmmError> {
    if d == 0 {
        return Err(AmmError::DivisionByZero);
    }
    let product = U256::widening_mul(a, b);
    if product.hi == 0 {
        return div_round(product.lo, d, rounding).ok_or(AmmError::DivisionByZero);
    }
    let (quotient, remainder) = product.div_rem(d);
    if quotient.hi != 0 {
        return Err(AmmError::Overflow("ratio result overflow"));
    }
    match rounding {
        Rounding::Up if remainder != 0 => quotient
            .lo
            .checked_add(1)
            .ok_or(AmmError::Overflow("ratio result overflow")),
        _ => Ok(quotient.lo),
    }
}

/// 256-bit unsigned integer as a `(hi, lo)` pair of `u128`.
///
/// Only the two operations `mul_div` needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct U256 {
    hi: u128,
    lo: u128,
}

impl U256 {
    /// Full product of two `u128` values.
    fn widening_mul(a: u128, b: u128) -> Self {
        let a_lo = a & u128::from(u64::MAX);
        let a_hi = a >> 64;
        let b_lo = b & u128::from(u64::MAX);
        let b_hi = b >> 64;

        let ll = a_lo * b_lo;
        let lh = a_lo * b_hi;
        let hl = a_hi * b_lo;
        let hh = a_hi * b_hi;

        // result = hh << 128 + (lh + hl) << 64 + ll
        let (mid, mid_carry) = lh.overflowing_add(hl);
        let (lo, lo_carry) = ll.overflowing_add(mid << 64);
        let hi = hh + (mid >> 64) + (u128::from(mid_carry) << 64) + u128::from(lo_carry);

        Self { hi, lo }
    }

    /// Binary long division by a non-zero `u128`.
    fn div_rem(self, d: u128) -> (Self, u128) {
        let mut quotient = Self { hi: 0, lo: 0 };
        let mut rem: u128 = 0;
        for i in (0..256).rev() {
            let bit = if i >= 128 {
                (self.hi >> (i - 128)) & 1
            } else {
                (self.lo >> i) & 1
            };
            // The shifted-out top bit makes the true remainder ≥ 2^128 > d.
            let carry = rem >> 127;
            rem = (rem << 1) | bit;
            if carry == 1 || rem >= d {
                rem = rem.wrapping_sub(d);
                if i >= 128 {
                    quotient.hi |= 1 << (i - 128);
                } else {
                    quotient.lo |= 1 << i;
                }
            }
        }
        (quotient, rem)
    }
}
