//! Checked arithmetic trait for domain wrapper types.
//!
//! [`CheckedArithmetic`] lifts the `Option`-returning `checked_*` methods
//! of [`Amount`] into [`Result`]s carrying a specific [`AmmError`], so
//! ledger and custody code can use `?` throughout.
//!
//! # Examples
//!
//! ```
//! use share_amm::domain::Amount;
//! use share_amm::math::CheckedArithmetic;
//!
//! let total = Amount::new(100).safe_add(&Amount::new(10));
//! assert_eq!(total, Ok(Amount::new(110)));
//! ```

use crate::domain::Amount;
use crate::error::AmmError;

/// Fallible arithmetic for asset quantities.
///
/// No method panics or saturates; every failure is an `Err`.
pub trait CheckedArithmetic: Sized {
    /// Checked addition.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::Overflow`] if the result exceeds `u128::MAX`.
    fn safe_add(&self, other: &Self) -> Result<Self, AmmError>;

    /// Checked subtraction.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::Underflow`] if the result would be negative.
    fn safe_sub(&self, other: &Self) -> Result<Self, AmmError>;
}

impl CheckedArithmetic for Amount {
    #[inline]
    fn safe_add(&self, other: &Self) -> Result<Self, AmmError> {
        self.checked_add(other)
            .ok_or(AmmError::Overflow("reserve accumulation overflow"))
    }

    #[inline]
    fn safe_sub(&self, other: &Self) -> Result<Self, AmmError> {
        self.checked_sub(other)
            .ok_or(AmmError::Underflow("amount subtraction underflow"))
    }
}
