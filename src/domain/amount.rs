//! Raw asset quantity with checked arithmetic.

use core::fmt;

/// Largest supported number of decimal places for [`Amount::from_whole`].
const MAX_DECIMALS: u32 = 18;

/// A quantity of one asset, expressed in that asset's smallest indivisible
/// unit (wei, satoshi, or equivalent).
///
/// All `u128` values are valid amounts. Negative quantities are not
/// representable, so the only amount a deposit can be rejected for is zero.
///
/// Arithmetic methods are checked: they return `None` on overflow or
/// underflow instead of panicking.
///
/// # Examples
///
/// ```
/// use share_amm::domain::Amount;
///
/// let reserve = Amount::new(100);
/// assert_eq!(reserve.checked_add(&Amount::new(10)), Some(Amount::new(110)));
/// assert_eq!(Amount::MAX.checked_add(&Amount::new(1)), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
#[must_use]
pub struct Amount(u128);

impl Amount {
    /// Zero amount.
    pub const ZERO: Self = Self(0);

    /// Maximum representable amount.
    pub const MAX: Self = Self(u128::MAX);

    /// Creates a new `Amount` from a raw `u128` value.
    pub const fn new(value: u128) -> Self {
        Self(value)
    }

    /// Scales a whole-unit quantity by `10^decimals`.
    ///
    /// `Amount::from_whole(100, 18)` is 100 "ether" worth of an 18-decimal
    /// asset. Returns `None` if `decimals > 18` or the result overflows.
    #[must_use]
    pub const fn from_whole(units: u128, decimals: u32) -> Option<Self> {
        if decimals > MAX_DECIMALS {
            return None;
        }
        match units.checked_mul(10u128.pow(decimals)) {
            Some(v) => Some(Self(v)),
            None => None,
        }
    }

    /// Returns the underlying `u128` value.
    #[must_use]
    pub const fn get(&self) -> u128 {
        self.0
    }

    /// Returns `true` if the amount is zero.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checked addition. Returns `None` on overflow.
    #[must_use]
    pub const fn checked_add(&self, other: &Self) -> Option<Self> {
        match self.0.checked_add(other.0) {
            Some(v) => Some(Self(v)),
            None => None,
        }
    }

    /// Checked subtraction. Returns `None` on underflow.
    #[must_use]
    pub const fn checked_sub(&self, other: &Self) -> Option<Self> {
        match self.0.checked_sub(other.0) {
            Some(v) => Some(Self(v)),
            None => None,
        }
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u128> for Amount {
    fn from(value: u128) -> Self {
        Self(value)
    }
}
