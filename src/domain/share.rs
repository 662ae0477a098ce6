//! Pool share units.

use core::fmt;

/// A quantity of pool shares, in fixed-point units scaled by
/// [`Precision`](super::Precision).
///
/// Distinct from [`Amount`](super::Amount) because a share is a claim on
/// both reserves, not a quantity of any single asset. All `u128` values are valid.
///
/// # Examples
///
/// ```
/// use share_amm::domain::Share;
///
/// let owner = Share::new(10_000);
/// let other = Share::new(1_000);
/// assert_eq!(owner.checked_add(&other), Some(Share::new(11_000)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
#[must_use]
pub struct Share(u128);

impl Share {
    /// No shares.
    pub const ZERO: Self = Self(0);

    /// Creates a new `Share` from a raw `u128` value.
    pub const fn new(value: u128) -> Self {
        Self(value)
    }

    /// Returns the underlying `u128` value.
    #[must_use]
    pub const fn get(&self) -> u128 {
        self.0
    }

    /// Returns `true` if there are no shares.
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
}

impl fmt::Display for Share {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
