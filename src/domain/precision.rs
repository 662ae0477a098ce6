//! Fixed-point scaling constant for share accounting.

use core::fmt;

use super::Share;
use crate::error::AmmError;

/// Whole share units minted to the first depositor of an empty pool.
///
/// The bootstrap mint is `BOOTSTRAP_SHARE_UNITS × precision`, independent of
/// the deposited quantities.
pub const BOOTSTRAP_SHARE_UNITS: u128 = 100;

/// Shares-per-unit scaling factor, fixed for the lifetime of a pool.
///
/// A precision of `100` means one whole share unit is represented as `100`
/// raw [`Share`]s, giving two decimal places of resolution to proportional
/// mints before they round down to zero.
///
/// Construction rejects zero and any value whose bootstrap mint would not
/// fit in `u128`, so [`Precision::bootstrap_shares`] is infallible.
///
/// # Examples
///
/// ```
/// use share_amm::domain::{Precision, Share};
///
/// let p = Precision::DEFAULT;
/// assert_eq!(p.get(), 100);
/// assert_eq!(p.bootstrap_shares(), Share::new(10_000));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "u128", into = "u128"))]
pub struct Precision(u128);

impl Precision {
    /// The conventional precision of `100`.
    pub const DEFAULT: Self = Self(100);

    /// Largest accepted precision.
    pub const MAX: Self = Self(u128::MAX / BOOTSTRAP_SHARE_UNITS);

    /// Creates a validated `Precision`.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidConfiguration`] if `value` is zero or
    /// larger than [`Precision::MAX`].
    pub const fn new(value: u128) -> Result<Self, AmmError> {
        if value == 0 {
            return Err(AmmError::InvalidConfiguration("precision must be non-zero"));
        }
        if value > Self::MAX.0 {
            return Err(AmmError::InvalidConfiguration(
                "precision too large for bootstrap mint",
            ));
        }
        Ok(Self(value))
    }

    /// Returns the raw scaling factor.
    #[must_use]
    pub const fn get(&self) -> u128 {
        self.0
    }

    /// Shares minted by the first deposit into an empty pool.
    pub const fn bootstrap_shares(&self) -> Share {
        Share::new(BOOTSTRAP_SHARE_UNITS * self.0)
    }
}

impl Default for Precision {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TryFrom<u128> for Precision {
    type Error = AmmError;

    fn try_from(value: u128) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Precision> for u128 {
    fn from(p: Precision) -> Self {
        p.0
    }
}

impl fmt::Display for Precision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
