//! Explicit rounding direction for integer division.

/// Rounding direction for division on domain types.
///
/// Every division in the crate names its direction. Share minting always
/// uses [`Rounding::Down`]; amounts taken from a depositor use
/// [`Rounding::Up`]. Both favour the pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rounding {
    /// Round towards positive infinity (ceiling).
    Up,
    /// Round towards zero (floor).
    Down,
}
