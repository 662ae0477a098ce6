//! Unified error types for the share-amm library.
//!
//! All fallible operations across the crate return [`AmmError`] as their
//! error type. Every failure is local and non-partial: a rejected
//! `provide` leaves the pool exactly as it was before the call.

use thiserror::Error;

/// Crate-wide error enum.
///
/// Variants carry a static context string where several call sites can
/// produce the same kind of failure, so callers can match on the kind and
/// still log something meaningful.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum AmmError {
    /// An asset argument is not one of the pool's two registered assets,
    /// or the same asset was supplied twice.
    #[error("invalid asset: {0}")]
    InvalidAsset(&'static str),

    /// A participant cannot take part in the operation, e.g. the pool's own
    /// custody account acting as depositor.
    #[error("invalid participant: {0}")]
    InvalidParticipant(&'static str),

    /// A deposit amount is zero, or too small to mint any share.
    #[error("invalid amount: {0}")]
    InvalidAmount(&'static str),

    /// The custody collaborator refused a transfer because the depositor's
    /// external balance is too low.
    #[error("insufficient balance")]
    InsufficientBalance,

    /// The custody collaborator refused a transfer because the depositor has
    /// not authorized the pool to move that much.
    #[error("insufficient authorization")]
    InsufficientAuthorization,

    /// An accumulation or intermediate product exceeds `u128`.
    #[error("arithmetic overflow: {0}")]
    Overflow(&'static str),

    /// A subtraction would go below zero.
    #[error("arithmetic underflow: {0}")]
    Underflow(&'static str),

    /// A checked division was attempted with a zero divisor.
    #[error("division by zero")]
    DivisionByZero,

    /// A pool configuration failed validation.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(&'static str),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = core::result::Result<T, AmmError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_context() {
        let e = AmmError::InvalidAsset("asset is not part of this pool");
        assert_eq!(e.to_string(), "invalid asset: asset is not part of this pool");
    }

    #[test]
    fn display_unit_variants() {
        assert_eq!(AmmError::InsufficientBalance.to_string(), "insufficient balance");
        assert_eq!(
            AmmError::InsufficientAuthorization.to_string(),
            "insufficient authorization"
        );
        assert_eq!(AmmError::DivisionByZero.to_string(), "division by zero");
    }

    #[test]
    fn is_std_error() {
        fn assert_error<E: std::error::Error + Send + Sync + 'static>() {}
        assert_error::<AmmError>();
    }
}
