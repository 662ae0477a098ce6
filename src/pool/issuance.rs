//! Share issuance: how many shares a deposit mints.
//!
//! # Bootstrap
//!
//! When no shares exist the first depositor receives a fixed
//! `BOOTSTRAP_SHARE_UNITS × precision` shares, whatever the amounts. The
//! deposit becomes the initial reserves and so sets the initial price.
//!
//! # Proportional Mint
//!
//! Otherwise each side implies a mint:
//!
//! ```text
//! share_a = ⌊supply × Δa / reserve_a⌋
//! share_b = ⌊supply × Δb / reserve_b⌋
//! minted  = min(share_a, share_b)
//! ```
//!
//! The side with the smaller implied mint is taken in full. The other side
//! is taken only up to `⌈minted × reserve / supply⌉`, the amount that
//! keeps the reserve ratio; the surplus is left with the depositor. A
//! disproportionate deposit therefore can never dilute existing holders.
//!
//! Every division rounds in the pool's favour: shares down, amounts taken
//! up.

use tracing::debug;

use crate::domain::{Amount, Deposit, MintKind, Precision, ProvideQuote, Rounding, Share};
use crate::error::AmmError;
use crate::math::mul_div;

/// Computes the effect of `deposit` on a pool with the given reserves and
/// share supply. Pure: nothing is read or written besides the arguments.
///
/// # Errors
///
/// - [`AmmError::InvalidAmount`] if the deposit mints zero shares.
/// - [`AmmError::Overflow`] if an implied mint `supply × amount / reserve`
///   exceeds `u128::MAX`.
/// - [`AmmError::DivisionByZero`] if shares exist but a reserve is zero.
pub fn quote(
    reserves: (Amount, Amount),
    supply: Share,
    deposit: &Deposit,
    precision: Precision,
) -> Result<ProvideQuote, AmmError> {
    if supply.is_zero() {
        let minted = precision.bootstrap_shares();
        debug!(%deposit, %minted, "bootstrap quote");
        return ProvideQuote::new(
            MintKind::Bootstrap,
            minted,
            deposit,
            deposit.amount_a(),
            deposit.amount_b(),
        );
    }

    let (reserve_a, reserve_b) = reserves;
    let amount_a = deposit.amount_a();
    let amount_b = deposit.amount_b();

    let share_a = mul_div(supply.get(), amount_a.get(), reserve_a.get(), Rounding::Down)?;
    let share_b = mul_div(supply.get(), amount_b.get(), reserve_b.get(), Rounding::Down)?;
    let minted = share_a.min(share_b);

    if minted == 0 {
        return Err(AmmError::InvalidAmount("deposit too small to mint shares"));
    }

    let (used_a, used_b) = if share_a <= share_b {
        let matched = mul_div(minted, reserve_b.get(), supply.get(), Rounding::Up)?;
        (amount_a, Amount::new(matched.min(amount_b.get())))
    } else {
        let matched = mul_div(minted, reserve_a.get(), supply.get(), Rounding::Up)?;
        (Amount::new(matched.min(amount_a.get())), amount_b)
    };

    debug!(%deposit, %share_a, %share_b, %minted, %used_a, %used_b, "proportional quote");
    ProvideQuote::new(
        MintKind::Proportional,
        Share::new(minted),
        deposit,
        used_a,
        used_b,
    )
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use crate::domain::{AssetId, AssetPair};

    const P: u128 = 100;

    fn deposit(a: u128, b: u128) -> Deposit {
        let x = AssetId::from_bytes([1u8; 32]);
        let y = AssetId::from_bytes([2u8; 32]);
        let Ok(pair) = AssetPair::new(x, y) else {
            panic!("valid pair");
        };
        let Ok(d) = Deposit::new(&pair, x, Amount::new(a), y, Amount::new(b)) else {
            panic!("valid deposit");
        };
        d
    }

    fn quote_for(ra: u128, rb: u128, supply: u128, a: u128, b: u128) -> Result<ProvideQuote, AmmError> {
        quote(
            (Amount::new(ra), Amount::new(rb)),
            Share::new(supply),
            &deposit(a, b),
            Precision::DEFAULT,
        )
    }

    // -- Bootstrap ------------------------------------------------------------

    #[test]
    fn bootstrap_mints_fixed_amount() {
        for (a, b) in [(1, 1), (100, 200), (7, 1_000_000_000)] {
            let Ok(q) = quote_for(0, 0, 0, a, b) else {
                panic!("expected Ok");
            };
            assert_eq!(q.minted(), Share::new(100 * P));
            assert_eq!(q.kind(), MintKind::Bootstrap);
            assert_eq!(q.used_a(), Amount::new(a));
            assert_eq!(q.used_b(), Amount::new(b));
        }
    }

    #[test]
    fn bootstrap_follows_precision() {
        let Ok(p) = Precision::new(1) else {
            panic!("valid precision");
        };
        let Ok(q) = quote((Amount::ZERO, Amount::ZERO), Share::ZERO, &deposit(5, 5), p) else {
            panic!("expected Ok");
        };
        assert_eq!(q.minted(), Share::new(100));
    }

    // -- Proportional ---------------------------------------------------------

    #[test]
    fn exact_ratio_mints_proportionally() {
        let Ok(q) = quote_for(100, 200, 100 * P, 10, 20) else {
            panic!("expected Ok");
        };
        assert_eq!(q.minted(), Share::new(10 * P));
        assert!(q.is_exact());
        assert_eq!(q.kind(), MintKind::Proportional);
    }

    #[test]
    fn exact_ratio_with_ether_scaled_amounts() {
        let e = 1_000_000_000_000_000_000u128;
        let Ok(q) = quote_for(100 * e, 200 * e, 100 * P, 10 * e, 20 * e) else {
            panic!("expected Ok");
        };
        assert_eq!(q.minted(), Share::new(10 * P));
        assert!(q.is_exact());
    }

    #[test]
    fn floor_rounding_at_boundary() {
        // 10_000 × 1 / 3 = 3333.33… → 3333
        let Ok(q) = quote_for(3, 3, 100 * P, 1, 1) else {
            panic!("expected Ok");
        };
        assert_eq!(q.minted(), Share::new(3_333));
        // ⌈3333 × 3 / 10_000⌉ = ⌈0.9999⌉ = 1
        assert_eq!(q.used_a(), Amount::new(1));
        assert_eq!(q.used_b(), Amount::new(1));
    }

    #[test]
    fn just_below_one_share_is_rejected() {
        // 10_000 × 1 / 10_001 = 0.9999 → 0
        assert_eq!(
            quote_for(10_001, 10_001, 100 * P, 1, 1),
            Err(AmmError::InvalidAmount("deposit too small to mint shares"))
        );
    }

    #[test]
    fn exactly_one_share() {
        let Ok(q) = quote_for(10_000, 10_000, 100 * P, 1, 1) else {
            panic!("expected Ok");
        };
        assert_eq!(q.minted(), Share::new(1));
    }

    #[test]
    fn surplus_of_b_is_left_with_depositor() {
        // A implies 1_000 shares, B implies 2_500; B taken only up to 20.
        let Ok(q) = quote_for(100, 200, 100 * P, 10, 50) else {
            panic!("expected Ok");
        };
        assert_eq!(q.minted(), Share::new(10 * P));
        assert_eq!(q.used_a(), Amount::new(10));
        assert_eq!(q.used_b(), Amount::new(20));
        assert_eq!(q.unused_b(), Amount::new(30));
    }

    #[test]
    fn surplus_of_a_is_left_with_depositor() {
        let Ok(q) = quote_for(100, 200, 100 * P, 50, 20) else {
            panic!("expected Ok");
        };
        assert_eq!(q.minted(), Share::new(10 * P));
        assert_eq!(q.used_a(), Amount::new(10));
        assert_eq!(q.used_b(), Amount::new(20));
        assert_eq!(q.unused_a(), Amount::new(40));
    }

    #[test]
    fn matched_amount_rounds_up() {
        // share_a = ⌊10_000 × 1 / 3⌋ = 3333, share_b = ⌊10_000 × 5 / 7⌋ = 7142
        // used_b = ⌈3333 × 7 / 10_000⌉ = ⌈2.3331⌉ = 3
        let Ok(q) = quote_for(3, 7, 100 * P, 1, 5) else {
            panic!("expected Ok");
        };
        assert_eq!(q.minted(), Share::new(3_333));
        assert_eq!(q.used_a(), Amount::new(1));
        assert_eq!(q.used_b(), Amount::new(3));
    }

    #[test]
    fn wide_intermediate_product_is_not_an_overflow() {
        // 10_000 × 10^35 exceeds u128; the mint of 1_000 does not.
        let e36 = 10u128.pow(36);
        let e35 = 10u128.pow(35);
        let Ok(q) = quote_for(e36, e36, 100 * P, e35, e35) else {
            panic!("expected Ok");
        };
        assert_eq!(q.minted(), Share::new(10 * P));
        assert_eq!(q.used_a(), Amount::new(e35));
        assert_eq!(q.used_b(), Amount::new(e35));
        assert!(q.is_exact());
    }

    #[test]
    fn implied_mint_overflow() {
        assert_eq!(
            quote_for(1, 1, 100 * P, u128::MAX / 2, 1),
            Err(AmmError::Overflow("ratio result overflow"))
        );
    }
}
