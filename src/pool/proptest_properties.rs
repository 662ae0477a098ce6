//! Property-based tests for the share pool.
//!
//! 1. **Share conservation**: total supply equals the sum of balances.
//! 2. **Reserve conservation**: each reserve equals the amounts taken.
//! 3. **Bootstrap constant**: the first mint ignores the deposit size.
//! 4. **Exact ratio**: scaling the reserves by `k` mints `supply × k`.
//! 5. **No dilution**: share value never drops for existing holders.
//! 6. **Atomic rejection**: a failed provide leaves state unchanged.

use proptest::prelude::*;

use super::SharePool;
use crate::config::PoolConfig;
use crate::custody::InMemoryCustody;
use crate::domain::{Amount, AssetId, AssetPair, ParticipantId, Share};
use crate::traits::{Custody, FromConfig, ShareAccounting};

// ---------------------------------------------------------------------------
// Shared helpers
// ---------------------------------------------------------------------------

fn asset_a() -> AssetId {
    AssetId::from_bytes([1u8; 32])
}

fn asset_b() -> AssetId {
    AssetId::from_bytes([2u8; 32])
}

fn account() -> ParticipantId {
    ParticipantId::from_bytes([99u8; 32])
}

fn depositor(i: u8) -> ParticipantId {
    ParticipantId::from_bytes([10 + i; 32])
}

fn make_pool() -> SharePool<InMemoryCustody> {
    let Ok(pair) = AssetPair::new(asset_a(), asset_b()) else {
        panic!("valid pair");
    };
    let Ok(cfg) = PoolConfig::new(pair, account()) else {
        panic!("valid config");
    };
    let Ok(pool) = SharePool::from_config(&cfg) else {
        panic!("valid pool");
    };
    pool
}

fn fund(pool: &mut SharePool<InMemoryCustody>, who: ParticipantId, amount: u128) {
    let c = pool.custody_mut();
    for asset in [asset_a(), asset_b()] {
        let Ok(()) = c.mint(asset, who, Amount::new(amount)) else {
            panic!("mint");
        };
        c.approve(asset, who, account(), Amount::MAX);
    }
}

fn amount_strategy() -> impl Strategy<Value = u128> {
    1u128..=1_000_000_000_000
}

fn deposits_strategy() -> impl Strategy<Value = Vec<(u8, u128, u128)>> {
    prop::collection::vec((0u8..4, amount_strategy(), amount_strategy()), 1..12)
}

// ---------------------------------------------------------------------------
// Conservation
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_share_and_reserve_conservation(deposits in deposits_strategy()) {
        let mut pool = make_pool();
        for i in 0..4 {
            fund(&mut pool, depositor(i), u128::MAX / 8);
        }

        let mut taken_a = 0u128;
        let mut taken_b = 0u128;
        for (who, a, b) in deposits {
            let res = pool.provide(depositor(who), asset_a(), Amount::new(a), asset_b(), Amount::new(b));
            if let Ok(r) = res {
                taken_a += r.quote().used_a().get();
                taken_b += r.quote().used_b().get();
                prop_assert_eq!(r.total_share(), pool.total_share());
            }
        }

        let sum: u128 = pool.holders().map(|(_, s)| s.get()).sum();
        prop_assert_eq!(pool.total_share().get(), sum);
        prop_assert_eq!(pool.total_amount(&asset_a()).get(), taken_a);
        prop_assert_eq!(pool.total_amount(&asset_b()).get(), taken_b);
        prop_assert_eq!(
            pool.custody().balance_of(&asset_a(), &account()),
            pool.total_amount(&asset_a())
        );
    }
}

// ---------------------------------------------------------------------------
// Issuance
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_bootstrap_is_constant(a in amount_strategy(), b in amount_strategy()) {
        let mut pool = make_pool();
        fund(&mut pool, depositor(0), u128::MAX / 8);
        let Ok(r) = pool.provide(depositor(0), asset_a(), Amount::new(a), asset_b(), Amount::new(b)) else {
            panic!("bootstrap must succeed");
        };
        prop_assert_eq!(r.minted(), Share::new(10_000));
        prop_assert_eq!(pool.total_amount(&asset_a()), Amount::new(a));
        prop_assert_eq!(pool.total_amount(&asset_b()), Amount::new(b));
    }

    #[test]
    fn prop_exact_ratio_scales_supply(
        ra in 1u128..=1_000_000,
        rb in 1u128..=1_000_000,
        k in 1u128..=50,
    ) {
        let mut pool = make_pool();
        fund(&mut pool, depositor(0), u128::MAX / 8);
        fund(&mut pool, depositor(1), u128::MAX / 8);
        let Ok(_) = pool.provide(depositor(0), asset_a(), Amount::new(ra), asset_b(), Amount::new(rb)) else {
            panic!("bootstrap must succeed");
        };
        let Ok(r) = pool.provide(
            depositor(1),
            asset_a(),
            Amount::new(ra * k),
            asset_b(),
            Amount::new(rb * k),
        ) else {
            panic!("exact-ratio deposit must succeed");
        };
        prop_assert_eq!(r.minted(), Share::new(10_000 * k));
        prop_assert!(r.quote().is_exact());
    }

    #[test]
    fn prop_no_dilution(
        ra in 1u128..=1_000_000,
        rb in 1u128..=1_000_000,
        a in amount_strategy(),
        b in amount_strategy(),
    ) {
        let mut pool = make_pool();
        fund(&mut pool, depositor(0), u128::MAX / 8);
        fund(&mut pool, depositor(1), u128::MAX / 8);
        let Ok(_) = pool.provide(depositor(0), asset_a(), Amount::new(ra), asset_b(), Amount::new(rb)) else {
            panic!("bootstrap must succeed");
        };
        let supply_before = pool.total_share().get();

        if pool
            .provide(depositor(1), asset_a(), Amount::new(a), asset_b(), Amount::new(b))
            .is_ok()
        {
            // reserve / supply must not shrink on either side:
            // new_r × old_s ≥ old_r × new_s
            let supply_after = pool.total_share().get();
            let new_a = pool.total_amount(&asset_a()).get();
            let new_b = pool.total_amount(&asset_b()).get();
            prop_assert!(new_a * supply_before >= ra * supply_after);
            prop_assert!(new_b * supply_before >= rb * supply_after);
        }
    }
}

// ---------------------------------------------------------------------------
// Atomicity
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_rejected_provide_is_atomic(
        a in amount_strategy(),
        b in amount_strategy(),
        balance in 0u128..=1_000_000_000_000,
    ) {
        let mut pool = make_pool();
        fund(&mut pool, depositor(0), 1_000);
        let Ok(_) = pool.provide(depositor(0), asset_a(), Amount::new(100), asset_b(), Amount::new(200)) else {
            panic!("bootstrap must succeed");
        };
        fund(&mut pool, depositor(1), balance);

        let before = (
            pool.total_share(),
            pool.share(&depositor(1)),
            pool.total_amount(&asset_a()),
            pool.total_amount(&asset_b()),
            pool.custody().balance_of(&asset_a(), &depositor(1)),
            pool.custody().balance_of(&asset_b(), &depositor(1)),
        );

        if pool
            .provide(depositor(1), asset_a(), Amount::new(a), asset_b(), Amount::new(b))
            .is_err()
        {
            let after = (
                pool.total_share(),
                pool.share(&depositor(1)),
                pool.total_amount(&asset_a()),
                pool.total_amount(&asset_b()),
                pool.custody().balance_of(&asset_a(), &depositor(1)),
                pool.custody().balance_of(&asset_b(), &depositor(1)),
            );
            prop_assert_eq!(before, after);
        }
    }
}
