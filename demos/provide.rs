//! Two-party liquidity provision example.
//!
//! Demonstrates creating a share pool, funding depositors through the
//! in-memory custody, the bootstrap mint, a proportional mint and a
//! disproportionate deposit whose surplus stays with the depositor.
//!
//! # Run
//!
//! ```bash
//! cargo run --example provide
//! ```

use share_amm::config::PoolConfig;
use share_amm::custody::InMemoryCustody;
use share_amm::domain::{Amount, AssetId, AssetPair, ParticipantId};
use share_amm::pool::SharePool;
use share_amm::traits::{Custody, FromConfig, ShareAccounting};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Two-asset share pool ===\n");

    // ── 1. Define assets and participants ───────────────────────────────
    let usdc = AssetId::from_bytes([1u8; 32]);
    let joe = AssetId::from_bytes([2u8; 32]);
    let owner = ParticipantId::from_bytes([10u8; 32]);
    let other = ParticipantId::from_bytes([11u8; 32]);
    let account = ParticipantId::from_bytes([99u8; 32]);
    let ether = |units: u128| Amount::from_whole(units, 18).ok_or("amount out of range");

    println!("Asset A (USDC):  {usdc}");
    println!("Asset B (JOE):   {joe}");

    // ── 2. Configure and create the pool ────────────────────────────────
    let config = PoolConfig::new(AssetPair::new(usdc, joe)?, account)?;
    let mut pool: SharePool<InMemoryCustody> = SharePool::from_config(&config)?;
    println!("\nPool config: {config}");

    // ── 3. Fund both depositors and approve the pool ────────────────────
    let custody = pool.custody_mut();
    for who in [owner, other] {
        for asset in [usdc, joe] {
            custody.mint(asset, who, ether(1_000)?)?;
            custody.approve(asset, who, account, ether(1_000)?);
        }
    }

    // ── 4. Bootstrap: 100 USDC + 200 JOE ────────────────────────────────
    let receipt = pool.provide(owner, usdc, ether(100)?, joe, ether(200)?)?;
    println!("\n--- Owner provides 100 USDC + 200 JOE ---");
    println!("  Minted:       {}", receipt.minted());
    println!("  Total share:  {}", receipt.total_share());

    // ── 5. Proportional: 10 USDC + 20 JOE ───────────────────────────────
    let receipt = pool.provide(other, usdc, ether(10)?, joe, ether(20)?)?;
    println!("\n--- Other provides 10 USDC + 20 JOE ---");
    println!("  Minted:       {}", receipt.minted());
    println!("  Total share:  {}", receipt.total_share());

    // ── 6. Disproportionate: 10 USDC + 50 JOE ───────────────────────────
    let quote = pool.quote_provide(usdc, ether(10)?, joe, ether(50)?)?;
    println!("\n--- Quote for 10 USDC + 50 JOE ---");
    println!("  {quote}");
    let receipt = pool.provide(other, usdc, ether(10)?, joe, ether(50)?)?;
    println!("  Unused JOE returned: {}", receipt.quote().unused_b());

    // ── 7. Final state ──────────────────────────────────────────────────
    println!("\n--- Pool state ---");
    println!("  Total share:     {}", pool.total_share());
    println!("  Owner share:     {}", pool.share(&owner));
    println!("  Other share:     {}", pool.share(&other));
    println!("  USDC reserve:    {}", pool.total_amount(&usdc));
    println!("  JOE reserve:     {}", pool.total_amount(&joe));
    println!(
        "  Other JOE left:  {}",
        pool.custody().balance_of(&joe, &other)
    );

    println!("\n=== Done ===");
    Ok(())
}
