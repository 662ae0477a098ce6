//! Outcome of a share issuance computation.

use core::fmt;

use super::{Amount, Deposit, ParticipantId, Share};
use crate::error::AmmError;

/// How the mint amount of a deposit was determined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MintKind {
    /// First deposit into an empty pool; fixed mint.
    Bootstrap,
    /// Deposit into a funded pool; mint proportional to existing supply.
    Proportional,
}

/// The computed effect of a deposit, before or after it is applied.
///
/// # Invariants
///
/// - `minted > 0`
/// - `used_a <= offered_a` and `used_b <= offered_b`
///
/// The difference between offered and used is the part of a
/// disproportionate deposit the pool declines to take.
///
/// Deserialization re-checks both invariants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawProvideQuote"))]
pub struct ProvideQuote {
    kind: MintKind,
    minted: Share,
    offered_a: Amount,
    offered_b: Amount,
    used_a: Amount,
    used_b: Amount,
}

impl ProvideQuote {
    /// Creates a quote with validated invariants.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InvalidAmount`] if `minted` is zero.
    /// - [`AmmError::Underflow`] if a used amount exceeds what was offered.
    pub const fn new(
        kind: MintKind,
        minted: Share,
        deposit: &Deposit,
        used_a: Amount,
        used_b: Amount,
    ) -> crate::error::Result<Self> {
        Self::checked(kind, minted, deposit.amount_a(), deposit.amount_b(), used_a, used_b)
    }

    const fn checked(
        kind: MintKind,
        minted: Share,
        offered_a: Amount,
        offered_b: Amount,
        used_a: Amount,
        used_b: Amount,
    ) -> crate::error::Result<Self> {
        if minted.is_zero() {
            return Err(AmmError::InvalidAmount("deposit too small to mint shares"));
        }
        if used_a.get() > offered_a.get() || used_b.get() > offered_b.get() {
            return Err(AmmError::Underflow("used amount exceeds offered amount"));
        }
        Ok(Self {
            kind,
            minted,
            offered_a,
            offered_b,
            used_a,
            used_b,
        })
    }

    /// Returns how the mint was determined.
    #[must_use]
    pub const fn kind(&self) -> MintKind {
        self.kind
    }

    /// Shares credited to the depositor.
    pub const fn minted(&self) -> Share {
        self.minted
    }

    /// Amount of the first asset moved into the pool.
    pub const fn used_a(&self) -> Amount {
        self.used_a
    }

    /// Amount of the second asset moved into the pool.
    pub const fn used_b(&self) -> Amount {
        self.used_b
    }

    /// Offered amount of the first asset left with the depositor.
    pub const fn unused_a(&self) -> Amount {
        Amount::new(self.offered_a.get() - self.used_a.get())
    }

    /// Offered amount of the second asset left with the depositor.
    pub const fn unused_b(&self) -> Amount {
        Amount::new(self.offered_b.get() - self.used_b.get())
    }

    /// Returns `true` if both offered amounts are taken in full.
    #[must_use]
    pub const fn is_exact(&self) -> bool {
        self.used_a.get() == self.offered_a.get() && self.used_b.get() == self.offered_b.get()
    }
}

impl fmt::Display for ProvideQuote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ProvideQuote(minted={}, used_a={}, used_b={}, unused_a={}, unused_b={})",
            self.minted,
            self.used_a,
            self.used_b,
            self.unused_a(),
            self.unused_b()
        )
    }
}

/// Unvalidated wire form of [`ProvideQuote`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawProvideQuote {
    kind: MintKind,
    minted: Share,
    offered_a: Amount,
    offered_b: Amount,
    used_a: Amount,
    used_b: Amount,
}

#[cfg(feature = "serde")]
impl TryFrom<RawProvideQuote> for ProvideQuote {
    type Error = AmmError;

    fn try_from(raw: RawProvideQuote) -> Result<Self, Self::Error> {
        Self::checked(
            raw.kind,
            raw.minted,
            raw.offered_a,
            raw.offered_b,
            raw.used_a,
            raw.used_b,
        )
    }
}

/// Record of a committed `provide` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ProvideReceipt {
    depositor: ParticipantId,
    quote: ProvideQuote,
    total_share: Share,
}

impl ProvideReceipt {
    pub(crate) const fn new(depositor: ParticipantId, quote: ProvideQuote, total_share: Share) -> Self {
        Self {
            depositor,
            quote,
            total_share,
        }
    }

    /// The participant whose balance was credited.
    #[must_use]
    pub const fn depositor(&self) -> ParticipantId {
        self.depositor
    }

    /// The applied quote.
    #[must_use]
    pub const fn quote(&self) -> &ProvideQuote {
        &self.quote
    }

    /// Shares credited by this call.
    pub const fn minted(&self) -> Share {
        self.quote.minted
    }

    /// Pool-wide share supply after this call.
    pub const fn total_share(&self) -> Share {
        self.total_share
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use crate::domain::{AssetId, AssetPair};

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

    #[test]
    fn exact_quote() {
        let d = deposit(10, 20);
        let Ok(q) = ProvideQuote::new(
            MintKind::Proportional,
            Share::new(1_000),
            &d,
            Amount::new(10),
            Amount::new(20),
        ) else {
            panic!("expected Ok");
        };
        assert!(q.is_exact());
        assert_eq!(q.unused_a(), Amount::ZERO);
        assert_eq!(q.unused_b(), Amount::ZERO);
        assert_eq!(q.kind(), MintKind::Proportional);
    }

    #[test]
    fn partial_quote_reports_unused() {
        let d = deposit(10, 50);
        let Ok(q) = ProvideQuote::new(
            MintKind::Proportional,
            Share::new(1_000),
            &d,
            Amount::new(10),
            Amount::new(20),
        ) else {
            panic!("expected Ok");
        };
        assert!(!q.is_exact());
        assert_eq!(q.unused_b(), Amount::new(30));
    }

    #[test]
    fn zero_mint_rejected() {
        let d = deposit(1, 1);
        assert_eq!(
            ProvideQuote::new(MintKind::Proportional, Share::ZERO, &d, Amount::new(1), Amount::new(1)),
            Err(AmmError::InvalidAmount("deposit too small to mint shares"))
        );
    }

    #[test]
    fn overuse_rejected() {
        let d = deposit(1, 1);
        let Err(AmmError::Underflow(_)) =
            ProvideQuote::new(MintKind::Bootstrap, Share::new(1), &d, Amount::new(2), Amount::new(1))
        else {
            panic!("expected Underflow");
        };
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_round_trip() {
        let d = deposit(10, 50);
        let Ok(q) = ProvideQuote::new(
            MintKind::Proportional,
            Share::new(1_000),
            &d,
            Amount::new(10),
            Amount::new(20),
        ) else {
            panic!("expected Ok");
        };
        let Ok(json) = serde_json::to_string(&q) else {
            panic!("serialize");
        };
        let Ok(back) = serde_json::from_str::<ProvideQuote>(&json) else {
            panic!("deserialize");
        };
        assert_eq!(back, q);
        assert_eq!(back.unused_b(), Amount::new(30));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn deserialize_rejects_overuse() {
        let json = r#"{"kind":"Proportional","minted":1000,"offered_a":10,"offered_b":20,"used_a":11,"used_b":20}"#;
        assert!(serde_json::from_str::<ProvideQuote>(json).is_err());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn deserialize_rejects_zero_mint() {
        let json = r#"{"kind":"Bootstrap","minted":0,"offered_a":10,"offered_b":20,"used_a":10,"used_b":20}"#;
        assert!(serde_json::from_str::<ProvideQuote>(json).is_err());
    }

    #[test]
    fn receipt_accessors() {
        let d = deposit(100, 200);
        let Ok(q) = ProvideQuote::new(
            MintKind::Bootstrap,
            Share::new(10_000),
            &d,
            Amount::new(100),
            Amount::new(200),
        ) else {
            panic!("expected Ok");
        };
        let who = ParticipantId::from_bytes([7u8; 32]);
        let r = ProvideReceipt::new(who, q, Share::new(10_000));
        assert_eq!(r.depositor(), who);
        assert_eq!(r.minted(), Share::new(10_000));
        assert_eq!(r.total_share(), Share::new(10_000));
        assert_eq!(r.quote().kind(), MintKind::Bootstrap);
    }
}
