use rbj_core::Arbitrary;
use rbj_core::RANKS;

/// A card rank encoded as a single byte in `1..=13`.
///
/// Blackjack is suit-blind, so a card *is* its rank. Ace is `1`, face cards
/// are `11..=13`. The rank index is distinct from the hand *value* it
/// contributes: an ace counts as 11 until demoted to 1, faces count as 10,
/// everything else is natural.
///
/// # Parsing
///
/// Ranks parse from the usual one-character symbols (`"A"`, `"7"`, `"T"`,
/// `"J"`, `"Q"`, `"K"`), with `"10"` accepted as an alias for `"T"`.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct Rank(u8);

impl Rank {
    pub const ACE: Self = Self(1);
    /// All thirteen ranks in index order, ace first.
    pub fn all() -> impl Iterator<Item = Self> {
        (1..=RANKS as u8).map(Self)
    }
    /// Hand value contributed by this rank: ace 11, faces 10, else natural.
    pub fn value(&self) -> u8 {
        match self.0 {
            1 => 11,
            n if n > 10 => 10,
            n => n,
        }
    }
    /// True for the ace, the only rank with a demotable value.
    pub fn is_ace(&self) -> bool {
        self.0 == 1
    }
}

/// u8 isomorphism
/// ranks map to their index in `1..=13`, ace low
impl From<Rank> for u8 {
    fn from(r: Rank) -> u8 {
        r.0
    }
}
impl From<u8> for Rank {
    fn from(n: u8) -> Self {
        debug_assert!(n >= 1 && n <= RANKS as u8);
        Self(n)
    }
}
impl From<Rank> for usize {
    fn from(r: Rank) -> usize {
        r.0 as usize
    }
}

impl TryFrom<&str> for Rank {
    type Error = anyhow::Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s {
            "A" => Ok(Self(1)),
            "T" | "10" => Ok(Self(10)),
            "J" => Ok(Self(11)),
            "Q" => Ok(Self(12)),
            "K" => Ok(Self(13)),
            n => n
                .parse::<u8>()
                .ok()
                .filter(|n| (2..=9).contains(n))
                .map(Self)
                .ok_or_else(|| anyhow::anyhow!("invalid rank: {}", s)),
        }
    }
}

impl std::fmt::Display for Rank {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.0 {
            1 => write!(f, "A"),
            11 => write!(f, "J"),
            12 => write!(f, "Q"),
            13 => write!(f, "K"),
            n => write!(f, "{}", n),
        }
    }
}

impl Arbitrary for Rank {
    fn random() -> Self {
        Self(rand::random_range(1..=RANKS as u8))
    }
}
