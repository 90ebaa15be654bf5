use super::rank::Rank;
use rbj_core::SLOTS;

/// Rank-indexed card counts with a reshuffle sentinel.
///
/// A `Tally` serves two roles at the table:
/// - the multiset of cards revealed since an observation was last read, and
/// - the running count of cards not yet seen since the last reshuffle,
///   which is the `card_distribution` handed to betting and playing
///   strategies.
///
/// Slot 0 never counts a card. Setting it to `-1` marks "the shoe was just
/// reshuffled"; consumers reset any running counts when they see it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct Tally([i16; SLOTS]);

impl Tally {
    /// Counts for a full shoe: every rank present `copies` times.
    pub fn full(copies: usize) -> Self {
        let mut slots = [copies as i16; SLOTS];
        slots[0] = 0;
        Self(slots)
    }
    /// Records one revealed card.
    pub fn add(&mut self, rank: Rank) {
        self.0[usize::from(rank)] += 1;
    }
    /// Count recorded for a rank.
    pub fn count(&self, rank: Rank) -> i16 {
        self.0[usize::from(rank)]
    }
    /// Total cards counted across all ranks (sentinel slot excluded).
    pub fn sum(&self) -> i16 {
        self.0[1..].iter().sum()
    }
    /// Flags this tally as carrying the reshuffle signal.
    pub fn mark_reshuffled(&mut self) {
        self.0[0] = -1;
    }
    /// True if the shoe was reshuffled since the previous observation.
    pub fn reshuffled(&self) -> bool {
        self.0[0] == -1
    }
    /// Empties the tally, returning its previous contents.
    pub fn take(&mut self) -> Self {
        std::mem::take(self)
    }
    /// Removes another tally's cards from this one, rank slots only.
    /// The sentinel slot is untouched; callers handle it explicitly.
    pub fn discount(&mut self, seen: &Self) {
        for slot in 1..SLOTS {
            self.0[slot] -= seen.0[slot];
        }
    }
}

impl std::ops::AddAssign for Tally {
    fn add_assign(&mut self, rhs: Self) {
        for (slot, count) in self.0.iter_mut().zip(rhs.0) {
            *slot += count;
        }
    }
}

impl From<[i16; SLOTS]> for Tally {
    fn from(slots: [i16; SLOTS]) -> Self {
        Self(slots)
    }
}
impl From<Tally> for [i16; SLOTS] {
    fn from(tally: Tally) -> Self {
        tally.0
    }
}

impl std::fmt::Display for Tally {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[")?;
        for rank in Rank::all() {
            write!(f, "{}:{} ", rank, self.count(rank))?;
        }
        write!(f, "{}]", if self.reshuffled() { "*" } else { "" })
    }
}
