use super::bettor::Bettor;
use rbj_cards::Rank;
use rbj_cards::Tally;
use rbj_core::Chips;
use rbj_core::Payout;
use rbj_core::SLOTS;

/// Cards in one deck, for true-count normalization.
const DECK: f32 = 52.0;

/// Bets from a weighted running count of the cards already seen.
///
/// Each rank carries a weight; the running count is the weighted sum over
/// cards dealt since the last reshuffle, and the true count divides that by
/// the decks still in the shoe. The bet is `true count - 1`, so a neutral or
/// cold shoe asks for less than the minimum and gets clamped up by the table.
#[derive(Debug, Clone)]
pub struct Counting {
    copies: usize,
    weights: [f32; SLOTS],
}

impl Counting {
    /// A counter over a custom rank-indexed weight vector. Slot 0 is unused.
    pub fn new(copies: usize, weights: [f32; SLOTS]) -> Self {
        Self { copies, weights }
    }

    /// The Hi-Lo system: low cards +1, tens and aces -1, the rest neutral.
    pub fn hi_lo(copies: usize) -> Self {
        let mut weights = [0.0; SLOTS];
        for rank in Rank::all() {
            weights[usize::from(rank)] = match rank.value() {
                2..=6 => 1.0,
                10 | 11 => -1.0,
                _ => 0.0,
            };
        }
        Self::new(copies, weights)
    }

    /// Weighted count of every card seen since the last reshuffle.
    fn running_count(&self, unseen: &Tally) -> f32 {
        Rank::all()
            .map(|rank| {
                let seen = self.copies as f32 - f32::from(unseen.count(rank));
                self.weights[usize::from(rank)] * seen
            })
            .sum()
    }

    /// Running count normalized by the decks left in the shoe.
    /// An exhausted tally reads as a neutral count.
    fn true_count(&self, unseen: &Tally) -> f32 {
        let decks_left = f32::from(unseen.sum()) / DECK;
        if decks_left <= 0.0 {
            return 0.0;
        }
        self.running_count(unseen) / decks_left
    }
}

impl Bettor for Counting {
    fn bet(&mut self, _: Chips, unseen: &Tally) -> Chips {
        self.true_count(unseen) - 1.0
    }
    fn settle(&mut self, _: Payout, _: &Tally) {}
    fn save(&mut self) -> Option<String> {
        None
    }
}
