use super::rank::Rank;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rbj_core::Probability;
use rbj_core::Rules;

/// A multi-deck shoe with a draw cursor and a cut-card reshuffle rule.
///
/// The shoe owns the full multiset of cards (each rank repeated four times
/// per deck) and a shuffled permutation of it. Cards are drawn in permutation
/// order; once the fraction of undrawn cards falls below the configured
/// threshold the next [`Shoe::try_reshuffle`] re-permutes the full multiset
/// and resets the cursor.
///
/// Drawing from an exhausted shoe is a programmer error: rounds are obligated
/// to call `try_reshuffle` up front, which keeps the shoe deep enough for any
/// legal round.
#[derive(Debug, Clone)]
pub struct Shoe {
    full: Vec<Rank>,
    running: Vec<Rank>,
    cursor: usize,
    rng: SmallRng,
    reshuffle_at: Probability,
}

impl Shoe {
    /// A freshly shuffled shoe for the given rules.
    pub fn new(rules: Rules) -> Self {
        Self::rigged(rules, SmallRng::from_rng(&mut rand::rng()))
    }
    /// A shoe with a fixed seed, making every downstream outcome reproducible.
    pub fn seeded(rules: Rules, seed: u64) -> Self {
        Self::rigged(rules, SmallRng::seed_from_u64(seed))
    }
    fn rigged(rules: Rules, rng: SmallRng) -> Self {
        let full = Rank::all()
            .flat_map(|rank| std::iter::repeat_n(rank, rules.copies()))
            .collect::<Vec<Rank>>();
        let mut shoe = Self {
            running: Vec::new(),
            cursor: 0,
            rng,
            reshuffle_at: rules.reshuffle_at,
            full,
        };
        shoe.reshuffle();
        shoe
    }
    /// A shoe whose first draws are exactly `leading`, remainder shuffled.
    ///
    /// Deterministic test hook; production semantics are unaffected. Panics
    /// if `leading` demands more copies of a rank than the shoe holds.
    pub fn stacked(rules: Rules, leading: &[Rank]) -> Self {
        let mut shoe = Self::new(rules);
        let mut rest = shoe.running.clone();
        for card in leading {
            let at = rest
                .iter()
                .position(|r| r == card)
                .expect("stacked cards are drawn from the full shoe");
            rest.swap_remove(at);
        }
        rest.shuffle(&mut shoe.rng);
        shoe.running = leading.iter().copied().chain(rest).collect();
        shoe.cursor = 0;
        shoe
    }

    /// Draws the next card and advances the cursor.
    pub fn draw(&mut self) -> Rank {
        debug_assert!(self.cursor < self.running.len());
        let card = self.running[self.cursor];
        self.cursor += 1;
        card
    }
    /// Fraction of the shoe not yet drawn.
    pub fn remaining(&self) -> Probability {
        1.0 - self.cursor as Probability / self.running.len() as Probability
    }
    /// Re-permutes the full multiset and resets the cursor.
    pub fn reshuffle(&mut self) {
        self.running = self.full.clone();
        self.cursor = 0;
        self.running.shuffle(&mut self.rng);
    }
    /// Reshuffles if the cut card has been reached. True if it did.
    pub fn try_reshuffle(&mut self) -> bool {
        if self.remaining() < self.reshuffle_at {
            self.reshuffle();
            true
        } else {
            false
        }
    }
    /// Cards in the full shoe.
    pub fn size(&self) -> usize {
        self.full.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn deck(ranks: &[u8]) -> Vec<Rank> {
        ranks.iter().copied().map(Rank::from).collect()
    }

    /// remaining fraction tracks the cursor through half the shoe
    #[test]
    fn remaining_fraction() {
        let mut shoe = Shoe::new(Rules::default());
        for _ in 0..52 {
            shoe.draw();
        }
        assert_eq!(shoe.remaining(), 0.75);
        for _ in 0..52 {
            shoe.draw();
        }
        assert_eq!(shoe.remaining(), 0.5);
    }

    /// a stacked shoe yields the forced cards first, in order
    #[test]
    fn stacked_draw_order() {
        let mut shoe = Shoe::stacked(Rules::default(), &deck(&[1, 2, 3, 4]));
        assert_eq!(shoe.draw(), Rank::from(1));
        assert_eq!(shoe.draw(), Rank::from(2));
        assert_eq!(shoe.draw(), Rank::from(3));
        assert_eq!(shoe.draw(), Rank::from(4));
    }

    /// stacking permutes but never changes the multiset
    #[test]
    fn stacked_preserves_multiset() {
        let rules = Rules::default();
        let mut shoe = Shoe::stacked(rules, &deck(&[13, 13, 13, 1]));
        let mut counts = [0usize; 14];
        for _ in 0..shoe.size() {
            counts[usize::from(shoe.draw())] += 1;
        }
        assert!(counts[1..].iter().all(|&n| n == rules.copies()));
    }

    /// reshuffle restores a full shoe
    #[test]
    fn reshuffle_resets() {
        let mut shoe = Shoe::new(Rules::default());
        for _ in 0..52 {
            shoe.draw();
        }
        assert_eq!(shoe.remaining(), 0.75);
        shoe.reshuffle();
        assert_eq!(shoe.remaining(), 1.0);
    }

    /// the cut card fires exactly once, the first draw below threshold
    #[test]
    fn try_reshuffle_threshold() {
        let mut shoe = Shoe::new(Rules::default());
        for _ in 0..52 {
            shoe.draw();
        }
        assert!(!shoe.try_reshuffle());
        for _ in 0..52 {
            shoe.draw();
        }
        assert!(!shoe.try_reshuffle());
        for _ in 0..52 {
            shoe.draw();
        }
        assert!(!shoe.try_reshuffle());
        shoe.draw();
        assert!(shoe.try_reshuffle());
        assert!(!shoe.try_reshuffle());
    }

    /// identical seeds draw identical sequences
    #[test]
    fn seeded_reproducibility() {
        let mut a = Shoe::seeded(Rules::default(), 2121);
        let mut b = Shoe::seeded(Rules::default(), 2121);
        for _ in 0..208 {
            assert_eq!(a.draw(), b.draw());
        }
    }
}
