use rbj_cards::Rank;

/// A running blackjack total with soft-ace accounting.
///
/// Both the dealer and every player hand share this add-card rule: the card's
/// value is added, aces arriving as 11 are tracked as soft, and the moment
/// the total exceeds 21 with a soft ace available, exactly one ace is demoted
/// from 11 to 1. The demotion happens immediately per card, never batched,
/// so the total is always the best legal reading of the cards so far. At most
/// one demotion per card is ever needed since the penalty is exactly 10.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Hand {
    total: u8,
    soft: u8,
}

impl Hand {
    /// Adds a card, demoting one soft ace if the total would bust.
    pub fn absorb(&mut self, card: Rank) {
        self.total += card.value();
        if card.is_ace() {
            self.soft += 1;
        }
        if self.total > 21 && self.soft > 0 {
            self.soft -= 1;
            self.total -= 10;
        }
    }
    /// The current hand total.
    pub fn total(&self) -> u8 {
        self.total
    }
    /// Aces currently counted as 11.
    pub fn soft(&self) -> u8 {
        self.soft
    }
    /// True once the total exceeds 21 with no soft ace left to demote.
    pub fn busted(&self) -> bool {
        self.total > 21
    }
}

impl From<(Rank, Rank)> for Hand {
    fn from((first, second): (Rank, Rank)) -> Self {
        let mut hand = Self::default();
        hand.absorb(first);
        hand.absorb(second);
        hand
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hand(cards: &[u8]) -> Hand {
        let mut hand = Hand::default();
        for &card in cards {
            hand.absorb(Rank::from(card));
        }
        hand
    }

    /// an ace rides at 11 until the hand would bust, then demotes to 1
    #[test]
    fn ace_demotion() {
        assert_eq!(hand(&[1, 8]).total(), 19);
        assert_eq!(hand(&[1, 8]).soft(), 1);
        assert_eq!(hand(&[3, 3, 1]).total(), 17);
        assert_eq!(hand(&[3, 3, 1]).soft(), 1);
        assert_eq!(hand(&[3, 3, 1, 1]).total(), 18);
        assert_eq!(hand(&[3, 3, 1, 1, 11]).total(), 18);
        assert_eq!(hand(&[3, 3, 1, 1, 11]).soft(), 0);
    }

    /// the demotion fires the step it becomes necessary, never later
    #[test]
    fn demotion_is_immediate() {
        let mut hand = Hand::default();
        let mut worst = 0;
        for card in [1u8, 1, 1, 1, 10, 10] {
            hand.absorb(Rank::from(card));
            if hand.soft() > 0 {
                assert!(hand.total() <= 21);
            }
            worst = worst.max(hand.total());
        }
        assert!(worst <= 24);
    }

    /// totals never silently exceed 21 while a soft ace remains
    #[test]
    fn soft_invariant_random_sequences() {
        use rbj_core::Arbitrary;
        for _ in 0..1000 {
            let mut hand = Hand::default();
            while !hand.busted() {
                hand.absorb(Rank::random());
                assert!(hand.soft() == 0 || hand.total() <= 21);
            }
            assert_eq!(hand.soft(), 0);
        }
    }

    /// two ten-valued cards make a hard twenty
    #[test]
    fn hard_twenty() {
        let h = hand(&[11, 12]);
        assert_eq!(h.total(), 20);
        assert_eq!(h.soft(), 0);
        assert!(!h.busted());
    }
}
