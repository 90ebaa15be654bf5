use super::hand::Hand;
use rbj_cards::Rank;
use rbj_cards::Shoe;
use rbj_core::Rules;

/// One player hand in a blackjack round.
///
/// Eligibility is fixed at construction from the first two cards: a pair (or
/// any two equal-valued cards under the split-uneven variation) may split,
/// a fresh two-card hand may double, and a dealt 21 is blackjack unless the
/// hand descends from split aces. Hitting revokes both options. A hand that
/// reaches 21 or busts is done and receives no further cards.
///
/// Ineligible calls are defined no-ops that draw nothing, never failures.
#[derive(Debug, Clone, Copy)]
pub struct Player {
    hand: Hand,
    can_split: bool,
    can_double: bool,
    doubled: bool,
    blackjack: bool,
    done: bool,
}

impl Player {
    /// Deals a hand from two cards.
    ///
    /// `can_double` is false for hands the rules bar from doubling (e.g.
    /// post-split under some variations); `can_blackjack` is false for hands
    /// descending from split aces unless the variation allows it.
    pub fn new(
        first: Rank,
        second: Rank,
        rules: &Rules,
        can_double: bool,
        can_blackjack: bool,
    ) -> Self {
        let hand = Hand::from((first, second));
        let can_split = if rules.split_uneven {
            first.value() == second.value()
        } else {
            first == second
        };
        let done = hand.total() == 21;
        Self {
            hand,
            can_split,
            can_double: can_double && !done,
            doubled: false,
            blackjack: done && can_blackjack,
            done,
        }
    }
    /// An opening hand with every option available.
    pub fn open(first: Rank, second: Rank, rules: &Rules) -> Self {
        Self::new(first, second, rules, true, true)
    }

    fn absorb(&mut self, card: Rank) {
        self.hand.absorb(card);
        if self.hand.total() >= 21 {
            self.done = true;
        }
    }
    /// Draws one card unless the hand is done. Revokes split and double.
    pub fn hit(&mut self, shoe: &mut Shoe) -> Option<Rank> {
        if self.done {
            return None;
        }
        self.can_split = false;
        self.can_double = false;
        let card = shoe.draw();
        self.absorb(card);
        Some(card)
    }
    /// Draws exactly one card at doubled stakes, then the hand is done.
    pub fn double_down(&mut self, shoe: &mut Shoe) -> Option<Rank> {
        if !self.can_double {
            return None;
        }
        self.doubled = true;
        let card = self.hit(shoe);
        self.done = true;
        card
    }
    /// Declines further cards.
    pub fn stand(&mut self) {
        self.done = true;
    }
    /// The rank a split would pivot on, if splitting is currently eligible.
    ///
    /// For equal-valued but unequal-ranked pairs (J+Q under split-uneven)
    /// the pivot is the shared ten value.
    pub fn split_rank(&self) -> Option<Rank> {
        if !self.can_split {
            return None;
        }
        if self.hand.soft() != 0 {
            Some(Rank::ACE)
        } else {
            Some(Rank::from(self.hand.total() / 2))
        }
    }

    pub fn total(&self) -> u8 {
        self.hand.total()
    }
    pub fn soft(&self) -> u8 {
        self.hand.soft()
    }
    pub fn blackjack(&self) -> bool {
        self.blackjack
    }
    pub fn doubled(&self) -> bool {
        self.doubled
    }
    pub fn done(&self) -> bool {
        self.done
    }
    pub fn busted(&self) -> bool {
        self.hand.busted()
    }
}
