use super::hand::Hand;
use rbj_cards::Rank;
use rbj_cards::Shoe;
use rbj_cards::Tally;
use rbj_core::Rules;

/// The dealer's side of a blackjack round.
///
/// Dealt one shown and one hidden card. Blackjack is computed eagerly from
/// both cards, even though the hidden card stays out of the player's
/// observation until the dealer plays. Once every player hand is settled the
/// dealer reveals the hidden card and draws by fixed rules: always under 17,
/// and on soft 17 only under the hit-soft-17 variation.
#[derive(Debug, Clone, Copy)]
pub struct Dealer {
    hand: Hand,
    hidden: Rank,
    blackjack: bool,
}

impl Dealer {
    pub fn new(shown: Rank, hidden: Rank) -> Self {
        let mut hand = Hand::default();
        hand.absorb(shown);
        let blackjack = hand.total() + hidden.value() == 21;
        Self {
            hand,
            hidden,
            blackjack,
        }
    }
    /// Whether the initial two cards were blackjack.
    pub fn blackjack(&self) -> bool {
        self.blackjack
    }
    /// The total currently visible to the player.
    pub fn total(&self) -> u8 {
        self.hand.total()
    }
    /// Soft aces in the visible hand.
    pub fn soft(&self) -> u8 {
        self.hand.soft()
    }
    /// Dealer drawing rule: hit under 17; hit soft 17 only by variation.
    fn must_draw(&self, rules: &Rules) -> bool {
        match self.hand.total() {
            17 => rules.hit_soft_17 && self.hand.soft() > 0,
            total => total < 17,
        }
    }
    /// Reveals the hidden card and draws until the rules say stop.
    ///
    /// Returns the multiset of newly revealed cards, hidden card included,
    /// for observation bookkeeping.
    pub fn play(&mut self, shoe: &mut Shoe, rules: &Rules) -> Tally {
        let mut revealed = Tally::default();
        self.hand.absorb(self.hidden);
        revealed.add(self.hidden);
        while self.must_draw(rules) {
            let card = shoe.draw();
            self.hand.absorb(card);
            revealed.add(card);
        }
        revealed
    }
}
