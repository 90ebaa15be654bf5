use super::dealer::Dealer;
use super::player::Player;
use super::settle::settle;
use rbj_cards::Shoe;
use rbj_cards::Tally;
use rbj_core::Payout;
use rbj_core::Rules;

/// One complete blackjack deal, from bet placement through settlement.
///
/// A round owns one [`Dealer`] and an ordered, growing list of [`Player`]
/// hands. Hands are appended by splitting and never removed; a cursor (the
/// *focus*) addresses the hand currently awaiting a decision, with
/// `focus == players.len()` meaning nobody is in focus. The round borrows
/// the table's shoe only for the duration of each operation.
///
/// Every card drawn on behalf of the table is recorded in `revealed`, which
/// observation reads drain. Settlement runs exactly once, the first time all
/// player hands are done: the dealer plays out, and each hand contributes a
/// per-unit-stake payout that is summed into `payout`.
#[derive(Debug, Clone)]
pub struct Round {
    rules: Rules,
    dealer: Dealer,
    players: Vec<Player>,
    focus: usize,
    resplit: usize,
    payout: Option<Payout>,
    revealed: Tally,
}

impl Round {
    /// Deals a new round: two cards to the player, a shown and a hidden card
    /// to the dealer, reshuffling first if the cut card was reached.
    ///
    /// Under the dealer-peek variation a dealer blackjack immediately forces
    /// the opening hand to stand, which settles the round on the spot.
    pub fn new(shoe: &mut Shoe, rules: Rules) -> Self {
        let mut revealed = Tally::default();
        if shoe.try_reshuffle() {
            revealed.mark_reshuffled();
        }
        let first = shoe.draw();
        let second = shoe.draw();
        let shown = shoe.draw();
        revealed.add(first);
        revealed.add(second);
        revealed.add(shown);
        let players = vec![Player::open(first, second, &rules)];
        let dealer = Dealer::new(shown, shoe.draw());
        let resplit = if first.is_ace() {
            rules.resplit_aces
        } else {
            rules.resplit_upto
        };
        let mut round = Self {
            rules,
            dealer,
            players,
            focus: 0,
            resplit,
            payout: None,
            revealed,
        };
        if round.rules.dealer_peeks && round.dealer.blackjack() {
            round.players[round.focus].stand();
        }
        round.try_finish(shoe);
        round
    }

    /// The hand currently awaiting a decision, if any.
    fn focused(&self) -> Option<&Player> {
        self.players.get(self.focus)
    }
    /// The focused hand, or the most recently settled one once none remains.
    fn spotlight(&self) -> &Player {
        match self.players.get(self.focus) {
            Some(player) => player,
            None => self.players.last().expect("rounds deal at least one hand"),
        }
    }

    /// Whether the focused hand may split: it must hold an eligible pair,
    /// and the hand count must be under the resplit limit.
    pub fn can_split(&self) -> bool {
        if self.players.len() >= self.resplit {
            return false;
        }
        match self.focused().and_then(Player::split_rank) {
            Some(pivot) => self.rules.splittable[usize::from(pivot)],
            None => false,
        }
    }

    /// Splits the focused hand into two fresh hands on its pivot rank.
    ///
    /// The focused hand is replaced in place and the sibling appended, each
    /// completed with one newly drawn card. Split aces stand immediately
    /// unless the variation allows hitting them. No-op when ineligible.
    pub fn split_focus(&mut self, shoe: &mut Shoe) {
        if !self.can_split() {
            return;
        }
        let Some(pivot) = self.focused().and_then(Player::split_rank) else {
            return;
        };
        let can_double = self.rules.double_after_split;
        let can_blackjack = !pivot.is_ace() || self.rules.blackjack_with_split_aces;
        let first = shoe.draw();
        self.players[self.focus] =
            Player::new(pivot, first, &self.rules, can_double, can_blackjack);
        let second = shoe.draw();
        self.players
            .push(Player::new(pivot, second, &self.rules, can_double, can_blackjack));
        self.revealed.add(first);
        self.revealed.add(second);
        if pivot.is_ace() && !self.rules.hit_after_split_aces {
            self.players[self.focus].stand();
            if let Some(sibling) = self.players.last_mut() {
                sibling.stand();
            }
        }
        log::debug!("[round] split on {} into {} hands", pivot, self.players.len());
        self.try_finish(shoe);
    }

    /// Splits every splittable hand, front to back, while the stake budget
    /// holds. Returns the final hand count.
    ///
    /// `budget` is the total number of unit stakes the bankroll supports;
    /// each split consumes one beyond the first.
    pub fn split_all(&mut self, shoe: &mut Shoe, mut budget: usize) -> usize {
        self.move_focus(0);
        while self.focused().is_some() {
            while self.can_split() && budget > 1 {
                budget -= 1;
                self.split_focus(shoe);
            }
            self.advance();
        }
        self.move_focus(0);
        self.players.len()
    }

    /// Doubles down the focused hand if allowed, then advances focus.
    pub fn double_focus(&mut self, shoe: &mut Shoe) {
        if let Some(player) = self.players.get_mut(self.focus) {
            if let Some(card) = player.double_down(shoe) {
                self.revealed.add(card);
            }
            self.advance();
        }
    }

    /// Hits the focused hand; focus advances once the hand is done.
    pub fn hit_focus(&mut self, shoe: &mut Shoe) {
        if let Some(player) = self.players.get_mut(self.focus) {
            if let Some(card) = player.hit(shoe) {
                self.revealed.add(card);
            }
            if self.focused().is_some_and(Player::done) {
                self.advance();
            }
        }
        self.try_finish(shoe);
    }

    /// Stands the focused hand and advances focus.
    pub fn stand_focus(&mut self, shoe: &mut Shoe) {
        if let Some(player) = self.players.get_mut(self.focus) {
            player.stand();
            self.advance();
        }
        self.try_finish(shoe);
    }

    /// Moves focus to the given index, staying within `0..=len`.
    pub fn move_focus(&mut self, to: usize) {
        if to <= self.players.len() {
            self.focus = to;
        }
    }
    /// Moves focus forward one hand.
    pub fn advance(&mut self) {
        self.move_focus(self.focus + 1);
    }
    /// Whether any hand still awaits a decision.
    pub fn in_focus(&self) -> bool {
        self.focused().is_some()
    }

    /// The focused (or last-settled) hand's total.
    pub fn player_total(&self) -> u8 {
        self.spotlight().total()
    }
    /// The focused (or last-settled) hand's soft-ace count.
    pub fn player_soft(&self) -> u8 {
        self.spotlight().soft()
    }
    /// The dealer total visible to the player.
    pub fn dealer_total(&self) -> u8 {
        self.dealer.total()
    }
    /// Number of hands in play.
    pub fn hands(&self) -> usize {
        self.players.len()
    }
    /// The settled per-unit-stake payout, once every hand is done.
    pub fn payout(&self) -> Option<Payout> {
        self.payout
    }
    /// Drains the cards revealed since the last observation read.
    pub fn drain_revealed(&mut self) -> Tally {
        self.revealed.take()
    }

    /// Settles the round once all player hands are done. Fires at most once.
    fn try_finish(&mut self, shoe: &mut Shoe) {
        if self.payout.is_some() || !self.players.iter().all(Player::done) {
            return;
        }
        self.revealed += self.dealer.play(shoe, &self.rules);
        let payout = self
            .players
            .iter()
            .map(|player| self.contribution(player))
            .sum::<Payout>();
        log::debug!(
            "[round] settled {} hands against dealer {} for {:+}",
            self.players.len(),
            self.dealer.total(),
            payout
        );
        self.payout = Some(payout);
    }

    /// One hand's per-unit-stake contribution to the round payout.
    fn contribution(&self, player: &Player) -> Payout {
        if player.blackjack() {
            if self.dealer.blackjack() {
                0.0
            } else {
                self.rules.blackjack_pays
            }
        } else {
            let unit = settle(player.total(), self.dealer.total());
            if player.doubled() { unit * 2.0 } else { unit }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rbj_cards::Rank;

    fn stacked(ranks: &[u8]) -> Shoe {
        let leading = ranks.iter().copied().map(Rank::from).collect::<Vec<_>>();
        Shoe::stacked(Rules::default(), &leading)
    }

    /// ten-valued pairs split under split-uneven; unequal values never do
    #[test]
    fn can_split_on_even_values() {
        let mut shoe = stacked(&[10, 12, 5, 10]);
        assert!(Round::new(&mut shoe, Rules::default()).can_split());
        let mut shoe = stacked(&[5, 8, 5, 10]);
        assert!(!Round::new(&mut shoe, Rules::default()).can_split());
    }

    /// non-ace pairs resplit up to four hands, then no further
    #[test]
    fn resplit_to_limit() {
        let mut shoe = stacked(&[5, 5, 5, 10, 5, 5, 5, 5]);
        let mut round = Round::new(&mut shoe, Rules::default());
        assert!(round.can_split());
        round.split_focus(&mut shoe);
        assert_eq!(round.hands(), 2);
        assert!(round.can_split());
        round.split_focus(&mut shoe);
        assert_eq!(round.hands(), 3);
        assert!(round.can_split());
        round.split_focus(&mut shoe);
        assert_eq!(round.hands(), 4);
        assert!(!round.can_split());
    }

    /// split aces allow only two hands and stand both immediately
    #[test]
    fn split_aces_once() {
        let mut shoe = stacked(&[1, 1, 5, 10, 1, 1]);
        let mut round = Round::new(&mut shoe, Rules::default());
        assert!(round.can_split());
        round.split_focus(&mut shoe);
        assert_eq!(round.hands(), 2);
        assert!(!round.can_split());
        // both hands stood, so the dealer has played and the round settled
        assert!(round.payout().is_some());
    }

    /// observation state: focused totals, visible dealer, drained reveals
    #[test]
    fn observation_state() {
        let mut shoe = stacked(&[10, 12, 5, 10]);
        let mut round = Round::new(&mut shoe, Rules::default());
        assert_eq!(round.player_total(), 20);
        assert_eq!(round.player_soft(), 0);
        assert_eq!(round.dealer_total(), 5);
        let revealed = round.drain_revealed();
        assert_eq!(revealed.count(Rank::from(10)), 1);
        assert_eq!(revealed.count(Rank::from(12)), 1);
        assert_eq!(revealed.count(Rank::from(5)), 1);
        assert_eq!(revealed.sum(), 3);
        assert_eq!(round.drain_revealed(), Tally::default());
    }

    /// a peeked dealer blackjack settles the round at the deal
    #[test]
    fn dealer_peek_ends_round() {
        let mut shoe = stacked(&[5, 5, 1, 10]);
        let round = Round::new(&mut shoe, Rules::default());
        assert_eq!(round.payout(), Some(-1.0));
    }

    /// player blackjack against dealer blackjack pushes
    #[test]
    fn blackjack_push() {
        let mut shoe = stacked(&[1, 13, 1, 13]);
        let round = Round::new(&mut shoe, Rules::default());
        assert_eq!(round.payout(), Some(0.0));
    }

    /// an uncontested player blackjack pays three to two
    #[test]
    fn blackjack_premium() {
        let mut shoe = stacked(&[1, 13, 5, 10, 2]);
        let round = Round::new(&mut shoe, Rules::default());
        assert_eq!(round.payout(), Some(1.5));
    }

    /// a doubled, standing, winning hand pays exactly two units
    #[test]
    fn doubled_win_pays_double() {
        let mut shoe = stacked(&[5, 6, 4, 10, 10, 3]);
        let mut round = Round::new(&mut shoe, Rules::default());
        assert!(round.payout().is_none());
        round.double_focus(&mut shoe);
        assert!(!round.in_focus());
        round.stand_focus(&mut shoe);
        assert_eq!(round.payout(), Some(2.0));
    }

    /// hitting to a bust loses one unit
    #[test]
    fn bust_loses() {
        let mut shoe = stacked(&[10, 6, 7, 10, 10]);
        let mut round = Round::new(&mut shoe, Rules::default());
        round.hit_focus(&mut shoe);
        assert_eq!(round.payout(), Some(-1.0));
    }

    /// split_all splits the whole lineup within budget and refocuses to zero
    #[test]
    fn split_all_within_budget() {
        let mut shoe = stacked(&[5, 5, 5, 10, 5, 5]);
        let mut round = Round::new(&mut shoe, Rules::default());
        let hands = round.split_all(&mut shoe, 2);
        assert_eq!(hands, 2);
        assert!(round.in_focus());
        assert_eq!(round.payout(), None);
    }

    /// a budget of one unit cannot split at all
    #[test]
    fn split_all_needs_budget() {
        let mut shoe = stacked(&[5, 5, 5, 10]);
        let mut round = Round::new(&mut shoe, Rules::default());
        assert_eq!(round.split_all(&mut shoe, 1), 1);
    }
}
