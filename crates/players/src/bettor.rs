use rbj_cards::Tally;
use rbj_core::Chips;
use rbj_core::MIN_BET;
use rbj_core::Payout;

/// Sizes the stake placed on each round.
///
/// Bettors see the bankroll and the distribution of cards still unseen in
/// the shoe, and are told each round's outcome once it settles. Returned bet
/// sizes may be out of range; the table clamps them.
pub trait Bettor {
    /// The stake to place on the next round.
    fn bet(&mut self, chips: Chips, unseen: &Tally) -> Chips;
    /// Feedback once a round settles, before the next bet is requested.
    fn settle(&mut self, payout: Payout, unseen: &Tally);
    /// Persists any learned state, returning where it was written.
    fn save(&mut self) -> Option<String>;
}

/// Always bets the table minimum.
#[derive(Debug, Default)]
pub struct Flat;

impl Bettor for Flat {
    fn bet(&mut self, _: Chips, _: &Tally) -> Chips {
        MIN_BET
    }
    fn settle(&mut self, _: Payout, _: &Tally) {}
    fn save(&mut self) -> Option<String> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// the flat bettor bets the minimum at any bankroll
    #[test]
    fn flat_bets_minimum() {
        let mut flat = Flat;
        let unseen = Tally::full(16);
        assert_eq!(flat.bet(600.0, &unseen), 1.0);
        assert_eq!(flat.bet(2.0, &unseen), 1.0);
        flat.settle(-1.0, &unseen);
        assert_eq!(flat.bet(600.0, &unseen), 1.0);
        assert!(flat.save().is_none());
    }
}
