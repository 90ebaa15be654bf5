use super::bettor::Bettor;
use super::strategist::Strategist;
use rbj_cards::Tally;
use rbj_core::Chips;
use rbj_core::MAX_BET;
use rbj_core::MIN_BET;
use rbj_core::Payout;
use rbj_core::Rules;
use rbj_table::Observation;
use rbj_table::Stage;
use rbj_table::Table;
use rbj_table::TimeStep;

/// Utility floor for a busted bankroll.
const MIN_UTILITY: f32 = -1e30;

/// Change in log-wealth from a payout at a given bankroll and stake.
/// Bankrolls at or below zero floor out at [`MIN_UTILITY`].
pub fn log_utility(chips: Chips, bet: Chips, payout: Payout) -> f32 {
    if chips <= 0.0 || chips + payout * bet <= 0.0 {
        return MIN_UTILITY;
    }
    ((1.0 + chips + payout * bet).ln() - (1.0 + chips).ln()).max(MIN_UTILITY)
}

/// Builds the strategist for one round from the bankroll and the stake the
/// round was opened with.
pub type Draft = Box<dyn FnMut(Chips, Chips) -> Box<dyn Strategist>>;

/// An agent that plays a [`Table`] end to end.
///
/// Decisions are delegated: a [`Bettor`] sizes the stakes, and a fresh
/// [`Strategist`] is drafted at every bet to answer the split, double, and
/// hit questions until the round settles. Drafting replaces the previous
/// strategist, which is dropped along with whatever it cached.
///
/// The actor is the card counter of the pair: it starts each episode from a
/// full shoe, discounts every revealed card from its unseen-card tally, and
/// resets the tally whenever an observation carries the reshuffle sentinel.
pub struct Actor {
    bettor: Box<dyn Bettor>,
    draft: Draft,
    strategist: Option<Box<dyn Strategist>>,
    unseen: Tally,
    copies: usize,
}

impl Actor {
    pub fn new(rules: Rules, bettor: Box<dyn Bettor>, draft: Draft) -> Self {
        Self {
            bettor,
            draft,
            strategist: None,
            unseen: Tally::full(rules.copies()),
            copies: rules.copies(),
        }
    }

    /// Plays one full episode to termination, returning the final bankroll.
    pub fn episode(&mut self, table: &mut Table) -> Chips {
        let mut step = table.reset();
        self.unseen = Tally::full(self.copies);
        loop {
            self.observe(&step);
            if step.is_last() {
                break;
            }
            let action = self.act(step.observation());
            log::trace!("[actor] {} -> {}", step.observation(), action);
            step = table.step(action);
        }
        table.chips()
    }

    /// Chooses the action for the observation's stage.
    pub fn act(&mut self, observation: &Observation) -> f32 {
        match observation.stage {
            Stage::Bet => self.place(observation.chips),
            stage => self.consult(stage, observation),
        }
    }

    /// Folds a timestep into the unseen-card tally and, between rounds,
    /// settles the bettor with the round's reward.
    pub fn observe(&mut self, step: &TimeStep) {
        let observation = step.observation();
        if observation.revealed.reshuffled() {
            self.unseen = Tally::full(self.copies);
        }
        self.unseen.discount(&observation.revealed);
        if observation.stage == Stage::Bet && !step.is_first() {
            self.bettor.settle(step.reward(), &self.unseen);
        }
    }

    /// Persists the bettor's learned state, if it has any.
    pub fn save(&mut self) -> Option<String> {
        self.bettor.save()
    }

    /// Sizes the next bet, repairs it, and drafts the round's strategist.
    fn place(&mut self, chips: Chips) -> f32 {
        let bet = self.bettor.bet(chips, &self.unseen);
        let bet = if bet.is_nan() { MIN_BET } else { bet };
        let bet = bet.min(MAX_BET).min(chips).max(MIN_BET);
        self.strategist = Some((self.draft)(chips, bet));
        bet
    }

    /// Puts an in-round question to the current strategist.
    fn consult(&mut self, stage: Stage, observation: &Observation) -> f32 {
        // rounds only open through a bet, which drafts a strategist
        let Some(strategist) = self.strategist.as_mut() else {
            return 0.0;
        };
        let (total, aces, dealer) = (
            observation.player_total,
            observation.player_aces,
            observation.dealer_total,
        );
        let yes = match stage {
            Stage::Split => strategist.split(total, aces, dealer, &self.unseen),
            Stage::Double => strategist.double(total, aces, dealer, &self.unseen),
            _ => strategist.hit(total, aces, dealer, &self.unseen),
        };
        if yes { 1.0 } else { 0.0 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::basic::Basic;
    use crate::bettor::Flat;
    use rbj_cards::Rank;

    fn actor(rules: Rules) -> Actor {
        Actor::new(rules, Box::new(Flat), Box::new(|_, _| Box::new(Basic)))
    }

    /// log utility is positive on wins, negative on losses, floored on ruin
    #[test]
    fn log_utility_shape() {
        assert!(log_utility(600.0, 10.0, 1.0) > 0.0);
        assert!(log_utility(600.0, 10.0, -1.0) < 0.0);
        assert_eq!(log_utility(600.0, 10.0, 0.0), 0.0);
        assert_eq!(log_utility(0.0, 10.0, 1.0), MIN_UTILITY);
        assert_eq!(log_utility(5.0, 10.0, -1.0), MIN_UTILITY);
    }

    /// a flat-betting basic-strategy actor plays a seeded episode out
    #[test]
    fn flat_basic_episode() {
        let rules = Rules::default();
        let mut table = Table::seeded(rules, 25, 11);
        let mut actor = actor(rules);
        let chips = actor.episode(&mut table);
        // one-chip stakes cap the per-round swing at eight chips
        assert!(chips > 600.0 - 25.0 * 8.0);
        assert!(chips < 600.0 + 25.0 * 8.0);
    }

    /// observing a reshuffle sentinel resets the unseen-card tally
    #[test]
    fn reshuffle_resets_unseen() {
        let rules = Rules::default();
        let mut actor = actor(rules);
        let mut revealed = Tally::default();
        revealed.add(Rank::from(7));
        let step = TimeStep::transition(
            0.0,
            Observation {
                revealed,
                ..Observation::default()
            },
        );
        actor.observe(&step);
        assert_eq!(actor.unseen.count(Rank::from(7)), 15);
        let mut revealed = Tally::default();
        revealed.add(Rank::from(2));
        revealed.mark_reshuffled();
        let step = TimeStep::transition(
            0.0,
            Observation {
                revealed,
                ..Observation::default()
            },
        );
        actor.observe(&step);
        assert_eq!(actor.unseen.count(Rank::from(7)), 16);
        assert_eq!(actor.unseen.count(Rank::from(2)), 15);
    }

    /// out-of-range bettor outputs are repaired before reaching the table
    #[test]
    fn bets_are_repaired() {
        struct Wild(f32);
        impl Bettor for Wild {
            fn bet(&mut self, _: Chips, _: &Tally) -> Chips {
                self.0
            }
            fn settle(&mut self, _: Payout, _: &Tally) {}
            fn save(&mut self) -> Option<String> {
                None
            }
        }
        let rules = Rules::default();
        let draft: Draft = Box::new(|_, _| Box::new(Basic));
        let mut actor = Actor::new(rules, Box::new(Wild(f32::NAN)), draft);
        assert_eq!(actor.place(600.0), 1.0);
        let draft: Draft = Box::new(|_, _| Box::new(Basic));
        let mut actor = Actor::new(rules, Box::new(Wild(1e9)), draft);
        assert_eq!(actor.place(600.0), 600.0);
        let draft: Draft = Box::new(|_, _| Box::new(Basic));
        let mut actor = Actor::new(rules, Box::new(Wild(-3.0)), draft);
        assert_eq!(actor.place(600.0), 1.0);
    }

    /// in-round questions without a drafted strategist decline
    #[test]
    fn undrafted_consult_declines() {
        let rules = Rules::default();
        let mut actor = actor(rules);
        let observation = Observation {
            stage: Stage::Play,
            player_total: 5,
            dealer_total: 6,
            ..Observation::default()
        };
        assert_eq!(actor.act(&observation), 0.0);
    }
}
