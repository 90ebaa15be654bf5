use super::observation::Observation;
use super::spec::Bounds;
use super::spec::ObservationSpec;
use super::spec::action_spec;
use super::spec::observation_spec;
use super::stage::Stage;
use super::timestep::TimeStep;
use rbj_cards::Shoe;
use rbj_cards::Tally;
use rbj_core::Chips;
use rbj_core::MAX_BET;
use rbj_core::MIN_BET;
use rbj_core::Rules;

/// A blackjack table session exposed as a turn-based environment.
///
/// The table owns the shoe and the bankroll across rounds and is the only
/// component an external agent sees. Each `step` consumes one scalar action —
/// a bet size at [`Stage::Bet`], otherwise a nonzero-means-yes intent —
/// dispatches it to the current stage's handler, and returns the next
/// [`TimeStep`].
///
/// The agent can never bet itself into a negative bankroll: splits and
/// doubles are only offered while `floor(bankroll / bet)` exceeds the stake
/// multiplier already at risk.
///
/// An episode ends when the bankroll can no longer cover a minimum bet or
/// the configured round limit is reached.
#[derive(Debug, Clone)]
pub struct Table {
    rules: Rules,
    shoe: Shoe,
    chips: Chips,
    round: Option<rbj_gameplay::Round>,
    stage: Stage,
    games: usize,
    limit: usize,
    bet: Chips,
    multiplier: usize,
}

impl Table {
    /// A fresh session terminating after `limit` resolved rounds.
    pub fn new(rules: Rules, limit: usize) -> Self {
        Self {
            shoe: Shoe::new(rules),
            chips: rules.bankroll,
            round: None,
            stage: Stage::Bet,
            games: 1,
            limit,
            bet: MIN_BET,
            multiplier: 1,
            rules,
        }
    }
    /// A session on a seeded shoe, for reproducible episodes.
    pub fn seeded(rules: Rules, limit: usize, seed: u64) -> Self {
        Self {
            shoe: Shoe::seeded(rules, seed),
            ..Self::new(rules, limit)
        }
    }

    /// Begins a new episode: reshuffled shoe, starting bankroll, betting
    /// stage. Reshuffling in place preserves a seeded shoe's rng stream.
    pub fn reset(&mut self) -> TimeStep {
        self.shoe.reshuffle();
        self.chips = self.rules.bankroll;
        self.round = None;
        self.stage = Stage::Bet;
        self.games = 1;
        TimeStep::restart(self.observation())
    }

    /// Applies one action to the current stage and advances the session.
    pub fn step(&mut self, action: f32) -> TimeStep {
        log::trace!("[table] {} <- {}", self.stage, action);
        match self.stage {
            Stage::Bet => self.place_bet(action),
            Stage::Split => self.split(action),
            Stage::Double => self.double(action),
            Stage::Play => self.hit_or_stand(action),
        }
        self.proceed()
    }

    /// Bounds on the action input.
    pub const fn action_spec() -> Bounds {
        action_spec()
    }
    /// Bounds on every observation channel under this table's rules.
    pub fn observation_spec(&self) -> ObservationSpec {
        observation_spec(&self.rules)
    }
    /// Bankroll currently held.
    pub fn chips(&self) -> Chips {
        self.chips
    }
    /// The decision stage awaiting input.
    pub fn stage(&self) -> Stage {
        self.stage
    }

    /// Clamps the bet into `[1, min(1000, bankroll)]` and opens a round.
    ///
    /// Malformed bets are repaired, never rejected: non-finite input defaults
    /// to the table minimum.
    fn place_bet(&mut self, bet: Chips) {
        let bet = if bet.is_finite() { bet } else { MIN_BET };
        self.bet = bet.min(MAX_BET).min(self.chips).max(MIN_BET);
        self.multiplier = 1;
        self.round = Some(rbj_gameplay::Round::new(&mut self.shoe, self.rules));
        log::debug!("[table] round {} opens with {} at stake", self.games, self.bet);
        self.stage = if self.can_split() {
            Stage::Split
        } else if self.can_bet_more() {
            Stage::Double
        } else {
            Stage::Play
        };
    }

    /// Splits every affordable hand if the agent asks to.
    fn split(&mut self, intent: f32) {
        if intent != 0.0 {
            let budget = self.max_multiplier();
            if let Some(round) = self.round.as_mut() {
                self.multiplier = round.split_all(&mut self.shoe, budget);
            }
        }
        self.stage = if self.can_bet_more() {
            Stage::Double
        } else {
            Stage::Play
        };
    }

    /// Doubles the focused hand if the agent asks to, then moves on.
    ///
    /// Focus advances each pass regardless of intent; once nobody is left in
    /// focus it rewinds to the first hand and play begins.
    fn double(&mut self, intent: f32) {
        if let Some(round) = self.round.as_mut() {
            if intent != 0.0 {
                self.multiplier += 1;
                round.double_focus(&mut self.shoe);
            }
            round.advance();
            if !round.in_focus() {
                round.move_focus(0);
                self.stage = Stage::Play;
            }
        }
    }

    /// Hits on nonzero intent, stands on zero.
    fn hit_or_stand(&mut self, intent: f32) {
        if let Some(round) = self.round.as_mut() {
            if intent != 0.0 {
                round.hit_focus(&mut self.shoe);
            } else {
                round.stand_focus(&mut self.shoe);
            }
        }
    }

    /// Consumes a settled round's payout, if any, and emits the timestep.
    ///
    /// On settlement the bankroll moves by `payout × bet`; the session then
    /// either terminates or rolls the stage back to betting and discards the
    /// round. The round-end observation is read before the round is dropped,
    /// so it reflects the final hand.
    fn proceed(&mut self) -> TimeStep {
        let payout = self.round.as_ref().and_then(|round| round.payout());
        if let Some(payout) = payout {
            let reward = payout * self.bet;
            self.chips += reward;
            log::debug!("[table] round {} pays {:+}, bankroll {}", self.games, reward, self.chips);
            if self.should_terminate() {
                return TimeStep::termination(reward, self.observation());
            }
            self.games += 1;
            self.stage = Stage::Bet;
            let observation = self.observation();
            self.round = None;
            return TimeStep::transition(reward, observation);
        }
        TimeStep::transition(0.0, self.observation())
    }

    /// The episode ends on a busted bankroll or the round-count limit.
    fn should_terminate(&self) -> bool {
        self.chips < MIN_BET || self.games >= self.limit
    }
    /// Unit stakes the bankroll supports at the current bet.
    fn max_multiplier(&self) -> usize {
        (self.chips / self.bet) as usize
    }
    /// Whether another unit of stake is affordable beyond those at risk.
    fn can_bet_more(&self) -> bool {
        self.max_multiplier() > self.multiplier
    }
    /// Whether the split window should open at all.
    fn can_split(&self) -> bool {
        self.round.as_ref().is_some_and(|round| round.can_split()) && self.can_bet_more()
    }

    /// Reads the current observation, draining the round's revealed cards.
    fn observation(&mut self) -> Observation {
        let (player_total, player_aces, dealer_total, revealed) = match self.round.as_mut() {
            Some(round) => (
                round.player_total(),
                round.player_soft(),
                round.dealer_total(),
                round.drain_revealed(),
            ),
            None => (0, 0, 0, Tally::default()),
        };
        Observation {
            stage: self.stage,
            chips: self.chips,
            player_total,
            player_aces,
            dealer_total,
            revealed,
        }
    }
}
