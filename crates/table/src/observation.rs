use super::stage::Stage;
use rbj_cards::Tally;
use rbj_core::Chips;

/// What the agent sees after every step.
///
/// Hand fields describe the hand currently in focus, or the most recently
/// settled hand once none remains. `revealed` is the multiset of cards drawn
/// since the previous observation was read; its reshuffle sentinel tells
/// card-counting agents to reset their running counts.
///
/// Between rounds, when no round object exists, the hand fields read zero.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct Observation {
    pub stage: Stage,
    pub chips: Chips,
    pub player_total: u8,
    pub player_aces: u8,
    pub dealer_total: u8,
    pub revealed: Tally,
}

impl std::fmt::Display for Observation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} chips {:.1} player {}({}) dealer {} revealed {}",
            self.stage,
            self.chips,
            self.player_total,
            self.player_aces,
            self.dealer_total,
            self.revealed,
        )
    }
}
