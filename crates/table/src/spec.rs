use rbj_core::Chips;
use rbj_core::Rules;
use rbj_core::SLOTS;

/// An inclusive-range declaration for one scalar channel.
#[derive(Debug, Clone, Copy, PartialEq)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct Bounds {
    pub min: f32,
    pub max: f32,
}

/// Bounds on the agent's action input.
///
/// The same scalar carries a bet size at [`super::Stage::Bet`] and a yes/no
/// intent elsewhere, so the declared range is the bet range.
pub const fn action_spec() -> Bounds {
    Bounds {
        min: 0.0,
        max: f32::INFINITY,
    }
}

/// Bounds on every observation channel.
///
/// Discrete channels are declared by cardinality: totals land in `0..=30`
/// (a hand can bust to at most 30), soft aces in `0..=1`, and the dealer's
/// visible total in `0..=11` before the hole card is revealed.
#[derive(Debug, Clone, Copy, PartialEq)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct ObservationSpec {
    pub chips: Bounds,
    pub revealed_len: usize,
    pub revealed: Bounds,
    pub player_total: u32,
    pub player_aces: u32,
    pub dealer_total: u32,
}

pub fn observation_spec(rules: &Rules) -> ObservationSpec {
    ObservationSpec {
        chips: Bounds {
            min: 0.0,
            max: f32::INFINITY,
        },
        revealed_len: SLOTS,
        revealed: Bounds {
            min: -1.0,
            max: rules.copies() as Chips,
        },
        player_total: 31,
        player_aces: 2,
        dealer_total: 12,
    }
}
