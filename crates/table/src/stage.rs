/// The decision the table is waiting on.
///
/// Stages advance monotonically within a round — bet, then an optional split
/// window, then an optional double window, then hit-or-stand until settled —
/// and reset to [`Stage::Bet`] when a round's payout is consumed.
///
/// The wire tags are the literal strings `CHOOSE_BET`, `SPLIT?`, `DOUBLE?`,
/// and `HIT/STAND`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[derive(serde::Serialize, serde::Deserialize)]
pub enum Stage {
    #[default]
    Bet,
    Split,
    Double,
    Play,
}

impl Stage {
    /// All four stages in round order.
    pub const fn all() -> [Self; 4] {
        [Self::Bet, Self::Split, Self::Double, Self::Play]
    }
    /// The literal stage tag exposed to agents.
    pub const fn tag(&self) -> &'static str {
        match self {
            Self::Bet => "CHOOSE_BET",
            Self::Split => "SPLIT?",
            Self::Double => "DOUBLE?",
            Self::Play => "HIT/STAND",
        }
    }
    /// True if the step input is a bet size rather than a yes/no intent.
    pub const fn is_bet(&self) -> bool {
        matches!(self, Self::Bet)
    }
}

impl TryFrom<&str> for Stage {
    type Error = anyhow::Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s {
            "CHOOSE_BET" => Ok(Self::Bet),
            "SPLIT?" => Ok(Self::Split),
            "DOUBLE?" => Ok(Self::Double),
            "HIT/STAND" => Ok(Self::Play),
            tag => Err(anyhow::anyhow!("invalid stage tag: {}", tag)),
        }
    }
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.tag())
    }
}
