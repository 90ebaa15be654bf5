//! Core type aliases, traits, and rule configuration for robojack.
//!
//! This crate provides the foundational types and the immutable table-rule
//! configuration used throughout the robojack workspace.

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Bankroll amounts and bet sizes.
pub type Chips = f32;
/// Per-unit-stake round outcome, summed across split hands.
pub type Payout = f32;
/// Shoe penetration fractions and reshuffle thresholds.
pub type Probability = f32;

// ============================================================================
// TRAITS
// ============================================================================
/// Random instance generation for testing and Monte Carlo sampling.
pub trait Arbitrary {
    /// Generate a uniformly random instance.
    fn random() -> Self;
}

// ============================================================================
// CARD INDEXING
// ============================================================================
/// Number of distinct card ranks (ace through king).
pub const RANKS: usize = 13;
/// Width of rank-indexed count vectors. Ranks occupy slots `1..=13`;
/// slot 0 is reserved for the reshuffle sentinel.
pub const SLOTS: usize = RANKS + 1;
/// Copies of each rank per 52-card deck.
pub const SUITS: usize = 4;

// ============================================================================
// TABLE LIMITS
// ============================================================================
/// Smallest bet the table accepts; malformed bets default here.
pub const MIN_BET: Chips = 1.0;
/// Largest bet the table accepts regardless of bankroll.
pub const MAX_BET: Chips = 1000.0;

// ============================================================================
// RULE CONFIGURATION
// ============================================================================

/// Immutable table-rule configuration.
///
/// A single `Rules` value is constructed once per session and injected into
/// the shoe, each round, and the table. It is never mutated at runtime.
/// The defaults describe the Vegas Strip variation.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Rules {
    /// The starting bankroll of the player.
    pub bankroll: Chips,
    /// The payout ratio when the player is dealt blackjack.
    pub blackjack_pays: Payout,
    /// Whether a 21 dealt onto a split ace still counts as blackjack.
    pub blackjack_with_split_aces: bool,
    /// Whether the dealer checks the hidden card for blackjack up front.
    pub dealer_peeks: bool,
    /// Whether doubling down is allowed on hands produced by a split.
    pub double_after_split: bool,
    /// Whether hitting is allowed on hands produced by splitting aces.
    pub hit_after_split_aces: bool,
    /// Whether the dealer hits a soft 17.
    pub hit_soft_17: bool,
    /// Rank-indexed set of ranks eligible for splitting (slot 0 unused).
    pub splittable: [bool; SLOTS],
    /// Reshuffle once the fraction of undrawn cards falls below this.
    pub reshuffle_at: Probability,
    /// Maximum hands after splitting aces.
    pub resplit_aces: usize,
    /// Maximum hands after splitting non-aces.
    pub resplit_upto: usize,
    /// Number of 52-card decks in the shoe.
    pub decks: usize,
    /// Whether unequal ten-valued pairs (such as J+Q) may be split.
    pub split_uneven: bool,
}

impl Rules {
    /// Cards in a full shoe under this configuration.
    pub const fn shoe_size(&self) -> usize {
        self.decks * SUITS * RANKS
    }
    /// Copies of each rank in a full shoe.
    pub const fn copies(&self) -> usize {
        self.decks * SUITS
    }
}

/// Vegas Strip.
impl Default for Rules {
    fn default() -> Self {
        let mut splittable = [true; SLOTS];
        splittable[0] = false;
        Self {
            bankroll: 600.0,
            blackjack_pays: 1.5,
            blackjack_with_split_aces: false,
            dealer_peeks: true,
            double_after_split: true,
            hit_after_split_aces: false,
            hit_soft_17: false,
            splittable,
            reshuffle_at: 0.25,
            resplit_aces: 2,
            resplit_upto: 4,
            decks: 4,
            split_uneven: true,
        }
    }
}

// ============================================================================
// LOGGING
// ============================================================================
/// Initialize terminal + file logging for simulation runs.
#[cfg(feature = "server")]
pub fn logging() {
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .expect("time moves slow")
        .as_secs();
    std::fs::create_dir_all("logs").expect("create logs directory");
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(format!("logs/{}.log", time)).expect("create log file"),
    );
    let term = simplelog::TermLogger::new(
        log::LevelFilter::Info,
        config.clone(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file]).expect("initialize logger");
}

#[cfg(test)]
mod tests {
    use super::*;

    /// vegas strip defaults: 4 decks, quarter-shoe cut card, 3:2 blackjack
    #[test]
    fn default_rules() {
        let rules = Rules::default();
        assert_eq!(rules.decks, 4);
        assert_eq!(rules.shoe_size(), 208);
        assert_eq!(rules.copies(), 16);
        assert_eq!(rules.blackjack_pays, 1.5);
        assert!(rules.reshuffle_at < 1.0);
        assert!(!rules.splittable[0]);
        assert!(rules.splittable[1..].iter().all(|&s| s));
    }

    /// the logging bootstrap creates the logs directory when it is missing
    #[cfg(feature = "server")]
    #[test]
    fn logging_creates_directory() {
        let scratch = std::env::temp_dir().join(format!("rbj-logs-{}", std::process::id()));
        std::fs::create_dir_all(&scratch).expect("scratch dir");
        std::env::set_current_dir(&scratch).expect("enter scratch dir");
        logging();
        assert!(std::path::Path::new("logs").exists());
    }
}
