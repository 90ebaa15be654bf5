//! Blackjack simulation toolkit for bankroll-management research.
//!
//! This facade crate re-exports all public rbj crates for convenient access.
//!
//! ## Crate Organization
//!
//! - [`core`] — Type aliases, constants, and the rule-variation configuration
//! - [`cards`] — Rank, shoe, and card-count primitives
//! - [`gameplay`] — Round engine: hands, splitting, dealer play, payouts
//! - [`table`] — Session environment: stages, observations, timesteps
//! - [`players`] — Bettor and strategist agents that drive a table

pub use rbj_cards as cards;
pub use rbj_core as core;
pub use rbj_gameplay as gameplay;
pub use rbj_players as players;
pub use rbj_table as table;

// Re-export commonly used types at the root
pub use rbj_core::*;
