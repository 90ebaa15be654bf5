//! Betting and playing strategies for blackjack agents.
//!
//! An [`Actor`] drives a table session end to end by delegating its two kinds
//! of decisions: a [`Bettor`] sizes the stakes between rounds, and a
//! per-round [`Strategist`] answers the split, double, and hit questions
//! inside them. The actor itself tracks the distribution of cards not yet
//! seen since the last reshuffle and hands it to both collaborators.
//!
//! Reference implementations: [`Flat`] and [`Counting`] bettors, and the
//! chart-driven [`Basic`] strategist.
mod actor;
mod basic;
mod bettor;
mod counting;
mod strategist;

pub use actor::*;
pub use basic::*;
pub use bettor::*;
pub use counting::*;
pub use strategist::*;
