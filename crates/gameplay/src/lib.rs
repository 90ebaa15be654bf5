//! Blackjack round engine with hand state, splitting, and payout resolution.
//!
//! This crate implements the rules and mechanics of a casino blackjack round,
//! from the opening deal through dealer play and settlement.
//!
//! ## Hand State
//!
//! - [`Hand`] — Running total with soft-ace accounting, shared by both sides
//!   of the table
//! - [`Dealer`] — Shown + hidden card, fixed drawing rules
//! - [`Player`] — Split/double/blackjack eligibility and terminal flags
//!
//! ## Orchestration
//!
//! - [`Round`] — One complete deal: a dealer, a growing list of player hands
//!   addressed by a focus cursor, and a single finish-once payout
//! - [`settle`] — Total-vs-total payout comparison
//!
//! The round never owns the shoe: every operation that draws borrows the
//! table's shoe for its own duration.
mod dealer;
mod hand;
mod player;
mod round;
mod settle;

pub use dealer::*;
pub use hand::*;
pub use player::*;
pub use round::*;
pub use settle::*;
