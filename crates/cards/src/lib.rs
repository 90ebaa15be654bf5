//! Card rank, shoe, and card-count primitives for blackjack simulation.
//!
//! Suits never matter in blackjack, so a card is represented purely by its
//! [`Rank`]. Cards are drawn sequentially from a [`Shoe`] — a shuffled
//! multi-deck permutation with a cut-card reshuffle rule — and every card
//! revealed at the table is accounted for in a [`Tally`], the rank-indexed
//! count vector that card-counting strategies consume.
mod rank;
mod shoe;
mod tally;

pub use rank::*;
pub use shoe::*;
pub use tally::*;
