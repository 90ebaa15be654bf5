//! Blackjack session environment: stage machine, observations, and timesteps.
//!
//! This crate wraps the round engine in a turn-based observation/action/reward
//! interaction loop. An external agent drives a [`Table`] through a fixed
//! per-round decision-stage sequence; every `step` is one atomic transition.
//!
//! ## Surface
//!
//! - [`Table`] — The session: persistent shoe and bankroll across rounds
//! - [`Stage`] — Where in the round the next decision lands
//! - [`Observation`] — What the agent sees each step
//! - [`TimeStep`] / [`StepType`] — Reward-carrying transition record
//! - [`action_spec`] / [`observation_spec`] — Bounded-range declarations
mod observation;
mod spec;
mod stage;
mod table;
mod timestep;

pub use observation::*;
pub use spec::*;
pub use stage::*;
pub use table::*;
pub use timestep::*;
