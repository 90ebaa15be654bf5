use super::observation::Observation;
use rbj_core::Payout;

/// Where a timestep falls in an episode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[derive(serde::Serialize, serde::Deserialize)]
pub enum StepType {
    /// The first step of a fresh episode; carries no reward.
    First,
    /// An interior transition.
    Mid,
    /// The terminal step; the episode is over.
    Last,
}

/// One environment transition: step type, reward, and observation.
#[derive(Debug, Clone, Copy, PartialEq)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct TimeStep {
    step: StepType,
    reward: Option<Payout>,
    observation: Observation,
}

impl TimeStep {
    /// The first step of a new episode.
    pub fn restart(observation: Observation) -> Self {
        Self {
            step: StepType::First,
            reward: None,
            observation,
        }
    }
    /// An interior transition carrying a reward.
    pub fn transition(reward: Payout, observation: Observation) -> Self {
        Self {
            step: StepType::Mid,
            reward: Some(reward),
            observation,
        }
    }
    /// The terminal step of the episode.
    pub fn termination(reward: Payout, observation: Observation) -> Self {
        Self {
            step: StepType::Last,
            reward: Some(reward),
            observation,
        }
    }

    pub fn step_type(&self) -> StepType {
        self.step
    }
    pub fn is_first(&self) -> bool {
        self.step == StepType::First
    }
    pub fn is_last(&self) -> bool {
        self.step == StepType::Last
    }
    pub fn reward(&self) -> Payout {
        self.reward.unwrap_or(0.0)
    }
    pub fn observation(&self) -> &Observation {
        &self.observation
    }
}
