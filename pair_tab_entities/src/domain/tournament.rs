use serde::{Serialize, Deserialize};
use uuid::Uuid;

use crate::error::ValidationError;

pub const MIN_ROUNDS: u32 = 1;
pub const MAX_ROUNDS: u32 = 50;

#[derive(Debug, PartialEq, Eq, Serialize, Deserialize, Clone)]
pub struct Tournament {
    pub uuid: Uuid,
    pub name: String,
    /// Fixed when the tournament is created.
    pub num_rounds: u32,
    /// Last round that has been paired, 0 before the first draw.
    pub current_round: u32,
}

impl Tournament {
    pub fn new(name: impl Into<String>, num_rounds: u32) -> Self {
        Tournament {
            uuid: Uuid::new_v4(),
            name: name.into(),
            num_rounds,
            current_round: 0,
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.num_rounds < MIN_ROUNDS || self.num_rounds > MAX_ROUNDS {
            return Err(ValidationError::InvalidRoundCount { min: MIN_ROUNDS, max: MAX_ROUNDS });
        }
        Ok(())
    }

    pub fn has_round(&self, round: u32) -> bool {
        round >= 1 && round <= self.num_rounds
    }
}
