use serde::{Serialize, Deserialize};
use uuid::Uuid;

use crate::error::ValidationError;

use super::group::GroupLabel;

pub const NAME_MIN_LENGTH: usize = 3;
pub const NAME_MAX_LENGTH: usize = 100;
pub const CLUB_MAX_LENGTH: usize = 50;

/// Group a competitor plays in from `from_round` onward, set before the
/// rounds concerned have results.
#[derive(Debug, PartialEq, Eq, Serialize, Deserialize, Clone)]
pub struct GroupAssignment {
    pub group: GroupLabel,
    pub from_round: u32,
}

/// A pair entered into a tournament. Only active competitors are drawn,
/// inactive ones keep their results.
#[derive(Debug, PartialEq, Eq, Serialize, Deserialize, Clone)]
pub struct Competitor {
    pub uuid: Uuid,
    pub tournament_id: Uuid,
    pub name: String,
    pub club: Option<String>,
    pub is_active: bool,
    #[serde(default)]
    pub group_assignment: Option<GroupAssignment>,
}

impl Competitor {
    pub fn new(tournament_id: Uuid, name: impl Into<String>) -> Self {
        Competitor {
            uuid: Uuid::new_v4(),
            tournament_id,
            name: name.into(),
            club: None,
            is_active: true,
            group_assignment: None,
        }
    }

    /// The assigned group if it applies to `round`.
    pub fn assigned_group(&self, round: u32) -> Option<&GroupLabel> {
        self.group_assignment.as_ref().filter(|a| a.from_round <= round).map(|a| &a.group)
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        let name_length = self.name.trim().chars().count();
        if name_length < NAME_MIN_LENGTH || name_length > NAME_MAX_LENGTH {
            return Err(ValidationError::InvalidName { min: NAME_MIN_LENGTH, max: NAME_MAX_LENGTH });
        }

        match &self.club {
            Some(club) if club.chars().count() > CLUB_MAX_LENGTH => Err(ValidationError::InvalidClub { max: CLUB_MAX_LENGTH }),
            _ => Ok(())
        }
    }
}
