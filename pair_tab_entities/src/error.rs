use thiserror::Error;
use uuid::Uuid;

/// Malformed or contradictory input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("All round points are zero, no result has been entered")]
    AllRoundPointsZero,
    #[error("Round points can not be negative (competitor {competitor_id}: {round_points})")]
    NegativeRoundPoints { competitor_id: Uuid, round_points: i32 },
    #[error("Competitor {0} can not be seated twice at the same table")]
    DuplicateCompetitor(Uuid),
    #[error("There are no active competitors to pair")]
    NoEligibleCompetitors,
    #[error("Rounds are numbered from 1")]
    InvalidRound,
    #[error("Group label can not be empty")]
    EmptyGroupLabel,
    #[error("Competitor {competitor_id} is not seated at table {table_id}")]
    CompetitorNotAtTable { competitor_id: Uuid, table_id: Uuid },
    #[error("Result for table {table_id} does not match the table's seating")]
    SeatingMismatch { table_id: Uuid },
    #[error("Name must be between {min} and {max} characters long")]
    InvalidName { min: usize, max: usize },
    #[error("Club name can not be longer than {max} characters")]
    InvalidClub { max: usize },
    #[error("Number of rounds must be between {min} and {max}")]
    InvalidRoundCount { min: u32, max: u32 },
}

/// Operation attempted out of sequence.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StateError {
    #[error("Round {round} is already paired")]
    AlreadyPaired { round: u32 },
    #[error("Round {round} is not closed, results are missing")]
    RoundNotClosed { round: u32 },
    #[error("Tournament only has {num_rounds} rounds")]
    TournamentComplete { num_rounds: u32 },
    #[error("Round {round} already has recorded results")]
    RoundHasResults { round: u32 },
    #[error("Tournament has not finished yet")]
    TournamentNotFinished,
    #[error("Round {round} is already paired and has to be cleared first")]
    LaterRoundPaired { round: u32 },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NotFoundError {
    #[error("Tournament {0} does not exist")]
    Tournament(Uuid),
    #[error("Competitor {0} does not exist")]
    Competitor(Uuid),
    #[error("Table {0} does not exist")]
    Table(Uuid),
}

#[derive(Error, Debug)]
pub enum TabError {
    #[error("Invalid input: {0}")]
    Validation(#[from] ValidationError),
    #[error("Invalid state: {0}")]
    State(#[from] StateError),
    #[error("Not found: {0}")]
    NotFound(#[from] NotFoundError),
    #[error("Store error: {source}")]
    Store {
        #[from]
        source: anyhow::Error,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Validation,
    State,
    NotFound,
    Store,
}

impl TabError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            TabError::Validation(_) => ErrorKind::Validation,
            TabError::State(_) => ErrorKind::State,
            TabError::NotFound(_) => ErrorKind::NotFound,
            TabError::Store { .. } => ErrorKind::Store,
        }
    }
}
