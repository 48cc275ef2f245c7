use async_trait::async_trait;
use serde::{Serialize, Deserialize};
use uuid::Uuid;

use crate::domain::{competitor::{Competitor, GroupAssignment}, result::RawResult, table::Table, tournament::Tournament};
use crate::error::TabError;

mod memory;

pub use memory::MemoryStore;

/// Everything a round draw persists. Stores must write it all or nothing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundDraw {
    pub tournament_id: Uuid,
    pub round: u32,
    /// Current round of the tournament once the draw is stored.
    pub current_round: u32,
    pub tables: Vec<Table>,
    /// Results of the bye tables, which are known when the round is drawn.
    pub bye_results: Vec<RawResult>,
}

#[async_trait]
pub trait CompetitorDirectory {
    async fn get_competitors(&self, tournament_id: Uuid) -> Result<Vec<Competitor>, TabError>;
    async fn set_group_assignment(&self, tournament_id: Uuid, competitor_id: Uuid, assignment: GroupAssignment) -> Result<(), TabError>;
}

#[async_trait]
pub trait ResultStore {
    /// All stored rows of the tournament, in the order they were appended.
    async fn get_results(&self, tournament_id: Uuid) -> Result<Vec<RawResult>, TabError>;
    async fn append_results(&self, tournament_id: Uuid, results: Vec<RawResult>) -> Result<(), TabError>;
}

#[async_trait]
pub trait TableStore {
    async fn get_tables(&self, tournament_id: Uuid) -> Result<Vec<Table>, TabError>;
    async fn get_round_tables(&self, tournament_id: Uuid, round: u32) -> Result<Vec<Table>, TabError>;
    /// Fails with `StateError::AlreadyPaired` if the round already has tables.
    /// The check, the insert and the update of the current round must not
    /// interleave with another draw of the same round.
    async fn create_round_draw(&self, draw: RoundDraw) -> Result<(), TabError>;
    /// Removes the tables of a round together with any results stored for them.
    async fn delete_round_tables(&self, tournament_id: Uuid, round: u32) -> Result<Vec<Table>, TabError>;
}

#[async_trait]
pub trait TournamentMetadata {
    async fn get_tournament(&self, tournament_id: Uuid) -> Result<Tournament, TabError>;
    async fn set_current_round(&self, tournament_id: Uuid, round: u32) -> Result<(), TabError>;
}

pub trait TournamentStore: CompetitorDirectory + ResultStore + TableStore + TournamentMetadata + Send + Sync {}

impl<T> TournamentStore for T where T: CompetitorDirectory + ResultStore + TableStore + TournamentMetadata + Send + Sync {}
