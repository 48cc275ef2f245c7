use std::collections::{HashMap, HashSet};
use std::sync::RwLock;

use async_trait::async_trait;
use itertools::Itertools;
use uuid::Uuid;

use crate::domain::{competitor::{Competitor, GroupAssignment}, result::RawResult, table::Table, tournament::Tournament};
use crate::error::{NotFoundError, StateError, TabError};
use crate::snapshot::TournamentSnapshot;

use super::{CompetitorDirectory, ResultStore, RoundDraw, TableStore, TournamentMetadata};

/// In-process store. A single lock guards all tournaments, which makes
/// every write, including a round draw, atomic.
#[derive(Debug, Default)]
pub struct MemoryStore {
    tournaments: RwLock<HashMap<Uuid, TournamentSnapshot>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_snapshots(snapshots: impl IntoIterator<Item = TournamentSnapshot>) -> Result<Self, TabError> {
        let store = Self::new();
        for snapshot in snapshots {
            store.insert_tournament(snapshot)?;
        }
        Ok(store)
    }

    pub fn insert_tournament(&self, snapshot: TournamentSnapshot) -> Result<(), TabError> {
        snapshot.validate()?;
        let mut tournaments = self.tournaments.write().map_err(|_| anyhow::anyhow!("Memory store lock poisoned"))?;
        tournaments.insert(snapshot.tournament.uuid, snapshot);
        Ok(())
    }

    pub fn add_competitor(&self, competitor: Competitor) -> Result<(), TabError> {
        competitor.validate()?;
        self.write(competitor.tournament_id, |snapshot| {
            snapshot.competitors.retain(|c| c.uuid != competitor.uuid);
            snapshot.competitors.push(competitor);
            Ok(())
        })
    }

    pub fn snapshot(&self, tournament_id: Uuid) -> Result<TournamentSnapshot, TabError> {
        self.read(tournament_id, |snapshot| snapshot.clone())
    }

    fn read<R>(&self, tournament_id: Uuid, f: impl FnOnce(&TournamentSnapshot) -> R) -> Result<R, TabError> {
        let tournaments = self.tournaments.read().map_err(|_| anyhow::anyhow!("Memory store lock poisoned"))?;
        let snapshot = tournaments.get(&tournament_id).ok_or(NotFoundError::Tournament(tournament_id))?;
        Ok(f(snapshot))
    }

    fn write<R>(&self, tournament_id: Uuid, f: impl FnOnce(&mut TournamentSnapshot) -> Result<R, TabError>) -> Result<R, TabError> {
        let mut tournaments = self.tournaments.write().map_err(|_| anyhow::anyhow!("Memory store lock poisoned"))?;
        let snapshot = tournaments.get_mut(&tournament_id).ok_or(NotFoundError::Tournament(tournament_id))?;
        f(snapshot)
    }
}

#[async_trait]
impl CompetitorDirectory for MemoryStore {
    async fn get_competitors(&self, tournament_id: Uuid) -> Result<Vec<Competitor>, TabError> {
        self.read(tournament_id, |snapshot| snapshot.competitors.clone())
    }

    async fn set_group_assignment(&self, tournament_id: Uuid, competitor_id: Uuid, assignment: GroupAssignment) -> Result<(), TabError> {
        self.write(tournament_id, |snapshot| {
            let competitor = snapshot.competitors.iter_mut().find(|c| c.uuid == competitor_id).ok_or(NotFoundError::Competitor(competitor_id))?;
            competitor.group_assignment = Some(assignment);
            Ok(())
        })
    }
}

#[async_trait]
impl ResultStore for MemoryStore {
    async fn get_results(&self, tournament_id: Uuid) -> Result<Vec<RawResult>, TabError> {
        self.read(tournament_id, |snapshot| snapshot.results.clone())
    }

    async fn append_results(&self, tournament_id: Uuid, results: Vec<RawResult>) -> Result<(), TabError> {
        self.write(tournament_id, |snapshot| {
            snapshot.results.extend(results);
            Ok(())
        })
    }
}

#[async_trait]
impl TableStore for MemoryStore {
    async fn get_tables(&self, tournament_id: Uuid) -> Result<Vec<Table>, TabError> {
        self.read(tournament_id, |snapshot| snapshot.tables.clone())
    }

    async fn get_round_tables(&self, tournament_id: Uuid, round: u32) -> Result<Vec<Table>, TabError> {
        self.read(tournament_id, |snapshot| {
            snapshot.tables.iter().filter(|t| t.round == round).sorted_by_key(|t| t.number).cloned().collect_vec()
        })
    }

    async fn create_round_draw(&self, draw: RoundDraw) -> Result<(), TabError> {
        self.write(draw.tournament_id, |snapshot| {
            if snapshot.tables.iter().any(|t| t.round == draw.round) {
                return Err(StateError::AlreadyPaired { round: draw.round }.into());
            }
            snapshot.tables.extend(draw.tables);
            snapshot.results.extend(draw.bye_results);
            snapshot.tournament.current_round = draw.current_round;
            Ok(())
        })
    }

    async fn delete_round_tables(&self, tournament_id: Uuid, round: u32) -> Result<Vec<Table>, TabError> {
        self.write(tournament_id, |snapshot| {
            let (removed, kept): (Vec<_>, Vec<_>) = snapshot.tables.drain(..).partition(|t| t.round == round);
            snapshot.tables = kept;

            let removed_ids = removed.iter().map(|t| t.uuid).collect::<HashSet<_>>();
            snapshot.results.retain(|r| !removed_ids.contains(&r.table_id));
            Ok(removed)
        })
    }
}

#[async_trait]
impl TournamentMetadata for MemoryStore {
    async fn get_tournament(&self, tournament_id: Uuid) -> Result<Tournament, TabError> {
        self.read(tournament_id, |snapshot| snapshot.tournament.clone())
    }

    async fn set_current_round(&self, tournament_id: Uuid, round: u32) -> Result<(), TabError> {
        self.write(tournament_id, |snapshot| {
            snapshot.tournament.current_round = round;
            Ok(())
        })
    }
}
