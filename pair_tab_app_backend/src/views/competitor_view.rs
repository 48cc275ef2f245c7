use std::collections::{BTreeMap, HashMap};

use itertools::Itertools;
use pair_tab_entities::normalize::normalize_raw_results;
use pair_tab_entities::prelude::*;
use serde::{Serialize, Deserialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HistoryEntry {
    pub round: u32,
    pub table_number: u32,
    /// Absent on a bye.
    pub opponent_id: Option<Uuid>,
    pub opponent_name: Option<String>,
    /// Absent on a bye and while the opponent has no counted result.
    pub opponent_round_points: Option<i32>,
    pub round_points: i32,
    pub won: bool,
    pub differential: i32,
    pub group: GroupLabel,
}

/// Every counted result of a competitor, ordered by round.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CompetitorHistory {
    pub competitor_id: Uuid,
    pub name: String,
    pub entries: Vec<HistoryEntry>,
}

impl CompetitorHistory {
    pub fn from_results(competitor: &Competitor, competitors: &[Competitor], tables: &[Table], results: &[NormalizedResult]) -> Result<CompetitorHistory, TabError> {
        let tables_by_id = tables.iter().map(|t| (t.uuid, t)).collect::<HashMap<_, _>>();
        let names_by_id = competitors.iter().map(|c| (c.uuid, c.name.as_str())).collect::<HashMap<_, _>>();

        let entries = results.iter()
            .filter(|r| r.competitor_id == competitor.uuid)
            .sorted_by_key(|r| r.round)
            .map(|r| -> Result<HistoryEntry, TabError> {
                let table = tables_by_id.get(&r.table_id).ok_or(NotFoundError::Table(r.table_id))?;
                let opponent_id = table.competitors().find(|c| *c != competitor.uuid);
                let opponent_name = opponent_id
                    .map(|id| names_by_id.get(&id).map(|name| name.to_string()).ok_or(NotFoundError::Competitor(id)))
                    .transpose()?;
                let opponent_round_points = opponent_id.and_then(|id| {
                    results.iter().find(|o| o.table_id == r.table_id && o.competitor_id == id).map(|o| o.round_points)
                });
                Ok(HistoryEntry {
                    round: r.round,
                    table_number: table.number,
                    opponent_id,
                    opponent_name,
                    opponent_round_points,
                    round_points: r.round_points,
                    won: r.won,
                    differential: r.differential,
                    group: r.group.clone(),
                })
            }).collect::<Result<Vec<_>, TabError>>()?;

        Ok(CompetitorHistory { competitor_id: competitor.uuid, name: competitor.name.clone(), entries })
    }

    pub async fn load<S>(store: &S, tournament_id: Uuid, competitor_id: Uuid) -> Result<CompetitorHistory, TabError> where S: TournamentStore + ?Sized {
        let competitors = store.get_competitors(tournament_id).await?;
        let competitor = competitors.iter().find(|c| c.uuid == competitor_id).ok_or(NotFoundError::Competitor(competitor_id))?;
        let tables = store.get_tables(tournament_id).await?;
        let results = normalize_raw_results(&store.get_results(tournament_id).await?)?;

        Self::from_results(competitor, &competitors, &tables, &results)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CompetitorStatistics {
    pub competitor_id: Uuid,
    pub games_played: u32,
    pub wins: u32,
    pub losses: u32,
    pub average_differential: f64,
    /// Byes are not counted, their points are fixed.
    pub best_round_points: Option<i32>,
    pub worst_round_points: Option<i32>,
    pub results_per_group: BTreeMap<GroupLabel, u32>,
}

impl CompetitorStatistics {
    pub fn from_history(history: &CompetitorHistory) -> CompetitorStatistics {
        let games_played = history.entries.len() as u32;
        let wins = history.entries.iter().filter(|e| e.won).count() as u32;
        let total_differential: i32 = history.entries.iter().map(|e| e.differential).sum();
        let played_points = history.entries.iter().filter(|e| e.opponent_id.is_some()).map(|e| e.round_points);

        let mut results_per_group = BTreeMap::new();
        for entry in history.entries.iter() {
            *results_per_group.entry(entry.group.clone()).or_insert(0) += 1;
        }

        CompetitorStatistics {
            competitor_id: history.competitor_id,
            games_played,
            wins,
            losses: games_played - wins,
            average_differential: if games_played > 0 { total_differential as f64 / games_played as f64 } else { 0.0 },
            best_round_points: played_points.clone().max(),
            worst_round_points: played_points.min(),
            results_per_group,
        }
    }
}
