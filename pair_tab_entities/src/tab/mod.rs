use std::collections::HashMap;

use itertools::Itertools;
use serde::{Serialize, Deserialize};
use uuid::Uuid;

use crate::domain::group::GroupLabel;
use crate::error::TabError;
use crate::normalize::{normalize_raw_results, NormalizedResult};
use crate::store::ResultStore;

mod base;
mod augmented;

pub use base::{accumulate_standings, compare_standings, rank_standings, StandingsRow};
pub use augmented::{AugmentedStandingsRow, AugmentedTabView};

/// Ranked standings of a tournament, rebuilt from all recorded results.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TabView {
    pub tournament_id: Uuid,
    pub num_rounds_played: u32,
    pub rows: Vec<StandingsRow>,
    pub competitor_index: HashMap<Uuid, usize>,
}

impl TabView {
    pub fn from_results(tournament_id: Uuid, results: &[NormalizedResult]) -> TabView {
        let rows = rank_standings(accumulate_standings(results));
        let competitor_index = rows.iter().enumerate().map(|(i, row)| (row.competitor_id, i)).collect();
        let num_rounds_played = results.iter().map(|r| r.round).max().unwrap_or(0);

        TabView { tournament_id, num_rounds_played, rows, competitor_index }
    }

    pub async fn load_from_tournament<S>(store: &S, tournament_id: Uuid) -> Result<TabView, TabError> where S: ResultStore + ?Sized {
        let raw_results = store.get_results(tournament_id).await?;
        let normalized = normalize_raw_results(&raw_results)?;
        tracing::debug!("Computing standings for tournament {} from {} results", tournament_id, normalized.len());

        Ok(Self::from_results(tournament_id, &normalized))
    }

    pub fn row_for(&self, competitor_id: Uuid) -> Option<&StandingsRow> {
        self.competitor_index.get(&competitor_id).map(|idx| &self.rows[*idx])
    }

    pub fn group_of(&self, competitor_id: Uuid) -> Option<&GroupLabel> {
        self.row_for(competitor_id).map(|row| &row.group)
    }

    /// Rows of a single group. Positions stay those of the full ranking.
    pub fn group_rows(&self, group: &GroupLabel) -> Vec<StandingsRow> {
        self.rows.iter().filter(|row| &row.group == group).cloned().collect_vec()
    }

    /// The same standings without the rows of other groups.
    pub fn restricted_to_group(&self, group: &GroupLabel) -> TabView {
        let rows = self.group_rows(group);
        let competitor_index = rows.iter().enumerate().map(|(i, row)| (row.competitor_id, i)).collect();
        TabView { tournament_id: self.tournament_id, num_rounds_played: self.num_rounds_played, rows, competitor_index }
    }

    /// Competitor ids, best position first.
    pub fn ranked_competitors(&self) -> Vec<Uuid> {
        self.rows.iter().map(|row| row.competitor_id).collect_vec()
    }
}
