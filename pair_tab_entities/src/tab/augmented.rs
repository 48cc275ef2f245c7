use std::collections::HashMap;

use serde::{Serialize, Deserialize};
use uuid::Uuid;

use crate::domain::competitor::Competitor;
use crate::error::{NotFoundError, TabError};
use crate::store::{CompetitorDirectory, ResultStore};

use super::{StandingsRow, TabView};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AugmentedStandingsRow {
    #[serde(flatten)]
    pub row: StandingsRow,
    pub name: String,
    pub club: Option<String>,
    pub is_active: bool,
}

/// Standings with the competitor details needed for display.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AugmentedTabView {
    pub tournament_id: Uuid,
    pub num_rounds_played: u32,
    pub rows: Vec<AugmentedStandingsRow>,
}

impl AugmentedTabView {
    pub fn augment(tab: &TabView, competitors: &[Competitor]) -> Result<AugmentedTabView, TabError> {
        let competitors_by_id = competitors.iter().map(|c| (c.uuid, c)).collect::<HashMap<_, _>>();

        let rows = tab.rows.iter().map(|row| -> Result<AugmentedStandingsRow, TabError> {
            let competitor = competitors_by_id.get(&row.competitor_id).ok_or(NotFoundError::Competitor(row.competitor_id))?;
            Ok(AugmentedStandingsRow {
                row: row.clone(),
                name: competitor.name.clone(),
                club: competitor.club.clone(),
                is_active: competitor.is_active,
            })
        }).collect::<Result<Vec<_>, TabError>>()?;

        Ok(AugmentedTabView { tournament_id: tab.tournament_id, num_rounds_played: tab.num_rounds_played, rows })
    }

    pub async fn load_from_tournament<S>(store: &S, tournament_id: Uuid) -> Result<AugmentedTabView, TabError> where S: ResultStore + CompetitorDirectory + ?Sized {
        let tab = TabView::load_from_tournament(store, tournament_id).await?;
        let competitors = store.get_competitors(tournament_id).await?;
        Self::augment(&tab, &competitors)
    }
}
