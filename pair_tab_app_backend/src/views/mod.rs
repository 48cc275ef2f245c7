pub mod standings_view;
pub mod round_view;
pub mod competitor_view;

use pair_tab_entities::prelude::*;
use serde::{Serialize, Deserialize};

pub use self::standings_view::{FinalStandingsView, StandingsView};
pub use self::round_view::{RoundOverview, RoundOverviewTable, SeatedCompetitor};
pub use self::competitor_view::{CompetitorHistory, CompetitorStatistics, HistoryEntry};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type")]
pub enum View {
    Standings { tournament_id: Uuid, group: Option<GroupLabel> },
    FinalStandings { tournament_id: Uuid },
    Round { tournament_id: Uuid, round: u32 },
    CompetitorHistory { tournament_id: Uuid, competitor_id: Uuid },
    CompetitorStatistics { tournament_id: Uuid, competitor_id: Uuid },
}

impl View {
    pub async fn load_json<S>(&self, store: &S) -> Result<String, anyhow::Error> where S: TournamentStore + ?Sized {
        Ok(match self {
            View::Standings { tournament_id, group } => {
                serde_json::to_string_pretty(&StandingsView::load(store, *tournament_id, group.as_ref()).await?)?
            },
            View::FinalStandings { tournament_id } => {
                serde_json::to_string_pretty(&FinalStandingsView::load(store, *tournament_id).await?)?
            },
            View::Round { tournament_id, round } => {
                serde_json::to_string_pretty(&RoundOverview::load(store, *tournament_id, *round).await?)?
            },
            View::CompetitorHistory { tournament_id, competitor_id } => {
                serde_json::to_string_pretty(&CompetitorHistory::load(store, *tournament_id, *competitor_id).await?)?
            },
            View::CompetitorStatistics { tournament_id, competitor_id } => {
                let history = CompetitorHistory::load(store, *tournament_id, *competitor_id).await?;
                serde_json::to_string_pretty(&CompetitorStatistics::from_history(&history))?
            },
        })
    }
}
