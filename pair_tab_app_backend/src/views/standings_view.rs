use pair_tab_entities::prelude::*;
use serde::{Serialize, Deserialize};

use crate::round_state::RoundState;

pub struct StandingsView;

impl StandingsView {
    /// Current standings, optionally restricted to one group. Positions are
    /// always those of the full ranking.
    pub async fn load<S>(store: &S, tournament_id: Uuid, group: Option<&GroupLabel>) -> Result<AugmentedTabView, TabError> where S: ResultStore + CompetitorDirectory + ?Sized {
        let mut tab = TabView::load_from_tournament(store, tournament_id).await?;
        if let Some(group) = group {
            tab = tab.restricted_to_group(group);
        }
        let competitors = store.get_competitors(tournament_id).await?;
        AugmentedTabView::augment(&tab, &competitors)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FinalStandingsView {
    pub tournament_id: Uuid,
    pub tournament_name: String,
    pub standings: AugmentedTabView,
}

impl FinalStandingsView {
    pub async fn load<S>(store: &S, tournament_id: Uuid) -> Result<FinalStandingsView, TabError> where S: TournamentStore + ?Sized {
        let tournament = store.get_tournament(tournament_id).await?;
        if tournament.current_round != tournament.num_rounds {
            return Err(StateError::TournamentNotFinished.into());
        }
        if RoundState::load(store, tournament_id, tournament.num_rounds).await? != RoundState::Closed {
            return Err(StateError::TournamentNotFinished.into());
        }

        Ok(FinalStandingsView {
            tournament_id,
            tournament_name: tournament.name,
            standings: AugmentedTabView::load_from_tournament(store, tournament_id).await?,
        })
    }
}
