use std::collections::HashSet;

use async_trait::async_trait;
use pair_tab_entities::prelude::*;
use serde::{Serialize, Deserialize};

use super::ActionTrait;

/// Removes the draw of a round so it can be paired again. Only possible
/// while no table of the round has a result and the next round is unpaired.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClearRoundAction {
    pub tournament_id: Uuid,
    pub round: u32,
}

#[async_trait]
impl ActionTrait for ClearRoundAction {
    type Output = Vec<Table>;

    async fn execute<S>(self, store: &S) -> Result<Vec<Table>, TabError> where S: TournamentStore + ?Sized {
        if self.round == 0 {
            return Err(ValidationError::InvalidRound.into());
        }
        let tournament = store.get_tournament(self.tournament_id).await?;
        if !store.get_round_tables(self.tournament_id, self.round + 1).await?.is_empty() {
            return Err(StateError::LaterRoundPaired { round: self.round + 1 }.into());
        }

        let tables = store.get_round_tables(self.tournament_id, self.round).await?;
        let contested = tables.iter().filter(|t| !t.is_bye()).map(|t| t.uuid).collect::<HashSet<_>>();
        let results = store.get_results(self.tournament_id).await?;
        if results.iter().any(|r| contested.contains(&r.table_id)) {
            return Err(StateError::RoundHasResults { round: self.round }.into());
        }

        let removed = store.delete_round_tables(self.tournament_id, self.round).await?;
        if tournament.current_round >= self.round {
            store.set_current_round(self.tournament_id, self.round - 1).await?;
        }

        tracing::info!("Cleared {} tables of round {} in tournament {}", removed.len(), self.round, self.tournament_id);
        Ok(removed)
    }
}
