use async_trait::async_trait;
use chrono::Utc;
use itertools::Itertools;
use pair_tab_entities::normalize::latest_submission_rows;
use pair_tab_entities::prelude::*;
use serde::{Serialize, Deserialize};

use super::ActionTrait;

/// Moves a competitor into another group from `from_round` onward.
///
/// The group is stored on the competitor so that rounds recorded later pick
/// it up. Stored results are never edited, so every already played table
/// gets a new submission that repeats the current one with the changed label.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateGroupAction {
    pub tournament_id: Uuid,
    pub competitor_id: Uuid,
    pub group: GroupLabel,
    pub from_round: u32,
}

#[async_trait]
impl ActionTrait for UpdateGroupAction {
    type Output = usize;

    async fn execute<S>(self, store: &S) -> Result<usize, TabError> where S: TournamentStore + ?Sized {
        if self.from_round == 0 {
            return Err(ValidationError::InvalidRound.into());
        }
        let competitors = store.get_competitors(self.tournament_id).await?;
        if !competitors.iter().any(|c| c.uuid == self.competitor_id) {
            return Err(NotFoundError::Competitor(self.competitor_id).into());
        }
        store.set_group_assignment(
            self.tournament_id,
            self.competitor_id,
            GroupAssignment { group: self.group.clone(), from_round: self.from_round }
        ).await?;

        let existing = store.get_results(self.tournament_id).await?;
        let current = latest_submission_rows(&existing);
        let affected_tables = current.iter()
            .filter(|r| r.competitor_id == self.competitor_id && r.round >= self.from_round && r.group != self.group)
            .map(|r| r.table_id)
            .unique()
            .collect_vec();

        let submitted_at = Utc::now();
        let mut resubmitted = vec![];
        for table_id in affected_tables.iter() {
            let submission_id = Uuid::new_v4();
            resubmitted.extend(current.iter().filter(|r| r.table_id == *table_id).map(|r| {
                let mut row = (*r).clone();
                row.uuid = Uuid::new_v4();
                row.submission_id = submission_id;
                row.submitted_at = submitted_at;
                if row.competitor_id == self.competitor_id {
                    row.group = self.group.clone();
                }
                row
            }));
        }

        store.append_results(self.tournament_id, resubmitted).await?;
        tracing::info!(
            "Moved competitor {} to group {} from round {}, resubmitted {} tables",
            self.competitor_id,
            self.group,
            self.from_round,
            affected_tables.len()
        );

        Ok(affected_tables.len())
    }
}
