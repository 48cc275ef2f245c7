use std::collections::HashSet;

use async_trait::async_trait;
use chrono::Utc;
use itertools::Itertools;
use pair_tab_entities::normalize::{latest_submission_rows, normalize_table_result};
use pair_tab_entities::prelude::*;
use serde::{Serialize, Deserialize};

use super::{ActionTrait, base::find_table};

/// Submits the result of one table. Submitting again for the same table
/// replaces the earlier result.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordResultAction {
    pub tournament_id: Uuid,
    pub table_id: Uuid,
    pub results: Vec<SeatPoints>,
    #[serde(default)]
    pub default_group: Option<GroupLabel>,
}

impl RecordResultAction {
    pub fn new(tournament_id: Uuid, table_id: Uuid, results: Vec<SeatPoints>) -> Self {
        RecordResultAction { tournament_id, table_id, results, default_group: None }
    }

    fn seat_results(&self, table: &Table) -> Result<(SeatPoints, Option<SeatPoints>), ValidationError> {
        let mut seen = HashSet::new();
        for entry in self.results.iter() {
            if !seen.insert(entry.competitor_id) {
                return Err(ValidationError::DuplicateCompetitor(entry.competitor_id));
            }
            if table.seat_of(entry.competitor_id).is_none() {
                return Err(ValidationError::CompetitorNotAtTable { competitor_id: entry.competitor_id, table_id: table.uuid });
            }
        }
        if self.results.len() != table.competitors().count() {
            return Err(ValidationError::SeatingMismatch { table_id: table.uuid });
        }

        let at_seat = |seat: TableSeat| {
            table.competitor_at(seat).and_then(|id| self.results.iter().find(|r| r.competitor_id == id)).cloned()
        };

        let first = at_seat(TableSeat::First).ok_or(ValidationError::SeatingMismatch { table_id: table.uuid })?;
        Ok((first, at_seat(TableSeat::Second)))
    }
}

/// Group the competitor played in most recently, up to and including `round`.
fn latest_group(rows: &[RawResult], competitor_id: Uuid, round: u32) -> Option<GroupLabel> {
    latest_submission_rows(rows)
        .into_iter()
        .filter(|r| r.competitor_id == competitor_id && r.round <= round)
        .max_by_key(|r| (r.round, r.submitted_at))
        .map(|r| r.group.clone())
}

#[async_trait]
impl ActionTrait for RecordResultAction {
    type Output = Vec<NormalizedResult>;

    async fn execute<S>(self, store: &S) -> Result<Vec<NormalizedResult>, TabError> where S: TournamentStore + ?Sized {
        let table = find_table(store, self.tournament_id, self.table_id).await?;
        let (mut first, mut second) = self.seat_results(&table)?;

        let existing = store.get_results(self.tournament_id).await?;
        let competitors = store.get_competitors(self.tournament_id).await?;
        let default_group = self.default_group.clone().unwrap_or_default();
        for seat in std::iter::once(&mut first).chain(second.as_mut()) {
            if seat.group.is_none() {
                let assigned = competitors.iter()
                    .find(|c| c.uuid == seat.competitor_id)
                    .and_then(|c| c.assigned_group(table.round))
                    .cloned();
                seat.group = Some(
                    assigned
                        .or_else(|| latest_group(&existing, seat.competitor_id, table.round))
                        .unwrap_or_else(|| default_group.clone())
                );
            }
        }

        let normalized = normalize_table_result(&TableResultInput {
            table_id: table.uuid,
            round: table.round,
            first: first.clone(),
            second: second.clone(),
        })?;

        let submission_id = Uuid::new_v4();
        let submitted_at = Utc::now();
        let rows = [(TableSeat::First, Some(first)), (TableSeat::Second, second)].into_iter().filter_map(|(seat, points)| {
            points.map(|points| RawResult {
                uuid: Uuid::new_v4(),
                tournament_id: self.tournament_id,
                round: table.round,
                table_id: table.uuid,
                competitor_id: points.competitor_id,
                seat,
                round_points: if table.is_bye() { BYE_ROUND_POINTS } else { points.round_points },
                group: points.group.unwrap_or_default(),
                submission_id,
                submitted_at,
            })
        }).collect_vec();

        store.append_results(self.tournament_id, rows).await?;
        tracing::info!("Recorded result for table {} in round {} of tournament {}", table.number, table.round, self.tournament_id);

        Ok(normalized)
    }
}
