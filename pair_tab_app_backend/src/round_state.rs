use std::collections::HashSet;

use pair_tab_entities::prelude::*;
use serde::{Serialize, Deserialize};

/// Lifecycle of a round, derived from its tables and the results stored for
/// them. Bye tables never count, their result is stored with the draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundState {
    Unpaired,
    Paired,
    InProgress,
    Closed,
}

impl RoundState {
    pub fn from_tables(tables: &[Table], results: &[RawResult]) -> RoundState {
        if tables.is_empty() {
            return RoundState::Unpaired;
        }

        let tables_with_results = results.iter().map(|r| r.table_id).collect::<HashSet<_>>();
        let contested = tables.iter().filter(|t| !t.is_bye()).collect::<Vec<_>>();
        let num_recorded = contested.iter().filter(|t| tables_with_results.contains(&t.uuid)).count();

        if num_recorded == contested.len() {
            RoundState::Closed
        }
        else if num_recorded > 0 {
            RoundState::InProgress
        }
        else {
            RoundState::Paired
        }
    }

    pub async fn load<S>(store: &S, tournament_id: Uuid, round: u32) -> Result<RoundState, TabError> where S: TableStore + ResultStore + ?Sized {
        let tables = store.get_round_tables(tournament_id, round).await?;
        let results = store.get_results(tournament_id).await?;
        Ok(Self::from_tables(&tables, &results))
    }

    pub fn accepts_pairing_of_next_round(&self) -> bool {
        *self == RoundState::Closed
    }
}

#[cfg(test)]
mod test {
    use chrono::Utc;

    use super::*;

    fn table(id: u128, second: Option<u128>) -> Table {
        Table {
            uuid: Uuid::from_u128(id),
            tournament_id: Uuid::from_u128(1),
            round: 1,
            number: id as u32,
            first: Uuid::from_u128(1000 + id),
            second: second.map(Uuid::from_u128),
        }
    }

    fn result(table: u128) -> RawResult {
        RawResult {
            uuid: Uuid::new_v4(),
            tournament_id: Uuid::from_u128(1),
            round: 1,
            table_id: Uuid::from_u128(table),
            competitor_id: Uuid::from_u128(1000 + table),
            seat: TableSeat::First,
            round_points: 100,
            group: GroupLabel::default(),
            submission_id: Uuid::new_v4(),
            submitted_at: Utc::now(),
        }
    }

    #[test]
    fn test_round_state_transitions() {
        let tables = vec![table(1, Some(2001)), table(2, Some(2002)), table(3, None)];

        assert_eq!(RoundState::from_tables(&[], &[]), RoundState::Unpaired);
        assert_eq!(RoundState::from_tables(&tables, &[]), RoundState::Paired);
        assert_eq!(RoundState::from_tables(&tables, &[result(3)]), RoundState::Paired);
        assert_eq!(RoundState::from_tables(&tables, &[result(1)]), RoundState::InProgress);
        assert_eq!(RoundState::from_tables(&tables, &[result(1), result(2)]), RoundState::Closed);
    }

    #[test]
    fn test_round_of_only_a_bye_is_closed() {
        assert_eq!(RoundState::from_tables(&[table(1, None)], &[]), RoundState::Closed);
    }
}
