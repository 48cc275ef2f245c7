use std::cmp::Ordering;
use std::collections::HashMap;

use serde::{Serialize, Deserialize};
use uuid::Uuid;

use crate::domain::group::GroupLabel;
use crate::normalize::NormalizedResult;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StandingsRow {
    /// 1-based, 0 until the row has been ranked.
    pub position: u32,
    pub competitor_id: Uuid,
    pub wins: u32,
    pub differential: i32,
    pub games_played: u32,
    pub group: GroupLabel,
}

/// Folds normalized results into one row per competitor. Rows come out in
/// the order in which their competitors first appear in `results`.
pub fn accumulate_standings(results: &[NormalizedResult]) -> Vec<StandingsRow> {
    let mut rows: Vec<StandingsRow> = vec![];
    let mut row_index: HashMap<Uuid, usize> = HashMap::new();
    let mut group_rounds: Vec<u32> = vec![];

    for result in results {
        let idx = *row_index.entry(result.competitor_id).or_insert_with(|| {
            rows.push(StandingsRow {
                position: 0,
                competitor_id: result.competitor_id,
                wins: 0,
                differential: 0,
                games_played: 0,
                group: result.group.clone(),
            });
            group_rounds.push(result.round);
            rows.len() - 1
        });

        let row = &mut rows[idx];
        row.wins += result.win_flag();
        row.differential += result.differential;
        row.games_played += 1;

        if result.round >= group_rounds[idx] {
            row.group = result.group.clone();
            group_rounds[idx] = result.round;
        }
    }

    rows
}

/// Group ascending, then wins descending, then differential descending.
pub fn compare_standings(a: &StandingsRow, b: &StandingsRow) -> Ordering {
    a.group.cmp(&b.group)
        .then_with(|| b.wins.cmp(&a.wins))
        .then_with(|| b.differential.cmp(&a.differential))
}

/// Sorts rows with [`compare_standings`] and assigns positions. Rows that
/// tie on every key keep their input order.
pub fn rank_standings(mut rows: Vec<StandingsRow>) -> Vec<StandingsRow> {
    rows.sort_by(compare_standings);
    for (i, row) in rows.iter_mut().enumerate() {
        row.position = i as u32 + 1;
    }
    rows
}
