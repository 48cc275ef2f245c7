use std::collections::HashMap;

use itertools::Itertools;
use serde::{Serialize, Deserialize};
use uuid::Uuid;

use crate::domain::{group::GroupLabel, result::RawResult, table::TableSeat};
use crate::error::ValidationError;

/// Round points awarded to the competitor sitting out a round.
pub const BYE_ROUND_POINTS: i32 = 150;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeatPoints {
    pub competitor_id: Uuid,
    pub round_points: i32,
    #[serde(default)]
    pub group: Option<GroupLabel>,
}

impl SeatPoints {
    pub fn new(competitor_id: Uuid, round_points: i32) -> Self {
        SeatPoints { competitor_id, round_points, group: None }
    }

    pub fn with_group(mut self, group: GroupLabel) -> Self {
        self.group = Some(group);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableResultInput {
    pub table_id: Uuid,
    pub round: u32,
    pub first: SeatPoints,
    pub second: Option<SeatPoints>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizedResult {
    pub competitor_id: Uuid,
    pub table_id: Uuid,
    pub round: u32,
    /// Points as entered, before any tie-break adjustment.
    pub round_points: i32,
    pub won: bool,
    pub differential: i32,
    pub group: GroupLabel,
}

impl NormalizedResult {
    pub fn win_flag(&self) -> u32 {
        if self.won { 1 } else { 0 }
    }
}

/// Tables can not end in a draw. On equal points the second-listed
/// competitor loses a single point, so the first-listed competitor wins.
pub fn resolve_tied_round_points(first: i32, second: i32) -> (i32, i32) {
    if first == second {
        (first, second - 1)
    }
    else {
        (first, second)
    }
}

pub fn normalize_bye(table_id: Uuid, round: u32, seat: &SeatPoints) -> NormalizedResult {
    NormalizedResult {
        competitor_id: seat.competitor_id,
        table_id,
        round,
        round_points: BYE_ROUND_POINTS,
        won: true,
        differential: BYE_ROUND_POINTS,
        group: seat.group.clone().unwrap_or_default(),
    }
}

pub fn normalize_table_result(input: &TableResultInput) -> Result<Vec<NormalizedResult>, ValidationError> {
    let second = match &input.second {
        Some(second) => second,
        None => return Ok(vec![normalize_bye(input.table_id, input.round, &input.first)]),
    };
    let first = &input.first;

    if first.competitor_id == second.competitor_id {
        return Err(ValidationError::DuplicateCompetitor(first.competitor_id));
    }

    for seat in [first, second] {
        if seat.round_points < 0 {
            return Err(ValidationError::NegativeRoundPoints { competitor_id: seat.competitor_id, round_points: seat.round_points });
        }
    }

    if first.round_points == 0 && second.round_points == 0 {
        return Err(ValidationError::AllRoundPointsZero);
    }

    let (first_points, second_points) = resolve_tied_round_points(first.round_points, second.round_points);
    let first_won = first_points > second_points;

    Ok(vec![
        NormalizedResult {
            competitor_id: first.competitor_id,
            table_id: input.table_id,
            round: input.round,
            round_points: first.round_points,
            won: first_won,
            differential: first_points - second_points,
            group: first.group.clone().unwrap_or_default(),
        },
        NormalizedResult {
            competitor_id: second.competitor_id,
            table_id: input.table_id,
            round: input.round,
            round_points: second.round_points,
            won: !first_won,
            differential: second_points - first_points,
            group: second.group.clone().unwrap_or_default(),
        },
    ])
}

/// Keeps only the rows of the most recent submission of every table.
/// Submissions with equal timestamps are resolved in favour of the one stored last.
pub fn latest_submission_rows(rows: &[RawResult]) -> Vec<&RawResult> {
    let mut latest: HashMap<Uuid, &RawResult> = HashMap::new();
    for row in rows.iter() {
        match latest.get(&row.table_id) {
            Some(current) if current.submitted_at > row.submitted_at => {},
            _ => {
                latest.insert(row.table_id, row);
            }
        }
    }

    rows.iter().filter(|row| {
        latest.get(&row.table_id).map(|winner| winner.submission_id == row.submission_id).unwrap_or(false)
    }).collect_vec()
}

/// Normalizes every table result stored for a tournament.
pub fn normalize_raw_results(rows: &[RawResult]) -> Result<Vec<NormalizedResult>, ValidationError> {
    let by_table = latest_submission_rows(rows).into_iter().into_group_map_by(|row| row.table_id);

    let mut normalized = vec![];
    for (table_id, table_rows) in by_table.into_iter().sorted_by_key(|(table_id, rows)| (rows[0].round, *table_id)) {
        let table_rows = table_rows.into_iter().sorted_by_key(|row| row.seat).collect_vec();
        let seat_points = |row: &RawResult| SeatPoints {
            competitor_id: row.competitor_id,
            round_points: row.round_points,
            group: Some(row.group.clone()),
        };

        let input = match table_rows.as_slice() {
            [first] if first.seat == TableSeat::First => TableResultInput {
                table_id,
                round: first.round,
                first: seat_points(*first),
                second: None,
            },
            [first, second] if first.seat == TableSeat::First && second.seat == TableSeat::Second && first.round == second.round => TableResultInput {
                table_id,
                round: first.round,
                first: seat_points(*first),
                second: Some(seat_points(*second)),
            },
            _ => return Err(ValidationError::SeatingMismatch { table_id }),
        };

        normalized.extend(normalize_table_result(&input)?);
    }

    Ok(normalized)
}
