use chrono::{DateTime, Utc};
use serde::{Serialize, Deserialize};
use uuid::Uuid;

use super::{group::GroupLabel, table::TableSeat};

/// One competitor's row of a submitted table result.
///
/// Rows are never edited. A correction is a new submission for the same
/// table, and only the latest submission of a table is counted.
#[derive(Debug, PartialEq, Eq, Serialize, Deserialize, Clone)]
pub struct RawResult {
    pub uuid: Uuid,
    pub tournament_id: Uuid,
    pub round: u32,
    pub table_id: Uuid,
    pub competitor_id: Uuid,
    pub seat: TableSeat,
    pub round_points: i32,
    pub group: GroupLabel,
    pub submission_id: Uuid,
    pub submitted_at: DateTime<Utc>,
}
