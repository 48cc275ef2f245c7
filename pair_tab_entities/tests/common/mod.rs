use chrono::Utc;
use pair_tab_entities::{mock::{make_mock_tournament_with_options, MockOption}, prelude::*, store::MemoryStore};

pub fn set_up_store(num_competitors: u32) -> Result<MemoryStore, TabError> {
    let snapshot = make_mock_tournament_with_options(MockOption { deterministic_uuids: true, num_competitors, ..Default::default() });
    MemoryStore::from_snapshots(vec![snapshot])
}

pub fn table(uuid: u128, round: u32, number: u32, first: u128, second: Option<u128>) -> Table {
    Table {
        uuid: Uuid::from_u128(uuid),
        tournament_id: Uuid::from_u128(1),
        round,
        number,
        first: Uuid::from_u128(first),
        second: second.map(Uuid::from_u128),
    }
}

pub fn result_row(table: &Table, seat: TableSeat, round_points: i32, group: &str, submission: u128) -> RawResult {
    RawResult {
        uuid: Uuid::new_v4(),
        tournament_id: table.tournament_id,
        round: table.round,
        table_id: table.uuid,
        competitor_id: table.competitor_at(seat).unwrap(),
        seat,
        round_points,
        group: group.parse().unwrap(),
        submission_id: Uuid::from_u128(submission),
        submitted_at: Utc::now(),
    }
}
