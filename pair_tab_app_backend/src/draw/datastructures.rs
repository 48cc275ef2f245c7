use itertools::Itertools;
use pair_tab_entities::prelude::{Table, Uuid};
use serde::{Serialize, Deserialize};

/// A table of a draw before it is tied to a tournament round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrawTable {
    pub number: u32,
    pub first: Uuid,
    pub second: Option<Uuid>,
}

impl DrawTable {
    pub fn is_bye(&self) -> bool {
        self.second.is_none()
    }

    pub fn into_table(self, tournament_id: Uuid, round: u32) -> Table {
        Table {
            uuid: Uuid::new_v4(),
            tournament_id,
            round,
            number: self.number,
            first: self.first,
            second: self.second,
        }
    }
}

/// Seats consecutive entries together, numbering tables from 1. With an odd
/// count the last entry sits alone.
pub fn pair_consecutive(competitors: &[Uuid]) -> Vec<DrawTable> {
    competitors.chunks(2).enumerate().map(|(i, chunk)| DrawTable {
        number: i as u32 + 1,
        first: chunk[0],
        second: chunk.get(1).copied(),
    }).collect_vec()
}
