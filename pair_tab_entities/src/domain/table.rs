use serde::{Serialize, Deserialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum TableSeat {
    First,
    Second,
}

/// One table of a round. `second` is only empty on a bye.
#[derive(Debug, PartialEq, Eq, Serialize, Deserialize, Clone)]
pub struct Table {
    pub uuid: Uuid,
    pub tournament_id: Uuid,
    pub round: u32,
    pub number: u32,
    pub first: Uuid,
    pub second: Option<Uuid>,
}

impl Table {
    pub fn is_bye(&self) -> bool {
        self.second.is_none()
    }

    pub fn competitors(&self) -> impl Iterator<Item = Uuid> + '_ {
        std::iter::once(self.first).chain(self.second)
    }

    pub fn seat_of(&self, competitor_id: Uuid) -> Option<TableSeat> {
        if self.first == competitor_id {
            Some(TableSeat::First)
        }
        else if self.second == Some(competitor_id) {
            Some(TableSeat::Second)
        }
        else {
            None
        }
    }

    pub fn competitor_at(&self, seat: TableSeat) -> Option<Uuid> {
        match seat {
            TableSeat::First => Some(self.first),
            TableSeat::Second => self.second,
        }
    }
}
