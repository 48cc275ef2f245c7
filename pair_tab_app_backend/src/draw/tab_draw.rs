use std::collections::HashSet;

use itertools::Itertools;
use pair_tab_entities::prelude::{Competitor, TabView, Uuid, ValidationError};

use super::datastructures::{pair_consecutive, DrawTable};

/// Order in which active competitors enter a ranked draw.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DrawOrder {
    /// Active competitors with results, best position first.
    pub ranked: Vec<Uuid>,
    /// Active competitors without any result, in directory order.
    pub unranked: Vec<Uuid>,
}

impl DrawOrder {
    pub fn competitors(&self) -> Vec<Uuid> {
        self.ranked.iter().chain(self.unranked.iter()).copied().collect_vec()
    }
}

pub fn draw_order_from_tab(tab: &TabView, competitors: &[Competitor]) -> DrawOrder {
    let active = competitors.iter().filter(|c| c.is_active).map(|c| c.uuid).collect::<HashSet<_>>();

    let ranked = tab.ranked_competitors().into_iter().filter(|c| active.contains(c)).collect_vec();
    let unranked = competitors.iter().filter(|c| c.is_active && tab.row_for(c.uuid).is_none()).map(|c| c.uuid).collect_vec();

    DrawOrder { ranked, unranked }
}

/// Pairs 1 with 2, 3 with 4 and so on. An odd field leaves the last
/// ranked competitor with a bye.
pub fn rank_adjacent_pairing(ranking: &[Uuid]) -> Result<Vec<DrawTable>, ValidationError> {
    if ranking.is_empty() {
        return Err(ValidationError::NoEligibleCompetitors);
    }
    Ok(pair_consecutive(ranking))
}
