use std::collections::{HashMap, HashSet};

use itertools::Itertools;
use pair_tab_entities::prelude::*;
use serde::{Serialize, Deserialize};

use crate::round_state::RoundState;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SeatedCompetitor {
    pub uuid: Uuid,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RoundOverviewTable {
    pub table_id: Uuid,
    pub number: u32,
    pub first: SeatedCompetitor,
    pub second: Option<SeatedCompetitor>,
    pub has_result: bool,
}

/// The tables of one round in table order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RoundOverview {
    pub tournament_id: Uuid,
    pub round: u32,
    pub state: RoundState,
    pub tables: Vec<RoundOverviewTable>,
}

impl RoundOverview {
    pub async fn load<S>(store: &S, tournament_id: Uuid, round: u32) -> Result<RoundOverview, TabError> where S: TournamentStore + ?Sized {
        if round == 0 {
            return Err(ValidationError::InvalidRound.into());
        }
        let tables = store.get_round_tables(tournament_id, round).await?;
        let results = store.get_results(tournament_id).await?;
        let competitors = store.get_competitors(tournament_id).await?;
        let names = competitors.iter().map(|c| (c.uuid, c.name.as_str())).collect::<HashMap<_, _>>();

        let seated = |uuid: Uuid| -> Result<SeatedCompetitor, TabError> {
            let name = names.get(&uuid).ok_or(NotFoundError::Competitor(uuid))?;
            Ok(SeatedCompetitor { uuid, name: name.to_string() })
        };

        let tables_with_results = results.iter().map(|r| r.table_id).collect::<HashSet<_>>();
        let overview_tables = tables.iter().map(|table| -> Result<RoundOverviewTable, TabError> {
            Ok(RoundOverviewTable {
                table_id: table.uuid,
                number: table.number,
                first: seated(table.first)?,
                second: table.second.map(seated).transpose()?,
                has_result: tables_with_results.contains(&table.uuid),
            })
        }).collect::<Result<Vec<_>, TabError>>()?;

        Ok(RoundOverview {
            tournament_id,
            round,
            state: RoundState::from_tables(&tables, &results),
            tables: overview_tables.into_iter().sorted_by_key(|t| t.number).collect_vec(),
        })
    }
}
