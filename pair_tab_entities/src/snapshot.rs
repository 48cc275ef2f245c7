use serde::{Serialize, Deserialize};

use crate::domain::{competitor::Competitor, result::RawResult, table::Table, tournament::Tournament};
use crate::error::{NotFoundError, TabError};

/// Full state of one tournament as held by [`crate::store::MemoryStore`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TournamentSnapshot {
    pub tournament: Tournament,
    #[serde(default)]
    pub competitors: Vec<Competitor>,
    #[serde(default)]
    pub tables: Vec<Table>,
    #[serde(default)]
    pub results: Vec<RawResult>,
}

impl TournamentSnapshot {
    pub fn new(tournament: Tournament) -> Self {
        TournamentSnapshot { tournament, competitors: vec![], tables: vec![], results: vec![] }
    }

    pub fn validate(&self) -> Result<(), TabError> {
        self.tournament.validate()?;
        for competitor in self.competitors.iter() {
            if competitor.tournament_id != self.tournament.uuid {
                return Err(NotFoundError::Tournament(competitor.tournament_id).into());
            }
            competitor.validate()?;
        }
        Ok(())
    }

    /// Parses and validates a snapshot file.
    pub fn from_json(content: &str) -> Result<Self, TabError> {
        let snapshot = serde_json::from_str::<TournamentSnapshot>(content).map_err(anyhow::Error::from)?;
        snapshot.validate()?;
        Ok(snapshot)
    }

    pub fn to_json(&self) -> Result<String, TabError> {
        Ok(serde_json::to_string_pretty(self).map_err(anyhow::Error::from)?)
    }
}
