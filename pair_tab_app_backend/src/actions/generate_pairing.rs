use async_trait::async_trait;
use chrono::Utc;
use itertools::Itertools;
use pair_tab_entities::prelude::*;
use rand::{rngs::StdRng, SeedableRng};
use serde::{Serialize, Deserialize};

use crate::draw::{draw_order_from_tab, random_pairing, rank_adjacent_pairing, DrawTable};
use crate::round_state::RoundState;

use super::ActionTrait;

/// Pairs the next round of a tournament. Round 1 is a random draw, every
/// later round pairs neighbours in the current standings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratePairingAction {
    pub tournament_id: Uuid,
    pub round: u32,
    /// Seed for the round 1 shuffle. Drawn from entropy if absent.
    #[serde(default)]
    pub seed: Option<u64>,
    /// Group recorded for a bye of a competitor without any earlier result.
    #[serde(default)]
    pub default_group: Option<GroupLabel>,
}

impl GeneratePairingAction {
    pub fn new(tournament_id: Uuid, round: u32) -> Self {
        GeneratePairingAction { tournament_id, round, seed: None, default_group: None }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    async fn check_round_can_be_paired<S>(&self, store: &S, tournament: &Tournament) -> Result<(), TabError> where S: TournamentStore + ?Sized {
        if self.round == 0 {
            return Err(ValidationError::InvalidRound.into());
        }
        if !tournament.has_round(self.round) {
            return Err(StateError::TournamentComplete { num_rounds: tournament.num_rounds }.into());
        }
        if !store.get_round_tables(self.tournament_id, self.round).await?.is_empty() {
            return Err(StateError::AlreadyPaired { round: self.round }.into());
        }
        if self.round > 1 {
            let previous_state = RoundState::load(store, self.tournament_id, self.round - 1).await?;
            if !previous_state.accepts_pairing_of_next_round() {
                return Err(StateError::RoundNotClosed { round: self.round - 1 }.into());
            }
        }
        Ok(())
    }
}

#[async_trait]
impl ActionTrait for GeneratePairingAction {
    type Output = Vec<Table>;

    async fn execute<S>(self, store: &S) -> Result<Vec<Table>, TabError> where S: TournamentStore + ?Sized {
        let tournament = store.get_tournament(self.tournament_id).await?;
        self.check_round_can_be_paired(store, &tournament).await?;

        let competitors = store.get_competitors(self.tournament_id).await?;
        let default_group = self.default_group.clone().unwrap_or_default();

        let (draw_tables, tab): (Vec<DrawTable>, Option<TabView>) = if self.round == 1 {
            let pool = competitors.iter().filter(|c| c.is_active).map(|c| c.uuid).collect_vec();
            let mut rng = match self.seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_entropy(),
            };
            (random_pairing(&pool, &mut rng)?, None)
        }
        else {
            let tab = TabView::load_from_tournament(store, self.tournament_id).await?;
            let order = draw_order_from_tab(&tab, &competitors);
            if !order.unranked.is_empty() {
                tracing::warn!(
                    "{} active competitors without results are placed at the bottom of the round {} draw",
                    order.unranked.len(),
                    self.round
                );
            }
            (rank_adjacent_pairing(&order.competitors())?, Some(tab))
        };

        let submitted_at = Utc::now();
        let tables = draw_tables.into_iter().map(|t| t.into_table(self.tournament_id, self.round)).collect_vec();
        let bye_results = tables.iter().filter(|t| t.is_bye()).map(|table| {
            let assigned = competitors.iter().find(|c| c.uuid == table.first).and_then(|c| c.assigned_group(self.round));
            let group = assigned
                .or_else(|| tab.as_ref().and_then(|tab| tab.group_of(table.first)))
                .cloned()
                .unwrap_or_else(|| default_group.clone());

            RawResult {
                uuid: Uuid::new_v4(),
                tournament_id: self.tournament_id,
                round: self.round,
                table_id: table.uuid,
                competitor_id: table.first,
                seat: TableSeat::First,
                round_points: BYE_ROUND_POINTS,
                group,
                submission_id: Uuid::new_v4(),
                submitted_at,
            }
        }).collect_vec();

        store.create_round_draw(RoundDraw {
            tournament_id: self.tournament_id,
            round: self.round,
            current_round: self.round.max(tournament.current_round),
            tables: tables.clone(),
            bye_results,
        }).await?;

        tracing::info!("Paired round {} of tournament {} on {} tables", self.round, self.tournament_id, tables.len());

        Ok(tables)
    }
}
