use pair_tab_entities::prelude::*;
use serde::{Serialize, Deserialize};

mod base;
mod generate_pairing;
mod record_result;
mod clear_round;
mod update_group;

pub use self::base::ActionTrait;
pub use self::generate_pairing::GeneratePairingAction;
pub use self::record_result::RecordResultAction;
pub use self::clear_round::ClearRoundAction;
pub use self::update_group::UpdateGroupAction;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Action {
    GeneratePairing { action: GeneratePairingAction },
    RecordResult { action: RecordResultAction },
    ClearRound { action: ClearRoundAction },
    UpdateGroup { action: UpdateGroupAction },
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type")]
pub enum ActionOutcome {
    Paired { tables: Vec<Table> },
    Recorded { results: Vec<NormalizedResult> },
    Cleared { tables: Vec<Table> },
    GroupUpdated { num_tables: usize },
}

impl Action {
    pub async fn execute<S>(self, store: &S) -> Result<ActionOutcome, TabError> where S: TournamentStore + ?Sized {
        match self {
            Action::GeneratePairing { action } => action.execute(store).await.map(|tables| ActionOutcome::Paired { tables }),
            Action::RecordResult { action } => action.execute(store).await.map(|results| ActionOutcome::Recorded { results }),
            Action::ClearRound { action } => action.execute(store).await.map(|tables| ActionOutcome::Cleared { tables }),
            Action::UpdateGroup { action } => action.execute(store).await.map(|num_tables| ActionOutcome::GroupUpdated { num_tables }),
        }
    }
}
