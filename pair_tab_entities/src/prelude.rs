pub use crate::domain::competitor::{Competitor, GroupAssignment};
pub use crate::domain::group::GroupLabel;
pub use crate::domain::result::RawResult;
pub use crate::domain::table::{Table, TableSeat};
pub use crate::domain::tournament::Tournament;

pub use crate::error::{ErrorKind, NotFoundError, StateError, TabError, ValidationError};
pub use crate::normalize::{NormalizedResult, SeatPoints, TableResultInput, BYE_ROUND_POINTS};
pub use crate::snapshot::TournamentSnapshot;
pub use crate::store::{CompetitorDirectory, ResultStore, RoundDraw, TableStore, TournamentMetadata, TournamentStore};
pub use crate::tab::{AugmentedStandingsRow, AugmentedTabView, StandingsRow, TabView};

pub use uuid::Uuid;
