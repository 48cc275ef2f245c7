pub mod domain;
pub mod error;
pub mod normalize;
pub mod tab;
pub mod store;
pub mod snapshot;
pub mod prelude;
pub mod mock;

pub use error::*;
pub use snapshot::TournamentSnapshot;
