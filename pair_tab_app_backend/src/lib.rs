pub mod actions;
pub mod views;
pub mod draw;
pub mod round_state;

pub use actions::*;
pub use views::*;
pub use round_state::RoundState;
